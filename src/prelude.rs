//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! henkan crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use henkan::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a flow definition and convert it
//! let tree = load_flow_file(Path::new("path/to/daily.flow"))?;
//! let definitions = Converter::builder(tree, "migration").build().convert()?;
//!
//! for definition in definitions {
//!     println!("{}", definition.to_json()?);
//! }
//! # Ok(())
//! # }
//! ```

// Core conversion pipeline
pub use crate::converter::clock::{Clock, FixedClock, SystemClock};
pub use crate::converter::{Converter, ConverterBuilder};

// Flow model and loading
pub use crate::flow::{FlowNode, FlowTree, IntoFlowTree, NodeKind, load_flow_file};

// Output documents
pub use crate::document::{ProcessData, ProcessDefinition};

// Error types
pub use crate::error::{ConvertError, FlowConversionError, LoadError};

// Standard library re-exports commonly used with this crate
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
