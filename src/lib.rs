//! # Henkan - Flow-Graph Conversion Engine
//!
//! **Henkan** translates externally authored, possibly-nested workflow
//! definitions (a dependency graph of named steps, each carrying free-form
//! configuration and a shell command) into the normalized task-graph documents
//! consumed by a downstream workflow scheduler.
//!
//! ## Core Workflow
//!
//! The engine operates on a canonical internal model of a flow definition.
//! The primary workflow is:
//!
//! 1.  **Load Your Flow**: Parse an Azkaban-style `.flow` YAML file with the bundled
//!     loader, or implement the `IntoFlowTree` trait to translate any custom format
//!     into henkan's `FlowTree`.
//! 2.  **Convert**: Use the `Converter::builder` to create a converter for the tree.
//!     It splits nested subflows into independent flows, resolves dependency depths,
//!     merges scoped configuration, extracts resource references from task commands,
//!     and assembles one scheduler document per flow.
//! 3.  **Emit**: Serialize each resulting `ProcessDefinition` to its JSON wire form.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use henkan::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Load the flow definition; the flow takes its name from the file stem.
//!     let tree = load_flow_file(Path::new("data/daily.flow"))?;
//!
//!     // Convert it. Each nested subflow becomes its own definition, and the
//!     // remaining top-level tasks become one more.
//!     let converter = Converter::builder(tree, "migration").build();
//!     let definitions = converter.convert()?;
//!
//!     for definition in &definitions {
//!         println!("{}", definition.to_json()?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Conversion is a pure, synchronous transform: it performs no I/O after the
//! load step, and the only injected state is the [`converter::clock::Clock`]
//! used to name promoted subflows.

pub mod converter;
pub mod document;
pub mod error;
pub mod flow;
pub mod prelude;
