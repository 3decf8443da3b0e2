use crate::document::ProcessDefinition;
use crate::error::ConvertError;
use crate::flow::FlowTree;

pub mod assemble;
pub mod clock;
pub mod config;
pub mod extract;
pub mod levels;
pub mod placeholder;
pub mod resource;

use clock::{Clock, SystemClock};

/// Drives the full conversion pipeline for one loaded flow tree: subflow
/// extraction, then level resolution, config resolution, resource extraction
/// and graph assembly for each resulting flat flow.
pub struct Converter {
    tree: FlowTree,
    project_name: String,
    clock: Box<dyn Clock>,
}

pub struct ConverterBuilder {
    tree: FlowTree,
    project_name: String,
    clock: Box<dyn Clock>,
}

impl ConverterBuilder {
    pub fn new(tree: FlowTree, project_name: &str) -> Self {
        Self {
            tree,
            project_name: project_name.to_string(),
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the wall clock used to name promoted subflows.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn build(self) -> Converter {
        Converter {
            tree: self.tree,
            project_name: self.project_name,
            clock: self.clock,
        }
    }
}

impl Converter {
    pub fn builder(tree: FlowTree, project_name: &str) -> ConverterBuilder {
        ConverterBuilder::new(tree, project_name)
    }

    /// Converts the flow into one process definition per extracted flow.
    ///
    /// Documents for promoted subflows come first, in original positional
    /// order; the document for the remaining top-level nodes, if any, comes
    /// last. Any error aborts the whole conversion with no partial output.
    pub fn convert(self) -> Result<Vec<ProcessDefinition>, ConvertError> {
        let trees = extract::extract(self.tree, self.clock.as_ref());

        let mut definitions = Vec::with_capacity(trees.len());
        for tree in &trees {
            definitions.push(assemble::assemble(tree, &self.project_name)?);
        }
        tracing::info!(
            "Conversion produced {} process definition(s) for project '{}'",
            definitions.len(),
            self.project_name
        );
        Ok(definitions)
    }
}
