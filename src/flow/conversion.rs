use super::definition::FlowTree;
use crate::error::FlowConversionError;

/// A trait for custom data models that can be converted into a henkan `FlowTree`.
///
/// This is the primary extension point for making henkan format-agnostic. The
/// bundled loader understands Azkaban-style `.flow` YAML files; by implementing
/// this trait on your own configuration structs, you provide a translation layer
/// that allows the converter to process any other workflow definition format.
///
/// # Example
///
/// ```rust,no_run
/// use henkan::prelude::*;
/// use henkan::error::FlowConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyStep { name: String, script: String }
/// struct MyWorkflow { name: String, steps: Vec<MyStep> }
///
/// // 2. Implement `IntoFlowTree` for your top-level struct.
/// impl IntoFlowTree for MyWorkflow {
///     fn into_flow_tree(self) -> Result<FlowTree, FlowConversionError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|step| FlowNode {
///                 name: step.name,
///                 depends_on: vec![],
///                 local_config: Default::default(),
///                 kind: NodeKind::Task { command: step.script },
///             })
///             .collect();
///
///         Ok(FlowTree {
///             name: self.name,
///             scope_config: Default::default(),
///             nodes,
///         })
///     }
/// }
/// ```
pub trait IntoFlowTree {
    /// Consumes the object and converts it into a canonical flow tree.
    fn into_flow_tree(self) -> Result<FlowTree, FlowConversionError>;
}
