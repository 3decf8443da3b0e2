use ahash::AHashMap;

/// The complete, canonical definition of a workflow, ready for conversion.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default)]
pub struct FlowTree {
    /// Flow name; becomes the process definition name of the leftover document.
    pub name: String,
    /// Flow-wide configuration, including retry settings and global parameters.
    pub scope_config: AHashMap<String, String>,
    /// Top-level sibling nodes, some possibly nested flows.
    pub nodes: Vec<FlowNode>,
}

/// Defines a single step in a workflow's dependency graph.
#[derive(Debug, Clone)]
pub struct FlowNode {
    /// Unique identifier within the enclosing sibling scope.
    pub name: String,
    /// Names of sibling nodes this node waits on; empty means no dependencies.
    pub depends_on: Vec<String>,
    /// Configuration scoped to this node only; inherited entries are never stored here.
    pub local_config: AHashMap<String, String>,
    pub kind: NodeKind,
}

/// The two shapes a flow node can take.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// A runnable step carrying a shell command.
    Task { command: String },
    /// An embedded sub-graph, promoted to an independent flow during extraction.
    NestedFlow { nodes: Vec<FlowNode> },
}

impl FlowNode {
    /// Returns true if this node is a nested flow rather than a task.
    pub fn is_nested_flow(&self) -> bool {
        matches!(self.kind, NodeKind::NestedFlow { .. })
    }
}
