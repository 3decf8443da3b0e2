use thiserror::Error;

/// Errors that can occur while loading a flow definition file.
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    #[error("Unsupported flow file '{0}': expected a '.flow' suffix")]
    UnsupportedFile(String),

    #[error("Failed to read flow file '{path}': {message}")]
    Unreadable { path: String, message: String },

    #[error("Failed to parse flow file '{path}': {message}")]
    Malformed { path: String, message: String },

    #[error("Flow file '{0}' contains no node definitions")]
    EmptyDefinition(String),

    #[error(transparent)]
    Conversion(#[from] FlowConversionError),
}

/// Errors that can occur when converting a custom input format into a `FlowTree`.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Invalid flow definition: {0}")]
    ValidationError(String),
}

/// Errors that can occur during the flow-to-task-graph conversion phase.
#[derive(Error, Debug, Clone)]
pub enum ConvertError {
    #[error("Node '{node}' depends on '{reference}', which has no matching sibling in its flow")]
    UndefinedDependency { node: String, reference: String },

    #[error("Dependency cycle detected through node '{node}'")]
    CyclicDependency { node: String },

    #[error("Invalid retry backoff '{value}': expected an integer millisecond count")]
    InvalidRetryConfig { value: String },

    #[error("Node '{node}' is still a nested flow; extraction must run before assembly")]
    UnexpandedSubflow { node: String },

    #[error("Failed to encode process definition: {0}")]
    Serialization(String),
}
