//! Inference error types.

/// Errors that can occur when loading a model artifact or running inference.
#[derive(thiserror::Error, Debug)]
pub enum InferenceError {
    /// Failed to read an artifact file.
    #[error("Failed to read model file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse an artifact file.
    #[error("Failed to parse model file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The input vector length does not match the model's feature count.
    #[error("Expected {expected} features, got {got}")]
    FeatureMismatch { expected: usize, got: usize },

    /// `predict_proba` was called on a regression model.
    #[error("Model does not expose class probabilities")]
    NotAClassifier,

    /// The artifact's internal structure is inconsistent.
    #[error("Malformed model: {0}")]
    MalformedModel(String),

    /// A categorical input was not found in the category list.
    #[error("Unknown category: '{0}'")]
    UnknownCategory(String),

    /// A predicted class id has no entry in the label encoder.
    #[error("Encoded class id {0} is out of range")]
    UnknownClass(usize),
}

impl InferenceError {
    /// Creates an IO error with path context.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Creates a parse error with path context.
    pub fn parse(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse { path: path.into(), source }
    }
}
