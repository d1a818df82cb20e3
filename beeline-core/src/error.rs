use crate::nn::Activation;
use thiserror::Error;

/// Custom error type for the BeeLine training core.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum BeeLineError {
    #[error("Input size mismatch: input layer expects {expected} values, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Output size mismatch: output layer has {expected} units, target has {actual} values")]
    OutputSizeMismatch { expected: usize, actual: usize },

    #[error("Class index {index} out of range for an output layer with {classes} units")]
    ClassIndexOutOfRange { index: usize, classes: usize },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Cross-entropy cost requires a softmax output layer, found {activation:?}")]
    CostActivationMismatch { activation: Activation },

    #[error("Numeric degeneracy in {operation}: {detail}")]
    NumericDegeneracy { operation: String, detail: String },

    #[error("Tag {tag} is not present in the tag table")]
    UnknownTag { tag: usize },

    #[error("No parameter at {0}")]
    UnknownParameter(String),
}
