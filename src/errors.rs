use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The model artifact could not be turned into a usable classifier.
/// Fatal: there is no fallback model and no retry.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Model artifact not found at {path}")]
    NotFound { path: PathBuf },

    #[error("IO error reading model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse model artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Model artifact {path} declares {actual} {kind} columns, expected {expected}")]
    Schema {
        path: PathBuf,
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Model artifact {path} is structurally invalid: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// The classifier rejected the feature row or produced a malformed
/// prediction. Surfaced to the caller unchanged; no partial result.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Model expects {expected} feature columns, got {actual}")]
    FeatureArity { expected: usize, actual: usize },

    #[error("Model returned no prediction rows")]
    EmptyPrediction,

    #[error("Prediction row has {actual} outputs, expected {expected}")]
    OutputArity { expected: usize, actual: usize },

    #[error("Tree node index {index} out of bounds for {len} nodes")]
    CorruptTree { index: usize, len: usize },
}

/// A classifier output fell outside the binary label domain. Indicates a
/// mismatched artifact, not a recoverable condition.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LabelError {
    #[error("Actuator class {0} outside binary domain {{0, 1}}")]
    UnknownClass(i64),
}

/// A sensor value violated its static bounds.
#[derive(Error, Debug, PartialEq)]
pub enum BoundsError {
    #[error("{field} value {value} out of range ({min} to {max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} value is not a finite number")]
    NotFinite { field: &'static str },
}
