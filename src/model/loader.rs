//! Model artifact resolution and process-lifetime caching.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::info;

use super::DecisionModel;
use crate::actuator::ACTUATOR_COUNT;
use crate::errors::ArtifactError;
use crate::features::FEATURE_COUNT;

/// Shared read-only handle to the loaded classifier.
pub type ModelHandle = Arc<DecisionModel>;

/// Caches the deserialized artifact for the process lifetime.
///
/// The first `get` reads and parses the artifact; every later call returns
/// the same handle without touching storage again. Racing first calls are
/// serialized by the cell, so at most one load ever runs.
pub struct ModelCache {
    path: PathBuf,
    cell: OnceCell<ModelHandle>,
}

impl ModelCache {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load-once accessor.
    ///
    /// Fails with `ArtifactError` if the artifact is missing or not a
    /// valid classifier; there is no fallback model and no retry.
    pub fn get(&self) -> Result<&ModelHandle, ArtifactError> {
        self.cell
            .get_or_try_init(|| load_artifact(&self.path).map(Arc::new))
    }
}

/// The one storage read: open, deserialize, and schema-check the artifact.
pub fn load_artifact(path: &Path) -> Result<DecisionModel, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let model: DecisionModel =
        serde_json::from_reader(reader).map_err(|source| ArtifactError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    // The trained column contract: exactly six inputs, exactly three
    // outputs, in the orders fixed at training time.
    if model.n_features() != FEATURE_COUNT {
        return Err(ArtifactError::Schema {
            path: path.to_path_buf(),
            kind: "input",
            expected: FEATURE_COUNT,
            actual: model.n_features(),
        });
    }
    if model.n_outputs() != ACTUATOR_COUNT {
        return Err(ArtifactError::Schema {
            path: path.to_path_buf(),
            kind: "output",
            expected: ACTUATOR_COUNT,
            actual: model.n_outputs(),
        });
    }
    model.validate().map_err(|reason| ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;

    info!(
        path = %path.display(),
        features = model.n_features(),
        outputs = model.n_outputs(),
        "Model artifact loaded"
    );
    Ok(model)
}
