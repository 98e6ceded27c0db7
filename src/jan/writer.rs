use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::sync::SyncError;
use super::types::{JanModel, DESCRIPTOR_FILE};

/// Lays out one model under `target_dir`:
///
/// ```text
/// <target_dir>/<model_name>/<model_name>   hard link to the weights
/// <target_dir>/<model_name>/model.json
/// ```
///
/// The model directory must not exist yet. Nothing is cleaned up if a later
/// step fails.
pub fn link_model(
    target_dir: &Path,
    model_name: &str,
    weights: &Path,
    descriptor: &JanModel,
) -> Result<PathBuf, SyncError> {
    if !weights.is_file() {
        return Err(SyncError::WeightsNotFound(weights.to_path_buf()));
    }

    let model_dir = target_dir.join(model_name);
    fs::create_dir(&model_dir).map_err(|e| match e.kind() {
        std::io::ErrorKind::AlreadyExists => SyncError::DestinationExists(model_dir.clone()),
        _ => SyncError::io(&model_dir, e),
    })?;
    debug!("Created {}", model_dir.display());

    let link = model_dir.join(model_name);
    fs::hard_link(weights, &link).map_err(|e| SyncError::io(&link, e))?;

    let descriptor_path = model_dir.join(DESCRIPTOR_FILE);
    let content = serde_json::to_string_pretty(descriptor)?;
    fs::write(&descriptor_path, content).map_err(|e| SyncError::io(&descriptor_path, e))?;

    info!("Linked {} -> {}", weights.display(), link.display());
    Ok(model_dir)
}
