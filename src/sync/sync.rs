use std::path::{Path, PathBuf};
use std::time::Duration;
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;
use tracing::{debug, error, info};

use crate::config::{JanDefaults, Settings};
use crate::jan::{created_millis, link_model, merge_parameters, sanitize_model_name, JanModel};
use crate::modelfile::{parse_model_path, parse_parameters, transform_template};
use crate::ollama::{OllamaClient, OllamaModel};
use super::types::{ModelSyncResult, SyncError, SyncReport};

/// Inputs for one sync run
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Ollama base URL
    pub host: String,
    /// Jan models directory
    pub target_dir: PathBuf,
    /// Parameters every descriptor starts from
    pub defaults: JanDefaults,
}

impl SyncOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            host: settings.ollama.host.clone(),
            target_dir: settings.jan.directory.clone(),
            defaults: settings.jan.defaults.clone(),
        }
    }
}

/// Compiles the tag filter. An empty pattern matches every model.
pub fn model_filter(pattern: &str) -> Result<Option<Regex>, SyncError> {
    if pattern.is_empty() {
        return Ok(None);
    }
    Ok(Some(Regex::new(pattern)?))
}

/// Syncs every installed model whose tag matches `filter` (regex search).
///
/// Failing to list models aborts the run. Any failure after that is recorded
/// for that model only and the run moves on.
pub async fn sync_models(options: &SyncOptions, filter: &str) -> Result<SyncReport, SyncError> {
    let filter = model_filter(filter)?;
    let client = OllamaClient::new(options.host.clone());

    info!("Listing models from {}", client.host());
    let models = client.list_models().await?;
    info!("Ollama reports {} installed model(s)", models.len());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{prefix:.bold.dim} {spinner} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    );
    pb.enable_steady_tick(Duration::from_millis(120));

    let mut report = SyncReport::default();
    let total = models.len();

    for (i, model) in models.iter().enumerate() {
        if let Some(re) = &filter {
            if !re.is_match(&model.name) {
                debug!("Skipping {} (filtered out)", model.name);
                report.skipped += 1;
                continue;
            }
        }

        let model_name = sanitize_model_name(&model.name);
        pb.set_message(format!("Syncing {}... ({}/{})", model.name, i + 1, total));

        let outcome = sync_model(&client, options, model, &model_name).await;
        match &outcome {
            Ok(dir) => info!("Synced {} into {}", model.name, dir.display()),
            Err(e) => {
                error!("Failed to sync {}: {}", model.name, e);
                pb.suspend(|| println!("{}: {}", model.name, e));
            }
        }

        report.results.push(ModelSyncResult {
            tag_name: model.name.clone(),
            model_name,
            outcome,
        });
    }

    pb.disable_steady_tick();
    pb.finish_and_clear();

    info!(
        "Sync complete: {} synced, {} failed, {} skipped",
        report.synced(), report.failed(), report.skipped
    );
    Ok(report)
}

async fn sync_model(
    client: &OllamaClient,
    options: &SyncOptions,
    model: &OllamaModel,
    model_name: &str,
) -> Result<PathBuf, SyncError> {
    let info = client.show_model(&model.name).await?;

    let weights = parse_model_path(&info.modelfile)?;
    let parameters = parse_parameters(&info.parameters);
    let template = transform_template(&info.template);

    let created = created_millis(&model.modified_at).map_err(|source| SyncError::Timestamp {
        value: model.modified_at.clone(),
        source,
    })?;
    let parameters = merge_parameters(&options.defaults, &parameters)?;
    let descriptor = JanModel::new(model, model_name, created, template, parameters);

    link_model(&options.target_dir, model_name, Path::new(&weights), &descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches_all() {
        assert!(model_filter("").unwrap().is_none());
    }

    #[test]
    fn test_filter_is_a_search() {
        let re = model_filter("llama").unwrap().unwrap();
        assert!(re.is_match("llama2:7b"));
        assert!(re.is_match("tinyllama:latest"));
        assert!(!re.is_match("mistral:latest"));

        let anchored = model_filter("^llama").unwrap().unwrap();
        assert!(!anchored.is_match("tinyllama:latest"));
    }

    #[test]
    fn test_invalid_filter() {
        assert!(matches!(model_filter("llama("), Err(SyncError::InvalidFilter(_))));
    }
}
