use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::modelfile::ParseError;

/// Everything that can go wrong while syncing
#[derive(Debug)]
pub enum SyncError {
    /// The `--model` pattern is not a valid regular expression
    InvalidFilter(regex::Error),
    /// Request to Ollama failed or returned a non-success status
    Http(reqwest::Error),
    /// The modelfile could not be parsed
    Parse(ParseError),
    /// `modified_at` is not an ISO-8601 timestamp
    Timestamp { value: String, source: chrono::ParseError },
    /// The path named by `FROM` is not a regular file
    WeightsNotFound(PathBuf),
    /// The model directory is already present in the Jan tree
    DestinationExists(PathBuf),
    /// Filesystem operation failed on the given path
    Io { path: PathBuf, source: std::io::Error },
    /// The descriptor could not be serialized
    Serialize(serde_json::Error),
}

impl SyncError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        SyncError::Io { path: path.to_path_buf(), source }
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SyncError::InvalidFilter(e) => write!(f, "Invalid model filter: {}", e),
            SyncError::Http(e) => write!(f, "Ollama request failed: {}", e),
            SyncError::Parse(e) => write!(f, "Modelfile error: {}", e),
            SyncError::Timestamp { value, source } => {
                write!(f, "Invalid modification time {:?}: {}", value, source)
            }
            SyncError::WeightsNotFound(path) => {
                write!(f, "Weights file not found: {}", path.display())
            }
            SyncError::DestinationExists(path) => {
                write!(f, "Destination already exists: {}", path.display())
            }
            SyncError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            SyncError::Serialize(e) => write!(f, "Failed to serialize model.json: {}", e),
        }
    }
}

impl Error for SyncError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SyncError::InvalidFilter(e) => Some(e),
            SyncError::Http(e) => Some(e),
            SyncError::Parse(e) => Some(e),
            SyncError::Timestamp { source, .. } => Some(source),
            SyncError::Io { source, .. } => Some(source),
            SyncError::Serialize(e) => Some(e),
            SyncError::WeightsNotFound(_) | SyncError::DestinationExists(_) => None,
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::Http(err)
    }
}

impl From<ParseError> for SyncError {
    fn from(err: ParseError) -> Self {
        SyncError::Parse(err)
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Serialize(err)
    }
}

impl From<regex::Error> for SyncError {
    fn from(err: regex::Error) -> Self {
        SyncError::InvalidFilter(err)
    }
}

/// Outcome for one Ollama model
#[derive(Debug)]
pub struct ModelSyncResult {
    /// Ollama tag name, e.g. `llama2:7b`
    pub tag_name: String,
    /// Directory name used in the Jan tree, e.g. `llama2-7b`
    pub model_name: String,
    /// Model directory on success
    pub outcome: Result<PathBuf, SyncError>,
}

impl ModelSyncResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Per-model results of one run, in listing order
#[derive(Debug, Default)]
pub struct SyncReport {
    pub results: Vec<ModelSyncResult>,
    /// Models listed by Ollama but excluded by the filter
    pub skipped: usize,
}

impl SyncReport {
    pub fn synced(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.synced()
    }

    pub fn get(&self, tag_name: &str) -> Option<&ModelSyncResult> {
        self.results.iter().find(|r| r.tag_name == tag_name)
    }
}
