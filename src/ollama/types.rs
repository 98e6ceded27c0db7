use serde::{Deserialize, Serialize};

/// One installed model as listed by `GET /api/tags`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OllamaModel {
    /// Tag name in `name:tag` form
    pub name: String,
    /// ISO-8601 modification time
    pub modified_at: String,
    /// Size of the weights in bytes
    pub size: u64,
}

/// Body of `GET /api/tags`
#[derive(Debug, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<OllamaModel>,
}

/// Body sent to `POST /api/show`
#[derive(Debug, Serialize)]
pub struct ShowRequest<'a> {
    pub name: &'a str,
}

/// Body of `POST /api/show`.
///
/// Ollama leaves out `parameters` and `template` for models that define none.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ShowResponse {
    #[serde(default)]
    pub modelfile: String,
    #[serde(default)]
    pub parameters: String,
    #[serde(default)]
    pub template: String,
}
