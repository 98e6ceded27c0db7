use reqwest::Client;
use tracing::debug;

use super::types::{OllamaModel, ShowRequest, ShowResponse, TagsResponse};

/// Thin client over the two Ollama endpoints the sync needs.
///
/// Requests are not retried and use reqwest's default timeouts.
pub struct OllamaClient {
    client: Client,
    host: String,
}

impl OllamaClient {
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            host,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.host, endpoint)
    }

    /// Lists installed models. Non-success statuses are returned as errors.
    pub async fn list_models(&self) -> Result<Vec<OllamaModel>, reqwest::Error> {
        let url = self.url("/api/tags");
        debug!("GET {}", url);

        let tags = self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<TagsResponse>()
            .await?;

        Ok(tags.models)
    }

    /// Fetches modelfile, parameters and template for one tag.
    pub async fn show_model(&self, tag_name: &str) -> Result<ShowResponse, reqwest::Error> {
        let url = self.url("/api/show");
        debug!("POST {} name={}", url, tag_name);

        self.client
            .post(url)
            .json(&ShowRequest { name: tag_name })
            .send()
            .await?
            .error_for_status()?
            .json::<ShowResponse>()
            .await
    }
}
