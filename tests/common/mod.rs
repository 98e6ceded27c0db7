use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use ollama_jan_sync::config::JanDefaults;
use ollama_jan_sync::sync::SyncOptions;

/// Canned `/api/show` bodies keyed by tag name
type ShowBodies = Arc<HashMap<String, Value>>;

async fn show(
    State(bodies): State<ShowBodies>,
    Json(request): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let name = request.get("name").and_then(|v| v.as_str()).unwrap_or_default();
    bodies.get(name).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// A fake Ollama serving fixed tags and show responses
pub struct MockOllama {
    tags: Vec<Value>,
    shows: HashMap<String, Value>,
    list_status: StatusCode,
}

impl MockOllama {
    pub fn new() -> Self {
        Self {
            tags: Vec::new(),
            shows: HashMap::new(),
            list_status: StatusCode::OK,
        }
    }

    /// Adds a model whose modelfile points at `weights`
    pub fn model(self, tag: &str, modified_at: &str, weights: &Path) -> Self {
        let modelfile = format!(
            "# Modelfile generated by \"ollama show\"\n# FROM {tag}\n\nFROM {}\nTEMPLATE \"\"\"{{{{ .System }}}} {{{{ .Prompt }}}}\"\"\"\n",
            weights.display()
        );
        self.model_with_show(tag, modified_at, json!({
            "modelfile": modelfile,
            "parameters": "stop                           \"<|im_end|>\"\nnum_ctx                        4096",
            "template": "<|system|>{{ .System }}</s><|user|>{{ .Prompt }}</s>",
        }))
    }

    /// Adds a model with an arbitrary `/api/show` body
    pub fn model_with_show(mut self, tag: &str, modified_at: &str, show: Value) -> Self {
        self.tags.push(json!({
            "name": tag,
            "model": tag,
            "modified_at": modified_at,
            "size": 1024,
            "digest": "8934d96d3f08",
        }));
        self.shows.insert(tag.to_string(), show);
        self
    }

    /// Adds a listed model that `/api/show` answers with 404
    pub fn listed_only(mut self, tag: &str) -> Self {
        self.tags.push(json!({
            "name": tag,
            "modified_at": "2024-01-10T12:00:00Z",
            "size": 1,
        }));
        self
    }

    pub fn failing_list(mut self, status: StatusCode) -> Self {
        self.list_status = status;
        self
    }

    /// Serves on an ephemeral port and returns the base URL
    pub async fn spawn(self) -> String {
        let tags = json!({ "models": self.tags });
        let status = self.list_status;

        let app = Router::new()
            .route("/api/tags", get(move || {
                let tags = tags.clone();
                async move { (status, Json(tags)) }
            }))
            .route("/api/show", post(show))
            .with_state(Arc::new(self.shows));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }
}

/// Writes a small fake weights blob and returns its path
pub fn write_weights(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("GGUF weights for {}", name)).unwrap();
    path
}

pub fn options(host: String, target_dir: &Path) -> SyncOptions {
    SyncOptions {
        host,
        target_dir: target_dir.to_path_buf(),
        defaults: JanDefaults::default(),
    }
}
