use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Descriptor filename inside each model directory
pub const DESCRIPTOR_FILE: &str = "model.json";

/// Runtime settings Jan reads from the descriptor
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JanSettings {
    pub prompt_template: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JanMetadata {
    pub author: String,
    pub tags: Vec<String>,
    /// Weights size in bytes as reported by Ollama
    pub size: u64,
}

/// Contents of `model.json`.
///
/// Field order is the order Jan writes them itself.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JanModel {
    pub object: String,
    pub version: u32,
    pub format: String,
    pub source_url: String,
    /// Ollama tag name
    pub id: String,
    /// Human readable name shown in Jan
    pub name: String,
    /// Epoch milliseconds
    pub created: i64,
    pub description: String,
    pub settings: JanSettings,
    pub parameters: Map<String, Value>,
    pub metadata: JanMetadata,
    pub engine: String,
}
