use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde_json::{Map, Value};

use crate::config::JanDefaults;
use crate::modelfile::ModelParameters;
use crate::ollama::OllamaModel;
use super::types::{JanMetadata, JanModel, JanSettings};

/// Directory-safe model name: `llama2:7b` becomes `llama2-7b`.
pub fn sanitize_model_name(tag_name: &str) -> String {
    tag_name.replace(':', "-")
}

/// Title-cases each run of letters and turns hyphens into spaces,
/// e.g. `llama2-7b` becomes `Llama2 7B`.
pub fn display_name(model_name: &str) -> String {
    let mut out = String::with_capacity(model_name.len());
    let mut prev_is_letter = false;

    for c in model_name.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(if c == '-' { ' ' } else { c });
            prev_is_letter = false;
        }
    }

    out
}

/// Converts Ollama's `modified_at` to epoch milliseconds, truncating.
///
/// Timestamps without an offset are taken as local time.
pub fn created_millis(modified_at: &str) -> Result<i64, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(modified_at) {
        Ok(timestamp) => Ok(timestamp.timestamp_millis()),
        Err(err) => {
            let naive = NaiveDateTime::parse_from_str(modified_at, "%Y-%m-%dT%H:%M:%S%.f")
                .map_err(|_| err)?;
            Ok(Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|timestamp| timestamp.timestamp_millis())
                .unwrap_or_else(|| naive.and_utc().timestamp_millis()))
        }
    }
}

/// Defaults overlaid with parsed parameters; parsed values win.
pub fn merge_parameters(
    defaults: &JanDefaults,
    parsed: &ModelParameters,
) -> Result<Map<String, Value>, serde_json::Error> {
    let mut merged = match serde_json::to_value(defaults)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    merged.extend(parsed.to_json());
    Ok(merged)
}

impl JanModel {
    /// Builds the descriptor for one Ollama model.
    pub fn new(
        model: &OllamaModel,
        model_name: &str,
        created: i64,
        prompt_template: String,
        parameters: Map<String, Value>,
    ) -> Self {
        Self {
            object: "model".to_string(),
            version: 1,
            format: "gguf".to_string(),
            source_url: "N/A".to_string(),
            id: model.name.clone(),
            name: display_name(model_name),
            created,
            description: format!("{} - linked from Ollama", model_name),
            settings: JanSettings { prompt_template },
            parameters,
            metadata: JanMetadata {
                author: "User".to_string(),
                tags: Vec::new(),
                size: model.size,
            },
            engine: "nitro".to_string(),
        }
    }
}
