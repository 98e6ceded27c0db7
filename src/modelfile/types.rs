use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use serde_json::{Map, Value};

/// Ollama parameter names and the Jan keys they become.
///
/// Ollama: https://github.com/ollama/ollama/blob/main/docs/modelfile.md
pub const PARAMETER_MAP: &[(&str, &str)] = &[
    ("num_gpu", "ngl"),
    ("num_ctx", "ctx_len"),
    ("num_thread", "cpu_threads"),
    ("temperature", "temperature"),
    ("top_p", "top_p"),
    ("num_predict", "max_tokens"),
    ("stop", "stop"),
];

/// Errors raised while reading a modelfile
#[derive(Debug, PartialEq)]
pub enum ParseError {
    /// The modelfile has no line starting with `FROM `
    MissingFrom,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::MissingFrom => write!(f, "modelfile has no FROM line"),
        }
    }
}

impl Error for ParseError {}

/// Parameters recognised in a modelfile, already renamed to Jan keys.
///
/// Values stay as the raw strings Ollama reported. `stop` may repeat and keeps
/// its order of appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelParameters {
    values: BTreeMap<String, String>,
    stop: Vec<String>,
}

impl ModelParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one Ollama `key value` pair. Returns false for unknown keys,
    /// which are dropped.
    pub fn insert(&mut self, key: &str, value: &str) -> bool {
        if key == "stop" {
            self.stop.push(value.to_string());
            return true;
        }

        match PARAMETER_MAP.iter().find(|(ollama_key, _)| *ollama_key == key) {
            Some((_, jan_key)) => {
                self.values.insert(jan_key.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    /// Looks up a value by its Jan key
    pub fn get(&self, jan_key: &str) -> Option<&str> {
        self.values.get(jan_key).map(String::as_str)
    }

    pub fn stop(&self) -> &[String] {
        &self.stop
    }

    /// JSON object form; always carries a `stop` array.
    pub fn to_json(&self) -> Map<String, Value> {
        let mut map: Map<String, Value> = self.values
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        map.insert(
            "stop".to_string(),
            Value::Array(self.stop.iter().cloned().map(Value::String).collect()),
        );
        map
    }
}
