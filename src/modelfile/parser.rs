use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::types::{ModelParameters, ParseError};

/// First line of the modelfile starting with `FROM `
static FROM_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^FROM (?P<path>.+)").unwrap()
});

/// `key value` lines of the parameters text.
///
/// The key class is a single lowercase letter, so Ollama's multi-letter keys
/// (`num_ctx`, `stop`, ...) never match and the parsed set stays empty. Kept
/// as-is until the intended key grammar is confirmed.
static PARAMETER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?P<key>[a-z])\s+(?P<value>.*)").unwrap()
});

/// Extracts the weights path from a modelfile.
pub fn parse_model_path(modelfile: &str) -> Result<String, ParseError> {
    FROM_LINE
        .captures(modelfile)
        .map(|caps| caps["path"].to_string())
        .ok_or(ParseError::MissingFrom)
}

/// Parses Ollama's parameters text into Jan parameter names.
pub fn parse_parameters(parameters: &str) -> ModelParameters {
    let mut params = ModelParameters::new();

    for caps in PARAMETER_LINE.captures_iter(parameters) {
        let key = &caps["key"];
        if !params.insert(key, &caps["value"]) {
            debug!("Ignoring unsupported parameter: {}", key);
        }
    }

    params
}

/// Rewrites the two Go-template placeholders Jan understands.
///
/// Anything else, including `{{ if .System }}` blocks, is left as written.
pub fn transform_template(template: &str) -> String {
    template
        .replace("{{ .System }}", "{system_prompt}")
        .replace("{{ .Prompt }}", "{prompt}")
}
