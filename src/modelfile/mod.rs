mod parser;
mod types;

// Re-export from types
pub use types::{ModelParameters, ParseError, PARAMETER_MAP};
// Re-export from parser
pub use parser::{parse_model_path, parse_parameters, transform_template};
