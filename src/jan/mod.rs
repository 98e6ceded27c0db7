mod descriptor;
mod types;
mod writer;

pub use descriptor::{created_millis, display_name, merge_parameters, sanitize_model_name};
pub use types::{JanMetadata, JanModel, JanSettings, DESCRIPTOR_FILE};
pub use writer::link_model;
