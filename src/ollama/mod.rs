mod client;
mod types;

pub use client::OllamaClient;
pub use types::{OllamaModel, ShowRequest, ShowResponse, TagsResponse};
