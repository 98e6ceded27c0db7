//! Links models installed in Ollama into Jan's model directory.
//!
//! Each model gets `<jan>/<name>/<name>` as a hard link to the Ollama weights
//! blob plus a `model.json` descriptor built from the Ollama modelfile.

pub mod config;
pub mod jan;
pub mod modelfile;
pub mod ollama;
pub mod sync;
