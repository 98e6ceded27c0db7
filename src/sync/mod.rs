mod display;
mod sync;
mod types;

pub use display::display_sync_report;
pub use sync::{model_filter, sync_models, SyncOptions};
pub use types::{ModelSyncResult, SyncError, SyncReport};
