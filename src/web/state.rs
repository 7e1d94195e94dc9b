use std::sync::Arc;

use crate::telemetry::ExportDir;
use crate::twins::Storage;

use super::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub storage: Arc<Storage>,
    pub exports: Arc<ExportDir>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let storage = Storage::new(config.twins_dir());
        let exports = ExportDir::new(config.exports_dir());
        AppState {
            config: Arc::new(config),
            storage: Arc::new(storage),
            exports: Arc::new(exports),
        }
    }
}
