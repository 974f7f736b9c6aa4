use std::sync::Arc;

use tokio::sync::RwLock;

use doctor_cell::SharedDirectory;
use shared_config::AppConfig;

use crate::services::OpdDesk;

#[derive(Clone)]
pub struct OpdState {
    pub config: Arc<AppConfig>,
    pub directory: SharedDirectory,
    pub desk: Arc<RwLock<OpdDesk>>,
}

impl OpdState {
    /// The desk reads doctors from the same directory the doctor routes
    /// mutate.
    pub fn new(config: Arc<AppConfig>, directory: SharedDirectory) -> Self {
        let desk = OpdDesk::new(config.opd_token_start);

        Self {
            config,
            directory,
            desk: Arc::new(RwLock::new(desk)),
        }
    }
}
