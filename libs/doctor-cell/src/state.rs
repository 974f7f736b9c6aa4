use std::sync::Arc;

use tokio::sync::RwLock;

use shared_config::AppConfig;

use crate::seed::seed_doctors;
use crate::services::DoctorDirectory;

pub type SharedDirectory = Arc<RwLock<DoctorDirectory>>;

#[derive(Clone)]
pub struct DoctorState {
    pub config: Arc<AppConfig>,
    pub directory: SharedDirectory,
}

impl DoctorState {
    /// Build the per-process directory, seeded unless the config disables it.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let directory = if config.seed_doctors {
            DoctorDirectory::with_seed(seed_doctors())
        } else {
            DoctorDirectory::new()
        };

        Self {
            config,
            directory: Arc::new(RwLock::new(directory)),
        }
    }
}
