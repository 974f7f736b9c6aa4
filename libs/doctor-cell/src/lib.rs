pub mod handlers;
pub mod router;
pub mod models;
pub mod seed;
pub mod services;
pub mod state;

// Re-export all models and services for external use
pub use models::*;
pub use services::*;
pub use seed::seed_doctors;
pub use state::{DoctorState, SharedDirectory};
pub use router::doctor_routes;
