use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use doctor_cell::{doctor_routes, DoctorState};
use opd_cell::{create_opd_router, OpdState};
use shared_config::AppConfig;

/// One directory per process, shared by the doctor and OPD routes.
pub fn create_router(config: Arc<AppConfig>) -> Router {
    let doctors = DoctorState::new(config.clone());
    let opd = OpdState::new(config, doctors.directory.clone());

    Router::new()
        .route("/", get(|| async { "OPD Clinic API is running!" }))
        .nest("/doctors", doctor_routes(doctors))
        .nest("/opd", create_opd_router(opd))
}
