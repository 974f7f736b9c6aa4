use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::handlers::{
    create_registration,
    get_department_doctors,
    get_doctor_queue,
    get_registration,
    get_registration_slip,
    list_departments,
    list_registrations,
    update_registration_status,
};
use crate::state::OpdState;

pub fn create_opd_router(state: OpdState) -> Router {
    Router::new()
        .route("/departments", get(list_departments))
        .route("/departments/{department}/doctors", get(get_department_doctors))
        .route("/registrations", post(create_registration).get(list_registrations))
        .route("/registrations/{registration_id}", get(get_registration))
        .route("/registrations/{registration_id}/slip", get(get_registration_slip))
        .route("/registrations/{registration_id}/status", patch(update_registration_status))
        .route("/queue/{doctor_id}", get(get_doctor_queue))
        .with_state(state)
}
