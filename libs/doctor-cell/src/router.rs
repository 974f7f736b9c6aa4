use axum::{
    Router,
    routing::get,
};

use crate::handlers;
use crate::state::DoctorState;

pub fn doctor_routes(state: DoctorState) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors).post(handlers::create_doctor))
        .route("/active", get(handlers::list_active_doctors))
        .route("/departments", get(handlers::list_departments))
        .route(
            "/{doctor_id}",
            get(handlers::get_doctor)
                .patch(handlers::update_doctor)
                .delete(handlers::delete_doctor),
        )
        .with_state(state)
}
