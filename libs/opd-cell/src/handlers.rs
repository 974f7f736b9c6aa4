use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{CreateRegistrationRequest, DoctorChoice, QueueQuery, UpdateStatusRequest};
use crate::services::{render_slip, OpdAssignmentService};
use crate::state::OpdState;

// Locks are always taken directory first, then desk.

#[axum::debug_handler]
pub async fn list_departments(
    State(state): State<OpdState>,
) -> Result<Json<Value>, AppError> {
    let directory = state.directory.read().await;
    let departments = OpdAssignmentService::new(&*directory).departments();

    Ok(Json(json!({
        "departments": departments
    })))
}

#[axum::debug_handler]
pub async fn get_department_doctors(
    State(state): State<OpdState>,
    Path(department): Path<String>,
) -> Result<Json<Value>, AppError> {
    let directory = state.directory.read().await;

    let body = match OpdAssignmentService::new(&*directory).doctor_choices(&department) {
        DoctorChoice::Available(doctors) => json!({
            "department": department,
            "available": true,
            "doctors": doctors
        }),
        DoctorChoice::NoDoctorsAvailable => json!({
            "department": department,
            "available": false,
            "message": "No doctors available"
        }),
    };

    Ok(Json(body))
}

#[axum::debug_handler]
pub async fn create_registration(
    State(state): State<OpdState>,
    Json(request): Json<CreateRegistrationRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let directory = state.directory.read().await;
    let mut desk = state.desk.write().await;

    let registration = desk.admit(&*directory, request, Utc::now())?;
    let slip = render_slip(&registration, &*directory);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "registration": registration,
            "slip": slip
        })),
    ))
}

#[axum::debug_handler]
pub async fn list_registrations(
    State(state): State<OpdState>,
) -> Result<Json<Value>, AppError> {
    let desk = state.desk.read().await;
    let registrations = desk.list();

    Ok(Json(json!({
        "registrations": registrations,
        "total": registrations.len()
    })))
}

#[axum::debug_handler]
pub async fn get_registration(
    State(state): State<OpdState>,
    Path(registration_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let desk = state.desk.read().await;
    let registration = desk
        .get(&registration_id)
        .ok_or_else(|| AppError::NotFound(format!("Registration {} not found", registration_id)))?;

    Ok(Json(json!(registration)))
}

#[axum::debug_handler]
pub async fn get_registration_slip(
    State(state): State<OpdState>,
    Path(registration_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let directory = state.directory.read().await;
    let desk = state.desk.read().await;

    let registration = desk
        .get(&registration_id)
        .ok_or_else(|| AppError::NotFound(format!("Registration {} not found", registration_id)))?;
    let slip = render_slip(registration, &*directory);

    Ok(Json(json!({
        "slip": slip,
        "text": slip.to_string()
    })))
}

#[axum::debug_handler]
pub async fn update_registration_status(
    State(state): State<OpdState>,
    Path(registration_id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let registration = state
        .desk
        .write()
        .await
        .update_status(&registration_id, request.status)?;

    Ok(Json(json!(registration)))
}

#[axum::debug_handler]
pub async fn get_doctor_queue(
    State(state): State<OpdState>,
    Path(doctor_id): Path<String>,
    Query(query): Query<QueueQuery>,
) -> Result<Json<Value>, AppError> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let queue = state.desk.read().await.queue_for_doctor(&doctor_id, date);

    Ok(Json(json!({
        "doctor_id": doctor_id,
        "date": date,
        "queue": queue,
        "waiting": queue.len()
    })))
}
