use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use shared_models::error::AppError;

use crate::models::{CreateDoctorRequest, DoctorListQuery, UpdateDoctorRequest};
use crate::services::DoctorRepository;
use crate::state::DoctorState;

// ==============================================================================
// DIRECTORY QUERIES
// ==============================================================================

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<DoctorState>,
    Query(query): Query<DoctorListQuery>,
) -> Result<Json<Value>, AppError> {
    let directory = state.directory.read().await;

    let doctors = match query.department.as_deref() {
        Some(department) => directory.get_doctors_by_department(department),
        None => directory.get_doctors(),
    };

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn list_active_doctors(
    State(state): State<DoctorState>,
) -> Result<Json<Value>, AppError> {
    let doctors = state.directory.read().await.get_active_doctors();

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn list_departments(
    State(state): State<DoctorState>,
) -> Result<Json<Value>, AppError> {
    let departments = state.directory.read().await.get_all_departments();

    Ok(Json(json!({
        "departments": departments
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<DoctorState>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor = state
        .directory
        .read()
        .await
        .get_doctor_by_id(&doctor_id)
        .ok_or_else(|| AppError::NotFound(format!("Doctor {} not found", doctor_id)))?;

    Ok(Json(json!(doctor)))
}

// ==============================================================================
// DIRECTORY MUTATIONS
// ==============================================================================

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<DoctorState>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let doctor = state.directory.write().await.add_doctor(request);
    info!("Doctor {} added to {}", doctor.id, doctor.department);

    Ok((StatusCode::CREATED, Json(json!(doctor))))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(state): State<DoctorState>,
    Path(doctor_id): Path<String>,
    Json(patch): Json<UpdateDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let doctor = state
        .directory
        .write()
        .await
        .update_doctor(&doctor_id, patch)
        .ok_or_else(|| AppError::NotFound(format!("Doctor {} not found", doctor_id)))?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(state): State<DoctorState>,
    Path(doctor_id): Path<String>,
) -> StatusCode {
    if state.directory.write().await.delete_doctor(&doctor_id).is_some() {
        info!("Doctor {} removed from directory", doctor_id);
    }

    StatusCode::NO_CONTENT
}
