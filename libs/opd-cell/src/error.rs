use chrono::NaiveDate;
use thiserror::Error;

use shared_models::error::AppError;

use crate::models::OpdStatus;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpdError {
    #[error("Department {0:?} has no doctors in the directory")]
    UnknownDepartment(String),

    #[error("Doctor not found: {0}")]
    DoctorNotFound(String),

    #[error("Doctor {doctor_id} does not practise in department {department:?}")]
    DoctorNotInDepartment { doctor_id: String, department: String },

    #[error("Registration not found: {0}")]
    RegistrationNotFound(String),

    #[error("Invalid registration status transition from {from} to {to}")]
    InvalidStatusTransition { from: OpdStatus, to: OpdStatus },

    #[error("No tokens left for {0}")]
    TokenSequenceExhausted(NaiveDate),
}

impl From<OpdError> for AppError {
    fn from(err: OpdError) -> Self {
        match err {
            OpdError::RegistrationNotFound(_) => AppError::NotFound(err.to_string()),
            OpdError::UnknownDepartment(_)
            | OpdError::DoctorNotFound(_)
            | OpdError::DoctorNotInDepartment { .. } => AppError::ValidationError(err.to_string()),
            OpdError::InvalidStatusTransition { .. } | OpdError::TokenSequenceExhausted(_) => {
                AppError::Conflict(err.to_string())
            }
        }
    }
}
