use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use doctor_cell::Doctor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpdStatus {
    Waiting,
    InProgress,
    Completed,
    Cancelled,
}

impl OpdStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OpdStatus::Completed | OpdStatus::Cancelled)
    }
}

impl fmt::Display for OpdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OpdStatus::Waiting => "waiting",
            OpdStatus::InProgress => "in-progress",
            OpdStatus::Completed => "completed",
            OpdStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpdRegistration {
    pub id: String,
    pub patient_name: String,
    pub age: String,
    pub gender: String,
    pub contact: String,
    pub address: String,
    pub department: String,
    /// Weak reference into the doctor directory; the doctor may since have
    /// been deleted.
    pub doctor_id: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub token_number: u32,
    pub registration_time: DateTime<Utc>,
    pub status: OpdStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRegistrationRequest {
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub address: String,
    pub department: String,
    pub doctor_id: String,
    /// Walk-ins omit these and are booked for the moment they register.
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<NaiveTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OpdStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueueQuery {
    pub date: Option<NaiveDate>,
}

/// Result of narrowing the directory to one department.
#[derive(Debug, Clone, PartialEq)]
pub enum DoctorChoice {
    Available(Vec<Doctor>),
    NoDoctorsAvailable,
}

impl DoctorChoice {
    pub fn doctors(&self) -> &[Doctor] {
        match self {
            DoctorChoice::Available(doctors) => doctors,
            DoctorChoice::NoDoctorsAvailable => &[],
        }
    }
}
