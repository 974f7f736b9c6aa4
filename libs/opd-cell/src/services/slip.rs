use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use doctor_cell::{format_doctor_info, DoctorRepository};

use crate::models::{OpdRegistration, OpdStatus};

pub const UNKNOWN_DOCTOR: &str = "Unknown Doctor";

/// Printable OPD slip. Pure presentation over a registration and whatever
/// the directory currently holds for its doctor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationSlip {
    pub registration_id: String,
    pub token_number: u32,
    pub patient_name: String,
    pub age: String,
    pub gender: String,
    pub contact: String,
    pub department: String,
    pub doctor: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub registration_time: DateTime<Utc>,
    pub status: OpdStatus,
}

pub fn render_slip<R: DoctorRepository + ?Sized>(
    registration: &OpdRegistration,
    directory: &R,
) -> RegistrationSlip {
    let doctor = directory
        .get_doctor_by_id(&registration.doctor_id)
        .map(|d| format_doctor_info(&d))
        .unwrap_or_else(|| UNKNOWN_DOCTOR.to_string());

    RegistrationSlip {
        registration_id: registration.id.clone(),
        token_number: registration.token_number,
        patient_name: registration.patient_name.clone(),
        age: registration.age.clone(),
        gender: registration.gender.clone(),
        contact: registration.contact.clone(),
        department: registration.department.clone(),
        doctor,
        appointment_date: registration.appointment_date,
        appointment_time: registration.appointment_time,
        registration_time: registration.registration_time,
        status: registration.status,
    }
}

impl fmt::Display for RegistrationSlip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OPD REGISTRATION SLIP")?;
        writeln!(f, "Token No.    : {}", self.token_number)?;
        writeln!(f, "Reg. ID      : {}", self.registration_id)?;
        writeln!(f, "Patient      : {} ({}, {})", self.patient_name, self.age, self.gender)?;
        writeln!(f, "Contact      : {}", self.contact)?;
        writeln!(f, "Department   : {}", self.department)?;
        writeln!(f, "Doctor       : {}", self.doctor)?;
        writeln!(
            f,
            "Appointment  : {} {}",
            self.appointment_date.format("%d-%m-%Y"),
            self.appointment_time.format("%H:%M")
        )?;
        writeln!(
            f,
            "Registered   : {}",
            self.registration_time.format("%d-%m-%Y %H:%M UTC")
        )?;
        write!(f, "Status       : {}", self.status)
    }
}
