use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use doctor_cell::DoctorRepository;

use crate::error::OpdError;
use crate::models::{CreateRegistrationRequest, DoctorChoice, OpdRegistration, OpdStatus};

/// Read-only view over the directory used while a patient is being
/// registered. It never mutates doctors.
pub struct OpdAssignmentService<'a, R: DoctorRepository + ?Sized> {
    directory: &'a R,
}

impl<'a, R: DoctorRepository + ?Sized> OpdAssignmentService<'a, R> {
    pub fn new(directory: &'a R) -> Self {
        Self { directory }
    }

    pub fn departments(&self) -> Vec<String> {
        self.directory.get_all_departments()
    }

    pub fn doctor_choices(&self, department: &str) -> DoctorChoice {
        let doctors = self.directory.get_doctors_by_department(department);

        if doctors.is_empty() {
            debug!("No doctors available in department {:?}", department);
            DoctorChoice::NoDoctorsAvailable
        } else {
            DoctorChoice::Available(doctors)
        }
    }

    /// Check that the department exists and the doctor practises in it.
    pub fn validate(&self, request: &CreateRegistrationRequest) -> Result<(), OpdError> {
        if !self.departments().iter().any(|d| *d == request.department) {
            warn!("Registration rejected, unknown department {:?}", request.department);
            return Err(OpdError::UnknownDepartment(request.department.clone()));
        }

        let doctor = self
            .directory
            .get_doctor_by_id(&request.doctor_id)
            .ok_or_else(|| OpdError::DoctorNotFound(request.doctor_id.clone()))?;

        if doctor.department != request.department {
            warn!(
                "Registration rejected, doctor {} is in {:?} not {:?}",
                doctor.id, doctor.department, request.department
            );
            return Err(OpdError::DoctorNotInDepartment {
                doctor_id: doctor.id,
                department: request.department.clone(),
            });
        }

        Ok(())
    }

    /// Mint a waiting registration with the caller-supplied token.
    pub fn register(
        &self,
        request: CreateRegistrationRequest,
        token_number: u32,
        now: DateTime<Utc>,
    ) -> Result<OpdRegistration, OpdError> {
        self.validate(&request)?;

        let appointment_date = request.appointment_date.unwrap_or_else(|| now.date_naive());
        let appointment_time = request.appointment_time.unwrap_or_else(|| now.time());

        Ok(OpdRegistration {
            id: format!("OPD-{}", Uuid::new_v4().simple()),
            patient_name: request.patient_name,
            age: request.age,
            gender: request.gender,
            contact: request.contact,
            address: request.address,
            department: request.department,
            doctor_id: request.doctor_id,
            appointment_date,
            appointment_time,
            token_number,
            registration_time: now,
            status: OpdStatus::Waiting,
        })
    }
}
