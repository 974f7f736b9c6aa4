use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use doctor_cell::DoctorRepository;

use crate::error::OpdError;
use crate::models::{CreateRegistrationRequest, OpdRegistration, OpdStatus};
use crate::services::assignment::OpdAssignmentService;
use crate::services::lifecycle::validate_status_transition;
use crate::services::token::TokenDispenser;

/// Front desk of the outpatient department: owns every registration made in
/// this process along with the token sequence.
#[derive(Debug, Clone, Default)]
pub struct OpdDesk {
    registrations: Vec<OpdRegistration>,
    tokens: TokenDispenser,
}

impl OpdDesk {
    pub fn new(token_start: u32) -> Self {
        Self {
            registrations: Vec::new(),
            tokens: TokenDispenser::new(token_start),
        }
    }

    /// Register a patient against `directory`. A rejected request consumes
    /// no token.
    pub fn admit<R: DoctorRepository + ?Sized>(
        &mut self,
        directory: &R,
        request: CreateRegistrationRequest,
        now: DateTime<Utc>,
    ) -> Result<OpdRegistration, OpdError> {
        let service = OpdAssignmentService::new(directory);
        service.validate(&request)?;

        let date = request.appointment_date.unwrap_or_else(|| now.date_naive());
        let token_number = self.tokens.next_token(date)?;
        let registration = service.register(request, token_number, now)?;

        info!(
            "Registered {} with token {} for doctor {} on {}",
            registration.id, registration.token_number, registration.doctor_id, date
        );
        self.registrations.push(registration.clone());
        Ok(registration)
    }

    pub fn get(&self, id: &str) -> Option<&OpdRegistration> {
        self.registrations.iter().find(|r| r.id == id)
    }

    pub fn list(&self) -> &[OpdRegistration] {
        &self.registrations
    }

    pub fn tokens(&self) -> &TokenDispenser {
        &self.tokens
    }

    /// Patients still to be seen by `doctor_id` on `date`, in token order.
    pub fn queue_for_doctor(&self, doctor_id: &str, date: NaiveDate) -> Vec<OpdRegistration> {
        self.open_queue(|r| r.doctor_id == doctor_id && r.appointment_date == date)
    }

    pub fn queue_for_department(&self, department: &str, date: NaiveDate) -> Vec<OpdRegistration> {
        self.open_queue(|r| r.department == department && r.appointment_date == date)
    }

    fn open_queue<F>(&self, predicate: F) -> Vec<OpdRegistration>
    where
        F: Fn(&OpdRegistration) -> bool,
    {
        let mut queue: Vec<OpdRegistration> = self
            .registrations
            .iter()
            .filter(|r| !r.status.is_terminal() && predicate(r))
            .cloned()
            .collect();
        queue.sort_by_key(|r| r.token_number);
        queue
    }

    pub fn update_status(&mut self, id: &str, status: OpdStatus) -> Result<OpdRegistration, OpdError> {
        let registration = self
            .registrations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| OpdError::RegistrationNotFound(id.to_string()))?;

        validate_status_transition(registration.status, status)?;
        registration.status = status;

        info!("Registration {} is now {}", id, status);
        Ok(registration.clone())
    }
}
