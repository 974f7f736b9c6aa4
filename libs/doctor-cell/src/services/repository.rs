use crate::models::{CreateDoctorRequest, Doctor, UpdateDoctorRequest};

/// The call contract every doctor store honours. Lookups on a missing id
/// degrade to `None` instead of failing.
pub trait DoctorRepository {
    fn get_doctors(&self) -> Vec<Doctor>;

    fn get_doctor_by_id(&self, id: &str) -> Option<Doctor>;

    fn get_all_departments(&self) -> Vec<String>;

    fn get_doctors_by_department(&self, department: &str) -> Vec<Doctor>;

    fn get_active_doctors(&self) -> Vec<Doctor>;

    fn add_doctor(&mut self, request: CreateDoctorRequest) -> Doctor;

    fn update_doctor(&mut self, id: &str, patch: UpdateDoctorRequest) -> Option<Doctor>;

    /// Returns the removed record, or `None` when nothing matched.
    fn delete_doctor(&mut self, id: &str) -> Option<Doctor>;
}
