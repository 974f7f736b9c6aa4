use std::collections::HashSet;

use tracing::debug;
use uuid::Uuid;

use crate::models::{CreateDoctorRequest, Doctor, UpdateDoctorRequest};
use crate::services::repository::DoctorRepository;

/// Department reported when the directory holds no doctors at all.
pub const FALLBACK_DEPARTMENT: &str = "General";

/// In-memory doctor store. Records keep insertion order and ids never change
/// once assigned.
#[derive(Debug, Clone, Default)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: Vec<Doctor>) -> Self {
        debug!("Initializing doctor directory with {} seeded records", seed.len());
        Self { doctors: seed }
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    fn generate_id(&self) -> String {
        loop {
            let id = format!("DOC-{}", Uuid::new_v4().simple());
            if !self.doctors.iter().any(|d| d.id == id) {
                return id;
            }
        }
    }
}

impl DoctorRepository for DoctorDirectory {
    fn get_doctors(&self) -> Vec<Doctor> {
        self.doctors.clone()
    }

    fn get_doctor_by_id(&self, id: &str) -> Option<Doctor> {
        self.doctors.iter().find(|d| d.id == id).cloned()
    }

    fn get_all_departments(&self) -> Vec<String> {
        if self.doctors.is_empty() {
            return vec![FALLBACK_DEPARTMENT.to_string()];
        }

        let mut seen = HashSet::new();
        self.doctors
            .iter()
            .filter(|d| seen.insert(d.department.as_str()))
            .map(|d| d.department.clone())
            .collect()
    }

    fn get_doctors_by_department(&self, department: &str) -> Vec<Doctor> {
        self.doctors
            .iter()
            .filter(|d| d.department == department)
            .cloned()
            .collect()
    }

    fn get_active_doctors(&self) -> Vec<Doctor> {
        self.doctors.iter().filter(|d| d.is_active()).cloned().collect()
    }

    fn add_doctor(&mut self, request: CreateDoctorRequest) -> Doctor {
        let doctor = Doctor {
            id: self.generate_id(),
            name: request.name,
            department: request.department,
            qualification: request.qualification,
            designation: request.designation,
            specialization: request.specialization,
            experience: request.experience,
            availability: request.availability,
            consultation_type: request.consultation_type,
            rating: 0.0,
            profile_photo: request.profile_photo,
            email: request.email,
            phone: request.phone,
            registration_no: request.registration_no,
        };

        debug!("Adding doctor {} to department {:?}", doctor.id, doctor.department);
        self.doctors.push(doctor.clone());
        doctor
    }

    fn update_doctor(&mut self, id: &str, patch: UpdateDoctorRequest) -> Option<Doctor> {
        let Some(doctor) = self.doctors.iter_mut().find(|d| d.id == id) else {
            debug!("Update skipped, doctor {} not found", id);
            return None;
        };

        doctor.apply_patch(patch);
        debug!("Doctor {} updated", id);
        Some(doctor.clone())
    }

    fn delete_doctor(&mut self, id: &str) -> Option<Doctor> {
        let position = self.doctors.iter().position(|d| d.id == id)?;
        debug!("Deleting doctor {}", id);
        Some(self.doctors.remove(position))
    }
}
