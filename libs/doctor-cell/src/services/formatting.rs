use crate::models::Doctor;

pub fn format_doctor_info(doctor: &Doctor) -> String {
    format!("{} ({})", doctor.name, doctor.qualification)
}
