use crate::models::{ConsultationType, Doctor};

#[allow(clippy::too_many_arguments)]
fn doctor(
    id: &str,
    name: &str,
    department: &str,
    qualification: &str,
    designation: &str,
    specialization: Option<&str>,
    experience: Option<u32>,
    availability: bool,
    consultation_type: ConsultationType,
) -> Doctor {
    let slug = id.to_lowercase();
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        department: department.to_string(),
        qualification: qualification.to_string(),
        designation: designation.to_string(),
        specialization: specialization.map(str::to_string),
        experience,
        availability,
        consultation_type,
        rating: 0.0,
        profile_photo: format!("/images/doctors/{}.jpg", slug),
        email: Some(format!("{}@hospital.example", slug)),
        phone: None,
        registration_no: Some(format!("PMC-{}", &id[4..])),
    }
}

/// Hard-coded directory the hospital starts with on every process start.
pub fn seed_doctors() -> Vec<Doctor> {
    vec![
        doctor(
            "DOC-1001",
            "Dr. Harpreet Kaur",
            "Medical Director",
            "MBBS, MD (Medicine)",
            "Medical Director",
            Some("Hospital Administration"),
            Some(24),
            true,
            ConsultationType::Offline,
        ),
        doctor(
            "DOC-1002",
            "Dr. Amandeep Sandhu",
            "Medicine",
            "MBBS, MD (Medicine)",
            "Consultant Physician",
            Some("Internal Medicine"),
            Some(12),
            true,
            ConsultationType::Offline,
        ),
        doctor(
            "DOC-1003",
            "Dr. Simranjeet Gill",
            "Obstetrics & Gynaecology",
            "MBBS, MS (Obs & Gynae)",
            "Consultant Gynaecologist",
            None,
            Some(9),
            true,
            ConsultationType::Online,
        ),
        doctor(
            "DOC-1004",
            "Dr. Jaspal Singh",
            "M.S. (Surgery)",
            "MBBS, M.S. (Surgery)",
            "Senior Consultant Surgeon",
            Some("General & Laparoscopic Surgery"),
            Some(18),
            true,
            ConsultationType::Offline,
        ),
        doctor(
            "DOC-1005",
            "Dr. Rupinder Brar",
            "Paediatrics",
            "MBBS, DCH",
            "Paediatrician",
            Some("Neonatology"),
            Some(7),
            false,
            ConsultationType::Offline,
        ),
        doctor(
            "DOC-1006",
            "Dr. Gurpreet Dhillon",
            "Orthopaedics",
            "MBBS, MS (Ortho)",
            "Consultant Orthopaedic Surgeon",
            None,
            None,
            true,
            ConsultationType::Online,
        ),
        doctor(
            "DOC-1007",
            "Dr. Navjot Singh",
            "M.S. (Surgery)",
            "MBBS, M.S. (Surgery)",
            "Consultant Surgeon",
            None,
            Some(5),
            false,
            ConsultationType::Offline,
        ),
    ]
}
