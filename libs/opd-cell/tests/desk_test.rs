use assert_matches::assert_matches;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use doctor_cell::{seed_doctors, DoctorDirectory, DoctorRepository};
use opd_cell::*;

fn seeded() -> DoctorDirectory {
    DoctorDirectory::with_seed(seed_doctors())
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 9, 8, 15, 0).unwrap()
}

fn request(department: &str, doctor_id: &str) -> CreateRegistrationRequest {
    CreateRegistrationRequest {
        patient_name: "Baljit Kaur".to_string(),
        age: "52".to_string(),
        gender: "Female".to_string(),
        contact: "+91 98140 12345".to_string(),
        address: "Civil Lines, Bathinda".to_string(),
        department: department.to_string(),
        doctor_id: doctor_id.to_string(),
        appointment_date: Some(date()),
        appointment_time: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
    }
}

// ==============================================================================
// ASSIGNMENT FLOW
// ==============================================================================

#[test]
fn test_doctor_choices_for_department() {
    let directory = seeded();
    let service = OpdAssignmentService::new(&directory);

    let choice = service.doctor_choices("M.S. (Surgery)");
    assert_matches!(choice, DoctorChoice::Available(ref doctors) if doctors.len() == 2);

    let ids: Vec<&str> = choice.doctors().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["DOC-1004", "DOC-1007"]);
}

#[test]
fn test_empty_department_reports_no_doctors() {
    let directory = DoctorDirectory::new();
    let service = OpdAssignmentService::new(&directory);

    assert_eq!(service.departments(), vec!["General".to_string()]);
    assert_eq!(service.doctor_choices("General"), DoctorChoice::NoDoctorsAvailable);
    assert!(service.doctor_choices("General").doctors().is_empty());
}

#[test]
fn test_register_mints_waiting_registration() {
    let directory = seeded();
    let service = OpdAssignmentService::new(&directory);

    let registration = service
        .register(request("M.S. (Surgery)", "DOC-1004"), 7, now())
        .expect("valid registration");

    assert!(registration.id.starts_with("OPD-"));
    assert_eq!(registration.token_number, 7);
    assert_eq!(registration.status, OpdStatus::Waiting);
    assert_eq!(registration.registration_time, now());
    assert_eq!(registration.doctor_id, "DOC-1004");
}

#[test]
fn test_walk_in_defaults_to_registration_instant() {
    let directory = seeded();
    let service = OpdAssignmentService::new(&directory);

    let registration = service
        .register(
            CreateRegistrationRequest {
                appointment_date: None,
                appointment_time: None,
                ..request("Medicine", "DOC-1002")
            },
            1,
            now(),
        )
        .unwrap();

    assert_eq!(registration.appointment_date, date());
    assert_eq!(registration.appointment_time, NaiveTime::from_hms_opt(8, 15, 0).unwrap());
}

#[test]
fn test_register_rejects_unknown_department() {
    let directory = seeded();
    let service = OpdAssignmentService::new(&directory);

    let result = service.register(request("Cardiology", "DOC-1004"), 1, now());
    assert_matches!(result, Err(OpdError::UnknownDepartment(ref dep)) if dep == "Cardiology");
}

#[test]
fn test_register_rejects_case_mismatched_department() {
    let directory = seeded();
    let service = OpdAssignmentService::new(&directory);

    let result = service.register(request("m.s. (surgery)", "DOC-1004"), 1, now());
    assert_matches!(result, Err(OpdError::UnknownDepartment(_)));
}

#[test]
fn test_register_rejects_doctor_outside_department() {
    let directory = seeded();
    let service = OpdAssignmentService::new(&directory);

    let result = service.register(request("M.S. (Surgery)", "DOC-1002"), 1, now());
    assert_matches!(
        result,
        Err(OpdError::DoctorNotInDepartment { ref doctor_id, .. }) if doctor_id == "DOC-1002"
    );
}

#[test]
fn test_register_rejects_unknown_doctor() {
    let directory = seeded();
    let service = OpdAssignmentService::new(&directory);

    let result = service.register(request("M.S. (Surgery)", "DOC-4040"), 1, now());
    assert_matches!(result, Err(OpdError::DoctorNotFound(ref id)) if id == "DOC-4040");
}

// ==============================================================================
// DESK & TOKENS
// ==============================================================================

#[test]
fn test_tokens_are_sequential_per_day() {
    let directory = seeded();
    let mut desk = OpdDesk::new(1);

    let first = desk.admit(&directory, request("M.S. (Surgery)", "DOC-1004"), now()).unwrap();
    let second = desk.admit(&directory, request("Medicine", "DOC-1002"), now()).unwrap();
    let next_day = desk
        .admit(
            &directory,
            CreateRegistrationRequest {
                appointment_date: date().succ_opt(),
                ..request("Medicine", "DOC-1002")
            },
            now(),
        )
        .unwrap();

    assert_eq!(first.token_number, 1);
    assert_eq!(second.token_number, 2);
    assert_eq!(next_day.token_number, 1);
    assert_eq!(desk.list().len(), 3);
}

#[test]
fn test_rejected_admission_consumes_no_token() {
    let directory = seeded();
    let mut desk = OpdDesk::new(1);

    assert!(desk.admit(&directory, request("Cardiology", "DOC-1004"), now()).is_err());
    assert_eq!(desk.tokens().last_issued(date()), None);
    assert!(desk.list().is_empty());

    let registration = desk.admit(&directory, request("M.S. (Surgery)", "DOC-1007"), now()).unwrap();
    assert_eq!(registration.token_number, 1);
}

#[test]
fn test_exhausted_token_sequence_rejects_admission() {
    let directory = seeded();
    let mut desk = OpdDesk::new(u32::MAX);

    let last = desk.admit(&directory, request("Medicine", "DOC-1002"), now()).unwrap();
    assert_eq!(last.token_number, u32::MAX);

    let result = desk.admit(&directory, request("Medicine", "DOC-1002"), now());
    assert_matches!(result, Err(OpdError::TokenSequenceExhausted(d)) if d == date());
    assert_eq!(desk.list().len(), 1);

    // the next day still has its full sequence
    let tomorrow = desk
        .admit(
            &directory,
            CreateRegistrationRequest {
                appointment_date: date().succ_opt(),
                ..request("Medicine", "DOC-1002")
            },
            now(),
        )
        .unwrap();
    assert_eq!(tomorrow.token_number, u32::MAX);
}

#[test]
fn test_admitted_registration_matches_assignment_mint() {
    let directory = seeded();
    let mut desk = OpdDesk::new(1);

    let admitted = desk.admit(&directory, request("M.S. (Surgery)", "DOC-1004"), now()).unwrap();
    let minted = OpdAssignmentService::new(&directory)
        .register(request("M.S. (Surgery)", "DOC-1004"), admitted.token_number, now())
        .unwrap();

    assert_eq!(
        OpdRegistration {
            id: minted.id.clone(),
            ..admitted
        },
        minted
    );
}

#[test]
fn test_cancelled_token_is_not_reused() {
    let directory = seeded();
    let mut desk = OpdDesk::new(1);

    let first = desk.admit(&directory, request("M.S. (Surgery)", "DOC-1004"), now()).unwrap();
    desk.update_status(&first.id, OpdStatus::Cancelled).unwrap();

    let second = desk.admit(&directory, request("M.S. (Surgery)", "DOC-1004"), now()).unwrap();
    assert_eq!(second.token_number, 2);
}

#[test]
fn test_queue_for_doctor_skips_finished_patients() {
    let directory = seeded();
    let mut desk = OpdDesk::new(1);

    let a = desk.admit(&directory, request("M.S. (Surgery)", "DOC-1004"), now()).unwrap();
    let b = desk.admit(&directory, request("M.S. (Surgery)", "DOC-1007"), now()).unwrap();
    let c = desk.admit(&directory, request("M.S. (Surgery)", "DOC-1004"), now()).unwrap();

    desk.update_status(&a.id, OpdStatus::InProgress).unwrap();
    desk.update_status(&a.id, OpdStatus::Completed).unwrap();

    let queue: Vec<u32> = desk
        .queue_for_doctor("DOC-1004", date())
        .iter()
        .map(|r| r.token_number)
        .collect();
    assert_eq!(queue, vec![c.token_number]);

    let department: Vec<String> = desk
        .queue_for_department("M.S. (Surgery)", date())
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(department, vec![b.id, c.id]);
}

#[test]
fn test_update_status_errors() {
    let directory = seeded();
    let mut desk = OpdDesk::new(1);
    let registration = desk.admit(&directory, request("Medicine", "DOC-1002"), now()).unwrap();

    assert_matches!(
        desk.update_status("OPD-missing", OpdStatus::InProgress),
        Err(OpdError::RegistrationNotFound(_))
    );
    assert_matches!(
        desk.update_status(&registration.id, OpdStatus::Completed),
        Err(OpdError::InvalidStatusTransition {
            from: OpdStatus::Waiting,
            to: OpdStatus::Completed
        })
    );
    assert_eq!(desk.get(&registration.id).unwrap().status, OpdStatus::Waiting);
}

// ==============================================================================
// SLIP RENDERING
// ==============================================================================

#[test]
fn test_slip_uses_formatted_doctor() {
    let directory = seeded();
    let mut desk = OpdDesk::new(1);
    let registration = desk.admit(&directory, request("M.S. (Surgery)", "DOC-1004"), now()).unwrap();

    let slip = render_slip(&registration, &directory);

    assert_eq!(slip.doctor, "Dr. Jaspal Singh (MBBS, M.S. (Surgery))");
    assert_eq!(slip.token_number, 1);

    let text = slip.to_string();
    assert!(text.contains("Token No.    : 1"));
    assert!(text.contains("Doctor       : Dr. Jaspal Singh (MBBS, M.S. (Surgery))"));
    assert!(text.contains("Appointment  : 09-03-2026 09:00"));
    assert!(text.ends_with("Status       : waiting"));
}

#[test]
fn test_slip_survives_deleted_doctor() {
    let mut directory = seeded();
    let mut desk = OpdDesk::new(1);
    let registration = desk.admit(&directory, request("M.S. (Surgery)", "DOC-1007"), now()).unwrap();

    directory.delete_doctor("DOC-1007");

    let slip = render_slip(&registration, &directory);
    assert_eq!(slip.doctor, UNKNOWN_DOCTOR);
    assert_eq!(slip.doctor, "Unknown Doctor");
    assert_eq!(desk.get(&registration.id).unwrap().doctor_id, "DOC-1007");
}
