pub mod repository;
pub mod directory;
pub mod formatting;

pub use repository::DoctorRepository;
pub use directory::{DoctorDirectory, FALLBACK_DEPARTMENT};
pub use formatting::format_doctor_info;
