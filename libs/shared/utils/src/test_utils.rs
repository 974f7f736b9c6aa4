use std::sync::Arc;

use axum::{body::Body, response::Response};
use chrono::{NaiveDate, NaiveTime};
use serde_json::{json, Value};

use shared_config::AppConfig;

pub struct TestConfig {
    pub seed_doctors: bool,
    pub opd_token_start: u32,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            seed_doctors: true,
            opd_token_start: 1,
        }
    }
}

impl TestConfig {
    pub fn empty_directory() -> Self {
        Self {
            seed_doctors: false,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            seed_doctors: self.seed_doctors,
            opd_token_start: self.opd_token_start,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// JSON bodies shaped like the ones the front-end forms submit.
pub struct TestPayloads;

impl TestPayloads {
    pub fn doctor(name: &str, department: &str) -> Value {
        json!({
            "name": name,
            "department": department,
            "qualification": "MBBS",
            "designation": "Consultant",
            "specialization": null,
            "experience": 4,
            "availability": true,
            "consultation_type": "offline",
            "rating": 4.8,
            "profile_photo": "/images/doctors/placeholder.jpg",
            "email": null,
            "phone": "+91 98140 00000",
            "registration_no": null
        })
    }

    pub fn registration(department: &str, doctor_id: &str) -> Value {
        json!({
            "patient_name": "Manpreet Kaur",
            "age": "34",
            "gender": "Female",
            "contact": "+91 98765 43210",
            "address": "12 Model Town, Ludhiana",
            "department": department,
            "doctor_id": doctor_id,
            "appointment_date": Self::appointment_date(),
            "appointment_time": Self::appointment_time()
        })
    }

    pub fn appointment_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid test date")
    }

    pub fn appointment_time() -> NaiveTime {
        NaiveTime::from_hms_opt(10, 30, 0).expect("valid test time")
    }
}

pub async fn response_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    if body.is_empty() {
        return Value::Null;
    }

    serde_json::from_slice(&body).expect("Response body is not JSON")
}
