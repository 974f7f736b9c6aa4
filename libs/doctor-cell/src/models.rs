use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationType {
    Online,
    #[default]
    Offline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub department: String,
    pub qualification: String,
    pub designation: String,
    pub specialization: Option<String>,
    pub experience: Option<u32>,
    pub availability: bool,
    pub consultation_type: ConsultationType,
    pub rating: f32,
    pub profile_photo: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub registration_no: Option<String>,
}

impl Doctor {
    pub fn is_active(&self) -> bool {
        self.availability
    }

    /// Merge the fields present in `patch` onto this record. `id` and
    /// `rating` are never touched.
    pub fn apply_patch(&mut self, patch: UpdateDoctorRequest) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(qualification) = patch.qualification {
            self.qualification = qualification;
        }
        if let Some(designation) = patch.designation {
            self.designation = designation;
        }
        if let Some(specialization) = patch.specialization {
            self.specialization = specialization;
        }
        if let Some(experience) = patch.experience {
            self.experience = experience;
        }
        if let Some(availability) = patch.availability {
            self.availability = availability;
        }
        if let Some(consultation_type) = patch.consultation_type {
            self.consultation_type = consultation_type;
        }
        if let Some(profile_photo) = patch.profile_photo {
            self.profile_photo = profile_photo;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(registration_no) = patch.registration_no {
            self.registration_no = registration_no;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub designation: String,
    pub specialization: Option<String>,
    pub experience: Option<u32>,
    #[serde(default)]
    pub availability: bool,
    #[serde(default)]
    pub consultation_type: ConsultationType,
    /// Accepted so form payloads deserialize, but new doctors always start at 0.
    pub rating: Option<f32>,
    #[serde(default)]
    pub profile_photo: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub registration_no: Option<String>,
}

/// Partial update. For the nullable fields the outer `Option` records whether
/// the key was sent at all, so `{"email": null}` clears the email while a
/// missing `email` key leaves it alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDoctorRequest {
    pub name: Option<String>,
    pub department: Option<String>,
    pub qualification: Option<String>,
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "present_field", skip_serializing_if = "Option::is_none")]
    pub specialization: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_field", skip_serializing_if = "Option::is_none")]
    pub experience: Option<Option<u32>>,
    pub availability: Option<bool>,
    pub consultation_type: Option<ConsultationType>,
    pub profile_photo: Option<String>,
    #[serde(default, deserialize_with = "present_field", skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_field", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_field", skip_serializing_if = "Option::is_none")]
    pub registration_no: Option<Option<String>>,
}

// Only called when the key is present; `default` covers the absent case.
fn present_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorListQuery {
    pub department: Option<String>,
}
