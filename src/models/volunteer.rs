use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VolunteerStatus {
    Active,
    Inactive,
    Suspended,
}

impl VolunteerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VolunteerStatus::Active => "Active",
            VolunteerStatus::Inactive => "Inactive",
            VolunteerStatus::Suspended => "Suspended",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Availability {
    pub days: Vec<String>,
    pub hours: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Volunteer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: VolunteerStatus,
    pub join_date: NaiveDate,
    /// Display only; no operation increments it.
    pub completed_collections: u32,
    /// Display only; no operation recomputes it.
    pub rating: f64,
    pub specializations: Vec<String>,
    pub availability: Availability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<EmergencyContact>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewVolunteer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: VolunteerStatus,
    #[serde(default)]
    pub specializations: Vec<String>,
    pub availability: Availability,
    #[serde(default)]
    pub emergency_contact: Option<EmergencyContact>,
}

/// Partial update. Supplied fields replace the stored value wholesale,
/// nested structs included.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolunteerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<VolunteerStatus>,
    pub specializations: Option<Vec<String>>,
    pub availability: Option<Availability>,
    pub emergency_contact: Option<EmergencyContact>,
}

impl VolunteerUpdate {
    pub fn apply(self, volunteer: &mut Volunteer) {
        if let Some(name) = self.name {
            volunteer.name = name;
        }
        if let Some(email) = self.email {
            volunteer.email = email;
        }
        if let Some(phone) = self.phone {
            volunteer.phone = phone;
        }
        if let Some(status) = self.status {
            volunteer.status = status;
        }
        if let Some(specializations) = self.specializations {
            volunteer.specializations = specializations;
        }
        if let Some(availability) = self.availability {
            volunteer.availability = availability;
        }
        if let Some(contact) = self.emergency_contact {
            volunteer.emergency_contact = Some(contact);
        }
    }
}

/// Directory search used by the admin console: case-insensitive substring
/// match on name or email, optionally narrowed to one status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolunteerFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<VolunteerStatus>,
}

impl VolunteerFilter {
    pub fn matches(&self, volunteer: &Volunteer) -> bool {
        let matches_status = self.status.is_none_or(|status| volunteer.status == status);

        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                volunteer.name.to_lowercase().contains(&term)
                    || volunteer.email.to_lowercase().contains(&term)
            }
        };

        matches_status && matches_search
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolunteerStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub suspended: usize,
}

impl VolunteerStats {
    pub fn record(mut self, status: VolunteerStatus) -> Self {
        self.total += 1;
        match status {
            VolunteerStatus::Active => self.active += 1,
            VolunteerStatus::Inactive => self.inactive += 1,
            VolunteerStatus::Suspended => self.suspended += 1,
        }
        self
    }
}
