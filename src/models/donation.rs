use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OrganizationType {
    Restaurant,
    EventVenue,
    GroceryStore,
    Individual,
    Catering,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DonationStatus {
    #[serde(rename = "Pending Review")]
    PendingReview,
    Approved,
    Rejected,
    Assigned,
    #[serde(rename = "In Transit")]
    InTransit,
    Completed,
}

impl DonationStatus {
    pub const ALL: [DonationStatus; 6] = [
        DonationStatus::PendingReview,
        DonationStatus::Approved,
        DonationStatus::Rejected,
        DonationStatus::Assigned,
        DonationStatus::InTransit,
        DonationStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DonationStatus::PendingReview => "Pending Review",
            DonationStatus::Approved => "Approved",
            DonationStatus::Rejected => "Rejected",
            DonationStatus::Assigned => "Assigned",
            DonationStatus::InTransit => "In Transit",
            DonationStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Donation {
    pub id: String,
    pub donor: String,
    pub organization_type: OrganizationType,
    pub food_type: String,
    pub quantity: String,
    pub location: String,
    pub phone: String,
    /// Frozen at submission; never recomputed as the expiry approaches.
    pub urgency: Urgency,
    pub status: DonationStatus,
    pub submitted_at: DateTime<Utc>,
    pub expiry_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_volunteer: Option<String>,
}

/// Fields supplied by the public intake form. Identity, status, urgency and
/// the submission timestamp are always set by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDonation {
    pub donor: String,
    pub organization_type: OrganizationType,
    pub food_type: String,
    pub quantity: String,
    pub location: String,
    pub phone: String,
    pub expiry_time: DateTime<Utc>,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

/// Aggregate counts over the donation collection. `approved` covers both
/// `Approved` and `Assigned` records.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DonationStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub in_transit: usize,
    pub completed: usize,
    pub rejected: usize,
}

impl DonationStats {
    pub fn record(mut self, status: DonationStatus) -> Self {
        self.total += 1;
        match status {
            DonationStatus::PendingReview => self.pending += 1,
            DonationStatus::Approved | DonationStatus::Assigned => self.approved += 1,
            DonationStatus::InTransit => self.in_transit += 1,
            DonationStatus::Completed => self.completed += 1,
            DonationStatus::Rejected => self.rejected += 1,
        }
        self
    }
}
