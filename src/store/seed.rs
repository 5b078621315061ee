//! Demo content loaded at startup when `SEED_DEMO_DATA` is on.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::donation::{Donation, DonationStatus, OrganizationType, Urgency};
use crate::models::volunteer::{Availability, EmergencyContact, Volunteer, VolunteerStatus};

struct DemoDonation {
    id: &'static str,
    donor: &'static str,
    organization_type: OrganizationType,
    food_type: &'static str,
    quantity: &'static str,
    location: &'static str,
    phone: &'static str,
    urgency: Urgency,
    status: DonationStatus,
    submitted_hours_ago: i64,
    expires_in_hours: i64,
    special_instructions: Option<&'static str>,
    assigned_volunteer: Option<&'static str>,
}

const DEMO_DONATIONS: [DemoDonation; 5] = [
    DemoDonation {
        id: "FD1001",
        donor: "Mario's Restaurant",
        organization_type: OrganizationType::Restaurant,
        food_type: "Prepared Meals",
        quantity: "50 portions",
        location: "123 Main St, Downtown",
        phone: "+1 (555) 123-4567",
        urgency: Urgency::High,
        status: DonationStatus::PendingReview,
        submitted_hours_ago: 2,
        expires_in_hours: 2,
        special_instructions: Some("Food is still hot, please collect ASAP"),
        assigned_volunteer: None,
    },
    DemoDonation {
        id: "FD1002",
        donor: "Grand Event Hall",
        organization_type: OrganizationType::EventVenue,
        food_type: "Buffet Items",
        quantity: "30kg mixed",
        location: "456 Event Ave",
        phone: "+1 (555) 987-6543",
        urgency: Urgency::Medium,
        status: DonationStatus::Assigned,
        submitted_hours_ago: 4,
        expires_in_hours: 6,
        special_instructions: None,
        assigned_volunteer: Some("john.smith"),
    },
    DemoDonation {
        id: "FD1003",
        donor: "Fresh Bakery",
        organization_type: OrganizationType::GroceryStore,
        food_type: "Bread & Pastries",
        quantity: "25 loaves",
        location: "789 Baker St",
        phone: "+1 (555) 456-7890",
        urgency: Urgency::Low,
        status: DonationStatus::InTransit,
        submitted_hours_ago: 6,
        expires_in_hours: 12,
        special_instructions: None,
        assigned_volunteer: Some("sarah.johnson"),
    },
    DemoDonation {
        id: "FD1004",
        donor: "Corporate Cafeteria",
        organization_type: OrganizationType::Other,
        food_type: "Lunch Surplus",
        quantity: "40 meals",
        location: "321 Business Blvd",
        phone: "+1 (555) 654-3210",
        urgency: Urgency::High,
        status: DonationStatus::PendingReview,
        submitted_hours_ago: 1,
        expires_in_hours: 1,
        special_instructions: Some("Located on 5th floor, ask for manager"),
        assigned_volunteer: None,
    },
    DemoDonation {
        id: "FD1005",
        donor: "Pizza Palace",
        organization_type: OrganizationType::Restaurant,
        food_type: "Pizza & Sides",
        quantity: "15 pizzas",
        location: "555 Food Court",
        phone: "+1 (555) 111-2222",
        urgency: Urgency::Medium,
        status: DonationStatus::Completed,
        submitted_hours_ago: 8,
        expires_in_hours: -2,
        special_instructions: None,
        assigned_volunteer: Some("mike.davis"),
    },
];

/// Demo donations with timestamps relative to `now`, newest-listed first.
pub fn demo_donations(now: DateTime<Utc>) -> Vec<Donation> {
    DEMO_DONATIONS
        .iter()
        .map(|demo| Donation {
            id: demo.id.to_string(),
            donor: demo.donor.to_string(),
            organization_type: demo.organization_type,
            food_type: demo.food_type.to_string(),
            quantity: demo.quantity.to_string(),
            location: demo.location.to_string(),
            phone: demo.phone.to_string(),
            urgency: demo.urgency,
            status: demo.status,
            submitted_at: now - Duration::hours(demo.submitted_hours_ago),
            expiry_time: now + Duration::hours(demo.expires_in_hours),
            special_instructions: demo.special_instructions.map(str::to_string),
            rejection_reason: None,
            assigned_volunteer: demo.assigned_volunteer.map(str::to_string),
        })
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn demo_volunteers() -> Vec<Volunteer> {
    vec![
        Volunteer {
            id: "john.smith".to_string(),
            name: "John Smith".to_string(),
            email: "john@foodbank.org".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            status: VolunteerStatus::Active,
            join_date: date(2024, 1, 15),
            completed_collections: 47,
            rating: 4.8,
            specializations: strings(&["Restaurant Pickups", "Large Events"]),
            availability: Availability {
                days: strings(&["Monday", "Tuesday", "Wednesday", "Friday"]),
                hours: "9:00 AM - 6:00 PM".to_string(),
            },
            emergency_contact: Some(EmergencyContact {
                name: "Jane Smith".to_string(),
                phone: "+1 (555) 123-4568".to_string(),
            }),
        },
        Volunteer {
            id: "sarah.johnson".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah@foodbank.org".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            status: VolunteerStatus::Active,
            join_date: date(2024, 2, 20),
            completed_collections: 32,
            rating: 4.9,
            specializations: strings(&["Bakery Items", "Grocery Stores"]),
            availability: Availability {
                days: strings(&["Thursday", "Friday", "Saturday", "Sunday"]),
                hours: "10:00 AM - 8:00 PM".to_string(),
            },
            emergency_contact: None,
        },
        Volunteer {
            id: "mike.davis".to_string(),
            name: "Mike Davis".to_string(),
            email: "mike@foodbank.org".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            status: VolunteerStatus::Active,
            join_date: date(2023, 11, 10),
            completed_collections: 89,
            rating: 4.7,
            specializations: strings(&["Corporate Events", "Catering Services"]),
            availability: Availability {
                days: strings(&["Monday", "Wednesday", "Friday", "Saturday"]),
                hours: "8:00 AM - 5:00 PM".to_string(),
            },
            emergency_contact: None,
        },
        Volunteer {
            id: "emily.brown".to_string(),
            name: "Emily Brown".to_string(),
            email: "emily@foodbank.org".to_string(),
            phone: "+1 (555) 654-3210".to_string(),
            status: VolunteerStatus::Inactive,
            join_date: date(2024, 3, 5),
            completed_collections: 15,
            rating: 4.6,
            specializations: strings(&["Small Restaurants", "Cafes"]),
            availability: Availability {
                days: strings(&["Tuesday", "Thursday", "Sunday"]),
                hours: "11:00 AM - 7:00 PM".to_string(),
            },
            emergency_contact: None,
        },
        Volunteer {
            id: "david.wilson".to_string(),
            name: "David Wilson".to_string(),
            email: "david@foodbank.org".to_string(),
            phone: "+1 (555) 321-0987".to_string(),
            status: VolunteerStatus::Active,
            join_date: date(2023, 9, 18),
            completed_collections: 156,
            rating: 4.9,
            specializations: strings(&["Emergency Pickups", "Large Venues"]),
            availability: Availability {
                days: strings(&[
                    "Monday",
                    "Tuesday",
                    "Wednesday",
                    "Thursday",
                    "Friday",
                ]),
                hours: "7:00 AM - 9:00 PM".to_string(),
            },
            emergency_contact: Some(EmergencyContact {
                name: "Lisa Wilson".to_string(),
                phone: "+1 (555) 321-0988".to_string(),
            }),
        },
    ]
}
