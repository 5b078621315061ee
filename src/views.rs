//! Read-only projections consumed by the consoles. Nothing here mutates a
//! store.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::urgency::{is_expiring_soon, time_until_expiry};
use crate::models::donation::{Donation, DonationStats, DonationStatus};
use crate::store::donations::DonationStore;
use crate::store::volunteers::VolunteerStore;

const DEFAULT_BADGE: &str = "bg-gray-100 text-gray-800";

pub fn urgency_badge(urgency: &str) -> &'static str {
    match urgency {
        "High" => "bg-red-100 text-red-800",
        "Medium" => "bg-yellow-100 text-yellow-800",
        "Low" => "bg-green-100 text-green-800",
        _ => DEFAULT_BADGE,
    }
}

pub fn status_badge(status: &str) -> &'static str {
    match status {
        "Pending Review" => "bg-orange-100 text-orange-800",
        "Approved" => "bg-blue-100 text-blue-800",
        "Assigned" => "bg-purple-100 text-purple-800",
        "In Transit" => "bg-indigo-100 text-indigo-800",
        "Completed" => "bg-green-100 text-green-800",
        "Rejected" => "bg-red-100 text-red-800",
        _ => DEFAULT_BADGE,
    }
}

pub fn volunteer_status_badge(status: &str) -> &'static str {
    match status {
        "Active" => "bg-green-100 text-green-800",
        "Inactive" => DEFAULT_BADGE,
        "Suspended" => "bg-red-100 text-red-800",
        _ => DEFAULT_BADGE,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DonationView {
    #[serde(flatten)]
    pub donation: Donation,
    pub time_until_expiry: String,
    pub expiring_soon: bool,
    pub urgency_badge: &'static str,
    pub status_badge: &'static str,
    /// Name of the assigned volunteer. `None` both when nobody is assigned
    /// and when the stored id no longer resolves.
    pub assignee_name: Option<String>,
}

impl DonationView {
    pub fn build(donation: Donation, volunteers: &VolunteerStore, now: DateTime<Utc>) -> Self {
        let assignee_name = donation
            .assigned_volunteer
            .as_deref()
            .and_then(|id| volunteers.get_volunteer_by_id(id))
            .map(|v| v.name);

        Self {
            time_until_expiry: time_until_expiry(donation.expiry_time, now),
            expiring_soon: is_expiring_soon(donation.expiry_time, now),
            urgency_badge: urgency_badge(donation.urgency.as_str()),
            status_badge: status_badge(donation.status.as_str()),
            assignee_name,
            donation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    #[serde(flatten)]
    pub stats: DonationStats,
    pub active_collections: usize,
    pub success_rate_percent: u32,
    pub urgent_alerts: usize,
}

/// Admin dashboard tiles. Urgent alerts count open donations that are
/// expiring soon, independent of their frozen urgency.
pub fn dashboard_summary(donations: &DonationStore, now: DateTime<Utc>) -> DashboardSummary {
    let stats = donations.get_stats();

    let urgent_alerts = donations
        .list_where(|d| {
            !matches!(d.status, DonationStatus::Completed | DonationStatus::Rejected)
                && is_expiring_soon(d.expiry_time, now)
        })
        .len();

    let success_rate_percent = if stats.total > 0 {
        (stats.completed as f64 / stats.total as f64 * 100.0).round() as u32
    } else {
        0
    };

    DashboardSummary {
        active_collections: stats.approved + stats.in_transit,
        success_rate_percent,
        urgent_alerts,
        stats,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VolunteerConsole {
    pub volunteer_id: String,
    pub display_name: String,
    pub active_pickups: Vec<DonationView>,
    pub completed_pickups: Vec<DonationView>,
    pub expiring_soon: usize,
}

/// Pickup console for one volunteer id. The id does not have to resolve in
/// the directory; the display name then falls back to the id.
pub fn volunteer_console(
    volunteer_id: &str,
    donations: &DonationStore,
    volunteers: &VolunteerStore,
    now: DateTime<Utc>,
) -> VolunteerConsole {
    let display_name = volunteers
        .get_volunteer_by_id(volunteer_id)
        .map(|v| v.name)
        .unwrap_or_else(|| volunteer_id.to_string());

    let assigned_to = |d: &Donation| d.assigned_volunteer.as_deref() == Some(volunteer_id);

    let active: Vec<Donation> = donations.list_where(|d| {
        assigned_to(d)
            && matches!(d.status, DonationStatus::Assigned | DonationStatus::InTransit)
    });
    let completed =
        donations.list_where(|d| assigned_to(d) && d.status == DonationStatus::Completed);

    let expiring_soon = active
        .iter()
        .filter(|d| is_expiring_soon(d.expiry_time, now))
        .count();

    VolunteerConsole {
        volunteer_id: volunteer_id.to_string(),
        display_name,
        active_pickups: active
            .into_iter()
            .map(|d| DonationView::build(d, volunteers, now))
            .collect(),
        completed_pickups: completed
            .into_iter()
            .map(|d| DonationView::build(d, volunteers, now))
            .collect(),
        expiring_soon,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// A storage category as shown on the inventory tab. Stock levels are not
/// tracked by any store; these are the fixed figures the console displays.
#[derive(Debug, Clone, Copy)]
pub struct StockLevel {
    pub category: &'static str,
    pub current: u32,
    pub capacity: u32,
    pub status: &'static str,
    pub trend: Trend,
    pub last_updated: &'static str,
}

pub const STOCK_LEVELS: [StockLevel; 4] = [
    StockLevel {
        category: "Prepared Meals",
        current: 145,
        capacity: 200,
        status: "Good",
        trend: Trend::Up,
        last_updated: "5 mins ago",
    },
    StockLevel {
        category: "Fruits & Vegetables",
        current: 89,
        capacity: 150,
        status: "Low",
        trend: Trend::Down,
        last_updated: "12 mins ago",
    },
    StockLevel {
        category: "Bread & Bakery",
        current: 67,
        capacity: 100,
        status: "Medium",
        trend: Trend::Up,
        last_updated: "8 mins ago",
    },
    StockLevel {
        category: "Dairy Products",
        current: 23,
        capacity: 80,
        status: "Very Low",
        trend: Trend::Down,
        last_updated: "3 mins ago",
    },
];

const COLLAPSED_CATEGORIES: usize = 3;

pub fn stock_status_badge(status: &str) -> &'static str {
    match status {
        "Good" => "text-green-600 bg-green-100",
        "Medium" => "text-yellow-600 bg-yellow-100",
        "Low" => "text-orange-600 bg-orange-100",
        "Very Low" => "text-red-600 bg-red-100",
        _ => "text-gray-600 bg-gray-100",
    }
}

/// Raw fill ratio as a percentage. Zero capacity reads as empty.
fn fill_ratio(current: u32, capacity: u32) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    f64::from(current) / f64::from(capacity) * 100.0
}

/// Width of the progress bar; overstocked categories stop at 100.
pub fn fill_percent(current: u32, capacity: u32) -> f64 {
    fill_ratio(current, capacity).min(100.0)
}

/// Bar colour. Bands are exclusive at their lower edge: exactly 70% is yellow.
pub fn fill_band(current: u32, capacity: u32) -> &'static str {
    let percentage = fill_ratio(current, capacity);
    if percentage > 70.0 {
        "bg-green-500"
    } else if percentage > 40.0 {
        "bg-yellow-500"
    } else if percentage > 20.0 {
        "bg-orange-500"
    } else {
        "bg-red-500"
    }
}

#[derive(Debug, Serialize)]
pub struct InventoryItem {
    pub category: &'static str,
    pub current: u32,
    pub capacity: u32,
    pub status: &'static str,
    pub status_badge: &'static str,
    pub trend: Trend,
    pub last_updated: &'static str,
    pub fill_percent: f64,
    /// Rounded label value, e.g. "73% capacity".
    pub capacity_label: u32,
    pub fill_band: &'static str,
}

impl InventoryItem {
    fn build(level: &StockLevel) -> Self {
        let fill = fill_percent(level.current, level.capacity);
        Self {
            category: level.category,
            current: level.current,
            capacity: level.capacity,
            status: level.status,
            status_badge: stock_status_badge(level.status),
            trend: level.trend,
            last_updated: level.last_updated,
            fill_percent: fill,
            capacity_label: fill.round() as u32,
            fill_band: fill_band(level.current, level.capacity),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InventoryOverview {
    pub expanded: bool,
    pub items: Vec<InventoryItem>,
}

/// The collapsed card lists the first three categories; the full tab lists
/// all of them.
pub fn inventory_overview(expanded: bool) -> InventoryOverview {
    let shown = if expanded {
        STOCK_LEVELS.len()
    } else {
        COLLAPSED_CATEGORIES
    };

    InventoryOverview {
        expanded,
        items: STOCK_LEVELS
            .iter()
            .take(shown)
            .map(InventoryItem::build)
            .collect(),
    }
}
