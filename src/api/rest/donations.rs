use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::routing::{get, patch, post};
use chrono::Utc;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::donation::{Donation, DonationStats, DonationStatus, NewDonation};
use crate::state::AppState;
use crate::views::{DashboardSummary, DonationView, dashboard_summary};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/donations", post(submit_donation).get(list_donations))
        .route("/donations/stats", get(donation_stats))
        .route("/donations/summary", get(summary))
        .route("/donations/:id", get(get_donation))
        .route("/donations/:id/status", patch(set_status))
        .route("/donations/:id/approve", post(approve))
        .route("/donations/:id/reject", post(reject))
        .route("/donations/:id/assign", post(assign))
        .route("/donations/:id/start", post(start_collection))
        .route("/donations/:id/complete", post(complete_collection))
}

#[derive(Deserialize)]
pub struct ListDonationsQuery {
    pub status: Option<DonationStatus>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct SetStatusRequest {
    pub status: DonationStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Deserialize)]
pub struct RejectRequest {
    pub reason: String,
}

#[derive(Deserialize)]
pub struct AssignRequest {
    pub volunteer_id: String,
}

async fn submit_donation(
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<NewDonation>,
) -> Result<Json<Donation>, AppError> {
    let required = [
        ("donor", &payload.donor),
        ("food_type", &payload.food_type),
        ("quantity", &payload.quantity),
        ("location", &payload.location),
        ("phone", &payload.phone),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(AppError::BadRequest(format!("{field} cannot be empty")));
    }

    payload.special_instructions = payload
        .special_instructions
        .take()
        .filter(|text| !text.trim().is_empty());

    let donation = state.donations.add_donation(payload);
    state
        .metrics
        .donations_submitted_total
        .with_label_values(&[donation.urgency.as_str()])
        .inc();

    Ok(Json(donation))
}

async fn list_donations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListDonationsQuery>,
) -> Json<Vec<DonationView>> {
    let now = Utc::now();
    let donations = state
        .donations
        .list_where(|d| query.status.is_none_or(|status| d.status == status));

    let views = donations
        .into_iter()
        .take(query.limit.unwrap_or(usize::MAX))
        .map(|d| DonationView::build(d, &state.volunteers, now))
        .collect();

    Json(views)
}

async fn donation_stats(State(state): State<Arc<AppState>>) -> Json<DonationStats> {
    Json(state.donations.get_stats())
}

async fn summary(State(state): State<Arc<AppState>>) -> Json<DashboardSummary> {
    Json(dashboard_summary(&state.donations, Utc::now()))
}

async fn get_donation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DonationView>, AppError> {
    let donation = find(&state, &id)?;
    Ok(Json(DonationView::build(
        donation,
        &state.volunteers,
        Utc::now(),
    )))
}

/// Direct status write. Follows the store's transition policy rather than
/// the console's action rules.
async fn set_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<SetStatusRequest>,
) -> Result<Json<Donation>, AppError> {
    let donation = state
        .donations
        .update_donation_status(&id, payload.status, payload.reason.as_deref())?
        .ok_or_else(|| not_found(&id))?;

    record_status_change(&state, &donation);
    Ok(Json(donation))
}

async fn approve(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Donation>, AppError> {
    advance(
        &state,
        &id,
        DonationStatus::PendingReview,
        DonationStatus::Approved,
        None,
    )
}

async fn reject(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<RejectRequest>,
) -> Result<Json<Donation>, AppError> {
    let reason = payload.reason.trim();
    if reason.is_empty() {
        return Err(AppError::BadRequest(
            "a rejection reason is required".to_string(),
        ));
    }

    advance(
        &state,
        &id,
        DonationStatus::PendingReview,
        DonationStatus::Rejected,
        Some(reason),
    )
}

async fn assign(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<AssignRequest>,
) -> Result<Json<Donation>, AppError> {
    let volunteer_id = payload.volunteer_id.trim();
    if volunteer_id.is_empty() {
        return Err(AppError::BadRequest("volunteer_id cannot be empty".to_string()));
    }
    if state.volunteers.get_volunteer_by_id(volunteer_id).is_none() {
        return Err(AppError::BadRequest(format!(
            "volunteer {volunteer_id} is not in the directory"
        )));
    }

    let donation = state
        .donations
        .assign_from(&id, DonationStatus::Approved, volunteer_id)?
        .ok_or_else(|| not_found(&id))?;

    record_status_change(&state, &donation);
    Ok(Json(donation))
}

async fn start_collection(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Donation>, AppError> {
    advance(
        &state,
        &id,
        DonationStatus::Assigned,
        DonationStatus::InTransit,
        None,
    )
}

async fn complete_collection(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Donation>, AppError> {
    advance(
        &state,
        &id,
        DonationStatus::InTransit,
        DonationStatus::Completed,
        None,
    )
}

/// Console actions are only offered for one source status each.
fn advance(
    state: &AppState,
    id: &str,
    from: DonationStatus,
    to: DonationStatus,
    reason: Option<&str>,
) -> Result<Json<Donation>, AppError> {
    let donation = state
        .donations
        .transition_from(id, from, to, reason)?
        .ok_or_else(|| not_found(id))?;

    record_status_change(state, &donation);
    Ok(Json(donation))
}

fn record_status_change(state: &AppState, donation: &Donation) {
    state
        .metrics
        .donation_status_changes_total
        .with_label_values(&[donation.status.as_str()])
        .inc();
}

fn find(state: &AppState, id: &str) -> Result<Donation, AppError> {
    state
        .donations
        .get_donation_by_id(id)
        .ok_or_else(|| not_found(id))
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("donation {id} not found"))
}
