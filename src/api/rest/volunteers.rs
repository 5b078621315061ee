use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use chrono::Utc;

use crate::error::AppError;
use crate::models::volunteer::{
    NewVolunteer, Volunteer, VolunteerFilter, VolunteerStats, VolunteerUpdate,
};
use crate::state::AppState;
use crate::views::{VolunteerConsole, volunteer_console};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/volunteers", get(list_volunteers).post(register_volunteer))
        .route("/volunteers/active", get(active_volunteers))
        .route("/volunteers/stats", get(volunteer_stats))
        .route(
            "/volunteers/:id",
            get(get_volunteer)
                .patch(update_volunteer)
                .delete(remove_volunteer),
        )
        .route("/volunteers/:id/dashboard", get(dashboard))
}

async fn register_volunteer(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewVolunteer>,
) -> Result<Json<Volunteer>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name cannot be empty".to_string()));
    }

    let volunteer = state.volunteers.add_volunteer(payload);
    refresh_directory_gauge(&state);

    Ok(Json(volunteer))
}

async fn list_volunteers(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<VolunteerFilter>,
) -> Json<Vec<Volunteer>> {
    Json(state.volunteers.search(&filter))
}

async fn active_volunteers(State(state): State<Arc<AppState>>) -> Json<Vec<Volunteer>> {
    Json(state.volunteers.get_active_volunteers())
}

async fn volunteer_stats(State(state): State<Arc<AppState>>) -> Json<VolunteerStats> {
    Json(state.volunteers.get_volunteer_stats())
}

async fn get_volunteer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Volunteer>, AppError> {
    state
        .volunteers
        .get_volunteer_by_id(&id)
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

async fn update_volunteer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<VolunteerUpdate>,
) -> Result<Json<Volunteer>, AppError> {
    if payload.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
        return Err(AppError::BadRequest("name cannot be empty".to_string()));
    }

    state
        .volunteers
        .update_volunteer(&id, payload)
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

/// Donations still pointing at the removed id are left as they are.
async fn remove_volunteer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Volunteer>, AppError> {
    let removed = state
        .volunteers
        .remove_volunteer(&id)
        .ok_or_else(|| not_found(&id))?;
    refresh_directory_gauge(&state);

    Ok(Json(removed))
}

async fn dashboard(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<VolunteerConsole> {
    Json(volunteer_console(
        &id,
        &state.donations,
        &state.volunteers,
        Utc::now(),
    ))
}

fn refresh_directory_gauge(state: &AppState) {
    state
        .metrics
        .volunteers_registered
        .set(state.volunteers.len() as i64);
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("volunteer {id} not found"))
}
