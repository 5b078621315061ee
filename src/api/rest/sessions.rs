use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::post;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::{VolunteerSession, resolve_volunteer};
use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/admin", post(admin_login))
        .route("/auth/volunteer", post(volunteer_login))
}

#[derive(Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AdminSession {
    pub authenticated: bool,
    pub dashboard: &'static str,
}

#[derive(Deserialize)]
pub struct VolunteerLoginRequest {
    pub identifier: String,
}

async fn admin_login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AdminLoginRequest>,
) -> Result<Json<AdminSession>, AppError> {
    if !state.admin.verify(&payload.username, &payload.password) {
        return Err(AppError::Unauthorized("invalid credentials".to_string()));
    }

    info!(username = %payload.username.trim(), "admin signed in");
    Ok(Json(AdminSession {
        authenticated: true,
        dashboard: "/admin/dashboard",
    }))
}

async fn volunteer_login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<VolunteerLoginRequest>,
) -> Result<Json<VolunteerSession>, AppError> {
    if payload.identifier.trim().is_empty() {
        return Err(AppError::BadRequest(
            "please enter your volunteer ID, email, or number".to_string(),
        ));
    }

    let session = resolve_volunteer(&payload.identifier, &state.volunteers).ok_or_else(|| {
        AppError::Unauthorized(
            "invalid volunteer identifier; check your ID, email, or number".to_string(),
        )
    })?;

    info!(volunteer_id = %session.volunteer_id, "volunteer signed in");
    Ok(Json(session))
}
