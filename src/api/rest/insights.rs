use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::routing::get;
use serde::Deserialize;

use crate::analytics::{AnalyticsReport, REPORT};
use crate::state::AppState;
use crate::views::{InventoryOverview, inventory_overview};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/inventory", get(inventory))
        .route("/analytics", get(analytics))
}

#[derive(Deserialize)]
pub struct InventoryQuery {
    #[serde(default)]
    pub expanded: bool,
}

async fn inventory(Query(query): Query<InventoryQuery>) -> Json<InventoryOverview> {
    Json(inventory_overview(query.expanded))
}

async fn analytics() -> Json<AnalyticsReport> {
    Json(REPORT)
}
