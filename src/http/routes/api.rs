use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::global::Global;
use crate::http::error::{ApiError, ApiErrorCode};
use crate::regions::Region;

pub fn routes() -> Router<Arc<Global>> {
    Router::new()
        .route("/", get(root))
        .route("/regions", get(regions))
        .route("/player", get(player))
}

#[derive(serde::Serialize)]
struct RootResponse {
    message: &'static str,
    version: &'static str,
    uptime: u64,
    endpoints: Vec<&'static str>,
}

#[tracing::instrument(skip(global))]
async fn root(State(global): State<Arc<Global>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Free Fire Player Lookup",
        version: env!("CARGO_PKG_VERSION"),
        uptime: global.started_at.elapsed().as_secs(),
        endpoints: vec!["/api/regions", "/api/player?uid=<uid>&region=<region>"],
    })
}

#[derive(serde::Serialize)]
struct RegionResponse {
    code: &'static str,
    name: &'static str,
}

/// GET /api/regions
#[tracing::instrument]
async fn regions() -> Json<Vec<RegionResponse>> {
    Json(
        Region::ALL
            .iter()
            .map(|r| RegionResponse {
                code: r.code(),
                name: r.display_name(),
            })
            .collect(),
    )
}

#[derive(Debug, Deserialize)]
struct PlayerQuery {
    uid: Option<String>,
    region: Option<String>,
}

/// GET /api/player?uid=&region=
///
/// The player API body exactly as received.
#[tracing::instrument(skip(global))]
async fn player(
    State(global): State<Arc<Global>>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let uid = query.uid.as_deref().map(str::trim).unwrap_or_default();
    if uid.is_empty() {
        return Err(ApiError::bad_request(ApiErrorCode::MissingUid, "uid is required"));
    }
    let region = query.region.as_deref().map(str::trim).unwrap_or_default();

    let record = global.player_api.fetch_player(uid, region).await?;

    Ok(Json(record.raw))
}
