use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;

use crate::global::Global;
use crate::lookup;
use crate::render::{render_page, Page};

pub fn routes() -> Router<Arc<Global>> {
    Router::new().route("/", get(form).post(submit))
}

#[derive(Debug, Default, Deserialize)]
pub struct LookupForm {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub region: String,
}

/// GET /
#[tracing::instrument]
async fn form() -> Html<String> {
    Html(render_page(&Page::default()))
}

/// POST /
///
/// Runs one lookup and renders the result. Upstream failures are shown on
/// the page instead of turning into an error status.
#[tracing::instrument(skip(global))]
async fn submit(State(global): State<Arc<Global>>, Form(input): Form<LookupForm>) -> Html<String> {
    let uid = input.uid.trim();
    let region = input.region.trim();

    if uid.is_empty() {
        return Html(render_page(&Page {
            uid,
            region,
            error: Some("Please enter a UID"),
            profile: None,
        }));
    }

    match lookup::lookup(&global, uid, region).await {
        Ok(profile) => Html(render_page(&Page {
            uid,
            region,
            error: None,
            profile: Some(&profile),
        })),
        Err(e) => {
            tracing::warn!(error = %e, "lookup failed");
            Html(render_page(&Page {
                uid,
                region,
                error: Some(e.user_message()),
                profile: None,
            }))
        }
    }
}
