use std::sync::Arc;

use axum::Router;

use crate::global::Global;

pub mod api;
pub mod page;

#[cfg(test)]
mod tests;

pub fn routes() -> Router<Arc<Global>> {
    Router::new()
        .merge(page::routes())
        .nest("/api", api::routes())
}
