//! HTTP route definitions.

mod clients;
mod health;

use crate::AppState;
use axum::Router;

/// Create all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new().merge(health::routes()).merge(clients::routes())
}
