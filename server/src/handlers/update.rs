//! Update handler - edits client fields that do not affect ranking.

use crate::db;
use crate::error::{AppError, Result};
use laneboard_engine::{Client, ClientId};
use serde::Deserialize;
use sqlx::PgPool;

/// Request body for updating a client's descriptive fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Update name and/or description. Status and priority are only ever
/// changed through the move endpoint, which renumbers lanes.
pub async fn handle_update(pool: &PgPool, id: ClientId, request: UpdateRequest) -> Result<Client> {
    if let Some(name) = request.name.as_deref() {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("name must not be empty".to_string()));
        }
    }

    let row = db::update_client_fields(
        pool,
        id,
        request.name.as_deref(),
        request.description.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::NotFound(format!("client {}", id)))?;

    row.to_client()
}
