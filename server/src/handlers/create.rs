//! Create handler - appends a new client to the bottom of its lane.

use crate::db;
use crate::error::{AppError, Result};
use laneboard_engine::{Board, Client, Status};
use serde::Deserialize;
use sqlx::PgPool;

/// Request body for creating a client.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Lane to create the client in; defaults to the backlog
    pub status: Option<String>,
}

/// Create a client at the bottom of the requested lane.
pub async fn handle_create(pool: &PgPool, request: CreateRequest) -> Result<Client> {
    if request.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }

    let status = match request.status.as_deref() {
        Some(raw) => raw.parse::<Status>().map_err(AppError::Engine)?,
        None => Status::Backlog,
    };

    // Appending needs the lane's current size; load the board the same way
    // the move path does.
    let clients = db::load_board(pool).await?;
    let priority = Board::from_clients(&clients).next_priority(status);

    let row = db::insert_client(
        pool,
        &request.name,
        &request.description,
        status.as_str(),
        priority as i64,
    )
    .await?;

    tracing::debug!(
        "created client {} in {} at rank {}",
        row.id,
        status,
        priority
    );

    row.to_client()
}
