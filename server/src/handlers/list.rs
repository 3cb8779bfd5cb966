//! Read handlers - list the board and fetch single clients.

use crate::db;
use crate::error::{AppError, Result};
use laneboard_engine::{Client, ClientId, Status};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Query parameters for listing clients.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict the listing to one lane
    pub status: Option<String>,
}

/// Response for a board listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub clients: Vec<Client>,
}

/// List clients, optionally filtered to a single lane.
pub async fn handle_list(pool: &PgPool, query: ListQuery) -> Result<ListResponse> {
    let rows = match query.status.as_deref() {
        Some(raw) => {
            let status: Status = raw.parse().map_err(AppError::Engine)?;
            db::list_clients_by_status(pool, status.as_str()).await?
        }
        None => db::list_clients(pool).await?,
    };

    let mut clients = Vec::with_capacity(rows.len());
    for row in &rows {
        clients.push(row.to_client()?);
    }

    Ok(ListResponse { clients })
}

/// Fetch a single client.
pub async fn handle_get(pool: &PgPool, id: ClientId) -> Result<Client> {
    let row = db::get_client(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("client {}", id)))?;

    row.to_client()
}
