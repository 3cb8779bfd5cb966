//! Move handler - the load-reorder-persist cycle.
//!
//! Validation happens strictly before any read or write: an invalid status
//! or a non-positive priority aborts the request with no effect on the
//! store, and nothing else runs afterwards.

use crate::db;
use crate::error::{AppError, Result};
use laneboard_engine::{reorder, Client, ClientId, MoveRequest, Priority, Status};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Request body for moving a client.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveBody {
    /// Destination lane; omit to stay in the current lane
    pub status: Option<String>,
    /// Destination rank; omit to append on a lane change
    pub priority: Option<i64>,
}

/// Response for a move.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    /// The moved client at its final position
    pub client: Client,
    /// Every client whose status or priority changed, the moved one included
    pub changed: Vec<Client>,
}

/// Validate a move body into an engine request.
pub fn parse_move_body(id: ClientId, body: &MoveBody) -> Result<MoveRequest> {
    let status = match body.status.as_deref() {
        Some(raw) => Some(raw.parse::<Status>().map_err(AppError::Engine)?),
        None => None,
    };

    let priority = match body.priority {
        // Ranks past the end of a lane append, so clamping oversized
        // values is lossless.
        Some(p) if p >= 1 => Some(Priority::try_from(p).unwrap_or(Priority::MAX)),
        Some(p) => {
            return Err(AppError::BadRequest(format!(
                "priority must be a positive integer, got {}",
                p
            )))
        }
        None => None,
    };

    Ok(MoveRequest::new(id, status, priority))
}

/// Process a move request: load the board, reorder, persist the changed
/// subset as one batch.
pub async fn handle_move(pool: &PgPool, id: ClientId, body: MoveBody) -> Result<MoveResponse> {
    let request = parse_move_body(id, &body)?;

    let clients = db::load_board(pool).await?;
    let outcome = reorder(&clients, &request)?;

    let changed: Vec<Client> = outcome.changed_clients().cloned().collect();
    if !changed.is_empty() {
        let refs: Vec<&Client> = changed.iter().collect();
        db::persist_positions(pool, &refs).await?;
    }

    let client = outcome
        .clients
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .ok_or_else(|| AppError::Internal(format!("client {} vanished during reorder", id)))?;

    tracing::debug!(
        "moved client {} to {}/{} ({} rows updated)",
        id,
        client.status,
        client.priority,
        changed.len()
    );

    Ok(MoveResponse { client, changed })
}
