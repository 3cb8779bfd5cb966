//! Delete handler - removes a client and closes the gap in its lane.

use crate::db;
use crate::error::Result;
use laneboard_engine::{remove, Client, ClientId};
use serde::Serialize;
use sqlx::PgPool;

/// Response for a deletion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// Id of the deleted client
    pub deleted: ClientId,
    /// Lane members that shifted up to close the gap
    pub changed: Vec<Client>,
}

/// Delete a client, renumbering its lane in the same transaction so readers
/// never observe a gapped lane.
pub async fn handle_delete(pool: &PgPool, id: ClientId) -> Result<DeleteResponse> {
    let clients = db::load_board(pool).await?;
    let outcome = remove(&clients, id)?;

    let changed: Vec<Client> = outcome.changed_clients().cloned().collect();
    let refs: Vec<&Client> = changed.iter().collect();
    db::delete_client_with_positions(pool, id, &refs).await?;

    tracing::debug!("deleted client {} ({} rows renumbered)", id, changed.len());

    Ok(DeleteResponse {
        deleted: id,
        changed,
    })
}
