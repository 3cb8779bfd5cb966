//! Priority-and-status reassignment for client moves.
//!
//! This is the core of determinism. Given the full board snapshot and a
//! single move request, this module recomputes ranks so that every touched
//! lane keeps a dense, contiguous, 1-based ordering while untouched clients
//! keep their exact status and priority.
//!
//! # Algorithm
//!
//! 1. Locate the target client (unknown ids abort before any mutation)
//! 2. Resolve the requested lane and rank against current values; bail out
//!    early when the request is a no-op
//! 3. Lift the target out of its lane
//! 4. Splice it into the destination lane immediately before the member
//!    currently holding the requested rank (append when no rank was given,
//!    or when every member ranks above it)
//! 5. Renumber both touched lanes to `1..=n`; other lanes are untouched
//!
//! Splice positions in step 4 are computed against the ranks the caller saw
//! in its snapshot, so "move to priority P" lands the target directly ahead
//! of the member that held P. No fractional rank ever exists, even
//! transiently.

use crate::{error::Result, Board, Client, ClientId, Error, Priority, Status};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A request to move one client to a new lane and/or rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    /// The client to move
    pub client_id: ClientId,
    /// Destination lane; `None` keeps the current lane
    pub status: Option<Status>,
    /// Destination rank; `None` appends on a lane change and requests
    /// nothing otherwise
    pub priority: Option<Priority>,
}

impl MoveRequest {
    /// Create a new move request.
    pub fn new(client_id: ClientId, status: Option<Status>, priority: Option<Priority>) -> Self {
        Self {
            client_id,
            status,
            priority,
        }
    }

    /// Move a client to another lane, appending at the bottom.
    pub fn to_lane(client_id: ClientId, status: Status) -> Self {
        Self::new(client_id, Some(status), None)
    }

    /// Re-rank a client within its current lane.
    pub fn to_rank(client_id: ClientId, priority: Priority) -> Self {
        Self::new(client_id, None, Some(priority))
    }
}

/// Result of a reorder pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderOutcome {
    /// The full corrected client set, in input order. Removed clients are
    /// absent.
    pub clients: Vec<Client>,
    /// Ids whose status or priority changed, in input order - the subset
    /// the caller must persist.
    pub changed: Vec<ClientId>,
}

impl ReorderOutcome {
    fn unchanged(clients: &[Client]) -> Self {
        Self {
            clients: clients.to_vec(),
            changed: Vec::new(),
        }
    }

    /// The clients named by [`ReorderOutcome::changed`].
    pub fn changed_clients(&self) -> impl Iterator<Item = &Client> {
        self.clients
            .iter()
            .filter(|client| self.changed.contains(&client.id))
    }
}

/// Move a client to a new lane and/or rank, renumbering the touched lanes.
///
/// Returns the complete corrected set; clients outside the touched lanes are
/// returned exactly as supplied. Fails with [`Error::UnknownClient`] when the
/// target id is not in the snapshot, without touching anything.
pub fn reorder(clients: &[Client], request: &MoveRequest) -> Result<ReorderOutcome> {
    let target = clients
        .iter()
        .find(|c| c.id == request.client_id)
        .ok_or(Error::UnknownClient(request.client_id))?;

    let dest_status = request.status.unwrap_or(target.status);

    // Nothing requested, or everything requested equals the current state.
    if dest_status == target.status && request.priority.map_or(true, |p| p == target.priority) {
        return Ok(ReorderOutcome::unchanged(clients));
    }

    let mut board = Board::from_clients(clients);

    // Lift the target out. Remaining members keep their snapshot ranks until
    // the final renumber, so the splice position is computed against the
    // ranks the caller saw.
    let mut moved = board
        .take(target.status, target.id)
        .ok_or(Error::UnknownClient(request.client_id))?;

    let lane = board.lane_mut(dest_status);
    let index = match request.priority {
        Some(priority) => lane.splice_index(priority),
        None => lane.len(),
    };
    moved.status = dest_status;
    lane.insert_at(index, moved);

    board.renumber_lane(target.status);
    board.renumber_lane(dest_status);

    Ok(outcome_from(clients, &board))
}

/// Drop a client from the board, renumbering its lane densely.
///
/// The removed client is absent from the outcome; `changed` lists the lane
/// members that shifted up to close the gap.
pub fn remove(clients: &[Client], client_id: ClientId) -> Result<ReorderOutcome> {
    let target = clients
        .iter()
        .find(|c| c.id == client_id)
        .ok_or(Error::UnknownClient(client_id))?;

    let mut board = Board::from_clients(clients);
    board
        .take(target.status, client_id)
        .ok_or(Error::UnknownClient(client_id))?;
    board.renumber_lane(target.status);

    Ok(outcome_from(clients, &board))
}

/// Project the board back onto the input sequence.
fn outcome_from(input: &[Client], board: &Board) -> ReorderOutcome {
    let positions: HashMap<ClientId, (Status, Priority)> = board
        .clients()
        .map(|c| (c.id, (c.status, c.priority)))
        .collect();

    let mut changed = Vec::new();
    let clients = input
        .iter()
        .filter_map(|client| {
            let (status, priority) = *positions.get(&client.id)?;
            if status != client.status || priority != client.priority {
                changed.push(client.id);
            }
            let mut updated = client.clone();
            updated.reposition(status, priority);
            Some(updated)
        })
        .collect();

    ReorderOutcome { clients, changed }
}
