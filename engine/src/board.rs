//! Board - the in-memory lane container.
//!
//! The board holds one ordered sequence per status lane, so the dense-rank
//! invariant is locally checkable: a lane is correct exactly when its members,
//! read top to bottom, carry priorities `1..=n`.

use crate::{Client, ClientId, Priority, Status};

/// An ordered lane of clients.
///
/// Members are kept sorted ascending by priority. Ties (possible only in
/// non-dense input) preserve the order the clients were loaded in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lane {
    clients: Vec<Client>,
}

impl Lane {
    /// Create an empty lane.
    pub fn new() -> Self {
        Self {
            clients: Vec::new(),
        }
    }

    /// Members in rank order.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Iterate members in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Check if the lane has no members.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Check the dense-rank invariant: priorities are exactly `1..=n`.
    pub fn is_dense(&self) -> bool {
        self.clients
            .iter()
            .enumerate()
            .all(|(index, client)| client.priority as usize == index + 1)
    }

    pub(crate) fn push(&mut self, client: Client) {
        self.clients.push(client);
    }

    /// Remove and return the member with the given id, closing the gap.
    pub(crate) fn take(&mut self, id: ClientId) -> Option<Client> {
        let index = self.clients.iter().position(|c| c.id == id)?;
        Some(self.clients.remove(index))
    }

    pub(crate) fn insert_at(&mut self, index: usize, client: Client) {
        self.clients.insert(index, client);
    }

    /// Index at which a client requesting the given priority is spliced in:
    /// immediately before the member currently holding that rank, or at the
    /// end when no member ranks at or below it.
    pub(crate) fn splice_index(&self, priority: Priority) -> usize {
        self.clients
            .iter()
            .position(|c| c.priority >= priority)
            .unwrap_or(self.clients.len())
    }

    /// Re-assign ranks `1..=n` in member order.
    pub(crate) fn renumber(&mut self) {
        for (index, client) in self.clients.iter_mut().enumerate() {
            client.priority = index as Priority + 1;
        }
    }
}

/// The full board: one lane per status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    backlog: Lane,
    in_progress: Lane,
    complete: Lane,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from a flat client snapshot.
    ///
    /// Each lane is sorted ascending by priority; clients that share a
    /// priority (non-dense input) keep their snapshot order.
    pub fn from_clients(clients: &[Client]) -> Self {
        let mut board = Self::new();
        for client in clients {
            board.lane_mut(client.status).push(client.clone());
        }
        for status in Status::ALL {
            board.lane_mut(status).clients.sort_by_key(|c| c.priority);
        }
        board
    }

    /// The lane for a status.
    pub fn lane(&self, status: Status) -> &Lane {
        match status {
            Status::Backlog => &self.backlog,
            Status::InProgress => &self.in_progress,
            Status::Complete => &self.complete,
        }
    }

    pub(crate) fn lane_mut(&mut self, status: Status) -> &mut Lane {
        match status {
            Status::Backlog => &mut self.backlog,
            Status::InProgress => &mut self.in_progress,
            Status::Complete => &mut self.complete,
        }
    }

    /// Total number of clients across all lanes.
    pub fn len(&self) -> usize {
        Status::ALL.iter().map(|s| self.lane(*s).len()).sum()
    }

    /// Check if the board has no clients.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the dense-rank invariant on every lane.
    pub fn is_dense(&self) -> bool {
        Status::ALL.iter().all(|s| self.lane(*s).is_dense())
    }

    /// Rank a newly created client receives when appended to a lane.
    pub fn next_priority(&self, status: Status) -> Priority {
        self.lane(status).len() as Priority + 1
    }

    /// Iterate all clients, lane by lane in board order.
    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.backlog
            .iter()
            .chain(self.in_progress.iter())
            .chain(self.complete.iter())
    }

    /// Remove a client from a lane, closing the gap.
    pub(crate) fn take(&mut self, status: Status, id: ClientId) -> Option<Client> {
        self.lane_mut(status).take(id)
    }

    /// Re-assign ranks `1..=n` within a lane.
    pub(crate) fn renumber_lane(&mut self, status: Status) {
        self.lane_mut(status).renumber();
    }
}
