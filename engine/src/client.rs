//! Client record type.

use crate::{ClientId, Priority, Status};
use serde::{Deserialize, Serialize};

/// A work item on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Unique identifier, immutable for the life of the client
    pub id: ClientId,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Lane this client currently belongs to
    pub status: Status,
    /// Rank within the lane; 1 is the top
    pub priority: Priority,
}

impl Client {
    /// Create a new client.
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        description: impl Into<String>,
        status: Status,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            status,
            priority,
        }
    }

    /// Move this client to a lane position.
    pub fn reposition(&mut self, status: Status, priority: Priority) {
        self.status = status;
        self.priority = priority;
    }

    /// Check whether this client sits in the given lane.
    pub fn is_in(&self, status: Status) -> bool {
        self.status == status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_client() {
        let client = Client::new(1, "Acme", "Kickoff deck", Status::Backlog, 1);

        assert_eq!(client.id, 1);
        assert_eq!(client.name, "Acme");
        assert_eq!(client.description, "Kickoff deck");
        assert_eq!(client.status, Status::Backlog);
        assert_eq!(client.priority, 1);
        assert!(client.is_in(Status::Backlog));
    }

    #[test]
    fn reposition_client() {
        let mut client = Client::new(1, "Acme", "", Status::Backlog, 3);

        client.reposition(Status::InProgress, 1);

        assert_eq!(client.status, Status::InProgress);
        assert_eq!(client.priority, 1);
        assert!(!client.is_in(Status::Backlog));
    }

    #[test]
    fn serialization_roundtrip() {
        let client = Client::new(7, "Globex", "Contract audit", Status::InProgress, 2);

        let json = serde_json::to_string(&client).unwrap();
        let parsed: Client = serde_json::from_str(&json).unwrap();

        assert_eq!(client, parsed);
    }

    #[test]
    fn serialization_format() {
        let client = Client::new(7, "Globex", "", Status::InProgress, 2);
        let json = serde_json::to_string(&client).unwrap();

        assert!(json.contains("\"status\":\"in-progress\""));
        assert!(json.contains("\"priority\":2"));
    }
}
