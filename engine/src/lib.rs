//! # Laneboard Engine
//!
//! A deterministic ranking engine for kanban-style boards.
//!
//! This crate provides the core logic for keeping clients ordered across the
//! three status lanes of a board. Every move recomputes the affected lanes so
//! that priorities always form a dense, contiguous, 1-based ranking with no
//! duplicates or gaps - with guaranteed determinism: the same inputs always
//! produce the same outputs.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine has no knowledge of storage, network, or platform
//! - **Deterministic**: same inputs always produce same outputs
//! - **Testable**: pure logic, no mocks needed
//! - **Total**: validation happens before any mutation; there is no partial
//!   output on error
//!
//! ## Core Concepts
//!
//! ### Clients
//!
//! Work items are stored as [`Client`] records with:
//! - Unique numeric ID
//! - Name and description
//! - Status lane membership
//! - Priority rank within the lane (1 = top)
//!
//! ### Lanes
//!
//! A board has exactly three lanes: [`Status::Backlog`],
//! [`Status::InProgress`], and [`Status::Complete`]. Priorities are
//! independent between lanes; within a lane they are always `1..=n`.
//!
//! ### Moves
//!
//! Changes are expressed as a [`MoveRequest`] - the client to move plus an
//! optional target lane and an optional target rank. [`reorder`] consumes a
//! snapshot of the whole board and returns the corrected board; the caller
//! owns loading and persisting it.
//!
//! ## Quick Start
//!
//! ```rust
//! use laneboard_engine::{reorder, Client, MoveRequest, Status};
//!
//! // The full board, as loaded by the caller.
//! let clients = vec![
//!     Client::new(1, "Acme", "Kickoff deck", Status::Backlog, 1),
//!     Client::new(2, "Globex", "Contract audit", Status::Backlog, 2),
//!     Client::new(3, "Initech", "Data migration", Status::InProgress, 1),
//! ];
//!
//! // Send Globex to the top of the backlog.
//! let outcome = reorder(&clients, &MoveRequest::to_rank(2, 1)).unwrap();
//!
//! assert_eq!(outcome.clients[0].priority, 2); // Acme pushed down
//! assert_eq!(outcome.clients[1].priority, 1); // Globex on top
//! assert_eq!(outcome.changed, vec![1, 2]);    // Initech untouched
//! ```

pub mod board;
pub mod client;
pub mod error;
pub mod reorder;
pub mod status;

// Re-export main types at crate root
pub use board::{Board, Lane};
pub use client::Client;
pub use error::Error;
pub use reorder::{remove, reorder, MoveRequest, ReorderOutcome};
pub use status::Status;

/// Type aliases for clarity
pub type ClientId = i64;
pub type Priority = u32;
