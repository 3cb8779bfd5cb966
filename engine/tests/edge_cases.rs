//! Edge case tests for laneboard-engine
//!
//! These tests cover boundary conditions and unusual inputs.

use laneboard_engine::{remove, reorder, Board, Client, MoveRequest, Priority, Status};

fn client(id: i64, status: Status, priority: Priority) -> Client {
    Client::new(id, format!("client-{}", id), "", status, priority)
}

fn dense_lane(status: Status, first_id: i64, len: usize) -> Vec<Client> {
    (0..len)
        .map(|i| client(first_id + i as i64, status, i as Priority + 1))
        .collect()
}

// ============================================================================
// String Edge Cases
// ============================================================================

#[test]
fn empty_name_and_description() {
    let clients = vec![
        Client::new(1, "", "", Status::Backlog, 1),
        Client::new(2, "", "", Status::Backlog, 2),
    ];

    let outcome = reorder(&clients, &MoveRequest::to_rank(2, 1)).unwrap();

    assert_eq!(outcome.clients[0].priority, 2);
    assert_eq!(outcome.clients[1].priority, 1);
    assert_eq!(outcome.clients[0].name, "");
}

#[test]
fn unicode_names_survive_moves() {
    let names = vec![
        "日本語テスト",
        "Привет мир",
        "مرحبا بالعالم",
        "🎉🚀💯",
        "Hello\nWorld\tTab",
    ];

    let clients: Vec<Client> = names
        .iter()
        .enumerate()
        .map(|(i, name)| Client::new(i as i64 + 1, *name, "", Status::Backlog, i as Priority + 1))
        .collect();

    let outcome = reorder(&clients, &MoveRequest::to_rank(5, 1)).unwrap();

    assert!(Board::from_clients(&outcome.clients).is_dense());
    for (i, name) in names.iter().enumerate() {
        assert_eq!(outcome.clients[i].name, *name, "name mangled: {}", name);
    }
}

#[test]
fn very_long_description() {
    // 1MB description rides along untouched.
    let long = "x".repeat(1024 * 1024);
    let clients = vec![
        Client::new(1, "a", long.clone(), Status::Backlog, 1),
        Client::new(2, "b", "", Status::Backlog, 2),
    ];

    let outcome = reorder(&clients, &MoveRequest::to_rank(2, 1)).unwrap();

    assert_eq!(outcome.clients[0].description.len(), 1024 * 1024);
}

// ============================================================================
// Rank Edge Cases
// ============================================================================

#[test]
fn zero_priority_clamps_to_top() {
    // The caller rejects non-positive ranks, but the engine stays total:
    // everything below rank 1 splices at the top.
    let clients = dense_lane(Status::Backlog, 1, 3);

    let outcome = reorder(&clients, &MoveRequest::to_rank(3, 0)).unwrap();

    assert_eq!(outcome.clients[2].priority, 1);
    assert!(Board::from_clients(&outcome.clients).is_dense());
}

#[test]
fn max_priority_appends() {
    let clients = dense_lane(Status::Backlog, 1, 3);

    let outcome = reorder(&clients, &MoveRequest::to_rank(1, u32::MAX)).unwrap();

    assert_eq!(outcome.clients[0].priority, 3);
    assert!(Board::from_clients(&outcome.clients).is_dense());
}

#[test]
fn single_client_board() {
    let clients = vec![client(1, Status::Backlog, 1)];

    // Re-ranking the only member anywhere is a fixed point.
    let outcome = reorder(&clients, &MoveRequest::to_rank(1, 5)).unwrap();
    assert_eq!(outcome.clients, clients);

    // Moving it across lanes lands it at rank 1.
    let outcome = reorder(&clients, &MoveRequest::to_lane(1, Status::Complete)).unwrap();
    assert_eq!(outcome.clients[0].status, Status::Complete);
    assert_eq!(outcome.clients[0].priority, 1);
}

// ============================================================================
// Input Shape Edge Cases
// ============================================================================

#[test]
fn gapped_lane_heals_when_touched() {
    let clients = vec![
        client(1, Status::Backlog, 10),
        client(2, Status::Backlog, 20),
        client(3, Status::Backlog, 30),
    ];

    let outcome = reorder(&clients, &MoveRequest::to_rank(2, 30)).unwrap();

    let board = Board::from_clients(&outcome.clients);
    assert!(board.lane(Status::Backlog).is_dense());
    // Rank 30's previous holder was pushed below the target.
    let ids: Vec<_> = board.lane(Status::Backlog).iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn duplicate_priorities_keep_input_order() {
    // Corrupt input: two members share rank 1. The snapshot order is the
    // tie-break, and a touch of the lane heals it.
    let clients = vec![
        client(1, Status::Backlog, 1),
        client(2, Status::Backlog, 1),
        client(3, Status::Backlog, 2),
    ];

    let outcome = reorder(&clients, &MoveRequest::to_rank(3, 1)).unwrap();

    let board = Board::from_clients(&outcome.clients);
    let ids: Vec<_> = board.lane(Status::Backlog).iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert!(board.is_dense());
}

#[test]
fn snapshot_order_does_not_matter() {
    let mut forward = dense_lane(Status::Backlog, 1, 5);
    forward.extend(dense_lane(Status::InProgress, 10, 3));

    let mut reversed = forward.clone();
    reversed.reverse();

    let request = MoveRequest::new(3, Some(Status::InProgress), Some(2));
    let a = reorder(&forward, &request).unwrap();
    let b = reorder(&reversed, &request).unwrap();

    // Same final positions regardless of snapshot order.
    let board_a = Board::from_clients(&a.clients);
    let board_b = Board::from_clients(&b.clients);
    for status in Status::ALL {
        let ids_a: Vec<_> = board_a.lane(status).iter().map(|c| c.id).collect();
        let ids_b: Vec<_> = board_b.lane(status).iter().map(|c| c.id).collect();
        assert_eq!(ids_a, ids_b);
    }
}

// ============================================================================
// Scale Edge Cases
// ============================================================================

#[test]
fn thousand_client_lane() {
    let clients = dense_lane(Status::Backlog, 1, 1000);

    // Bottom to top: every other member shifts down one.
    let outcome = reorder(&clients, &MoveRequest::to_rank(1000, 1)).unwrap();

    let board = Board::from_clients(&outcome.clients);
    assert_eq!(board.lane(Status::Backlog).clients()[0].id, 1000);
    assert!(board.is_dense());
    assert_eq!(outcome.changed.len(), 1000);
}

#[test]
fn full_board_walk() {
    // Walk a client through every lane and back, checking the invariant at
    // every step.
    let mut clients = dense_lane(Status::Backlog, 1, 4);
    clients.extend(dense_lane(Status::InProgress, 10, 3));
    clients.extend(dense_lane(Status::Complete, 20, 2));

    let steps = vec![
        MoveRequest::to_lane(1, Status::InProgress),
        MoveRequest::new(1, Some(Status::Complete), Some(1)),
        MoveRequest::to_rank(1, 3),
        MoveRequest::to_lane(1, Status::Backlog),
    ];

    let mut current = clients;
    for request in &steps {
        let outcome = reorder(&current, request).unwrap();
        let board = Board::from_clients(&outcome.clients);
        assert!(board.is_dense(), "lane went non-dense after {:?}", request);
        assert_eq!(outcome.clients.len(), 9);
        current = outcome.clients;
    }

    // Round trip: back in the backlog, appended at the bottom.
    let board = Board::from_clients(&current);
    let backlog = board.lane(Status::Backlog);
    assert_eq!(backlog.clients()[3].id, 1);
    assert_eq!(backlog.clients()[3].priority, 4);
}

#[test]
fn drain_a_lane_by_removal() {
    let mut current = dense_lane(Status::Backlog, 1, 5);

    for id in 1..=5 {
        let outcome = remove(&current, id).unwrap();
        assert!(Board::from_clients(&outcome.clients).is_dense());
        current = outcome.clients;
    }

    assert!(current.is_empty());
}

#[test]
fn append_ranks_track_lane_growth() {
    let mut current: Vec<Client> = Vec::new();

    // Simulate the caller's create path: each new client is appended at
    // the rank the board hands out.
    for id in 1..=10 {
        let board = Board::from_clients(&current);
        let priority = board.next_priority(Status::Backlog);
        assert_eq!(priority, id as Priority);
        current.push(client(id, Status::Backlog, priority));
    }

    assert!(Board::from_clients(&current).is_dense());
}
