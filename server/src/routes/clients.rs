//! Client board routes.
//!
//! Mutations that touch lane ranking (create, move, delete) run behind the
//! application write lock, so every load-reorder-persist cycle sees a
//! settled board.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use laneboard_engine::Client;

use crate::error::Result;
use crate::handlers::{
    handle_create, handle_delete, handle_get, handle_list, handle_move, handle_update,
    CreateRequest, DeleteResponse, ListQuery, ListResponse, MoveBody, MoveResponse, UpdateRequest,
};
use crate::AppState;

/// Create client routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(list_handler).post(create_handler))
        .route(
            "/clients/{id}",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .route("/clients/{id}/move", post(move_handler))
}

/// GET /clients - list the board, optionally filtered by lane.
async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>> {
    let response = handle_list(&state.pool, query).await?;
    Ok(Json(response))
}

/// GET /clients/{id} - fetch one client.
async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Client>> {
    let client = handle_get(&state.pool, id).await?;
    Ok(Json(client))
}

/// POST /clients - create a client at the bottom of its lane.
async fn create_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateRequest>,
) -> Result<Json<Client>> {
    let _guard = state.write_lock.lock().await;
    let client = handle_create(&state.pool, request).await?;
    Ok(Json(client))
}

/// PUT /clients/{id} - update descriptive fields; never touches ranking.
async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<Client>> {
    let client = handle_update(&state.pool, id, request).await?;
    Ok(Json(client))
}

/// POST /clients/{id}/move - reassign lane and/or rank.
async fn move_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<MoveBody>,
) -> Result<Json<MoveResponse>> {
    let _guard = state.write_lock.lock().await;
    let response = handle_move(&state.pool, id, body).await?;
    Ok(Json(response))
}

/// DELETE /clients/{id} - remove a client and close its lane's gap.
async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    let _guard = state.write_lock.lock().await;
    let response = handle_delete(&state.pool, id).await?;
    Ok(Json(response))
}
