//! Database operations for the clients table.

use crate::error::AppError;
use laneboard_engine::{Client, ClientId, Status};
use sqlx::{PgPool, Row};

/// A stored client row from the database.
#[derive(Debug)]
pub struct StoredClient {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: String,
    pub priority: i64,
    #[allow(dead_code)]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[allow(dead_code)]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for StoredClient {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> std::result::Result<Self, sqlx::Error> {
        Ok(StoredClient {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            status: row.try_get("status")?,
            priority: row.try_get("priority")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl StoredClient {
    /// Convert a database row to an engine Client.
    ///
    /// A status string that fails to parse means the store itself is corrupt;
    /// that surfaces as an internal error, never as a client fault.
    pub fn to_client(&self) -> Result<Client, AppError> {
        let status = Status::parse(&self.status)
            .map_err(|e| AppError::Internal(format!("corrupt client row {}: {}", self.id, e)))?;

        Ok(Client::new(
            self.id,
            self.name.clone(),
            self.description.clone(),
            status,
            self.priority as u32,
        ))
    }
}

/// Load the full board as engine clients, lane by lane, top of lane first.
pub async fn load_board(pool: &PgPool) -> Result<Vec<Client>, AppError> {
    let rows = list_clients(pool).await?;
    let mut clients = Vec::with_capacity(rows.len());
    for row in &rows {
        clients.push(row.to_client()?);
    }
    Ok(clients)
}

/// Get all clients, ordered by lane and rank.
pub async fn list_clients(pool: &PgPool) -> Result<Vec<StoredClient>, sqlx::Error> {
    sqlx::query_as::<_, StoredClient>(
        r#"
        SELECT id, name, description, status, priority, created_at, updated_at
        FROM clients
        ORDER BY status, priority
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Get all clients in one lane, ordered by rank.
pub async fn list_clients_by_status(
    pool: &PgPool,
    status: &str,
) -> Result<Vec<StoredClient>, sqlx::Error> {
    sqlx::query_as::<_, StoredClient>(
        r#"
        SELECT id, name, description, status, priority, created_at, updated_at
        FROM clients
        WHERE status = $1
        ORDER BY priority
        "#,
    )
    .bind(status)
    .fetch_all(pool)
    .await
}

/// Get a client by id.
pub async fn get_client(pool: &PgPool, id: ClientId) -> Result<Option<StoredClient>, sqlx::Error> {
    sqlx::query_as::<_, StoredClient>(
        r#"
        SELECT id, name, description, status, priority, created_at, updated_at
        FROM clients
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert a new client at a lane position.
pub async fn insert_client(
    pool: &PgPool,
    name: &str,
    description: &str,
    status: &str,
    priority: i64,
) -> Result<StoredClient, sqlx::Error> {
    sqlx::query_as::<_, StoredClient>(
        r#"
        INSERT INTO clients (name, description, status, priority)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, description, status, priority, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(status)
    .bind(priority)
    .fetch_one(pool)
    .await
}

/// Update a client's name and/or description. Ranking fields are never
/// touched here.
pub async fn update_client_fields(
    pool: &PgPool,
    id: ClientId,
    name: Option<&str>,
    description: Option<&str>,
) -> Result<Option<StoredClient>, sqlx::Error> {
    sqlx::query_as::<_, StoredClient>(
        r#"
        UPDATE clients
        SET name = COALESCE($2, name),
            description = COALESCE($3, description),
            updated_at = now()
        WHERE id = $1
        RETURNING id, name, description, status, priority, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .fetch_optional(pool)
    .await
}

/// Persist the status/priority of every changed client as one atomic batch.
///
/// The lane-rank unique constraint is deferred, so intermediate states inside
/// the transaction may collide; only the committed state must be dense.
pub async fn persist_positions(pool: &PgPool, clients: &[&Client]) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for client in clients {
        sqlx::query(
            r#"
            UPDATE clients
            SET status = $2, priority = $3, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(client.id)
        .bind(client.status.as_str())
        .bind(client.priority as i64)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    Ok(())
}

/// Delete a client and persist its lane's renumbering in the same
/// transaction, so readers never observe a gapped lane.
pub async fn delete_client_with_positions(
    pool: &PgPool,
    id: ClientId,
    shifted: &[&Client],
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query(r#"DELETE FROM clients WHERE id = $1"#)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    for client in shifted {
        sqlx::query(
            r#"
            UPDATE clients
            SET status = $2, priority = $3, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(client.id)
        .bind(client.status.as_str())
        .bind(client.priority as i64)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    Ok(())
}
