//! Actor entity model and DTOs.

use casting_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `actors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    /// Stored as text; clients send either a number or a numeric string.
    pub age: String,
    pub gender: String,
}

/// DTO for inserting a new actor.
#[derive(Debug, Clone)]
pub struct CreateActor {
    pub name: String,
    pub age: String,
    pub gender: String,
}

/// DTO for patching an actor. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateActor {
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
}
