//! Movie entity model and DTOs.

use casting_core::types::DbId;
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub release_date: NaiveDate,
}

/// DTO for inserting a new movie.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub title: String,
    pub release_date: NaiveDate,
}

/// DTO for patching a movie. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
}
