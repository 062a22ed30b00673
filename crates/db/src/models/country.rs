//! Country entity model and DTOs.

use kinoteka_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `countries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Country {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new country.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCountry {
    pub name: String,
}

/// DTO for renaming a country.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCountry {
    pub name: Option<String>,
}
