//! Actor and director entity models.
//!
//! Both tables carry the same columns, so the row struct and DTOs are shared;
//! the repositories keep the tables distinct (an actor credit and a director
//! credit are different relations on a movie).

use kinoteka_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `actors` or `directors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub bio: Option<String>,
    pub age: i32,
    pub image_path: Option<String>,
}

/// DTO for creating an actor or director.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePerson {
    pub name: String,
    pub bio: Option<String>,
    pub age: Option<i32>,
    pub image_path: Option<String>,
}

/// DTO for updating an actor or director. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePerson {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub age: Option<i32>,
    pub image_path: Option<String>,
}

/// A person's detail view: the row plus the movies they are credited in.
#[derive(Debug, Clone, Serialize)]
pub struct PersonDetail {
    #[serde(flatten)]
    pub person: Person,
    pub movies: Vec<crate::models::movie::MovieRef>,
}
