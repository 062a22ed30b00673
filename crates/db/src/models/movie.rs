//! Movie entity model, filter parameters, and DTOs.

use kinoteka_core::error::CoreError;
use kinoteka_core::tier::Tier;
use kinoteka_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub name: String,
    pub year: i32,
    pub runtime_minutes: Option<i32>,
    pub description: String,
    pub trailer_path: Option<String>,
    pub image_path: Option<String>,
    /// Tier as stored: `"simple"` or `"pro"` (CHECK-constrained).
    pub status: String,
    pub resolutions: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A movie row joined with its aggregated average rating.
///
/// Produced by the list query; the aggregate uses the same
/// mean-rounded-to-2-decimals / 0-when-unrated semantics as
/// `kinoteka_core::rating::average_rating`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieWithRating {
    pub id: DbId,
    pub name: String,
    pub year: i32,
    pub runtime_minutes: Option<i32>,
    pub description: String,
    pub trailer_path: Option<String>,
    pub image_path: Option<String>,
    pub status: String,
    pub resolutions: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub average_rating: f64,
}

/// Minimal movie reference embedded in person/favorite detail views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieRef {
    pub id: DbId,
    pub name: String,
    pub year: i32,
}

/// DTO for creating a new movie, relation sets included.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub name: String,
    pub year: i32,
    pub runtime_minutes: Option<i32>,
    pub description: String,
    pub trailer_path: Option<String>,
    pub image_path: Option<String>,
    pub status: Option<Tier>,
    #[serde(default)]
    pub resolutions: Vec<String>,
    #[serde(default)]
    pub country_ids: Vec<DbId>,
    #[serde(default)]
    pub genre_ids: Vec<DbId>,
    #[serde(default)]
    pub actor_ids: Vec<DbId>,
    #[serde(default)]
    pub director_ids: Vec<DbId>,
}

/// DTO for updating a movie. All fields optional; a present relation id
/// vector replaces that relation set wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovie {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub runtime_minutes: Option<i32>,
    pub description: Option<String>,
    pub trailer_path: Option<String>,
    pub image_path: Option<String>,
    pub status: Option<Tier>,
    pub resolutions: Option<Vec<String>>,
    pub country_ids: Option<Vec<DbId>>,
    pub genre_ids: Option<Vec<DbId>>,
    pub actor_ids: Option<Vec<DbId>>,
    pub director_ids: Option<Vec<DbId>>,
}

/// Requested ordering for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovieOrdering {
    /// Insertion order -- no `ordering` parameter given.
    #[default]
    Unspecified,
    YearAsc,
    YearDesc,
}

impl MovieOrdering {
    /// Parse the `ordering` query value: `year` ascending, `-year` descending.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "year" => Ok(MovieOrdering::YearAsc),
            "-year" => Ok(MovieOrdering::YearDesc),
            other => Err(CoreError::Validation(format!(
                "Invalid ordering '{other}'. Must be one of: year, -year"
            ))),
        }
    }

    /// The ORDER BY clause for this ordering. Ties (and the unspecified
    /// case) fall back to id so pagination stays stable.
    pub fn order_clause(self) -> &'static str {
        match self {
            MovieOrdering::Unspecified => "m.id",
            MovieOrdering::YearAsc => "m.year ASC, m.id",
            MovieOrdering::YearDesc => "m.year DESC, m.id",
        }
    }
}

/// Catalog listing filter. All predicates combine with AND; relation
/// predicates match by foreign key, exactly one per relation.
///
/// Deliberately carries no viewer/tier input: listing is ungated and the
/// detail endpoint enforces access instead.
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    pub year_gt: Option<i32>,
    pub year_lt: Option<i32>,
    pub genre_id: Option<DbId>,
    pub country_id: Option<DbId>,
    pub actor_id: Option<DbId>,
    pub director_id: Option<DbId>,
    pub status: Option<Tier>,
    /// Substring match against the movie name, case-insensitive.
    pub search: Option<String>,
    pub ordering: MovieOrdering,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_parses_year_directions() {
        assert_eq!(MovieOrdering::parse("year").unwrap(), MovieOrdering::YearAsc);
        assert_eq!(
            MovieOrdering::parse("-year").unwrap(),
            MovieOrdering::YearDesc
        );
    }

    #[test]
    fn test_ordering_rejects_unknown_fields() {
        let result = MovieOrdering::parse("name");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid ordering 'name'"));
    }

    #[test]
    fn test_order_clause_is_stable_on_ties() {
        assert_eq!(MovieOrdering::YearAsc.order_clause(), "m.year ASC, m.id");
        assert_eq!(MovieOrdering::YearDesc.order_clause(), "m.year DESC, m.id");
        assert_eq!(MovieOrdering::Unspecified.order_clause(), "m.id");
    }
}
