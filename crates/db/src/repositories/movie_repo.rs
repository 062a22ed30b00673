//! Repository for the `movies` table and its relation join tables.

use kinoteka_core::relations::PersonCredit;
use kinoteka_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::movie::{
    CreateMovie, Movie, MovieFilter, MovieWithRating, UpdateMovie,
};
use crate::repositories::{clamp_limit, clamp_offset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, year, runtime_minutes, description, trailer_path, \
                       image_path, status, resolutions, created_at, updated_at";

/// Aggregate mirroring `kinoteka_core::rating::average_rating`: mean of
/// stars rounded to 2 decimals, 0 when the movie has no ratings.
const AVG_RATING: &str = "ROUND(COALESCE(AVG(r.stars), 0)::numeric, 2)::float8";

/// Provides CRUD, filtered listing, and relation queries for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie and its relation sets in one transaction,
    /// returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO movies \
                (name, year, runtime_minutes, description, trailer_path, image_path, status, resolutions) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 'simple'), $8) \
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(&input.name)
            .bind(input.year)
            .bind(input.runtime_minutes)
            .bind(&input.description)
            .bind(input.trailer_path.as_deref())
            .bind(input.image_path.as_deref())
            .bind(input.status.map(|t| t.as_str()))
            .bind(&input.resolutions)
            .fetch_one(&mut *tx)
            .await?;

        replace_countries(&mut tx, movie.id, &input.country_ids).await?;
        replace_genres(&mut tx, movie.id, &input.genre_ids).await?;
        replace_actors(&mut tx, movie.id, &input.actor_ids).await?;
        replace_directors(&mut tx, movie.id, &input.director_ids).await?;

        tx.commit().await?;
        Ok(movie)
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movies matching `filter`, each joined with its average rating.
    ///
    /// Every predicate combines with AND; no tier gate is applied here --
    /// access enforcement happens at detail retrieval.
    pub async fn list(
        pool: &PgPool,
        filter: &MovieFilter,
    ) -> Result<Vec<MovieWithRating>, sqlx::Error> {
        let limit = clamp_limit(filter.limit);
        let offset = clamp_offset(filter.offset);

        let conditions = filter_conditions(filter);
        let limit_idx = conditions.len() + 1;

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT \
                m.id, m.name, m.year, m.runtime_minutes, m.description, \
                m.trailer_path, m.image_path, m.status, m.resolutions, \
                m.created_at, m.updated_at, \
                {AVG_RATING} AS average_rating \
             FROM movies m \
             LEFT JOIN ratings r ON r.movie_id = m.id \
             {where_clause} \
             GROUP BY m.id \
             ORDER BY {order_clause} \
             LIMIT ${limit_idx} OFFSET ${offset_idx}",
            order_clause = filter.ordering.order_clause(),
            offset_idx = limit_idx + 1,
        );

        let mut q = sqlx::query_as::<_, MovieWithRating>(&query);

        // Bind dynamic parameters in the same order filter_conditions
        // pushed their placeholders.
        if let Some(year_gt) = filter.year_gt {
            q = q.bind(year_gt);
        }
        if let Some(year_lt) = filter.year_lt {
            q = q.bind(year_lt);
        }
        if let Some(genre_id) = filter.genre_id {
            q = q.bind(genre_id);
        }
        if let Some(country_id) = filter.country_id {
            q = q.bind(country_id);
        }
        if let Some(actor_id) = filter.actor_id {
            q = q.bind(actor_id);
        }
        if let Some(director_id) = filter.director_id {
            q = q.bind(director_id);
        }
        if let Some(status) = filter.status {
            q = q.bind(status.as_str());
        }
        if let Some(ref search) = filter.search {
            q = q.bind(format!("%{search}%"));
        }

        q = q.bind(limit).bind(offset);
        q.fetch_all(pool).await
    }

    /// Update a movie. Only non-`None` fields are applied; a present
    /// relation id vector replaces that relation set wholesale.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE movies SET \
                name = COALESCE($2, name), \
                year = COALESCE($3, year), \
                runtime_minutes = COALESCE($4, runtime_minutes), \
                description = COALESCE($5, description), \
                trailer_path = COALESCE($6, trailer_path), \
                image_path = COALESCE($7, image_path), \
                status = COALESCE($8, status), \
                resolutions = COALESCE($9, resolutions) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.year)
            .bind(input.runtime_minutes)
            .bind(input.description.as_deref())
            .bind(input.trailer_path.as_deref())
            .bind(input.image_path.as_deref())
            .bind(input.status.map(|t| t.as_str()))
            .bind(input.resolutions.as_deref())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(movie) = movie else {
            tx.rollback().await?;
            return Ok(None);
        };

        if let Some(ref ids) = input.country_ids {
            replace_countries(&mut tx, movie.id, ids).await?;
        }
        if let Some(ref ids) = input.genre_ids {
            replace_genres(&mut tx, movie.id, ids).await?;
        }
        if let Some(ref ids) = input.actor_ids {
            replace_actors(&mut tx, movie.id, ids).await?;
        }
        if let Some(ref ids) = input.director_ids {
            replace_directors(&mut tx, movie.id, ids).await?;
        }

        tx.commit().await?;
        Ok(Some(movie))
    }

    /// Delete a movie. Cascades to languages, moments, ratings, favorite
    /// entries, and history entries. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Country names related to a movie, in join-row insertion order.
    ///
    /// The head of this sequence is what detail views show as the
    /// arbitrary representative; the order is storage order, not
    /// business-meaningful.
    pub async fn country_names(pool: &PgPool, movie_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT c.name FROM movie_countries mc \
             JOIN countries c ON c.id = mc.country_id \
             WHERE mc.movie_id = $1 ORDER BY mc.id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// Genre names related to a movie, in join-row insertion order.
    pub async fn genre_names(pool: &PgPool, movie_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT g.name FROM movie_genres mg \
             JOIN genres g ON g.id = mg.genre_id \
             WHERE mg.movie_id = $1 ORDER BY mg.id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// Actor credits for a movie, in join-row insertion order.
    pub async fn actor_credits(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<PersonCredit>, sqlx::Error> {
        let rows: Vec<(String, i32)> = sqlx::query_as(
            "SELECT a.name, a.age FROM movie_actors ma \
             JOIN actors a ON a.id = ma.actor_id \
             WHERE ma.movie_id = $1 ORDER BY ma.id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(name, age)| PersonCredit { name, age })
            .collect())
    }

    /// Director credits for a movie, in join-row insertion order.
    pub async fn director_credits(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<PersonCredit>, sqlx::Error> {
        let rows: Vec<(String, i32)> = sqlx::query_as(
            "SELECT d.name, d.age FROM movie_directors md \
             JOIN directors d ON d.id = md.director_id \
             WHERE md.movie_id = $1 ORDER BY md.id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(name, age)| PersonCredit { name, age })
            .collect())
    }
}

/// Build the numbered WHERE predicates for a listing filter, in the same
/// order `list` binds their values.
fn filter_conditions(filter: &MovieFilter) -> Vec<String> {
    let mut conditions = Vec::new();
    let mut bind_idx = 1u32;

    if filter.year_gt.is_some() {
        conditions.push(format!("m.year > ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.year_lt.is_some() {
        conditions.push(format!("m.year < ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.genre_id.is_some() {
        conditions.push(format!(
            "EXISTS (SELECT 1 FROM movie_genres mg \
             WHERE mg.movie_id = m.id AND mg.genre_id = ${bind_idx})"
        ));
        bind_idx += 1;
    }
    if filter.country_id.is_some() {
        conditions.push(format!(
            "EXISTS (SELECT 1 FROM movie_countries mc \
             WHERE mc.movie_id = m.id AND mc.country_id = ${bind_idx})"
        ));
        bind_idx += 1;
    }
    if filter.actor_id.is_some() {
        conditions.push(format!(
            "EXISTS (SELECT 1 FROM movie_actors ma \
             WHERE ma.movie_id = m.id AND ma.actor_id = ${bind_idx})"
        ));
        bind_idx += 1;
    }
    if filter.director_id.is_some() {
        conditions.push(format!(
            "EXISTS (SELECT 1 FROM movie_directors md \
             WHERE md.movie_id = m.id AND md.director_id = ${bind_idx})"
        ));
        bind_idx += 1;
    }
    if filter.status.is_some() {
        conditions.push(format!("m.status = ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.search.is_some() {
        conditions.push(format!("m.name ILIKE ${bind_idx}"));
    }

    conditions
}

async fn replace_countries(
    conn: &mut PgConnection,
    movie_id: DbId,
    ids: &[DbId],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM movie_countries WHERE movie_id = $1")
        .bind(movie_id)
        .execute(&mut *conn)
        .await?;
    for country_id in ids {
        sqlx::query("INSERT INTO movie_countries (movie_id, country_id) VALUES ($1, $2)")
            .bind(movie_id)
            .bind(country_id)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

async fn replace_genres(
    conn: &mut PgConnection,
    movie_id: DbId,
    ids: &[DbId],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM movie_genres WHERE movie_id = $1")
        .bind(movie_id)
        .execute(&mut *conn)
        .await?;
    for genre_id in ids {
        sqlx::query("INSERT INTO movie_genres (movie_id, genre_id) VALUES ($1, $2)")
            .bind(movie_id)
            .bind(genre_id)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

async fn replace_actors(
    conn: &mut PgConnection,
    movie_id: DbId,
    ids: &[DbId],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM movie_actors WHERE movie_id = $1")
        .bind(movie_id)
        .execute(&mut *conn)
        .await?;
    for actor_id in ids {
        sqlx::query("INSERT INTO movie_actors (movie_id, actor_id) VALUES ($1, $2)")
            .bind(movie_id)
            .bind(actor_id)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

async fn replace_directors(
    conn: &mut PgConnection,
    movie_id: DbId,
    ids: &[DbId],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM movie_directors WHERE movie_id = $1")
        .bind(movie_id)
        .execute(&mut *conn)
        .await?;
    for director_id in ids {
        sqlx::query("INSERT INTO movie_directors (movie_id, director_id) VALUES ($1, $2)")
            .bind(movie_id)
            .bind(director_id)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use kinoteka_core::tier::Tier;

    use super::*;
    use crate::models::movie::MovieOrdering;

    #[test]
    fn test_empty_filter_produces_no_conditions() {
        let conditions = filter_conditions(&MovieFilter::default());
        assert!(conditions.is_empty());
    }

    #[test]
    fn test_placeholders_are_numbered_in_bind_order() {
        let filter = MovieFilter {
            year_gt: Some(2015),
            genre_id: Some(3),
            search: Some("incep".to_string()),
            ordering: MovieOrdering::YearAsc,
            ..Default::default()
        };
        let conditions = filter_conditions(&filter);
        assert_eq!(conditions.len(), 3);
        assert_eq!(conditions[0], "m.year > $1");
        assert!(conditions[1].contains("mg.genre_id = $2"));
        assert_eq!(conditions[2], "m.name ILIKE $3");
    }

    #[test]
    fn test_all_predicates_combine_with_and() {
        let filter = MovieFilter {
            year_gt: Some(2000),
            year_lt: Some(2020),
            genre_id: Some(1),
            country_id: Some(2),
            actor_id: Some(3),
            director_id: Some(4),
            status: Some(Tier::Pro),
            search: Some("x".to_string()),
            ..Default::default()
        };
        let conditions = filter_conditions(&filter);
        assert_eq!(conditions.len(), 8);
        assert_eq!(conditions.join(" AND ").matches('$').count(), 8);
        assert!(conditions[6].contains("m.status = $7"));
    }
}
