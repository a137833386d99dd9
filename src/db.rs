use crate::models::review::Review;
use log::{debug, info};
use rusqlite::{params, Connection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("no review found with id {0}")]
    NotFound(i64),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}


// Define a struct to represent a database connection
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    // Open (or create) the database file
    pub fn new(db_path: &str) -> Result<Self, DbError> {
        let conn = Connection::open(db_path)?;
        info!("[DB] Database connection established at: {}", db_path);
        Ok(Database { conn })
    }

    // Create the reviews table if it does not exist yet
    pub fn create_schema(&self) -> Result<(), DbError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS reviews (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT,
                    review TEXT,
                    rating INTEGER
                );",
            )
            .map_err(|e| {
                log::error!("[DB] Failed creating reviews table: {}", e);
                e
            })?;
        Ok(())
    }

    /// Highest stored id, `None` when the table is empty.
    pub fn max_id(&self) -> Result<Option<i64>, DbError> {
        let max = self
            .conn
            .query_row("SELECT MAX(id) FROM reviews", [], |row| {
                row.get::<_, Option<i64>>(0)
            })?;
        debug!("[DB] Highest review id: {:?}", max);
        Ok(max)
    }

    pub fn insert_review(&self, review: &Review) -> Result<(), DbError> {
        self.conn.execute(
            "INSERT INTO reviews (id, name, review, rating) VALUES (?, ?, ?, ?)",
            params![review.id, &review.name, &review.review, review.rating],
        )?;
        debug!("[DB] Review inserted: {}", review.id);
        Ok(())
    }

    /// Deletes the row with `id`. Zero affected rows is reported as `DbError::NotFound`.
    pub fn delete_review(&self, id: i64) -> Result<(), DbError> {
        let affected = self
            .conn
            .execute("DELETE FROM reviews WHERE id = ?", [id])?;
        if affected == 0 {
            return Err(DbError::NotFound(id));
        }
        debug!("[DB] Review deleted: {}", id);
        Ok(())
    }

    // Retrieve all reviews in storage order
    pub fn get_reviews(&self) -> Result<Vec<Review>, DbError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, review, rating FROM reviews")?;
        let rows = stmt.query_map([], |row| {
            Ok(Review {
                id: row.get(0)?,
                name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                review: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                rating: row.get(3)?,
            })
        })?;

        let mut reviews = Vec::new();
        for row in rows {
            reviews.push(row?);
        }
        debug!("[DB] Fetched {} reviews from the database", reviews.len());
        Ok(reviews)
    }
}
