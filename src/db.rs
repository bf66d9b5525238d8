use crate::models::listing::{Listing, ListingInput};
use crate::models::review::Review;
use leptos::logging::log;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Error, OptionalExtension, Row};
use std::sync::Arc;
use tokio::sync::Mutex;


/// Handle to the listing/review store. Cloning shares the same connection.
#[derive(Debug, Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

const LISTING_COLUMNS: &str =
    "id, title, description, image_filename, image_url, price, location, country, reviews";

impl Database {
    // Open the database at the given path, ":memory:" for a throwaway store
    pub fn new(db_path: &str) -> Result<Self, Error> {
        let conn = Connection::open(db_path)?;
        log!("[DB] Database connection established at: {}", db_path);
        Ok(Database {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    // Create the database schema
    pub async fn create_schema(&self) -> Result<(), Error> {
        let conn = self.conn.lock().await;

        // 1. Listings table, the review id array is kept as a JSON column
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS listings (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT,
                image_filename TEXT NOT NULL,
                image_url TEXT NOT NULL,
                price REAL,
                location TEXT,
                country TEXT,
                reviews TEXT NOT NULL DEFAULT '[]'
            );",
        )
        .map_err(|e| {
            eprintln!("Failed creating listings table: {}", e);
            e
        })?;

        // 2. Reviews table, no foreign key back to listings
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS reviews (
                id TEXT PRIMARY KEY,
                comment TEXT NOT NULL,
                rating INTEGER NOT NULL,
                created_at TEXT NOT NULL
            );",
        )
        .map_err(|e| {
            eprintln!("Failed creating reviews table: {}", e);
            e
        })?;
        Ok(())
    }

    /// Closes the connection. Other clones still holding the handle keep it open.
    pub fn close(self) -> Result<(), Error> {
        match Arc::try_unwrap(self.conn) {
            Ok(conn) => {
                conn.into_inner().close().map_err(|(_, e)| e)?;
                log!("[DB] Database connection closed");
                Ok(())
            }
            Err(_) => {
                log!("[DB] Database handle still shared, leaving connection open");
                Ok(())
            }
        }
    }

    // Retrieve all listings in insertion order
    pub async fn find_listings(&self) -> Result<Vec<Listing>, Error> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT {LISTING_COLUMNS} FROM listings ORDER BY rowid"
        ))?;
        let rows = stmt.query_map([], listing_from_row)?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        log!("[DB] Fetched {} listings", result.len());
        Ok(result)
    }

    pub async fn count_listings(&self) -> Result<usize, Error> {
        let conn = self.conn.lock().await;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM listings", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub async fn find_listing(&self, id: &str) -> Result<Option<Listing>, Error> {
        let conn = self.conn.lock().await;
        query_listing(&conn, id)
    }

    /// Fetches a listing and resolves its review ids. Ids whose review no
    /// longer exists are skipped; the rest keep their order.
    pub async fn find_listing_with_reviews(
        &self,
        id: &str,
    ) -> Result<Option<(Listing, Vec<Review>)>, Error> {
        let conn = self.conn.lock().await;
        let listing = match query_listing(&conn, id)? {
            Some(listing) => listing,
            None => return Ok(None),
        };

        let mut reviews = Vec::with_capacity(listing.reviews.len());
        for review_id in &listing.reviews {
            match query_review(&conn, review_id)? {
                Some(review) => reviews.push(review),
                None => log!("[DB] Listing {} references missing review {}", id, review_id),
            }
        }
        Ok(Some((listing, reviews)))
    }

    pub async fn insert_listing(&self, listing: &Listing) -> Result<(), Error> {
        let conn = self.conn.lock().await;
        conn.execute(
            &format!("INSERT INTO listings ({LISTING_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"),
            params![
                &listing.id,
                &listing.title,
                &listing.description,
                &listing.image.filename,
                &listing.image.url,
                listing.price,
                &listing.location,
                &listing.country,
                reviews_to_json(&listing.reviews)?,
            ],
        )?;
        log!("[DB] Listing inserted: {}", listing.id);
        Ok(())
    }

    /// Replaces the editable fields and returns the updated listing,
    /// or `None` when no listing has this id.
    pub async fn update_listing(
        &self,
        id: &str,
        input: ListingInput,
    ) -> Result<Option<Listing>, Error> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        let mut listing = match query_listing(&tx, id)? {
            Some(listing) => listing,
            None => return Ok(None),
        };
        listing.apply(input);

        tx.execute(
            "UPDATE listings SET
                title = ?2, description = ?3, image_filename = ?4, image_url = ?5,
                price = ?6, location = ?7, country = ?8
            WHERE id = ?1",
            params![
                &listing.id,
                &listing.title,
                &listing.description,
                &listing.image.filename,
                &listing.image.url,
                listing.price,
                &listing.location,
                &listing.country,
            ],
        )?;
        tx.commit()?;
        log!("[DB] Listing updated: {}", id);
        Ok(Some(listing))
    }

    /// Removes a listing and returns it. Referenced reviews are not touched.
    pub async fn delete_listing(&self, id: &str) -> Result<Option<Listing>, Error> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;
        let listing = query_listing(&tx, id)?;
        if listing.is_some() {
            tx.execute("DELETE FROM listings WHERE id = ?", [id])?;
            log!("[DB] Listing deleted: {}", id);
        }
        tx.commit()?;
        Ok(listing)
    }

    pub async fn insert_review(&self, review: &Review) -> Result<(), Error> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO reviews (id, comment, rating, created_at) VALUES (?, ?, ?, ?)",
            params![&review.id, &review.comment, review.rating, review.created_at],
        )?;
        log!("[DB] Review inserted: {}", review.id);
        Ok(())
    }

    pub async fn find_review(&self, id: &str) -> Result<Option<Review>, Error> {
        let conn = self.conn.lock().await;
        query_review(&conn, id)
    }

    pub async fn count_reviews(&self) -> Result<usize, Error> {
        let conn = self.conn.lock().await;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM reviews", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub async fn delete_review(&self, id: &str) -> Result<Option<Review>, Error> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;
        let review = query_review(&tx, id)?;
        if review.is_some() {
            tx.execute("DELETE FROM reviews WHERE id = ?", [id])?;
            log!("[DB] Review deleted: {}", id);
        }
        tx.commit()?;
        Ok(review)
    }

    /// Appends `review_id` to the listing's reviews, re-reading the array under
    /// the lock so concurrent appends and updates are not lost. Only the
    /// `reviews` column is written. Returns false when the listing does not exist.
    pub async fn push_review_ref(&self, listing_id: &str, review_id: &str) -> Result<bool, Error> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;
        let mut listing = match query_listing(&tx, listing_id)? {
            Some(listing) => listing,
            None => return Ok(false),
        };

        if !listing.reviews.iter().any(|id| id == review_id) {
            listing.reviews.push(review_id.to_string());
            tx.execute(
                "UPDATE listings SET reviews = ?2 WHERE id = ?1",
                params![listing_id, reviews_to_json(&listing.reviews)?],
            )?;
            log!("[DB] Review {} attached to listing {}", review_id, listing_id);
        }
        tx.commit()?;
        Ok(true)
    }

    /// Removes every occurrence of `review_id` from the listing's reviews.
    /// Returns false when the listing does not exist.
    pub async fn pull_review_ref(&self, listing_id: &str, review_id: &str) -> Result<bool, Error> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;
        let mut listing = match query_listing(&tx, listing_id)? {
            Some(listing) => listing,
            None => return Ok(false),
        };

        let before = listing.reviews.len();
        listing.reviews.retain(|id| id != review_id);
        if listing.reviews.len() != before {
            tx.execute(
                "UPDATE listings SET reviews = ?2 WHERE id = ?1",
                params![listing_id, reviews_to_json(&listing.reviews)?],
            )?;
            log!("[DB] Review {} detached from listing {}", review_id, listing_id);
        }
        tx.commit()?;
        Ok(true)
    }
}

fn query_listing(conn: &Connection, id: &str) -> Result<Option<Listing>, Error> {
    conn.query_row(
        &format!("SELECT {LISTING_COLUMNS} FROM listings WHERE id = ?"),
        [id],
        listing_from_row,
    )
    .optional()
}

fn query_review(conn: &Connection, id: &str) -> Result<Option<Review>, Error> {
    conn.query_row(
        "SELECT id, comment, rating, created_at FROM reviews WHERE id = ?",
        [id],
        |row| {
            Ok(Review {
                id: row.get(0)?,
                comment: row.get(1)?,
                rating: row.get(2)?,
                created_at: row.get(3)?,
            })
        },
    )
    .optional()
}

fn listing_from_row(row: &Row<'_>) -> Result<Listing, Error> {
    let reviews_json: String = row.get(8)?;
    let reviews = serde_json::from_str(&reviews_json)
        .map_err(|e| Error::FromSqlConversionFailure(8, Type::Text, Box::new(e)))?;

    Ok(Listing {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        image: crate::models::listing::Image {
            filename: row.get(3)?,
            url: row.get(4)?,
        },
        price: row.get(5)?,
        location: row.get(6)?,
        country: row.get(7)?,
        reviews,
    })
}

fn reviews_to_json(reviews: &[String]) -> Result<String, Error> {
    serde_json::to_string(reviews).map_err(|e| Error::ToSqlConversionFailure(Box::new(e)))
}
