use log::{info, warn};
use tokio::sync::Mutex;

use crate::db::{Database, DbError};
use crate::error::ApiError;
use crate::ids::IdAllocator;
use crate::models::review::{NewReview, Review};

// Everything behind the lock: the one connection and the id counter.
#[derive(Debug)]
struct Ledger {
    db: Database,
    ids: IdAllocator,
}

/// Shared review service. Create, list and delete all run their storage work
/// while holding the same lock, one at a time across every worker.
#[derive(Debug)]
pub struct ReviewService {
    ledger: Mutex<Ledger>,
}

impl ReviewService {
    /// Wraps an initialised database and seeds the id allocator from its highest id.
    pub fn new(db: Database) -> Result<Self, DbError> {
        let ids = IdAllocator::seeded(db.max_id()?);
        info!("[SERVICE] Id allocator seeded at {}", ids.last_id());
        Ok(ReviewService {
            ledger: Mutex::new(Ledger { db, ids }),
        })
    }

    pub async fn create(&self, new_review: NewReview) -> Result<i64, ApiError> {
        if !new_review.has_valid_rating() {
            return Err(ApiError::InvalidRating(new_review.rating));
        }

        let mut ledger = self.ledger.lock().await;
        let id = ledger.ids.next_id();
        let review = new_review.into_review(id);
        // The id stays consumed if the insert fails.
        ledger.db.insert_review(&review).map_err(|e| {
            warn!("[SERVICE] Insert of review {} failed: {}", id, e);
            ApiError::SaveFailed(e)
        })?;
        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<Review>, ApiError> {
        let ledger = self.ledger.lock().await;
        ledger.db.get_reviews().map_err(ApiError::LoadFailed)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let ledger = self.ledger.lock().await;
        ledger.db.delete_review(id).map_err(ApiError::from_delete)
    }

    pub async fn last_id(&self) -> i64 {
        self.ledger.lock().await.ids.last_id()
    }
}
