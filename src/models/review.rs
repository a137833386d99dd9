// src/models/review.rs
use serde::{Deserialize, Deserializer, Serialize};

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// A persisted review, as stored in the `reviews` table and returned by `GET /reviews`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i64,         // Assigned by the id allocator, never changes
    pub name: String,    // Author name
    pub review: String,  // Free-text body
    pub rating: i64,     // 1..=5
}

// An explicit `null` decodes like a missing key: to the zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /reviews`. Missing or null fields decode to their zero value.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct NewReview {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub review: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: i64,
}

impl NewReview {
    pub fn has_valid_rating(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }

    pub fn into_review(self, id: i64) -> Review {
        Review {
            id,
            name: self.name,
            review: self.review,
            rating: self.rating,
        }
    }
}

/// Body of `DELETE /delete-review`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DeleteRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
}

#[derive(Serialize, Debug, Clone)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: i64,
}

#[derive(Serialize, Debug, Clone)]
pub struct DeletedResponse {
    pub success: bool,
}
