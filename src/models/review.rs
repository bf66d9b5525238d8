// src/models/review.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub comment: String,
    pub rating: u8, // 1-5
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewInput {
    pub comment: String,
    pub rating: u8,
}

impl Review {
    pub fn new(input: ReviewInput) -> Self {
        Review {
            id: Uuid::new_v4().to_string(),
            comment: input.comment,
            rating: input.rating,
            created_at: Utc::now(),
        }
    }

    pub fn stars(&self) -> String {
        "★".repeat(self.rating as usize)
    }
}
