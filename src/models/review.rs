// src/models/review.rs
use crate::sentiment::Sentiment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,                  // Unique ID for the review
    pub email: String,               // Email of the user who submitted it
    pub product: String,             // Name of the reviewed menu item
    pub rating: u8,                  // Star rating, 1 to 5
    pub text: String,                // Free-text feedback
    pub sentiment: Sentiment,        // Label derived from the text at submission
    pub submitted_at: DateTime<Utc>, // Submission timestamp, used for feed ordering
}
