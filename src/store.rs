use crate::analytics::{self, ProductStats};
use crate::models::{product::Product, review::Review};
use crate::sentiment;
use crate::validator::{self, SubmitError};
use chrono::Utc;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Process-local application state: the fixed menu with its running rating
/// totals plus the append-only review collection. Volatile, resets on
/// restart. The server wraps it in an `Arc<Mutex<_>>`, the UI holds it in a
/// signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    catalog: Vec<Product>,
    reviews: Vec<Review>,
}

impl Store {
    /// Empty store with the seeded menu.
    pub fn with_menu() -> Self {
        Self {
            catalog: vec![
                Product::new("Pizza", "Breads", 549, "Veg/Non-Veg", "Cheese, Mushroom, Chicken"),
                Product::new("Burger", "Breads", 349, "Veg/Non-Veg", "Cheese, Onion, Patty"),
                Product::new("French Fries", "Snacks", 249, "Veg", "Salted, Roasted"),
                Product::new("Nuggets", "Snacks", 199, "Veg/Non-Veg", "Crispy Chicken/Veg"),
            ],
            reviews: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Validates and records a submission. On acceptance the review text is
    /// classified, the review is appended and exactly one product's running
    /// totals are bumped; a rejection leaves the store untouched.
    pub fn submit_review(
        &mut self,
        email: &str,
        product: &str,
        rating: u8,
        text: &str,
    ) -> Result<Review, SubmitError> {
        validator::validate(email, product, text, &self.catalog, &self.reviews)?;

        // The form slider cannot produce this, a raw API caller can.
        if !(1..=5).contains(&rating) {
            return Err(SubmitError::RatingOutOfRange);
        }

        let review = Review {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            product: product.to_string(),
            rating,
            text: text.to_string(),
            sentiment: sentiment::classify(text),
            submitted_at: Utc::now(),
        };

        if let Some(entry) = self.catalog.iter_mut().find(|p| p.name == product) {
            entry.rating_sum += rating as u32;
            entry.review_count += 1;
        }
        self.reviews.push(review.clone());

        Ok(review)
    }

    /// Per-product stats for the analytics view.
    pub fn analytics(&self) -> BTreeMap<String, ProductStats> {
        analytics::aggregate(&self.reviews)
    }

    /// Review feed, most recent first.
    pub fn feed(&self) -> Vec<Review> {
        analytics::recent_first(&self.reviews)
    }
}
