use crate::analytics;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,        // Unique menu key, never deleted
    pub category: String,    // Menu section (e.g. "Breads", "Snacks")
    pub price: u32,          // Price in rupees
    pub dietary: String,     // "Veg" or "Veg/Non-Veg"
    pub description: String, // Ingredient blurb shown on the card
    pub rating_sum: u32,     // Running total of submitted ratings
    pub review_count: u32,   // Number of accepted reviews
}

impl Product {
    pub fn new(name: &str, category: &str, price: u32, dietary: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            price,
            dietary: dietary.to_string(),
            description: description.to_string(),
            rating_sum: 0,
            review_count: 0,
        }
    }

    /// Average rating rounded to one decimal, 0.0 while unreviewed.
    pub fn average_rating(&self) -> f64 {
        analytics::average(self.rating_sum, self.review_count)
    }
}
