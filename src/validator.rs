/// Submission validation: email format, catalog membership, duplicate
/// detection and non-empty text. Pure checks, no side effects on rejection.
use crate::models::{product::Product, review::Review};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("You already submitted a review for this product.")]
    DuplicateReview,

    #[error("Review cannot be empty.")]
    EmptyReview,

    #[error("Rating must be between 1 and 5.")]
    RatingOutOfRange,
}

pub fn valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks a submission against the current state, in order: email format,
/// catalog membership, one-review-per-(email, product), non-blank text.
pub fn validate(
    email: &str,
    product: &str,
    text: &str,
    catalog: &[Product],
    reviews: &[Review],
) -> Result<(), SubmitError> {
    if !valid_email(email) {
        return Err(SubmitError::InvalidEmail);
    }

    if !catalog.iter().any(|p| p.name == product) {
        return Err(SubmitError::UnknownProduct(product.to_string()));
    }

    if reviews
        .iter()
        .any(|r| r.email == email && r.product == product)
    {
        return Err(SubmitError::DuplicateReview);
    }

    if text.trim().is_empty() {
        return Err(SubmitError::EmptyReview);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::Sentiment;
    use chrono::Utc;

    fn test_catalog() -> Vec<Product> {
        vec![Product::new("Pizza", "Breads", 549, "Veg/Non-Veg", "Cheese")]
    }

    fn existing_review(email: &str, product: &str) -> Review {
        Review {
            id: "r1".into(),
            email: email.into(),
            product: product.into(),
            rating: 4,
            text: "tasty".into(),
            sentiment: Sentiment::Positive,
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_accepts_well_formed_submission() {
        let outcome = validate("a@b.com", "Pizza", "great stuff", &test_catalog(), &[]);
        assert_eq!(outcome, Ok(()));
    }

    #[test]
    fn test_rejects_malformed_email() {
        for email in ["", "plainaddress", "a@b", "a@b.c", "user@.com", "@b.com"] {
            let outcome = validate(email, "Pizza", "fine", &test_catalog(), &[]);
            assert_eq!(outcome, Err(SubmitError::InvalidEmail), "email: {email:?}");
        }
    }

    #[test]
    fn test_accepts_plus_addressing() {
        assert!(valid_email("user+tag@example.co.uk"));
    }

    #[test]
    fn test_rejects_unknown_product() {
        let outcome = validate("a@b.com", "Sushi", "fine", &test_catalog(), &[]);
        assert_eq!(outcome, Err(SubmitError::UnknownProduct("Sushi".into())));
    }

    #[test]
    fn test_rejects_duplicate_regardless_of_content() {
        let reviews = vec![existing_review("a@b.com", "Pizza")];
        let outcome = validate(
            "a@b.com",
            "Pizza",
            "completely different text",
            &test_catalog(),
            &reviews,
        );
        assert_eq!(outcome, Err(SubmitError::DuplicateReview));
    }

    #[test]
    fn test_same_email_other_product_is_not_a_duplicate() {
        let mut catalog = test_catalog();
        catalog.push(Product::new("Burger", "Breads", 349, "Veg/Non-Veg", "Patty"));
        let reviews = vec![existing_review("a@b.com", "Pizza")];
        let outcome = validate("a@b.com", "Burger", "fine", &catalog, &reviews);
        assert_eq!(outcome, Ok(()));
    }

    #[test]
    fn test_rejects_blank_text() {
        for text in ["", "   ", "\n\t  "] {
            let outcome = validate("a@b.com", "Pizza", text, &test_catalog(), &[]);
            assert_eq!(outcome, Err(SubmitError::EmptyReview));
        }
    }

    #[test]
    fn test_email_check_runs_before_duplicate_check() {
        let reviews = vec![existing_review("not-an-email", "Pizza")];
        let outcome = validate("not-an-email", "Pizza", "fine", &test_catalog(), &reviews);
        assert_eq!(outcome, Err(SubmitError::InvalidEmail));
    }
}
