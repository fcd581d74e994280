/// Aggregation over the review collection: per-product rating averages,
/// sentiment label counts for the charts and the most-recent-first feed.
use crate::models::review::Review;
use crate::sentiment::Sentiment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Average rating rounded to one decimal, defined as 0.0 for an empty set.
/// Ties round to the even digit, so 1.25 becomes 1.2 and 1.35 becomes 1.4.
pub fn average(sum: u32, count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (sum as f64 / count as f64 * 10.0).round_ties_even() / 10.0
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ProductStats {
    pub review_count: u32,
    pub average_rating: f64,
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

impl ProductStats {
    pub fn sentiment_count(&self, sentiment: Sentiment) -> u32 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }
}

/// Groups the review collection by product. Only products with at least one
/// review appear in the result.
pub fn aggregate(reviews: &[Review]) -> BTreeMap<String, ProductStats> {
    let mut stats: BTreeMap<String, ProductStats> = BTreeMap::new();
    let mut rating_sums: BTreeMap<String, u32> = BTreeMap::new();

    for review in reviews {
        let entry = stats.entry(review.product.clone()).or_default();
        entry.review_count += 1;
        match review.sentiment {
            Sentiment::Positive => entry.positive += 1,
            Sentiment::Negative => entry.negative += 1,
            Sentiment::Neutral => entry.neutral += 1,
        }
        *rating_sums.entry(review.product.clone()).or_default() += review.rating as u32;
    }

    for (product, entry) in stats.iter_mut() {
        entry.average_rating = average(rating_sums[product], entry.review_count);
    }

    stats
}

/// Review feed ordering: most recent submission first.
pub fn recent_first(reviews: &[Review]) -> Vec<Review> {
    let mut feed = reviews.to_vec();
    feed.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn review(email: &str, product: &str, rating: u8, sentiment: Sentiment, age_secs: i64) -> Review {
        Review {
            id: format!("{email}-{product}"),
            email: email.into(),
            product: product.into(),
            rating,
            text: "text".into(),
            sentiment,
            submitted_at: Utc::now() - Duration::seconds(age_secs),
        }
    }

    #[test]
    fn test_average_of_empty_set_is_zero() {
        assert_eq!(average(0, 0), 0.0);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        assert_eq!(average(12, 4), 3.0);
        assert_eq!(average(10, 3), 3.3);
        assert_eq!(average(11, 3), 3.7);
    }

    #[test]
    fn test_average_rounds_ties_to_even() {
        assert_eq!(average(5, 4), 1.2);
        assert_eq!(average(27, 6), 4.5);
        assert_eq!(average(7, 4), 1.8);
    }

    #[test]
    fn test_aggregate_per_product_average() {
        let reviews = vec![
            review("a@b.com", "Pizza", 5, Sentiment::Positive, 30),
            review("c@d.com", "Pizza", 3, Sentiment::Neutral, 20),
            review("e@f.com", "Pizza", 4, Sentiment::Positive, 10),
        ];
        let stats = aggregate(&reviews);
        let pizza = &stats["Pizza"];
        assert_eq!(pizza.review_count, 3);
        assert_eq!(pizza.average_rating, 4.0);
        assert_eq!(pizza.positive, 2);
        assert_eq!(pizza.neutral, 1);
        assert_eq!(pizza.negative, 0);
    }

    #[test]
    fn test_aggregate_groups_by_product() {
        let reviews = vec![
            review("a@b.com", "Pizza", 5, Sentiment::Positive, 30),
            review("a@b.com", "Burger", 1, Sentiment::Negative, 20),
        ];
        let stats = aggregate(&reviews);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats["Pizza"].positive, 1);
        assert_eq!(stats["Burger"].negative, 1);
        assert_eq!(stats["Burger"].average_rating, 1.0);
    }

    #[test]
    fn test_aggregate_skips_unreviewed_products() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_feed_is_most_recent_first() {
        let reviews = vec![
            review("a@b.com", "Pizza", 5, Sentiment::Positive, 300),
            review("c@d.com", "Burger", 3, Sentiment::Neutral, 10),
            review("e@f.com", "Nuggets", 4, Sentiment::Positive, 100),
        ];
        let feed = recent_first(&reviews);
        assert_eq!(feed[0].email, "c@d.com");
        assert_eq!(feed[1].email, "e@f.com");
        assert_eq!(feed[2].email, "a@b.com");
        // Source ordering untouched
        assert_eq!(reviews[0].email, "a@b.com");
    }
}
