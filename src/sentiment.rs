/// Keyword-count sentiment heuristic for review text.
/// Stateless and deterministic: no learning, no external calls.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: &[&str] = &[
    "delicious",
    "good",
    "wonderful",
    "happy",
    "best",
    "tasty",
    "love",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "worst",
    "bitter",
    "salty",
    "regret",
    "slow",
    "cold",
    "disappointing",
];

// Strips everything that is not a word character or whitespace.
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    /// Fixed display color used for chart bars and review borders.
    pub fn color(&self) -> &'static str {
        match self {
            Sentiment::Positive => "#2E7D32",
            Sentiment::Negative => "#D32F2F",
            Sentiment::Neutral => "#FFA000",
        }
    }
}

/// Classifies review text by counting whole-word keyword hits.
/// Positive when positive hits outnumber negative ones, Negative for the
/// reverse, Neutral on a tie (including no hits at all).
pub fn classify(text: &str) -> Sentiment {
    let lowered = text.to_lowercase();
    let normalized = PUNCTUATION.replace_all(&lowered, "");

    let mut pos = 0usize;
    let mut neg = 0usize;
    for word in normalized.split_whitespace() {
        if POSITIVE_WORDS.contains(&word) {
            pos += 1;
        } else if NEGATIVE_WORDS.contains(&word) {
            neg += 1;
        }
    }

    if pos > neg {
        Sentiment::Positive
    } else if neg > pos {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
