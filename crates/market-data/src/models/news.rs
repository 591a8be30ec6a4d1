use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse sentiment bucket derived from an upstream numeric score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Bucket a continuous score: above 0.2 is positive, below -0.2 is
    /// negative, everything else (boundaries included) is neutral.
    pub fn from_score(score: f64) -> Self {
        if score > 0.2 {
            Self::Positive
        } else if score < -0.2 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// A normalized news article for the dashboard news feed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub url: String,
    pub image_url: String,
    pub published_at: DateTime<Utc>,
    pub sentiment: Sentiment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_buckets() {
        assert_eq!(Sentiment::from_score(0.5), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(-0.5), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(0.05), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_boundaries_are_neutral() {
        assert_eq!(Sentiment::from_score(0.2), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-0.2), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(0.0), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"positive\""
        );
    }
}
