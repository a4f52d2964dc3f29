use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay};

/// Scores strictly above this are positive
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Scores strictly below this are negative
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Colour class of a polarity score.
///
/// Ordered so that `Negative < Neutral < Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, StrumDisplay, AsRefStr)]
pub enum SentimentTone {
    Negative,
    Neutral,
    Positive,
}

impl SentimentTone {
    /// `[-0.1, 0.1]` is neutral; NaN falls through to neutral as well.
    pub fn classify(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Self::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Positive => "green",
            Self::Negative => "red",
            Self::Neutral => "gray",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub summary: String,
    pub sentiment: f64,
}

impl NewsItem {
    pub fn tone(&self) -> SentimentTone {
        SentimentTone::classify(self.sentiment)
    }

    pub fn score_label(&self) -> String {
        format!("{:.2}", self.sentiment)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub token: String,
    pub sentiment: String,
    pub average_sentiment_score: f64,
    pub risk_warning: String,
    pub news_analysis: Vec<NewsItem>,
}

impl SentimentResult {
    pub fn tone(&self) -> SentimentTone {
        SentimentTone::classify(self.average_sentiment_score)
    }

    pub fn score_label(&self) -> String {
        format!("{:.3}", self.average_sentiment_score)
    }

    /// `Article 1`, `Article 2`, ... in payload order
    pub fn article_labels(&self) -> Vec<String> {
        (1..=self.news_analysis.len())
            .map(|n| format!("Article {n}"))
            .collect()
    }
}
