use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentiment label attached to every post. Closed set, serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub sentiment: Sentiment,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
