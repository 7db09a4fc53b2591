use crate::models::Sentiment;
use serde::Serialize;

/// Body of the stateless analyze endpoint: the original text echoed back
/// with its label. Nothing is persisted.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub text: String,
    pub sentiment: Sentiment,
}
