use crate::models::Sentiment;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Label a piece of text as positive, negative or neutral.
///
/// Blank input never reaches the polarity routine. Any failure of the
/// routine itself degrades to `Neutral` rather than surfacing an error,
/// so callers can treat labeling as infallible.
pub fn label(text: &str) -> Sentiment {
    if text.trim().is_empty() {
        return Sentiment::Neutral;
    }

    match polarity(text) {
        Some(score) if score > 0.0 => Sentiment::Positive,
        Some(score) if score < 0.0 => Sentiment::Negative,
        // score == 0.0, or the routine produced nothing
        _ => Sentiment::Neutral,
    }
}

/// Compound polarity score in [-1, 1], or `None` if the analyzer
/// yields no usable score.
fn polarity(text: &str) -> Option<f64> {
    let analyzer = SentimentIntensityAnalyzer::new();
    analyzer.polarity_scores(text).get("compound").copied()
}
