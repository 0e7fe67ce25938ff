
use std::fmt;

use serde::{Deserialize, Serialize};


pub const NEGATIVE_EMOTIONS: [&str; 3] = ["sadness", "fear", "anger"];

pub const FALLBACK_FEEDBACK: &str = "Thank you for sharing your thoughts with me. I'm here to support you through these feelings.";


#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JournalInput {
    pub content: String,
    #[serde(rename = "moodRating", skip_serializing_if = "Option::is_none")]
    pub mood_rating: Option<f64>, // accepted for the journal record, not used by analysis
}


#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmotionPrediction {
    pub label: String,
    pub score: f64,
}


#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub fn from_emotion(label: &str) -> Self {
        if NEGATIVE_EMOTIONS.contains(&label) {
            Sentiment::Negative
        } else {
            Sentiment::Positive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}


#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub emotion: String,
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
    pub feedback_text: String,
    pub feedback_type: String,
    pub rule_triggered: String,
}

impl AnalyzeResponse {
    pub fn new(prediction: &EmotionPrediction, sentiment: Sentiment, feedback_text: String) -> Self {
        Self {
            emotion: prediction.label.to_owned(),
            sentiment,
            sentiment_score: prediction.score,
            feedback_text,
            feedback_type: format!("Emotion: {}", prediction.label),
            rule_triggered: format!("Sentiment: {}", sentiment),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_emotions_map_to_negative_bucket() {
        for label in ["sadness", "fear", "anger"] {
            assert_eq!(Sentiment::from_emotion(label), Sentiment::Negative);
        }
    }

    #[test]
    fn other_emotions_map_to_positive_bucket() {
        for label in ["joy", "love", "surprise", "neutral", "disgust"] {
            assert_eq!(Sentiment::from_emotion(label), Sentiment::Positive);
        }
    }

    #[test]
    fn journal_input_accepts_missing_mood_rating() {
        let input: JournalInput = serde_json::from_str(r#"{"content": "a quiet day"}"#).unwrap();
        assert_eq!(input.content, "a quiet day");
        assert!(input.mood_rating.is_none());

        let input: JournalInput =
            serde_json::from_str(r#"{"content": "a quiet day", "moodRating": 3.5}"#).unwrap();
        assert_eq!(input.mood_rating, Some(3.5));
    }

    #[test]
    fn analyze_response_uses_wire_field_names() {
        let prediction = EmotionPrediction {
            label: "joy".to_owned(),
            score: 0.91,
        };
        let response = AnalyzeResponse::new(
            &prediction,
            Sentiment::from_emotion(&prediction.label),
            "Keep going.".to_owned(),
        );

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["emotion"], "joy");
        assert_eq!(value["sentiment"], "positive");
        assert_eq!(value["sentimentScore"], 0.91);
        assert_eq!(value["feedbackText"], "Keep going.");
        assert_eq!(value["feedbackType"], "Emotion: joy");
        assert_eq!(value["ruleTriggered"], "Sentiment: positive");
    }
}
