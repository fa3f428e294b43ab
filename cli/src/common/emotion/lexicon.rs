//! # Offline Lexicon Classifier
//!
//! File: cli/src/common/emotion/lexicon.rs
//!
//! ## Overview
//!
//! A keyword matcher that stands in for the hosted model when there is no
//! network access (and in tests). Each word of the input is compared against a
//! short cue list per emotion; the label with the most hits wins and the
//! scores are the share of hits per label.
//!
//! Text without any cue word is labelled [`NEUTRAL_LABEL`] with score 0. That
//! label is outside the emotion vocabulary, so it selects the fallback reply.
//!
use super::{Classification, EmotionClassifier, LabelScore, EMOTION_LABELS};
use crate::core::error::Result;
use async_trait::async_trait;

/// Label returned when no cue word matches.
pub const NEUTRAL_LABEL: &str = "neutral";

/// Cue words, in `EMOTION_LABELS` order.
const CUES: [(&str, &[&str]); 7] = [
    (
        "sadness",
        &[
            "sad", "tired", "lonely", "alone", "cry", "crying", "cried", "depressed", "down",
            "unhappy", "miserable", "heartbroken", "hopeless", "empty", "grief", "exhausted",
            "hurt", "hurting",
        ],
    ),
    (
        "anger",
        &[
            "angry", "mad", "furious", "annoyed", "frustrated", "frustrating", "hate", "rage",
            "irritated", "pissed", "resent",
        ],
    ),
    (
        "fear",
        &[
            "afraid", "scared", "anxious", "nervous", "worried", "terrified", "panic", "fear",
            "frightened", "uneasy", "dread",
        ],
    ),
    (
        "joy",
        &[
            "happy", "glad", "great", "excited", "joy", "wonderful", "awesome", "cheerful",
            "delighted", "proud", "fantastic",
        ],
    ),
    (
        "love",
        &[
            "love", "loving", "loved", "adore", "grateful", "thankful", "caring", "cherish",
            "affection",
        ],
    ),
    (
        "surprise",
        &[
            "surprised", "shocked", "unexpected", "wow", "amazed", "astonished", "sudden",
            "suddenly",
        ],
    ),
    (
        "disgust",
        &[
            "disgusted", "disgusting", "gross", "revolting", "nasty", "repulsed", "vile",
        ],
    ),
];

#[derive(Debug, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Hit count per label, in vocabulary order.
    fn count_hits(text: &str) -> [usize; 7] {
        let mut hits = [0usize; 7];
        let lowered = text.to_lowercase();
        let words = lowered
            .split(|c: char| !(c.is_alphabetic() || c == '\''))
            .filter(|w| !w.is_empty());
        for word in words {
            for (i, (_, cues)) in CUES.iter().enumerate() {
                if cues.contains(&word) {
                    hits[i] += 1;
                }
            }
        }
        hits
    }
}

#[async_trait]
impl EmotionClassifier for LexiconClassifier {
    fn name(&self) -> &str {
        "lexicon"
    }

    async fn classify(&self, text: &str) -> Result<Classification> {
        let hits = Self::count_hits(text);
        let total: usize = hits.iter().sum();

        if total == 0 {
            let scores = EMOTION_LABELS
                .iter()
                .map(|label| LabelScore {
                    label: label.to_string(),
                    score: 0.0,
                })
                .collect();
            return Ok(Classification {
                label: NEUTRAL_LABEL.to_string(),
                score: 0.0,
                scores,
            });
        }

        let scores = EMOTION_LABELS
            .iter()
            .zip(hits.iter())
            .map(|(label, &n)| LabelScore {
                label: label.to_string(),
                score: n as f32 / total as f32,
            })
            .collect();
        Classification::from_scores(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_table_matches_vocabulary_order() {
        let labels: Vec<&str> = CUES.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, EMOTION_LABELS);
    }

    #[tokio::test]
    async fn test_tired_and_lonely_is_sadness() {
        let result = LexiconClassifier::new()
            .classify("I feel very tired and lonely today.")
            .await
            .unwrap();
        assert_eq!(result.label, "sadness");
        assert_eq!(result.score, 1.0);
    }

    #[tokio::test]
    async fn test_matching_ignores_case_and_punctuation() {
        let result = LexiconClassifier::new()
            .classify("I'm SO ANGRY!!! Furious, honestly.")
            .await
            .unwrap();
        assert_eq!(result.label, "anger");
    }

    #[tokio::test]
    async fn test_mixed_cues_split_the_score() {
        let result = LexiconClassifier::new()
            .classify("happy but scared and worried")
            .await
            .unwrap();
        assert_eq!(result.label, "fear");
        assert!((result.score - 2.0 / 3.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_no_cues_is_neutral() {
        let result = LexiconClassifier::new()
            .classify("the meeting is at noon")
            .await
            .unwrap();
        assert_eq!(result.label, NEUTRAL_LABEL);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.scores.len(), EMOTION_LABELS.len());
    }
}
