//! # MindMate Emotion Classification (`common::emotion`)
//!
//! File: cli/src/common/emotion/mod.rs
//!
//! ## Overview
//!
//! Emotion detection is an external capability: MindMate never implements the
//! model itself. This module defines the seam to that capability and the
//! backends that sit behind it.
//!
//! ## Architecture
//!
//! - `EmotionClassifier`: an object-safe async trait. Drivers hold an
//!   `Arc<dyn EmotionClassifier>` constructed once at start-up.
//! - `Classification`: the winning label, its score and the full distribution.
//! - Backends:
//!   - **`huggingface`**: sends the text to a hosted pretrained model,
//!     addressed by its identifier, and reads back the label distribution.
//!   - **`lexicon`**: an offline keyword matcher used without network access
//!     and throughout the test suite.
//!
//! ## Usage
//!
//! ```rust
//! let classifier = emotion::build_classifier(&cfg.classifier)?;
//! let result = classifier.classify("I feel very tired and lonely today.").await?;
//! println!("{} ({:.2})", result.label, result.score);
//! ```
//!
use crate::core::config::{ClassifierBackend, ClassifierConfig};
use crate::core::error::{MindmateError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Client for a hosted pretrained emotion model.
pub mod huggingface;
/// Offline keyword-based classifier.
pub mod lexicon;

/// The label vocabulary a classifier backend is expected to produce.
pub const EMOTION_LABELS: [&str; 7] = [
    "sadness", "anger", "fear", "joy", "love", "surprise", "disgust",
];

/// One entry of a classifier's probability distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

/// The outcome of classifying a single piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Highest-scoring label.
    pub label: String,
    /// Score of `label`, in `0.0..=1.0`.
    pub score: f32,
    /// Full distribution, highest score first.
    pub scores: Vec<LabelScore>,
}

impl Classification {
    /// Builds a classification from an unordered label distribution.
    ///
    /// Ties keep their input order, so the first of equally-scored labels wins.
    pub fn from_scores(mut scores: Vec<LabelScore>) -> Result<Self> {
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));
        let top = scores.first().ok_or_else(|| {
            MindmateError::Classifier("classifier returned no labels".to_string())
        })?;
        Ok(Self {
            label: top.label.clone(),
            score: top.score,
            scores,
        })
    }
}

/// A source of emotion labels for free text.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Short human-readable description, e.g. the model identifier.
    fn name(&self) -> &str;

    /// Classifies `text` into one label with a confidence score.
    async fn classify(&self, text: &str) -> Result<Classification>;
}

/// Constructs the configured classifier backend.
pub fn build_classifier(config: &ClassifierConfig) -> Result<Arc<dyn EmotionClassifier>> {
    match config.backend {
        ClassifierBackend::Huggingface => {
            let token = std::env::var(&config.token_env)
                .ok()
                .filter(|t| !t.trim().is_empty());
            if token.is_none() {
                warn!(
                    "{} is not set; sending unauthenticated requests to the inference API.",
                    config.token_env
                );
            }
            let classifier =
                huggingface::HuggingFaceClassifier::new(&config.model, &config.api_url, token)?;
            info!(
                "Using hosted emotion model {} at {}",
                config.model,
                classifier.endpoint()
            );
            Ok(Arc::new(classifier))
        }
        ClassifierBackend::Lexicon => {
            info!("Using offline lexicon emotion classifier");
            Ok(Arc::new(lexicon::LexiconClassifier::new()))
        }
    }
}
