//! # Hosted Emotion Model Client
//!
//! File: cli/src/common/emotion/huggingface.rs
//!
//! ## Overview
//!
//! Sends text to a hosted text-classification model and returns its label
//! distribution. Tokenization and softmax happen on the model side; this client
//! only posts the raw text and picks the top label.
//!
//! Request: `POST {api_url}/{model}` with `{"inputs": "<text>"}` and an
//! optional bearer token. The response is either a nested list
//! `[[{"label": "sadness", "score": 0.98}, ...]]` or a flat list of the same
//! objects, depending on the endpoint version.
//!
use super::{Classification, EmotionClassifier, LabelScore};
use crate::core::error::{MindmateError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Instant;
use tracing::debug;

pub struct HuggingFaceClassifier {
    client: Client,
    endpoint: String,
    model: String,
    token: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl HuggingFaceClassifier {
    pub fn new(model: &str, api_url: &str, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("mindmate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(MindmateError::from)?;
        Ok(Self {
            client,
            endpoint: format!("{}/{}", api_url.trim_end_matches('/'), model),
            model: model.to_string(),
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn parse_response(body: &str) -> Result<Vec<LabelScore>> {
    let parsed: InferenceResponse = serde_json::from_str(body).map_err(|e| {
        MindmateError::Classifier(format!("unexpected inference response ({e}): {body}"))
    })?;
    Ok(match parsed {
        InferenceResponse::Nested(mut batches) => {
            if batches.is_empty() {
                Vec::new()
            } else {
                batches.swap_remove(0)
            }
        }
        InferenceResponse::Flat(scores) => scores,
    })
}

#[async_trait]
impl EmotionClassifier for HuggingFaceClassifier {
    fn name(&self) -> &str {
        &self.model
    }

    async fn classify(&self, text: &str) -> Result<Classification> {
        let start = Instant::now();
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "inputs": text }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(MindmateError::from)?;
        let status = response.status();
        let body = response.text().await.map_err(MindmateError::from)?;
        if !status.is_success() {
            anyhow::bail!(MindmateError::Classifier(format!(
                "inference API returned {}: {}",
                status, body
            )));
        }

        let classification = Classification::from_scores(parse_response(&body)?)?;
        debug!(
            "Classified with {} as {} ({:.2}) in {}ms",
            self.model,
            classification.label,
            classification.score,
            start.elapsed().as_millis()
        );
        Ok(classification)
    }
}
