

use anyhow::{bail, Context, Result};
use reqwest::{header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE}, Client};
use serde::Deserialize;
use serde_json::json;

use crate::env_keys::{CLASSIFIER_API_TOKEN, CLASSIFIER_ENDPOINT, CLASSIFIER_MODEL};
use super::common_structs::EmotionPrediction;

pub const DEFAULT_CLASSIFIER_ENDPOINT: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_CLASSIFIER_MODEL: &str = "michellejieli/emotion_text_classifier";


#[derive(Debug, Clone)]
pub struct ClassifierService {
    client: Client,
    endpoint: String,
    model: String,
    headers: HeaderMap,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

// The hosted pipeline answers with either a flat list of label scores or a
// list per input text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifierResponse {
    Flat(Vec<LabelScore>),
    Nested(Vec<Vec<LabelScore>>),
}


impl ClassifierService {
    pub fn new() -> Self {
        let endpoint = std::env::var(CLASSIFIER_ENDPOINT).unwrap_or(DEFAULT_CLASSIFIER_ENDPOINT.to_owned());
        let model = std::env::var(CLASSIFIER_MODEL).unwrap_or(DEFAULT_CLASSIFIER_MODEL.to_owned());
        let token = std::env::var(CLASSIFIER_API_TOKEN).ok();
        Self::with_endpoint(&endpoint, &model, token.as_deref())
    }

    pub fn with_endpoint(endpoint: &str, model: &str, token: Option<&str>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            let bearer = format!("Bearer {}", token);
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&bearer).unwrap_or(HeaderValue::from_static("")));
        }

        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            model: model.to_owned(),
            headers,
        }
    }

    pub async fn classify(&self, text: &str) -> Result<EmotionPrediction> {
        let url = format!("{}/models/{}", self.endpoint, self.model);
        let body = json!({
            "inputs": text,
            "parameters": { "truncation": true },
            "options": { "wait_for_model": true },
        });

        let response = self.client
            .post(&url)
            .headers(self.headers.clone())
            .body(serde_json::to_string(&body)?)
            .send()
            .await?;

        let status = response.status();
        let body_string = response.text().await?;
        tracing::debug!("classifier response ({}): {}", status, body_string);
        if !status.is_success() {
            bail!("classifier request failed with {}: {}", status, body_string);
        }

        let parsed = serde_json::from_str::<ClassifierResponse>(&body_string)
            .with_context(|| format!("unexpected classifier response: {}", body_string))?;

        let scores = match parsed {
            ClassifierResponse::Flat(scores) => scores,
            ClassifierResponse::Nested(mut nested) => {
                if nested.is_empty() {
                    bail!("classifier returned no predictions");
                }
                nested.remove(0)
            },
        };

        let top = scores
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .context("classifier returned no predictions")?;

        Ok(EmotionPrediction {
            label: top.label.to_lowercase(),
            score: top.score,
        })
    }
}
