

use anyhow::{bail, Context, Result};
use reqwest::{header::CONTENT_TYPE, Client};
use serde::Deserialize;
use serde_json::json;

use crate::env_keys::{CHAT_MODEL, OLLAMA_HOST};

pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";
pub const DEFAULT_CHAT_MODEL: &str = "phi3:mini";

const SYSTEM_PROMPT: &str = "You are a warm, empathetic journaling companion. \
Acknowledge the user's emotion and offer 1-2 gentle sentences of support. \
Do not offer medical advice. Do not use forum language or labels like 'Response:'.";


#[derive(Debug, Clone)]
pub struct ChatService {
    client: Client,
    host: String,
    chat_model: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}


impl ChatService {
    pub fn new() -> Self {
        let host = std::env::var(OLLAMA_HOST).unwrap_or(DEFAULT_OLLAMA_HOST.to_owned());
        let chat_model = std::env::var(CHAT_MODEL).unwrap_or(DEFAULT_CHAT_MODEL.to_owned());
        Self::with_host(&host, &chat_model)
    }

    pub fn with_host(host: &str, chat_model: &str) -> Self {
        Self {
            client: Client::new(),
            host: host.trim_end_matches('/').to_owned(),
            chat_model: chat_model.to_owned(),
        }
    }

    pub async fn generate_feedback(&self, journal_text: &str, detected_emotion: &str) -> Result<String> {
        let url = format!("{}/api/chat", self.host);
        let body = json!({
            "model": self.chat_model,
            "stream": false,
            "messages": [
                {
                    "role": "system",
                    "content": SYSTEM_PROMPT,
                },
                {
                    "role": "user",
                    "content": format!("I feel {}. My journal entry is: \"{}\"", detected_emotion, journal_text.trim()),
                },
            ],
        });

        let response = self.client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(&body)?)
            .send()
            .await?;

        let status = response.status();
        let body_string = response.text().await?;
        tracing::debug!("chat response ({}): {}", status, body_string);
        if !status.is_success() {
            bail!("chat request failed with {}: {}", status, body_string);
        }

        let parsed = serde_json::from_str::<ChatResponse>(&body_string)
            .with_context(|| format!("unexpected chat response: {}", body_string))?;

        let reply = normalize_reply(&parsed.message.content);
        if reply.is_empty() {
            bail!("chat model returned an empty reply");
        }

        Ok(reply)
    }
}

// Some models prefix a label despite the system prompt telling them not to.
fn normalize_reply(content: &str) -> String {
    let trimmed = content.trim();
    let trimmed = trimmed.strip_prefix("Response:").map(str::trim).unwrap_or(trimmed);
    trimmed.to_owned()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_is_trimmed() {
        assert_eq!(normalize_reply("  That sounds hard.  \n"), "That sounds hard.");
    }

    #[test]
    fn stray_response_label_is_stripped() {
        assert_eq!(normalize_reply("Response: That sounds hard."), "That sounds hard.");
        assert_eq!(normalize_reply("Response:\nThat sounds hard."), "That sounds hard.");
    }

    #[test]
    fn label_in_the_middle_is_kept() {
        assert_eq!(
            normalize_reply("Your Response: was thoughtful."),
            "Your Response: was thoughtful."
        );
    }

    #[test]
    fn host_trailing_slash_is_dropped() {
        let service = ChatService::with_host("http://localhost:11434/", "phi3:mini");
        assert_eq!(service.host, "http://localhost:11434");
        assert_eq!(service.chat_model, "phi3:mini");
    }
}
