use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use crate::config::gemini::GeminiConfig;
use crate::service::prompt::{Flow, PromptMessage, PromptPart};
use crate::utils::error::GenerationError;

/// Raw `generateContent` response. Kept structurally faithful to the
/// endpoint; interpretation happens in the extractor, not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "inlineData", default)]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

/// The external generative model, injected into the orchestration
/// functions so tests can substitute a fake without global state.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(
        &self,
        message: &PromptMessage,
        flow: Flow,
    ) -> Result<ModelResponse, GenerationError>;
}

pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, String> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| format!("Failed to build the Gemini HTTP client: {}", e))?;
        Ok(GeminiClient { http, config })
    }

    fn model_for(&self, flow: Flow) -> &str {
        if flow.produces_image() {
            &self.config.image_model
        } else {
            &self.config.text_model
        }
    }
}

/// Builds the `generateContent` request body for a composed message.
/// Image-producing flows must request TEXT and IMAGE modalities
/// together; the endpoint does not honor an image-only request.
pub fn build_request_body(message: &PromptMessage, flow: Flow) -> Value {
    let parts: Vec<Value> = message
        .parts
        .iter()
        .map(|part| match part {
            PromptPart::Text(text) => json!({ "text": text }),
            PromptPart::Image(image) => json!({
                "inline_data": {
                    "mime_type": image.mime_type,
                    "data": image.data,
                }
            }),
        })
        .collect();

    let generation_config = if flow.produces_image() {
        json!({ "responseModalities": ["TEXT", "IMAGE"] })
    } else {
        json!({
            "responseMimeType": "application/json",
            "responseSchema": { "type": "ARRAY", "items": { "type": "STRING" } },
        })
    };

    json!({
        "contents": [{ "role": "user", "parts": parts }],
        "generationConfig": generation_config,
    })
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(
        &self,
        message: &PromptMessage,
        flow: Flow,
    ) -> Result<ModelResponse, GenerationError> {
        let request_url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url,
            self.model_for(flow)
        );
        debug!("Calling the model endpoint for the '{}' flow.", flow.as_str());

        let response = self
            .http
            .post(&request_url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&build_request_body(message, flow))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Upstream(format!(
                        "the model call timed out after {}s",
                        self.config.timeout_secs
                    ))
                } else {
                    GenerationError::Upstream(format!("failed to reach the model endpoint: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Upstream(format!(
                "the model endpoint returned status {}",
                status
            )));
        }

        response.json::<ModelResponse>().await.map_err(|e| {
            GenerationError::Upstream(format!("failed to decode the model response: {}", e))
        })
    }
}
