use std::future::Future;

use tracing::{error, info};
use uuid::Uuid;

use crate::dto::request::{DesignTipsRequest, RedesignRequest, StyleVariationRequest};
use crate::service::extract;
use crate::service::prompt::{self, Flow};
use crate::service::validate::{self, ImagePayload, VariationKind};
use crate::utils::error::GenerationError;
use crate::utils::gemini::GenerativeModel;

/// Runs one pipeline stage sequence under a request id, logging the
/// outcome. A failure at any stage short-circuits the rest; no stage
/// is retried.
async fn logged<T>(
    flow: Flow,
    pipeline: impl Future<Output = Result<T, GenerationError>>,
) -> Result<T, GenerationError> {
    let request_id = Uuid::new_v4();
    info!(
        "Request '{}' started for the '{}' flow.",
        request_id,
        flow.as_str()
    );
    match pipeline.await {
        Ok(value) => {
            info!("Request '{}' completed.", request_id);
            Ok(value)
        }
        Err(e) => {
            error!(
                "Request '{}' failed in the '{}' flow ({}): {}",
                request_id,
                flow.as_str(),
                e.category(),
                e
            );
            Err(e)
        }
    }
}

/// Redesigns the room in the submitted photo in the requested style
/// and returns the new image as a data URI.
pub async fn redesign(
    model: &dyn GenerativeModel,
    request: &RedesignRequest,
) -> Result<String, GenerationError> {
    logged(Flow::Redesign, async {
        let image = ImagePayload::parse(&request.image)?;
        let style = validate::parse_style(&request.style)?;
        let message = prompt::compose_redesign(&image, &style, request.custom_prompt.as_deref());
        let response = model.generate(&message, Flow::Redesign).await?;
        extract::extract_image(&response)
    })
    .await
}

/// Produces actionable, image-specific design tips for the requested
/// style.
pub async fn design_tips(
    model: &dyn GenerativeModel,
    request: &DesignTipsRequest,
) -> Result<Vec<String>, GenerationError> {
    logged(Flow::DesignTips, async {
        let image = ImagePayload::parse(&request.image)?;
        let style = validate::parse_style(&request.style)?;
        let message = prompt::compose_design_tips(&image, &style);
        let response = model.generate(&message, Flow::DesignTips).await?;
        extract::extract_tips(&response)
    })
    .await
}

/// Produces a strictly more minimalist or more luxurious rendition of
/// the submitted room and returns it as a data URI.
pub async fn style_variation(
    model: &dyn GenerativeModel,
    request: &StyleVariationRequest,
) -> Result<String, GenerationError> {
    logged(Flow::StyleVariation, async {
        let image = ImagePayload::parse(&request.image)?;
        let style = validate::parse_style(&request.style)?;
        let kind = VariationKind::parse(&request.variation_kind)?;
        let message = prompt::compose_variation(&image, &style, kind);
        let response = model.generate(&message, Flow::StyleVariation).await?;
        extract::extract_image(&response)
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::prompt::{PromptMessage, PromptPart};
    use crate::utils::gemini::ModelResponse;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct FakeModel {
        calls: Mutex<Vec<(PromptMessage, Flow)>>,
        response: Result<serde_json::Value, &'static str>,
    }

    impl FakeModel {
        fn returning(response: serde_json::Value) -> Self {
            FakeModel {
                calls: Mutex::new(Vec::new()),
                response: Ok(response),
            }
        }

        fn failing(message: &'static str) -> Self {
            FakeModel {
                calls: Mutex::new(Vec::new()),
                response: Err(message),
            }
        }

        fn calls(&self) -> Vec<(PromptMessage, Flow)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerativeModel for FakeModel {
        async fn generate(
            &self,
            message: &PromptMessage,
            flow: Flow,
        ) -> Result<ModelResponse, GenerationError> {
            self.calls.lock().unwrap().push((message.clone(), flow));
            match &self.response {
                Ok(value) => Ok(serde_json::from_value(value.clone()).unwrap()),
                Err(message) => Err(GenerationError::Upstream(message.to_string())),
            }
        }
    }

    fn image_response(mime_type: &str, data: &str) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": {
                    "parts": [{ "inlineData": { "mimeType": mime_type, "data": data } }]
                }
            }]
        })
    }

    fn text_only_response() -> serde_json::Value {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": "No image today." }] }
            }]
        })
    }

    #[tokio::test]
    async fn invalid_image_is_rejected_before_the_model_is_called() {
        let model = FakeModel::returning(image_response("image/png", "QkJC"));
        let request = RedesignRequest {
            image: "not-a-data-uri".to_string(),
            style: "Modern".to_string(),
            custom_prompt: None,
        };
        let err = redesign(&model, &request).await.unwrap_err();
        assert!(matches!(err, GenerationError::Validation(_)));
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn redesign_sends_a_three_part_message_on_the_redesign_flow() {
        let model = FakeModel::returning(image_response("image/png", "QkJC"));
        let request = RedesignRequest {
            image: "data:image/png;base64,AAAA".to_string(),
            style: "Modern".to_string(),
            custom_prompt: None,
        };
        let redesigned = redesign(&model, &request).await.unwrap();
        assert_eq!(redesigned, "data:image/png;base64,QkJC");

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        let (message, flow) = &calls[0];
        assert_eq!(*flow, Flow::Redesign);
        assert_eq!(message.parts.len(), 3);
        assert!(matches!(&message.parts[1], PromptPart::Image(i) if i.data == "AAAA"));
        assert!(matches!(&message.parts[2], PromptPart::Text(t) if t.contains("Modern")));
    }

    #[tokio::test]
    async fn a_response_without_an_image_is_an_empty_result() {
        let model = FakeModel::returning(text_only_response());
        let request = RedesignRequest {
            image: "data:image/png;base64,AAAA".to_string(),
            style: "Modern".to_string(),
            custom_prompt: None,
        };
        let err = redesign(&model, &request).await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResult(_)));
    }

    #[tokio::test]
    async fn an_upstream_failure_is_forwarded_unchanged() {
        let model = FakeModel::failing("connection reset");
        let request = DesignTipsRequest {
            image: "data:image/png;base64,AAAA".to_string(),
            style: "Classic".to_string(),
        };
        let err = design_tips(&model, &request).await.unwrap_err();
        assert!(matches!(err, GenerationError::Upstream(_)));
    }

    #[tokio::test]
    async fn design_tips_run_on_the_tips_flow_and_return_the_list() {
        let model = FakeModel::returning(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "[\"Add a rug\"]" }] }
            }]
        }));
        let request = DesignTipsRequest {
            image: "data:image/jpeg;base64,AAAA".to_string(),
            style: "Classic".to_string(),
        };
        let tips = design_tips(&model, &request).await.unwrap();
        assert_eq!(tips, vec!["Add a rug".to_string()]);
        assert_eq!(model.calls()[0].1, Flow::DesignTips);
    }

    #[tokio::test]
    async fn variation_rejects_an_unknown_kind_before_the_model_is_called() {
        let model = FakeModel::returning(image_response("image/png", "QkJC"));
        let request = StyleVariationRequest {
            image: "data:image/png;base64,AAAA".to_string(),
            style: "Modern".to_string(),
            variation_kind: "much-bigger".to_string(),
        };
        let err = style_variation(&model, &request).await.unwrap_err();
        assert!(matches!(err, GenerationError::Validation(_)));
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn variation_instruction_names_the_style_and_the_requested_direction() {
        let model = FakeModel::returning(image_response("image/webp", "RERE"));
        let request = StyleVariationRequest {
            image: "data:image/png;base64,AAAA".to_string(),
            style: "Modern".to_string(),
            variation_kind: "more-luxurious".to_string(),
        };
        let varied = style_variation(&model, &request).await.unwrap();
        assert_eq!(varied, "data:image/webp;base64,RERE");

        let calls = model.calls();
        assert_eq!(calls[0].1, Flow::StyleVariation);
        let PromptPart::Text(instruction) = &calls[0].0.parts[0] else {
            panic!("first part must be the instruction text");
        };
        assert!(instruction.contains("Modern"));
        assert!(instruction.contains("more luxurious"));
    }

    #[tokio::test]
    async fn replaying_a_request_sends_an_identical_message() {
        let model = FakeModel::returning(image_response("image/png", "QkJC"));
        let request = RedesignRequest {
            image: "data:image/png;base64,AAAA".to_string(),
            style: "Bohemian".to_string(),
            custom_prompt: Some("add plants".to_string()),
        };
        redesign(&model, &request).await.unwrap();
        redesign(&model, &request).await.unwrap();
        let calls = model.calls();
        assert_eq!(calls[0].0, calls[1].0);
    }
}
