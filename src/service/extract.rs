use crate::utils::error::GenerationError;
use crate::utils::gemini::ModelResponse;

/// Pulls the first image attachment out of a raw model response and
/// re-encodes it as a data URI. Text-only responses are a hard
/// failure, never a degraded success.
pub fn extract_image(response: &ModelResponse) -> Result<String, GenerationError> {
    let attachment = response
        .candidates
        .iter()
        .flat_map(|candidate| candidate.content.parts.iter())
        .find_map(|part| part.inline_data.as_ref())
        .ok_or_else(|| {
            GenerationError::EmptyResult("the model response contained no image".to_string())
        })?;
    Ok(format!(
        "data:{};base64,{}",
        attachment.mime_type, attachment.data
    ))
}

/// Parses the structured tip list out of a raw model response. An
/// empty list is a valid success; a missing or unparseable list is
/// not.
pub fn extract_tips(response: &ModelResponse) -> Result<Vec<String>, GenerationError> {
    let text: String = response
        .candidates
        .first()
        .map(|candidate| {
            candidate
                .content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect()
        })
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResult(
            "the model response contained no tip list".to_string(),
        ));
    }
    serde_json::from_str::<Vec<String>>(&text).map_err(|e| {
        GenerationError::EmptyResult(format!("the tip list could not be parsed: {}", e))
    })
}
