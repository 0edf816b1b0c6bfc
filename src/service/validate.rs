use base64::{prelude::BASE64_STANDARD, Engine};
use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::error::GenerationError;

lazy_static! {
    static ref IMAGE_DATA_URI: Regex =
        Regex::new(r"^data:(image/[A-Za-z0-9.+-]+);base64,(.+)$").unwrap();
}

/// An image carried as a `data:<mime>;base64,<payload>` string, split
/// into its MIME type and base64 payload. This is the only wire
/// representation of image data in the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

impl ImagePayload {
    pub fn parse(raw: &str) -> Result<Self, GenerationError> {
        if raw.is_empty() {
            return Err(GenerationError::Validation(
                "the image field is missing or empty".to_string(),
            ));
        }
        let captures = IMAGE_DATA_URI.captures(raw).ok_or_else(|| {
            GenerationError::Validation(
                "the image must be a base64 data URI with an image MIME type".to_string(),
            )
        })?;
        let mime_type = captures[1].to_string();
        let data = captures[2].to_string();
        BASE64_STANDARD.decode(&data).map_err(|e| {
            GenerationError::Validation(format!("the image payload is not valid base64: {}", e))
        })?;
        Ok(ImagePayload { mime_type, data })
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// The two recognized style variation directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariationKind {
    MoreMinimalist,
    MoreLuxurious,
}

impl VariationKind {
    pub fn parse(raw: &str) -> Result<Self, GenerationError> {
        match raw {
            "more-minimalist" => Ok(VariationKind::MoreMinimalist),
            "more-luxurious" => Ok(VariationKind::MoreLuxurious),
            "" => Err(GenerationError::Validation(
                "the variationKind field is missing or empty".to_string(),
            )),
            other => Err(GenerationError::Validation(format!(
                "'{}' is not a recognized variation kind",
                other
            ))),
        }
    }

    /// Wire code used at the request boundary.
    pub fn as_code(&self) -> &'static str {
        match self {
            VariationKind::MoreMinimalist => "more-minimalist",
            VariationKind::MoreLuxurious => "more-luxurious",
        }
    }

    /// Natural-language phrase used inside prompt text.
    pub fn as_phrase(&self) -> &'static str {
        match self {
            VariationKind::MoreMinimalist => "more minimalist",
            VariationKind::MoreLuxurious => "more luxurious",
        }
    }
}

pub fn parse_style(raw: &str) -> Result<String, GenerationError> {
    let style = raw.trim();
    if style.is_empty() {
        return Err(GenerationError::Validation(
            "the style field is missing or empty".to_string(),
        ));
    }
    Ok(style.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_png_data_uri() {
        let image = ImagePayload::parse("data:image/png;base64,AAAA").unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "AAAA");
        assert_eq!(image.to_data_uri(), "data:image/png;base64,AAAA");
    }

    #[test]
    fn rejects_a_plain_string() {
        let err = ImagePayload::parse("not-a-data-uri").unwrap_err();
        assert!(matches!(err, GenerationError::Validation(_)));
    }

    #[test]
    fn rejects_an_empty_image_field() {
        let err = ImagePayload::parse("").unwrap_err();
        assert!(matches!(err, GenerationError::Validation(_)));
    }

    #[test]
    fn rejects_a_non_image_mime_type() {
        let err = ImagePayload::parse("data:text/plain;base64,QUFB").unwrap_err();
        assert!(matches!(err, GenerationError::Validation(_)));
    }

    #[test]
    fn rejects_a_data_uri_with_an_empty_payload() {
        let err = ImagePayload::parse("data:image/png;base64,").unwrap_err();
        assert!(matches!(err, GenerationError::Validation(_)));
    }

    #[test]
    fn rejects_a_payload_outside_the_base64_alphabet() {
        let err = ImagePayload::parse("data:image/png;base64,!!!!").unwrap_err();
        assert!(matches!(err, GenerationError::Validation(_)));
    }

    #[test]
    fn accepts_jpeg_and_webp_mime_subtypes() {
        assert!(ImagePayload::parse("data:image/jpeg;base64,AAAA").is_ok());
        assert!(ImagePayload::parse("data:image/webp;base64,AAAA").is_ok());
    }

    #[test]
    fn parses_both_variation_kinds() {
        assert_eq!(
            VariationKind::parse("more-minimalist").unwrap(),
            VariationKind::MoreMinimalist
        );
        assert_eq!(
            VariationKind::parse("more-luxurious").unwrap(),
            VariationKind::MoreLuxurious
        );
    }

    #[test]
    fn rejects_an_unknown_variation_kind() {
        let err = VariationKind::parse("slightly-bigger").unwrap_err();
        assert!(matches!(err, GenerationError::Validation(_)));
    }

    #[test]
    fn variation_phrases_match_their_codes() {
        assert_eq!(VariationKind::MoreMinimalist.as_code(), "more-minimalist");
        assert_eq!(VariationKind::MoreLuxurious.as_phrase(), "more luxurious");
    }

    #[test]
    fn style_is_trimmed_and_must_be_non_empty() {
        assert_eq!(parse_style("  Modern ").unwrap(), "Modern");
        assert!(matches!(
            parse_style("   ").unwrap_err(),
            GenerationError::Validation(_)
        ));
    }
}
