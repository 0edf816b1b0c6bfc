use crate::service::validate::{ImagePayload, VariationKind};

/// The three request types the service supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Redesign,
    DesignTips,
    StyleVariation,
}

impl Flow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flow::Redesign => "redesign",
            Flow::DesignTips => "design-tips",
            Flow::StyleVariation => "style-variation",
        }
    }

    pub fn produces_image(&self) -> bool {
        matches!(self, Flow::Redesign | Flow::StyleVariation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPart {
    Text(String),
    Image(ImagePayload),
}

/// Ordered multimodal message sent to the model. Built once per request
/// and discarded after the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessage {
    pub parts: Vec<PromptPart>,
}

const REDESIGN_INSTRUCTION: &str = "You are an AI interior designer. Your task is to redesign \
    the room in the provided image based on the user's style prompt. You MUST use the provided \
    image as a strong reference, maintaining the original room layout, perspective, and core \
    elements. Only modify the style, furniture, and decor as requested in the prompt.";

const DESIGN_TIPS_INSTRUCTION: &str = "You are an interior design expert. Given an image of a \
    room and a design style, provide a few actionable design tips that the user can use. Focus \
    on the specifics of the image when creating the tips. Return the tips as a JSON array of \
    short strings.";

/// Folds the style name (and an optional caller-supplied addition)
/// into the natural-language style prompt.
pub fn resolve_style_prompt(style: &str, custom_prompt: Option<&str>) -> String {
    let mut resolved = format!(
        "Redesign this room in a {} interior design style. Focus on creating a photorealistic \
         and aesthetically pleasing result.",
        style
    );
    if let Some(custom) = custom_prompt.map(str::trim).filter(|c| !c.is_empty()) {
        resolved.push(' ');
        resolved.push_str(custom);
    }
    resolved
}

pub fn compose_redesign(
    image: &ImagePayload,
    style: &str,
    custom_prompt: Option<&str>,
) -> PromptMessage {
    PromptMessage {
        parts: vec![
            PromptPart::Text(REDESIGN_INSTRUCTION.to_string()),
            PromptPart::Image(image.clone()),
            PromptPart::Text(format!(
                "Redesign the room in the provided image according to the following style \
                 prompt: {}.",
                resolve_style_prompt(style, custom_prompt)
            )),
        ],
    }
}

pub fn compose_design_tips(image: &ImagePayload, style: &str) -> PromptMessage {
    PromptMessage {
        parts: vec![
            PromptPart::Text(DESIGN_TIPS_INSTRUCTION.to_string()),
            PromptPart::Image(image.clone()),
            PromptPart::Text(format!("Style: {}", style)),
        ],
    }
}

pub fn compose_variation(
    image: &ImagePayload,
    style: &str,
    kind: VariationKind,
) -> PromptMessage {
    PromptMessage {
        parts: vec![
            PromptPart::Text(format!(
                "You are an interior design assistant. Given an image of a room and a style, \
                 you will generate a new image of the room with a style variation. The new \
                 image must be strictly {} than the original style.\n\nOriginal Style: {}\n\
                 Variation Type: {}\n\nGenerate a new image of the room with the style \
                 variation.",
                kind.as_phrase(),
                style,
                kind.as_phrase()
            )),
            PromptPart::Image(image.clone()),
        ],
    }
}
