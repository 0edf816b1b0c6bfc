use serde::Deserialize;

// Missing fields default to empty strings so the validator can reject
// them with a classified error instead of a deserialization failure.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RedesignRequest {
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub style: String,
    #[serde(rename = "customPrompt", default)]
    pub custom_prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DesignTipsRequest {
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub style: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleVariationRequest {
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub style: String,
    #[serde(rename = "variationKind", default)]
    pub variation_kind: String,
}
