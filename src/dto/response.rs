use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct RedesignResponse {
    #[serde(rename = "redesignedImage")]
    pub redesigned_image: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DesignTipsResponse {
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StyleVariationResponse {
    #[serde(rename = "variedImage")]
    pub varied_image: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StyleCatalogResponse {
    pub styles: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
