use crate::config::constant;
use crate::dto::request::{DesignTipsRequest, RedesignRequest, StyleVariationRequest};
use crate::dto::response::{
    DesignTipsResponse, HealthResponse, RedesignResponse, StyleCatalogResponse,
    StyleVariationResponse,
};
use crate::service::generation;
use crate::utils::error::GenerationError;
use crate::ServiceState;
use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::info;

type AppResult<T> = Result<T, GenerationError>;

pub async fn generate_redesign(
    State(state): State<Arc<ServiceState>>,
    Json(req): Json<RedesignRequest>,
) -> AppResult<impl IntoResponse> {
    info!("Redesign requested for the '{}' style.", req.style);
    let redesigned_image = generation::redesign(state.model.as_ref(), &req).await?;
    Ok(Json(RedesignResponse { redesigned_image }))
}

pub async fn generate_design_tips(
    State(state): State<Arc<ServiceState>>,
    Json(req): Json<DesignTipsRequest>,
) -> AppResult<impl IntoResponse> {
    info!("Design tips requested for the '{}' style.", req.style);
    let tips = generation::design_tips(state.model.as_ref(), &req).await?;
    Ok(Json(DesignTipsResponse { tips }))
}

pub async fn generate_style_variation(
    State(state): State<Arc<ServiceState>>,
    Json(req): Json<StyleVariationRequest>,
) -> AppResult<impl IntoResponse> {
    info!(
        "A '{}' variation of the '{}' style was requested.",
        req.variation_kind, req.style
    );
    let varied_image = generation::style_variation(state.model.as_ref(), &req).await?;
    Ok(Json(StyleVariationResponse { varied_image }))
}

pub async fn list_styles() -> impl IntoResponse {
    Json(StyleCatalogResponse {
        styles: constant::PREDEFINED_STYLES
            .iter()
            .map(|style| style.to_string())
            .collect(),
    })
}

pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
