use std::sync::Arc;

use crate::controllers::decor;
use crate::ServiceState;
use axum::routing::post;

pub fn add_routers(router: axum::Router<Arc<ServiceState>>) -> axum::Router<Arc<ServiceState>> {
    router
        .route("/api/decor/redesign", post(decor::generate_redesign))
        .route("/api/decor/tips", post(decor::generate_design_tips))
        .route("/api/decor/variation", post(decor::generate_style_variation))
}
