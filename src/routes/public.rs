use std::sync::Arc;

use crate::controllers::decor;
use crate::ServiceState;
use axum::routing::get;

pub fn add_routers(router: axum::Router<Arc<ServiceState>>) -> axum::Router<Arc<ServiceState>> {
    router
        .route("/api/decor/health", get(decor::health))
        .route("/api/decor/styles", get(decor::list_styles))
}
