pub mod decor;
pub mod public;

use std::sync::Arc;

use crate::ServiceState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

pub fn create_router(state: Arc<ServiceState>) -> Router {
    let router = Router::new();
    let router = decor::add_routers(router);
    let router = public::add_routers(router);
    // Base64-encoded room photos are large.
    let router = router.layer(DefaultBodyLimit::max(50 * 1024 * 1024));
    router.with_state(state).layer(
        TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default().include_headers(true)),
    )
}
