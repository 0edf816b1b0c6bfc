use std::sync::Arc;

use decor_service::config::ServiceConfig;
use decor_service::routes::create_router;
use decor_service::utils::gemini::GeminiClient;
use decor_service::ServiceState;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    let mut config = ServiceConfig::default();
    config.init_from_env()?;

    decor_service::config::tracing::init();

    let model = GeminiClient::new(config.gemini.clone())?;
    let state = Arc::new(ServiceState {
        config,
        model: Box::new(model),
    });

    let addr = state
        .config
        .server
        .get_socket_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;
    info!("decor-service listening on {}", addr);

    axum::serve(listener, create_router(state))
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}
