pub mod constant;
pub mod gemini;
pub mod server;
pub mod tracing;

use dotenv::dotenv;

#[derive(Clone, Default, Debug)]
pub struct ServiceConfig {
    pub server: server::ServerConfig,
    pub gemini: gemini::GeminiConfig,
}

impl ServiceConfig {
    pub fn init_from_env(&mut self) -> Result<(), String> {
        dotenv().ok();
        self.server.init_from_env()?;
        self.gemini.init_from_env()?;
        Ok(())
    }
}
