pub mod config;
pub mod controllers;
pub mod dto;
pub mod routes;
pub mod service;
pub mod utils;

use crate::config::ServiceConfig;
use crate::utils::gemini::GenerativeModel;

pub struct ServiceState {
    pub config: ServiceConfig,
    pub model: Box<dyn GenerativeModel>,
}
