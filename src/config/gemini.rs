use std::env;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";
const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";
// Image generation has been observed to take close to a minute.
const DEFAULT_TIMEOUT_SECS: u64 = 90;

#[derive(Clone, Debug, Default)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub image_model: String,
    pub text_model: String,
    pub timeout_secs: u64,
}

impl GeminiConfig {
    pub fn init_from_env(&mut self) -> Result<(), String> {
        self.api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| "GEMINI_API_KEY not set in environment".to_string())?;

        self.base_url =
            env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        self.image_model =
            env::var("GEMINI_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string());
        self.text_model =
            env::var("GEMINI_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string());

        self.timeout_secs = match env::var("GEMINI_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| "GEMINI_TIMEOUT_SECS is not a valid u64".to_string())?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(())
    }
}
