use crate::domain::voice::StylePolicy;
use crate::infrastructure::repositories::{GoogleCredentials, GOOGLE_TTS_URL};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub static_dir: String,
    // Google Cloud Text-to-Speech
    pub google_tts_endpoint: String,
    pub google_credentials: GoogleCredentials,
    pub unrecognized_style_policy: StylePolicy,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            log_format: parse_log_format(env::var("LOG_FORMAT").ok().as_deref()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
            google_tts_endpoint: env::var("GOOGLE_TTS_ENDPOINT")
                .unwrap_or_else(|_| GOOGLE_TTS_URL.to_string()),
            google_credentials: parse_credentials(
                non_empty_var("GOOGLE_TTS_API_KEY"),
                non_empty_var("GOOGLE_TTS_ACCESS_TOKEN"),
            ),
            unrecognized_style_policy: parse_style_policy(
                env::var("UNRECOGNIZED_VOICE_STYLE").ok().as_deref(),
            ),
        };

        Ok(config)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_log_format(value: Option<&str>) -> LogFormat {
    match value.map(str::to_lowercase).as_deref() {
        Some("json") => LogFormat::Json,
        _ => LogFormat::Pretty,
    }
}

/// The API key wins when both credentials are present
fn parse_credentials(api_key: Option<String>, access_token: Option<String>) -> GoogleCredentials {
    match (api_key, access_token) {
        (Some(key), _) => GoogleCredentials::ApiKey(key),
        (None, Some(token)) => GoogleCredentials::AccessToken(token),
        (None, None) => GoogleCredentials::None,
    }
}

fn parse_style_policy(value: Option<&str>) -> StylePolicy {
    match value.map(str::to_lowercase).as_deref() {
        Some("reject") => StylePolicy::Reject,
        _ => StylePolicy::FallbackToPremium,
    }
}
