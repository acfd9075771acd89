use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voiceover_backend::controllers::voice::VoiceController;
use voiceover_backend::domain::voice::VoiceService;
use voiceover_backend::infrastructure::config::{Config, LogFormat};
use voiceover_backend::infrastructure::http::start_http_server;
use voiceover_backend::infrastructure::repositories::{GoogleCredentials, GoogleTtsRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Voiceover Backend on {}:{}",
        config.host,
        config.port
    );

    tracing::info!(
        endpoint = %config.google_tts_endpoint,
        credentials = config.google_credentials.kind(),
        style_policy = ?config.unrecognized_style_policy,
        static_dir = %config.static_dir,
        "Google Cloud Text-to-Speech configuration"
    );

    if config.google_credentials == GoogleCredentials::None {
        tracing::warn!("No Google credentials found in GOOGLE_TTS_API_KEY or GOOGLE_TTS_ACCESS_TOKEN. Synthesis requests will be rejected by the provider");
    }

    // One HTTP client for the lifetime of the process
    let http_client = Arc::new(reqwest::Client::builder().build()?);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    tracing::info!("Instantiating repositories...");
    let tts_repo = Arc::new(GoogleTtsRepository::new(
        http_client,
        config.google_tts_endpoint.clone(),
        config.google_credentials.clone(),
    ));

    tracing::info!("Instantiating services...");
    let voice_service = Arc::new(VoiceService::new(
        tts_repo,
        config.unrecognized_style_policy,
    ));

    tracing::info!("Instantiating controllers...");
    let voice_controller = Arc::new(VoiceController::new(voice_service));

    // Start HTTP server with all routes
    start_http_server(config, voice_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voiceover_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voiceover_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
