use super::tts_repository::{TtsProviderError, TtsRepository};
use crate::domain::voice::SynthesisInput;
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Google Cloud Text-to-Speech REST endpoint
pub const GOOGLE_TTS_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

/// Output encoding is fixed; requests never negotiate it
const AUDIO_ENCODING: &str = "MP3";

/// Credentials provisioned outside the service
#[derive(Debug, Clone, PartialEq)]
pub enum GoogleCredentials {
    /// API key sent as the `key` query parameter
    ApiKey(String),
    /// OAuth access token sent as a bearer token
    AccessToken(String),
    None,
}

impl GoogleCredentials {
    pub fn kind(&self) -> &'static str {
        match self {
            GoogleCredentials::ApiKey(_) => "api_key",
            GoogleCredentials::AccessToken(_) => "access_token",
            GoogleCredentials::None => "none",
        }
    }
}

#[derive(Debug, Serialize)]
struct SynthesizeSpeechRequest<'a> {
    input: TextInput<'a>,
    voice: VoiceSelectionParams<'a>,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct TextInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct VoiceSelectionParams<'a> {
    #[serde(rename = "languageCode")]
    language_code: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct AudioConfig {
    #[serde(rename = "audioEncoding")]
    audio_encoding: &'static str,
    #[serde(rename = "speakingRate")]
    speaking_rate: f32,
}

#[derive(Debug, Deserialize)]
struct SynthesizeSpeechResponse {
    #[serde(rename = "audioContent")]
    audio_content: String,
}

impl<'a> SynthesizeSpeechRequest<'a> {
    fn from_input(input: &'a SynthesisInput) -> Self {
        Self {
            input: TextInput { text: &input.text },
            voice: VoiceSelectionParams {
                language_code: &input.voice.language_code,
                name: &input.voice.name,
            },
            audio_config: AudioConfig {
                audio_encoding: AUDIO_ENCODING,
                speaking_rate: input.speaking_rate,
            },
        }
    }
}

fn decode_audio(response: SynthesizeSpeechResponse) -> Result<Vec<u8>, TtsProviderError> {
    if response.audio_content.is_empty() {
        return Err(TtsProviderError::MalformedResponse(
            "empty audioContent".to_string(),
        ));
    }

    base64::engine::general_purpose::STANDARD
        .decode(response.audio_content.as_bytes())
        .map_err(|e| {
            TtsProviderError::MalformedResponse(format!("failed to decode base64 audio: {}", e))
        })
}

/// Google Cloud Text-to-Speech implementation of TTS repository
pub struct GoogleTtsRepository {
    http_client: Arc<reqwest::Client>,
    endpoint: String,
    credentials: GoogleCredentials,
}

impl GoogleTtsRepository {
    pub fn new(
        http_client: Arc<reqwest::Client>,
        endpoint: String,
        credentials: GoogleCredentials,
    ) -> Self {
        Self {
            http_client,
            endpoint,
            credentials,
        }
    }

    fn build_request(&self, body: &SynthesizeSpeechRequest<'_>) -> reqwest::RequestBuilder {
        let request = self.http_client.post(&self.endpoint).json(body);

        match &self.credentials {
            GoogleCredentials::ApiKey(key) => request.query(&[("key", key.as_str())]),
            GoogleCredentials::AccessToken(token) => request.bearer_auth(token),
            GoogleCredentials::None => request,
        }
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, input: &SynthesisInput) -> Result<Vec<u8>, TtsProviderError> {
        let start_time = std::time::Instant::now();
        let body = SynthesizeSpeechRequest::from_input(input);

        tracing::info!(
            language = %input.voice.language_code,
            voice = %input.voice.name,
            speaking_rate = input.speaking_rate,
            text_length = input.text.chars().count(),
            credentials = self.credentials.kind(),
            "Calling Google Cloud text:synthesize"
        );

        let response = self.build_request(&body).send().await.map_err(|e| {
            tracing::error!(error = %e, voice = %input.voice.name, "Google TTS request failed");
            TtsProviderError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                body = %error_body,
                voice = %input.voice.name,
                "Google TTS rejected the request"
            );
            return Err(TtsProviderError::Rejected {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let payload = response
            .json::<SynthesizeSpeechResponse>()
            .await
            .map_err(|e| TtsProviderError::MalformedResponse(e.to_string()))?;
        let audio_data = decode_audio(payload)?;

        tracing::info!(
            provider = "google",
            voice = %input.voice.name,
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
