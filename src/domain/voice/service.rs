use super::error::VoiceServiceError;
use super::request::{SynthesisRequest, VoiceGenerationRequest};
use super::voice_name::{resolve_voice, StylePolicy};
use super::SynthesisInput;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GeneratedAudio {
    pub audio_data: Vec<u8>,
    pub voice_name: String,
    pub char_count: usize,
}

pub struct VoiceService {
    tts_repo: Arc<dyn TtsRepository>,
    style_policy: StylePolicy,
}

impl VoiceService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, style_policy: StylePolicy) -> Self {
        Self {
            tts_repo,
            style_policy,
        }
    }
}

#[async_trait]
pub trait VoiceServiceApi: Send + Sync {
    /// Turn a raw browser request into MP3 audio
    ///
    /// This operation:
    /// - Validates text, speaking rate and voice style
    /// - Resolves the Google voice for language, style and gender
    /// - Calls the synthesis provider once
    async fn generate(
        &self,
        request: VoiceGenerationRequest,
    ) -> Result<GeneratedAudio, VoiceServiceError>;
}

#[async_trait]
impl VoiceServiceApi for VoiceService {
    async fn generate(
        &self,
        request: VoiceGenerationRequest,
    ) -> Result<GeneratedAudio, VoiceServiceError> {
        // 1. Validate
        let request = SynthesisRequest::validate(request, self.style_policy)?;
        let char_count = request.char_count();

        // 2. Resolve voice
        let voice = resolve_voice(
            request.language_code(),
            request.voice_style(),
            request.gender(),
        );

        tracing::info!(
            requested_language = request.language_code(),
            voice_style = %request.voice_style(),
            voice = %voice.name,
            speaking_rate = request.speaking_rate(),
            text_length = char_count,
            "Voice generation request"
        );

        // 3. Synthesize
        let input = SynthesisInput {
            text: request.text().to_string(),
            voice,
            speaking_rate: request.speaking_rate(),
        };

        let audio_data = self.tts_repo.synthesize(&input).await.map_err(|e| {
            tracing::error!(
                error = %e,
                voice = %input.voice.name,
                "Synthesis provider call failed"
            );
            VoiceServiceError::SynthesisFailed(e.into())
        })?;

        Ok(GeneratedAudio {
            audio_data,
            voice_name: input.voice.name,
            char_count,
        })
    }
}
