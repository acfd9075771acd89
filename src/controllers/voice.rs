use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use super::response::{AudioResponse, OutputMode};
use crate::{
    domain::voice::{VoiceGenerationRequest, VoiceService, VoiceServiceApi},
    error::{AppError, AppResult},
};

pub struct VoiceController {
    voice_service: Arc<VoiceService>,
}

impl VoiceController {
    pub fn new(voice_service: Arc<VoiceService>) -> Self {
        Self { voice_service }
    }

    /// POST /voice/generate - Synthesize speech as an MP3 download
    pub async fn generate(
        State(controller): State<Arc<VoiceController>>,
        payload: Result<Json<VoiceGenerationRequest>, JsonRejection>,
    ) -> AppResult<AudioResponse> {
        controller.respond(payload, OutputMode::Download).await
    }

    /// POST /voice/preview - Synthesize speech as base64 for inline playback
    pub async fn preview(
        State(controller): State<Arc<VoiceController>>,
        payload: Result<Json<VoiceGenerationRequest>, JsonRejection>,
    ) -> AppResult<AudioResponse> {
        controller.respond(payload, OutputMode::Preview).await
    }

    async fn respond(
        &self,
        payload: Result<Json<VoiceGenerationRequest>, JsonRejection>,
        mode: OutputMode,
    ) -> AppResult<AudioResponse> {
        let Json(request) = payload.map_err(|rejection| {
            AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
        })?;

        let audio = self.voice_service.generate(request).await?;

        tracing::debug!(
            mode = ?mode,
            voice = %audio.voice_name,
            audio_size_bytes = audio.audio_data.len(),
            "Voice generated"
        );

        Ok(AudioResponse::new(audio, mode))
    }
}
