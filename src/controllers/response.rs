use axum::{
    body::Body,
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use base64::Engine;

use crate::domain::voice::{GeneratedAudio, PreviewResponse};

pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";
pub const DOWNLOAD_FILENAME: &str = "voiceover.mp3";

const X_VOICE_USED: HeaderName = HeaderName::from_static("x-voice-used");
const X_CHARACTER_COUNT: HeaderName = HeaderName::from_static("x-character-count");

/// How generated audio is handed back to the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// MP3 file attachment
    Download,
    /// JSON envelope with base64 audio for inline playback
    Preview,
}

/// Successful response for either output mode.
/// Failures never get here; they render through `AppError`.
pub struct AudioResponse {
    audio: GeneratedAudio,
    mode: OutputMode,
}

impl AudioResponse {
    pub fn new(audio: GeneratedAudio, mode: OutputMode) -> Self {
        Self { audio, mode }
    }
}

impl IntoResponse for AudioResponse {
    fn into_response(self) -> Response {
        match self.mode {
            OutputMode::Download => (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, AUDIO_CONTENT_TYPE.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME),
                    ),
                    (X_VOICE_USED, self.audio.voice_name),
                    (X_CHARACTER_COUNT, self.audio.char_count.to_string()),
                ],
                Body::from(self.audio.audio_data),
            )
                .into_response(),
            OutputMode::Preview => {
                let audio =
                    base64::engine::general_purpose::STANDARD.encode(&self.audio.audio_data);
                Json(PreviewResponse {
                    success: true,
                    audio,
                })
                .into_response()
            }
        }
    }
}
