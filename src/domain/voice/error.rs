use super::request::{MAX_SPEAKING_RATE, MAX_TEXT_CHARS, MIN_SPEAKING_RATE};
use crate::error::AppError;

const SYNTHESIS_FAILED_MESSAGE: &str =
    "Failed to generate voice. Please check your Google Cloud credentials and API key.";

#[derive(Debug, thiserror::Error)]
pub enum VoiceServiceError {
    #[error("Please enter some text to convert.")]
    EmptyText,
    #[error("Text exceeds maximum length of {} characters.", MAX_TEXT_CHARS)]
    TextTooLong,
    #[error(
        "Speaking rate must be between {:.1} and {:.1}.",
        MIN_SPEAKING_RATE,
        MAX_SPEAKING_RATE
    )]
    RateOutOfRange,
    #[error("Unsupported voice style '{0}'. Use 'standard' or 'premium'.")]
    UnsupportedVoiceStyle(String),
    #[error("{}", SYNTHESIS_FAILED_MESSAGE)]
    SynthesisFailed(#[source] anyhow::Error),
}

impl VoiceServiceError {
    pub fn is_validation(&self) -> bool {
        !matches!(self, VoiceServiceError::SynthesisFailed(_))
    }
}

impl From<VoiceServiceError> for AppError {
    fn from(err: VoiceServiceError) -> Self {
        match err {
            VoiceServiceError::SynthesisFailed(_) => AppError::ExternalService(err.to_string()),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}
