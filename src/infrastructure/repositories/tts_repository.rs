use crate::domain::voice::SynthesisInput;
use async_trait::async_trait;

/// Failure reported by a synthesis provider
#[derive(Debug, thiserror::Error)]
pub enum TtsProviderError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider so the voice pipeline can run
/// against Google Cloud in production and stubs in tests.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text with an already resolved voice
    ///
    /// Returns MP3 audio ready for playback. Implementations make exactly one
    /// provider call and never retry.
    async fn synthesize(&self, input: &SynthesisInput) -> Result<Vec<u8>, TtsProviderError>;
}
