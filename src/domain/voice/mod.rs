pub mod error;
pub mod request;
pub mod service;
pub mod voice_name;

pub use error::VoiceServiceError;
pub use request::{SynthesisRequest, VoiceGenerationRequest};
pub use service::{GeneratedAudio, VoiceService, VoiceServiceApi};
pub use voice_name::{resolve_voice, Gender, StylePolicy, VoiceSelection, VoiceStyle};

use serde::{Deserialize, Serialize};

/// Everything the synthesis provider needs for one call
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisInput {
    pub text: String,
    pub voice: VoiceSelection,
    pub speaking_rate: f32,
}

/// Response for POST /voice/preview
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub success: bool,
    pub audio: String,
}
