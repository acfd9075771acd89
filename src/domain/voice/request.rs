use super::error::VoiceServiceError;
use super::voice_name::{Gender, StylePolicy, VoiceStyle, DEFAULT_LANGUAGE_CODE};
use serde::{Deserialize, Serialize};

pub const MAX_TEXT_CHARS: usize = 5000;
pub const MIN_SPEAKING_RATE: f32 = 0.5;
pub const MAX_SPEAKING_RATE: f32 = 2.0;
pub const DEFAULT_SPEAKING_RATE: f32 = 1.0;

/// Body of POST /voice/generate and POST /voice/preview
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceGenerationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(default, alias = "voiceType", skip_serializing_if = "Option::is_none")]
    pub voice_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaking_rate: Option<f32>,
}

/// A request that passed validation; the only input the synthesis pipeline accepts
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    text: String,
    language_code: String,
    voice_style: VoiceStyle,
    gender: Gender,
    speaking_rate: f32,
}

impl SynthesisRequest {
    /// Validate raw user input.
    ///
    /// Checks run in order (text presence, text length, speaking rate, voice
    /// style) and the first failure is returned.
    pub fn validate(
        raw: VoiceGenerationRequest,
        style_policy: StylePolicy,
    ) -> Result<Self, VoiceServiceError> {
        let text = match raw.text {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Err(VoiceServiceError::EmptyText),
        };

        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(VoiceServiceError::TextTooLong);
        }

        let speaking_rate = raw.speaking_rate.unwrap_or(DEFAULT_SPEAKING_RATE);
        if !(MIN_SPEAKING_RATE..=MAX_SPEAKING_RATE).contains(&speaking_rate) {
            return Err(VoiceServiceError::RateOutOfRange);
        }

        let voice_style = match raw.voice_style.as_deref() {
            Some(style) => VoiceStyle::normalize(style, style_policy)?,
            None => VoiceStyle::default(),
        };

        let gender = raw
            .gender
            .as_deref()
            .map(Gender::normalize)
            .unwrap_or_default();

        let language_code = raw
            .language_code
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE_CODE.to_string());

        Ok(Self {
            text,
            language_code,
            voice_style,
            gender,
            speaking_rate,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    pub fn voice_style(&self) -> VoiceStyle {
        self.voice_style
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn speaking_rate(&self) -> f32 {
        self.speaking_rate
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
