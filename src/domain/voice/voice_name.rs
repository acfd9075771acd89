use super::error::VoiceServiceError;

/// Language used when the requested one has no voices in the table
pub const DEFAULT_LANGUAGE_CODE: &str = "en-IN";

/// Voice letter used for the default language fallback, regardless of gender
const DEFAULT_VOICE_LETTER: char = 'B';

/// Quality tier of a synthetic voice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VoiceStyle {
    #[default]
    Standard,
    Premium,
}

impl VoiceStyle {
    /// Voice-name segment Google uses for this tier
    pub fn provider_prefix(&self) -> &'static str {
        match self {
            VoiceStyle::Standard => "Standard",
            VoiceStyle::Premium => "Wavenet",
        }
    }

    /// Parse a user supplied style, applying `policy` to anything unrecognized
    pub fn normalize(raw: &str, policy: StylePolicy) -> Result<Self, VoiceServiceError> {
        match raw.trim().to_lowercase().as_str() {
            "standard" => Ok(VoiceStyle::Standard),
            "premium" | "wavenet" => Ok(VoiceStyle::Premium),
            _ => match policy {
                StylePolicy::FallbackToPremium => {
                    tracing::debug!(style = raw, "Unrecognized voice style, using premium");
                    Ok(VoiceStyle::Premium)
                }
                StylePolicy::Reject => {
                    Err(VoiceServiceError::UnsupportedVoiceStyle(raw.to_string()))
                }
            },
        }
    }
}

impl std::fmt::Display for VoiceStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoiceStyle::Standard => write!(f, "standard"),
            VoiceStyle::Premium => write!(f, "premium"),
        }
    }
}

/// How to treat a voice style that is neither standard nor premium
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StylePolicy {
    /// Silently upgrade to the premium tier
    #[default]
    FallbackToPremium,
    /// Fail the request with `UnsupportedVoiceStyle`
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Anything other than "male" selects the female voice
    pub fn normalize(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

/// Provider voice chosen for a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSelection {
    pub language_code: String,
    pub name: String,
}

struct VoiceTableEntry {
    language_code: &'static str,
    male: char,
    female: char,
    has_premium: bool,
}

const VOICE_TABLE: &[VoiceTableEntry] = &[
    VoiceTableEntry {
        language_code: "en-IN",
        male: 'B',
        female: 'A',
        has_premium: true,
    },
    VoiceTableEntry {
        language_code: "hi-IN",
        male: 'A',
        female: 'D',
        has_premium: true,
    },
    // Google only ships Standard voices for Gujarati
    VoiceTableEntry {
        language_code: "gu-IN",
        male: 'B',
        female: 'A',
        has_premium: false,
    },
];

/// Language codes with dedicated voices
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    VOICE_TABLE.iter().map(|entry| entry.language_code)
}

/// Resolve the Google voice for a language, style and gender.
///
/// Unknown languages fall back to the default language's fixed voice, and
/// languages without a premium tier use their standard voice.
pub fn resolve_voice(language_code: &str, style: VoiceStyle, gender: Gender) -> VoiceSelection {
    match VOICE_TABLE
        .iter()
        .find(|entry| entry.language_code == language_code)
    {
        Some(entry) => {
            let style = if entry.has_premium {
                style
            } else {
                VoiceStyle::Standard
            };
            let letter = match gender {
                Gender::Male => entry.male,
                Gender::Female => entry.female,
            };

            VoiceSelection {
                language_code: entry.language_code.to_string(),
                name: format!(
                    "{}-{}-{}",
                    entry.language_code,
                    style.provider_prefix(),
                    letter
                ),
            }
        }
        None => VoiceSelection {
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            name: format!(
                "{}-{}-{}",
                DEFAULT_LANGUAGE_CODE,
                style.provider_prefix(),
                DEFAULT_VOICE_LETTER
            ),
        },
    }
}
