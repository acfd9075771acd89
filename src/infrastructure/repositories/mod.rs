pub mod google_tts_repository;
pub mod tts_repository;

pub use google_tts_repository::{GoogleCredentials, GoogleTtsRepository, GOOGLE_TTS_URL};
pub use tts_repository::{TtsProviderError, TtsRepository};
