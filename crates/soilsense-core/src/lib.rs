pub mod chat;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod i18n;
pub mod reply;
pub mod state;
pub mod voice;

// Re-export main types for convenience
pub use chat::{ChatController, ChatEvent, ChatOptions, EventOutcome};
pub use config::Config;
pub use dashboard::{CropRecommendation, CropSnapshot, EnvironmentalReading, GrowthStage, NutrientLevels};
pub use error::{Error, Result};
pub use i18n::{Language, TranslationKey, TranslationSet};
pub use reply::{ReplyHandle, ReplyPolicy, ReplyReady, ReplyScheduler};
pub use state::{CaptureStatus, ChatMessage, ChatRole, ChatState};
pub use voice::{
    recognizer_from_config, CaptureEvent, CaptureSession, CommandRecognizer, SessionId,
    SpeechRecognizer, UnsupportedRecognizer, VoiceCapture,
};
