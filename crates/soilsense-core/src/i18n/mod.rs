//! Localized display strings for the dashboard and chat widget.
//!
//! Each supported [`Language`] owns one `'static` [`TranslationSet`]. A set is
//! a plain struct with one field per key, so a language that forgets a key
//! does not compile. Lookups are a single `match`.

mod strings;

#[cfg(test)]
mod tests;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Display language, selected by the user. Defaults to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Hi,
    Ta,
    Ml,
    Te,
    Kn,
}

impl Language {
    /// Every supported language, in selector order.
    pub const ALL: [Language; 7] = [
        Language::En,
        Language::Es,
        Language::Hi,
        Language::Ta,
        Language::Ml,
        Language::Te,
        Language::Kn,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Hi => "hi",
            Language::Ta => "ta",
            Language::Ml => "ml",
            Language::Te => "te",
            Language::Kn => "kn",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Name of the language written in that language, for the selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Hi => "हिंदी",
            Language::Ta => "தமிழ்",
            Language::Ml => "മലയാളം",
            Language::Te => "తెలుగు",
            Language::Kn => "ಕನ್ನಡ",
        }
    }

    /// Locale tag handed to the speech recognizer.
    pub fn locale_tag(&self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Es => "es-ES",
            Language::Hi => "hi-IN",
            Language::Ta => "ta-IN",
            Language::Ml => "ml-IN",
            Language::Te => "te-IN",
            Language::Kn => "kn-IN",
        }
    }

    pub fn translations(&self) -> &'static TranslationSet {
        match self {
            Language::En => &strings::EN,
            Language::Es => &strings::ES,
            Language::Hi => &strings::HI,
            Language::Ta => &strings::TA,
            Language::Ml => &strings::ML,
            Language::Te => &strings::TE,
            Language::Kn => &strings::KN,
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|lang| lang == self).unwrap_or(0)
    }

    /// Next language in selector order, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s).ok_or_else(|| {
            let codes: Vec<&str> = Self::ALL.iter().map(|l| l.code()).collect();
            Error::Config(format!(
                "unknown language '{}' (expected one of: {})",
                s.trim(),
                codes.join(", ")
            ))
        })
    }
}

/// Translations for a raw language code, falling back to English for codes
/// outside the supported set.
pub fn translations_for_code(code: &str) -> &'static TranslationSet {
    Language::from_code(code)
        .unwrap_or_default()
        .translations()
}

/// Speech locale for a raw language code.
///
/// Unknown codes are a configuration defect and are reported, never defaulted.
pub fn locale_for_code(code: &str) -> Result<&'static str> {
    Language::from_code(code)
        .map(|lang| lang.locale_tag())
        .ok_or_else(|| Error::UnmappedLanguage(code.to_string()))
}

/// Keys of a [`TranslationSet`], for iterating over a whole set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    Title,
    EnvironmentalMetrics,
    Temperature,
    Humidity,
    SoilMoisture,
    NpkValues,
    Nitrogen,
    Phosphorus,
    Potassium,
    RecommendedCrops,
    CurrentCrops,
    GrowthStage,
    Flowering,
    EarlyFruiting,
    Mature,
    ChatTitle,
    ChatPlaceholder,
    VoiceUnsupported,
    Listening,
    SelectLanguage,
    Greeting,
}

impl TranslationKey {
    pub const ALL: [TranslationKey; 21] = [
        TranslationKey::Title,
        TranslationKey::EnvironmentalMetrics,
        TranslationKey::Temperature,
        TranslationKey::Humidity,
        TranslationKey::SoilMoisture,
        TranslationKey::NpkValues,
        TranslationKey::Nitrogen,
        TranslationKey::Phosphorus,
        TranslationKey::Potassium,
        TranslationKey::RecommendedCrops,
        TranslationKey::CurrentCrops,
        TranslationKey::GrowthStage,
        TranslationKey::Flowering,
        TranslationKey::EarlyFruiting,
        TranslationKey::Mature,
        TranslationKey::ChatTitle,
        TranslationKey::ChatPlaceholder,
        TranslationKey::VoiceUnsupported,
        TranslationKey::Listening,
        TranslationKey::SelectLanguage,
        TranslationKey::Greeting,
    ];
}

/// Every display string for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSet {
    pub title: &'static str,
    pub environmental_metrics: &'static str,
    pub temperature: &'static str,
    pub humidity: &'static str,
    pub soil_moisture: &'static str,
    pub npk_values: &'static str,
    pub nitrogen: &'static str,
    pub phosphorus: &'static str,
    pub potassium: &'static str,
    pub recommended_crops: &'static str,
    pub current_crops: &'static str,
    pub growth_stage: &'static str,
    pub flowering: &'static str,
    pub early_fruiting: &'static str,
    pub mature: &'static str,
    pub chat_title: &'static str,
    pub chat_placeholder: &'static str,
    pub voice_unsupported: &'static str,
    pub listening: &'static str,
    pub select_language: &'static str,
    pub greeting: &'static str,
}

impl TranslationSet {
    pub fn get(&self, key: TranslationKey) -> &'static str {
        match key {
            TranslationKey::Title => self.title,
            TranslationKey::EnvironmentalMetrics => self.environmental_metrics,
            TranslationKey::Temperature => self.temperature,
            TranslationKey::Humidity => self.humidity,
            TranslationKey::SoilMoisture => self.soil_moisture,
            TranslationKey::NpkValues => self.npk_values,
            TranslationKey::Nitrogen => self.nitrogen,
            TranslationKey::Phosphorus => self.phosphorus,
            TranslationKey::Potassium => self.potassium,
            TranslationKey::RecommendedCrops => self.recommended_crops,
            TranslationKey::CurrentCrops => self.current_crops,
            TranslationKey::GrowthStage => self.growth_stage,
            TranslationKey::Flowering => self.flowering,
            TranslationKey::EarlyFruiting => self.early_fruiting,
            TranslationKey::Mature => self.mature,
            TranslationKey::ChatTitle => self.chat_title,
            TranslationKey::ChatPlaceholder => self.chat_placeholder,
            TranslationKey::VoiceUnsupported => self.voice_unsupported,
            TranslationKey::Listening => self.listening,
            TranslationKey::SelectLanguage => self.select_language,
            TranslationKey::Greeting => self.greeting,
        }
    }
}
