use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A supported UI language.
///
/// The set is closed: an active language can never be an arbitrary string.
/// Codes are parsed exactly (`"hi"` parses, `"HI"` and `"hi-IN"` do not), so a
/// preference written by a build with a different language set is rejected
/// rather than adopted.
///
/// # Example
///
/// ```
/// use farm_i18n::Language;
///
/// let lang: Language = "ta".parse().unwrap();
/// assert_eq!(lang, Language::Ta);
/// assert_eq!(lang.native_name(), "தமிழ்");
/// assert!("xx".parse::<Language>().is_err());
/// ```
#[derive(
    Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Bn,
    Te,
    Mr,
    Ta,
    Gu,
    Kn,
}

/// Returned when a string does not name a supported language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code '{code}'")]
pub struct UnsupportedLanguage {
    pub code: String,
}

impl Language {
    /// Every supported language, in picker order.
    pub const ALL: [Language; 8] = [
        Language::En,
        Language::Hi,
        Language::Bn,
        Language::Te,
        Language::Mr,
        Language::Ta,
        Language::Gu,
        Language::Kn,
    ];

    /// The language adopted when no valid preference is stored.
    pub const DEFAULT: Language = Language::En;

    /// The short code persisted to the preference store.
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Bn => "bn",
            Language::Te => "te",
            Language::Mr => "mr",
            Language::Ta => "ta",
            Language::Gu => "gu",
            Language::Kn => "kn",
        }
    }

    /// English display name.
    pub const fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Bn => "Bengali",
            Language::Te => "Telugu",
            Language::Mr => "Marathi",
            Language::Ta => "Tamil",
            Language::Gu => "Gujarati",
            Language::Kn => "Kannada",
        }
    }

    /// Name of the language in its own script, as shown in a language picker.
    pub const fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Bn => "বাংলা",
            Language::Te => "తెలుగు",
            Language::Mr => "मराठी",
            Language::Ta => "தமிழ்",
            Language::Gu => "ગુજરાતી",
            Language::Kn => "ಕನ್ನಡ",
        }
    }

    /// Look up a language by its exact code.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Language::from_code(code).ok_or_else(|| UnsupportedLanguage {
            code: code.to_string(),
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_code() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn parsing_is_exact() {
        assert_eq!(Language::from_code("EN"), None);
        assert_eq!(Language::from_code("hi-IN"), None);
        assert_eq!(Language::from_code(" en"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn serde_uses_code() {
        assert_eq!(serde_json::to_string(&Language::Gu).unwrap(), "\"gu\"");
        let lang: Language = serde_json::from_str("\"kn\"").unwrap();
        assert_eq!(lang, Language::Kn);
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::DEFAULT);
        assert_eq!(Language::DEFAULT, Language::En);
    }
}
