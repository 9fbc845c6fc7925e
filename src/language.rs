//! Supported languages and their selector descriptors.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::I18nError;

/// Language used when neither storage nor the ambient locale yields a
/// supported code.
pub const DEFAULT_LANGUAGE: LanguageCode = LanguageCode::En;

/// One of the fixed set of languages the site ships catalogs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Es,
    Zh,
    De,
    Ru,
    Hi,
}

impl LanguageCode {
    /// All supported languages, in selector order.
    pub const ALL: [LanguageCode; 6] = [
        LanguageCode::En,
        LanguageCode::Es,
        LanguageCode::Zh,
        LanguageCode::De,
        LanguageCode::Ru,
        LanguageCode::Hi,
    ];

    /// Two-letter code as stored and as used in catalog file names.
    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Es => "es",
            LanguageCode::Zh => "zh",
            LanguageCode::De => "de",
            LanguageCode::Ru => "ru",
            LanguageCode::Hi => "hi",
        }
    }

    /// Parse a code. Exact match only: codes are lowercase two-letter strings.
    pub fn from_code(code: &str) -> Option<LanguageCode> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    pub fn descriptor(self) -> &'static LanguageDescriptor {
        // LANGUAGES is in the same order as ALL.
        &LANGUAGES[self as usize]
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        DEFAULT_LANGUAGE
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::from_code(s).ok_or_else(|| I18nError::UnsupportedLanguageCode {
            code: s.to_string(),
        })
    }
}

/// Display data for a language selector entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    pub code: LanguageCode,
    pub display_name: &'static str,
    pub flag: &'static str,
}

pub const LANGUAGES: [LanguageDescriptor; 6] = [
    LanguageDescriptor {
        code: LanguageCode::En,
        display_name: "English",
        flag: "\u{1F1EC}\u{1F1E7}",
    },
    LanguageDescriptor {
        code: LanguageCode::Es,
        display_name: "Español",
        flag: "\u{1F1EA}\u{1F1F8}",
    },
    LanguageDescriptor {
        code: LanguageCode::Zh,
        display_name: "中文",
        flag: "\u{1F1E8}\u{1F1F3}",
    },
    LanguageDescriptor {
        code: LanguageCode::De,
        display_name: "Deutsch",
        flag: "\u{1F1E9}\u{1F1EA}",
    },
    LanguageDescriptor {
        code: LanguageCode::Ru,
        display_name: "Русский",
        flag: "\u{1F1F7}\u{1F1FA}",
    },
    LanguageDescriptor {
        code: LanguageCode::Hi,
        display_name: "हिन्दी",
        flag: "\u{1F1EE}\u{1F1F3}",
    },
];
