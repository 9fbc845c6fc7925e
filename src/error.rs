//! Error types for the translation resolver and language store.
//!
//! Lookup misses and malformed persisted values are recovered locally and
//! only appear in logs. The remaining kinds are returned to callers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum I18nError {
    /// A key path did not resolve to a non-empty string in the active catalog.
    #[error("Missing translation key: {key}")]
    MissingTranslationKey { key: String },

    /// A language outside the supported set was requested.
    #[error("Unsupported language code: \"{code}\"")]
    UnsupportedLanguageCode { code: String },

    /// Storage held a value that is not a supported language code.
    #[error("Persisted language value is not supported: \"{value}\"")]
    MalformedPersistedValue { value: String },

    /// A catalog document is not a nested string tree.
    #[error("Invalid catalog {path}: {reason}")]
    InvalidCatalog { path: PathBuf, reason: String },

    /// Reading or writing the preference file failed.
    #[error("Could not access preference storage: {path}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preference file exists but is not a JSON object.
    #[error("Preference storage is not valid JSON: {path}")]
    StorageFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type I18nResult<T> = Result<T, I18nError>;
