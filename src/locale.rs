//! Ambient locale detection.

use crate::language::LanguageCode;

/// Environment variable that overrides the OS locale.
pub const LOCALE_ENV: &str = "AD_I18N_LOCALE";

/// Read the ambient locale preference once: `AD_I18N_LOCALE` if set and
/// non-empty, otherwise the OS locale.
pub fn detect_ambient_locale() -> Option<String> {
    detect_with(|key| std::env::var(key).ok(), sys_locale::get_locale)
}

fn detect_with(
    env: impl Fn(&str) -> Option<String>,
    system: impl FnOnce() -> Option<String>,
) -> Option<String> {
    env(LOCALE_ENV)
        .filter(|v| !v.trim().is_empty())
        .or_else(system)
        .filter(|v| !v.trim().is_empty())
}

/// The language part of a locale tag, lowercased.
///
/// Accepts BCP 47 (`en-US`) and POSIX (`es_MX.UTF-8`) spellings.
pub fn primary_subtag(locale: &str) -> Option<String> {
    locale
        .trim()
        .split(['-', '_', '.', '@'])
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_ascii_lowercase)
}

/// Supported language named by an ambient locale, if any.
pub fn language_from_locale(locale: &str) -> Option<LanguageCode> {
    primary_subtag(locale).and_then(|code| LanguageCode::from_code(&code))
}
