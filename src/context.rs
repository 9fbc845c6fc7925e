//! The translation context: active language, catalogs and persistence.
//!
//! An [`I18n`] value is created once per session by [`I18nBuilder::build`],
//! which resolves the initial language, and is then passed to whatever
//! renders text. Changing the language goes through
//! [`I18n::set_language`], the only mutation.

use crate::{
    catalog::Catalogs,
    error::{I18nError, I18nResult},
    language::{DEFAULT_LANGUAGE, LanguageCode},
    locale::language_from_locale,
    storage::{LANGUAGE_KEY, MemoryStore, PreferenceStore},
};

/// Pick the starting language for a session.
///
/// Priority: a supported persisted value, then the ambient locale's
/// language, then [`DEFAULT_LANGUAGE`]. Never fails and never writes.
pub fn resolve_initial_language(store: &dyn PreferenceStore, ambient: Option<&str>) -> LanguageCode {
    match store.get(LANGUAGE_KEY) {
        Ok(Some(value)) => match LanguageCode::from_code(&value) {
            Some(lang) => return lang,
            None => log::warn!("{}", I18nError::MalformedPersistedValue { value }),
        },
        Ok(None) => {}
        Err(e) => log::warn!("ignoring persisted language: {}", e),
    }

    if let Some(lang) = ambient.and_then(language_from_locale) {
        return lang;
    }

    DEFAULT_LANGUAGE
}

pub struct I18nBuilder {
    catalogs: Catalogs,
    store: Box<dyn PreferenceStore>,
    ambient_locale: Option<String>,
    session_override: Option<LanguageCode>,
}

impl I18nBuilder {
    pub fn new(catalogs: Catalogs) -> Self {
        Self {
            catalogs,
            store: Box::new(MemoryStore::new()),
            ambient_locale: None,
            session_override: None,
        }
    }

    pub fn store(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    pub fn boxed_store(mut self, store: Box<dyn PreferenceStore>) -> Self {
        self.store = store;
        self
    }

    pub fn ambient_locale(mut self, locale: Option<String>) -> Self {
        self.ambient_locale = locale;
        self
    }

    /// Language chosen earlier in this session; beats every other source.
    pub fn session_override(mut self, lang: Option<LanguageCode>) -> Self {
        self.session_override = lang;
        self
    }

    pub fn build(self) -> I18n {
        let language = self.session_override.unwrap_or_else(|| {
            resolve_initial_language(self.store.as_ref(), self.ambient_locale.as_deref())
        });
        log::debug!("initial language: {}", language);

        if self.catalogs.get(language).is_none() {
            log::debug!("no catalog loaded for {}; keys will render as-is", language);
        }

        I18n {
            catalogs: self.catalogs,
            language,
            document_language: language,
            store: self.store,
        }
    }
}

pub struct I18n {
    catalogs: Catalogs,
    language: LanguageCode,
    document_language: LanguageCode,
    store: Box<dyn PreferenceStore>,
}

impl I18n {
    pub fn builder(catalogs: Catalogs) -> I18nBuilder {
        I18nBuilder::new(catalogs)
    }

    pub fn language(&self) -> LanguageCode {
        self.language
    }

    /// Value for the host document's language attribute.
    pub fn document_language(&self) -> LanguageCode {
        self.document_language
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    /// Hand the store back, e.g. to build the next session from it.
    pub fn into_store(self) -> Box<dyn PreferenceStore> {
        self.store
    }

    /// Strict lookup in the active catalog.
    pub fn lookup(&self, key_path: &str) -> Option<&str> {
        self.catalogs.get(self.language)?.lookup(key_path)
    }

    /// Strict lookup that reports a miss as [`I18nError::MissingTranslationKey`].
    pub fn require(&self, key_path: &str) -> I18nResult<&str> {
        self.lookup(key_path)
            .ok_or_else(|| I18nError::MissingTranslationKey {
                key: key_path.to_string(),
            })
    }

    /// Localized text for `key_path`, or `key_path` itself when it does not
    /// resolve to a non-empty string.
    pub fn translate<'a>(&'a self, key_path: &'a str) -> &'a str {
        match self.lookup(key_path) {
            Some(value) => value,
            None => {
                log::debug!(
                    "{} [{}]",
                    I18nError::MissingTranslationKey {
                        key: key_path.to_string()
                    },
                    self.language
                );
                key_path
            }
        }
    }

    /// Switch to the language named by `code` and persist it.
    ///
    /// Unsupported codes are rejected and leave the state unchanged.
    pub fn set_language(&mut self, code: &str) -> I18nResult<()> {
        let lang = code.parse::<LanguageCode>()?;
        self.set_language_code(lang)
    }

    /// Switch to `lang` and persist it.
    ///
    /// The in-memory switch happens even when the store write fails; the
    /// write error is returned.
    pub fn set_language_code(&mut self, lang: LanguageCode) -> I18nResult<()> {
        if lang != self.language {
            log::info!("language changed: {} -> {}", self.language, lang);
        }
        self.language = lang;
        self.document_language = lang;
        self.store.set(LANGUAGE_KEY, lang.code())
    }
}
