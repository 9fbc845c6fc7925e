//! Per-invocation setup shared by the commands: config, paths, storage
//! and the ambient locale, with CLI flags taking precedence over the config
//! file.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use super::args::CommonArgs;
use crate::{
    catalog::Catalogs,
    config::{Config, load_config},
    context::{I18n, resolve_initial_language},
    language::LanguageCode,
    locale::detect_ambient_locale,
    parsers::json::{ScanCatalogsResult, scan_catalog_files},
    storage::FileStore,
};

pub struct SessionContext {
    pub config: Config,
    pub messages_dir: PathBuf,
    pub storage_path: PathBuf,
    pub ambient_locale: Option<String>,
}

impl SessionContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let loaded = load_config(&cwd)?;

        let messages_dir = common
            .messages_dir
            .clone()
            .unwrap_or_else(|| loaded.config.messages_dir_in(&loaded.base_dir));

        let storage_path = match common
            .storage
            .clone()
            .or_else(|| loaded.config.storage_path_in(&loaded.base_dir))
            .or_else(FileStore::default_path)
        {
            Some(path) => path,
            None => bail!(
                "Could not determine where to store the language preference.\n\
                 Hint: pass --storage or set 'storagePath' in .adi18nrc.json."
            ),
        };

        let ambient_locale = common
            .locale
            .clone()
            .filter(|l| !l.trim().is_empty())
            .or_else(detect_ambient_locale);

        log::debug!(
            "messages dir {:?}, storage {:?}, ambient locale {:?}",
            messages_dir,
            storage_path,
            ambient_locale
        );

        Ok(Self {
            config: loaded.config,
            messages_dir,
            storage_path,
            ambient_locale,
        })
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(&self.storage_path)
    }

    pub fn resolve_language(&self) -> LanguageCode {
        resolve_initial_language(&self.store(), self.ambient_locale.as_deref())
    }

    pub fn scan_catalogs(&self) -> Result<ScanCatalogsResult> {
        scan_catalog_files(&self.messages_dir)
    }

    pub fn i18n(&self, catalogs: Catalogs, session_override: Option<LanguageCode>) -> I18n {
        I18n::builder(catalogs)
            .store(self.store())
            .ambient_locale(self.ambient_locale.clone())
            .session_override(session_override)
            .build()
    }
}
