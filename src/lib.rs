//! ad-i18n - translation resolver and language store for the Agentic Driven site
//!
//! Resolves the session language from storage and the ambient locale,
//! translates dotted key paths against nested JSON catalogs, and persists
//! the user's language choice.
//!
//! ## Module Structure
//!
//! - `language`: Supported language codes and selector descriptors
//! - `catalog`: Catalog trees and strict key-path lookup
//! - `context`: The `I18n` context (initial resolution, `translate`, `set_language`)
//! - `locale`: Ambient locale detection
//! - `storage`: Preference storage port with memory and file backends
//! - `parsers`: Catalog file loading
//! - `parity`: Key-path gaps between catalogs
//! - `toc`: Table-of-contents highlighting
//! - `config`: Configuration file loading and parsing
//! - `cli`: Command-line interface layer
//!
//! ```
//! use ad_i18n::{catalog::{Catalog, Catalogs}, context::I18n, language::LanguageCode};
//!
//! let en = Catalog::from_json_str(r#"{"hero": {"title": "Agentic Driven"}}"#).unwrap();
//! let i18n = I18n::builder(Catalogs::new().with(LanguageCode::En, en)).build();
//!
//! assert_eq!(i18n.translate("hero.title"), "Agentic Driven");
//! assert_eq!(i18n.translate("hero.missing"), "hero.missing");
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod language;
pub mod locale;
pub mod parity;
pub mod parsers;
pub mod storage;
pub mod toc;
