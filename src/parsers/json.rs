use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::{
    catalog::{Catalog, Catalogs},
    language::LanguageCode,
};

/// Where a catalog came from, with the line of every leaf key.
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    pub file_path: String,
    pub key_lines: HashMap<String, usize>,
}

impl CatalogSource {
    pub fn line_of(&self, key_path: &str) -> Option<usize> {
        self.key_lines.get(key_path).copied()
    }
}

#[derive(Debug, Default)]
pub struct ScanCatalogsResult {
    pub catalogs: Catalogs,
    pub sources: HashMap<LanguageCode, CatalogSource>,
    pub warnings: Vec<String>,
}

pub fn parse_catalog_file(path: &Path) -> Result<(Catalog, CatalogSource)> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog file: {:?}", path))?;

    let catalog = Catalog::from_value(&json)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Invalid catalog file: {:?}", path))?;

    // Pre-compute line index for O(log n) line lookups
    let line_index = build_line_index(&content);
    let key_lines = catalog
        .key_paths()
        .into_iter()
        .map(|key| {
            let line = find_key_line(&content, &key, &line_index);
            (key, line)
        })
        .collect();

    Ok((
        catalog,
        CatalogSource {
            file_path: path.to_string_lossy().to_string(),
            key_lines,
        },
    ))
}

/// Build an index of line start byte offsets.
///
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line number for a byte offset.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Find the line where a key path is defined.
///
/// Each segment is searched after the previous one so `hero.title` finds
/// the `"title"` inside `"hero"`, and only matches followed by `:` count,
/// which skips string values containing the same text.
fn find_key_line(content: &str, key_path: &str, line_index: &[usize]) -> usize {
    let mut search_start = 0;
    for part in key_path.split('.') {
        let pattern = format!("\"{}\"", part);
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let abs_pos = pos + rel_pos;
            let after_pattern = abs_pos + pattern.len();

            if remaining[after_pattern..].trim_start().starts_with(':') {
                search_start += after_pattern;
                found = true;
                break;
            }
            pos = abs_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        offset_to_line(line_index, search_start)
    } else {
        1
    }
}

/// Extracts the language stem from a catalog filename.
///
/// - "en.json" -> Some("en")
/// - "/path/to/locales/zh.json" -> Some("zh")
pub fn extract_language(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Load every `<code>.json` catalog in `catalog_dir`.
///
/// Unknown language stems and unparsable files become warnings; only a
/// missing or non-directory path is an error.
pub fn scan_catalog_files(catalog_dir: impl AsRef<Path>) -> Result<ScanCatalogsResult> {
    let catalog_dir = catalog_dir.as_ref();
    let mut result = ScanCatalogsResult::default();

    if !catalog_dir.exists() {
        bail!(
            "Catalog directory '{}' does not exist.\n\
             Hint: Check your .adi18nrc.json 'messagesDir' setting.",
            catalog_dir.display()
        );
    }

    if !catalog_dir.is_dir() {
        bail!("'{}' is not a directory.", catalog_dir.display());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(catalog_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    for path in paths {
        let Some(stem) = extract_language(&path) else {
            continue;
        };
        let Some(lang) = LanguageCode::from_code(&stem) else {
            log::warn!("skipping {:?}: \"{}\" is not a supported language", path, stem);
            result
                .warnings
                .push(format!("Skipped {:?}: unsupported language \"{}\"", path, stem));
            continue;
        };

        match parse_catalog_file(&path) {
            Ok((catalog, source)) => {
                log::debug!("loaded {} keys for {} from {:?}", source.key_lines.len(), lang, path);
                result.catalogs.insert(lang, catalog);
                result.sources.insert(lang, source);
            }
            Err(e) => {
                result
                    .warnings
                    .push(format!("Failed to parse {:?}: {:#}", path, e));
            }
        }
    }

    Ok(result)
}
