//! Key-path parity between catalogs.
//!
//! Every language should expose the same key paths as the reference
//! language. Lookups tolerate gaps; this check reports them.

use std::collections::{BTreeSet, HashMap};

use crate::{
    catalog::Catalogs,
    language::LanguageCode,
    parsers::json::CatalogSource,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParityIssueKind {
    /// Defined in the reference catalog, absent here.
    Missing,
    /// Defined here, absent from the reference catalog.
    Extra,
    /// Defined with an empty string, which renders as the key path.
    Empty,
    /// Defined under a key containing `.`, which no key path can reach.
    Unreachable,
}

impl ParityIssueKind {
    pub fn severity(self) -> Severity {
        match self {
            ParityIssueKind::Missing => Severity::Error,
            ParityIssueKind::Extra | ParityIssueKind::Empty | ParityIssueKind::Unreachable => {
                Severity::Warning
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ParityIssueKind::Missing => "missing-key",
            ParityIssueKind::Extra => "extra-key",
            ParityIssueKind::Empty => "empty-value",
            ParityIssueKind::Unreachable => "unreachable-key",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLocation {
    pub file_path: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityIssue {
    pub language: LanguageCode,
    pub key: String,
    pub kind: ParityIssueKind,
    /// Where the key is defined: in the reference file for missing keys,
    /// in the language's own file otherwise.
    pub location: Option<KeyLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityReport {
    pub reference: LanguageCode,
    /// Supported languages with no catalog at all.
    pub missing_catalogs: Vec<LanguageCode>,
    pub issues: Vec<ParityIssue>,
}

impl ParityReport {
    pub fn error_count(&self) -> usize {
        self.missing_catalogs.len()
            + self
                .issues
                .iter()
                .filter(|i| i.kind.severity() == Severity::Error)
                .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.kind.severity() == Severity::Warning)
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.missing_catalogs.is_empty() && self.issues.is_empty()
    }
}

fn locate(
    sources: &HashMap<LanguageCode, CatalogSource>,
    lang: LanguageCode,
    key: &str,
) -> Option<KeyLocation> {
    let source = sources.get(&lang)?;
    Some(KeyLocation {
        file_path: source.file_path.clone(),
        line: source.line_of(key)?,
    })
}

/// Compare every loaded catalog with `reference`.
///
/// `sources` is optional location data; catalogs built in memory simply
/// produce issues without locations.
pub fn check_parity(
    catalogs: &Catalogs,
    reference: LanguageCode,
    sources: &HashMap<LanguageCode, CatalogSource>,
) -> ParityReport {
    let missing_catalogs: Vec<LanguageCode> = LanguageCode::ALL
        .into_iter()
        .filter(|lang| catalogs.get(*lang).is_none())
        .collect();

    let mut issues = Vec::new();
    let reference_keys: BTreeSet<String> = catalogs
        .get(reference)
        .map(|c| c.key_paths().into_iter().collect())
        .unwrap_or_default();

    for lang in catalogs.languages() {
        let Some(catalog) = catalogs.get(lang) else {
            continue;
        };
        let leaves = catalog.leaves();
        let keys: BTreeSet<String> = leaves.iter().map(|(key, _)| key.clone()).collect();

        for (key, value) in &leaves {
            let kind = if value.is_empty() {
                ParityIssueKind::Empty
            } else if catalog.lookup(key).is_none() {
                ParityIssueKind::Unreachable
            } else {
                continue;
            };
            issues.push(ParityIssue {
                language: lang,
                key: key.clone(),
                kind,
                location: locate(sources, lang, key),
            });
        }

        if lang == reference {
            continue;
        }

        for key in reference_keys.difference(&keys) {
            issues.push(ParityIssue {
                language: lang,
                key: key.clone(),
                kind: ParityIssueKind::Missing,
                location: locate(sources, reference, key),
            });
        }
        for key in keys.difference(&reference_keys) {
            issues.push(ParityIssue {
                language: lang,
                key: key.clone(),
                kind: ParityIssueKind::Extra,
                location: locate(sources, lang, key),
            });
        }
    }

    issues.sort_by(|a, b| {
        a.language
            .cmp(&b.language)
            .then_with(|| a.kind.cmp(&b.kind))
            .then_with(|| a.key.cmp(&b.key))
    });

    ParityReport {
        reference,
        missing_catalogs,
        issues,
    }
}
