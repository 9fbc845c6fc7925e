//! Catalog trees and strict key-path lookup.
//!
//! A catalog is a nested string tree: internal nodes are mappings, leaves
//! are localized strings. Lookups walk a dot-separated key path one segment
//! at a time and never fall back; the identity fallback lives in
//! [`crate::context::I18n::translate`].

use std::{
    collections::{BTreeMap, HashMap},
    path::PathBuf,
};

use serde_json::Value;

use crate::{
    error::{I18nError, I18nResult},
    language::LanguageCode,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(String),
    Branch(BTreeMap<String, Node>),
}

/// The full translation tree for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    root: BTreeMap<String, Node>,
}

impl Catalog {
    pub fn new(root: BTreeMap<String, Node>) -> Self {
        Self { root }
    }

    /// Build a catalog from a parsed JSON document.
    ///
    /// The root must be an object. Values that are neither strings nor
    /// objects cannot be rendered and are dropped with a warning.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        match value {
            Value::Object(map) => Ok(Self {
                root: branch_from_map(map, ""),
            }),
            other => Err(format!(
                "catalog root must be an object, found {}",
                json_kind(other)
            )),
        }
    }

    pub fn from_json_str(content: &str) -> I18nResult<Self> {
        let invalid = |reason: String| I18nError::InvalidCatalog {
            path: PathBuf::from("<inline>"),
            reason,
        };
        let value: Value = serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?;
        Self::from_value(&value).map_err(invalid)
    }

    /// Resolve `key_path` to a non-empty leaf string.
    ///
    /// Returns `None` when a segment is absent, when a leaf is reached
    /// before the path is exhausted, when the path ends on a mapping, or
    /// when the leaf is the empty string.
    pub fn lookup(&self, key_path: &str) -> Option<&str> {
        let mut segments = key_path.split('.');
        let mut node = self.root.get(segments.next()?)?;
        for segment in segments {
            match node {
                Node::Branch(children) => node = children.get(segment)?,
                Node::Leaf(_) => return None,
            }
        }
        match node {
            Node::Leaf(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    /// Every leaf key path, sorted.
    pub fn key_paths(&self) -> Vec<String> {
        self.leaves().into_iter().map(|(path, _)| path).collect()
    }

    /// Every leaf with its raw value, sorted by key path.
    ///
    /// Unlike [`Catalog::lookup`] this includes empty values and keys that
    /// contain a `.`, which no key path can reach.
    pub fn leaves(&self) -> Vec<(String, &str)> {
        let mut leaves = Vec::new();
        collect_leaves(&self.root, "", &mut leaves);
        leaves.sort();
        leaves
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn branch_from_map(map: &serde_json::Map<String, Value>, prefix: &str) -> BTreeMap<String, Node> {
    let mut branch = BTreeMap::new();
    for (key, value) in map {
        let path = join_key(prefix, key);
        match value {
            Value::String(s) => {
                branch.insert(key.clone(), Node::Leaf(s.clone()));
            }
            Value::Object(children) => {
                branch.insert(key.clone(), Node::Branch(branch_from_map(children, &path)));
            }
            other => {
                log::warn!(
                    "dropping catalog entry \"{}\": expected string or object, found {}",
                    path,
                    json_kind(other)
                );
            }
        }
    }
    branch
}

fn collect_leaves<'a>(
    branch: &'a BTreeMap<String, Node>,
    prefix: &str,
    out: &mut Vec<(String, &'a str)>,
) {
    for (key, node) in branch {
        let path = join_key(prefix, key);
        match node {
            Node::Leaf(value) => out.push((path, value.as_str())),
            Node::Branch(children) => collect_leaves(children, &path, out),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Catalogs for every loaded language.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    by_language: HashMap<LanguageCode, Catalog>,
}

impl Catalogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, lang: LanguageCode, catalog: Catalog) -> Self {
        self.insert(lang, catalog);
        self
    }

    pub fn insert(&mut self, lang: LanguageCode, catalog: Catalog) {
        self.by_language.insert(lang, catalog);
    }

    pub fn get(&self, lang: LanguageCode) -> Option<&Catalog> {
        self.by_language.get(&lang)
    }

    /// Loaded languages in selector order.
    pub fn languages(&self) -> Vec<LanguageCode> {
        LanguageCode::ALL
            .into_iter()
            .filter(|lang| self.by_language.contains_key(lang))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_language.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_language.is_empty()
    }
}
