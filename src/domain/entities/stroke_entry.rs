//! Stroke entry and stroke layer entities
//!
//! A stroke layer is one data source (numerals, surnames, kana, old forms...)
//! with its entries. Layers are merged into a `StrokeTable` by precedence.

use serde::{Deserialize, Serialize};

/// Data source of a stroke entry.
///
/// The declaration order IS the precedence order (lowest first): when two
/// layers define the same character, the later kind wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrokeLayerKind {
    Numerals,
    Surnames,
    GivenNames,
    Hiragana,
    Katakana,
    OldForms,
    Curated,
}

impl StrokeLayerKind {
    pub const PRECEDENCE: [StrokeLayerKind; 7] = [
        StrokeLayerKind::Numerals,
        StrokeLayerKind::Surnames,
        StrokeLayerKind::GivenNames,
        StrokeLayerKind::Hiragana,
        StrokeLayerKind::Katakana,
        StrokeLayerKind::OldForms,
        StrokeLayerKind::Curated,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StrokeLayerKind::Numerals => "numerals",
            StrokeLayerKind::Surnames => "surnames",
            StrokeLayerKind::GivenNames => "given-names",
            StrokeLayerKind::Hiragana => "hiragana",
            StrokeLayerKind::Katakana => "katakana",
            StrokeLayerKind::OldForms => "old-forms",
            StrokeLayerKind::Curated => "curated",
        }
    }
}

impl std::fmt::Display for StrokeLayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single character with its stroke count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeEntry {
    pub character: char,
    pub strokes: u32,
    pub is_old_form: bool,
    /// Modern form; equals `character` for anything that is not an old form
    pub canonical: char,
    pub source: StrokeLayerKind,
}

impl StrokeEntry {
    pub fn new(character: char, strokes: u32, source: StrokeLayerKind) -> Self {
        Self {
            character,
            strokes,
            is_old_form: false,
            canonical: character,
            source,
        }
    }

    pub fn old_form(character: char, strokes: u32, canonical: char, source: StrokeLayerKind) -> Self {
        Self {
            character,
            strokes,
            is_old_form: true,
            canonical,
            source,
        }
    }
}

/// One stroke data source with its entries
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeLayer {
    pub kind: StrokeLayerKind,
    /// Display name, e.g. "curated" or the override file path
    pub name: String,
    pub entries: Vec<StrokeEntry>,
}

impl StrokeLayer {
    pub fn new(kind: StrokeLayerKind) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            entries: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_entries(mut self, entries: Vec<StrokeEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Build a layer from `(character, strokes)` pairs
    pub fn from_pairs(kind: StrokeLayerKind, pairs: &[(char, u32)]) -> Self {
        let entries = pairs
            .iter()
            .map(|&(c, n)| StrokeEntry::new(c, n, kind))
            .collect();
        Self::new(kind).with_entries(entries)
    }
}

/// Result of resolving one character inside a name segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeLookup {
    pub character: char,
    pub strokes: u32,
    pub is_old_form: bool,
    pub canonical: char,
    /// False when the default stroke count was used
    pub resolved: bool,
    /// True for an iteration mark that copied the previous character
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inherited: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<StrokeLayerKind>,
}
