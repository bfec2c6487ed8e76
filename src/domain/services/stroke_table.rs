//! Stroke table
//!
//! Merges stroke layers into one immutable lookup according to precedence:
//! - Same character: the layer with the higher `StrokeLayerKind` wins
//! - Different characters: all are kept
//!
//! Precedence comes from the layer kind, never from the order layers are
//! passed in. Layers of the same kind keep their given order.

use std::collections::HashMap;

use crate::domain::entities::{StrokeEntry, StrokeLayer, StrokeLayerKind};
use crate::error::{SeimeiError, SeimeiResult};

/// Largest stroke count accepted from any data source
pub const MAX_STROKES: u32 = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrokeOverride {
    pub character: char,
    pub from_layer: String,
    pub from_strokes: u32,
    pub by_layer: String,
    pub by_strokes: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeTable {
    entries: HashMap<char, StrokeEntry>,
    overrides: Vec<StrokeOverride>,
    layer_sizes: Vec<(String, usize)>,
}

impl StrokeTable {
    pub fn build(mut layers: Vec<StrokeLayer>) -> SeimeiResult<Self> {
        layers.sort_by_key(|layer| layer.kind);

        let mut entries: HashMap<char, StrokeEntry> = HashMap::new();
        let mut sources: HashMap<char, String> = HashMap::new();
        let mut overrides: Vec<StrokeOverride> = Vec::new();
        let mut layer_sizes = Vec::with_capacity(layers.len());

        for layer in &layers {
            for entry in &layer.entries {
                validate_entry(layer, entry)?;

                if let Some(previous) = entries.get(&entry.character) {
                    overrides.push(StrokeOverride {
                        character: entry.character,
                        from_layer: sources
                            .get(&entry.character)
                            .cloned()
                            .unwrap_or_else(|| previous.source.to_string()),
                        from_strokes: previous.strokes,
                        by_layer: layer.name.clone(),
                        by_strokes: entry.strokes,
                    });
                }

                let mut merged = entry.clone();
                merged.source = layer.kind;
                entries.insert(entry.character, merged);
                sources.insert(entry.character, layer.name.clone());
            }
            layer_sizes.push((layer.name.clone(), layer.entries.len()));
        }

        Ok(Self {
            entries,
            overrides,
            layer_sizes,
        })
    }

    /// Table built from the bundled data layers only
    pub fn builtin() -> SeimeiResult<Self> {
        Self::build(crate::data::builtin_layers())
    }

    pub fn get(&self, character: char) -> Option<&StrokeEntry> {
        self.entries.get(&character)
    }

    pub fn contains(&self, character: char) -> bool {
        self.entries.contains_key(&character)
    }

    /// Modern form of an old-form character, or the character itself
    pub fn canonical_of(&self, character: char) -> char {
        self.get(character)
            .map(|e| e.canonical)
            .unwrap_or(character)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every conflict resolved during the merge, in merge order
    pub fn overrides(&self) -> &[StrokeOverride] {
        &self.overrides
    }

    /// (layer name, entry count) in precedence order
    pub fn layer_sizes(&self) -> &[(String, usize)] {
        &self.layer_sizes
    }

    /// Characters in code point order
    pub fn characters(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.entries.keys().copied().collect();
        chars.sort_unstable();
        chars
    }

    pub fn entries_from(&self, kind: StrokeLayerKind) -> Vec<&StrokeEntry> {
        let mut found: Vec<&StrokeEntry> =
            self.entries.values().filter(|e| e.source == kind).collect();
        found.sort_by_key(|e| e.character);
        found
    }
}

fn validate_entry(layer: &StrokeLayer, entry: &StrokeEntry) -> SeimeiResult<()> {
    if entry.strokes == 0 || entry.strokes > MAX_STROKES {
        return Err(SeimeiError::StrokeDataIntegrity {
            source_name: layer.name.clone(),
            message: format!(
                "'{}' has stroke count {} (expected 1..={})",
                entry.character, entry.strokes, MAX_STROKES
            ),
        });
    }
    if entry.is_old_form && entry.canonical == entry.character {
        return Err(SeimeiError::StrokeDataIntegrity {
            source_name: layer.name.clone(),
            message: format!(
                "old form '{}' must name a different modern form",
                entry.character
            ),
        });
    }
    Ok(())
}
