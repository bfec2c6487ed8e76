//! Bundled ground-truth data
//!
//! Stroke layers are returned unsorted; `StrokeTable::build` applies the
//! precedence order. The destiny calendar is shipped as TOML so the same
//! loader handles bundled and externally supplied tables.

mod curated;
mod given_names;
mod kana;
mod numerals;
mod old_forms;
mod surnames;

use crate::domain::entities::{StrokeEntry, StrokeLayer, StrokeLayerKind};

/// Destiny numbers (運命数) for 1900-2099
pub const DESTINY_NUMBERS_TOML: &str = include_str!("destiny_numbers.toml");

pub fn builtin_layers() -> Vec<StrokeLayer> {
    vec![
        StrokeLayer::from_pairs(StrokeLayerKind::Numerals, numerals::NUMERALS),
        StrokeLayer::from_pairs(StrokeLayerKind::Surnames, surnames::SURNAME_KANJI),
        StrokeLayer::from_pairs(StrokeLayerKind::GivenNames, given_names::GIVEN_NAME_KANJI),
        StrokeLayer::new(StrokeLayerKind::Hiragana).with_entries(kana::hiragana()),
        StrokeLayer::new(StrokeLayerKind::Katakana).with_entries(kana::katakana()),
        old_forms_layer(),
        curated_layer(),
    ]
}

fn old_forms_layer() -> StrokeLayer {
    let entries = old_forms::OLD_FORMS
        .iter()
        .map(|&(c, n, modern)| StrokeEntry::old_form(c, n, modern, StrokeLayerKind::OldForms))
        .collect();
    StrokeLayer::new(StrokeLayerKind::OldForms).with_entries(entries)
}

fn curated_layer() -> StrokeLayer {
    let entries = curated::CURATED
        .iter()
        .map(|&(c, n, modern)| match modern {
            Some(m) => StrokeEntry::old_form(c, n, m, StrokeLayerKind::Curated),
            None => StrokeEntry::new(c, n, StrokeLayerKind::Curated),
        })
        .collect();
    StrokeLayer::new(StrokeLayerKind::Curated).with_entries(entries)
}
