//! Curated stroke overrides from a TOML file
//!
//! ```toml
//! [[override]]
//! character = "髙"
//! strokes = 11
//! modern = "高"   # optional, marks an old form
//! ```
//!
//! The resulting layer has the `Curated` kind, so it wins over every
//! bundled layer except the bundled curated list, which it joins.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::{StrokeEntry, StrokeLayer, StrokeLayerKind};
use crate::error::{SeimeiError, SeimeiResult};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideEntry {
    character: String,
    strokes: u32,
    #[serde(default)]
    modern: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideFile {
    #[serde(default, rename = "override")]
    overrides: Vec<OverrideEntry>,
}

pub fn load_curated_layer(path: &Path) -> SeimeiResult<StrokeLayer> {
    let content = fs::read_to_string(path)?;
    let layer = parse_curated_layer(&path.display().to_string(), &content)?;
    tracing::debug!(
        path = %path.display(),
        entries = layer.entries.len(),
        "loaded curated stroke overrides"
    );
    Ok(layer)
}

pub fn parse_curated_layer(source_name: &str, content: &str) -> SeimeiResult<StrokeLayer> {
    let integrity = |message: String| SeimeiError::StrokeDataIntegrity {
        source_name: source_name.to_string(),
        message,
    };

    let file: OverrideFile = toml::from_str(content).map_err(|e| integrity(e.to_string()))?;

    let mut entries = Vec::with_capacity(file.overrides.len());
    for entry in file.overrides {
        let character = single_char(&entry.character)
            .ok_or_else(|| integrity(format!("'{}' is not a single character", entry.character)))?;
        let stroke_entry = match entry.modern.as_deref() {
            Some(modern) => {
                let modern = single_char(modern)
                    .ok_or_else(|| integrity(format!("'{modern}' is not a single character")))?;
                StrokeEntry::old_form(character, entry.strokes, modern, StrokeLayerKind::Curated)
            }
            None => StrokeEntry::new(character, entry.strokes, StrokeLayerKind::Curated),
        };
        entries.push(stroke_entry);
    }

    Ok(StrokeLayer::new(StrokeLayerKind::Curated)
        .with_name(source_name)
        .with_entries(entries))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::StrokeTable;
    use crate::error::ErrorKind;

    const SAMPLE: &str = r#"
[[override]]
character = "燚"
strokes = 16

[[override]]
character = "澤"
strokes = 17
modern = "沢"
"#;

    #[test]
    fn parses_entries_and_old_forms() {
        let layer = parse_curated_layer("local.toml", SAMPLE).unwrap();
        assert_eq!(layer.kind, StrokeLayerKind::Curated);
        assert_eq!(layer.name, "local.toml");
        assert_eq!(layer.entries.len(), 2);
        assert!(layer.entries[1].is_old_form);
        assert_eq!(layer.entries[1].canonical, '沢');
    }

    #[test]
    fn file_layer_overrides_bundled_old_form() {
        let mut layers = crate::data::builtin_layers();
        layers.push(parse_curated_layer("local.toml", SAMPLE).unwrap());
        let table = StrokeTable::build(layers).unwrap();

        assert_eq!(table.get('澤').unwrap().strokes, 17);
        assert_eq!(table.get('燚').unwrap().strokes, 16);
        assert!(table
            .overrides()
            .iter()
            .any(|o| o.character == '澤' && o.by_layer == "local.toml"));
    }

    #[test]
    fn rejects_unknown_keys_and_multi_char() {
        let err = parse_curated_layer("x", "[[override]]\ncharacter = \"燚\"\nstroke = 3\n")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataIntegrity);

        let err = parse_curated_layer("x", "[[override]]\ncharacter = \"燚燚\"\nstrokes = 3\n")
            .unwrap_err();
        assert!(err.to_string().contains("single character"));
    }

    #[test]
    fn zero_strokes_fail_at_merge() {
        let layer =
            parse_curated_layer("x", "[[override]]\ncharacter = \"燚\"\nstrokes = 0\n").unwrap();
        let err = StrokeTable::build(vec![layer]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataIntegrity);
    }
}
