//! Stroke resolver
//!
//! Resolves characters of a name segment against an injected `StrokeTable`.
//! - `々` copies the stroke count of the previous character in the segment
//! - Unknown characters fall back to the default count and are marked
//!   unresolved instead of failing

use crate::domain::entities::{NameSegment, StrokeLookup, ITERATION_MARK};
use crate::domain::services::StrokeTable;
use crate::error::{SeimeiError, SeimeiResult};

/// Stroke count used for characters missing from every layer
pub const DEFAULT_STROKE_COUNT: u32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct StrokeResolver<'a> {
    table: &'a StrokeTable,
    default_strokes: u32,
}

impl<'a> StrokeResolver<'a> {
    pub fn new(table: &'a StrokeTable) -> Self {
        Self {
            table,
            default_strokes: DEFAULT_STROKE_COUNT,
        }
    }

    pub fn with_default_strokes(mut self, default_strokes: u32) -> Self {
        self.default_strokes = default_strokes.max(1);
        self
    }

    pub fn default_strokes(&self) -> u32 {
        self.default_strokes
    }

    /// Look up a single character outside of any segment context
    pub fn lookup(&self, character: char) -> StrokeLookup {
        match self.table.get(character) {
            Some(entry) => StrokeLookup {
                character,
                strokes: entry.strokes,
                is_old_form: entry.is_old_form,
                canonical: entry.canonical,
                resolved: true,
                inherited: false,
                source: Some(entry.source),
            },
            None => StrokeLookup {
                character,
                strokes: self.default_strokes,
                is_old_form: false,
                canonical: character,
                resolved: false,
                inherited: false,
                source: None,
            },
        }
    }

    /// Resolve every character of a segment, in order
    pub fn resolve_segment(&self, segment: &NameSegment) -> Vec<StrokeLookup> {
        self.resolve_chars(segment.chars(), segment.kind.label())
    }

    /// Resolve free text word by word, with `々` inheriting inside each word
    ///
    /// A word starting with `々` has nothing to repeat and is rejected, the
    /// same way a name segment would be.
    pub fn resolve_text(&self, text: &str) -> SeimeiResult<Vec<StrokeLookup>> {
        let mut out = Vec::new();
        for word in text.split_whitespace() {
            if word.starts_with(ITERATION_MARK) {
                return Err(SeimeiError::LeadingIterationMark {
                    segment: "text",
                    value: word.to_string(),
                });
            }
            out.extend(self.resolve_chars(word.chars(), "text"));
        }
        Ok(out)
    }

    fn resolve_chars(&self, chars: impl Iterator<Item = char>, context: &'static str) -> Vec<StrokeLookup> {
        let mut out: Vec<StrokeLookup> = Vec::new();

        for character in chars {
            let lookup = match (character, out.last()) {
                (ITERATION_MARK, Some(previous)) => StrokeLookup {
                    character,
                    strokes: previous.strokes,
                    is_old_form: false,
                    canonical: character,
                    resolved: previous.resolved,
                    inherited: true,
                    source: None,
                },
                _ => self.lookup(character),
            };

            if !lookup.resolved {
                tracing::debug!(
                    character = %character,
                    segment = context,
                    strokes = lookup.strokes,
                    "unresolved character, using default stroke count"
                );
            }
            out.push(lookup);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{SegmentKind, StrokeLayer, StrokeLayerKind};

    fn table() -> StrokeTable {
        StrokeTable::build(vec![StrokeLayer::from_pairs(
            StrokeLayerKind::Surnames,
            &[('佐', 7), ('木', 4), ('野', 11)],
        )])
        .unwrap()
    }

    fn segment(text: &str) -> NameSegment {
        NameSegment::parse(SegmentKind::Surname, text, 10).unwrap()
    }

    #[test]
    fn iteration_mark_inherits_previous_count() {
        let table = table();
        let resolver = StrokeResolver::new(&table);
        let strokes: Vec<u32> = resolver
            .resolve_segment(&segment("佐々木"))
            .iter()
            .map(|l| l.strokes)
            .collect();
        assert_eq!(strokes, vec![7, 7, 4]);
    }

    #[test]
    fn iteration_mark_chains() {
        let table = table();
        let resolver = StrokeResolver::new(&table);
        let lookups = resolver.resolve_segment(&segment("野々々"));
        assert_eq!(
            lookups.iter().map(|l| l.strokes).collect::<Vec<_>>(),
            vec![11, 11, 11]
        );
        assert!(lookups[1].inherited && lookups[2].inherited);
        assert!(lookups.iter().all(|l| l.resolved));
    }

    #[test]
    fn iteration_mark_is_not_a_constant() {
        let table = table();
        let resolver = StrokeResolver::new(&table);
        let a = resolver.resolve_segment(&segment("佐々"));
        let b = resolver.resolve_segment(&segment("木々"));
        assert_ne!(a[1].strokes, b[1].strokes);
    }

    #[test]
    fn unknown_character_uses_default_and_is_flagged() {
        let table = table();
        let resolver = StrokeResolver::new(&table).with_default_strokes(8);
        let lookup = resolver.lookup('燚');
        assert_eq!(lookup.strokes, 8);
        assert!(!lookup.resolved);
        assert_eq!(lookup.source, None);
    }

    #[test]
    fn iteration_mark_after_unknown_stays_unresolved() {
        let table = table();
        let resolver = StrokeResolver::new(&table);
        let lookups = resolver.resolve_segment(&segment("燚々"));
        assert_eq!(lookups[1].strokes, DEFAULT_STROKE_COUNT);
        assert!(!lookups[1].resolved);
    }

    #[test]
    fn text_resolution_inherits_within_words() {
        let table = table();
        let resolver = StrokeResolver::new(&table);
        let lookups = resolver.resolve_text("佐々木 野々").unwrap();
        assert_eq!(
            lookups.iter().map(|l| l.strokes).collect::<Vec<_>>(),
            vec![7, 7, 4, 11, 11]
        );
        assert!(lookups[1].inherited && lookups[1].resolved);
        assert!(lookups[4].inherited);
    }

    #[test]
    fn text_word_starting_with_iteration_mark_is_rejected() {
        let table = table();
        let resolver = StrokeResolver::new(&table);
        assert!(matches!(
            resolver.resolve_text("佐 々木"),
            Err(SeimeiError::LeadingIterationMark { .. })
        ));
        assert!(resolver.resolve_text("   ").unwrap().is_empty());
    }

    #[test]
    fn default_strokes_never_zero() {
        let table = table();
        let resolver = StrokeResolver::new(&table).with_default_strokes(0);
        assert_eq!(resolver.default_strokes(), 1);
    }

    #[test]
    fn builtin_old_form_and_curated() {
        let table = StrokeTable::builtin().unwrap();
        let resolver = StrokeResolver::new(&table);

        let sawa = resolver.lookup('澤');
        assert_eq!(sawa.strokes, 16);
        assert!(sawa.is_old_form);
        assert_eq!(sawa.canonical, '沢');

        let taka = resolver.lookup('隆');
        assert_eq!(taka.strokes, 12);
        assert_eq!(taka.source, Some(StrokeLayerKind::Curated));

        assert_eq!(resolver.lookup('四').strokes, 4);
        assert_eq!(resolver.lookup('が').strokes, 5);
    }
}
