//! Fortune Engine
//!
//! Facade over the domain services. Tables are built once and shared behind
//! `Arc`; every compute method takes `&self` and recomputes from scratch, so
//! one engine can serve many threads. The feedback store is the only state
//! that changes after construction.

use std::sync::Arc;

use crate::config::{Config, FeedbackStoreKind};
use crate::data;
use crate::domain::entities::{
    CharacterStroke, CompatibilityResult, ElementProfile, FeedbackSummary, Grids, KanjiCorrection,
    KanjiFeedback, NameAnalysis, PersonName, SixStar, StrokeLookup, UnsupportedCharacter,
    DEFAULT_MAX_SEGMENT_LEN,
};
use crate::domain::ports::FeedbackStore;
use crate::domain::services::{
    analyze_elements, compute_compatibility, compute_grids, compute_six_star, feedback_aggregator,
    headline_score, DestinyCalendar, FortuneTable, StrokeResolver, StrokeTable,
    DEFAULT_STROKE_COUNT, MAX_STROKES,
};
use crate::domain::value_objects::{Birthdate, Gender, RelationshipType};
use crate::error::{SeimeiError, SeimeiResult};
use crate::infrastructure::feedback::{default_feedback_path, InMemoryFeedbackStore, TomlFeedbackStore};
use crate::infrastructure::tables::{load_calendar, load_curated_layer};

#[derive(Clone)]
pub struct FortuneEngine {
    strokes: Arc<StrokeTable>,
    fortunes: Arc<FortuneTable>,
    calendar: Arc<DestinyCalendar>,
    feedback: Arc<dyn FeedbackStore>,
    default_strokes: u32,
    max_segment_len: usize,
}

impl FortuneEngine {
    /// Bundled tables and an in-memory feedback store
    pub fn new() -> SeimeiResult<Self> {
        Ok(Self::with_tables(
            StrokeTable::builtin()?,
            FortuneTable::builtin()?,
            DestinyCalendar::builtin()?,
        ))
    }

    pub fn with_tables(strokes: StrokeTable, fortunes: FortuneTable, calendar: DestinyCalendar) -> Self {
        Self {
            strokes: Arc::new(strokes),
            fortunes: Arc::new(fortunes),
            calendar: Arc::new(calendar),
            feedback: Arc::new(InMemoryFeedbackStore::new()),
            default_strokes: DEFAULT_STROKE_COUNT,
            max_segment_len: DEFAULT_MAX_SEGMENT_LEN,
        }
    }

    /// Build every table and the feedback store described by `config`
    pub fn from_config(config: &Config) -> SeimeiResult<Self> {
        let mut layers = data::builtin_layers();
        if let Some(path) = &config.strokes.overrides {
            layers.push(load_curated_layer(path)?);
        }
        let strokes = StrokeTable::build(layers)?;

        let calendar = match &config.calendar.path {
            Some(path) => load_calendar(path)?,
            None => DestinyCalendar::builtin()?,
        };

        let feedback: Arc<dyn FeedbackStore> = match config.feedback.store {
            FeedbackStoreKind::Memory => Arc::new(InMemoryFeedbackStore::new()),
            FeedbackStoreKind::Toml => Arc::new(TomlFeedbackStore::with_path(
                config
                    .feedback
                    .path
                    .clone()
                    .unwrap_or_else(default_feedback_path),
            )),
        };

        tracing::info!(
            characters = strokes.len(),
            overrides = strokes.overrides().len(),
            calendar = calendar.source_name(),
            feedback_store = ?config.feedback.store,
            "fortune engine ready"
        );
        for o in strokes.overrides() {
            tracing::debug!(
                character = %o.character,
                from = %o.from_layer,
                by = %o.by_layer,
                "{} -> {} strokes",
                o.from_strokes,
                o.by_strokes
            );
        }

        Ok(Self::with_tables(strokes, FortuneTable::builtin()?, calendar)
            .with_feedback_store(feedback)
            .with_default_strokes(config.strokes.default_count)
            .with_max_segment_len(config.strokes.max_segment_len))
    }

    pub fn with_feedback_store(mut self, store: Arc<dyn FeedbackStore>) -> Self {
        self.feedback = store;
        self
    }

    pub fn with_default_strokes(mut self, default_strokes: u32) -> Self {
        self.default_strokes = default_strokes.max(1);
        self
    }

    pub fn with_max_segment_len(mut self, max_segment_len: usize) -> Self {
        self.max_segment_len = max_segment_len.max(1);
        self
    }

    pub fn stroke_table(&self) -> &StrokeTable {
        &self.strokes
    }

    pub fn fortune_table(&self) -> &FortuneTable {
        &self.fortunes
    }

    pub fn calendar(&self) -> &DestinyCalendar {
        &self.calendar
    }

    pub fn default_strokes(&self) -> u32 {
        self.default_strokes
    }

    fn resolver(&self) -> StrokeResolver<'_> {
        StrokeResolver::new(&self.strokes).with_default_strokes(self.default_strokes)
    }

    fn resolve_name(&self, surname: &str, given: &str) -> SeimeiResult<(PersonName, Vec<CharacterStroke>, Grids)> {
        let name = PersonName::with_max_len(surname, given, self.max_segment_len)?;
        let resolver = self.resolver();

        let surname_lookups = resolver.resolve_segment(&name.surname);
        let given_lookups = resolver.resolve_segment(&name.given);

        let surname_strokes: Vec<u32> = surname_lookups.iter().map(|l| l.strokes).collect();
        let given_strokes: Vec<u32> = given_lookups.iter().map(|l| l.strokes).collect();
        let grids = compute_grids(&surname_strokes, &given_strokes)?;

        let characters = surname_lookups
            .into_iter()
            .map(|lookup| CharacterStroke {
                segment: name.surname.kind,
                lookup,
            })
            .chain(given_lookups.into_iter().map(|lookup| CharacterStroke {
                segment: name.given.kind,
                lookup,
            }))
            .collect();

        Ok((name, characters, grids))
    }

    pub fn compute_name_fortune(&self, surname: &str, given: &str, gender: Gender) -> SeimeiResult<NameAnalysis> {
        let (name, characters, grids) = self.resolve_name(surname, given)?;
        let fortunes = self.fortunes.grid_fortunes(&grids, gender)?;
        let total_score = headline_score(&fortunes);
        let unresolved = unresolved_characters(&characters);

        tracing::debug!(
            name = %name,
            heaven = grids.heaven,
            person = grids.person,
            earth = grids.earth,
            outer = grids.outer,
            total = grids.total,
            score = total_score,
            "computed name fortune"
        );

        Ok(NameAnalysis {
            name,
            gender,
            characters,
            grids,
            fortunes,
            total_score,
            unresolved,
        })
    }

    pub fn compute_five_elements(
        &self,
        surname: &str,
        given: &str,
        birthdate: Option<Birthdate>,
    ) -> SeimeiResult<ElementProfile> {
        let (_, _, grids) = self.resolve_name(surname, given)?;
        Ok(analyze_elements(&grids, birthdate.as_ref()))
    }

    pub fn compute_six_star(&self, birthdate: Birthdate) -> SeimeiResult<SixStar> {
        compute_six_star(&self.calendar, birthdate)
    }

    /// `first` is the senior party for business; every other type is symmetric
    pub fn compute_compatibility(
        &self,
        first: &NameAnalysis,
        second: &NameAnalysis,
        relationship: RelationshipType,
    ) -> CompatibilityResult {
        compute_compatibility(&self.fortunes, first, second, relationship)
    }

    /// Table lookup for a single character
    ///
    /// `々` has no count of its own here; use `lookup_strokes` for text.
    pub fn lookup_stroke(&self, character: char) -> StrokeLookup {
        self.resolver().lookup(character)
    }

    /// Stroke lookups for free text, resolving `々` against the character before it
    pub fn lookup_strokes(&self, text: &str) -> SeimeiResult<Vec<StrokeLookup>> {
        self.resolver().resolve_text(text)
    }

    pub fn record_kanji_feedback(&self, character: char, correction: KanjiCorrection) -> SeimeiResult<()> {
        if let Some(count) = correction.strokes {
            if count == 0 || count > MAX_STROKES {
                return Err(SeimeiError::InvalidStrokeCount { character, count });
            }
        }

        self.feedback.record(KanjiFeedback::new(character, correction))?;
        tracing::info!(character = %character, known = self.strokes.contains(character), "recorded kanji feedback");
        Ok(())
    }

    pub fn feedback_summary(&self, character: char) -> SeimeiResult<Option<FeedbackSummary>> {
        let entries = self.feedback.entries_for(character)?;
        Ok(feedback_aggregator::summarize(character, &entries))
    }

    /// Unknown characters reported at least `threshold` times, most reported first
    pub fn frequent_unsupported(&self, threshold: usize) -> SeimeiResult<Vec<UnsupportedCharacter>> {
        let counts = self.feedback.submission_counts()?;
        Ok(feedback_aggregator::frequent_unsupported(&self.strokes, &counts, threshold))
    }
}

/// Characters that fell back to the default count, first occurrence only.
/// Iteration marks are reported through the character they copy.
fn unresolved_characters(characters: &[CharacterStroke]) -> Vec<char> {
    let mut out: Vec<char> = Vec::new();
    for c in characters {
        let lookup = &c.lookup;
        if !lookup.resolved && !lookup.inherited && !out.contains(&lookup.character) {
            out.push(lookup.character);
        }
    }
    out
}
