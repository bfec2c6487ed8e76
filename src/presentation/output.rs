//! Output Rendering
//!
//! Text renderers return a `String` so commands and tests share them. Column
//! alignment uses display width, since kanji take two terminal cells.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::domain::entities::{
    CompatibilityResult, ElementProfile, FeedbackSummary, GridFortune, NameAnalysis, SixStar,
    StrokeLookup, UnsupportedCharacter,
};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn render_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Pad to `width` terminal columns
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

fn stroke_note(lookup: &StrokeLookup) -> String {
    if lookup.inherited {
        "  inherited".to_string()
    } else if !lookup.resolved {
        "  unresolved".to_string()
    } else if lookup.is_old_form {
        format!("  old form of {}", lookup.canonical)
    } else {
        String::new()
    }
}

fn grid_line(fortune: &GridFortune) -> String {
    format!(
        "  {} {:>3}  {} {:>3}  {}",
        fortune.kind.kanji(),
        fortune.value,
        pad(fortune.tier.kanji(), 4),
        fortune.score,
        fortune.description
    )
}

pub fn render_analysis(analysis: &NameAnalysis) -> String {
    let mut lines = vec![
        format!("{} ({})", analysis.name, analysis.gender),
        String::new(),
        "Strokes".to_string(),
    ];

    for c in &analysis.characters {
        let lookup = &c.lookup;
        lines.push(format!(
            "  {}{:>3}{}",
            pad(&lookup.character.to_string(), 2),
            lookup.strokes,
            stroke_note(lookup)
        ));
    }

    lines.push(String::new());
    lines.push("Grids".to_string());
    for fortune in analysis.fortunes.iter() {
        lines.push(grid_line(fortune));
        if let Some(caution) = &fortune.caution {
            lines.push(format!("        ! {caution}"));
        }
    }

    lines.push(String::new());
    lines.push(format!("Score {}", analysis.total_score));

    if !analysis.unresolved.is_empty() {
        let chars: Vec<String> = analysis.unresolved.iter().map(|c| c.to_string()).collect();
        lines.push(format!(
            "Unresolved: {} (default stroke count used)",
            chars.join(" ")
        ));
    }

    lines.join("\n")
}

pub fn render_elements(profile: &ElementProfile) -> String {
    let scores: Vec<String> = profile
        .scores
        .iter()
        .map(|s| format!("{} {}", s.element.kanji(), s.score))
        .collect();
    let sansai = &profile.sansai;

    let mut lines = vec![
        format!(
            "Dominant {}  Weak {}  Polarity {}",
            profile.dominant.kanji(),
            profile.weak.kanji(),
            profile.polarity.kanji()
        ),
        format!("Scores   {}", scores.join("  ")),
        format!(
            "三才     {} → {} → {}  ({} / {}){}",
            sansai.heaven.kanji(),
            sansai.person.kanji(),
            sansai.earth.kanji(),
            sansai.heaven_to_person.kanji(),
            sansai.person_to_earth.kanji(),
            if sansai.is_harmonious() {
                ""
            } else {
                "  clash"
            }
        ),
    ];
    if let Some(season) = profile.seasonal {
        lines.push(format!("Season   {}", season.kanji()));
    }
    lines.join("\n")
}

pub fn render_six_star(star: &SixStar) -> String {
    format!(
        "{}  運命数 {}  星数 {}  {}",
        star.birthdate,
        star.destiny_number,
        star.star_number,
        star.label()
    )
}

pub fn render_compatibility(result: &CompatibilityResult) -> String {
    let c = &result.categories;
    let mut lines = vec![
        format!(
            "{} × {} ({})",
            result.first, result.second, result.relationship
        ),
        format!("  element affinity {:>4}", c.element_affinity),
        format!("  grid harmony     {:>4}", c.grid_harmony),
        format!("  tier interaction {:>4}", c.tier_interaction),
    ];
    if let Some(fit) = c.directional_fit {
        lines.push(format!("  directional fit  {fit:>4}"));
    }
    lines.push(format!(
        "  overall          {:>4}  {}",
        result.overall,
        result.label.kanji()
    ));
    lines.join("\n")
}

pub fn render_strokes(lookups: &[StrokeLookup]) -> String {
    lookups
        .iter()
        .map(|lookup| {
            let source = lookup
                .source
                .map(|s| format!("  [{s}]"))
                .unwrap_or_default();
            format!(
                "{}{:>3}{}{}",
                pad(&lookup.character.to_string(), 2),
                lookup.strokes,
                stroke_note(lookup),
                source
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_feedback_summary(character: char, summary: Option<&FeedbackSummary>) -> String {
    let Some(summary) = summary else {
        return format!("{character}: no feedback recorded");
    };

    let mut lines = vec![format!("{} ({} submissions)", character, summary.submissions)];
    if let Some(strokes) = summary.suggested_strokes {
        lines.push(format!("  strokes  {strokes}"));
    }
    if let Some(reading) = &summary.suggested_reading {
        lines.push(format!("  reading  {reading}"));
    }
    lines.push(format!(
        "  old form {} votes ({:.0}%)",
        summary.old_form_votes,
        summary.old_form_ratio * 100.0
    ));
    lines.join("\n")
}

pub fn render_unsupported(found: &[UnsupportedCharacter], threshold: usize) -> String {
    if found.is_empty() {
        return format!("No unsupported characters with {threshold}+ reports");
    }
    found
        .iter()
        .map(|u| format!("{} {:>4}", pad(&u.character.to_string(), 2), u.submissions))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::FortuneEngine;
    use crate::domain::value_objects::{Birthdate, Gender, RelationshipType};

    #[test]
    fn output_format_from_flag() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
    }

    #[test]
    fn pad_counts_wide_characters() {
        assert_eq!(pad("吉", 4), "吉  ");
        assert_eq!(pad("大吉", 4), "大吉");
        assert_eq!(pad("ab", 4), "ab  ");
    }

    #[test]
    fn analysis_text_aligns_columns() {
        let engine = FortuneEngine::new().unwrap();
        let analysis = engine
            .compute_name_fortune("佐々木", "健人", Gender::Male)
            .unwrap();
        let text = render_analysis(&analysis);
        assert!(text.contains("  々  7  inherited"));
        assert!(text.contains("  天格  18  吉    80  "));
        assert!(text.contains("  総格  31  大吉 100  "));
        assert!(text.ends_with("Score 97"));
    }

    #[test]
    fn analysis_text_lists_unresolved() {
        let engine = FortuneEngine::new().unwrap();
        let analysis = engine
            .compute_name_fortune("山", "燚", Gender::Unspecified)
            .unwrap();
        assert!(render_analysis(&analysis).contains("Unresolved: 燚"));
    }

    #[test]
    fn six_star_and_compat_text() {
        let engine = FortuneEngine::new().unwrap();
        let star = engine
            .compute_six_star(Birthdate::from_ymd(2000, 11, 14).unwrap())
            .unwrap();
        assert_eq!(render_six_star(&star), "2000-11-14  運命数 60  星数 13  金星人(+)");

        let a = engine.compute_name_fortune("佐々木", "健人", Gender::Male).unwrap();
        let b = engine.compute_name_fortune("林", "健太", Gender::Male).unwrap();
        let romance = render_compatibility(&engine.compute_compatibility(&a, &b, RelationshipType::Romance));
        assert!(!romance.contains("directional fit"));
        let business = render_compatibility(&engine.compute_compatibility(&a, &b, RelationshipType::Business));
        assert!(business.contains("directional fit    60"));
    }

    #[test]
    fn json_is_pretty() {
        let json = render_json(&serde_json::json!({"a": 1})).unwrap();
        assert_eq!(json, "{\n  \"a\": 1\n}");
    }
}
