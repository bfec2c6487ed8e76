//! Command handlers
//!
//! Each handler builds its result through the engine, then prints either the
//! text rendering or pretty JSON.

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::application::FortuneEngine;
use crate::config::Config;
use crate::domain::entities::{KanjiCorrection, StrokeLookup};
use crate::domain::value_objects::{Birthdate, Gender, RelationshipType};
use crate::presentation::cli::{Cli, Commands, FeedbackCommands};
use crate::presentation::output::{self, OutputFormat};

pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let engine = FortuneEngine::from_config(config).context("Failed to load fortune tables")?;
    let format = OutputFormat::from_json_flag(cli.json);

    let rendered = match &cli.command {
        Commands::Analyze {
            surname,
            given,
            gender,
        } => cmd_analyze(&engine, surname, given, *gender, format)?,
        Commands::Elements {
            surname,
            given,
            birthdate,
        } => cmd_elements(&engine, surname, given, birthdate.as_deref(), format)?,
        Commands::SixStar { birthdate } => cmd_six_star(&engine, birthdate, format)?,
        Commands::Compat {
            first,
            second,
            relationship,
        } => cmd_compat(&engine, first, second, *relationship, format)?,
        Commands::Strokes { text } => cmd_strokes(&engine, text, format)?,
        Commands::Feedback { command } => cmd_feedback(&engine, command, config, format)?,
    };

    println!("{rendered}");
    Ok(())
}

fn emit<T: Serialize>(value: &T, format: OutputFormat, text: impl FnOnce(&T) -> String) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(output::render_json(value)?),
        OutputFormat::Text => Ok(text(value)),
    }
}

pub fn cmd_analyze(
    engine: &FortuneEngine,
    surname: &str,
    given: &str,
    gender: Gender,
    format: OutputFormat,
) -> Result<String> {
    let analysis = engine.compute_name_fortune(surname, given, gender)?;
    if !analysis.unresolved.is_empty() {
        tracing::warn!(
            count = analysis.unresolved.len(),
            default = engine.default_strokes(),
            "some characters are not in the stroke table"
        );
    }
    emit(&analysis, format, output::render_analysis)
}

pub fn cmd_elements(
    engine: &FortuneEngine,
    surname: &str,
    given: &str,
    birthdate: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let birthdate = birthdate.map(Birthdate::parse).transpose()?;
    let profile = engine.compute_five_elements(surname, given, birthdate)?;
    emit(&profile, format, output::render_elements)
}

pub fn cmd_six_star(engine: &FortuneEngine, birthdate: &str, format: OutputFormat) -> Result<String> {
    let star = engine.compute_six_star(Birthdate::parse(birthdate)?)?;
    emit(&star, format, output::render_six_star)
}

pub fn cmd_compat(
    engine: &FortuneEngine,
    first: &str,
    second: &str,
    relationship: RelationshipType,
    format: OutputFormat,
) -> Result<String> {
    let (surname_a, given_a) = split_full_name(first)?;
    let (surname_b, given_b) = split_full_name(second)?;

    let a = engine.compute_name_fortune(surname_a, given_a, Gender::Unspecified)?;
    let b = engine.compute_name_fortune(surname_b, given_b, Gender::Unspecified)?;
    let result = engine.compute_compatibility(&a, &b, relationship);
    emit(&result, format, output::render_compatibility)
}

pub fn cmd_strokes(engine: &FortuneEngine, text: &str, format: OutputFormat) -> Result<String> {
    let lookups: Vec<StrokeLookup> = engine.lookup_strokes(text)?;
    if lookups.is_empty() {
        bail!("No characters to look up");
    }
    emit(&lookups, format, |l| output::render_strokes(l))
}

pub fn cmd_feedback(
    engine: &FortuneEngine,
    command: &FeedbackCommands,
    config: &Config,
    format: OutputFormat,
) -> Result<String> {
    match command {
        FeedbackCommands::Record {
            character,
            strokes,
            reading,
            old_form,
        } => {
            let correction = KanjiCorrection {
                strokes: *strokes,
                reading: reading.clone(),
                old_form: *old_form,
            };
            engine.record_kanji_feedback(*character, correction)?;
            let summary = engine.feedback_summary(*character)?;
            emit(&summary, format, |s| {
                output::render_feedback_summary(*character, s.as_ref())
            })
        }
        FeedbackCommands::Unsupported { threshold } => {
            let threshold = threshold.unwrap_or(config.feedback.unsupported_threshold);
            let found = engine.frequent_unsupported(threshold)?;
            emit(&found, format, |f| output::render_unsupported(f, threshold))
        }
        FeedbackCommands::Show { character } => {
            let summary = engine.feedback_summary(*character)?;
            emit(&summary, format, |s| {
                output::render_feedback_summary(*character, s.as_ref())
            })
        }
    }
}

/// Split `"姓 名"` on whitespace (ASCII or full-width)
pub fn split_full_name(full: &str) -> Result<(&str, &str)> {
    let parts: Vec<&str> = full.split_whitespace().collect();
    match parts.as_slice() {
        [surname, given] => Ok((*surname, *given)),
        _ => bail!("Expected \"surname given\" separated by a space, got '{full}'"),
    }
}
