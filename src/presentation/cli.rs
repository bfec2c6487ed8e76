//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --config, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::{Gender, RelationshipType};

/// Seimei - Japanese name-fortune (姓名判断) calculator
#[derive(Parser, Debug)]
#[command(name = "seimei")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (replaces the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Five grids, their fortunes and the headline score
    Analyze {
        /// Family name (姓)
        surname: String,
        /// Given name (名)
        given: String,
        #[arg(short, long, value_enum, default_value_t = Gender::Unspecified)]
        gender: Gender,
    },

    /// Five-elements (陰陽五行) profile
    Elements {
        surname: String,
        given: String,
        /// Birthdate (YYYY-MM-DD) adding the seasonal element
        #[arg(short, long)]
        birthdate: Option<String>,
    },

    /// Six-star (六星占術) reading for a birthdate
    SixStar {
        /// Birthdate (YYYY-MM-DD)
        birthdate: String,
    },

    /// Compatibility between two names
    Compat {
        /// First person as "姓 名" (senior party for business)
        first: String,
        /// Second person as "姓 名"
        second: String,
        #[arg(short, long, value_enum, default_value_t = RelationshipType::Romance)]
        relationship: RelationshipType,
    },

    /// Stroke lookup for each character
    Strokes {
        /// Characters to look up
        text: String,
    },

    /// Community kanji corrections
    Feedback {
        #[command(subcommand)]
        command: FeedbackCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum FeedbackCommands {
    /// Record a correction for one character
    Record {
        character: char,
        /// Suggested stroke count
        #[arg(short, long)]
        strokes: Option<u32>,
        /// Suggested reading
        #[arg(short, long)]
        reading: Option<String>,
        /// Vote that the character is an old form (旧字体)
        #[arg(long)]
        old_form: Option<bool>,
    },

    /// Unknown characters reported at least `threshold` times
    Unsupported {
        /// Defaults to `feedback.unsupported_threshold`
        #[arg(short, long)]
        threshold: Option<usize>,
    },

    /// Aggregated corrections for one character
    Show { character: char },
}
