//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Dispatching subcommands to the fortune engine
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - clap definitions
//! - `commands` - one handler per subcommand
//! - `output` - text renderers and JSON helper

pub mod cli;
pub mod commands;
pub mod output;

pub use cli::{Cli, Commands, FeedbackCommands};
pub use commands::run;
pub use output::OutputFormat;
