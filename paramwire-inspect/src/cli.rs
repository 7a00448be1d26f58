//! Command-line interface definitions for `paramwire-inspect`.

use std::str::FromStr;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};

use crate::error::InspectError;

/// Output formats for the `inspect` subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented outline, one line per section and parameter.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// A composite to check, written `TAG:CHILD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeTarget {
    /// Tag of the composite section.
    pub tag: String,
    /// Tag of its child sections.
    pub child: String,
}

impl FromStr for CompositeTarget {
    type Err = InspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((tag, child)) if !tag.is_empty() && !child.is_empty() => Ok(Self {
                tag: tag.to_owned(),
                child: child.to_owned(),
            }),
            _ => Err(InspectError::InvalidCompositeTarget(s.to_owned())),
        }
    }
}

/// Parsed CLI arguments for `paramwire-inspect`.
#[derive(Debug, Parser)]
#[command(name = "paramwire-inspect")]
#[command(about = "Inspect and check paramwire property documents")]
#[command(version)]
pub struct Args {
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print each section's class and classified parameters.
    Inspect {
        /// Document to read.
        document: Utf8PathBuf,
        /// Only report sections with this tag (repeatable).
        #[arg(long, value_name = "tag")]
        section: Vec<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write the report to this file instead of standard output.
        #[arg(long, value_name = "path")]
        out: Option<Utf8PathBuf>,
    },
    /// Verify that sections can be read for building.
    ///
    /// Without targets every top-level section is checked as a single item.
    Check {
        /// Document to read.
        document: Utf8PathBuf,
        /// Tag that must occur exactly once and be buildable (repeatable).
        #[arg(long, value_name = "tag")]
        single: Vec<String>,
        /// Composite to check, as `TAG:CHILD` (repeatable).
        #[arg(long, value_name = "tag:child")]
        composite: Vec<CompositeTarget>,
    },
}
