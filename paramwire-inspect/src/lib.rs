//! Library interface for `paramwire-inspect`.
//!
//! Loads a properties document and either reports its sections with their
//! classified parameters, or checks that named sections can be read the way
//! the builders read them.

pub mod cli;
pub mod error;
pub mod output;
pub mod report;

use paramwire::ConfigDocument;

use crate::cli::{Args, Command, OutputFormat};
use crate::error::InspectError;

/// Runs `command` and returns the rendered output.
///
/// # Errors
///
/// Returns [`InspectError::Wire`] when the document cannot be loaded or a
/// target fails its check, and [`InspectError::Json`] or
/// [`InspectError::Render`] when the report cannot be rendered.
pub fn render(command: &Command) -> Result<String, InspectError> {
    match command {
        Command::Inspect {
            document,
            section,
            format,
            ..
        } => {
            let doc = ConfigDocument::load(document)?;
            let outline = report::inspect(&doc, section)?;
            Ok(match format {
                OutputFormat::Text => report::render_text(&outline)?,
                OutputFormat::Json => serde_json::to_string_pretty(&outline)? + "\n",
            })
        }
        Command::Check {
            document,
            single,
            composite,
        } => {
            let doc = ConfigDocument::load(document)?;
            let composites: Vec<(String, String)> = composite
                .iter()
                .map(|target| (target.tag.clone(), target.child.clone()))
                .collect();
            let checked = report::check(&doc, single, &composites)?;
            Ok(report::render_check(&checked)?)
        }
    }
}

/// Runs the parsed command line, writing its output.
///
/// # Errors
///
/// Propagates [`render`] failures and output write failures.
pub fn run(args: &Args) -> Result<(), InspectError> {
    let content = render(&args.command)?;
    match &args.command {
        Command::Inspect { out: Some(path), .. } => output::write_file(path, &content),
        _ => output::write_stdout(&content),
    }
}
