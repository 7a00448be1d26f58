//! CLI entrypoint for `paramwire-inspect`.

use clap::Parser;
use paramwire_inspect::cli::Args;
use paramwire_inspect::error::InspectError;

fn main() -> Result<(), InspectError> {
    paramwire_inspect::run(&Args::parse())
}
