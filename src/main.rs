// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments and hand off to the dispatcher.
// - Returns `anyhow::Result` so any failure exits non-zero with its
//   message; clap itself handles unknown commands and missing arguments.

use campfire_cli::cli::{run, Cli};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli)
}
