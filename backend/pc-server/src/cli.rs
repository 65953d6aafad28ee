use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "pc-server")]
#[command(about = "Preference and consent center API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The subcommand to run, `serve` when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve,

    /// Inspect key files and print a JSON report; exits non-zero on failure
    Audit {
        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}
