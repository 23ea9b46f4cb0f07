use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "td")]
#[command(about = "Taskdeck project and task management CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL including the API prefix (overrides config.toml)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
