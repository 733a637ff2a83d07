use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "fin")]
#[command(about = "finboard admin CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL
    #[arg(long, global = true, default_value = "http://127.0.0.1:3000")]
    pub(crate) server: String,

    /// Bearer token for the admin session
    #[arg(long, global = true)]
    pub(crate) token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
