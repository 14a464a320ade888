use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::project::{Framework, Language, Provider};

#[derive(Parser)]
#[command(name = "agentsmith")]
#[command(about = "Scaffold starter workspaces for AI agent projects", long_about = None)]
pub struct Cli {
    /// Print debug logs to stderr.
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Init(InitArgs),
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scaffold into (created if missing).
    #[arg(default_value = ".")]
    pub path: PathBuf,
    /// Implementation language (asked interactively when omitted).
    #[arg(long, value_enum)]
    pub language: Option<Language>,
    /// Agent framework (asked interactively when omitted).
    #[arg(long, value_enum)]
    pub framework: Option<Framework>,
    /// LLM provider (asked interactively when omitted).
    #[arg(long, value_enum)]
    pub provider: Option<Provider>,
    /// Provider API key (asked interactively when omitted).
    #[arg(long)]
    pub api_key: Option<String>,
    /// What the agent should accomplish (asked interactively when omitted).
    #[arg(long)]
    pub goal: Option<String>,
    /// Overwrite artifacts that already exist.
    #[arg(long)]
    pub force: bool,
    /// Skip running git init.
    #[arg(long)]
    pub no_git: bool,
}
