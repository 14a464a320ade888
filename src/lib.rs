pub mod cli;
pub mod diagnostics;
pub mod docs;
pub mod kickoff;
pub mod knowledge;
pub mod logger;
pub mod project;
pub mod scaffold;
pub mod templates;
pub mod tools;
pub mod validate;
pub mod wizard;

use anyhow::Result;
use cli::{Cli, Commands};

pub fn run(cli: Cli) -> Result<()> {
    logger::init(cli.debug);
    match cli.command {
        Commands::Init(args) => scaffold::run(&args),
    }
}
