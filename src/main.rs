use agentsmith::cli::Cli;
use agentsmith::run;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli)
}
