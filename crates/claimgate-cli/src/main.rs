mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use output::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            print_error(&format!("{e:#}"));
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Evaluate(args) => commands::evaluate::run(args),
        Commands::Show(args) => commands::show::run(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("CLAIMGATE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
