use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use evcalc::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use evcalc::adapter::inbound::cli::output::{self, OutputConfig};
use evcalc::adapter::inbound::cli::{bot, config, ev};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet), &cli.color);

    // The bot sets up logging from its config file.
    if !matches!(cli.command, Commands::Bot(_)) {
        init_cli_logging(cli.verbose);
    }

    let result = match &cli.command {
        Commands::Ev(args) => ev::execute(args),
        Commands::Bot(args) => bot::execute(args).await,
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_cli_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
