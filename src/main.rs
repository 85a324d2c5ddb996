use clap::Parser;
use std::path::PathBuf;

mod cli;
mod config;
mod sample_data;

/// Keep track of places to visit, organized in lists.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Validate titles, zip codes and coordinates of new and updated records
    #[arg(long)]
    validate: bool,

    #[command(subcommand)]
    command: cli::Command,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(args.config.as_ref())?;
    if args.validate {
        cfg.validation = true.into();
    }
    cli::run(&cfg, args.command)
}
