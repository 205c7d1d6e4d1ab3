use anyhow::Result;
use channel_merge::config::merge_config::Config;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Combines two channel documents into one, summing their declared totals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// YAML file with `inputs.first`, `inputs.second` and `output`.
    /// Defaults to ./config.yaml when present.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    first: Option<PathBuf>,

    #[arg(long)]
    second: Option<PathBuf>,

    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::resolve(args.config.as_deref())?;
    if let Some(first) = args.first {
        config.inputs.first = first;
    }
    if let Some(second) = args.second {
        config.inputs.second = second;
    }
    if let Some(output) = args.output {
        config.output = output;
    }

    let summary = channel_merge::run(&config)?;
    println!("{summary}");

    Ok(())
}
