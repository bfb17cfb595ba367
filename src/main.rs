//! softborder-gen: regenerate the datapack's predicates and functions.
//!
//! Usage:
//!   softborder-gen                          → ./config.json into the current directory
//!   softborder-gen -c zones.json -o pack/   → explicit config and datapack root
//!   softborder-gen -f                       → overwrite previously generated files

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use softborder::{check_preflight, generate, DatapackLayout};
use softborder_core::Config;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "softborder-gen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generates softborder datapack files from config"
)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = "./config.json")]
    config: PathBuf,

    /// Path to the datapack folder
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Overwrite existing generated files
    #[arg(short, long, default_value_t = false)]
    force: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Preflight failures list one issue per line.
            for line in e.to_string().lines() {
                eprintln!("Error: {line}");
            }
            ExitCode::from(1)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "softborder=info,softborder_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let layout = DatapackLayout::new(&cli.output);

    check_preflight(&cli.config, &layout, cli.force)?;

    let config = Config::load(&cli.config)?;
    info!(
        "Loaded {}: {} gain steps, {} distance zones, {} insanity zones",
        cli.config.display(),
        config.gain_steps.len(),
        config.distance_zones.len(),
        config.insanity_zones.len()
    );

    let report = generate(&config, layout.root())?;
    info!(
        "Wrote {} predicates and {} functions ({} periodic) under {}",
        report.predicates,
        report.functions,
        report.periodic_zones,
        layout.root().display()
    );

    Ok(())
}
