use clap::Parser;
use clap::Subcommand;
use cmd::command::products;
use cmd::command::products::Products;
use cmd::command::reviews;
use cmd::command::reviews::Reviews;
use cmd::error::Result;
use cmd::logging::TracingCliArgs;
use tracing::info;

#[derive(Subcommand, Clone)]
enum Commands {
    /// Generate the synthetic product catalog
    Products(Products),
    /// Generate reviews for an existing product catalog
    Reviews(Reviews),
}

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(flatten)]
    tracing: TracingCliArgs,
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    args.tracing.init()?;

    let version = env!("CARGO_PKG_VERSION");
    info!("catalog v{version}");

    match &args.command {
        Commands::Products(cmd) => products::run(cmd)?,
        Commands::Reviews(cmd) => reviews::run(cmd)?,
    }

    Ok(())
}
