mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fleet-rsc")]
#[command(about = "Create, poll and terminate a single workflow resource", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Provision the resource and print its instance spec
    Create {
        /// Resource definition file (JSON)
        #[arg(short, long, env = "FLEET_RSC_CONF")]
        conf: PathBuf,
    },
    /// Print the current status of a provisioned resource
    Status {
        /// Resource definition file (JSON)
        #[arg(short, long, env = "FLEET_RSC_CONF")]
        conf: PathBuf,
        /// Instance spec returned by create (JSON)
        #[arg(short, long)]
        instance: String,
    },
    /// Request termination of a provisioned resource
    Terminate {
        /// Resource definition file (JSON)
        #[arg(short, long, env = "FLEET_RSC_CONF")]
        conf: PathBuf,
        /// Instance spec returned by create (JSON)
        #[arg(short, long)]
        instance: String,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries JSON for the caller, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match cli.command {
        Commands::Create { conf } => commands::create(&conf).await,
        Commands::Status { conf, instance } => commands::status(&conf, &instance).await,
        Commands::Terminate { conf, instance } => commands::terminate(&conf, &instance).await,
        Commands::Version => {
            println!("fleet-rsc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
