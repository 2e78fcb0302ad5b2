use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cyclograph::{commands, init_logging, server, BUILD_DATE, VERSION};
use tracing::info;

#[derive(Parser)]
#[command(name = "cyclograph")]
#[command(about = "Roulette curve generator with SVG, PNG and G-code output", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve,

    /// Generate a pattern and write it as JSON
    Generate {
        /// Design file (JSON)
        design: PathBuf,

        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a pattern and export it (.json, .svg, .png, .gcode, .nc)
    Export {
        /// Design file (JSON)
        design: PathBuf,

        /// Output file
        output: PathBuf,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve => {
            info!("cyclograph {} (built {})", VERSION, BUILD_DATE);
            server::start_server(config).await?;
        }
        Commands::Generate { design, output } => {
            commands::generate(&design, output.as_ref())?;
        }
        Commands::Export { design, output } => {
            let format = commands::export(&config, &design, &output)?;
            println!("Exported {} to {}", format, output.display());
        }
        Commands::Config => {
            print!("{}", commands::show_config(&config)?);
        }
    }

    Ok(())
}
