use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use imgcatalog::{AppError, CatalogConfig};

#[derive(Parser)]
#[command(name = "imgcatalog")]
#[command(version)]
#[command(
    about = "Load and validate imagery catalog serving configuration",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and report a summary
    #[clap(visible_alias = "c")]
    Check {
        /// Path to the config file (default: imgcatalog.toml, or $IMGCATALOG_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the loaded configuration
    Show {
        /// Path to the config file (default: imgcatalog.toml, or $IMGCATALOG_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Text)]
        format: ShowFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ShowFormat {
    Text,
    Json,
}

fn load(config: Option<PathBuf>) -> Result<CatalogConfig, AppError> {
    match config {
        Some(path) => imgcatalog::load_from(&path),
        None => imgcatalog::load(),
    }
}

fn check(config: Option<PathBuf>) -> Result<(), AppError> {
    let catalog = load(config)?;
    println!(
        "✅ Configuration valid: {} data sources, {} resolution tiers",
        catalog.data_source_ids.len(),
        catalog.resolutions.len()
    );
    Ok(())
}

fn show(config: Option<PathBuf>, format: ShowFormat) -> Result<(), AppError> {
    let catalog = load(config)?;
    match format {
        ShowFormat::Json => {
            let json = serde_json::to_string_pretty(&catalog)
                .expect("CatalogConfig serializes to JSON");
            println!("{json}");
        }
        ShowFormat::Text => {
            println!("image_root: {}", catalog.image_root.display());
            println!("url_prefix: {}", catalog.url_prefix);
            println!("data sources:");
            for id in &catalog.data_source_ids {
                println!("  {id}");
            }
            println!("resolutions:");
            for res in &catalog.resolutions {
                println!("  {} ({})", res.directory, res.title);
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Check { config } => check(config),
        Commands::Show { config, format } => show(config, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
