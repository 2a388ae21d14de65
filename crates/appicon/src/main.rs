//! Command-line front end for appicon-core.
//!
//! Turns one PNG or JPEG into the full Android, iOS and macOS icon set and
//! packages it as a ZIP.

mod commands;

use appicon_core::{DEFAULT_ARCHIVE_NAME, Platform, ResizeFilter};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use commands::generate::Overrides;

#[derive(Parser)]
#[command(name = "appicon")]
#[command(about = "Generate Android, iOS and macOS app icons from one image")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every icon and package them into a ZIP archive
    Generate {
        /// Source PNG or JPEG image
        input: PathBuf,

        /// Output archive path
        #[arg(short, long, default_value = DEFAULT_ARCHIVE_NAME)]
        output: PathBuf,

        /// JSON file with pipeline options
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Resampling filter: nearest, triangle, catmullrom, gaussian, lanczos3
        #[arg(long, value_parser = parse_filter)]
        filter: Option<ResizeFilter>,

        /// Resize icons one at a time instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// Store icons in the archive without compression
        #[arg(long)]
        store: bool,
    },
    /// Write a representative subset of the icons to a directory
    Preview {
        /// Source PNG or JPEG image
        input: PathBuf,

        /// Directory for the preview icons
        #[arg(short, long, default_value = "./preview")]
        output: PathBuf,

        /// JSON file with pipeline options
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show the icon catalog
    List {
        /// Only show one platform: android, ios, macos
        #[arg(short, long, value_parser = parse_platform)]
        platform: Option<Platform>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_filter(name: &str) -> Result<ResizeFilter, String> {
    name.parse()
}

fn parse_platform(name: &str) -> Result<Platform, String> {
    name.parse()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), String> {
    match command {
        Commands::Generate {
            input,
            output,
            config,
            filter,
            sequential,
            store,
        } => {
            let overrides = Overrides {
                filter,
                sequential,
                store,
            };
            let options = commands::generate::resolve_options(config.as_deref(), &overrides)?;
            commands::generate::run(&input, &output, &options).map(|_| ())
        }
        Commands::Preview {
            input,
            output,
            config,
        } => {
            let options = commands::generate::resolve_options(config.as_deref(), &Overrides::default())?;
            commands::preview::run(&input, &output, &options).map(|_| ())
        }
        Commands::List { platform, json } => {
            print!("{}", commands::list::render(platform, json)?);
            Ok(())
        }
    }
}
