//! dbp CLI - Apply autopatchers to an extracted ROM update package
//!
//! Commands:
//! - `dbp list` - List available autopatchers and the files they touch
//! - `dbp patch` - Apply autopatchers to an extracted directory

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod list;
mod patch;

#[derive(Parser)]
#[command(name = "dbp")]
#[command(author, version, about = "Autopatcher driver for ROM update packages", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available autopatchers
    List,

    /// Apply autopatchers to an extracted ROM directory
    Patch {
        /// Directory the ROM update package was extracted to
        #[arg(short, long)]
        dir: PathBuf,

        /// Partition configuration to patch for (e.g., dual, multi-slot-1)
        #[arg(short, long)]
        partconfig: String,

        /// Configuration file (.toml or .json; default: built-in)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Autopatcher to apply, in order (repeatable; default: all)
        #[arg(long = "patcher")]
        patchers: Vec<String>,

        /// Boot image path passed through to autopatchers (repeatable)
        #[arg(long = "boot-image")]
        boot_images: Vec<PathBuf>,

        /// Original archive the directory was extracted from
        #[arg(long)]
        archive: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            init_logging(cli.log_level.as_deref(), None);
            list::run()?;
        }
        Commands::Patch {
            dir,
            partconfig,
            config,
            patchers,
            boot_images,
            archive,
        } => {
            let config = patch::load_config(config.as_deref())?;
            init_logging(cli.log_level.as_deref(), Some(&config));
            let request = patch::PatchRequest {
                directory: dir,
                part_config_id: partconfig,
                patchers,
                boot_images,
                archive,
            };
            patch::run(&config, &request)?;
        }
    }

    Ok(())
}

/// A `--log-level` flag wins over the configuration file
fn init_logging(flag: Option<&str>, config: Option<&dbp_core::PatcherConfig>) {
    match (flag.and_then(dbp_logging::LogLevel::from_name), config) {
        (Some(level), _) => {
            dbp_logging::init_logging(level);
        }
        (None, Some(config)) => {
            dbp_logging::init_logging_from_config(config);
        }
        (None, None) => {
            dbp_logging::init_logging(dbp_logging::LogLevel::Info);
        }
    }
}
