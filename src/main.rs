//! toolpathkit - generate toolpaths from job files

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toolpathkit::units::format_length_with_metric;
use toolpathkit::{init_logging, Job, Settings, BUILD_DATE, VERSION};
use tracing::info;

#[derive(Parser)]
#[command(name = "toolpathkit")]
#[command(about = "Generate toolpath segments from shapes and machining settings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a drill-center toolpath and print its segments as JSON
    Drill {
        /// Job file (.json or .toml)
        job: PathBuf,
        /// Settings file overriding the job's settings
        #[arg(short, long)]
        settings: Option<PathBuf>,
        /// Target depth overriding the job's depth
        #[arg(short, long)]
        depth: Option<f64>,
    },
    /// Validate a settings file and print a summary
    Settings {
        /// Settings file (.json or .toml)
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Drill {
            job,
            settings,
            depth,
        } => {
            let mut job = Job::load_from_file(&job)?;
            if let Some(path) = settings {
                job.settings = Settings::load_from_file(&path)?;
            }
            if let Some(depth) = depth {
                job.target_depth = depth;
            }

            let path = job.drill_center()?;
            info!(
                "Generated {} segments (toolpathkit {}, built {})",
                path.len(),
                VERSION,
                BUILD_DATE
            );
            let json = serde_json::to_string_pretty(&path).context("Failed to serialize path")?;
            println!("{}", json);
        }
        Commands::Settings { file } => {
            let settings = Settings::load_from_file(&file)?;
            let units = settings.units;
            println!("Units:          {}", units);
            println!(
                "Safe height:    {}",
                format_length_with_metric(settings.safe_height, units)
            );
            println!(
                "Depth per pass: {}",
                format_length_with_metric(settings.depth_per_pass, units)
            );
            println!("Max spindle:    {:.0} RPM", settings.max_spindle_speed);
        }
    }

    Ok(())
}
