//! # Almanac CLI
//!
//! Command-line interface for year-progress wallpapers.
//!
//! ## Usage
//!
//! ```bash
//! # Serve the HTTP API
//! almanac serve --listen 0.0.0.0:3000
//!
//! # Render today's wallpaper for an iPhone 16 Pro
//! almanac render --preset "iPhone 16 Pro" --timezone Europe/Berlin --png today.png
//!
//! # Render a specific day as a progress bar
//! almanac render --mode horizontal --day 182 --total-days 365 --png bar.png
//!
//! # List device presets
//! almanac presets
//! ```

use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use almanac::{
    AlmanacError, calendar,
    layout::{CanvasSpec, ProgressState, RenderMode},
    presets,
    server::{self, ServerConfig},
    wallpaper::{self, WallpaperRequest},
};

/// Almanac - year progress lock screen wallpapers
#[derive(Parser, Debug)]
#[command(name = "almanac")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:3000")]
        listen: String,

        /// Cache-Control max-age for wallpaper responses, in seconds
        #[arg(long, default_value = "3600")]
        cache_max_age: u64,
    },

    /// Render a wallpaper to a PNG file
    Render {
        /// Output file
        #[arg(long, value_name = "FILE")]
        png: PathBuf,

        /// Device preset name or slug (see `almanac presets`)
        #[arg(long)]
        preset: Option<String>,

        /// Width in pixels (overrides the preset)
        #[arg(long)]
        width: Option<u32>,

        /// Height in pixels (overrides the preset)
        #[arg(long)]
        height: Option<u32>,

        /// Visualization: dot or horizontal
        #[arg(long, default_value = "dot")]
        mode: String,

        /// IANA timezone used to determine today
        #[arg(long, default_value = "UTC")]
        timezone: String,

        /// Day of year to draw instead of today
        #[arg(long, requires = "total_days")]
        day: Option<i64>,

        /// Days in the year (365 or 366), used with --day
        #[arg(long, requires = "day")]
        total_days: Option<i64>,
    },

    /// List device presets
    Presets,

    /// Show today's day-of-year summary
    Info {
        /// IANA timezone
        #[arg(long, default_value = "UTC")]
        timezone: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AlmanacError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            cache_max_age,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                cache_max_age_secs: cache_max_age,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }

        Commands::Render {
            png,
            preset,
            width,
            height,
            mode,
            timezone,
            day,
            total_days,
        } => {
            let base = match preset.as_deref() {
                Some(name) => *presets::by_name(name).ok_or_else(|| {
                    AlmanacError::InvalidDimensions(format!(
                        "Unknown preset '{}'. Run `almanac presets` to see available options.",
                        name
                    ))
                })?,
                None => presets::DEFAULT,
            };
            let canvas = CanvasSpec::validated(
                width.unwrap_or(base.width),
                height.unwrap_or(base.height),
            )?;
            let mode: RenderMode = mode.parse()?;

            let progress = match (day, total_days) {
                (Some(day), Some(total)) => ProgressState::new(day, total),
                _ => {
                    let tz = calendar::parse_timezone(&timezone)?;
                    calendar::progress_at(Utc::now(), tz)
                }
            };

            println!(
                "Generating {} wallpaper ({}x{}), day {}/{}...",
                mode, canvas.width, canvas.height, progress.current_day, progress.total_days
            );

            let png_bytes = wallpaper::generate(&WallpaperRequest::new(canvas, progress, mode))?;
            std::fs::write(&png, png_bytes)?;
            println!("Saved to {}", png.display());
        }

        Commands::Presets => {
            println!("Available presets:");
            for preset in presets::PRESETS {
                println!(
                    "  {:<20} {}x{}  ({})",
                    preset.name,
                    preset.width,
                    preset.height,
                    preset.slug()
                );
            }
        }

        Commands::Info { timezone } => {
            let tz = calendar::parse_timezone(&timezone)?;
            let info = calendar::year_info(Utc::now(), tz);
            println!("Date:     {} ({})", info.current_date, info.timezone);
            println!("Day:      {} of {}", info.current_day_of_year, info.total_days);
            println!("Progress: {}", info.progress);
        }
    }

    Ok(())
}
