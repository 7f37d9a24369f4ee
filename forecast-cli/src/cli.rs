use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use forecast_core::{Config, Forecast, ForecastClient, Location};
use inquire::{CustomType, Password};
use tracing::info;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Current, hourly and daily weather forecast")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the API key and default coordinates.
    Configure,

    /// Show current conditions.
    Current(SourceArgs),

    /// Show the hour-by-hour forecast.
    Hourly(SourceArgs),

    /// Show the day-by-day forecast.
    Daily(SourceArgs),
}

/// Where the forecast payload comes from and how to print it.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Parse a saved JSON payload instead of fetching one.
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub file: Option<PathBuf>,

    /// Latitude override; defaults to the configured location.
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude override; defaults to the configured location.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Print the parsed forecast as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Current(args) => show(&args, render::current).await,
            Command::Hourly(args) => show(&args, render::hourly).await,
            Command::Daily(args) => show(&args, render::daily).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("API key:")
        .without_confirmation()
        .with_help_message("Key for the forecast endpoint")
        .prompt()?;
    config.set_api_key(api_key.trim().to_string());

    let latitude = CustomType::<f64>::new("Latitude:")
        .with_default(config.location.latitude)
        .prompt()?;
    let longitude = CustomType::<f64>::new("Longitude:")
        .with_default(config.location.longitude)
        .prompt()?;
    config.set_location(latitude, longitude)?;

    config.save()?;
    println!("Configuration saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(
    args: &SourceArgs,
    view: fn(&Forecast) -> forecast_core::error::Result<String>,
) -> Result<()> {
    let forecast = load_forecast(args).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
    } else {
        print!("{}", view(&forecast)?);
    }
    Ok(())
}

async fn load_forecast(args: &SourceArgs) -> Result<Forecast> {
    if let Some(path) = &args.file {
        info!(path = %path.display(), "parsing saved payload");
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload file: {}", path.display()))?;
        return forecast_core::parse(&text)
            .with_context(|| format!("Failed to parse payload file: {}", path.display()));
    }

    let config = Config::load()?;
    let location = match (args.lat, args.lon) {
        (Some(latitude), Some(longitude)) => Location { latitude, longitude },
        _ => config.location,
    };

    info!(latitude = location.latitude, longitude = location.longitude, "fetching forecast");
    ForecastClient::from_config(&config)?.fetch(&location).await
}
