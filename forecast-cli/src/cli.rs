use anyhow::Context;
use clap::{Parser, Subcommand};
use forecast_core::{Completion, Config, OpenWeatherClient, Session, search};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "7-day city weather forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and default city.
    Configure,

    /// Show the forecast for a city.
    Show {
        /// City name; the configured default city when absent.
        city: Option<String>,

        /// Print the dashboard as JSON instead of cards.
        #[arg(long)]
        json: bool,
    },

    /// Search repeatedly from a prompt, starting with the default city.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json } => show(city, json).await,
            Command::Interactive => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let default_city = Text::new("Default city:")
        .with_default(&config.default_city)
        .prompt()
        .context("Failed to read default city")?;

    config.api_key = Some(api_key.trim().to_string()).filter(|k| !k.is_empty());
    if !default_city.trim().is_empty() {
        config.default_city = default_city.trim().to_string();
    }
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: Option<String>, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let source = OpenWeatherClient::from_config(&config);
    let city = city.unwrap_or_else(|| config.default_city.clone());

    if city.trim().is_empty() {
        return Ok(());
    }

    let dashboard = search(&source, city.trim()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!("{}", render::dashboard(&dashboard, &config.icon_base_url));
    }

    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let config = Config::load()?;
    let source = OpenWeatherClient::from_config(&config);
    let mut session = Session::new();
    let mut query = config.default_city.clone();

    loop {
        if !query.trim().is_empty() {
            println!("Searching {}...", query.trim());
        }
        if session.run(&source, &query).await == Some(Completion::Applied) {
            print!("{}", render::session(&session, &config.icon_base_url));
        }

        query = match Text::new("City:")
            .with_help_message("Enter to search, Esc to quit")
            .prompt()
        {
            Ok(next) => next,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city"),
        };
    }

    Ok(())
}
