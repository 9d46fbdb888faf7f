use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;

use cityweather_core::{
    Config, FetchPhase, FixedLocator, ForecastProvider, Locale, OpenMeteoProvider, Panel,
    SystemLocator, ViewState, registry, weather_code_description,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "City & local weather panel")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather and local time for one city.
    Show {
        /// City name; prompts with the city list when omitted.
        city: Option<String>,
    },

    /// Show weather for an explicit position, standing in for geolocation.
    Local {
        latitude: f64,
        longitude: f64,
    },

    /// List the cities the panel knows about.
    Cities,

    /// Inspect or update stored configuration.
    Configure {
        /// City selected automatically on startup.
        #[arg(long)]
        default_city: Option<String>,

        /// Hours added to the clock before timezone formatting.
        #[arg(long)]
        correction: Option<i64>,

        /// Display locale, "pl" or "en".
        #[arg(long)]
        locale: Option<Locale>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command {
            // No subcommand: the full panel, default city plus local weather.
            None => run_panel(&config).await,
            Some(Command::Show { city }) => show_city(&config, city).await,
            Some(Command::Local { latitude, longitude }) => {
                show_local(&config, latitude, longitude).await
            }
            Some(Command::Cities) => {
                for name in registry::cities() {
                    println!("{name}");
                }
                Ok(())
            }
            Some(Command::Configure { default_city, correction, locale }) => {
                configure(config, default_city, correction, locale)
            }
        }
    }
}

fn provider_from_config(config: &Config) -> Arc<dyn ForecastProvider> {
    let provider = match &config.forecast_url {
        Some(url) => OpenMeteoProvider::with_base_url(url.clone()),
        None => OpenMeteoProvider::new(),
    };
    Arc::new(provider)
}

async fn run_panel(config: &Config) -> anyhow::Result<()> {
    let mut panel = Panel::new(
        provider_from_config(config),
        Arc::new(SystemLocator),
        config.formatter(),
        config.default_city.clone(),
    );

    panel.mount().await;

    let state = panel.state();
    print_selected(state);
    println!();
    print_local(state);
    if let Some(error) = &state.error {
        println!();
        println!("error: {error}");
    }

    Ok(())
}

async fn show_city(config: &Config, city: Option<String>) -> anyhow::Result<()> {
    let city = match city {
        Some(city) => city,
        None => pick_city()?,
    };

    let mut panel = Panel::new(
        provider_from_config(config),
        Arc::new(SystemLocator),
        config.formatter(),
        config.default_city.clone(),
    );

    panel.select_city(&city).await;

    let state = panel.state();
    if state.phase == FetchPhase::Failed {
        anyhow::bail!(
            state
                .error
                .clone()
                .unwrap_or_else(|| "weather fetch failed".to_string())
        );
    }

    print_selected(state);
    Ok(())
}

async fn show_local(config: &Config, latitude: f64, longitude: f64) -> anyhow::Result<()> {
    let mut panel = Panel::new(
        provider_from_config(config),
        Arc::new(FixedLocator::new(latitude, longitude)),
        config.formatter(),
        config.default_city.clone(),
    );

    panel.refresh_local().await;

    let state = panel.state();
    if state.local_conditions.is_none() {
        anyhow::bail!(
            state
                .error
                .clone()
                .unwrap_or_else(|| "local weather fetch failed".to_string())
        );
    }

    print_local(state);
    Ok(())
}

fn pick_city() -> anyhow::Result<String> {
    let options: Vec<&str> = registry::cities().collect();
    let choice = inquire::Select::new("Which city?", options)
        .prompt()
        .context("city selection cancelled")?;
    Ok(choice.to_string())
}

fn configure(
    mut config: Config,
    default_city: Option<String>,
    correction: Option<i64>,
    locale: Option<Locale>,
) -> anyhow::Result<()> {
    if default_city.is_none() && correction.is_none() && locale.is_none() {
        println!("config file:      {}", Config::config_file_path()?.display());
        println!("default city:     {}", config.default_city);
        println!("clock correction: {:+}h", config.utc_offset_correction_hours);
        println!("locale:           {}", config.locale.as_str());
        return Ok(());
    }

    if let Some(city) = default_city {
        // Reject typos before they end up on disk.
        registry::lookup(&city)?;
        config.default_city = city;
    }
    if let Some(hours) = correction {
        config.utc_offset_correction_hours = hours;
    }
    if let Some(locale) = locale {
        config.locale = locale;
    }

    config.save()?;
    println!("Saved {}", Config::config_file_path()?.display());
    Ok(())
}

fn print_selected(state: &ViewState) {
    println!("Weather in {}", state.selected_city);
    match &state.selected_conditions {
        Some(conditions) => {
            println!("  temperature: {:.1} °C", conditions.temperature_c);
            println!("  wind:        {:.1} km/h", conditions.wind_speed_kmh);
            println!("  sky:         {}", weather_code_description(conditions.weather_code));
            match state.times_by_city.get(&state.selected_city) {
                Some(time) => println!("  local time:  {time}"),
                None => println!("  local time:  unavailable"),
            }
        }
        None => println!("  no data"),
    }
}

fn print_local(state: &ViewState) {
    println!("Weather at your location");
    match &state.local_conditions {
        Some(conditions) => {
            println!("  temperature: {:.1} °C", conditions.temperature_c);
            println!("  wind:        {:.1} km/h", conditions.wind_speed_kmh);
            println!("  sky:         {}", weather_code_description(conditions.weather_code));
            match &state.local_time {
                Some(time) => println!("  local time:  {time}"),
                None => println!("  local time:  unavailable"),
            }
        }
        None => println!("  no data"),
    }
}
