//! weatherapp CLI
//!
//! Configures provider locations interactively and prints weather.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;
mod output;
mod prompt;

use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, bail};
use application::{
    ApplicationError, ConfigurationService, LocationStorePort, PageSourcePort, WeatherProviderPort,
    WeatherService,
};
use clap::Parser;
use domain::ForecastDay;
use infrastructure::{
    AppConfig, HttpPageSource, Rp5ProviderAdapter, TomlLocationStore, init_logging,
    install_metrics,
};
use tracing::{debug, warn};

use crate::{
    cli::{Cli, Commands},
    output::{format_weather, format_weather_json},
    prompt::StreamPrompt,
};

type Provider = Arc<dyn WeatherProviderPort>;

/// Every provider this build knows, in listing order
fn build_providers(config: &AppConfig) -> anyhow::Result<Vec<Provider>> {
    let pages: Arc<dyn PageSourcePort> = Arc::new(HttpPageSource::new(&config.http)?);
    let rp5: Provider = Arc::new(Rp5ProviderAdapter::new(config.rp5.clone(), pages)?);
    Ok(vec![rp5])
}

/// Provider named `name`, or the first one when no name is given
fn find_provider<'a>(providers: &'a [Provider], name: Option<&str>) -> anyhow::Result<&'a Provider> {
    let found = match name {
        None => providers.first(),
        Some(name) => providers.iter().find(|p| p.name() == name),
    };
    match found {
        Some(provider) => Ok(provider),
        None => {
            let available: Vec<_> = providers.iter().map(|p| p.name()).collect();
            bail!(
                "Unknown provider '{}'. Available: {}",
                name.unwrap_or_default(),
                available.join(", ")
            )
        },
    }
}

fn provider_failed(name: &str, err: ApplicationError) -> anyhow::Error {
    let context = if err.is_user_input() {
        format!("Provider {name} failed (run `weatherapp configure {name}` to choose again)")
    } else {
        format!("Provider {name} failed")
    };
    anyhow::Error::new(err).context(context)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid configuration")?;
    debug!(?config, "Using configuration");

    let store: Arc<dyn LocationStorePort> =
        Arc::new(TomlLocationStore::new(config.storage.locations_path.clone()));
    let providers = build_providers(&config)?;

    match cli.command {
        Commands::Providers => {
            for provider in &providers {
                println!("{} - {}", provider.name(), provider.title());
            }
        },

        Commands::Configure { provider } => {
            let provider = find_provider(&providers, provider.as_deref())?;
            let service = ConfigurationService::new(store, Arc::new(StreamPrompt::stdio()));

            let location = service
                .configure(provider.as_ref(), cli.debug)
                .await
                .map_err(|e| provider_failed(provider.name(), e))?;

            println!("Saved location: {location}");
        },

        Commands::Weather {
            provider,
            tomorrow,
            json,
        } => {
            let provider = find_provider(&providers, provider.as_deref())?;
            let service = WeatherService::new(store);

            let (location, info) = service
                .current(provider.as_ref(), ForecastDay::from_tomorrow_flag(tomorrow))
                .await
                .map_err(|e| provider_failed(provider.name(), e))?;

            if json {
                println!("{}", format_weather_json(&info)?);
            } else {
                print!("{}", format_weather(&location, &info));
            }
        },
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let debug = cli.debug;
    let print_metrics = cli.metrics;

    if let Err(e) = init_logging(cli.verbose, debug) {
        eprintln!("Failed to initialise logging: {e}");
    }
    let metrics = install_metrics()
        .inspect_err(|e| warn!(error = %e, "Metrics recorder not installed"))
        .ok();

    let result = run(cli).await;

    if let Some(handle) = metrics.as_ref().filter(|_| print_metrics) {
        eprint!("{}", handle.render());
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if debug {
                eprintln!("{e:?}");
            } else {
                eprintln!("{e:#}");
            }
            ExitCode::FAILURE
        },
    }
}
