use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::{CustomType, Select, Text};
use lovely_weather_core::{
    Config, Dashboard, OutputFormat, RefreshOutcome, particles, presentation,
    source::{self, ImmediateScheduler, Scheduler, TokioScheduler},
    tips,
};
use tokio_util::sync::CancellationToken;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "lovely-weather", version, about = "Beautiful mock weather updates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by the commands that draw random data.
#[derive(Debug, Args)]
pub struct DrawArgs {
    /// Seed for the random source; overrides the configured seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively edit the stored configuration.
    Configure,

    /// Refresh and show the full dashboard.
    Show {
        #[command(flatten)]
        draw: DrawArgs,

        /// Skip the simulated network latency.
        #[arg(long)]
        no_delay: bool,
    },

    /// Show a freshly drawn 5-day forecast.
    Forecast {
        #[command(flatten)]
        draw: DrawArgs,
    },

    /// Generate the background particle field for a condition.
    Particles {
        /// Condition name, matched exactly (e.g. "rain", "snow").
        condition: String,

        #[command(flatten)]
        draw: DrawArgs,
    },

    /// Classify a temperature into its display tier.
    Classify {
        /// Degrees Celsius.
        #[arg(allow_negative_numbers = true)]
        temperature: i32,
    },

    /// Show the tips for a condition and temperature.
    Tips {
        /// Condition text; matched as a case-insensitive substring.
        condition: String,

        /// Degrees Celsius.
        #[arg(allow_negative_numbers = true)]
        temperature: i32,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Fire the confetti bursts.
    Celebrate {
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Do not wait for the animation to finish.
        #[arg(long)]
        no_delay: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::Configure => configure(config)?,
            Command::Show { draw, no_delay } => show(&config, &draw, no_delay).await?,
            Command::Forecast { draw } => {
                let mut dashboard = dashboard_for(&config, draw.seed);
                let forecast = dashboard.forecast();

                if wants_json(&config, draw.json) {
                    println!("{}", render::json(&forecast)?);
                } else {
                    print!("{}", render::forecast_text(&forecast));
                }
            }
            Command::Particles { condition, draw } => {
                let mut rng = source::rng_from_seed(draw.seed.or(config.seed));
                let field = particles::generate(&condition, &mut rng);

                if wants_json(&config, draw.json) {
                    println!("{}", render::json(&field)?);
                } else {
                    print!("{}", render::particles_text(&condition, &field, &mut rng));
                }
            }
            Command::Classify { temperature } => {
                let tier = presentation::classify_temperature(temperature);
                println!("{tier}");
            }
            Command::Tips { condition, temperature, json } => {
                let tips = tips::compose(&condition, temperature);

                if wants_json(&config, json) {
                    println!("{}", render::json(&tips)?);
                } else {
                    print!("{}", render::tips_text(&tips));
                }
            }
            Command::Celebrate { json, no_delay } => {
                let scheduler: Box<dyn Scheduler> =
                    if no_delay { Box::new(ImmediateScheduler) } else { Box::new(TokioScheduler) };
                let mut dashboard = dashboard_for(&config, None);
                let as_json = wants_json(&config, json);

                let mut output: anyhow::Result<()> = Ok(());
                dashboard
                    .celebrate(scheduler.as_ref(), config.confetti_duration(), |bursts| {
                        output = if as_json {
                            render::json(bursts).map(|s| println!("{s}"))
                        } else {
                            print!("{}", render::bursts_text(bursts));
                            Ok(())
                        };
                    })
                    .await;
                output?;
            }
        }

        Ok(())
    }
}

fn wants_json(config: &Config, flag: bool) -> bool {
    flag || config.format == OutputFormat::Json
}

/// Seeded one past the source so the two streams differ.
fn dashboard_for(config: &Config, seed: Option<u64>) -> Dashboard {
    let seed = seed.or(config.seed).map(|s| s.wrapping_add(1));
    Dashboard::new(source::rng_from_seed(seed))
}

async fn show(config: &Config, draw: &DrawArgs, no_delay: bool) -> anyhow::Result<()> {
    let source = source::source_from_config(config, draw.seed, no_delay);
    let mut dashboard = dashboard_for(config, draw.seed);
    let as_json = wants_json(config, draw.json);

    let cancel = CancellationToken::new();
    let ctrl_c = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };

    if !as_json && !no_delay {
        eprintln!("Fetching weather...");
    }

    log::debug!("refreshing (seed {:?}, no_delay {no_delay})", draw.seed.or(config.seed));
    let outcome = dashboard.refresh(source.as_ref(), &cancel).await;
    ctrl_c.abort();

    if outcome? == RefreshOutcome::Cancelled {
        log::info!("refresh cancelled by ctrl-c");
        eprintln!("Refresh cancelled.");
        return Ok(());
    }

    let forecast = dashboard.forecast();
    let view = dashboard.view();

    if as_json {
        let body = serde_json::json!({ "dashboard": view, "forecast": forecast });
        println!("{}", render::json(&body)?);
    } else {
        print!("{}", render::dashboard_text(&view, &forecast));
    }

    Ok(())
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let current_seed = config.seed.map(|s| s.to_string()).unwrap_or_default();
    let seed = Text::new("RNG seed (empty for a fresh random seed each run):")
        .with_default(&current_seed)
        .prompt()?;

    config.seed = match seed.trim() {
        "" => None,
        s => Some(s.parse().with_context(|| format!("Invalid seed '{s}'"))?),
    };

    config.latency_ms = CustomType::<u64>::new("Simulated latency (ms):")
        .with_default(config.latency_ms)
        .prompt()?;

    config.confetti_ms = CustomType::<u64>::new("Confetti animation length (ms):")
        .with_default(config.confetti_ms)
        .prompt()?;

    let formats = vec![OutputFormat::Text, OutputFormat::Json];
    let start = formats.iter().position(|f| *f == config.format).unwrap_or(0);
    config.format = Select::new("Default output format:", formats)
        .with_starting_cursor(start)
        .prompt()?;

    config.save()?;
    println!("Configuration saved to {}", Config::config_file_path()?.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn dashboard_seed_is_offset_from_source_seed() {
        let cfg = Config::default();

        let forecast = dashboard_for(&cfg, Some(10)).forecast();
        let expected = Dashboard::new(StdRng::seed_from_u64(11)).forecast();

        assert_eq!(forecast, expected);
    }

    #[test]
    fn dashboard_falls_back_to_configured_seed() {
        let cfg = Config { seed: Some(41), ..Config::default() };

        let from_config = dashboard_for(&cfg, None).forecast();
        let expected = Dashboard::new(StdRng::seed_from_u64(42)).forecast();
        assert_eq!(from_config, expected);

        let overridden = dashboard_for(&cfg, Some(0)).forecast();
        let expected = Dashboard::new(StdRng::seed_from_u64(1)).forecast();
        assert_eq!(overridden, expected);
    }

    #[test]
    fn json_wanted_by_flag_or_config() {
        let text = Config::default();
        let json = Config { format: OutputFormat::Json, ..Config::default() };

        assert!(!wants_json(&text, false));
        assert!(wants_json(&text, true));
        assert!(wants_json(&json, false));
        assert!(wants_json(&json, true));
    }
}
