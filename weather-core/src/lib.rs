//! Core library for the `lovely-weather` dashboard.
//!
//! This crate defines:
//! - Mock generators for current readings, forecasts and particle fields
//! - Pure presentation lookups (temperature tiers, icons, gradients, tips)
//! - The dashboard state container and its mock source with injectable delay
//! - Configuration handling
//!
//! Every generator takes its random source as a parameter, so a seeded
//! `StdRng` reproduces output exactly. It is used by `lovely-weather`, but
//! can also back any other rendering surface.

pub mod confetti;
pub mod config;
pub mod dashboard;
pub mod forecast;
pub mod model;
pub mod particles;
pub mod presentation;
pub mod reading;
pub mod source;
pub mod tips;

pub use config::{Config, OutputFormat};
pub use dashboard::{Dashboard, DashboardView, LoadState, RefreshOutcome};
pub use model::{
    City, Condition, ForecastCondition, ForecastEntry, Particle, UnknownCondition, UvLevel,
    WeatherReading,
};
pub use presentation::{GradientKind, IconKind, TemperatureTier};
pub use source::{MockWeatherSource, Scheduler, WeatherSource};
pub use tips::WeatherTip;
