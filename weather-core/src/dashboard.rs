//! View state for the weather dashboard.
//!
//! The dashboard owns the loading state machine (`idle -> loading -> loaded`),
//! the confetti trigger (`idle -> animating -> idle`) and the decorative
//! particle field. It never talks to a renderer; it hands out a
//! [`DashboardView`] snapshot that any surface can draw.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use serde::Serialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::{
    confetti::{ConfettiBurst, ConfettiState},
    forecast,
    model::{ForecastEntry, Particle, UvLevel, WeatherReading},
    particles,
    presentation::{self, GradientKind, IconKind, TemperatureTier},
    source::{Scheduler, WeatherSource},
    tips::{self, WeatherTip},
};

/// Condition assumed before the first reading arrives.
const PLACEHOLDER_CONDITION: &str = "clear";
/// Temperature assumed before the first reading arrives.
const PLACEHOLDER_TEMPERATURE: i32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LoadState {
    Idle,
    Loading,
    Loaded {
        reading: WeatherReading,
        loaded_at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Loaded,
    /// The refresh was cancelled before the reading arrived; nothing changed.
    Cancelled,
}

/// Everything a surface needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView<'a> {
    pub loading: bool,
    pub reading: Option<&'a WeatherReading>,
    pub loaded_at: Option<DateTime<Utc>>,
    pub temperature_tier: TemperatureTier,
    pub temperature_color: &'static str,
    pub icon: Option<IconKind>,
    pub gradient: GradientKind,
    pub uv_level: Option<UvLevel>,
    pub tips: Vec<WeatherTip>,
    pub particles: &'a [Particle],
    pub confetti_animating: bool,
}

#[derive(Debug)]
pub struct Dashboard {
    state: LoadState,
    particles: Vec<Particle>,
    particle_condition: String,
    confetti: ConfettiState,
    rng: StdRng,
}

impl Dashboard {
    /// `rng` drives the particle field and the forecast.
    pub fn new(mut rng: StdRng) -> Self {
        let particles = particles::generate(PLACEHOLDER_CONDITION, &mut rng);

        Self {
            state: LoadState::Idle,
            particles,
            particle_condition: PLACEHOLDER_CONDITION.to_string(),
            confetti: ConfettiState::Idle,
            rng,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn reading(&self) -> Option<&WeatherReading> {
        match &self.state {
            LoadState::Loaded { reading, .. } => Some(reading),
            _ => None,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Enter `Loading` and return the state it replaced.
    pub fn begin_refresh(&mut self) -> LoadState {
        log::debug!("dashboard: -> loading");
        std::mem::replace(&mut self.state, LoadState::Loading)
    }

    /// Publish a reading. The particle field is rebuilt only when the
    /// condition differs from the one it was built for.
    pub fn finish_refresh(&mut self, reading: WeatherReading) {
        let condition = reading.condition.as_str();
        if condition != self.particle_condition {
            self.particles = particles::generate(condition, &mut self.rng);
            self.particle_condition = condition.to_string();
        }

        log::debug!("dashboard: -> loaded ({} in {})", reading.condition, reading.location);
        self.state = LoadState::Loaded { reading, loaded_at: Utc::now() };
    }

    /// Drop an in-flight refresh and restore what was shown before it.
    pub fn abandon_refresh(&mut self, previous: LoadState) {
        log::debug!("dashboard: refresh abandoned");
        self.state = match previous {
            LoadState::Loading => LoadState::Idle,
            other => other,
        };
    }

    /// Fetch a reading from `source` unless `cancel` fires first. A
    /// cancelled or failed refresh leaves the previous view in place.
    pub async fn refresh(
        &mut self,
        source: &dyn WeatherSource,
        cancel: &CancellationToken,
    ) -> anyhow::Result<RefreshOutcome> {
        let previous = self.begin_refresh();

        let fetched = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            result = source.fetch_current() => Some(result),
        };

        match fetched {
            Some(Ok(reading)) => {
                self.finish_refresh(reading);
                Ok(RefreshOutcome::Loaded)
            }
            Some(Err(err)) => {
                self.abandon_refresh(previous);
                Err(err.context("Failed to refresh weather"))
            }
            None => {
                self.abandon_refresh(previous);
                Ok(RefreshOutcome::Cancelled)
            }
        }
    }

    /// A fresh forecast; every call draws new temperatures.
    pub fn forecast(&mut self) -> Vec<ForecastEntry> {
        forecast::sample(&mut self.rng)
    }

    pub fn confetti(&self) -> ConfettiState {
        self.confetti
    }

    pub fn trigger_confetti(&mut self) -> Option<Vec<ConfettiBurst>> {
        self.confetti.trigger()
    }

    pub fn finish_confetti(&mut self) {
        self.confetti.finish();
    }

    /// Fire confetti, hand the bursts to `fire`, then keep the trigger
    /// disabled for `duration`. Returns `false` if an animation was
    /// already running.
    pub async fn celebrate<F>(
        &mut self,
        scheduler: &dyn Scheduler,
        duration: Duration,
        fire: F,
    ) -> bool
    where
        F: FnOnce(&[ConfettiBurst]),
    {
        let Some(bursts) = self.trigger_confetti() else {
            return false;
        };

        fire(&bursts);
        scheduler.delay(duration).await;
        self.finish_confetti();
        true
    }

    pub fn view(&self) -> DashboardView<'_> {
        let reading = self.reading();
        let loaded_at = match &self.state {
            LoadState::Loaded { loaded_at, .. } => Some(*loaded_at),
            _ => None,
        };

        let condition = reading.map_or(PLACEHOLDER_CONDITION, |r| r.condition.as_str());
        let temperature = reading.map_or(PLACEHOLDER_TEMPERATURE, |r| r.temperature);
        let tier = presentation::classify_temperature(temperature);

        DashboardView {
            loading: matches!(self.state, LoadState::Loading),
            reading,
            loaded_at,
            temperature_tier: tier,
            temperature_color: tier.color_class(),
            icon: reading.map(|r| presentation::icon_for(r.condition.as_str())),
            gradient: presentation::gradient_for(condition),
            uv_level: reading.map(WeatherReading::uv_level),
            tips: reading
                .map(|r| tips::compose(r.condition.as_str(), r.temperature))
                .unwrap_or_default(),
            particles: &self.particles,
            confetti_animating: self.confetti.is_animating(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{City, Condition},
        source::{ImmediateScheduler, MockWeatherSource},
    };
    use async_trait::async_trait;
    use rand::SeedableRng;

    fn reading(condition: Condition, temperature: i32) -> WeatherReading {
        WeatherReading {
            location: City::Paris,
            temperature,
            condition,
            description: crate::reading::description_for(condition.as_str()).to_string(),
            humidity: 50,
            wind_speed: 10,
            pressure: 1013,
            visibility: 12,
            feels_like: temperature,
            uv_index: 6,
        }
    }

    fn dashboard() -> Dashboard {
        Dashboard::new(StdRng::seed_from_u64(4))
    }

    #[derive(Debug)]
    struct NeverScheduler;

    #[async_trait]
    impl Scheduler for NeverScheduler {
        async fn delay(&self, _duration: Duration) {
            std::future::pending::<()>().await;
        }
    }

    #[derive(Debug)]
    struct FailingSource;

    #[async_trait]
    impl WeatherSource for FailingSource {
        async fn fetch_current(&self) -> anyhow::Result<WeatherReading> {
            Err(anyhow::anyhow!("boom"))
        }
    }

    #[test]
    fn starts_idle_with_clear_particles() {
        let d = dashboard();
        assert_eq!(*d.state(), LoadState::Idle);
        assert_eq!(d.particles().len(), 20);

        let view = d.view();
        assert!(!view.loading);
        assert!(view.reading.is_none());
        assert_eq!(view.temperature_tier, TemperatureTier::Mild);
        assert_eq!(view.gradient, GradientKind::Clear);
        assert!(view.tips.is_empty());
    }

    #[test]
    fn refresh_transitions_idle_loading_loaded() {
        let mut d = dashboard();

        let previous = d.begin_refresh();
        assert_eq!(previous, LoadState::Idle);
        assert!(d.view().loading);

        d.finish_refresh(reading(Condition::Rain, 30));
        assert!(matches!(d.state(), LoadState::Loaded { .. }));

        let view = d.view();
        assert!(!view.loading);
        assert_eq!(view.icon, Some(IconKind::CloudRain));
        assert_eq!(view.gradient, GradientKind::Rain);
        assert_eq!(view.temperature_tier, TemperatureTier::Warm);
        assert_eq!(view.uv_level, Some(UvLevel::High));
        assert_eq!(view.tips.len(), 2);
        assert_eq!(view.particles.len(), 50);
    }

    #[test]
    fn particles_regenerate_only_on_condition_change() {
        let mut d = dashboard();
        let initial = d.particles().to_vec();

        d.finish_refresh(reading(Condition::Clear, 18));
        assert_eq!(d.particles(), initial.as_slice());

        d.finish_refresh(reading(Condition::Sunny, 18));
        assert_ne!(d.particles(), initial.as_slice());
        let sunny = d.particles().to_vec();

        d.finish_refresh(reading(Condition::Sunny, 25));
        assert_eq!(d.particles(), sunny.as_slice());
    }

    #[test]
    fn abandoned_refresh_restores_previous_reading() {
        let mut d = dashboard();
        d.finish_refresh(reading(Condition::Clouds, 12));

        let previous = d.begin_refresh();
        d.abandon_refresh(previous);

        assert_eq!(d.reading().map(|r| r.condition), Some(Condition::Clouds));
    }

    #[tokio::test]
    async fn refresh_through_mock_source() {
        let mut d = dashboard();
        let source = MockWeatherSource::new(
            StdRng::seed_from_u64(12),
            Box::new(ImmediateScheduler),
            Duration::from_secs(1),
        );

        let outcome = d.refresh(&source, &CancellationToken::new()).await.unwrap();

        assert_eq!(outcome, RefreshOutcome::Loaded);
        let expected = crate::reading::sample(&mut StdRng::seed_from_u64(12));
        assert_eq!(d.reading(), Some(&expected));
    }

    #[tokio::test]
    async fn cancelled_refresh_does_not_update_view() {
        let mut d = dashboard();
        let source = MockWeatherSource::new(
            StdRng::seed_from_u64(12),
            Box::new(NeverScheduler),
            Duration::from_secs(1),
        );
        let cancel = CancellationToken::new();
        cancel.cancel();

        let outcome = d.refresh(&source, &cancel).await.unwrap();

        assert_eq!(outcome, RefreshOutcome::Cancelled);
        assert_eq!(*d.state(), LoadState::Idle);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_state() {
        let mut d = dashboard();
        d.finish_refresh(reading(Condition::Sunny, 22));

        let err = d.refresh(&FailingSource, &CancellationToken::new()).await.unwrap_err();

        assert!(err.to_string().contains("Failed to refresh weather"));
        assert_eq!(d.reading().map(|r| r.temperature), Some(22));
    }

    #[test]
    fn forecast_redraws_each_call() {
        let mut d = dashboard();
        let draws: Vec<_> = (0..10).map(|_| d.forecast()).collect();

        assert!(draws.iter().all(|f| f.len() == 5));
        assert!(draws.windows(2).any(|w| w[0] != w[1]));
    }

    #[tokio::test]
    async fn celebrate_cycles_confetti_state() {
        let mut d = dashboard();
        let mut fired = 0;

        let ran = d
            .celebrate(&ImmediateScheduler, Duration::from_secs(3), |bursts| fired = bursts.len())
            .await;

        assert!(ran);
        assert_eq!(fired, 5);
        assert_eq!(d.confetti(), ConfettiState::Idle);
    }

    #[test]
    fn confetti_trigger_blocks_while_animating() {
        let mut d = dashboard();

        assert!(d.trigger_confetti().is_some());
        assert!(d.view().confetti_animating);
        assert!(d.trigger_confetti().is_none());

        d.finish_confetti();
        assert!(!d.view().confetti_animating);
    }
}
