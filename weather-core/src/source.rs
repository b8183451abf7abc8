use async_trait::async_trait;
use rand::{SeedableRng, rngs::StdRng};
use std::{fmt::Debug, time::Duration};
use tokio::sync::Mutex;

use crate::{Config, model::WeatherReading, reading};

/// Source of artificial delay. Swapped for [`ImmediateScheduler`] in tests.
#[async_trait]
pub trait Scheduler: Send + Sync + Debug {
    async fn delay(&self, duration: Duration);
}

/// Waits on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn delay(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately regardless of the requested delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateScheduler;

#[async_trait]
impl Scheduler for ImmediateScheduler {
    async fn delay(&self, _duration: Duration) {}
}

#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_current(&self) -> anyhow::Result<WeatherReading>;
}

/// Fakes a network round trip: waits `latency` on its scheduler, then
/// samples a reading from its own RNG.
#[derive(Debug)]
pub struct MockWeatherSource {
    rng: Mutex<StdRng>,
    scheduler: Box<dyn Scheduler>,
    latency: Duration,
}

impl MockWeatherSource {
    pub fn new(rng: StdRng, scheduler: Box<dyn Scheduler>, latency: Duration) -> Self {
        Self { rng: Mutex::new(rng), scheduler, latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl WeatherSource for MockWeatherSource {
    async fn fetch_current(&self) -> anyhow::Result<WeatherReading> {
        log::debug!("mock fetch: waiting {:?}", self.latency);
        self.scheduler.delay(self.latency).await;

        let mut rng = self.rng.lock().await;
        Ok(reading::sample(&mut *rng))
    }
}

/// Seeded RNG when a seed is given, OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Build the mock source from config. `seed` overrides the configured seed;
/// `immediate` skips the artificial latency.
pub fn source_from_config(
    config: &Config,
    seed: Option<u64>,
    immediate: bool,
) -> Box<dyn WeatherSource> {
    let rng = rng_from_seed(seed.or(config.seed));
    let scheduler: Box<dyn Scheduler> =
        if immediate { Box::new(ImmediateScheduler) } else { Box::new(TokioScheduler) };

    Box::new(MockWeatherSource::new(rng, scheduler, config.latency()))
}
