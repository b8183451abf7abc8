//! Confetti burst plan and the trigger's animating flag.

use serde::Serialize;
use std::time::Duration;

pub const TOTAL_PARTICLES: u32 = 200;
pub const ORIGIN_Y: f32 = 0.7;
pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfettiBurst {
    pub particle_count: u32,
    pub spread: u32,
    pub origin_y: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_velocity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decay: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scalar: Option<f32>,
}

impl ConfettiBurst {
    /// `percent` is this burst's share of [`TOTAL_PARTICLES`], floored.
    fn share(percent: u32, spread: u32) -> Self {
        Self {
            particle_count: TOTAL_PARTICLES * percent / 100,
            spread,
            origin_y: ORIGIN_Y,
            start_velocity: None,
            decay: None,
            scalar: None,
        }
    }

    fn velocity(mut self, v: u32) -> Self {
        self.start_velocity = Some(v);
        self
    }

    fn decay(mut self, d: f32) -> Self {
        self.decay = Some(d);
        self
    }

    fn scalar(mut self, s: f32) -> Self {
        self.scalar = Some(s);
        self
    }
}

/// The five bursts fired together on one trigger.
pub fn bursts() -> Vec<ConfettiBurst> {
    vec![
        ConfettiBurst::share(25, 26).velocity(55),
        ConfettiBurst::share(20, 60),
        ConfettiBurst::share(35, 100).decay(0.91).scalar(0.8),
        ConfettiBurst::share(10, 120).velocity(25).decay(0.92).scalar(1.2),
        ConfettiBurst::share(10, 120).velocity(45),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfettiState {
    #[default]
    Idle,
    Animating,
}

impl ConfettiState {
    /// Start an animation. Returns `None` while one is already running.
    pub fn trigger(&mut self) -> Option<Vec<ConfettiBurst>> {
        match self {
            ConfettiState::Animating => None,
            ConfettiState::Idle => {
                *self = ConfettiState::Animating;
                log::debug!("confetti: idle -> animating");
                Some(bursts())
            }
        }
    }

    pub fn finish(&mut self) {
        if *self == ConfettiState::Animating {
            log::debug!("confetti: animating -> idle");
        }
        *self = ConfettiState::Idle;
    }

    pub fn is_animating(&self) -> bool {
        *self == ConfettiState::Animating
    }
}
