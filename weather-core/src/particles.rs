//! Decorative particle field behind the dashboard.

use rand::Rng;

use crate::model::Particle;

/// Number of particles for a condition. Matching is exact and case-sensitive.
pub fn particle_count(condition: &str) -> usize {
    match condition {
        "rain" => 50,
        "snow" => 30,
        _ => 20,
    }
}

/// Build a fresh field for `condition`. Callers regenerate the whole field
/// whenever the condition changes.
pub fn generate<R: Rng + ?Sized>(condition: &str, rng: &mut R) -> Vec<Particle> {
    let particles: Vec<Particle> = (0..particle_count(condition))
        .map(|id| Particle {
            id,
            x: rng.random_range(0.0..100.0),
            y: rng.random_range(0.0..100.0),
            delay: rng.random_range(0.0..3.0),
        })
        .collect();

    log::debug!("generated {} particles for '{condition}'", particles.len());
    particles
}

/// Pulse duration in seconds for one particle, drawn at render time.
pub fn animation_duration<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(3.0..5.0)
}
