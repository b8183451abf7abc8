use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// Current-weather condition produced by the mock sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Sunny,
    Cloudy,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Clear => "clear",
            Condition::Clouds => "clouds",
            Condition::Rain => "rain",
            Condition::Sunny => "sunny",
            Condition::Cloudy => "cloudy",
        }
    }

    pub const fn all() -> &'static [Condition] {
        &[
            Condition::Clear,
            Condition::Clouds,
            Condition::Rain,
            Condition::Sunny,
            Condition::Cloudy,
        ]
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown condition '{0}'. Known conditions: clear, clouds, rain, sunny, cloudy.")]
pub struct UnknownCondition(pub String);

impl TryFrom<&str> for Condition {
    type Error = UnknownCondition;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        Condition::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| UnknownCondition(value.to_string()))
    }
}

/// The fixed set of cities a mock reading can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    #[serde(rename = "New York")]
    NewYork,
    London,
    Tokyo,
    Paris,
    Sydney,
    #[serde(rename = "San Francisco")]
    SanFrancisco,
}

impl City {
    pub fn as_str(&self) -> &'static str {
        match self {
            City::NewYork => "New York",
            City::London => "London",
            City::Tokyo => "Tokyo",
            City::Paris => "Paris",
            City::Sydney => "Sydney",
            City::SanFrancisco => "San Francisco",
        }
    }

    pub const fn all() -> &'static [City] {
        &[
            City::NewYork,
            City::London,
            City::Tokyo,
            City::Paris,
            City::Sydney,
            City::SanFrancisco,
        ]
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthetic snapshot of current weather. Every field is sampled
/// independently of the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub location: City,
    /// Degrees Celsius.
    pub temperature: i32,
    pub condition: Condition,
    pub description: String,
    /// Percent.
    pub humidity: u8,
    /// km/h.
    pub wind_speed: u32,
    /// hPa.
    pub pressure: u32,
    /// km.
    pub visibility: u32,
    /// Degrees Celsius.
    pub feels_like: i32,
    pub uv_index: u8,
}

impl WeatherReading {
    pub fn uv_level(&self) -> UvLevel {
        UvLevel::from_index(self.uv_index)
    }
}

/// Badge bucket for the UV index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UvLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl UvLevel {
    pub fn from_index(index: u8) -> Self {
        match index {
            0..=2 => UvLevel::Low,
            3..=5 => UvLevel::Moderate,
            6..=7 => UvLevel::High,
            _ => UvLevel::VeryHigh,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UvLevel::Low => "Low",
            UvLevel::Moderate => "Moderate",
            UvLevel::High => "High",
            UvLevel::VeryHigh => "Very High",
        }
    }
}

/// Condition vocabulary of the daily forecast, which differs from the
/// current-weather one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastCondition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

impl ForecastCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastCondition::Sunny => "sunny",
            ForecastCondition::Cloudy => "cloudy",
            ForecastCondition::Rainy => "rainy",
            ForecastCondition::Snowy => "snowy",
        }
    }
}

impl fmt::Display for ForecastCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of the synthetic forecast. `low` may exceed `high`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: ForecastCondition,
}

/// A decorative dot in the animated background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: usize,
    /// Horizontal position, percent of the surface width.
    pub x: f64,
    /// Vertical position, percent of the surface height.
    pub y: f64,
    /// Animation delay in seconds.
    pub delay: f64,
}
