//! Pure lookups from readings to visual identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display tier for a temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemperatureTier {
    VeryCold,
    Cold,
    Mild,
    Warm,
    Hot,
}

impl TemperatureTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureTier::VeryCold => "very-cold",
            TemperatureTier::Cold => "cold",
            TemperatureTier::Mild => "mild",
            TemperatureTier::Warm => "warm",
            TemperatureTier::Hot => "hot",
        }
    }

    /// Text color class used for the big temperature figure.
    pub fn color_class(&self) -> &'static str {
        match self {
            TemperatureTier::VeryCold => "text-blue-200",
            TemperatureTier::Cold => "text-blue-100",
            TemperatureTier::Mild => "text-green-100",
            TemperatureTier::Warm => "text-yellow-100",
            TemperatureTier::Hot => "text-red-100",
        }
    }
}

impl fmt::Display for TemperatureTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First matching threshold wins.
pub fn classify_temperature(temperature: i32) -> TemperatureTier {
    match temperature {
        t if t <= 0 => TemperatureTier::VeryCold,
        t if t <= 10 => TemperatureTier::Cold,
        t if t <= 20 => TemperatureTier::Mild,
        t if t <= 30 => TemperatureTier::Warm,
        _ => TemperatureTier::Hot,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Sun,
    Cloud,
    CloudRain,
    CloudSnow,
    CloudLightning,
}

impl IconKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKind::Sun => "sun",
            IconKind::Cloud => "cloud",
            IconKind::CloudRain => "cloud-rain",
            IconKind::CloudSnow => "cloud-snow",
            IconKind::CloudLightning => "cloud-lightning",
        }
    }

    /// Single-glyph rendering for text surfaces.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::Sun => "☀",
            IconKind::Cloud => "☁",
            IconKind::CloudRain => "🌧",
            IconKind::CloudSnow => "🌨",
            IconKind::CloudLightning => "🌩",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientKind {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
}

impl GradientKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientKind::Clear => "clear",
            GradientKind::Clouds => "clouds",
            GradientKind::Rain => "rain",
            GradientKind::Snow => "snow",
            GradientKind::Thunderstorm => "thunderstorm",
        }
    }

    /// Background gradient stops as utility classes.
    pub fn css_stops(&self) -> &'static str {
        match self {
            GradientKind::Clear => "from-blue-400 via-blue-500 to-blue-600",
            GradientKind::Clouds => "from-gray-400 via-gray-500 to-gray-600",
            GradientKind::Rain => "from-gray-600 via-gray-700 to-gray-800",
            GradientKind::Snow => "from-blue-200 via-blue-300 to-blue-400",
            GradientKind::Thunderstorm => "from-gray-800 via-gray-900 to-black",
        }
    }
}

pub fn icon_for(condition: &str) -> IconKind {
    match condition.to_lowercase().as_str() {
        "clear" | "sunny" => IconKind::Sun,
        "clouds" | "cloudy" => IconKind::Cloud,
        "rain" | "drizzle" => IconKind::CloudRain,
        "snow" => IconKind::CloudSnow,
        "thunderstorm" => IconKind::CloudLightning,
        _ => IconKind::Sun,
    }
}

pub fn gradient_for(condition: &str) -> GradientKind {
    match condition.to_lowercase().as_str() {
        "clear" | "sunny" => GradientKind::Clear,
        "clouds" | "cloudy" => GradientKind::Clouds,
        "rain" | "drizzle" => GradientKind::Rain,
        "snow" => GradientKind::Snow,
        "thunderstorm" => GradientKind::Thunderstorm,
        _ => GradientKind::Clear,
    }
}

/// Icon for a forecast day. Uses the forecast vocabulary (`rainy`, `snowy`).
pub fn forecast_icon_for(condition: &str) -> IconKind {
    match condition.to_lowercase().as_str() {
        "sunny" => IconKind::Sun,
        "cloudy" => IconKind::Cloud,
        "rainy" => IconKind::CloudRain,
        "snowy" => IconKind::CloudSnow,
        _ => IconKind::Sun,
    }
}
