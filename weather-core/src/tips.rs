//! Advisory tips derived from a condition and a temperature.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TipKind {
    Umbrella,
    BundleUp,
    Hydrate,
    DressWarmly,
    PerfectWeather,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TipIcon {
    Umbrella,
    Snowflake,
    Sun,
    Lightbulb,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherTip {
    pub kind: TipKind,
    pub icon: TipIcon,
    pub title: &'static str,
    pub description: &'static str,
    pub color_class: &'static str,
}

impl TipKind {
    pub fn tip(self) -> WeatherTip {
        let (icon, title, description, color_class) = match self {
            TipKind::Umbrella => (
                TipIcon::Umbrella,
                "Don't forget your umbrella!",
                "It's looking rainy today. Stay dry and cozy!",
                "bg-blue-500/20",
            ),
            TipKind::BundleUp => (
                TipIcon::Snowflake,
                "Bundle up warm!",
                "Snow is expected. Wear layers and watch for icy conditions.",
                "bg-blue-300/20",
            ),
            TipKind::Hydrate => (
                TipIcon::Sun,
                "Stay hydrated!",
                "It's quite warm today. Drink plenty of water and seek shade.",
                "bg-yellow-500/20",
            ),
            TipKind::DressWarmly => (
                TipIcon::Snowflake,
                "Dress warmly!",
                "Chilly temperatures ahead. Layer up and stay warm!",
                "bg-blue-400/20",
            ),
            TipKind::PerfectWeather => (
                TipIcon::Lightbulb,
                "Perfect weather!",
                "Enjoy this lovely day! Great time to be outdoors.",
                "bg-green-500/20",
            ),
        };

        WeatherTip { kind: self, icon, title, description, color_class }
    }
}

/// Evaluate every rule independently, in order. Falls back to a single
/// "perfect weather" tip when nothing fired.
pub fn compose(condition: &str, temperature: i32) -> Vec<WeatherTip> {
    let condition = condition.to_lowercase();

    let rules = [
        (condition.contains("rain"), TipKind::Umbrella),
        (condition.contains("snow"), TipKind::BundleUp),
        (temperature > 25, TipKind::Hydrate),
        (temperature < 5, TipKind::DressWarmly),
    ];

    let mut tips: Vec<WeatherTip> =
        rules.into_iter().filter(|(fired, _)| *fired).map(|(_, kind)| kind.tip()).collect();

    if tips.is_empty() {
        tips.push(TipKind::PerfectWeather.tip());
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tips: &[WeatherTip]) -> Vec<TipKind> {
        tips.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn rain_alone_gives_umbrella() {
        assert_eq!(kinds(&compose("rain", 15)), [TipKind::Umbrella]);
    }

    #[test]
    fn mild_clear_gives_default() {
        let tips = compose("clear", 18);
        assert_eq!(kinds(&tips), [TipKind::PerfectWeather]);
        assert_eq!(tips[0].title, "Perfect weather!");
    }

    #[test]
    fn hot_rain_gives_umbrella_then_hydration() {
        assert_eq!(kinds(&compose("rain", 30)), [TipKind::Umbrella, TipKind::Hydrate]);
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        assert_eq!(kinds(&compose("Light RAIN showers", 10)), [TipKind::Umbrella]);
        assert_eq!(kinds(&compose("heavy snowfall", 10)), [TipKind::BundleUp]);
    }

    #[test]
    fn all_rules_can_fire_together() {
        assert_eq!(
            kinds(&compose("rain and snow", 3)),
            [TipKind::Umbrella, TipKind::BundleUp, TipKind::DressWarmly]
        );
    }

    #[test]
    fn temperature_thresholds_are_strict() {
        assert_eq!(kinds(&compose("clear", 25)), [TipKind::PerfectWeather]);
        assert_eq!(kinds(&compose("clear", 26)), [TipKind::Hydrate]);
        assert_eq!(kinds(&compose("clear", 5)), [TipKind::PerfectWeather]);
        assert_eq!(kinds(&compose("clear", 4)), [TipKind::DressWarmly]);
    }

    #[test]
    fn tip_content_matches_kind() {
        let tip = TipKind::BundleUp.tip();
        assert_eq!(tip.icon, TipIcon::Snowflake);
        assert_eq!(tip.color_class, "bg-blue-300/20");
    }
}
