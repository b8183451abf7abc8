//! Five-day synthetic forecast.

use rand::Rng;

use crate::model::{ForecastCondition, ForecastEntry};

pub const WEEK_LABELS: [&str; 7] = [
    "Today",
    "Tomorrow",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const FORECAST_DAYS: usize = 5;

/// Conditions are assigned by position, not drawn.
const DAY_CONDITIONS: [ForecastCondition; FORECAST_DAYS] = [
    ForecastCondition::Sunny,
    ForecastCondition::Cloudy,
    ForecastCondition::Rainy,
    ForecastCondition::Sunny,
    ForecastCondition::Cloudy,
];

/// Generate the forecast for the first five labels of the week.
///
/// `high` and `low` are independent offsets from a per-day base
/// temperature. No ordering between them is enforced here.
pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Vec<ForecastEntry> {
    WEEK_LABELS
        .iter()
        .take(FORECAST_DAYS)
        .zip(DAY_CONDITIONS)
        .map(|(day, condition)| {
            let base = 20 + rng.random_range(0..=14);

            ForecastEntry {
                day: (*day).to_string(),
                high: base + rng.random_range(0..=7),
                low: base - rng.random_range(0..=7),
                condition,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn five_days_in_order_with_positional_conditions() {
        let mut rng = StdRng::seed_from_u64(1);
        let forecast = sample(&mut rng);

        let days: Vec<_> = forecast.iter().map(|e| e.day.as_str()).collect();
        assert_eq!(days, ["Today", "Tomorrow", "Wednesday", "Thursday", "Friday"]);

        let conditions: Vec<_> = forecast.iter().map(|e| e.condition.as_str()).collect();
        assert_eq!(conditions, ["sunny", "cloudy", "rainy", "sunny", "cloudy"]);
    }

    #[test]
    fn temperatures_stay_within_draw_bounds() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..500 {
            for entry in sample(&mut rng) {
                assert!((20..=41).contains(&entry.high));
                assert!((13..=34).contains(&entry.low));
            }
        }
    }

    #[test]
    fn high_and_low_meet_at_the_base() {
        let mut rng = StdRng::seed_from_u64(5);
        let entries: Vec<_> = (0..500).flat_map(|_| sample(&mut rng)).collect();

        assert!(entries.iter().all(|e| e.high >= e.low));
        assert!(entries.iter().any(|e| e.high == e.low));
    }
}
