//! Synthetic current-weather readings.

use rand::Rng;

use crate::model::{City, Condition, WeatherReading};

/// Description shown for conditions missing from the table.
pub const FALLBACK_DESCRIPTION: &str = "Pleasant weather";

/// Look up the human description for a condition name.
pub fn description_for(condition: &str) -> &'static str {
    match Condition::try_from(condition) {
        Ok(Condition::Clear) => "Clear sky with bright sunshine",
        Ok(Condition::Clouds) => "Partly cloudy with scattered clouds",
        Ok(Condition::Rain) => "Light rain showers expected",
        Ok(Condition::Sunny) => "Bright and sunny day",
        Ok(Condition::Cloudy) => "Overcast with thick cloud cover",
        Err(_) => FALLBACK_DESCRIPTION,
    }
}

/// Draw one reading. Condition and city are uniform over their closed sets
/// and every numeric field is an independent uniform draw.
pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> WeatherReading {
    let conditions = Condition::all();
    let cities = City::all();

    let condition = conditions[rng.random_range(0..conditions.len())];
    let location = cities[rng.random_range(0..cities.len())];

    let reading = WeatherReading {
        location,
        temperature: rng.random_range(5..40),
        condition,
        description: description_for(condition.as_str()).to_string(),
        humidity: rng.random_range(40..80),
        wind_speed: rng.random_range(5..25),
        pressure: rng.random_range(1000..1050),
        visibility: rng.random_range(10..15),
        feels_like: rng.random_range(5..40),
        uv_index: rng.random_range(0..=10),
    };

    log::debug!(
        "sampled reading: {} {} {}°C",
        reading.location,
        reading.condition,
        reading.temperature
    );

    reading
}
