//! Human-friendly text rendering of core data.

use lovely_weather_core::{
    DashboardView, ForecastEntry, Particle, WeatherTip, confetti::ConfettiBurst, particles,
    presentation,
};
use rand::Rng;
use serde::Serialize;

pub fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn dashboard_text(view: &DashboardView<'_>, forecast: &[ForecastEntry]) -> String {
    let mut lines = vec![
        "Lovely Weather".to_string(),
        "Beautiful weather updates for beautiful days".to_string(),
        String::new(),
    ];

    let Some(reading) = view.reading else {
        lines.push("No weather loaded yet.".to_string());
        return lines.join("\n") + "\n";
    };

    let glyph = view.icon.map(|i| i.glyph()).unwrap_or_default();

    lines.push(format!("{}  [{}]", reading.location, view.gradient.as_str()));
    lines.push(format!(
        "  {}°C ({})  {} {}",
        reading.temperature,
        view.temperature_tier,
        glyph,
        capitalize(reading.condition.as_str())
    ));
    lines.push(format!("  {}", reading.description));
    lines.push(format!("  Feels like {}°C", reading.feels_like));
    lines.push(String::new());
    lines.push(format!("  Wind Speed  {} km/h", reading.wind_speed));
    lines.push(format!("  Humidity    {}%", reading.humidity));
    lines.push(format!("  Pressure    {} hPa", reading.pressure));
    lines.push(format!("  Visibility  {} km", reading.visibility));
    lines.push(format!("  UV Index    {} ({})", reading.uv_index, reading.uv_level().label()));
    lines.push(String::new());

    lines.push(forecast_text(forecast).trim_end().to_string());
    lines.push(String::new());
    lines.push(tips_text(&view.tips).trim_end().to_string());
    lines.push(String::new());

    lines.push(format!("Particles: {} ({})", view.particles.len(), reading.condition));
    if let Some(at) = view.loaded_at {
        lines.push(format!("Updated at {}", at.format("%Y-%m-%d %H:%M:%S UTC")));
    }

    lines.join("\n") + "\n"
}

pub fn forecast_text(forecast: &[ForecastEntry]) -> String {
    let mut out = String::from("5-Day Forecast\n");

    for entry in forecast {
        let icon = presentation::forecast_icon_for(entry.condition.as_str());
        out.push_str(&format!(
            "  {} {:<10} {:<7} {:>3}° / {:>3}°\n",
            icon.glyph(),
            entry.day,
            capitalize(entry.condition.as_str()),
            entry.high,
            entry.low
        ));
    }

    out
}

pub fn tips_text(tips: &[WeatherTip]) -> String {
    let mut out = String::from("Weather Tips\n");

    for tip in tips {
        out.push_str(&format!("  * {}\n    {}\n", tip.title, tip.description));
    }

    out
}

pub fn particles_text<R: Rng + ?Sized>(
    condition: &str,
    field: &[Particle],
    rng: &mut R,
) -> String {
    let mut out = format!("{} particles for '{condition}'\n", field.len());

    for p in field {
        out.push_str(&format!(
            "  #{:<3} x={:>6.2}% y={:>6.2}% delay={:.2}s duration={:.2}s\n",
            p.id,
            p.x,
            p.y,
            p.delay,
            particles::animation_duration(rng)
        ));
    }

    out
}

pub fn bursts_text(bursts: &[ConfettiBurst]) -> String {
    let mut out = String::from("Confetti!\n");

    for b in bursts {
        let mut line = format!("  {:>3} particles, spread {:>3}", b.particle_count, b.spread);
        if let Some(v) = b.start_velocity {
            line.push_str(&format!(", velocity {v}"));
        }
        if let Some(d) = b.decay {
            line.push_str(&format!(", decay {d}"));
        }
        if let Some(s) = b.scalar {
            line.push_str(&format!(", scalar {s}"));
        }
        out.push_str(&line);
        out.push('\n');
    }

    out
}
