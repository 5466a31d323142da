//! Human-readable rendering of lookup results.

use chrono::{DateTime, Local, Utc};
use weather_core::{ConditionTag, Localizer, ResolvedLocation, WeatherSnapshot, format_address};

pub fn print_cities(localizer: &Localizer, cities: impl Iterator<Item = ResolvedLocation>) {
    let mut any = false;
    for (i, city) in cities.enumerate() {
        any = true;
        println!("{:>2}. {}  ({:.4}, {:.4})", i + 1, format_address(&city), city.lat, city.lon);
    }

    if !any {
        println!("{}", localizer.translate("no_results", &[]));
    }
}

pub fn print_snapshot(localizer: &Localizer, location: &ResolvedLocation, snapshot: &WeatherSnapshot) {
    let now = Local::now();
    let current = &snapshot.current;
    let unit = localizer.translate("wind_speed_unit", &[]);

    println!("{}", format_address(location));
    println!("{}", localizer.format_date(&now));
    println!();
    println!(
        "{}: {:.1}°C  ({} {:.1}°C)",
        localizer.translate("temperature", &[]),
        current.temp,
        localizer.translate("feels_like", &[]),
        current.feels_like,
    );
    println!("{}: {}%", localizer.translate("humidity", &[]), current.humidity);
    println!("{}: {:.1} {unit}", localizer.translate("wind", &[]), current.wind_speed);
    println!("{}", condition(localizer, &current.weather));

    if let Some(hourly) = &snapshot.hourly {
        println!();
        println!("{}", localizer.translate("day", &[]));
        for point in hourly {
            println!(
                "  {}  {:>6.1}°C  {}",
                localizer.format_time(&local(point.timestamp)),
                point.temp,
                condition(localizer, &point.weather),
            );
        }
    }

    if let Some(daily) = &snapshot.daily {
        println!();
        println!("{}", localizer.translate("week", &[]));
        for day in daily {
            println!(
                "  {}  {:>6.1}°C  {:>3}%  {:.1} {unit}  {}",
                localizer.format_date(&local(day.timestamp)),
                day.avg_temp,
                day.avg_humidity,
                day.avg_wind_speed,
                condition(localizer, &day.weather),
            );
        }
    }
}

fn local(ts: DateTime<Utc>) -> DateTime<Local> {
    ts.with_timezone(&Local)
}

fn condition(localizer: &Localizer, tags: &[ConditionTag]) -> String {
    tags.first()
        .map(|tag| localizer.translate_weather_condition(&tag.description))
        .unwrap_or_default()
}
