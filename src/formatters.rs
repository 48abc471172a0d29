use chrono::DateTime;
use chrono_tz::Tz;

use crate::constants::TIME_FORMAT;
use crate::models::WeatherRecord;

/// Formats a weather table row into a sentence, echoing the city as given
pub fn format_weather_report(city: &str, record: &WeatherRecord) -> String {
    format!(
        "The weather in {} is {} with a temperature of {} degrees {}.",
        city, record.conditions, record.temperature, record.unit
    )
}

pub fn format_weather_unavailable(city: &str) -> String {
    format!("Weather information for '{}' is not available.", city)
}

/// Formats a zoned instant, e.g. `The current time in Paris is 2024-07-01 14:00:00 CEST+0200`
pub fn format_time_report(city: &str, now: &DateTime<Tz>) -> String {
    format!("The current time in {} is {}", city, now.format(TIME_FORMAT))
}

pub fn format_timezone_unavailable(city: &str) -> String {
    format!("Sorry, I don't have timezone information for {}.", city)
}
