use crate::formatters::{format_weather_report, format_weather_unavailable};
use crate::models::{ToolOutcome, WeatherRecord};

/// Canned conditions, keyed by lowercase city name
pub const WEATHER_TABLE: &[(&str, WeatherRecord)] = &[
    (
        "new york",
        WeatherRecord {
            temperature: "25",
            unit: "Celsius",
            conditions: "sunny",
        },
    ),
    (
        "london",
        WeatherRecord {
            temperature: "18",
            unit: "Celsius",
            conditions: "cloudy",
        },
    ),
    (
        "tokyo",
        WeatherRecord {
            temperature: "28",
            unit: "Celsius",
            conditions: "humid",
        },
    ),
    (
        "paris",
        WeatherRecord {
            temperature: "22",
            unit: "Celsius",
            conditions: "partly cloudy",
        },
    ),
    (
        "sydney",
        WeatherRecord {
            temperature: "30",
            unit: "Celsius",
            conditions: "hot and clear",
        },
    ),
];

/// Case-insensitive lookup into [`WEATHER_TABLE`]
pub fn lookup_weather(city: &str) -> Option<&'static WeatherRecord> {
    let key = city.to_lowercase();
    WEATHER_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, record)| record)
}

/// Retrieves the weather report for a city. Unknown cities yield an error outcome.
pub fn get_weather(city: &str) -> ToolOutcome {
    match lookup_weather(city) {
        Some(record) => ToolOutcome::success(format_weather_report(city, record)),
        None => ToolOutcome::error(format_weather_unavailable(city)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paris_report() {
        assert_eq!(
            get_weather("paris"),
            ToolOutcome::success(
                "The weather in paris is partly cloudy with a temperature of 22 degrees Celsius."
            )
        );
    }

    #[test]
    fn test_unknown_city() {
        assert_eq!(
            get_weather("Atlantis"),
            ToolOutcome::error("Weather information for 'Atlantis' is not available.")
        );
    }

    #[test]
    fn test_case_insensitive() {
        for city in ["LONDON", "London", "london"] {
            let outcome = get_weather(city);
            assert!(outcome.is_success(), "{city} should resolve");
            assert!(outcome.text().contains("cloudy with a temperature of 18 degrees Celsius"));
            assert!(outcome.text().contains(city));
        }
    }

    #[test]
    fn test_every_city_reports_its_row() {
        for (name, record) in WEATHER_TABLE {
            let shouted = name.to_uppercase();
            let outcome = get_weather(&shouted);
            assert!(outcome.is_success());
            assert!(outcome.text().contains(record.conditions));
            assert!(outcome.text().contains(record.temperature));
            assert!(outcome.text().contains(record.unit));
        }
    }

    #[test]
    fn test_empty_and_padded_inputs_are_unknown() {
        assert!(!get_weather("").is_success());
        assert_eq!(
            get_weather(" paris "),
            ToolOutcome::error("Weather information for ' paris ' is not available.")
        );
    }
}
