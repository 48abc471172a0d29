use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::formatters::{format_time_report, format_timezone_unavailable};
use crate::models::ToolOutcome;

/// IANA zone identifiers, keyed by lowercase city name
pub const TIMEZONE_TABLE: &[(&str, &str)] = &[
    ("new york", "America/New_York"),
    ("london", "Europe/London"),
    ("tokyo", "Asia/Tokyo"),
    ("paris", "Europe/Paris"),
    ("sydney", "Australia/Sydney"),
];

#[derive(Debug, Error)]
pub enum TimeError {
    /// The zone database could not resolve an identifier from the table.
    /// Retrying cannot help; the host or build is misconfigured.
    #[error("failed to resolve timezone '{identifier}': {reason}")]
    TimezoneResolution { identifier: String, reason: String },
}

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant, for callers that need deterministic
/// reports
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Case-insensitive lookup into [`TIMEZONE_TABLE`]
pub fn lookup_timezone(city: &str) -> Option<&'static str> {
    let key = city.to_lowercase();
    TIMEZONE_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, identifier)| *identifier)
}

pub fn resolve_timezone(identifier: &str) -> Result<Tz, TimeError> {
    identifier
        .parse::<Tz>()
        .map_err(|e| TimeError::TimezoneResolution {
            identifier: identifier.to_string(),
            reason: e.to_string(),
        })
}

/// Current time in `city`, read from the system clock
pub fn get_current_time(city: &str) -> Result<ToolOutcome, TimeError> {
    get_current_time_at(city, &SystemClock)
}

/// Current time in `city` according to `clock`
pub fn get_current_time_at(city: &str, clock: &dyn Clock) -> Result<ToolOutcome, TimeError> {
    let Some(identifier) = lookup_timezone(city) else {
        return Ok(ToolOutcome::error(format_timezone_unavailable(city)));
    };

    let tz = resolve_timezone(identifier)?;
    let now = clock.now().with_timezone(&tz);
    Ok(ToolOutcome::success(format_time_report(city, &now)))
}
