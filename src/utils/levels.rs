//! Level parameter validation shared by the REST and GraphQL layers.
//!
//! The cost engine accepts any integers. Requests are checked here first so
//! that out-of-range or malformed levels become client errors instead of
//! silently aggregating to zero.

use rocket::FromForm;
use thiserror::Error;

use crate::costs::Level;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelRangeError {
    #[error("level is not an integer")]
    NotAnInteger,
    #[error("start level {start} is below 1")]
    BelowMinimum { start: i64 },
    #[error("end level {end} exceeds the level cap of {cap}")]
    AboveCap { end: i64, cap: Level },
    #[error("start level {start} is not below end level {end}")]
    Empty { start: i64, end: i64 },
    #[error("level {level} is outside 1..={cap}")]
    OutOfBounds { level: i64, cap: Level },
}

/// A validated request range: `1 <= start < end <= cap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRange {
    pub start: Level,
    pub end: Level,
}

impl LevelRange {
    /// Checks `start` and `end` against `cap`, in order: minimum, cap, then
    /// emptiness.
    pub fn new(start: i64, end: i64, cap: Level) -> Result<Self, LevelRangeError> {
        if start < 1 {
            return Err(LevelRangeError::BelowMinimum { start });
        }
        if end > i64::from(cap) {
            return Err(LevelRangeError::AboveCap { end, cap });
        }
        if start >= end {
            return Err(LevelRangeError::Empty { start, end });
        }
        // 1 <= start < end <= cap, so both fit in a Level.
        Ok(Self {
            start: start as Level,
            end: end as Level,
        })
    }

    pub fn start(&self) -> i64 {
        i64::from(self.start)
    }

    pub fn end(&self) -> i64 {
        i64::from(self.end)
    }
}

/// Raw `startLevel`/`endLevel` query parameters. Kept as strings so that
/// malformed numbers are reported by `validate` rather than by Rocket.
#[derive(Debug, Default, FromForm)]
pub struct LevelRangeQuery {
    #[field(name = "startLevel")]
    pub start_level: Option<String>,
    #[field(name = "endLevel")]
    pub end_level: Option<String>,
}

impl LevelRangeQuery {
    pub fn validate(&self, cap: Level) -> Result<LevelRange, LevelRangeError> {
        let start = parse_level(self.start_level.as_deref())?;
        let end = parse_level(self.end_level.as_deref())?;
        LevelRange::new(start, end, cap)
    }
}

/// Parses a raw level. Surrounding whitespace is ignored; anything else that
/// is not a plain integer is rejected.
pub fn parse_level(raw: Option<&str>) -> Result<i64, LevelRangeError> {
    raw.map(str::trim)
        .and_then(|raw| raw.parse::<i64>().ok())
        .ok_or(LevelRangeError::NotAnInteger)
}

/// Validates a single level in `1..=cap`.
pub fn validate_level(level: i64, cap: Level) -> Result<Level, LevelRangeError> {
    if level < 1 || level > i64::from(cap) {
        return Err(LevelRangeError::OutOfBounds { level, cap });
    }
    Ok(level as Level)
}
