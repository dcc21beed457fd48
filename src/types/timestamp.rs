use chrono::{DateTime, FixedOffset};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// The layout every timestamp within an API response follows.
///
/// For example, `Mon, 02 Jan 2006 15:04:05 -0700`.
pub const TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// A point in time as the API encodes it.
///
/// The API frequently returns `null` for timestamps that have not happened yet
/// (e.g. the `end_time` of a ringing call), so a timestamp may be unset.
/// Unset timestamps encode back to JSON `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Timestamp(Option<DateTime<FixedOffset>>);

impl Timestamp {
    /// Wraps the given instant.
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self(Some(instant))
    }

    /// A timestamp with no value.
    pub const fn unset() -> Self {
        Self(None)
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        self.0.as_ref()
    }

    /// Parses a timestamp in [`TIMESTAMP_FORMAT`].
    ///
    /// Empty input, or the literal `null` (optionally still wrapped in its
    /// JSON quotes), yields an unset timestamp rather than an error.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        let value = value.trim().trim_matches('"');
        if value.is_empty() || value == "null" {
            return Ok(Self::unset());
        }

        DateTime::parse_from_str(value, TIMESTAMP_FORMAT).map(Self::new)
    }

    /// Formats this timestamp in [`TIMESTAMP_FORMAT`], if set.
    pub fn format(&self) -> Option<String> {
        self.0
            .map(|instant| instant.format(TIMESTAMP_FORMAT).to_string())
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        Self::new(instant)
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(instant) => write!(f, "{}", instant.format(TIMESTAMP_FORMAT)),
            None => Ok(()),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(instant) => serializer.collect_str(&instant.format(TIMESTAMP_FORMAT)),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Both a JSON `null` and a JSON string are acceptable here.
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => Self::parse(&raw).map_err(de::Error::custom),
            None => Ok(Self::unset()),
        }
    }
}
