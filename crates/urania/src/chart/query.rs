use crate::ephemeris::GeoLocation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum QueryError {
    #[error("Birth date is required")]
    MissingDate,
    #[error("Latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("Longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("Timezone id must not be empty")]
    EmptyTimezone,
}

/// Birth data for one chart.
///
/// Built through [`BirthQuery::new`] and the `with_*` methods, which reject
/// malformed fields before any computation starts. When `utc` is set it wins
/// over every timezone derived from the place or coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthQuery {
    pub name: String,
    pub date: String,
    pub time: String,
    pub place: String,
    pub coordinates: Option<GeoLocation>,
    pub timezone: Option<String>,
    pub utc: Option<DateTime<Utc>>,
}

impl BirthQuery {
    /// `time` may be empty when `date` already carries the time of day.
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        place: impl Into<String>,
    ) -> Result<Self, QueryError> {
        let date = date.into();
        if date.trim().is_empty() {
            return Err(QueryError::MissingDate);
        }
        Ok(Self {
            name: name.into(),
            date,
            time: time.into(),
            place: place.into(),
            coordinates: None,
            timezone: None,
            utc: None,
        })
    }

    pub fn with_coordinates(mut self, lat: f64, lon: f64) -> Result<Self, QueryError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(QueryError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(QueryError::LongitudeOutOfRange(lon));
        }
        self.coordinates = Some(GeoLocation { lat, lon });
        Ok(self)
    }

    pub fn with_timezone(mut self, tzid: impl Into<String>) -> Result<Self, QueryError> {
        let tzid = tzid.into();
        if tzid.trim().is_empty() {
            return Err(QueryError::EmptyTimezone);
        }
        self.timezone = Some(tzid.trim().to_string());
        Ok(self)
    }

    pub fn with_utc(mut self, utc: DateTime<Utc>) -> Self {
        self.utc = Some(utc);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_is_required() {
        assert_eq!(
            BirthQuery::new("Ana", "  ", "10:00", "Lyon").unwrap_err(),
            QueryError::MissingDate
        );
    }

    #[test]
    fn coordinates_are_range_checked() {
        let q = BirthQuery::new("Ana", "1990-01-01", "10:00", "Lyon").unwrap();
        assert_eq!(
            q.clone().with_coordinates(91.0, 0.0).unwrap_err(),
            QueryError::LatitudeOutOfRange(91.0)
        );
        assert_eq!(
            q.clone().with_coordinates(0.0, -181.0).unwrap_err(),
            QueryError::LongitudeOutOfRange(-181.0)
        );
        let q = q.with_coordinates(45.76, 4.84).unwrap();
        assert_eq!(q.coordinates, Some(GeoLocation { lat: 45.76, lon: 4.84 }));
    }

    #[test]
    fn blank_timezone_is_rejected() {
        let q = BirthQuery::new("Ana", "1990-01-01", "10:00", "Lyon").unwrap();
        assert_eq!(q.clone().with_timezone("").unwrap_err(), QueryError::EmptyTimezone);
        assert_eq!(
            q.with_timezone(" Europe/Paris ").unwrap().timezone.as_deref(),
            Some("Europe/Paris")
        );
    }
}
