//! Natal chart computation and salient-configuration extraction.

pub mod angles;
pub mod aspects;
pub mod bodies;
pub mod chart;
pub mod ephemeris;
pub mod patterns;
pub mod time;
pub mod validation;
pub mod vedic;
pub mod western;

pub use bodies::Body;
pub use chart::{BirthQuery, Chart, ChartEngine, ChartError};
pub use ephemeris::{Ephemeris, FixedEphemeris, SwissEphemerisAdapter};
pub use patterns::{dedup_highlighted, extract_strong_points, StrongPoint};
pub use time::{TimeResolver, TzfZoneFinder};
pub use validation::validate_chart;
