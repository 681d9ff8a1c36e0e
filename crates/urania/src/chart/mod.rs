//! Chart Assembler: resolved birth time to a full two-frame chart.

pub mod assembler;
pub mod interceptions;
pub mod query;
pub mod types;

pub use assembler::{ChartEngine, ChartError};
pub use interceptions::detect_interceptions;
pub use query::{BirthQuery, QueryError};
pub use types::{
    Chart, ChartPosition, Frame, HouseCusp, InterceptedSign, Interceptions, RulerRecord,
};
