pub mod houses;
pub mod nakshatra;

pub use houses::{sidereal_house_of, whole_sign_houses};
pub use nakshatra::{nakshatra_of, NakshatraPlacement, NAKSHATRA_SEGMENT_SIZE, PADA_SIZE};
