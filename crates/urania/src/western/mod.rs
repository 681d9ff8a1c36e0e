pub mod dignities;
pub mod houses;
pub mod rulers;
pub mod signs;

pub use dignities::{dignity_of, Dignity};
pub use houses::house_of;
pub use rulers::{ruling_planet_of, signs_ruled_by};
pub use signs::{sign_of, Element, Modality, Sign, ELEMENTS, MODALITIES, SIGNS};
