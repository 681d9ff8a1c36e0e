//! Signs swallowed whole by a single quadrant house.

use crate::chart::types::{InterceptedSign, Interceptions};
use crate::western::{house_of, sign_of, Sign, SIGNS};

/// A sign is intercepted when no cusp falls inside it.
pub fn detect_interceptions(cusps: &[f64; 12]) -> Interceptions {
    let cusp_signs: Vec<Sign> = cusps.iter().map(|c| sign_of(*c).0).collect();

    let signs: Vec<InterceptedSign> = SIGNS
        .iter()
        .filter(|sign| !cusp_signs.contains(*sign))
        .map(|&sign| InterceptedSign {
            sign,
            house: house_of(sign.start() + 15.0, cusps),
        })
        .collect();

    let axes = signs
        .iter()
        .filter(|s| s.sign.index() < 6)
        .filter(|s| signs.iter().any(|o| o.sign == s.sign.opposite()))
        .map(|s| (s.sign, s.sign.opposite()))
        .collect();

    if !signs.is_empty() {
        log::debug!(
            "Intercepted signs: {:?}",
            signs.iter().map(|s| s.sign.name()).collect::<Vec<_>>()
        );
    }
    Interceptions { signs, axes }
}
