//! Sign rulers for Western astrology.
//!
//! Only the traditional (seven-planet) rulerships are used: the ascendant
//! ruler record and mutual receptions both rely on them.

use crate::bodies::Body;
use crate::western::signs::Sign;

const TRADITIONAL_RULERS: [Body; 12] = [
    Body::Mars,    // Aries
    Body::Venus,   // Taurus
    Body::Mercury, // Gemini
    Body::Moon,    // Cancer
    Body::Sun,     // Leo
    Body::Mercury, // Virgo
    Body::Venus,   // Libra
    Body::Mars,    // Scorpio
    Body::Jupiter, // Sagittarius
    Body::Saturn,  // Capricorn
    Body::Saturn,  // Aquarius
    Body::Jupiter, // Pisces
];

/// Traditional ruler of a sign.
pub fn ruling_planet_of(sign: Sign) -> Body {
    TRADITIONAL_RULERS[sign.index()]
}

/// Signs ruled by `body`; empty for bodies without a traditional domicile.
pub fn signs_ruled_by(body: Body) -> Vec<Sign> {
    crate::western::signs::SIGNS
        .iter()
        .copied()
        .filter(|s| ruling_planet_of(*s) == body)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traditional_rulers() {
        assert_eq!(ruling_planet_of(Sign::Aries), Body::Mars);
        assert_eq!(ruling_planet_of(Sign::Cancer), Body::Moon);
        assert_eq!(ruling_planet_of(Sign::Leo), Body::Sun);
        assert_eq!(ruling_planet_of(Sign::Scorpio), Body::Mars);
        assert_eq!(ruling_planet_of(Sign::Aquarius), Body::Saturn);
        assert_eq!(ruling_planet_of(Sign::Pisces), Body::Jupiter);
    }

    #[test]
    fn test_signs_ruled_by() {
        assert_eq!(signs_ruled_by(Body::Sun), vec![Sign::Leo]);
        assert_eq!(signs_ruled_by(Body::Mercury), vec![Sign::Gemini, Sign::Virgo]);
        assert!(signs_ruled_by(Body::Pluto).is_empty());
    }
}
