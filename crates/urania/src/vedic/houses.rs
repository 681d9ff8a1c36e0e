//! Whole-sign houses anchored to the sidereal ascendant sign.

use crate::western::signs::Sign;

/// Whole-sign house of a body in `sign` for an ascendant in `ascendant_sign`.
pub fn sidereal_house_of(sign: Sign, ascendant_sign: Sign) -> u8 {
    ((sign.index() + 12 - ascendant_sign.index()) % 12 + 1) as u8
}

/// Signs occupying houses 1..=12, starting with the ascendant sign.
pub fn whole_sign_houses(ascendant_sign: Sign) -> [Sign; 12] {
    let mut houses = [ascendant_sign; 12];
    for (i, slot) in houses.iter_mut().enumerate() {
        *slot = Sign::from_index(ascendant_sign.index() + i);
    }
    houses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::western::signs::SIGNS;

    #[test]
    fn ascendant_sign_is_first_house() {
        for sign in SIGNS {
            assert_eq!(sidereal_house_of(sign, sign), 1);
        }
    }

    #[test]
    fn offsets_wrap() {
        assert_eq!(sidereal_house_of(Sign::Aries, Sign::Pisces), 2);
        assert_eq!(sidereal_house_of(Sign::Aquarius, Sign::Pisces), 12);
        assert_eq!(sidereal_house_of(Sign::Libra, Sign::Aries), 7);
    }

    #[test]
    fn houses_follow_zodiac_order() {
        let houses = whole_sign_houses(Sign::Sagittarius);
        assert_eq!(houses[0], Sign::Sagittarius);
        assert_eq!(houses[1], Sign::Capricorn);
        assert_eq!(houses[11], Sign::Scorpio);
    }
}
