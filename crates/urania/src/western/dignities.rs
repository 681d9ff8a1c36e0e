//! Essential dignities for Western astrology.
//!
//! Domicile, exaltation, exile and fall per (body, sign). Outer planets use
//! their modern rulerships; exaltations follow the traditional list plus
//! Pluto in Aries.

use crate::bodies::Body;
use crate::western::signs::Sign;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dignity {
    Domicile,
    Exaltation,
    Exile,
    Fall,
    Neutral,
}

impl Dignity {
    /// Informational strength score; not thresholded anywhere.
    pub fn score(self) -> i8 {
        match self {
            Dignity::Domicile => 2,
            Dignity::Exaltation => 1,
            Dignity::Neutral => 0,
            Dignity::Fall => -1,
            Dignity::Exile => -2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dignity::Domicile => "en domicile",
            Dignity::Exaltation => "en exaltation",
            Dignity::Exile => "en exil",
            Dignity::Fall => "en chute",
            Dignity::Neutral => "pérégrin",
        }
    }
}

impl fmt::Display for Dignity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

struct DignityRow {
    body: Body,
    domicile: &'static [Sign],
    exaltation: &'static [Sign],
    exile: &'static [Sign],
    fall: &'static [Sign],
}

use Sign::*;

const DIGNITY_TABLE: &[DignityRow] = &[
    DignityRow { body: Body::Sun, domicile: &[Leo], exaltation: &[Aries], exile: &[Aquarius], fall: &[Libra] },
    DignityRow { body: Body::Moon, domicile: &[Cancer], exaltation: &[Taurus], exile: &[Capricorn], fall: &[Scorpio] },
    DignityRow { body: Body::Mercury, domicile: &[Gemini, Virgo], exaltation: &[Virgo], exile: &[Sagittarius, Pisces], fall: &[Pisces] },
    DignityRow { body: Body::Venus, domicile: &[Taurus, Libra], exaltation: &[Pisces], exile: &[Aries, Scorpio], fall: &[Virgo] },
    DignityRow { body: Body::Mars, domicile: &[Aries, Scorpio], exaltation: &[Capricorn], exile: &[Libra, Taurus], fall: &[Cancer] },
    DignityRow { body: Body::Jupiter, domicile: &[Sagittarius, Pisces], exaltation: &[Cancer], exile: &[Gemini, Virgo], fall: &[Capricorn] },
    DignityRow { body: Body::Saturn, domicile: &[Capricorn, Aquarius], exaltation: &[Libra], exile: &[Cancer, Leo], fall: &[Aries] },
    DignityRow { body: Body::Uranus, domicile: &[Aquarius], exaltation: &[], exile: &[Leo], fall: &[] },
    DignityRow { body: Body::Neptune, domicile: &[Pisces], exaltation: &[], exile: &[Virgo], fall: &[] },
    DignityRow { body: Body::Pluto, domicile: &[Scorpio], exaltation: &[Aries], exile: &[Taurus], fall: &[Libra] },
];

/// Dignity of `body` in `sign`. Where a body holds two states in the same
/// sign (Mercury in Virgo, Mercury in Pisces) the first of domicile,
/// exaltation, exile, fall wins. Bodies absent from the table are neutral.
pub fn dignity_of(body: Body, sign: Sign) -> Dignity {
    let Some(row) = DIGNITY_TABLE.iter().find(|row| row.body == body) else {
        return Dignity::Neutral;
    };
    if row.domicile.contains(&sign) {
        Dignity::Domicile
    } else if row.exaltation.contains(&sign) {
        Dignity::Exaltation
    } else if row.exile.contains(&sign) {
        Dignity::Exile
    } else if row.fall.contains(&sign) {
        Dignity::Fall
    } else {
        Dignity::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_dignities_sun() {
        assert_eq!(dignity_of(Body::Sun, Leo), Dignity::Domicile);
        assert_eq!(dignity_of(Body::Sun, Aries), Dignity::Exaltation);
        assert_eq!(dignity_of(Body::Sun, Aquarius), Dignity::Exile);
        assert_eq!(dignity_of(Body::Sun, Libra), Dignity::Fall);
        assert_eq!(dignity_of(Body::Sun, Gemini), Dignity::Neutral);
    }

    #[test]
    fn test_get_dignities_moon() {
        assert_eq!(dignity_of(Body::Moon, Cancer), Dignity::Domicile);
        assert_eq!(dignity_of(Body::Moon, Scorpio), Dignity::Fall);
    }

    #[test]
    fn double_states_prefer_dignity_order() {
        assert_eq!(dignity_of(Body::Mercury, Virgo), Dignity::Domicile);
        assert_eq!(dignity_of(Body::Mercury, Pisces), Dignity::Exile);
    }

    #[test]
    fn points_without_table_are_neutral() {
        assert_eq!(dignity_of(Body::Chiron, Leo), Dignity::Neutral);
        assert_eq!(dignity_of(Body::Rahu, Taurus), Dignity::Neutral);
    }

    #[test]
    fn scores() {
        assert_eq!(Dignity::Domicile.score(), 2);
        assert_eq!(Dignity::Exaltation.score(), 1);
        assert_eq!(Dignity::Exile.score(), -2);
        assert_eq!(Dignity::Fall.score(), -1);
    }
}
