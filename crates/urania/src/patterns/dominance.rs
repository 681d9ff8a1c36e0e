//! Planet-strength dominance model.

use crate::bodies::Body;

/// Strongest member of `bodies` by [`Body::strength`]. Ties go to the body
/// listed first.
pub fn dominant_body(bodies: &[Body]) -> Option<Body> {
    bodies.iter().copied().fold(None, |best, body| match best {
        Some(current) if current.strength() >= body.strength() => Some(current),
        _ => Some(body),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dominance {
    pub dominant: Body,
    pub others: Vec<Body>,
}

impl Dominance {
    pub fn of(bodies: &[Body]) -> Option<Self> {
        let dominant = dominant_body(bodies)?;
        Some(Self {
            dominant,
            others: bodies.iter().copied().filter(|b| *b != dominant).collect(),
        })
    }

    /// e.g. "Saturne restreint et discipline Soleil, Lune".
    pub fn describe(&self) -> String {
        let others: Vec<&str> = self.others.iter().map(|b| b.name()).collect();
        format!(
            "{} {} {}",
            self.dominant,
            self.dominant.influence(),
            others.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturn_outranks_everything() {
        let bodies = [Body::Sun, Body::Saturn, Body::Mars];
        assert_eq!(dominant_body(&bodies), Some(Body::Saturn));
    }

    #[test]
    fn tie_keeps_first_listed() {
        assert_eq!(dominant_body(&[Body::Sun, Body::Uranus]), Some(Body::Sun));
        assert_eq!(dominant_body(&[Body::Uranus, Body::Sun]), Some(Body::Uranus));
    }

    #[test]
    fn empty_group_has_no_dominant() {
        assert_eq!(dominant_body(&[]), None);
        assert!(Dominance::of(&[]).is_none());
    }

    #[test]
    fn describes_effect_on_the_rest() {
        let d = Dominance::of(&[Body::Moon, Body::Pluto, Body::Venus]).unwrap();
        assert_eq!(d.describe(), "Pluton transforme en profondeur Lune, Vénus");
    }
}
