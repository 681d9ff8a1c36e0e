use crate::bodies::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five Ptolemaic aspects. Declaration order is the detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    #[serde(rename = "conjonction")]
    Conjunction,
    #[serde(rename = "opposition")]
    Opposition,
    #[serde(rename = "trigone")]
    Trine,
    #[serde(rename = "carré")]
    Square,
    #[serde(rename = "sextile")]
    Sextile,
}

/// Detection order: the first kind whose tolerance fits wins.
pub const ASPECT_ORDER: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
];

impl AspectKind {
    pub fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Trine => 120.0,
            AspectKind::Square => 90.0,
            AspectKind::Sextile => 60.0,
        }
    }

    /// Default maximum orb in degrees.
    pub fn default_orb(self) -> f64 {
        match self {
            AspectKind::Conjunction => 10.0,
            AspectKind::Opposition | AspectKind::Trine => 8.0,
            AspectKind::Square | AspectKind::Sextile => 6.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjonction",
            AspectKind::Opposition => "opposition",
            AspectKind::Trine => "trigone",
            AspectKind::Square => "carré",
            AspectKind::Sextile => "sextile",
        }
    }

    /// Conjunction, opposition and square.
    pub fn is_major(self) -> bool {
        matches!(
            self,
            AspectKind::Conjunction | AspectKind::Opposition | AspectKind::Square
        )
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One detected aspect. `body1` precedes `body2` in canonical body order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub body1: Body,
    pub body2: Body,
    pub kind: AspectKind,
    /// Shortest arc between the two bodies, in [0, 180].
    pub separation: f64,
    pub orb: f64,
    pub exact_angle: f64,
}

impl Aspect {
    pub fn involves(&self, body: Body) -> bool {
        self.body1 == body || self.body2 == body
    }

    /// The partner of `body` in this aspect.
    pub fn other(&self, body: Body) -> Option<Body> {
        if self.body1 == body {
            Some(self.body2)
        } else if self.body2 == body {
            Some(self.body1)
        } else {
            None
        }
    }

    pub fn is_between(&self, a: Body, b: Body) -> bool {
        (self.body1 == a && self.body2 == b) || (self.body1 == b && self.body2 == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_order_is_fixed() {
        let angles: Vec<f64> = ASPECT_ORDER.iter().map(|k| k.angle()).collect();
        assert_eq!(angles, vec![0.0, 180.0, 120.0, 90.0, 60.0]);
    }

    #[test]
    fn french_labels_serialize() {
        assert_eq!(serde_json::to_string(&AspectKind::Square).unwrap(), "\"carré\"");
        assert_eq!(AspectKind::Trine.to_string(), "trigone");
    }

    #[test]
    fn partner_lookup() {
        let aspect = Aspect {
            body1: Body::Sun,
            body2: Body::Moon,
            kind: AspectKind::Conjunction,
            separation: 0.0,
            orb: 0.0,
            exact_angle: 0.0,
        };
        assert_eq!(aspect.other(Body::Moon), Some(Body::Sun));
        assert_eq!(aspect.other(Body::Mars), None);
        assert!(aspect.is_between(Body::Moon, Body::Sun));
    }
}
