use crate::angles::{angular_distance, round2};
use crate::aspects::types::{Aspect, AspectKind, ASPECT_ORDER};
use crate::bodies::Body;

/// Any pair that involves the Ascendant gets at least this tolerance.
const ASCENDANT_MIN_ORB: f64 = 8.0;

/// Pairwise aspect detector.
#[derive(Debug, Clone)]
pub struct AspectCalculator {
    orbs: [f64; 5],
}

impl AspectCalculator {
    /// Create a calculator with the default orbs.
    pub fn new() -> Self {
        Self {
            orbs: ASPECT_ORDER.map(AspectKind::default_orb),
        }
    }

    /// Override the maximum orb of one aspect kind.
    pub fn with_orb(mut self, kind: AspectKind, orb: f64) -> Self {
        if let Some(i) = ASPECT_ORDER.iter().position(|k| *k == kind) {
            self.orbs[i] = orb;
        }
        self
    }

    pub fn tolerance(&self, kind: AspectKind, body1: Body, body2: Body) -> f64 {
        let i = ASPECT_ORDER.iter().position(|k| *k == kind).unwrap_or(0);
        let orb = self.orbs[i];
        if body1.is_angle() || body2.is_angle() {
            orb.max(ASCENDANT_MIN_ORB)
        } else {
            orb
        }
    }

    /// Every aspect among `positions`, sorted by ascending orb.
    ///
    /// The Rahu/Ketu pair is skipped since it is an exact opposition by
    /// construction. The result does not depend on input order.
    pub fn detect(&self, positions: &[(Body, f64)]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for (i, &(b1, lon1)) in positions.iter().enumerate() {
            for &(b2, lon2) in &positions[i + 1..] {
                if b1 == b2 || (b1.is_node() && b2.is_node()) {
                    continue;
                }
                let (first, second) = if b1 < b2 {
                    ((b1, lon1), (b2, lon2))
                } else {
                    ((b2, lon2), (b1, lon1))
                };
                if let Some(aspect) = self.calculate_aspect(first, second) {
                    aspects.push(aspect);
                }
            }
        }
        aspects.sort_by(|a, b| {
            a.orb
                .total_cmp(&b.orb)
                .then(a.body1.cmp(&b.body1))
                .then(a.body2.cmp(&b.body2))
        });
        aspects
    }

    /// First aspect kind, in detection order, whose tolerance covers the pair.
    pub fn calculate_aspect(
        &self,
        (b1, lon1): (Body, f64),
        (b2, lon2): (Body, f64),
    ) -> Option<Aspect> {
        let separation = angular_distance(lon1, lon2);
        ASPECT_ORDER.iter().find_map(|&kind| {
            let orb = (separation - kind.angle()).abs();
            (orb <= self.tolerance(kind, b1, b2)).then(|| Aspect {
                body1: b1,
                body2: b2,
                kind,
                separation: round2(separation),
                orb: round2(orb),
                exact_angle: kind.angle(),
            })
        })
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect aspects with the default orbs.
pub fn detect_aspects(positions: &[(Body, f64)]) -> Vec<Aspect> {
    AspectCalculator::new().detect(positions)
}
