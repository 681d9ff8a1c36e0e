//! Pattern/Strength Extractor.
//!
//! Runs every detector over an assembled [`Chart`] and concatenates their
//! output in a fixed order. Nothing is deduplicated across categories here;
//! [`dedup_highlighted`] is offered for presentation layers.

pub mod detectors;
pub mod dominance;
pub mod types;

pub use dominance::{dominant_body, Dominance};
pub use types::{
    AxisPoint, BalanceGroup, ClusterKind, ClusterScope, Figure, SolarState, StrongPoint,
    HIGHLIGHT,
};

use crate::chart::Chart;
use std::collections::HashSet;
use urania_config::PatternThresholds;

pub fn extract_strong_points(chart: &Chart, thresholds: &PatternThresholds) -> Vec<StrongPoint> {
    let mut points = Vec::new();
    points.extend(detectors::angular_placements(&chart.tropical));
    points.extend(detectors::clusters(&chart.tropical, thresholds));
    points.extend(detectors::dignities(
        &chart.tropical,
        Some(chart.tropical_ruler.ruler),
    ));
    points.extend(detectors::luminary_aspects(&chart.aspects, thresholds));
    points.extend(detectors::conjunction_dominance(&chart.aspects, thresholds));
    points.extend(detectors::cardinal_axes(
        &chart.tropical,
        &chart.angles,
        thresholds,
    ));
    points.extend(detectors::configurations(&chart.aspects, thresholds));
    points.extend(detectors::balance(&chart.tropical));
    points.extend(detectors::solar_proximity(&chart.aspects, thresholds));
    points.extend(detectors::mutual_receptions(&chart.tropical));
    points.extend(detectors::retrogrades(&chart.tropical));
    points.extend(detectors::nakshatra_notes(&chart.sidereal));
    points
}

/// Unique sentences, highlighted ones first, each group sorted.
pub fn dedup_highlighted(points: &[StrongPoint]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut sentences: Vec<String> = points
        .iter()
        .map(StrongPoint::sentence)
        .filter(|s| seen.insert(s.clone()))
        .collect();
    sentences.sort_by(|a, b| {
        (!a.starts_with(HIGHLIGHT), a.as_str()).cmp(&(!b.starts_with(HIGHLIGHT), b.as_str()))
    });
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::Body;

    #[test]
    fn highlighted_first_and_unique() {
        let points = vec![
            StrongPoint::Retrograde { body: Body::Saturn },
            StrongPoint::AngularPlacement {
                body: Body::Mars,
                house: 10,
            },
            StrongPoint::SolarProximity {
                body: Body::Mercury,
                state: SolarState::Cazimi,
                orb: 0.05,
            },
            StrongPoint::Retrograde { body: Body::Saturn },
        ];
        let sentences = dedup_highlighted(&points);
        assert_eq!(
            sentences,
            vec![
                "★ Cazimi : Mercure au cœur du Soleil (orbe 0.05°)",
                "Mars en maison angulaire (10)",
                "Saturne rétrograde",
            ]
        );
    }
}
