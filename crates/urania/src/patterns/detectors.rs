//! Independent detectors. Each one reads only the parts of a chart it needs
//! and contributes nothing when those parts are missing.

use crate::angles::{angular_distance, round2};
use crate::aspects::{Aspect, AspectKind};
use crate::bodies::{Body, CLASSICAL_BODIES};
use crate::chart::ChartPosition;
use crate::ephemeris::ChartAngles;
use crate::patterns::dominance::dominant_body;
use crate::patterns::types::{
    AxisPoint, BalanceGroup, ClusterKind, ClusterScope, Figure, SolarState, StrongPoint,
};
use crate::western::{dignity_of, ruling_planet_of, Dignity, ELEMENTS, MODALITIES};
use std::collections::BTreeMap;
use urania_config::PatternThresholds;

pub type Positions = BTreeMap<Body, ChartPosition>;

const ANGULAR_HOUSES: [u8; 4] = [1, 4, 7, 10];
const BALANCE_DOMINANCE: usize = 3;
const SOLAR_COMPANIONS: [Body; 5] = [
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

pub fn angular_placements(positions: &Positions) -> Vec<StrongPoint> {
    positions
        .iter()
        .filter(|(body, _)| !body.is_angle() && !body.is_node())
        .filter(|(_, p)| ANGULAR_HOUSES.contains(&p.house))
        .map(|(body, p)| StrongPoint::AngularPlacement {
            body: *body,
            house: p.house,
        })
        .collect()
}

/// Classify a candidate group, or `None` when the policy rejects it.
pub fn classify_cluster(bodies: &[Body], min_size: usize) -> Option<ClusterKind> {
    if bodies.len() < min_size {
        return None;
    }
    let personal = bodies.iter().filter(|b| b.is_personal()).count();
    let social = bodies.iter().filter(|b| b.is_social()).count();
    match (personal, social) {
        (p, _) if p >= 3 => Some(ClusterKind::StrongPersonal),
        (2, _) => Some(ClusterKind::Personal),
        (1, s) if s >= 1 => Some(ClusterKind::Mixed),
        (0, s) if s >= 2 => Some(ClusterKind::Generational),
        _ => None,
    }
}

/// Classical bodies sharing a sign, then sharing a house.
pub fn clusters(positions: &Positions, thresholds: &PatternThresholds) -> Vec<StrongPoint> {
    let mut by_sign: BTreeMap<_, Vec<Body>> = BTreeMap::new();
    let mut by_house: BTreeMap<u8, Vec<Body>> = BTreeMap::new();
    for body in CLASSICAL_BODIES {
        if let Some(p) = positions.get(&body) {
            by_sign.entry(p.sign).or_default().push(body);
            by_house.entry(p.house).or_default().push(body);
        }
    }

    let candidates = by_sign
        .into_iter()
        .map(|(sign, bodies)| (ClusterScope::Sign(sign), bodies))
        .chain(
            by_house
                .into_iter()
                .map(|(house, bodies)| (ClusterScope::House(house), bodies)),
        );

    let mut points = Vec::new();
    for (scope, bodies) in candidates {
        if bodies.len() < thresholds.cluster_min_size {
            continue;
        }
        let (Some(cluster), Some(dominant)) = (
            classify_cluster(&bodies, thresholds.cluster_min_size),
            dominant_body(&bodies),
        ) else {
            log::debug!("Rejected cluster candidate in {}: {:?}", scope, bodies);
            continue;
        };
        points.push(StrongPoint::Cluster {
            scope,
            cluster,
            bodies,
            dominant,
        });
    }
    points
}

/// Non-neutral dignities of the personal bodies and of the ascendant ruler.
pub fn dignities(positions: &Positions, ascendant_ruler: Option<Body>) -> Vec<StrongPoint> {
    let personal = CLASSICAL_BODIES
        .iter()
        .copied()
        .filter(|b| b.is_personal())
        .map(|b| (b, false));
    let ruler = ascendant_ruler.map(|b| (b, true));

    personal
        .chain(ruler)
        .filter_map(|(body, ascendant_ruler)| {
            let p = positions.get(&body)?;
            let dignity = dignity_of(body, p.sign);
            (dignity != Dignity::Neutral).then(|| StrongPoint::Dignity {
                body,
                sign: p.sign,
                dignity,
                score: dignity.score(),
                ascendant_ruler,
            })
        })
        .collect()
}

fn luminary_priority(kind: AspectKind) -> u8 {
    match kind {
        AspectKind::Conjunction => 0,
        AspectKind::Square => 1,
        AspectKind::Opposition => 2,
        AspectKind::Trine => 3,
        AspectKind::Sextile => 4,
    }
}

/// Sun and Moon contacts under the stricter luminary orbs, by type then orb.
pub fn luminary_aspects(aspects: &[Aspect], thresholds: &PatternThresholds) -> Vec<StrongPoint> {
    let mut kept: Vec<&Aspect> = aspects
        .iter()
        .filter(|a| a.involves(Body::Sun) || a.involves(Body::Moon))
        .filter(|a| {
            let limit = if a.kind.is_major() {
                thresholds.luminary_major_orb
            } else {
                thresholds.luminary_minor_orb
            };
            a.orb <= limit
        })
        .collect();
    kept.sort_by(|a, b| {
        luminary_priority(a.kind)
            .cmp(&luminary_priority(b.kind))
            .then(a.orb.total_cmp(&b.orb))
    });

    kept.into_iter()
        .map(|a| {
            let luminary = if a.body1 == Body::Sun || a.body1 == Body::Moon {
                a.body1
            } else {
                a.body2
            };
            StrongPoint::LuminaryAspect {
                luminary,
                other: a.other(luminary).unwrap_or(a.body2),
                aspect: a.kind,
                orb: a.orb,
            }
        })
        .collect()
}

/// Tight conjunctions, ranked by the dominance model.
pub fn conjunction_dominance(
    aspects: &[Aspect],
    thresholds: &PatternThresholds,
) -> Vec<StrongPoint> {
    aspects
        .iter()
        .filter(|a| a.kind == AspectKind::Conjunction && a.orb <= thresholds.conjunction_orb)
        .filter(|a| !a.body1.is_angle() && !a.body2.is_angle())
        .filter_map(|a| {
            let dominant = dominant_body(&[a.body1, a.body2])?;
            Some(StrongPoint::ConjunctionDominance {
                dominant,
                other: a.other(dominant)?,
                orb: a.orb,
            })
        })
        .collect()
}

/// Bodies within `angle_orb` of one of the four angles.
pub fn cardinal_axes(
    positions: &Positions,
    angles: &ChartAngles,
    thresholds: &PatternThresholds,
) -> Vec<StrongPoint> {
    let axes = [
        (AxisPoint::Ascendant, angles.asc),
        (AxisPoint::Midheaven, angles.mc),
        (AxisPoint::Descendant, angles.desc),
        (AxisPoint::ImumCoeli, angles.ic),
    ];
    let mut points = Vec::new();
    for (body, p) in positions {
        for (axis, degree) in axes {
            if body.is_angle() && axis == AxisPoint::Ascendant {
                continue;
            }
            let gap = angular_distance(p.longitude, degree);
            if gap <= thresholds.angle_orb {
                points.push(StrongPoint::CardinalAxis {
                    body: *body,
                    axis,
                    gap: round2(gap),
                });
            }
        }
    }
    points
}

/// Count-based T-square / grand-cross hint. Does not check that the aspects
/// close into an actual figure.
pub fn configurations(aspects: &[Aspect], thresholds: &PatternThresholds) -> Vec<StrongPoint> {
    let tight = |kind: AspectKind| {
        aspects
            .iter()
            .filter(|a| a.kind == kind && a.orb <= thresholds.configuration_orb)
            .count()
    };
    let squares = tight(AspectKind::Square);
    let oppositions = tight(AspectKind::Opposition);

    let figure = if squares >= 4 && oppositions >= 2 {
        Some(Figure::GrandCross)
    } else if squares >= 2 && oppositions >= 1 {
        Some(Figure::TSquare)
    } else {
        None
    };
    figure
        .map(|figure| StrongPoint::Configuration {
            figure,
            squares,
            oppositions,
        })
        .into_iter()
        .collect()
}

/// Element and modality counts over the classical bodies.
pub fn balance(positions: &Positions) -> Vec<StrongPoint> {
    let signs: Vec<_> = CLASSICAL_BODIES
        .iter()
        .filter_map(|b| positions.get(b).map(|p| p.sign))
        .collect();
    if signs.is_empty() {
        return Vec::new();
    }

    let elements = ELEMENTS.iter().map(|e| {
        let count = signs.iter().filter(|s| s.element() == *e).count();
        (BalanceGroup::Element(*e), count)
    });
    let modalities = MODALITIES.iter().map(|m| {
        let count = signs.iter().filter(|s| s.modality() == *m).count();
        (BalanceGroup::Modality(*m), count)
    });

    elements
        .chain(modalities)
        .filter(|(_, count)| *count == 0 || *count >= BALANCE_DOMINANCE)
        .map(|(group, count)| StrongPoint::Balance { group, count })
        .collect()
}

/// Cazimi and combustion of the visible planets conjunct the Sun.
pub fn solar_proximity(aspects: &[Aspect], thresholds: &PatternThresholds) -> Vec<StrongPoint> {
    aspects
        .iter()
        .filter(|a| a.kind == AspectKind::Conjunction && a.involves(Body::Sun))
        .filter_map(|a| {
            let body = a.other(Body::Sun)?;
            if !SOLAR_COMPANIONS.contains(&body) {
                return None;
            }
            let state = if a.orb <= thresholds.cazimi_orb {
                SolarState::Cazimi
            } else if a.orb <= thresholds.combustion_orb {
                SolarState::Combustion
            } else {
                return None;
            };
            Some(StrongPoint::SolarProximity {
                body,
                state,
                orb: a.orb,
            })
        })
        .collect()
}

/// Classical pairs each placed in the sign the other rules.
pub fn mutual_receptions(positions: &Positions) -> Vec<StrongPoint> {
    let placed: Vec<_> = CLASSICAL_BODIES
        .iter()
        .filter_map(|b| positions.get(b).map(|p| (*b, p.sign)))
        .collect();
    let mut points = Vec::new();
    for (i, &(first, first_sign)) in placed.iter().enumerate() {
        for &(second, second_sign) in &placed[i + 1..] {
            if ruling_planet_of(first_sign) == second && ruling_planet_of(second_sign) == first {
                points.push(StrongPoint::MutualReception {
                    first,
                    first_sign,
                    second,
                    second_sign,
                });
            }
        }
    }
    points
}

/// Retrograde bodies. The mean node always moves backwards, so nodes are
/// left out.
pub fn retrogrades(positions: &Positions) -> Vec<StrongPoint> {
    positions
        .iter()
        .filter(|(body, p)| p.retrograde && !body.is_node() && !body.is_angle())
        .map(|(body, _)| StrongPoint::Retrograde { body: *body })
        .collect()
}

/// Lunar and ascendant mansions from the sidereal frame.
pub fn nakshatra_notes(sidereal: &Positions) -> Vec<StrongPoint> {
    [Body::Moon, Body::Ascendant]
        .iter()
        .filter_map(|body| {
            let n = sidereal.get(body)?.nakshatra.as_ref()?;
            Some(StrongPoint::NakshatraNote {
                body: *body,
                nakshatra: n.name.clone(),
                pada: n.pada,
            })
        })
        .collect()
}
