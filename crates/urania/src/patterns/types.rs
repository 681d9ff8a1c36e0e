use crate::aspects::AspectKind;
use crate::bodies::Body;
use crate::patterns::dominance::Dominance;
use crate::western::{Dignity, Element, Modality, Sign};
use serde::Serialize;
use std::fmt;

/// Prefix marking the observations a reader should see first.
pub const HIGHLIGHT: &str = "★";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterKind {
    /// Three or more personal bodies.
    StrongPersonal,
    Personal,
    /// One personal body with Jupiter or Saturn.
    Mixed,
    Generational,
}

impl ClusterKind {
    pub fn label(self) -> &'static str {
        match self {
            ClusterKind::StrongPersonal => "amas personnel fort",
            ClusterKind::Personal => "amas personnel",
            ClusterKind::Mixed => "amas mixte",
            ClusterKind::Generational => "amas générationnel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "by", content = "value", rename_all = "snake_case")]
pub enum ClusterScope {
    Sign(Sign),
    House(u8),
}

impl fmt::Display for ClusterScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterScope::Sign(sign) => write!(f, "{}", sign),
            ClusterScope::House(house) => write!(f, "maison {}", house),
        }
    }
}

/// The four cardinal points of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisPoint {
    Ascendant,
    Midheaven,
    Descendant,
    ImumCoeli,
}

impl AxisPoint {
    pub fn name(self) -> &'static str {
        match self {
            AxisPoint::Ascendant => "Ascendant",
            AxisPoint::Midheaven => "Milieu du Ciel",
            AxisPoint::Descendant => "Descendant",
            AxisPoint::ImumCoeli => "Fond du Ciel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Figure {
    TSquare,
    GrandCross,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "by", content = "value", rename_all = "snake_case")]
pub enum BalanceGroup {
    Element(Element),
    Modality(Modality),
}

impl fmt::Display for BalanceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceGroup::Element(e) => write!(f, "de l'élément {}", e.name()),
            BalanceGroup::Modality(m) => write!(f, "du mode {}", m.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolarState {
    Cazimi,
    Combustion,
}

/// One notable configuration of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrongPoint {
    AngularPlacement {
        body: Body,
        house: u8,
    },
    Cluster {
        scope: ClusterScope,
        cluster: ClusterKind,
        bodies: Vec<Body>,
        dominant: Body,
    },
    Dignity {
        body: Body,
        sign: Sign,
        dignity: Dignity,
        score: i8,
        ascendant_ruler: bool,
    },
    LuminaryAspect {
        luminary: Body,
        other: Body,
        aspect: AspectKind,
        orb: f64,
    },
    ConjunctionDominance {
        dominant: Body,
        other: Body,
        orb: f64,
    },
    CardinalAxis {
        body: Body,
        axis: AxisPoint,
        gap: f64,
    },
    Configuration {
        figure: Figure,
        squares: usize,
        oppositions: usize,
    },
    Balance {
        group: BalanceGroup,
        count: usize,
    },
    SolarProximity {
        body: Body,
        state: SolarState,
        orb: f64,
    },
    MutualReception {
        first: Body,
        first_sign: Sign,
        second: Body,
        second_sign: Sign,
    },
    Retrograde {
        body: Body,
    },
    NakshatraNote {
        body: Body,
        nakshatra: String,
        pada: u8,
    },
}

impl StrongPoint {
    pub fn is_highlighted(&self) -> bool {
        match self {
            StrongPoint::Cluster { cluster, .. } => *cluster == ClusterKind::StrongPersonal,
            StrongPoint::SolarProximity { state, .. } => *state == SolarState::Cazimi,
            StrongPoint::CardinalAxis { gap, .. } => *gap <= 1.0,
            _ => false,
        }
    }

    /// Human-readable rendering, highlight marker included.
    pub fn sentence(&self) -> String {
        let text = self.describe();
        if self.is_highlighted() {
            format!("{} {}", HIGHLIGHT, text)
        } else {
            text
        }
    }

    fn describe(&self) -> String {
        match self {
            StrongPoint::AngularPlacement { body, house } => {
                format!("{} en maison angulaire ({})", body, house)
            }
            StrongPoint::Cluster {
                scope,
                cluster,
                bodies,
                dominant,
            } => {
                let dominance = Dominance {
                    dominant: *dominant,
                    others: bodies.iter().copied().filter(|b| b != dominant).collect(),
                };
                format!(
                    "Amas planétaire en {} ({}) : {}, {}",
                    scope,
                    join(bodies),
                    cluster.label(),
                    dominance.describe()
                )
            }
            StrongPoint::Dignity {
                body,
                sign,
                dignity,
                ascendant_ruler,
                ..
            } => {
                if *ascendant_ruler {
                    format!("Maître d’Ascendant ({}) {} en {}", body, dignity.label(), sign)
                } else {
                    format!("{} {} en {}", body, dignity.label(), sign)
                }
            }
            StrongPoint::LuminaryAspect {
                luminary,
                other,
                aspect,
                orb,
            } => format!("{} {} {} (orbe {:.2}°)", luminary, aspect, other, orb),
            StrongPoint::ConjunctionDominance {
                dominant,
                other,
                orb,
            } => {
                let dominance = Dominance {
                    dominant: *dominant,
                    others: vec![*other],
                };
                format!(
                    "Dominance de {} sur {} (conjonction, orbe {:.2}°) : {}",
                    dominant,
                    other,
                    orb,
                    dominance.describe()
                )
            }
            StrongPoint::CardinalAxis { body, axis, gap } => format!(
                "{} en conjonction avec l’angle {} (écart {:.2}°)",
                body,
                axis.name(),
                gap
            ),
            StrongPoint::Configuration {
                figure,
                squares,
                oppositions,
            } => {
                let name = match figure {
                    Figure::TSquare => "T-carré",
                    Figure::GrandCross => "grand-croix",
                };
                format!(
                    "Possible {} ({} carrés, {} oppositions)",
                    name, squares, oppositions
                )
            }
            StrongPoint::Balance { group, count } => {
                if *count == 0 {
                    format!("Absence {}", group)
                } else {
                    format!("Dominance {} ({} planètes)", group, count)
                }
            }
            StrongPoint::SolarProximity { body, state, orb } => match state {
                SolarState::Cazimi => {
                    format!("Cazimi : {} au cœur du Soleil (orbe {:.2}°)", body, orb)
                }
                SolarState::Combustion => {
                    format!("Combustion : {} brûlé par le Soleil (orbe {:.2}°)", body, orb)
                }
            },
            StrongPoint::MutualReception {
                first,
                first_sign,
                second,
                second_sign,
            } => format!(
                "Réception mutuelle entre {} (en {}) et {} (en {})",
                first, first_sign, second, second_sign
            ),
            StrongPoint::Retrograde { body } => format!("{} rétrograde", body),
            StrongPoint::NakshatraNote {
                body,
                nakshatra,
                pada,
            } => {
                let subject = if body.is_angle() {
                    "Ascendant sidéral".to_string()
                } else {
                    body.to_string()
                };
                format!("{} en nakshatra {} (pada {})", subject, nakshatra, pada)
            }
        }
    }
}

impl fmt::Display for StrongPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sentence())
    }
}

fn join(bodies: &[Body]) -> String {
    bodies.iter().map(|b| b.name()).collect::<Vec<_>>().join(", ")
}
