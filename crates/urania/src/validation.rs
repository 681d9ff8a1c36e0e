//! Pre-flight checks a caller runs before handing a chart downstream.

use crate::bodies::Body;
use crate::chart::Chart;
use std::collections::BTreeSet;

const REQUIRED: [Body; 3] = [Body::Ascendant, Body::Sun, Body::Moon];
const MIN_OCCUPIED_HOUSES: usize = 8;

/// Problems found in `chart`, as readable messages. Empty means usable.
pub fn validate_chart(chart: &Chart) -> Vec<String> {
    let mut problems = Vec::new();

    for body in REQUIRED {
        match chart.tropical.get(&body) {
            None => problems.push(format!("{}: données absentes", body)),
            Some(p) if !(1..=12).contains(&p.house) => {
                problems.push(format!("{}: maison invalide ({})", body, p.house))
            }
            Some(p) if !p.longitude.is_finite() => {
                problems.push(format!("{}: position invalide", body))
            }
            Some(_) => {}
        }
    }

    if chart.aspects.is_empty() {
        problems.push("Aucun aspect calculé".to_string());
    }

    let occupied: BTreeSet<u8> = chart.tropical.values().map(|p| p.house).collect();
    if occupied.len() < MIN_OCCUPIED_HOUSES {
        problems.push(format!(
            "Seulement {} maisons occupées détectées",
            occupied.len()
        ));
    }

    if !problems.is_empty() {
        log::warn!("Chart for '{}' failed validation: {:?}", chart.name, problems);
    }
    problems
}
