mod common;

use common::{engine, ephemeris, spread};
use urania::bodies::Body;
use urania::chart::BirthQuery;
use urania::patterns::{dedup_highlighted, ClusterKind, ClusterScope, SolarState, StrongPoint};
use urania::western::Sign;
use urania::Chart;

fn chart_with(lons: [f64; 11], asc: f64) -> Chart {
    let q = BirthQuery::new("Léa", "1995-08-10", "06:40", "Marseille")
        .unwrap()
        .with_coordinates(43.3, 5.37)
        .unwrap();
    engine(ephemeris(lons, asc)).compute_chart(&q).unwrap()
}

#[test]
fn test_three_personal_bodies_in_leo_form_strong_cluster() {
    let mut lons = spread();
    lons[0] = 125.0; // Sun
    lons[2] = 131.0; // Mercury
    lons[3] = 147.0; // Venus
    lons[4] = 20.0; // Mars out of Leo
    let chart = chart_with(lons, 0.0);

    let leo = chart.strong_points.iter().find_map(|p| match p {
        StrongPoint::Cluster {
            scope: ClusterScope::Sign(Sign::Leo),
            cluster,
            bodies,
            dominant,
        } => Some((*cluster, bodies.clone(), *dominant)),
        _ => None,
    });
    let (cluster, bodies, dominant) = leo.unwrap();
    assert_eq!(cluster, ClusterKind::StrongPersonal);
    assert_eq!(bodies, vec![Body::Sun, Body::Mercury, Body::Venus]);
    assert_eq!(dominant, Body::Sun);

    let sentences = dedup_highlighted(&chart.strong_points);
    assert!(sentences[0].starts_with("★ Amas planétaire en Lion"));
}

#[test]
fn test_cazimi_then_combustion() {
    let mut lons = spread();
    lons[2] = lons[0] + 0.1;
    let chart = chart_with(lons, 0.0);
    assert!(chart.strong_points.iter().any(|p| matches!(
        p,
        StrongPoint::SolarProximity {
            body: Body::Mercury,
            state: SolarState::Cazimi,
            ..
        }
    )));

    lons[2] = lons[0] + 5.0;
    let chart = chart_with(lons, 0.0);
    let solar: Vec<String> = chart
        .strong_points
        .iter()
        .filter(|p| matches!(p, StrongPoint::SolarProximity { .. }))
        .map(|p| p.sentence())
        .collect();
    assert_eq!(solar.len(), 1);
    assert!(solar[0].contains("Combustion"));
    assert!(!solar[0].contains("Cazimi"));
}

#[test]
fn test_nakshatra_notes_for_moon_and_ascendant() {
    let chart = chart_with(spread(), 0.0);
    let notes: Vec<Body> = chart
        .strong_points
        .iter()
        .filter_map(|p| match p {
            StrongPoint::NakshatraNote { body, .. } => Some(*body),
            _ => None,
        })
        .collect();
    assert_eq!(notes, vec![Body::Moon, Body::Ascendant]);
}

#[test]
fn test_retrograde_flag_follows_speed() {
    let eph = ephemeris(spread(), 0.0).with_body_speed(Body::Saturn, 199.0, -0.05);
    let q = BirthQuery::new("Léa", "1995-08-10", "06:40", "Marseille")
        .unwrap()
        .with_coordinates(43.3, 5.37)
        .unwrap();
    let chart = engine(eph).compute_chart(&q).unwrap();
    assert!(chart.tropical[&Body::Saturn].retrograde);
    assert!(chart
        .strong_points
        .contains(&StrongPoint::Retrograde { body: Body::Saturn }));
}

#[test]
fn test_angular_bodies_are_reported() {
    let chart = chart_with(spread(), 0.0);
    // equal houses from 0°: Venus in 4, Saturn in 7, Pluto in 10
    for (body, house) in [(Body::Venus, 4), (Body::Saturn, 7), (Body::Pluto, 10)] {
        assert!(chart
            .strong_points
            .contains(&StrongPoint::AngularPlacement { body, house }));
    }
}
