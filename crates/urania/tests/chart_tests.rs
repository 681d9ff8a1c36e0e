mod common;

use common::{engine, ephemeris, lon_of, spread};
use urania::angles::angular_distance;
use urania::aspects::AspectKind;
use urania::bodies::Body;
use urania::chart::{BirthQuery, ChartError, Frame};
use urania::time::TimeError;
use urania::vedic::sidereal_house_of;
use urania::western::Sign;
use urania::{validate_chart, Chart};

fn query() -> BirthQuery {
    BirthQuery::new("Camille", "1990-04-12", "09:15", "Paris")
        .unwrap()
        .with_coordinates(48.85, 2.35)
        .unwrap()
}

fn chart_with(lons: [f64; 11], asc: f64) -> Chart {
    engine(ephemeris(lons, asc)).compute_chart(&query()).unwrap()
}

#[test]
fn test_sun_moon_same_degree_is_exact_conjunction() {
    let mut lons = spread();
    lons[1] = lons[0];
    let chart = chart_with(lons, 0.0);
    let aspect = chart
        .aspects
        .iter()
        .find(|a| a.is_between(Body::Sun, Body::Moon))
        .unwrap();
    assert_eq!(aspect.kind, AspectKind::Conjunction);
    assert_eq!(aspect.orb, 0.0);
    assert_eq!(chart.aspects[0].orb, 0.0);
}

#[test]
fn test_aspects_are_sorted_by_orb() {
    let chart = chart_with(spread(), 0.0);
    assert!(chart.aspects.windows(2).all(|w| w[0].orb <= w[1].orb));
    assert!(!chart
        .aspects
        .iter()
        .any(|a| a.is_between(Body::Rahu, Body::Ketu)));
}

#[test]
fn test_ketu_opposes_rahu_in_both_frames() {
    for rahu in [0.0, 12.34, 179.99, 350.37] {
        let mut lons = spread();
        lons[10] = rahu;
        let chart = chart_with(lons, 0.0);
        for frame in [Frame::Tropical, Frame::Sidereal] {
            let r = chart.position(frame, Body::Rahu).unwrap().longitude;
            let k = chart.position(frame, Body::Ketu).unwrap().longitude;
            assert!((angular_distance(r, k) - 180.0).abs() < 1e-9, "{rahu} {frame:?}");
        }
    }
}

#[test]
fn test_sidereal_positions_subtract_ayanamsa() {
    let chart = chart_with(spread(), 0.0);
    let sun = &chart.sidereal[&Body::Sun];
    // 5° Aries tropical minus 24° ayanamsa
    assert_eq!(sun.longitude, 341.0);
    assert_eq!(sun.sign, Sign::Pisces);
    assert!(sun.nakshatra.is_some());
    assert!(chart.tropical[&Body::Sun].nakshatra.is_none());
}

#[test]
fn test_sidereal_ascendant_is_first_whole_sign_house() {
    let chart = chart_with(spread(), 100.0);
    let asc = &chart.sidereal[&Body::Ascendant];
    assert_eq!(asc.longitude, 76.0);
    assert_eq!(asc.sign, Sign::Gemini);
    assert_eq!(sidereal_house_of(asc.sign, asc.sign), 1);
    assert_eq!(asc.house, 1);
    assert_eq!(chart.sidereal_houses[0].sign, Sign::Gemini);
    assert_eq!(chart.sidereal_houses[0].degree, 60.0);
    assert_eq!(chart.sidereal_houses[11].sign, Sign::Taurus);
}

#[test]
fn test_sidereal_houses_differ_from_tropical_cusps() {
    let chart = chart_with(spread(), 100.0);
    assert_eq!(chart.tropical_houses[0].degree, 100.0);
    assert_eq!(chart.tropical_houses[0].sign, Sign::Cancer);
    assert_eq!(chart.tropical_houses[0].degree_in_sign, 10.0);
    assert_ne!(chart.tropical_houses[0].degree, chart.sidereal_houses[0].degree);
}

#[test]
fn test_houses_always_in_range() {
    let chart = chart_with(spread(), 213.7);
    for frame in [&chart.tropical, &chart.sidereal] {
        for p in frame.values() {
            assert!((1..=12).contains(&p.house));
        }
    }
}

#[test]
fn test_longitude_matches_sign_and_degree() {
    let chart = chart_with(spread(), 33.3);
    for p in chart.tropical.values().chain(chart.sidereal.values()) {
        let rebuilt = p.sign.index() as f64 * 30.0 + p.degree;
        assert!((rebuilt - p.longitude).abs() < 0.011, "{p:?}");
    }
}

#[test]
fn test_ascendant_ruler_is_resolved() {
    // Ascendant 100° is Cancer, ruled by the Moon
    let lons = spread();
    let chart = chart_with(lons, 100.0);
    assert_eq!(chart.tropical_ruler.ascendant_sign, Sign::Cancer);
    assert_eq!(chart.tropical_ruler.ruler, Body::Moon);
    let moon = chart.tropical_ruler.position.as_ref().unwrap();
    assert_eq!(moon.longitude, lon_of(Body::Moon, &lons));
    assert_eq!(chart.sidereal_ruler.ruler, Body::Mercury);
}

#[test]
fn test_auxiliary_points_are_tropical_only() {
    let eph = ephemeris(spread(), 0.0)
        .with_body(Body::DarkMoon, 210.5)
        .with_body(Body::Chiron, 15.25);
    let chart = engine(eph).compute_chart(&query()).unwrap();
    assert_eq!(chart.tropical[&Body::DarkMoon].longitude, 210.5);
    assert_eq!(chart.tropical[&Body::Chiron].longitude, 15.25);
    assert!(!chart.sidereal.contains_key(&Body::DarkMoon));
    assert!(!chart.aspects.iter().any(|a| a.involves(Body::Chiron)));
}

#[test]
fn test_missing_auxiliary_points_are_omitted() {
    let chart = chart_with(spread(), 0.0);
    assert!(!chart.tropical.contains_key(&Body::Chiron));
    assert_eq!(chart.tropical.len(), 13);
}

#[test]
fn test_missing_body_is_an_error() {
    let eph = urania::FixedEphemeris::new(24.0).with_body(Body::Sun, 10.0);
    let err = engine(eph).compute_chart(&query()).unwrap_err();
    assert!(matches!(err, ChartError::Ephemeris(_)));
}

#[test]
fn test_bad_date_is_fatal() {
    let q = BirthQuery::new("Camille", "1990/13/45", "25:00", "Paris").unwrap();
    let err = engine(ephemeris(spread(), 0.0)).compute_chart(&q).unwrap_err();
    assert!(matches!(err, ChartError::Time(TimeError::UnparseableDate { .. })));
}

#[test]
fn test_significant_aspects_and_house_lookup() {
    let chart = chart_with(spread(), 0.0);
    assert!(chart.significant_aspects(5.0).iter().all(|a| a.orb <= 5.0));
    // equal houses from 0°: the Sun at 5° is in house 1
    assert_eq!(chart.bodies_in_house(1), vec![Body::Sun]);
}

#[test]
fn test_spread_chart_validates() {
    let chart = chart_with(spread(), 0.0);
    assert!(validate_chart(&chart).is_empty(), "{:?}", validate_chart(&chart));
}

#[test]
fn test_crowded_chart_reports_few_houses() {
    let lons = [10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 40.0];
    let chart = chart_with(lons, 0.0);
    let problems = validate_chart(&chart);
    assert!(problems.iter().any(|p| p.starts_with("Seulement")));
}

#[test]
fn test_chart_serializes_with_french_names() {
    let chart = chart_with(spread(), 0.0);
    let json = serde_json::to_value(&chart).unwrap();
    assert!(json["tropical"]["Soleil"]["sign"] == "Bélier");
    assert!(json["strong_points"].is_array());
}
