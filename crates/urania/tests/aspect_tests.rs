use urania::angles::angular_distance;
use urania::aspects::{detect_aspects, AspectCalculator, AspectKind};
use urania::bodies::Body;

fn sample() -> Vec<(Body, f64)> {
    vec![
        (Body::Ascendant, 12.5),
        (Body::Sun, 100.0),
        (Body::Moon, 192.0),
        (Body::Mercury, 104.3),
        (Body::Venus, 221.7),
        (Body::Mars, 280.1),
        (Body::Jupiter, 340.0),
        (Body::Saturn, 14.0),
        (Body::Rahu, 50.0),
        (Body::Ketu, 230.0),
    ]
}

#[test]
fn test_square_at_92_degrees() {
    let aspects = detect_aspects(&[(Body::Sun, 100.0), (Body::Moon, 192.0)]);
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Square);
    assert_eq!(aspects[0].kind.label(), "carré");
    assert_eq!(aspects[0].orb, 2.0);
    assert_eq!(aspects[0].exact_angle, 90.0);
}

#[test]
fn test_exact_conjunction() {
    let aspects = detect_aspects(&[(Body::Moon, 77.7), (Body::Sun, 77.7)]);
    assert_eq!(aspects[0].kind.label(), "conjonction");
    assert_eq!(aspects[0].orb, 0.0);
    assert_eq!((aspects[0].body1, aspects[0].body2), (Body::Sun, Body::Moon));
}

#[test]
fn test_detection_is_order_independent() {
    let forward = detect_aspects(&sample());
    let mut reversed = sample();
    reversed.reverse();
    assert_eq!(detect_aspects(&reversed), forward);

    let mut rotated = sample();
    rotated.rotate_left(4);
    assert_eq!(detect_aspects(&rotated), forward);
}

#[test]
fn test_each_pair_at_most_once() {
    let aspects = detect_aspects(&sample());
    for (i, a) in aspects.iter().enumerate() {
        for b in &aspects[i + 1..] {
            assert!(!a.is_between(b.body1, b.body2));
        }
    }
}

#[test]
fn test_nodes_excluded_from_each_other_only() {
    let aspects = detect_aspects(&sample());
    assert!(!aspects.iter().any(|a| a.is_between(Body::Rahu, Body::Ketu)));
    // Venus 221.7 and Ketu 230 are 8.3° apart: within the conjunction orb
    assert!(aspects
        .iter()
        .any(|a| a.is_between(Body::Venus, Body::Ketu) && a.kind == AspectKind::Conjunction));
}

#[test]
fn test_orb_never_exceeds_tolerance() {
    let calc = AspectCalculator::new();
    for a in calc.detect(&sample()) {
        assert!(a.orb <= calc.tolerance(a.kind, a.body1, a.body2));
        assert!((0.0..=180.0).contains(&a.separation));
    }
}

#[test]
fn test_angular_distance_symmetry() {
    let samples = [0.0, 0.01, 59.5, 90.0, 179.99, 180.0, 270.25, 359.99];
    for a in samples {
        for b in samples {
            let d = angular_distance(a, b);
            assert_eq!(d, angular_distance(b, a));
            assert!((0.0..=180.0).contains(&d));
        }
    }
}
