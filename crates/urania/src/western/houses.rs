//! Quadrant house membership.

use crate::angles::normalize_degrees;

/// House (1-12) containing `longitude` for the given cusps (cusp 1 first).
///
/// Intervals are half-open `[cusp_i, cusp_i+1)` and may wrap through 0°.
/// A longitude matching no interval, possible only with degenerate
/// zero-width houses, falls back to house 1.
pub fn house_of(longitude: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_degrees(longitude);
    for i in 0..12 {
        let start = normalize_degrees(cusps[i]);
        let end = normalize_degrees(cusps[(i + 1) % 12]);
        let inside = if start <= end {
            start <= lon && lon < end
        } else {
            lon >= start || lon < end
        };
        if inside {
            return (i + 1) as u8;
        }
    }
    1
}
