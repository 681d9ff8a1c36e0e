use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian day (UT) of a Gregorian-calendar UTC instant, Meeus ch. 7.
pub fn julian_day(dt: DateTime<Utc>) -> f64 {
    let (mut year, mut month) = (dt.year() as f64, dt.month() as f64);
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }
    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    let day_fraction =
        (dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0) / 24.0;

    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + dt.day() as f64
        + day_fraction
        + b
        - 1524.5
}
