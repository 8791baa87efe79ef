//! Low-precision solar and lunar ephemeris.
//!
//! Simplified analytic formulas (Meeus-style mean elements with first-order
//! corrections): good to a few tenths of a degree for the Sun and a fraction
//! of a degree for the Moon. That is sufficient to classify astronomical
//! twilight (-18 degrees) and to estimate Moon interference; it is not an
//! arc-second ephemeris and does not try to be.
//!
//! All functions are pure and deterministic given the instant.

use chrono::{DateTime, Utc};

use crate::models::EquatorialCoordinate;

const J2000_JD: f64 = 2_451_545.0;
/// JD of a reference new moon (2000-01-06).
const NEW_MOON_JD: f64 = 2_451_549.5;
const SYNODIC_MONTH_DAYS: f64 = 29.530_588_67;

/// Julian Date from a UTC instant.
pub fn julian_date(t: DateTime<Utc>) -> f64 {
    let unix_seconds = t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) / 1e9;
    unix_seconds / 86_400.0 + 2_440_587.5
}

/// Greenwich mean sidereal time in degrees `[0, 360)`.
pub fn greenwich_sidereal_deg(t: DateTime<Utc>) -> f64 {
    let d = julian_date(t) - J2000_JD;
    let centuries = d / 36_525.0;
    let gst = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * centuries * centuries;
    gst.rem_euclid(360.0)
}

/// Local mean sidereal time in degrees `[0, 360)`, east longitude positive.
pub fn local_sidereal_deg(t: DateTime<Utc>, longitude_deg: f64) -> f64 {
    (greenwich_sidereal_deg(t) + longitude_deg).rem_euclid(360.0)
}

/// Altitude of an equatorial position above the horizon, in degrees.
///
/// Standard spherical-trigonometry formula via the local hour angle. The
/// `asin` argument is clamped against floating-point overshoot.
pub fn altitude_deg(
    latitude_deg: f64,
    longitude_deg: f64,
    ra_deg: f64,
    dec_deg: f64,
    t: DateTime<Utc>,
) -> f64 {
    let lst = local_sidereal_deg(t, longitude_deg);
    let hour_angle = (lst - ra_deg).to_radians();
    let lat = latitude_deg.to_radians();
    let dec = dec_deg.to_radians();
    let sin_alt = dec.sin() * lat.sin() + dec.cos() * lat.cos() * hour_angle.cos();
    clamped_asin(sin_alt).to_degrees()
}

/// Apparent solar altitude in degrees.
///
/// Mean longitude plus equation-of-center correction, obliquity rotation,
/// then the local altitude formula.
pub fn solar_altitude_deg(latitude_deg: f64, longitude_deg: f64, t: DateTime<Utc>) -> f64 {
    let n = julian_date(t) - J2000_JD;
    let mean_longitude = (280.460 + 0.985_647_4 * n).rem_euclid(360.0);
    let mean_anomaly = (357.528 + 0.985_600_3 * n).rem_euclid(360.0).to_radians();

    let ecliptic_longitude = (mean_longitude
        + 1.915 * mean_anomaly.sin()
        + 0.020 * (2.0 * mean_anomaly).sin())
    .to_radians();
    let obliquity = obliquity_deg(n).to_radians();

    let ra_deg = (obliquity.cos() * ecliptic_longitude.sin())
        .atan2(ecliptic_longitude.cos())
        .to_degrees();
    let dec_deg = clamped_asin(obliquity.sin() * ecliptic_longitude.sin()).to_degrees();

    altitude_deg(latitude_deg, longitude_deg, ra_deg, dec_deg, t)
}

/// Geocentric lunar position (RA hours, Dec degrees).
///
/// Mean longitude/anomaly/node terms with the dominant first-order
/// perturbations, then ecliptic-to-equatorial conversion.
pub fn moon_position(t: DateTime<Utc>) -> EquatorialCoordinate {
    let n = julian_date(t) - J2000_JD;

    let mean_longitude = (218.316 + 13.176_396 * n).rem_euclid(360.0);
    let mean_anomaly = (134.963 + 13.064_993 * n).rem_euclid(360.0);
    let ascending_node_arg = (93.272 + 13.229_350 * n).rem_euclid(360.0);

    let ecl_lon = (mean_longitude + 6.289 * mean_anomaly.to_radians().sin()).to_radians();
    let ecl_lat = (5.128 * ascending_node_arg.to_radians().sin()).to_radians();
    let obliquity = obliquity_deg(n).to_radians();

    let ra_deg = (ecl_lat.cos() * ecl_lon.sin() * obliquity.cos() - ecl_lat.sin() * obliquity.sin())
        .atan2(ecl_lat.cos() * ecl_lon.cos())
        .to_degrees()
        .rem_euclid(360.0);
    let dec_deg =
        clamped_asin(ecl_lat.sin() * obliquity.cos() + ecl_lat.cos() * obliquity.sin() * ecl_lon.sin())
            .to_degrees();

    EquatorialCoordinate::new(ra_deg / 15.0, dec_deg)
}

/// Moon illumination fraction `[0, 1]`.
///
/// Phase angle from the fixed new-moon epoch modulo the synodic month.
pub fn moon_illumination(t: DateTime<Utc>) -> f64 {
    let phase = ((julian_date(t) - NEW_MOON_JD) / SYNODIC_MONTH_DAYS).rem_euclid(1.0);
    (1.0 - (std::f64::consts::TAU * phase).cos()) / 2.0
}

/// Great-circle separation between two sky positions, in degrees.
///
/// Haversine form: symmetric, zero for identical points, 180 for antipodes.
pub fn angular_separation_deg(a: EquatorialCoordinate, b: EquatorialCoordinate) -> f64 {
    let d_dec = (b.dec_deg - a.dec_deg).to_radians();
    let d_ra = (b.ra_degrees() - a.ra_degrees()).to_radians();
    let h = (d_dec / 2.0).sin().powi(2)
        + a.dec_deg.to_radians().cos() * b.dec_deg.to_radians().cos() * (d_ra / 2.0).sin().powi(2);
    (2.0 * clamped_asin(h.max(0.0).sqrt())).to_degrees()
}

fn obliquity_deg(days_since_j2000: f64) -> f64 {
    23.439 - 0.000_000_4 * days_since_j2000
}

fn clamped_asin(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    #[test]
    fn test_julian_date_epochs() {
        // Unix epoch is JD 2440587.5
        let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert!((julian_date(epoch) - 2_440_587.5).abs() < 1e-9);

        // J2000.0 is 2000-01-01 12:00 UTC (ignoring the ~64 s TT offset)
        let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_date(j2000) - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn test_zenith_transit_when_dec_equals_lat() {
        // A target with dec == lat transits through the zenith once a day.
        let lat = 48.86;
        let coord = EquatorialCoordinate::new(5.59, lat);
        let day_start = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();

        let mut max_alt = f64::MIN;
        for i in 0..288 {
            let t = day_start + Duration::minutes(5 * i);
            max_alt = max_alt.max(altitude_deg(lat, 2.35, coord.ra_degrees(), coord.dec_deg, t));
        }
        assert!(
            (max_alt - 90.0).abs() < 1.5,
            "expected zenith transit, max altitude {:.2}",
            max_alt
        );
    }

    #[test]
    fn test_solar_altitude_paris_january() {
        // Paris, mid-January: well below -18 at 01:00 UTC, above horizon at noon.
        let midnight = Utc.with_ymd_and_hms(2026, 1, 16, 1, 0, 0).unwrap();
        let noon = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        assert!(solar_altitude_deg(48.86, 2.35, midnight) < -18.0);
        assert!(solar_altitude_deg(48.86, 2.35, noon) > 10.0);
    }

    #[test]
    fn test_moon_illumination_reference_phases() {
        // Reference new moon epoch (2000-01-06).
        let new_moon = Utc.with_ymd_and_hms(2000, 1, 6, 0, 0, 0).unwrap();
        assert!(moon_illumination(new_moon) < 0.05);

        // Half a synodic month later: full moon.
        let full_moon = new_moon + Duration::minutes((29.530_588_67 * 24.0 * 30.0) as i64);
        assert!(moon_illumination(full_moon) > 0.95);
    }

    #[test]
    fn test_moon_position_plausible() {
        let t = Utc.with_ymd_and_hms(2026, 1, 15, 22, 0, 0).unwrap();
        let moon = moon_position(t);
        assert!((0.0..24.0).contains(&moon.ra_hours));
        // Dec stays within the lunar band (ecliptic +- 5.1 deg, obliquity 23.4 deg)
        assert!(moon.dec_deg.abs() < 29.0);
    }

    #[test]
    fn test_angular_separation_antipodal() {
        let a = EquatorialCoordinate::new(0.0, 0.0);
        let b = EquatorialCoordinate::new(12.0, 0.0);
        assert!((angular_separation_deg(a, b) - 180.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_separation_is_zero_for_identical(ra in 0.0..24.0f64, dec in -90.0..90.0f64) {
            let a = EquatorialCoordinate::new(ra, dec);
            prop_assert!(angular_separation_deg(a, a).abs() < 1e-6);
        }

        #[test]
        fn prop_separation_is_symmetric(
            ra1 in 0.0..24.0f64, dec1 in -90.0..90.0f64,
            ra2 in 0.0..24.0f64, dec2 in -90.0..90.0f64,
        ) {
            let a = EquatorialCoordinate::new(ra1, dec1);
            let b = EquatorialCoordinate::new(ra2, dec2);
            let ab = angular_separation_deg(a, b);
            let ba = angular_separation_deg(b, a);
            prop_assert!((ab - ba).abs() < 1e-9);
            prop_assert!((0.0..=180.0).contains(&ab));
        }

        #[test]
        fn prop_moon_illumination_in_unit_range(offset_days in -20_000.0..20_000.0f64) {
            let t = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
                + Duration::seconds((offset_days * 86_400.0) as i64);
            let f = moon_illumination(t);
            prop_assert!((0.0..=1.0).contains(&f));
        }
    }
}
