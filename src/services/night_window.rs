//! Night visibility window computation.
//!
//! Sweeps the night with a fixed sampling step, keeping only instants that
//! are both astronomically dark (Sun below -18 degrees) and above the
//! site's usable horizon. Also computes the target-independent darkness
//! bounds (dusk/dawn) for the whole night.

use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};

use crate::models::{EquatorialCoordinate, GeoLocation, NightBounds, NightWindow, SamplingStep};
use crate::services::ephemeris;

/// Solar altitude below which the sky is astronomically dark.
pub const ASTRONOMICAL_TWILIGHT_DEG: f64 = -18.0;

/// Hours after `base_date` midnight UTC where the target sweep begins.
const TARGET_SWEEP_START_HOURS: i64 = 18;
/// Length of the target sweep in hours (inclusive of the last sample).
const TARGET_SWEEP_HOURS: f64 = 12.0;

/// Hours after `base_date` midnight UTC where the dusk/dawn sweep begins.
const BOUNDS_SWEEP_START_HOURS: i64 = 14;
/// Dusk/dawn sweep: 20 hours at 5-minute steps.
const BOUNDS_SWEEP_STEPS: i64 = 240;
const BOUNDS_STEP_SECONDS: i64 = 300;

/// Compute the visibility window of one target for the night starting on
/// the evening of `base_date` (midnight UTC of that calendar date).
///
/// Samples from `base_date + 18h` forward 12 hours at `step`. A sample
/// counts as useful iff the Sun is below -18 degrees and the target is
/// above the location's horizon altitude. Useful hours accumulate in
/// multiples of the step; the window spans the first to the last useful
/// sample. Moon separation is minimized over useful samples and the Moon
/// illumination is captured at the first one.
pub fn compute_night_window(
    location: &GeoLocation,
    coord: EquatorialCoordinate,
    base_date: DateTime<Utc>,
    step: SamplingStep,
) -> NightWindow {
    let sweep_start = base_date + Duration::hours(TARGET_SWEEP_START_HOURS);
    let step_seconds = (step.minutes() * 60.0) as i64;
    let samples = (TARGET_SWEEP_HOURS / step.hours()) as i64;

    let mut window = NightWindow::empty();

    for i in 0..=samples {
        let t = sweep_start + Duration::seconds(i * step_seconds);

        let sun_alt = ephemeris::solar_altitude_deg(location.latitude_deg, location.longitude_deg, t);
        if sun_alt > ASTRONOMICAL_TWILIGHT_DEG {
            continue;
        }

        let target_alt = ephemeris::altitude_deg(
            location.latitude_deg,
            location.longitude_deg,
            coord.ra_degrees(),
            coord.dec_deg,
            t,
        );
        if target_alt <= location.horizon_deg {
            continue;
        }

        window.useful_hours += step.hours();
        if window.start.is_none() {
            window.start = Some(t);
            window.moon_illumination = ephemeris::moon_illumination(t);
        }
        window.end = Some(t);

        let sep = ephemeris::angular_separation_deg(coord, ephemeris::moon_position(t));
        window.min_moon_separation_deg = Some(match window.min_moon_separation_deg {
            Some(current) => current.min(sep),
            None => sep,
        });
    }

    debug!(
        "night window ra={:.2}h dec={:.1} useful={:.2}h",
        coord.ra_hours, coord.dec_deg, window.useful_hours
    );
    window
}

/// Astronomical darkness bounds for the night starting on `base_date`.
///
/// Sweeps 20 hours from `base_date + 14h` at 5-minute steps. Dusk is the
/// first dark sample; dawn is one step past the last dark sample. Both are
/// `None` when the Sun never drops below -18 degrees (polar day).
pub fn compute_night_bounds(location: &GeoLocation, base_date: DateTime<Utc>) -> NightBounds {
    let sweep_start = base_date + Duration::hours(BOUNDS_SWEEP_START_HOURS);

    let mut dusk = None;
    let mut dawn = None;

    for i in 0..BOUNDS_SWEEP_STEPS {
        let t = sweep_start + Duration::seconds(i * BOUNDS_STEP_SECONDS);
        let sun_alt = ephemeris::solar_altitude_deg(location.latitude_deg, location.longitude_deg, t);
        if sun_alt < ASTRONOMICAL_TWILIGHT_DEG {
            if dusk.is_none() {
                dusk = Some(t);
            }
            dawn = Some(t + Duration::seconds(BOUNDS_STEP_SECONDS));
        }
    }

    if dusk.is_none() {
        warn!(
            "no astronomical darkness at lat={:.2} lon={:.2} on {}",
            location.latitude_deg,
            location.longitude_deg,
            base_date.format("%Y-%m-%d")
        );
    }

    NightBounds { dusk, dawn }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn paris() -> GeoLocation {
        GeoLocation::new(48.86, 2.35)
    }

    fn january_night() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_orion_visible_in_january() {
        // M42, a winter target from mid-northern latitudes.
        let orion = EquatorialCoordinate::new(5.59, -5.39);
        let window = compute_night_window(&paris(), orion, january_night(), SamplingStep::Fine);

        assert!(window.useful_hours > 0.0);
        assert!(window.is_visible());
        assert!(window.start.unwrap() <= window.end.unwrap());
        assert!(window.min_moon_separation_deg.is_some());
        assert!((0.0..=1.0).contains(&window.moon_illumination));
    }

    #[test]
    fn test_summer_object_weak_in_january() {
        // A Cygnus-region object barely rises during January darkness.
        let summer = EquatorialCoordinate::new(20.76, 30.7);
        let window = compute_night_window(&paris(), summer, january_night(), SamplingStep::Fine);

        assert!(window.useful_hours <= 2.0);
    }

    #[test]
    fn test_useful_hours_multiple_of_step() {
        let orion = EquatorialCoordinate::new(5.59, -5.39);
        for step in [SamplingStep::Coarse, SamplingStep::Fine] {
            let window = compute_night_window(&paris(), orion, january_night(), step);
            let ratio = window.useful_hours / step.hours();
            assert!((ratio - ratio.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_coarse_and_fine_agree_within_tolerance() {
        let orion = EquatorialCoordinate::new(5.59, -5.39);
        let coarse = compute_night_window(&paris(), orion, january_night(), SamplingStep::Coarse);
        let fine = compute_night_window(&paris(), orion, january_night(), SamplingStep::Fine);

        // Accepted divergence between the preview and authoritative steps:
        // each window edge quantizes to its own grid, at most one coarse
        // step plus one fine step apart.
        assert!((coarse.useful_hours - fine.useful_hours).abs() <= 0.75);
    }

    #[test]
    fn test_never_rising_target() {
        // Deep southern object from Paris.
        let octans = EquatorialCoordinate::new(14.0, -85.0);
        let window = compute_night_window(&paris(), octans, january_night(), SamplingStep::Fine);

        assert_eq!(window.useful_hours, 0.0);
        assert!(window.start.is_none());
        assert!(window.end.is_none());
        assert!(window.min_moon_separation_deg.is_none());
    }

    #[test]
    fn test_night_bounds_winter_paris() {
        let bounds = compute_night_bounds(&paris(), january_night());
        assert!(bounds.is_dark_at_all());
        let (dusk, dawn) = (bounds.dusk.unwrap(), bounds.dawn.unwrap());
        assert!(dusk < dawn);
        // Winter night at 49N runs well over 10 hours.
        let hours = (dawn - dusk).num_minutes() as f64 / 60.0;
        assert!(hours > 10.0, "night length {:.1}h", hours);
    }

    #[test]
    fn test_polar_day_has_no_bounds() {
        let high_north = GeoLocation::new(65.0, 15.0);
        let midsummer = Utc.with_ymd_and_hms(2026, 6, 21, 0, 0, 0).unwrap();
        let bounds = compute_night_bounds(&high_north, midsummer);

        assert!(bounds.dusk.is_none());
        assert!(bounds.dawn.is_none());
    }
}
