//! Meridian crossing detection.
//!
//! A German-equatorial mount must flip when a tracked target crosses the
//! local meridian. The crossing instant is the root of the hour angle,
//! located by bisection once a sign change is detected.

use chrono::{DateTime, Utc};

use crate::services::ephemeris;

/// Bisection iterations; halving a sub-day interval 20 times gives
/// sub-second precision.
const BISECTION_ITERATIONS: u32 = 20;

/// Local hour angle of a target in hours, wrapped to `(-12, 12]`.
///
/// Negative means the target is east of the meridian (rising), positive
/// west (past the meridian).
pub fn hour_angle(t: DateTime<Utc>, ra_hours: f64, longitude_deg: f64) -> f64 {
    let lst_hours = ephemeris::local_sidereal_deg(t, longitude_deg) / 15.0;
    let mut ha = (lst_hours - ra_hours).rem_euclid(24.0);
    if ha > 12.0 {
        ha -= 24.0;
    }
    ha
}

/// Locate the east-to-west meridian crossing inside `[start, end]`.
///
/// Returns `None` unless the hour angle is negative at `start` and
/// positive at `end`; the reverse direction is never flagged, so at most
/// one flip is modeled per tracked pass. The bisection carries `(lo, hi)`
/// with `hour_angle(lo) < 0 <= hour_angle(hi)`.
pub fn find_flip_instant(
    ra_hours: f64,
    longitude_deg: f64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let ha_start = hour_angle(start, ra_hours, longitude_deg);
    let ha_end = hour_angle(end, ra_hours, longitude_deg);
    if ha_start >= 0.0 || ha_end <= 0.0 {
        return None;
    }

    let mut lo = unix_seconds(start);
    let mut hi = unix_seconds(end);
    for _ in 0..BISECTION_ITERATIONS {
        let mid = (lo + hi) / 2.0;
        if hour_angle(at(mid), ra_hours, longitude_deg) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Some(at((lo + hi) / 2.0))
}

fn unix_seconds(t: DateTime<Utc>) -> f64 {
    t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) / 1e9
}

fn at(unix_seconds: f64) -> DateTime<Utc> {
    let secs = unix_seconds.floor();
    let nanos = ((unix_seconds - secs) * 1e9) as u32;
    DateTime::from_timestamp(secs as i64, nanos).unwrap_or(DateTime::UNIX_EPOCH)
}
