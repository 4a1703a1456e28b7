/*
 * Keyframe Module
 *
 * This module defines the keyframe tracks driving the decorative bubble
 * trajectories: a named sequence of (time, position) control points
 * evaluated with a cardinal (Catmull-Rom-family) spline, and the
 * independent TrackClock that advances each track inside an interior
 * sub-window of its time range.
 */

use glam::Vec3;
use thiserror::Error;

// Spline tension
const TENSION: f32 = 0.5;

#[derive(Debug, Error, PartialEq)]
pub enum TrackError {
    #[error("track needs at least two control times, got {0}")]
    DegenerateTrack(usize),
    #[error("time {t} outside control window [{min}, {max}]")]
    OutOfRangeTime { t: f32, min: f32, max: f32 },
}

pub struct KeyframeTrack {
    positions: Vec<Vec3>,
    times: Vec<f32>,
}

impl KeyframeTrack {
    // Control tables are owned and validated here and read-only afterward.
    // Times must strictly increase and match the positions in length;
    // meaningful interior interpolation additionally needs four points.
    pub fn new(positions: Vec<Vec3>, times: Vec<f32>) -> Result<Self, TrackError> {
        if times.len() < 2
            || positions.len() != times.len()
            || times.windows(2).any(|w| w[1] <= w[0])
        {
            return Err(TrackError::DegenerateTrack(times.len()));
        }
        Ok(Self { positions, times })
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn times(&self) -> &[f32] {
        &self.times
    }

    // Evaluate the track at time t.
    //
    // Interior intervals blend four control points with the cardinal
    // spline. The first and last intervals clamp to the first/last control
    // position instead of extrapolating, so those two points are never
    // smoothly interpolated through; clocks built with TrackClock::for_track
    // stay inside the interior window and never hit the clamps.
    pub fn sample(&self, t: f32) -> Result<Vec3, TrackError> {
        let idx = find_interval(t, &self.times)?;
        let n = self.times.len();

        if idx < 1 {
            return Ok(self.positions[0]);
        }
        if idx >= n - 2 {
            return Ok(self.positions[n - 1]);
        }

        Ok(cardinal_spline(
            t,
            [
                self.times[idx - 1],
                self.times[idx],
                self.times[idx + 1],
                self.times[idx + 2],
            ],
            [
                self.positions[idx - 1],
                self.positions[idx],
                self.positions[idx + 1],
                self.positions[idx + 2],
            ],
            TENSION,
        ))
    }
}

// Locate k such that times[k] <= t < times[k+1], scanning forward from 0
pub fn find_interval(t: f32, times: &[f32]) -> Result<usize, TrackError> {
    let n = times.len();
    if n < 2 {
        log::error!("track needs at least two control times, got {n}");
        return Err(TrackError::DegenerateTrack(n));
    }
    if t < times[0] || t > times[n - 1] {
        log::error!(
            "query time {t} outside control window [{}, {}]",
            times[0],
            times[n - 1]
        );
        return Err(TrackError::OutOfRangeTime {
            t,
            min: times[0],
            max: times[n - 1],
        });
    }

    let mut k = 0;
    while k + 1 < n && times[k + 1] < t {
        k += 1;
    }
    Ok(k)
}

// Four-point cardinal spline: tangents from the surrounding control points,
// blended with the cubic Hermite basis on the normalized parameter s.
fn cardinal_spline(t: f32, times: [f32; 4], points: [Vec3; 4], k: f32) -> Vec3 {
    let [t0, t1, t2, t3] = times;
    let [p0, p1, p2, p3] = points;

    let s = (t - t1) / (t2 - t1);

    let d1 = 2.0 * k * (p2 - p0) / (t2 - t0);
    let d2 = 2.0 * k * (p3 - p1) / (t3 - t1);

    (2.0 * s * s * s - 3.0 * s * s + 1.0) * p1
        + (s * s * s - 2.0 * s * s + s) * d1
        + (-2.0 * s * s * s + 3.0 * s * s) * p2
        + (s * s * s - s * s) * d2
}

// Independent time source for one track, bounded to the interior window
// [times[1], times[N-2]]. The offset-by-one window keeps the clock away
// from the clamped first and last intervals.
pub struct TrackClock {
    pub t: f32,
    pub t_min: f32,
    pub t_max: f32,
}

impl TrackClock {
    pub fn for_track(track: &KeyframeTrack) -> Self {
        let times = track.times();
        debug_assert!(times.len() >= 4);
        let n = times.len();
        Self {
            t: times[1],
            t_min: times[1],
            t_max: times[n - 2],
        }
    }

    // Advance the clock monotonically, wrapping back to t_min once t_max is
    // reached. Returns true on the frame the clock wraps so callers can
    // clear any accumulated trajectory trace.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.t += dt;
        if self.t >= self.t_max {
            self.t = self.t_min;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_track() -> KeyframeTrack {
        // Colinear control points: p(t) = (t, 2t, -t)
        let times = vec![0.0, 1.0, 2.0, 3.0];
        let positions = times
            .iter()
            .map(|&t| Vec3::new(t, 2.0 * t, -t))
            .collect();
        KeyframeTrack::new(positions, times).unwrap()
    }

    #[test]
    fn rejects_degenerate_tables() {
        let short = KeyframeTrack::new(vec![Vec3::ZERO], vec![0.0]);
        assert!(matches!(short, Err(TrackError::DegenerateTrack(1))));

        let mismatched = KeyframeTrack::new(vec![Vec3::ZERO; 3], vec![0.0, 1.0]);
        assert!(matches!(mismatched, Err(TrackError::DegenerateTrack(2))));
    }

    #[test]
    fn rejects_non_ascending_times() {
        let result = KeyframeTrack::new(
            vec![Vec3::ZERO; 4],
            vec![0.0, 2.0, 1.0, 3.0],
        );
        assert!(matches!(result, Err(TrackError::DegenerateTrack(4))));
    }

    #[test]
    fn out_of_range_time_is_an_error() {
        let track = line_track();
        assert!(matches!(
            track.sample(-0.5),
            Err(TrackError::OutOfRangeTime { .. })
        ));
        assert!(matches!(
            track.sample(3.5),
            Err(TrackError::OutOfRangeTime { .. })
        ));
    }

    #[test]
    fn interior_interpolation_of_a_line_stays_on_the_line() {
        let track = line_track();
        // t == times[1] still lands in the clamped first interval (the
        // forward scan uses a strict comparison), so sweep strictly inside
        let mut t = 1.0 + 1e-3;
        while t <= 2.0 {
            let p = track.sample(t).unwrap();
            let expected = Vec3::new(t, 2.0 * t, -t);
            assert!((p - expected).length() < 1e-4, "t={t} p={p:?}");
            t += 0.05;
        }
    }

    #[test]
    fn first_and_last_intervals_clamp() {
        let track = line_track();
        // Any t in the first interval returns the first control point,
        // including the interval's upper boundary time itself
        assert_eq!(track.sample(0.5).unwrap(), Vec3::ZERO);
        assert_eq!(track.sample(1.0).unwrap(), Vec3::ZERO);
        // Any t in the last interval returns the last control point
        let last = Vec3::new(3.0, 6.0, -3.0);
        assert_eq!(track.sample(2.5).unwrap(), last);
    }

    #[test]
    fn finite_over_the_whole_valid_window() {
        let times = vec![0.0, 1.0, 2.0, 2.5, 3.0, 3.5, 3.75, 4.5, 5.0, 6.0, 7.0, 8.0];
        let positions: Vec<Vec3> = (0..times.len())
            .map(|i| Vec3::new(i as f32 * 0.3, (i as f32).sin(), i as f32))
            .collect();
        let track = KeyframeTrack::new(positions, times).unwrap();
        let mut t = 0.0;
        while t <= 8.0 {
            assert!(track.sample(t).unwrap().is_finite());
            t += 0.01;
        }
    }

    #[test]
    fn continuity_at_interior_control_times() {
        let times = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let positions: Vec<Vec3> = (0..times.len())
            .map(|i| Vec3::new(i as f32, (i * i) as f32 * 0.1, -(i as f32)))
            .collect();
        let track = KeyframeTrack::new(positions, times).unwrap();
        // Approach an interior segment boundary from both sides
        for &boundary in &[2.0_f32, 3.0] {
            let before = track.sample(boundary - 1e-4).unwrap();
            let after = track.sample(boundary + 1e-4).unwrap();
            assert!((before - after).length() < 1e-2);
        }
    }

    #[test]
    fn find_interval_scans_forward() {
        let times = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(find_interval(0.0, &times).unwrap(), 0);
        assert_eq!(find_interval(1.5, &times).unwrap(), 1);
        assert_eq!(find_interval(3.0, &times).unwrap(), 2);
    }

    #[test]
    fn clock_uses_the_interior_window_and_reports_wraps() {
        let times = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let positions = vec![Vec3::ZERO; 6];
        let track = KeyframeTrack::new(positions, times).unwrap();
        let mut clock = TrackClock::for_track(&track);

        // Window is [times[1], times[N-2]], not the full track range
        assert_eq!(clock.t_min, 1.0);
        assert_eq!(clock.t_max, 4.0);
        assert_eq!(clock.t, 1.0);

        assert!(!clock.advance(1.0));
        assert!(!clock.advance(1.0));
        // Crossing t_max wraps back to t_min and reports it
        assert!(clock.advance(1.5));
        assert_eq!(clock.t, 1.0);
    }
}
