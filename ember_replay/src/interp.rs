/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “EMBER” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::time::Duration;

use ember_common::angle::{lerp_degrees, lerp_degrees_shortest};
use ember_common::datetime::{EpochMillis};
use ember_common::geo::LatLon;

use crate::events::FlightPing;

/// how heading is interpolated between two pings.
/// `Linear` treats heading as a plain number - a turn through north (350deg -> 10deg)
/// sweeps the long way around. `Shortest` takes the smaller arc. Linear is the default
/// because that is what the recorded visualizations were produced with
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum HeadingMode {
    #[default]
    Linear,
    Shortest,
}

/// how far back a trajectory sample may lie for the aircraft to count as present
pub const DEFAULT_LOOKBACK: Duration = Duration::from_secs( 15 * 60);

/// instantaneous trajectory state at `at`, from the two bracketing samples.
/// Every continuous field is linearly interpolated by the fractional time position between
/// them; with only one side available (before the first or after the last sample) that
/// nearest sample is returned unmodified - there is no extrapolation.
/// `None` only for an empty track
pub fn interpolate_at (track: &[FlightPing], at: EpochMillis, heading_mode: HeadingMode) -> Option<FlightPing> {
    if track.is_empty() { return None }

    let next_idx = track.partition_point( |p| p.timestamp.millis() <= at);
    if next_idx == 0 { return Some( track[0].clone()) }
    if next_idx == track.len() { return Some( track[next_idx-1].clone()) }

    let prev = &track[next_idx-1];
    let next = &track[next_idx];

    let t0 = prev.timestamp.millis().millis();
    let t1 = next.timestamp.millis().millis();
    if t1 == t0 { return Some( prev.clone()) }

    let frac = (at.millis() - t0) as f64 / (t1 - t0) as f64;

    let heading = match heading_mode {
        HeadingMode::Linear => lerp_degrees( prev.heading, next.heading, frac),
        HeadingMode::Shortest => lerp_degrees_shortest( prev.heading, next.heading, frac),
    };

    Some( FlightPing {
        icao24: prev.icao24.clone(),
        callsign: prev.callsign.clone(),
        position: prev.position.lerp( &next.position, frac),
        altitude: prev.altitude + (next.altitude - prev.altitude) * frac,
        velocity: prev.velocity + (next.velocity - prev.velocity) * frac,
        vertical_speed: prev.vertical_speed + (next.vertical_speed - prev.vertical_speed) * frac,
        heading,
        squawk: prev.squawk.clone(),
        timestamp: at.as_secs(),
    })
}

/// like [`interpolate_at`], but gated on presence: an aircraft without a sample in the
/// lookback window `(at - lookback, at]` is considered absent at `at` and yields `None`,
/// no matter what the rest of the trajectory holds. Absence is a regular result, not an
/// error
pub fn position_at (track: &[FlightPing], at: EpochMillis, lookback: Duration, heading_mode: HeadingMode) -> Option<FlightPing> {
    if !has_sample_in_window( track, at, lookback) { return None }
    interpolate_at( track, at, heading_mode)
}

fn has_sample_in_window (track: &[FlightPing], at: EpochMillis, lookback: Duration) -> bool {
    let hi = track.partition_point( |p| p.timestamp.millis() <= at);
    hi > 0 && track[hi-1].timestamp.millis() > at.minus( lookback)
}

/// recent track positions for display, newest last: samples within `span` ending at `at`,
/// thinned to at most one per `min_gap` bucket
pub fn trail (track: &[FlightPing], at: EpochMillis, span: Duration, min_gap: Duration) -> Vec<LatLon> {
    let gap = min_gap.as_secs().max(1) as i64;
    let mut last_bucket = i64::MIN;
    let mut positions = Vec::new();

    for ping in track {
        let t = ping.timestamp.millis();
        if t <= at && t > at.minus( span) {
            let bucket = ping.timestamp.secs().div_euclid( gap);
            if bucket != last_bucket {
                last_bucket = bucket;
                positions.push( ping.position);
            }
        }
    }

    positions
}
