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
#![allow(unused)]

#[inline]
pub fn normalize_90 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

/// signed minimal arc from `from` to `to` in degrees, in [-180,180)
#[inline]
pub fn shortest_arc (from: f64, to: f64) -> f64 {
    normalize_180( to - from)
}

/// linear in-between value without angular wraparound. A 350deg -> 10deg transition
/// sweeps backwards through 180deg
#[inline]
pub fn lerp_degrees (from: f64, to: f64, frac: f64) -> f64 {
    from + (to - from) * frac
}

/// in-between value along the smaller arc, normalized to [0,360)
#[inline]
pub fn lerp_degrees_shortest (from: f64, to: f64, frac: f64) -> f64 {
    normalize_360( from + shortest_arc( from, to) * frac)
}
