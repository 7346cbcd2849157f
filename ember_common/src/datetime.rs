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

use std::fmt;
use std::time::Duration;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Serialize, Deserialize};

/// millisecond resolution UTC epoch time - the unit of the virtual (replay) clock.
/// Recorded events are second resolution (see [`EpochSecs`]) but the clock advances in
/// sub-second steps at low replay speeds, hence the finer unit here
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub struct EpochMillis(i64);

impl EpochMillis {
    pub fn now ()->Self { EpochMillis( Utc::now().timestamp_millis()) }

    pub fn new (millis: i64)->Self { EpochMillis(millis) }

    pub fn from_secs (secs: i64)->Self { EpochMillis( secs * 1000) }

    pub fn millis (&self)->i64 { self.0 }

    /// truncating conversion (floor, so that -1ms maps to second -1, not 0)
    pub fn as_secs (&self)->EpochSecs { EpochSecs( self.0.div_euclid(1000)) }

    pub fn plus (&self, d: Duration)->EpochMillis { EpochMillis( self.0 + d.as_millis() as i64) }
    pub fn minus (&self, d: Duration)->EpochMillis { EpochMillis( self.0 - d.as_millis() as i64) }

    pub fn clamped (&self, min: EpochMillis, max: EpochMillis)->EpochMillis {
        EpochMillis( self.0.clamp( min.0, max.0))
    }
}

impl fmt::Display for EpochMillis {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DateTime::<Utc>::from(*self))
    }
}

impl<Tz> From<DateTime<Tz>> for EpochMillis where Tz: TimeZone {
    fn from (date: DateTime<Tz>)->Self { EpochMillis( date.timestamp_millis()) }
}

impl From<EpochMillis> for DateTime<Utc> {
    fn from (millis: EpochMillis)->Self {
        DateTime::<Utc>::from_timestamp_millis( millis.0).unwrap_or( DateTime::<Utc>::MIN_UTC)
    }
}

impl From<EpochSecs> for EpochMillis {
    fn from (secs: EpochSecs)->Self { EpochMillis( secs.0 * 1000) }
}

/// second resolution UTC epoch time - the unit of recorded event timestamps.
/// All windowed comparisons are performed in this unit (or in [`EpochMillis`]), never in
/// display-local time
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub struct EpochSecs(i64);

impl EpochSecs {
    pub fn now ()->Self { EpochSecs( Utc::now().timestamp()) }

    pub fn new (secs: i64)->Self { EpochSecs(secs) }

    pub fn secs (&self)->i64 { self.0 }

    pub fn millis (&self)->EpochMillis { EpochMillis( self.0 * 1000) }

    pub fn plus (&self, d: Duration)->EpochSecs { EpochSecs( self.0 + d.as_secs() as i64) }
    pub fn minus (&self, d: Duration)->EpochSecs { EpochSecs( self.0 - d.as_secs() as i64) }
}

impl fmt::Display for EpochSecs {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DateTime::<Utc>::from(*self))
    }
}

impl<Tz> From<DateTime<Tz>> for EpochSecs where Tz: TimeZone {
    fn from (date: DateTime<Tz>)->Self { EpochSecs( date.timestamp()) }
}

impl From<EpochSecs> for DateTime<Utc> {
    fn from (secs: EpochSecs)->Self {
        DateTime::<Utc>::from_timestamp( secs.0, 0).unwrap_or( DateTime::<Utc>::MIN_UTC)
    }
}

// std Duration ctors for the few units we need (the chrono TimeDelta equivalents are not
// Durations and the std hour/day ctors are still nightly-only)
#[inline] pub fn millis (n: u64)->Duration { Duration::from_millis(n) }
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }
#[inline] pub fn minutes (n: u64)->Duration { Duration::from_secs(n * 60) }
#[inline] pub fn hours (n: u64)->Duration { Duration::from_secs(n * 3600) }
#[inline] pub fn days (n: u64)->Duration { Duration::from_secs(n * 86400) }

#[inline]
pub fn utc_now ()->DateTime<Utc> {
    Utc::now()
}

pub fn duration_between (earlier: EpochMillis, later: EpochMillis)->Duration {
    if later >= earlier {
        Duration::from_millis( (later.millis() - earlier.millis()) as u64)
    } else {
        Duration::ZERO
    }
}
