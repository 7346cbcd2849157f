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

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Deserialize};

use ember_common::datetime::EpochMillis;
use ember_common::geo::{LatLon, GeoRect};

use crate::errors::{config_error, Result};

/// the per-wildfire session record (wildfire.json).
/// `timezone` is used for local time display only - every comparison the engine makes is
/// in UTC seconds
#[derive(Serialize,Deserialize,Debug,Clone)]
#[serde(rename_all = "camelCase")]
pub struct Wildfire {
    pub id: String,
    pub name: String,
    pub bounding_box: [LatLon; 2],
    pub position: LatLon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u32>, // map display hint
    pub start: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>, // absent while the fire is live
    pub timezone: Tz,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metar_airport: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_sources: Vec<String>,
}

impl Wildfire {
    /// a wildfire record we cannot build a session from is the one fatal condition in
    /// scope - this has to pass before any playback state exists
    pub fn validate (&self)->Result<()> {
        let bounds = self.bounds();
        if bounds.min_lat == bounds.max_lat || bounds.min_lon == bounds.max_lon {
            return Err( config_error( format!("degenerate bounding box for {}", self.id)))
        }
        if let Some(end) = self.end {
            if end < self.start {
                return Err( config_error( format!("end before start for {}", self.id)))
            }
        }
        Ok(())
    }

    pub fn bounds (&self)->GeoRect {
        GeoRect::from_corners( self.bounding_box[0], self.bounding_box[1])
    }

    /// live fires have no end yet and clamp to the given now
    pub fn end_or (&self, now: DateTime<Utc>)->DateTime<Utc> {
        self.end.unwrap_or( now)
    }

    /// the playback period as virtual clock bounds
    pub fn period (&self, now: DateTime<Utc>)->(EpochMillis, EpochMillis) {
        (self.start.into(), self.end_or( now).into())
    }
}
