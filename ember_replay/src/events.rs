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
use serde::{Serialize, Deserialize};
use uom::si::f64::{Length, Velocity, ThermodynamicTemperature};
use uom::si::length::meter;
use uom::si::velocity::meter_per_second;

use ember_common::datetime::EpochSecs;
use ember_common::geo::LatLon;
use ember_geocode::AnnouncementKind;
use ember_metar::ParsedMetar;

/* #region event model **************************************************************************/

/// everything the replay engine knows about, discriminated by the `event` wire tag.
/// This is a closed set - consumers match exhaustively, there are no open-ended string kinds
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum TimedEvent {
    FlightPing( FlightPing ),
    Fire( Fire ),
    Metar( ParsedMetar ),
    Announcement( Announcement ),
}

impl TimedEvent {
    pub fn timestamp (&self)->EpochSecs {
        match self {
            TimedEvent::FlightPing(e) => e.timestamp,
            TimedEvent::Fire(e) => e.timestamp,
            TimedEvent::Metar(e) => e.timestamp,
            TimedEvent::Announcement(e) => e.timestamp,
        }
    }

    pub fn kind (&self)->EventKind {
        match self {
            TimedEvent::FlightPing(_) => EventKind::FlightPing,
            TimedEvent::Fire(_) => EventKind::Fire,
            TimedEvent::Metar(_) => EventKind::Metar,
            TimedEvent::Announcement(_) => EventKind::Announcement,
        }
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum EventKind {
    FlightPing,
    Fire,
    Metar,
    Announcement,
}

impl fmt::Display for EventKind {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::FlightPing => write!(f, "flightPing"),
            EventKind::Fire => write!(f, "fire"),
            EventKind::Metar => write!(f, "metar"),
            EventKind::Announcement => write!(f, "announcement"),
        }
    }
}

/* #endregion event model */

/* #region flight pings *************************************************************************/

/// one aircraft position report. Pings of the same `icao24`, in timestamp order, form one
/// continuous trajectory - there is no minimum sampling gap, receivers drop out for long
/// stretches
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightPing {
    pub icao24: String, // the stable aircraft key
    pub callsign: String,
    pub position: LatLon,
    pub altitude: Length,         // m
    pub velocity: Velocity,       // groundspeed, m/s
    pub vertical_speed: Velocity, // m/s
    pub heading: f64,             // degrees 0-360, kept numeric (see interp::HeadingMode)
    pub squawk: String,
    pub timestamp: EpochSecs,
}

impl FlightPing {
    pub fn altitude_meters (&self)->f64 { self.altitude.get::<meter>() }
    pub fn velocity_mps (&self)->f64 { self.velocity.get::<meter_per_second>() }
}

/* #endregion flight pings */

/* #region thermal anomalies ********************************************************************/

/// the satellite instruments we ingest thermal anomalies from
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
pub enum Instrument {
    #[serde(rename = "VIIRS")]
    Viirs,
    #[serde(rename = "MODIS")]
    Modis,
}

/// a satellite thermal anomaly detection ("fire pixel")
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fire {
    pub position: LatLon,
    pub timestamp: EpochSecs,
    pub instrument: Instrument,
    pub satellite: String,
    // brightness temperature of the detection - not present in all products
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<ThermodynamicTemperature>, // K
}

/* #endregion thermal anomalies */

/* #region announcements ************************************************************************/

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NamedPosition {
    pub name: String,
    pub position: LatLon,
}

/// a positioned emergency announcement. Invariant: `to` is non-empty iff `kind` is
/// `Evacuate` - enforced when raw records are positioned (see load), records violating it
/// are dropped there
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tweet_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: AnnouncementKind,
    pub timestamp: EpochSecs,
    pub from: Vec<NamedPosition>,
    #[serde(default)]
    pub to: Vec<NamedPosition>,
}

/* #endregion announcements */
