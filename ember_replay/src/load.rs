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

//! ingestion of the per-source JSON documents into an [`EventStore`] session.
//! Loading is the explicit phase before playback - one undecodable record is skipped with
//! a diagnostic, only unreadable files and a bad wildfire record abort construction

use std::collections::HashMap;
use std::path::Path;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;
use uom::si::f64::{Length, Velocity};
use uom::si::length::meter;
use uom::si::velocity::meter_per_second;

use ember_common::datetime::EpochSecs;
use ember_common::fs::load_json_file;
use ember_common::geo::LatLon;
use ember_geocode::{AnnouncementKind, AnnouncementsFile};
use ember_metar::ParsedMetar;

use crate::errors::Result;
use crate::events::{Announcement, Fire, FlightPing, NamedPosition};
use crate::store::{EventStore, EventStreams};
use crate::wildfire::Wildfire;

/// a fully loaded wildfire session - the wildfire record plus its immutable event store
pub struct WildfireData {
    pub wildfire: Wildfire,
    pub store: EventStore,
}

/// load a wildfire data directory (wildfire.json plus the per-source event documents)
/// into a session. `now` caps the playback period of live fires
pub fn load_wildfire_dir (dir: impl AsRef<Path>, now: DateTime<Utc>) -> Result<WildfireData> {
    let dir = dir.as_ref();

    let wildfire: Wildfire = load_json_file( dir.join("wildfire.json"))?;
    wildfire.validate()?;

    let fires = load_or_empty( dir.join("fires.json"), load_fires)?;
    let metars = load_or_empty( dir.join("metars.json"), load_metars)?;
    let flight_pings = load_or_empty( dir.join("flights.json"), load_flights)?;
    let announcements = load_or_empty( dir.join("announcements.json"), |p| {
        let file: AnnouncementsFile = load_json_file(p)?;
        Ok( position_announcements( file))
    })?;

    let store = EventStore::build( EventStreams { flight_pings, fires, metars, announcements });
    Ok( WildfireData { wildfire, store } )
}

// a missing source document just means that source was not scraped for this wildfire
fn load_or_empty<T, F> (path: std::path::PathBuf, load: F) -> Result<Vec<T>>
    where F: Fn(&Path)->Result<Vec<T>>
{
    if path.is_file() {
        load( &path)
    } else {
        warn!("no {:?}, source skipped", path);
        Ok( Vec::new())
    }
}

fn decode_records<T: DeserializeOwned> (records: Vec<Value>, what: &str) -> Vec<T> {
    let mut decoded = Vec::with_capacity( records.len());
    for value in records.into_iter() {
        match serde_json::from_value( value) {
            Ok(record) => decoded.push( record),
            Err(e) => warn!("skipping bad {} record: {}", what, e)
        }
    }
    decoded
}

/* #region fires ********************************************************************************/

#[derive(Deserialize)]
struct FiresFile {
    #[serde(default)]
    viirs: Vec<Value>,
    #[serde(default)]
    modis: Vec<Value>,
}

pub fn load_fires (path: &Path) -> Result<Vec<Fire>> {
    let file: FiresFile = load_json_file( path)?;
    let mut fires: Vec<Fire> = decode_records( file.viirs, "VIIRS fire");
    fires.append( &mut decode_records( file.modis, "MODIS fire"));
    Ok( fires )
}

/* #endregion fires */

/* #region metars *******************************************************************************/

pub fn load_metars (path: &Path) -> Result<Vec<ParsedMetar>> {
    let records: Vec<Value> = load_json_file( path)?;
    Ok( decode_records( records, "metar") )
}

/* #endregion metars */

/* #region flights ******************************************************************************/

// flights.json is keyed by flight id, each entry carrying one track array
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlightRecord {
    #[serde(default)]
    icao24: Option<String>, // falls back to the flight key
    #[serde(default)]
    callsign: Option<String>,
    track: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrackSample {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    altitude: f64, // m
    #[serde(default)]
    speed: f64, // m/s
    #[serde(default)]
    vertical_speed: f64, // m/s
    #[serde(default)]
    heading: f64,
    #[serde(default)]
    squawk: String,
    timestamp: EpochSecs,
}

pub fn load_flights (path: &Path) -> Result<Vec<FlightPing>> {
    let file: HashMap<String, Value> = load_json_file( path)?;
    let mut pings: Vec<FlightPing> = Vec::new();

    for (flight_id, value) in file.into_iter() {
        let record: FlightRecord = match serde_json::from_value( value) {
            Ok(record) => record,
            Err(e) => { warn!("skipping bad flight record {}: {}", flight_id, e); continue }
        };

        let icao24 = record.icao24.unwrap_or_else( || flight_id.clone());
        let callsign = record.callsign.unwrap_or_default();

        for sample in decode_records::<TrackSample>( record.track, "track sample") {
            pings.push( FlightPing {
                icao24: icao24.clone(),
                callsign: callsign.clone(),
                position: LatLon::from_degrees( sample.latitude, sample.longitude),
                altitude: Length::new::<meter>( sample.altitude),
                velocity: Velocity::new::<meter_per_second>( sample.speed),
                vertical_speed: Velocity::new::<meter_per_second>( sample.vertical_speed),
                heading: sample.heading,
                squawk: sample.squawk,
                timestamp: sample.timestamp,
            });
        }
    }

    Ok( pings )
}

/* #endregion flights */

/* #region announcements ************************************************************************/

/// join announcement area names against the resolved coordinate table.
/// Unpositionable announcements (no resolvable `from`, or an evacuation without a
/// resolvable `to`) are dropped here - and alerts never carry destinations, so after this
/// step `to` is non-empty exactly for evacuations
pub fn position_announcements (file: AnnouncementsFile) -> Vec<Announcement> {
    let coordinates = &file.area_coordinates;
    let mut announcements = Vec::with_capacity( file.announcements.len());

    for record in &file.announcements {
        let Some(timestamp) = record.timestamp else {
            warn!("dropping announcement without normalized timestamp ({})", record.date_string);
            continue
        };

        let from = named_positions( &record.from, coordinates);
        if from.is_empty() {
            warn!("dropping announcement at {} - no from area resolvable", timestamp);
            continue
        }

        let to = match record.kind {
            AnnouncementKind::Alert => Vec::new(),
            AnnouncementKind::Evacuate => {
                let to = named_positions( &record.to, coordinates);
                if to.is_empty() {
                    warn!("dropping evacuation at {} - no to area resolvable", timestamp);
                    continue
                }
                to
            }
        };

        announcements.push( Announcement {
            tweet_url: record.tweet_url.clone(),
            kind: record.kind,
            timestamp,
            from,
            to,
        });
    }

    announcements
}

fn named_positions (names: &[String], coordinates: &HashMap<String,LatLon>) -> Vec<NamedPosition> {
    names.iter().filter_map( |name| {
        match coordinates.get( name) {
            Some(position) => Some( NamedPosition { name: name.clone(), position: *position }),
            None => { warn!("no coordinates for area {:?}", name); None }
        }
    }).collect()
}

/* #endregion announcements */
