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

use std::fs;
use chrono::{TimeZone, Utc};

use ember_common::datetime::{secs, EpochMillis, EpochSecs};
use ember_replay::*;

// run with "cargo test -p ember_replay --test test_load -- --nocapture"

const WILDFIRE_JSON: &str = r#"{
    "id": "varnavas",
    "name": "Varnavas wildfire",
    "boundingBox": [[38.0, 23.7], [38.4, 24.1]],
    "position": [38.2, 23.9],
    "zoom": 12,
    "start": "2024-08-11T12:00:00Z",
    "end": "2024-08-13T12:00:00Z",
    "timezone": "Europe/Athens",
    "metarAirport": "LGAV",
    "dataSources": ["fires", "flights", "metars", "announcements"]
}"#;

// the second viirs record is broken and must be skipped, not abort the load
const FIRES_JSON: &str = r#"{
    "viirs": [
        { "position": [38.21, 23.91], "timestamp": 1723377600, "instrument": "VIIRS", "satellite": "N20", "brightness": 345.2 },
        { "position": "oops", "timestamp": 1723377600, "instrument": "VIIRS", "satellite": "N20" }
    ],
    "modis": [
        { "position": [38.22, 23.92], "timestamp": 1723381200, "instrument": "MODIS", "satellite": "Terra" }
    ]
}"#;

const METARS_JSON: &str = r#"[
    { "icaoId": "LGAV", "raw": "LGAV 111220Z 36004KT 9999 33/17 Q1008", "timestamp": 1723378800,
      "wind": { "direction": 360, "speed": 4, "variable": false },
      "temperature": 33, "dewPoint": 17, "qnh": 1008 },
    { "icaoId": "LGAV", "raw": "LGAV 111250Z VRB03KT 9999 34/16 Q1008", "timestamp": 1723380600,
      "wind": { "direction": "VRB", "speed": 3, "variable": true },
      "temperature": 34, "dewPoint": 16, "qnh": 1008 }
]"#;

const ANNOUNCEMENTS_JSON: &str = r#"{
    "areaNames": ["Varnavas", "Grammatiko", "Marathon"],
    "announcements": [
        { "dateString": "2024-08-11T16:00:00", "timestamp": 1723381200, "type": "alert", "from": ["Varnavas"] },
        { "dateString": "2024-08-11T17:00:00", "timestamp": 1723384800, "type": "evacuate", "from": ["Varnavas"], "to": ["Marathon"] },
        { "dateString": "2024-08-11T18:00:00", "timestamp": 1723388400, "type": "evacuate", "from": ["Varnavas"], "to": ["Nowhere"] },
        { "dateString": "2024-08-11T19:00:00", "timestamp": 1723392000, "type": "alert", "from": ["Nowhere"] }
    ],
    "areaCoordinates": { "Varnavas": [38.22, 23.93], "Marathon": [38.15, 23.96] }
}"#;

const FLIGHTS_JSON: &str = r#"{
    "e49b2f": {
        "icao24": "e49b2f",
        "callsign": "CNDR21",
        "track": [
            { "latitude": 38.20, "longitude": 23.90, "altitude": 450.0, "speed": 70.0, "verticalSpeed": -2.0, "heading": 90.0, "squawk": "7000", "timestamp": 1723377600 },
            { "latitude": 38.21, "longitude": 23.92, "altitude": 460.0, "speed": 72.0, "verticalSpeed": 0.0, "heading": 95.0, "squawk": "7000", "timestamp": 1723377630 },
            { "latitude": "bad", "longitude": 23.94, "timestamp": 1723377660 }
        ]
    }
}"#;

fn write_data_dir () -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write( dir.path().join("wildfire.json"), WILDFIRE_JSON).unwrap();
    fs::write( dir.path().join("fires.json"), FIRES_JSON).unwrap();
    fs::write( dir.path().join("metars.json"), METARS_JSON).unwrap();
    fs::write( dir.path().join("announcements.json"), ANNOUNCEMENTS_JSON).unwrap();
    fs::write( dir.path().join("flights.json"), FLIGHTS_JSON).unwrap();
    dir
}

#[test]
fn test_load_wildfire_dir () {
    let dir = write_data_dir();
    let data = load_wildfire_dir( dir.path(), Utc::now()).unwrap();

    assert_eq!( data.wildfire.id, "varnavas");
    assert_eq!( data.wildfire.metar_airport.as_deref(), Some("LGAV"));

    let store = &data.store;
    assert_eq!( store.n_events( EventKind::Fire), 2); // the broken viirs record is skipped
    assert_eq!( store.n_events( EventKind::Metar), 2);
    assert_eq!( store.n_events( EventKind::FlightPing), 2); // the broken sample is skipped

    // announcements referencing unresolvable areas are dropped
    assert_eq!( store.n_events( EventKind::Announcement), 2);

    let track = store.trajectory( "e49b2f").unwrap();
    assert_eq!( track.len(), 2);
    assert_eq!( track[0].callsign, "CNDR21");

    // positioned announcements satisfy the to-iff-evacuate invariant
    for a in store.announcements() {
        match a.kind {
            ember_geocode::AnnouncementKind::Alert => assert!( a.to.is_empty()),
            ember_geocode::AnnouncementKind::Evacuate => assert!( !a.to.is_empty()),
        }
        assert!( !a.from.is_empty());
    }
}

#[test]
fn test_missing_source_files_are_empty () {
    let dir = tempfile::tempdir().unwrap();
    fs::write( dir.path().join("wildfire.json"), WILDFIRE_JSON).unwrap();

    let data = load_wildfire_dir( dir.path(), Utc::now()).unwrap();
    assert_eq!( data.store.n_events( EventKind::Fire), 0);
    assert_eq!( data.store.n_events( EventKind::FlightPing), 0);
}

#[test]
fn test_missing_wildfire_record_is_fatal () {
    let dir = tempfile::tempdir().unwrap();
    assert!( load_wildfire_dir( dir.path(), Utc::now()).is_err());
}

#[test]
fn test_degenerate_bounding_box_is_fatal () {
    let dir = tempfile::tempdir().unwrap();
    let bad = WILDFIRE_JSON.replace( "[[38.0, 23.7], [38.4, 24.1]]", "[[38.0, 23.7], [38.0, 24.1]]");
    fs::write( dir.path().join("wildfire.json"), bad).unwrap();

    match load_wildfire_dir( dir.path(), Utc::now()) {
        Err(EmberReplayError::ConfigError(msg)) => println!("rejected as expected: {msg}"),
        other => panic!("expected ConfigError, got {:?}", other.map(|_| ()))
    }
}

#[test]
fn test_live_wildfire_period_clamps_to_now () {
    let dir = tempfile::tempdir().unwrap();
    let live = WILDFIRE_JSON.replace( "\"end\": \"2024-08-13T12:00:00Z\",\n", "");
    fs::write( dir.path().join("wildfire.json"), live).unwrap();

    let now = Utc.with_ymd_and_hms( 2024, 8, 12, 0, 0, 0).unwrap();
    let data = load_wildfire_dir( dir.path(), now).unwrap();
    assert!( data.wildfire.end.is_none());

    let (start, end) = data.wildfire.period( now);
    assert_eq!( start, EpochMillis::from( data.wildfire.start));
    assert_eq!( end, EpochMillis::from( now));
}

#[test]
fn test_event_union_wire_format () {
    // the tagged union format of the merged event feed
    let events: Vec<TimedEvent> = serde_json::from_str( r#"[
        { "event": "fire", "position": [38.2, 23.9], "timestamp": 100, "instrument": "VIIRS", "satellite": "N20" },
        { "event": "flightPing", "icao24": "e49b2f", "callsign": "CNDR21", "position": [38.2, 23.9],
          "altitude": 450.0, "velocity": 70.0, "verticalSpeed": -2.0, "heading": 90.0, "squawk": "7000", "timestamp": 101 },
        { "event": "metar", "icaoId": "LGAV", "raw": "...", "timestamp": 102,
          "wind": { "direction": 360, "speed": 4, "variable": false }, "temperature": 33, "dewPoint": 17, "qnh": 1008 },
        { "event": "announcement", "type": "alert", "timestamp": 103,
          "from": [ { "name": "Varnavas", "position": [38.22, 23.93] } ] }
    ]"#).unwrap();

    assert_eq!( events.len(), 4);
    assert_eq!( events[0].kind(), EventKind::Fire);
    assert_eq!( events[1].kind(), EventKind::FlightPing);
    assert_eq!( events[2].kind(), EventKind::Metar);
    assert_eq!( events[3].kind(), EventKind::Announcement);
    assert_eq!( events[3].timestamp(), EpochSecs::new(103));

    // and back out with the same tags
    let json = serde_json::to_string( &events).unwrap();
    assert!( json.contains( r#""event":"flightPing""#));
    assert!( json.contains( r#""event":"announcement""#));
}
