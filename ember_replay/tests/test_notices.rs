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

use ember_common::datetime::{minutes, EpochMillis, EpochSecs};
use ember_common::geo::LatLon;
use ember_geocode::AnnouncementKind;
use ember_replay::*;

fn named (name: &str) -> NamedPosition {
    NamedPosition { name: name.to_string(), position: LatLon::from_degrees( 38.2, 23.9) }
}

fn announcement (t: i64, kind: AnnouncementKind, from: Vec<NamedPosition>, to: Vec<NamedPosition>) -> Announcement {
    Announcement { tweet_url: None, kind, timestamp: EpochSecs::new(t), from, to }
}

#[test]
fn test_notice_descriptions () {
    let announcements = vec![
        announcement( 100, AnnouncementKind::Alert, vec![ named("Varnavas"), named("Grammatiko") ], vec![]),
        announcement( 200, AnnouncementKind::Evacuate, vec![ named("Varnavas") ], vec![ named("Marathon"), named("Nea Makri") ]),
    ];

    let notices = derive_notices( &announcements);
    assert_eq!( notices.len(), 2);

    assert_eq!( notices[0].description, "high alert for Varnavas, Grammatiko");
    assert_eq!( notices[0].source, "112");
    assert_eq!( notices[0].timestamp, EpochSecs::new(100));

    assert_eq!( notices[1].description, "evacuate from Varnavas to Marathon, Nea Makri");
}

#[test]
fn test_unpositionable_announcements_yield_no_notice () {
    let announcements = vec![
        announcement( 100, AnnouncementKind::Alert, vec![], vec![]),                     // nothing to point at
        announcement( 200, AnnouncementKind::Evacuate, vec![ named("Varnavas") ], vec![]), // evacuation without destination
        announcement( 300, AnnouncementKind::Alert, vec![ named("Varnavas") ], vec![]),
    ];

    let notices = derive_notices( &announcements);
    assert_eq!( notices.len(), 1);
    assert_eq!( notices[0].timestamp, EpochSecs::new(300));
}

#[test]
fn test_active_notice_window () {
    let announcements = vec![
        announcement( 600, AnnouncementKind::Alert, vec![ named("A") ], vec![]),
        announcement( 1200, AnnouncementKind::Alert, vec![ named("B") ], vec![]),
        announcement( 1800, AnnouncementKind::Alert, vec![ named("C") ], vec![]),
    ];
    let notices = derive_notices( &announcements);

    // (600, 1800] with a 20 minute fade
    let active = active_notices( &notices, EpochMillis::from_secs( 1800), minutes(20));
    assert_eq!( active.len(), 2);
    assert_eq!( active[0].description, "high alert for B");

    // scrubbing back re-evaluates the same window
    let active = active_notices( &notices, EpochMillis::from_secs( 700), minutes(20));
    assert_eq!( active.len(), 1);
    assert_eq!( active[0].description, "high alert for A");
}
