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
use itertools::Itertools;
use serde::Serialize;

use ember_common::datetime::{EpochMillis, EpochSecs};
use ember_geocode::AnnouncementKind;

use crate::events::Announcement;

/// the emergency service the announcements were published through
pub const NOTICE_SOURCE_112: &str = "112";

/// a human readable timeline entry derived from an announcement
#[derive(Serialize,Debug,Clone,PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub timestamp: EpochSecs,
    #[serde(rename = "type")]
    pub source: String,
    pub description: String,
}

/// derive timeline notices from positioned announcements. Input order is preserved, so a
/// store-sorted slice yields time-sorted notices
pub fn derive_notices (announcements: &[Announcement]) -> Vec<Notice> {
    announcements.iter().filter_map( |a| {
        if a.from.is_empty() { return None }

        let description = match a.kind {
            AnnouncementKind::Alert => {
                format!("high alert for {}", a.from.iter().map( |p| p.name.as_str()).join(", "))
            }
            AnnouncementKind::Evacuate => {
                if a.to.is_empty() { return None }
                format!("evacuate from {} to {}",
                    a.from.iter().map( |p| p.name.as_str()).join(", "),
                    a.to.iter().map( |p| p.name.as_str()).join(", "))
            }
        };

        Some( Notice { timestamp: a.timestamp, source: NOTICE_SOURCE_112.to_string(), description })
    }).collect()
}

/// the notices in the fade window `(at - window, at]` of a time-sorted notice slice
pub fn active_notices<'a> (notices: &'a [Notice], at: EpochMillis, window: Duration) -> &'a [Notice] {
    let lo = notices.partition_point( |n| n.timestamp.millis() <= at.minus( window));
    let hi = notices.partition_point( |n| n.timestamp.millis() <= at);
    &notices[lo..hi]
}
