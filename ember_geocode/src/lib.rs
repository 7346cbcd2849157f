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

use std::collections::HashMap;
use async_trait::async_trait;
use chrono::{NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::{Serialize, Deserialize};
use tracing::warn;

use ember_common::datetime::EpochSecs;
use ember_common::geo::{LatLon, GeoRect};

pub mod errors;
pub use errors::*;

pub mod google;
pub use google::*;

/* #region provider interface *******************************************************************/

/// ranked candidate positions for a free text place name query.
/// Implementations append their own region qualifier - callers pass the bare area name
#[async_trait]
pub trait GeocodeProvider {
    async fn candidates (&self, area_name: &str) -> Result<Vec<LatLon>>;
}

/* #endregion provider interface */

/* #region area resolution **********************************************************************/

/// outcome of a bounding box constrained area resolution
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Resolution {
    pub position: LatLon,
    pub rank: usize,     // index of the picked candidate in provider order
    pub in_bounds: bool, // false means we fell back to the top candidate
}

/// pick the first candidate (in provider rank order) that falls within `bounds`.
/// A later-than-first pick and the out-of-bounds fallback are soft conditions that only
/// produce diagnostics; an empty candidate list is an error and the caller has to skip
/// the area name
pub fn select_candidate (area_name: &str, candidates: &[LatLon], bounds: &GeoRect) -> Result<Resolution> {
    if candidates.is_empty() {
        return Err( EmberGeocodeError::NoGeocodeResult( area_name.to_string()))
    }

    for (rank, position) in candidates.iter().enumerate() {
        if bounds.contains( position) {
            if rank > 0 {
                warn!("did not pick first geocode result for {}, because it was out of bounds. Result #{} was within bounds", area_name, rank + 1);
            }
            return Ok( Resolution { position: *position, rank, in_bounds: true } )
        }
    }

    warn!("no geocode result was within bounds for {}", area_name);
    Ok( Resolution { position: candidates[0], rank: 0, in_bounds: false } )
}

pub async fn resolve_area<P: GeocodeProvider + Sync> (provider: &P, area_name: &str, bounds: &GeoRect) -> Result<Resolution> {
    let candidates = provider.candidates( area_name).await?;
    select_candidate( area_name, &candidates, bounds)
}

/// resolve a list of area names into a name -> position table. Names that cannot be
/// resolved are skipped with a diagnostic - their announcements become unpositionable
/// and are dropped downstream, they never abort ingestion
pub async fn resolve_areas<P: GeocodeProvider + Sync> (provider: &P, area_names: &[String], bounds: &GeoRect) -> HashMap<String,LatLon> {
    let mut coordinates: HashMap<String,LatLon> = HashMap::with_capacity( area_names.len());

    for area_name in area_names {
        match resolve_area( provider, area_name, bounds).await {
            Ok(resolution) => {
                coordinates.insert( area_name.clone(), resolution.position);
            }
            Err(e) => warn!("skipping area name {:?}: {}", area_name, e)
        }
    }

    coordinates
}

/* #endregion area resolution */

/* #region announcement records *****************************************************************/

/// announcement category. This is a closed set - evacuation orders carry destination areas,
/// alerts do not
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementKind {
    Alert,
    Evacuate,
}

/// one announcement as scraped, with area references still by name.
/// `timestamp` is absent until [`process_announcements`] normalized `date_string`
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tweet_url: Option<String>,
    pub date_string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<EpochSecs>,
    #[serde(rename = "type")]
    pub kind: AnnouncementKind,
    pub from: Vec<String>,
    #[serde(default)]
    pub to: Vec<String>,
}

/// the announcements.json document - input (without coordinates/timestamps) and
/// output (with both) of announcement processing
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementsFile {
    pub area_names: Vec<String>,
    pub announcements: Vec<AnnouncementRecord>,
    #[serde(default)]
    pub area_coordinates: HashMap<String,LatLon>,
}

/// announcement publication times are naive local date strings - normalize to UTC seconds.
/// Nonexistent or ambiguous local times (DST transitions) are rejected
pub fn local_datetime_to_epoch (date_string: &str, timezone: Tz) -> Result<EpochSecs> {
    let naive = NaiveDateTime::parse_from_str( date_string, "%Y-%m-%dT%H:%M:%S")?;
    timezone.from_local_datetime( &naive)
        .single()
        .map( |dt| dt.into())
        .ok_or_else( || EmberGeocodeError::BadLocalTime( format!("{} in {}", date_string, timezone)))
}

/// geocode all area names against the wildfire bounding box and normalize announcement
/// timestamps. Records whose date string cannot be normalized are dropped with a
/// diagnostic, the batch continues
pub async fn process_announcements<P: GeocodeProvider + Sync> (
    mut file: AnnouncementsFile, provider: &P, bounds: &GeoRect, timezone: Tz
) -> AnnouncementsFile {
    file.area_coordinates = resolve_areas( provider, &file.area_names, bounds).await;

    let mut announcements = Vec::with_capacity( file.announcements.len());
    for mut record in file.announcements.into_iter() {
        match local_datetime_to_epoch( &record.date_string, timezone) {
            Ok(timestamp) => {
                record.timestamp = Some(timestamp);
                announcements.push( record);
            }
            Err(e) => warn!("dropping announcement: {}", e)
        }
    }
    file.announcements = announcements;

    file
}

/* #endregion announcement records */
