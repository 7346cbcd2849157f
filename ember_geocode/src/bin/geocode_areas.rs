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

//! tool to geocode announcement area names against the wildfire bounding box and to
//! normalize announcement timestamps into the announcements.json event input

use std::fs;
use anyhow::Result;
use chrono_tz::Tz;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use ember_common::{define_cli, check_cli};
use ember_common::fs::{load_ron_config, load_json_file};
use ember_common::geo::{LatLon, GeoRect};
use ember_geocode::{AnnouncementsFile, GeocodeConfig, GoogleGeocoder, process_announcements};

// the only wildfire.json fields this tool needs
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WildfireFragment {
    bounding_box: [LatLon; 2],
    timezone: Tz,
}

define_cli! { ARGS [about="tool to geocode announcement area names into announcements.json"] =
    config: String [help="pathname of geocoder RON config", long, default_value="geocode.ron"],
    wildfire: String [help="pathname of wildfire.json (bounding box and timezone)", long],
    output: String [help="pathname of the processed JSON output", short, default_value="announcements.json"],
    pathname: String [help="path to raw announcements JSON"]
}

#[tokio::main]
async fn main ()->Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let config: GeocodeConfig = load_ron_config( &ARGS.config)?;
    let wildfire: WildfireFragment = load_json_file( &ARGS.wildfire)?;
    let file: AnnouncementsFile = load_json_file( &ARGS.pathname)?;

    let bounds = GeoRect::from_corners( wildfire.bounding_box[0], wildfire.bounding_box[1]);
    let provider = GoogleGeocoder::new( config);

    let processed = process_announcements( file, &provider, &bounds, wildfire.timezone).await;

    println!("resolved {} of {} area names, kept {} announcements",
        processed.area_coordinates.len(), processed.area_names.len(), processed.announcements.len());

    fs::write( &ARGS.output, serde_json::to_string_pretty( &processed)?)?;
    println!("processed announcements saved to {}", ARGS.output);

    Ok(())
}
