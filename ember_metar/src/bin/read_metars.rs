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

//! tool to decode raw METAR report lines into the metars.json event input

use std::fs;
use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing_subscriber::EnvFilter;

use ember_common::{define_cli, check_cli};
use ember_metar::parse_metar_file;

define_cli! { ARGS [about="tool to decode raw METAR report lines into metars.json"] =
    reference_date: String [help="UTC reference date resolving day-of-month wraparound (RFC 3339) - use the start of the search window minus a safety margin", long],
    output: String [help="pathname of the JSON output file", short, default_value="metars.json"],
    pathname: String [help="path to file with one raw METAR per line"]
}

fn main ()->Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let reference_date: DateTime<Utc> = ARGS.reference_date.parse()?;
    let metars = parse_metar_file( &ARGS.pathname, reference_date)?;

    fs::write( &ARGS.output, serde_json::to_string_pretty( &metars)?)?;
    println!("{} metars saved to {}", metars.len(), ARGS.output);

    Ok(())
}
