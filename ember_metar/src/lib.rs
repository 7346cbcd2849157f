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

use std::fmt;
use std::path::Path;
use chrono::{DateTime, Datelike, Months, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Deserialize};
use tracing::warn;

use ember_common::datetime::EpochSecs;
use ember_common::fs::read_lines;

mod errors;
pub use errors::*;

/* #region METAR data structures ****************************************************************/

/// decoded METAR weather report.
/// The original report text is retained in `raw` so that decoded values can be audited
/// against their source
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMetar {
    pub icao_id: String,
    pub raw: String,
    pub timestamp: EpochSecs,
    pub wind: Wind,
    pub temperature: i32, // Celsius
    pub dew_point: i32,   // Celsius
    pub qnh: u32,         // hPa
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wind {
    pub direction: WindDirection,
    pub speed: u32, // kt
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gusting: Option<u32>, // kt
    pub variable: bool,
}

impl Wind {
    /// reports without a KT group decode as calm
    pub fn calm ()->Self {
        Wind { direction: WindDirection::Degrees(0), speed: 0, gusting: None, variable: false }
    }
}

/// wind direction as reported: a 3-digit true bearing or the literal `VRB`.
/// The wire format mirrors the report (`number | "VRB"`)
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum WindDirection {
    Degrees(u16),
    Variable,
}

impl fmt::Display for WindDirection {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindDirection::Degrees(d) => write!(f, "{:03}", d),
            WindDirection::Variable => write!(f, "VRB"),
        }
    }
}

impl Serialize for WindDirection {
    fn serialize<S> (&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: serde::Serializer {
        match self {
            WindDirection::Degrees(d) => serializer.serialize_u16(*d),
            WindDirection::Variable => serializer.serialize_str("VRB"),
        }
    }
}

struct WindDirectionVisitor;

impl<'de> serde::de::Visitor<'de> for WindDirectionVisitor {
    type Value = WindDirection;

    fn expecting (&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a bearing in degrees or \"VRB\"")
    }

    fn visit_u64<E> (self, v: u64) -> std::result::Result<WindDirection, E> where E: serde::de::Error {
        Ok( WindDirection::Degrees(v as u16) )
    }

    fn visit_i64<E> (self, v: i64) -> std::result::Result<WindDirection, E> where E: serde::de::Error {
        Ok( WindDirection::Degrees(v as u16) )
    }

    fn visit_f64<E> (self, v: f64) -> std::result::Result<WindDirection, E> where E: serde::de::Error {
        Ok( WindDirection::Degrees(v as u16) )
    }

    fn visit_str<E> (self, v: &str) -> std::result::Result<WindDirection, E> where E: serde::de::Error {
        if v == "VRB" {
            Ok( WindDirection::Variable )
        } else {
            Err( serde::de::Error::custom( format!("unknown wind direction {:?}", v)) )
        }
    }
}

impl<'de> Deserialize<'de> for WindDirection {
    fn deserialize<D> (deserializer: D) -> std::result::Result<Self, D::Error> where D: serde::Deserializer<'de> {
        deserializer.deserialize_any( WindDirectionVisitor)
    }
}

/* #endregion METAR data structures */

/* #region report decoding **********************************************************************/

lazy_static! {
    // day/hour/minute observation time group, e.g. "112050Z" (trailing Z optional on input)
    static ref DTG_RE: Regex = Regex::new(r"^(\d{2})(\d{2})(\d{2})Z?$").unwrap();
}

/// decode a raw METAR line into a [`ParsedMetar`].
///
/// The report only carries day/hour/minute, so the absolute observation time is resolved
/// against the year and month of `reference_date`, advancing one month if the result would
/// precede it. Callers should pass the start of their search window minus a safety margin
/// (a day is plenty - consecutive reports are minutes apart)
pub fn parse_metar (raw: &str, reference_date: DateTime<Utc>) -> Result<ParsedMetar> {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    if parts.len() < 5 { return Err( malformed( raw, "fewer than 5 groups")) }

    let icao_id = parts[0].to_string();
    let timestamp = parse_observation_time( parts[1], reference_date)?;

    let mut wind_idx = 2;
    if parts[wind_idx] == "AUTO" { wind_idx += 1 }
    let wind = if wind_idx < parts.len() && parts[wind_idx].ends_with("KT") {
        parse_wind( raw, parts[wind_idx])?
    } else {
        Wind::calm()
    };

    let temp_group = parts.iter().find( |p| p.contains('/'))
        .ok_or_else( || incomplete( raw, "no temperature group"))?;
    let (temperature, dew_point) = parse_temperatures( raw, temp_group)?;

    let qnh_group = parts.iter().find( |p| p.starts_with('Q'))
        .ok_or_else( || incomplete( raw, "no QNH group"))?;
    let qnh: u32 = qnh_group[1..].parse()
        .map_err( |_| incomplete( raw, "unreadable QNH group"))?;

    Ok( ParsedMetar { icao_id, raw: raw.to_string(), timestamp, wind, temperature, dew_point, qnh } )
}

fn parse_observation_time (group: &str, reference_date: DateTime<Utc>) -> Result<EpochSecs> {
    let cap = DTG_RE.captures( group)
        .ok_or_else( || EmberMetarError::BadTimestamp( group.to_string()))?;

    let day: u32 = cap[1].parse().unwrap(); // the regex guarantees digits
    let hour: u32 = cap[2].parse().unwrap();
    let minute: u32 = cap[3].parse().unwrap();

    let date = Utc.with_ymd_and_hms( reference_date.year(), reference_date.month(), day, hour, minute, 0)
        .single()
        .ok_or_else( || EmberMetarError::BadTimestamp( group.to_string()))?;

    // a day-of-month before the reference day means the month already rolled over
    let date = if date < reference_date {
        date.checked_add_months( Months::new(1))
            .ok_or_else( || EmberMetarError::BadTimestamp( group.to_string()))?
    } else {
        date
    };

    Ok( date.into() )
}

fn parse_wind (raw: &str, group: &str) -> Result<Wind> {
    let body = &group[..group.len()-2]; // strip "KT"
    let variable = body.starts_with("VRB");

    let direction = if variable {
        WindDirection::Variable
    } else {
        let deg: u16 = body.get(0..3).and_then( |s| s.parse().ok())
            .ok_or_else( || malformed( raw, "unreadable wind direction"))?;
        WindDirection::Degrees( deg)
    };

    let speed: u32 = body.get(3..5).and_then( |s| s.parse().ok())
        .ok_or_else( || malformed( raw, "unreadable wind speed"))?;

    let gusting = match body.find('G') {
        Some(i) => Some( body[i+1..].parse()
            .map_err( |_| malformed( raw, "unreadable gust value"))? ),
        None => None
    };

    Ok( Wind { direction, speed, gusting, variable } )
}

fn parse_temperatures (raw: &str, group: &str) -> Result<(i32,i32)> {
    let (t, d) = group.split_once('/').unwrap(); // the caller checked for '/'
    let temperature = parse_signed_celsius( t).ok_or_else( || incomplete( raw, "unreadable temperature"))?;
    let dew_point = parse_signed_celsius( d).ok_or_else( || incomplete( raw, "unreadable dew point"))?;
    Ok( (temperature, dew_point) )
}

// METARs print negative values with an 'M' prefix ("28/M02")
fn parse_signed_celsius (s: &str) -> Option<i32> {
    if let Some(rest) = s.strip_prefix('M') {
        rest.parse::<i32>().ok().map( |v| -v)
    } else {
        s.parse().ok()
    }
}

/// decode a batch of raw report lines, skipping (and logging) undecodable ones.
/// A bad line is never fatal to the batch
pub fn parse_metar_batch<'a> (lines: impl IntoIterator<Item=&'a str>, reference_date: DateTime<Utc>) -> Vec<ParsedMetar> {
    let mut metars = Vec::new();
    for line in lines {
        if line.trim().is_empty() { continue }
        match parse_metar( line, reference_date) {
            Ok(metar) => metars.push( metar),
            Err(e) => warn!("skipping METAR line: {e}")
        }
    }
    metars
}

pub fn parse_metar_file (path: impl AsRef<Path>, reference_date: DateTime<Utc>) -> Result<Vec<ParsedMetar>> {
    let lines = read_lines( &path)?;
    Ok( parse_metar_batch( lines.iter().map(|l| l.as_str()), reference_date) )
}

/* #endregion report decoding */

/* #region derived weather **********************************************************************/

/// the weather values consumers actually display, derived from the most recent report
#[derive(Debug,Clone,PartialEq)]
pub struct Weather {
    pub wind_speed: u32,
    pub wind_direction: WindDirection,
    pub wind_gusting: Option<u32>,
    pub temperature: i32,
    pub humidity: u32, // percent
}

impl Weather {
    pub fn from_metar (metar: &ParsedMetar)->Self {
        Weather {
            wind_speed: metar.wind.speed,
            wind_direction: metar.wind.direction,
            wind_gusting: metar.wind.gusting,
            temperature: metar.temperature,
            humidity: relative_humidity( metar.temperature, metar.dew_point),
        }
    }
}

/// Magnus formula approximation from temperature and dew point, rounded percent
pub fn relative_humidity (temperature: i32, dew_point: i32) -> u32 {
    const A: f64 = 17.27;
    const B: f64 = 237.7;

    let alpha_dew = (A * dew_point as f64) / (B + dew_point as f64);
    let alpha_temp = (A * temperature as f64) / (B + temperature as f64);

    (100.0 * (alpha_dew - alpha_temp).exp()).round() as u32
}

const BEAUFORT_LIMITS: [u32; 12] = [1, 3, 6, 10, 16, 21, 27, 33, 40, 47, 55, 63];

/// Beaufort number for a knot speed (hurricane force caps at 12)
pub fn beaufort_from_knots (knots: u32) -> u32 {
    for (i, limit) in BEAUFORT_LIMITS.iter().enumerate() {
        if knots < *limit { return i as u32 }
    }
    12
}

/* #endregion derived weather */
