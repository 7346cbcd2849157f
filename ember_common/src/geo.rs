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
use serde::ser::{Serialize, SerializeTuple, Serializer};
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};

use crate::angle::{normalize_90, normalize_180};

/// geographic position in geodetic degrees.
/// Note the wire format of all our event sources is a `[lat, lon]` pair, which is what the
/// serde impls below produce/accept
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct LatLon {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl LatLon {
    pub fn from_degrees (lat_deg: f64, lon_deg: f64)->Self {
        LatLon { lat_deg: normalize_90(lat_deg), lon_deg: normalize_180(lon_deg) }
    }

    /// linear in-between point - adequate over the small extents of a wildfire bounding box
    pub fn lerp (&self, other: &LatLon, frac: f64)->LatLon {
        LatLon {
            lat_deg: self.lat_deg + (other.lat_deg - self.lat_deg) * frac,
            lon_deg: self.lon_deg + (other.lon_deg - self.lon_deg) * frac,
        }
    }
}

impl fmt::Display for LatLon {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.lat_deg, self.lon_deg)
    }
}

impl Serialize for LatLon {
    fn serialize<S> (&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_tuple(2)?;
        state.serialize_element( &self.lat_deg)?;
        state.serialize_element( &self.lon_deg)?;
        state.end()
    }
}

struct LatLonVisitor;

impl<'de> Visitor<'de> for LatLonVisitor {
    type Value = LatLon;

    fn expecting (&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a [lat, lon] degree pair")
    }

    fn visit_seq<A> (self, mut seq: A) -> Result<LatLon, A::Error> where A: SeqAccess<'de> {
        let lat: f64 = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let lon: f64 = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(1, &self))?;
        Ok( LatLon { lat_deg: lat, lon_deg: lon })
    }
}

impl<'de> Deserialize<'de> for LatLon {
    fn deserialize<D> (deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        deserializer.deserialize_seq( LatLonVisitor)
    }
}

/// an axis-aligned geographic rectangle with normalized corners.
/// Constructed from any two opposite corners, in any order
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoRect {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl GeoRect {
    pub fn from_corners (a: LatLon, b: LatLon)->Self {
        GeoRect {
            min_lat: a.lat_deg.min( b.lat_deg),
            min_lon: a.lon_deg.min( b.lon_deg),
            max_lat: a.lat_deg.max( b.lat_deg),
            max_lon: a.lon_deg.max( b.lon_deg),
        }
    }

    /// boundary inclusive
    pub fn contains (&self, p: &LatLon)->bool {
        p.lat_deg >= self.min_lat && p.lat_deg <= self.max_lat
            && p.lon_deg >= self.min_lon && p.lon_deg <= self.max_lon
    }
}

impl fmt::Display for GeoRect {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoRect( [{},{}] , [{},{}] )", self.min_lat, self.min_lon, self.max_lat, self.max_lon)
    }
}
