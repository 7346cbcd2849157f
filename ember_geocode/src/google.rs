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

//! live [`GeocodeProvider`] against the Google geocoding REST endpoint.
//! Failures are reported per call - retry policy (if any) belongs to the caller's fetch layer

use async_trait::async_trait;
use reqwest::Client;
use serde::{Serialize, Deserialize};

use ember_common::geo::LatLon;
use crate::errors::Result;
use crate::GeocodeProvider;

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct GeocodeConfig {
    pub base_url: String, // e.g. "https://maps.googleapis.com/maps/api/geocode/json"
    pub api_key: String,
    pub region_qualifier: String, // fixed query suffix disambiguating the region, e.g. "Attiki, Greece"
}

pub struct GoogleGeocoder {
    config: GeocodeConfig,
    client: Client,
}

impl GoogleGeocoder {
    pub fn new (config: GeocodeConfig)->Self {
        GoogleGeocoder { config, client: Client::new() }
    }
}

//--- response fragments we care about (the endpoint returns much more)

#[derive(Deserialize)]
struct GeocodeResponse {
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

#[async_trait]
impl GeocodeProvider for GoogleGeocoder {
    async fn candidates (&self, area_name: &str) -> Result<Vec<LatLon>> {
        let address = format!("{}, {}", area_name, self.config.region_qualifier);

        let response: GeocodeResponse = self.client.get( &self.config.base_url)
            .query( &[("address", address.as_str()), ("key", self.config.api_key.as_str())])
            .send().await?
            .error_for_status()?
            .json().await?;

        Ok( response.results.into_iter()
            .map( |r| LatLon::from_degrees( r.geometry.location.lat, r.geometry.location.lng))
            .collect() )
    }
}
