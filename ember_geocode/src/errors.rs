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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmberGeocodeError>;

#[derive(Error, Debug)]
pub enum EmberGeocodeError {
    #[error("no geocode results found for {0}")]
    NoGeocodeResult( String ),

    #[error("local time not resolvable: {0}")]
    BadLocalTime( String ),

    #[error("date parse error {0}")]
    DateParseError( #[from] chrono::ParseError),

    #[error("Reqwest error {0}")]
    ReqwestError( #[from] reqwest::Error),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("serde error {0}")]
    SerdeError( #[from] serde_json::Error),
}
