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

pub type Result<T> = std::result::Result<T, EmberMetarError>;

#[derive(Error, Debug)]
pub enum EmberMetarError {
    #[error("malformed report ({1}): {0}")]
    MalformedReport( String, String ),

    #[error("incomplete report ({1}): {0}")]
    IncompleteReport( String, String ),

    #[error("bad observation time group {0}")]
    BadTimestamp( String ),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("serde error {0}")]
    SerdeError( #[from] serde_json::Error),
}

pub fn malformed (raw: &str, what: impl ToString)->EmberMetarError {
    EmberMetarError::MalformedReport( raw.to_string(), what.to_string())
}

pub fn incomplete (raw: &str, what: impl ToString)->EmberMetarError {
    EmberMetarError::IncompleteReport( raw.to_string(), what.to_string())
}
