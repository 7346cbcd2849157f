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

use std::fs;
use std::io::{self, Error as IOError, ErrorKind};
use std::path::Path;
use serde::de::DeserializeOwned;

type Result<T> = std::result::Result<T, std::io::Error>;

pub fn filepath_contents_as_string (path: impl AsRef<Path>) -> Result<String> {
    fs::read_to_string( path.as_ref())
}

pub fn read_lines (path: impl AsRef<Path>) -> Result<Vec<String>> {
    let contents = fs::read_to_string( path.as_ref())?;
    Ok( contents.lines().map(|l| l.to_string()).collect() )
}

/// deserialize a RON config document. Configs are small so we read them whole
pub fn load_ron_config<T: DeserializeOwned> (path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let contents = fs::read_to_string( path)?;
    ron::from_str( &contents).map_err( |e| {
        IOError::new( ErrorKind::InvalidData, format!("bad config {:?}: {}", path, e))
    })
}

/// deserialize a JSON document (our ingestion file format)
pub fn load_json_file<T: DeserializeOwned> (path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let contents = fs::read_to_string( path)?;
    serde_json::from_str( &contents).map_err( |e| {
        IOError::new( ErrorKind::InvalidData, format!("bad JSON {:?}: {}", path, e))
    })
}
