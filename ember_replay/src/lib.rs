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

//! the temporal event engine replaying a wildfire's recorded event streams - aircraft
//! pings, satellite thermal anomalies, METAR weather and emergency announcements -
//! against one scrubbable virtual clock

mod errors;
pub use errors::*;

pub mod events;
pub use events::*;

pub mod store;
pub use store::*;

pub mod interp;
pub use interp::*;

pub mod clock;
pub use clock::*;

pub mod wildfire;
pub use wildfire::*;

pub mod load;
pub use load::*;

pub mod notices;
pub use notices::*;
