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

//! tool to replay a wildfire data directory to stdout: drives the playback clock over the
//! event store and prints the per-hour situation plus announcements as they activate

use anyhow::Result;
use chrono::Utc;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use ember_common::{check_cli, define_cli};
use ember_common::datetime::{hours, EpochMillis};
use ember_metar::Weather;
use ember_replay::{
    derive_notices, load_wildfire_dir, position_at, ClockDriver, EventKind,
    FireSource, HeadingMode, PlaybackClock, PlaybackState, DEFAULT_LOOKBACK,
};

define_cli! { ARGS [about="replay a wildfire data directory to stdout"] =
    speed: Option<u32> [help="playback speed (one of the ladder values)", long],
    fire_window: u64 [help="fire fade window in hours", long, default_value="6"],
    announcement_window: u64 [help="announcement fade window in hours", long, default_value="1"],
    pathname: String [help="wildfire data directory"]
}

#[tokio::main]
async fn main ()->Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let data = load_wildfire_dir( &ARGS.pathname, Utc::now())?;
    let wildfire = &data.wildfire;
    let store = &data.store;

    println!("wildfire {} ({})", wildfire.name, wildfire.id);
    for kind in [EventKind::FlightPing, EventKind::Fire, EventKind::Metar, EventKind::Announcement] {
        println!("  {}: {} events", kind, store.n_events( kind));
    }

    let notices = derive_notices( store.announcements());

    let (start, end) = wildfire.period( Utc::now());
    let mut clock = PlaybackClock::new( start, end);
    if let Some(speed) = ARGS.speed { clock.set_speed( speed) }
    println!("replaying {} .. {} at {}x", start, end, clock.speed());

    let (tx, mut rx) = mpsc::unbounded_channel();
    clock.set_listener( move |t| { let _ = tx.send( t); });

    let mut driver = ClockDriver::new( clock);
    let handle = driver.clock();
    driver.play();

    let fire_window = hours( ARGS.fire_window);
    let announcement_window = hours( ARGS.announcement_window);

    let mut last_hour = i64::MIN;
    let mut printed_notices = 0;

    while let Some(t) = rx.recv().await {
        // notices print once, when they enter the window
        while printed_notices < notices.len() && notices[printed_notices].timestamp.millis() <= t {
            let n = &notices[printed_notices];
            println!("{}  [{}] {}", n.timestamp, n.source, n.description);
            printed_notices += 1;
        }

        let hour = t.millis().div_euclid( 3_600_000);
        if hour != last_hour {
            last_hour = hour;
            print_situation( &data, t, fire_window, announcement_window);
        }

        if t >= end { break }
    }

    let clock = handle.lock().unwrap();
    assert!( clock.state() == PlaybackState::Stopped);
    println!("replay done at {}", clock.time());

    Ok(())
}

fn print_situation (data: &ember_replay::WildfireData, t: EpochMillis, fire_window: std::time::Duration, announcement_window: std::time::Duration) {
    let store = &data.store;

    let n_fires = store.active_fires( t, fire_window, FireSource::All).count();
    let n_announcements = store.active_announcements( t, announcement_window).len();

    let mut aircraft: Vec<String> = Vec::new();
    for (icao24, track) in store.trajectories() {
        if let Some(state) = position_at( track, t, DEFAULT_LOOKBACK, HeadingMode::Linear) {
            aircraft.push( format!("{} {} hdg {:.0}", icao24, state.position, state.heading));
        }
    }

    let weather = store.current_metar( t).map( |m| Weather::from_metar( m));
    let weather = match &weather {
        Some(w) => format!("wind {} at {} kt, {}C, {}% rh", w.wind_direction, w.wind_speed, w.temperature, w.humidity),
        None => "no weather yet".to_string()
    };

    println!("---- {} | fires({}h): {} | announcements({}h): {} | aircraft: {} | {}",
        t, fire_window.as_secs()/3600, n_fires, announcement_window.as_secs()/3600, n_announcements, aircraft.len(), weather);
    for a in &aircraft { println!("       {}", a) }
}
