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

use std::sync::{Arc, Mutex};
use std::time::Duration;

use ember_common::datetime::{hours, EpochMillis};
use ember_replay::*;

// run with "cargo test -p ember_replay --test test_clock -- --nocapture"

#[test]
fn test_initial_speed_selection () {
    // a 6 hour fire: 21600s / 150s target -> 144x, closest ladder value is 64
    assert_eq!( initial_speed( hours(6)), 64);

    // ladder extremes
    assert_eq!( initial_speed( Duration::from_secs(150)), 1);
    assert_eq!( initial_speed( Duration::ZERO), 1);
    assert_eq!( initial_speed( hours(10_000)), 4096);

    // a 10 day fire: 864000s / 150 -> 5760x, still clamps to the top of the ladder
    assert_eq!( initial_speed( hours(240)), 4096);
}

#[test]
fn test_play_to_end_exactly () {
    let end = EpochMillis::new( 10_000);
    let mut clock = PlaybackClock::new( EpochMillis::new(0), end);
    assert_eq!( clock.state(), PlaybackState::Stopped);
    assert_eq!( clock.speed(), 1); // 10 virtual seconds replay in well under the target

    clock.play();
    assert_eq!( clock.state(), PlaybackState::Playing);

    let mut ticks = 0;
    while clock.is_playing() {
        clock.tick();
        ticks += 1;
        assert!( ticks <= 200, "clock did not stop");
    }

    // 10_000ms / (1x * 50ms) = 200 ticks, landing on end exactly with no overshoot
    assert_eq!( ticks, 200);
    assert_eq!( clock.time(), end);
    assert_eq!( clock.state(), PlaybackState::Stopped);
}

#[test]
fn test_end_clamp_without_overshoot () {
    // an end that is not a multiple of the tick step still is hit exactly
    let end = EpochMillis::new( 10_025);
    let mut clock = PlaybackClock::new( EpochMillis::new(0), end);
    clock.play();

    while clock.is_playing() { clock.tick() }
    assert_eq!( clock.time(), end);
}

#[test]
fn test_tick_is_noop_while_stopped () {
    let mut clock = PlaybackClock::new( EpochMillis::new(0), EpochMillis::new(10_000));
    clock.tick();
    assert_eq!( clock.time(), EpochMillis::new(0));

    clock.play();
    clock.tick();
    assert_eq!( clock.time(), EpochMillis::new(50));

    clock.pause();
    clock.tick();
    assert_eq!( clock.time(), EpochMillis::new(50));
}

#[test]
fn test_scrub_preserves_state_and_clamps () {
    let mut clock = PlaybackClock::new( EpochMillis::new(1000), EpochMillis::new(11_000));

    clock.scrub( EpochMillis::new( 5000));
    assert_eq!( clock.time(), EpochMillis::new(5000));
    assert_eq!( clock.state(), PlaybackState::Stopped); // scrubbing does not start playback

    clock.play();
    clock.scrub( EpochMillis::new( 2000));
    assert_eq!( clock.time(), EpochMillis::new(2000));
    assert_eq!( clock.state(), PlaybackState::Playing); // ... nor stop it

    // out of range scrubs clamp to the period
    clock.scrub( EpochMillis::new( 0));
    assert_eq!( clock.time(), EpochMillis::new(1000));
    clock.scrub( EpochMillis::new( 999_999));
    assert_eq!( clock.time(), EpochMillis::new(11_000));
}

#[test]
fn test_speed_ladder_steps () {
    let mut clock = PlaybackClock::new( EpochMillis::new(0), EpochMillis::new(10_000));
    assert_eq!( clock.speed(), 1);

    clock.speed_down();
    assert_eq!( clock.speed(), 1); // already at the bottom

    clock.speed_up();
    assert_eq!( clock.speed(), 4);
    clock.speed_up();
    assert_eq!( clock.speed(), 16);
    clock.speed_down();
    assert_eq!( clock.speed(), 4);

    clock.set_speed( 1024);
    assert_eq!( clock.speed(), 1024);
    clock.set_speed( 17); // not on the ladder - ignored
    assert_eq!( clock.speed(), 1024);

    for _ in 0..10 { clock.speed_up() }
    assert_eq!( clock.speed(), 4096); // capped at the top
}

#[test]
fn test_listener_notification () {
    let seen: Arc<Mutex<Vec<EpochMillis>>> = Arc::new( Mutex::new( Vec::new()));
    let seen_by_listener = seen.clone();

    let mut clock = PlaybackClock::new( EpochMillis::new(0), EpochMillis::new(10_000));
    clock.set_listener( move |t| seen_by_listener.lock().unwrap().push( t));

    clock.play();
    clock.tick();
    clock.tick();
    clock.scrub( EpochMillis::new( 5000));
    clock.scrub( EpochMillis::new( 5000)); // repeated notification at the same time is fine

    let seen = seen.lock().unwrap();
    assert_eq!( seen.as_slice(), &[
        EpochMillis::new(50), EpochMillis::new(100),
        EpochMillis::new(5000), EpochMillis::new(5000)
    ]);
}

#[tokio::test(start_paused = true)]
async fn test_driver_runs_to_end () {
    let clock = PlaybackClock::new( EpochMillis::new(0), EpochMillis::new(1000));
    let mut driver = ClockDriver::new( clock);
    let handle = driver.clock();

    driver.play();
    assert!( handle.lock().unwrap().is_playing());

    // paused tokio time auto-advances whenever the runtime is idle
    let mut rounds = 0;
    while handle.lock().unwrap().is_playing() {
        tokio::time::sleep( Duration::from_millis(50)).await;
        rounds += 1;
        assert!( rounds <= 100, "driver did not run the clock to its end");
    }

    let time = handle.lock().unwrap().time();
    assert_eq!( time, EpochMillis::new(1000));

    driver.terminate();
}

#[tokio::test(start_paused = true)]
async fn test_driver_pause_cancels_timer () {
    let clock = PlaybackClock::new( EpochMillis::new(0), EpochMillis::new(1_000_000));
    let mut driver = ClockDriver::new( clock);
    let handle = driver.clock();

    driver.play();
    tokio::time::sleep( Duration::from_millis(200)).await;
    driver.pause();

    tokio::time::sleep( Duration::from_millis(100)).await; // let the tick task observe the stop
    let paused_at = handle.lock().unwrap().time();
    assert!( paused_at > EpochMillis::new(0));

    // no more ticks arrive while paused
    tokio::time::sleep( Duration::from_millis(500)).await;
    assert_eq!( handle.lock().unwrap().time(), paused_at);

    driver.play();
    tokio::time::sleep( Duration::from_millis(200)).await;
    assert!( handle.lock().unwrap().time() > paused_at);

    driver.terminate();
}
