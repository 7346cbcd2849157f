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

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use ember_common::datetime::{duration_between, EpochMillis};

/// the discrete playback speed ladder (virtual seconds per wall clock second)
pub const PLAYBACK_SPEEDS: [u32; 7] = [1, 4, 16, 64, 256, 1024, 4096];

/// real time between ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// the wall clock playback duration the initial speed aims for, independent of how long
/// the wildfire actually burned
pub const TARGET_PLAY_SECS: u64 = 150;

/// ladder speed whose total wall clock play time comes closest to [`TARGET_PLAY_SECS`]
pub fn initial_speed (total: Duration) -> u32 {
    let target = total.as_secs() as f64 / TARGET_PLAY_SECS as f64;
    PLAYBACK_SPEEDS.iter().copied()
        .min_by( |a,b| {
            let da = (*a as f64 - target).abs();
            let db = (*b as f64 - target).abs();
            da.partial_cmp(&db).unwrap()
        })
        .unwrap() // the ladder is not empty
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
}

/// the virtual ("zulu") clock a wildfire session is replayed against.
///
/// This is a plain synchronous state machine - ticks are injected by whoever owns the
/// timer (see [`ClockDriver`]), which keeps every transition deterministic under test.
/// Virtual time is confined to `[start, end]`; reaching `end` stops playback with the
/// time exactly at `end`.
///
/// Every virtual time change notifies the single registered listener. Listeners must be
/// idempotent for repeated notifications at the same timestamp - delivery is not
/// guaranteed monotonic across consumer re-reads
pub struct PlaybackClock {
    start: EpochMillis,
    end: EpochMillis,
    time: EpochMillis,
    state: PlaybackState,
    speed: u32,
    listener: Option<Box<dyn FnMut(EpochMillis) + Send>>,
}

impl PlaybackClock {
    pub fn new (start: EpochMillis, end: EpochMillis)->Self {
        PlaybackClock {
            start,
            end,
            time: start,
            state: PlaybackState::Stopped,
            speed: initial_speed( duration_between( start, end)),
            listener: None,
        }
    }

    pub fn start (&self)->EpochMillis { self.start }
    pub fn end (&self)->EpochMillis { self.end }
    pub fn time (&self)->EpochMillis { self.time }
    pub fn state (&self)->PlaybackState { self.state }
    pub fn speed (&self)->u32 { self.speed }
    pub fn is_playing (&self)->bool { self.state == PlaybackState::Playing }

    /// the one downstream consumer. Re-registering replaces the previous listener
    pub fn set_listener (&mut self, listener: impl FnMut(EpochMillis) + Send + 'static) {
        self.listener = Some( Box::new( listener));
    }

    pub fn play (&mut self) {
        self.state = PlaybackState::Playing;
    }

    pub fn pause (&mut self) {
        self.state = PlaybackState::Stopped;
    }

    /// set virtual time directly. Valid in either state and does not change it
    pub fn scrub (&mut self, time: EpochMillis) {
        self.time = time.clamped( self.start, self.end);
        self.notify();
    }

    /// one step up the speed ladder
    pub fn speed_up (&mut self) {
        if let Some(i) = PLAYBACK_SPEEDS.iter().position( |s| *s == self.speed) {
            if i + 1 < PLAYBACK_SPEEDS.len() { self.speed = PLAYBACK_SPEEDS[i+1] }
        }
    }

    /// one step down the speed ladder
    pub fn speed_down (&mut self) {
        if let Some(i) = PLAYBACK_SPEEDS.iter().position( |s| *s == self.speed) {
            if i > 0 { self.speed = PLAYBACK_SPEEDS[i-1] }
        }
    }

    /// speeds are selected from the ladder, arbitrary values are ignored
    pub fn set_speed (&mut self, speed: u32) {
        if PLAYBACK_SPEEDS.contains( &speed) { self.speed = speed }
    }

    /// advance virtual time by one timer interval worth of playback. No-op while stopped.
    /// Hitting `end` clamps and forces a stop - there is no overshoot
    pub fn tick (&mut self) {
        if self.state != PlaybackState::Playing { return }

        let dt = (self.speed as i64) * (TICK_INTERVAL.as_millis() as i64);
        let t = EpochMillis::new( self.time.millis() + dt);

        if t >= self.end {
            self.time = self.end;
            self.state = PlaybackState::Stopped;
            debug!("playback reached end at {}", self.end);
        } else {
            self.time = t;
        }
        self.notify();
    }

    fn notify (&mut self) {
        let time = self.time;
        if let Some(listener) = &mut self.listener { listener( time) }
    }
}

/// the owner of the one real-time timer driving a [`PlaybackClock`].
///
/// All timer state lives here - `play`/`pause`/`terminate` are the only mutation surface,
/// and dropping the driver cancels the tick task. The shared clock handle can be used for
/// scrubbing and speed changes from elsewhere
pub struct ClockDriver {
    clock: Arc<Mutex<PlaybackClock>>,
    task: Option<JoinHandle<()>>,
}

impl ClockDriver {
    pub fn new (clock: PlaybackClock)->Self {
        ClockDriver { clock: Arc::new( Mutex::new( clock)), task: None }
    }

    pub fn clock (&self)->Arc<Mutex<PlaybackClock>> {
        self.clock.clone()
    }

    /// start (or resume) playback and make sure a tick task is running.
    /// The task exits as soon as the clock stops, so pausing or reaching the end also
    /// cancels the timer
    pub fn play (&mut self) {
        self.clock.lock().unwrap().play();

        if self.task.as_ref().map( |t| !t.is_finished()).unwrap_or(false) { return }

        let clock = self.clock.clone();
        self.task = Some( tokio::spawn( async move {
            let mut interval = tokio::time::interval( TICK_INTERVAL);
            interval.set_missed_tick_behavior( MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let mut clock = clock.lock().unwrap();
                clock.tick();
                if !clock.is_playing() { break }
            }
        }));
    }

    pub fn pause (&mut self) {
        self.clock.lock().unwrap().pause(); // the tick task sees this and exits
    }

    pub fn terminate (&mut self) {
        if let Some(task) = self.task.take() { task.abort() }
    }
}

impl Drop for ClockDriver {
    fn drop (&mut self) {
        self.terminate();
    }
}
