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

use std::collections::BTreeMap;
use std::time::Duration;

use ember_common::datetime::{EpochMillis, EpochSecs};
use ember_metar::ParsedMetar;

use crate::events::{TimedEvent, EventKind, FlightPing, Fire, Announcement, Instrument};

/// the per-source event collections an [`EventStore`] is built from
#[derive(Debug,Default)]
pub struct EventStreams {
    pub flight_pings: Vec<FlightPing>,
    pub fires: Vec<Fire>,
    pub metars: Vec<ParsedMetar>,
    pub announcements: Vec<Announcement>,
}

/// which thermal anomaly instruments a fire query selects
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum FireSource {
    All,
    ViirsOnly,
    ModisOnly,
}

impl FireSource {
    pub fn matches (&self, instrument: Instrument)->bool {
        match self {
            FireSource::All => true,
            FireSource::ViirsOnly => instrument == Instrument::Viirs,
            FireSource::ModisOnly => instrument == Instrument::Modis,
        }
    }
}

/// first/last timestamp coverage of a stream
#[derive(Debug,Clone,Copy,PartialEq,Default)]
pub struct Recency {
    pub from: Option<EpochSecs>,
    pub to: Option<EpochSecs>,
}

fn recency_of<T,F> (events: &[T], f: F)->Recency where F: Fn(&T)->EpochSecs {
    Recency {
        from: events.first().map( |e| f(e)),
        to: events.last().map( |e| f(e)),
    }
}

/// the merged, time-sorted event collection of one wildfire session.
/// Built once after ingestion and read-only afterwards - changing data means rebuilding
#[derive(Debug)]
pub struct EventStore {
    fires: Vec<Fire>,
    metars: Vec<ParsedMetar>,
    announcements: Vec<Announcement>,
    tracks: BTreeMap<String, Vec<FlightPing>>, // per icao24, time ascending
    ping_recency: Recency,
    n_pings: usize,
}

impl EventStore {
    pub fn build (mut streams: EventStreams)->Self {
        // stable sorts - events with equal timestamps keep their ingestion order
        streams.fires.sort_by_key( |e| e.timestamp);
        streams.metars.sort_by_key( |e| e.timestamp);
        streams.announcements.sort_by_key( |e| e.timestamp);
        streams.flight_pings.sort_by_key( |e| e.timestamp);

        let ping_recency = recency_of( &streams.flight_pings, |e| e.timestamp);
        let n_pings = streams.flight_pings.len();

        // group into trajectories - pings are already globally sorted so every track is too
        let mut tracks: BTreeMap<String, Vec<FlightPing>> = BTreeMap::new();
        for ping in streams.flight_pings.into_iter() {
            tracks.entry( ping.icao24.clone()).or_default().push( ping);
        }

        EventStore {
            fires: streams.fires,
            metars: streams.metars,
            announcements: streams.announcements,
            tracks,
            ping_recency,
            n_pings,
        }
    }

    /// convenience ctor from an undifferentiated event sequence
    pub fn from_events (events: Vec<TimedEvent>)->Self {
        let mut streams = EventStreams::default();
        for event in events.into_iter() {
            match event {
                TimedEvent::FlightPing(e) => streams.flight_pings.push(e),
                TimedEvent::Fire(e) => streams.fires.push(e),
                TimedEvent::Metar(e) => streams.metars.push(e),
                TimedEvent::Announcement(e) => streams.announcements.push(e),
            }
        }
        Self::build( streams)
    }

    /// fire detections in the fade window `(at - window, at]`, filtered by instrument.
    /// Repeated queries on the (immutable) store return identical ordered results
    pub fn active_fires<'a> (&'a self, at: EpochMillis, window: Duration, source: FireSource) -> impl Iterator<Item=&'a Fire> + 'a {
        active_span( &self.fires, |e| e.timestamp, at, window).iter()
            .filter( move |e| source.matches( e.instrument))
    }

    pub fn active_announcements (&self, at: EpochMillis, window: Duration) -> &[Announcement] {
        active_span( &self.announcements, |e| e.timestamp, at, window)
    }

    pub fn active_metars (&self, at: EpochMillis, window: Duration) -> &[ParsedMetar] {
        active_span( &self.metars, |e| e.timestamp, at, window)
    }

    /// the most recent report at or before `at`. Unlike fires and announcements the last
    /// known weather does not expire - there is no window here
    pub fn current_metar (&self, at: EpochMillis) -> Option<&ParsedMetar> {
        let hi = self.metars.partition_point( |m| m.timestamp.millis() <= at);
        if hi == 0 { None } else { Some( &self.metars[hi-1]) }
    }

    pub fn trajectory (&self, icao24: &str) -> Option<&[FlightPing]> {
        self.tracks.get( icao24).map( |t| t.as_slice())
    }

    pub fn trajectories (&self) -> impl Iterator<Item=(&str,&[FlightPing])> {
        self.tracks.iter().map( |(id,t)| (id.as_str(), t.as_slice()))
    }

    pub fn recency (&self, kind: EventKind) -> Recency {
        match kind {
            EventKind::Fire => recency_of( &self.fires, |e| e.timestamp),
            EventKind::Metar => recency_of( &self.metars, |e| e.timestamp),
            EventKind::Announcement => recency_of( &self.announcements, |e| e.timestamp),
            EventKind::FlightPing => self.ping_recency,
        }
    }

    pub fn announcements (&self) -> &[Announcement] { &self.announcements }

    pub fn n_events (&self, kind: EventKind) -> usize {
        match kind {
            EventKind::Fire => self.fires.len(),
            EventKind::Metar => self.metars.len(),
            EventKind::Announcement => self.announcements.len(),
            EventKind::FlightPing => self.n_pings,
        }
    }
}

/// the span of `events` within `(at - window, at]`. Event timestamps are whole seconds but
/// the comparison is carried out in millis so that sub-second clock positions behave
fn active_span<'a,T,F> (events: &'a [T], f: F, at: EpochMillis, window: Duration) -> &'a [T]
    where F: Fn(&T)->EpochSecs
{
    let lo = events.partition_point( |e| f(e).millis() <= at.minus(window));
    let hi = events.partition_point( |e| f(e).millis() <= at);
    &events[lo..hi]
}
