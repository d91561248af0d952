//! Clock sources

use crate::domain::DayZone;
use chrono::{DateTime, Duration, FixedOffset, Local, TimeZone, Utc};
use std::cell::Cell;

/// Source of the current instant and of the zone that decides where the
/// user's local days begin.
pub trait Clock {
    type Zone: DayZone;

    fn now(&self) -> DateTime<Utc>;

    fn zone(&self) -> Self::Zone;
}

/// Zone used by [`SystemClock`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemZone {
    /// System time zone rules, including daylight saving changes
    Local,
    /// Configured offset east of UTC
    Fixed(FixedOffset),
}

impl DayZone for SystemZone {
    fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset {
        match self {
            SystemZone::Local => Local.offset_at(instant),
            SystemZone::Fixed(offset) => *offset,
        }
    }
}

/// Reads the system clock, optionally pinned to a fixed UTC offset
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    zone: SystemZone,
}

impl SystemClock {
    /// Use `offset` instead of the system's time zone when one is given.
    pub fn with_offset(offset: Option<FixedOffset>) -> Self {
        let zone = match offset {
            Some(offset) => SystemZone::Fixed(offset),
            None => SystemZone::Local,
        };
        SystemClock { zone }
    }
}

impl Clock for SystemClock {
    type Zone = SystemZone;

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn zone(&self) -> SystemZone {
        self.zone
    }
}

/// Manually driven clock for tests and replays
#[derive(Debug, Clone)]
pub struct FixedClock<Z = FixedOffset> {
    now: Cell<DateTime<Utc>>,
    zone: Z,
}

impl FixedClock<FixedOffset> {
    /// Clock frozen at `now`, with local days measured in `now`'s offset.
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        FixedClock::in_zone(*now.offset(), now.with_timezone(&Utc))
    }
}

impl<Z: DayZone + Clone> FixedClock<Z> {
    pub fn in_zone(zone: Z, now: DateTime<Utc>) -> Self {
        FixedClock {
            now: Cell::new(now),
            zone,
        }
    }

    pub fn set<Tz: TimeZone>(&self, now: DateTime<Tz>) {
        self.now.set(now.with_timezone(&Utc));
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl<Z: DayZone + Clone> Clock for FixedClock<Z> {
    type Zone = Z;

    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn zone(&self) -> Z {
        self.zone.clone()
    }
}
