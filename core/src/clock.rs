//! Simulation clock — elapsed minutes and day/time derivation.
//!
//! One tick = one simulated minute. The run starts at a fixed time-of-day
//! offset, so minute 0 of a default run is 08:00 of day 1. Day numbers
//! are 1-based and only ever move forward.

use crate::types::Tick;
use serde::{Deserialize, Serialize};

pub const MINUTES_PER_DAY: u64 = 24 * 60;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopClock {
    pub elapsed_minutes: Tick,
    start_offset_minutes: u64,
    cached_day: u64,
}

impl ShopClock {
    pub fn new(start_offset_minutes: u64) -> Self {
        let mut clock = Self {
            elapsed_minutes: 0,
            start_offset_minutes,
            cached_day: 0,
        };
        clock.cached_day = clock.day();
        clock
    }

    /// Advance one minute. Returns the new elapsed-minute count.
    /// Pure counter — pause gating is the engine's job.
    pub fn advance(&mut self) -> Tick {
        self.elapsed_minutes += 1;
        self.elapsed_minutes
    }

    fn minute_of_epoch(&self) -> u64 {
        self.elapsed_minutes + self.start_offset_minutes
    }

    pub fn day(&self) -> u64 {
        self.minute_of_epoch() / MINUTES_PER_DAY + 1
    }

    pub fn hour_of_day(&self) -> u64 {
        self.minute_of_epoch() % MINUTES_PER_DAY / 60
    }

    pub fn minute_of_hour(&self) -> u64 {
        self.minute_of_epoch() % 60
    }

    /// Compare the derived day against the cached one. On a crossing,
    /// update the cache and return the new day number.
    pub fn crossed_day_boundary(&mut self) -> Option<u64> {
        let day = self.day();
        if day != self.cached_day {
            self.cached_day = day;
            Some(day)
        } else {
            None
        }
    }

    /// Wall-clock-like label, e.g. "Day 2 08:05".
    pub fn time_label(&self) -> String {
        format!(
            "Day {} {:02}:{:02}",
            self.day(),
            self.hour_of_day(),
            self.minute_of_hour()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_offset_starts_day_one_morning() {
        let clock = ShopClock::new(8 * 60);
        assert_eq!(clock.day(), 1);
        assert_eq!(clock.time_label(), "Day 1 08:00");
    }

    #[test]
    fn boundary_fires_once_at_midnight() {
        let mut clock = ShopClock::new(8 * 60);
        // 959 elapsed + 480 offset = 1439, still day 1.
        for _ in 0..959 {
            clock.advance();
            assert_eq!(clock.crossed_day_boundary(), None);
        }
        clock.advance();
        assert_eq!(clock.crossed_day_boundary(), Some(2));
        assert_eq!(clock.crossed_day_boundary(), None);
        assert_eq!(clock.time_label(), "Day 2 00:00");
    }
}
