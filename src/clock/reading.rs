use std::str::FromStr;

use chrono::Timelike as _;

use crate::foundation::core::Fps;
use crate::foundation::error::{DogfieldError, DogfieldResult};

const SECS_PER_DAY: f64 = 86_400.0;

/// One `(hour, minute, second)` sample from a time source.
///
/// `hour` is kept as the host reports it (0..=23). Angle mapping folds it with
/// [`ClockReading::hour12`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ClockReading {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockReading {
    /// Create a validated reading.
    pub fn new(hour: u8, minute: u8, second: u8) -> DogfieldResult<Self> {
        if hour > 23 {
            return Err(DogfieldError::validation(format!(
                "hour must be in 0..=23, got {hour}"
            )));
        }
        if minute > 59 {
            return Err(DogfieldError::validation(format!(
                "minute must be in 0..=59, got {minute}"
            )));
        }
        if second > 59 {
            return Err(DogfieldError::validation(format!(
                "second must be in 0..=59, got {second}"
            )));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Build from seconds since midnight, wrapping at one day.
    pub fn from_day_secs(secs: f64) -> Self {
        let s = secs.rem_euclid(SECS_PER_DAY).floor() as u32;
        Self {
            hour: (s / 3600) as u8,
            minute: ((s / 60) % 60) as u8,
            second: (s % 60) as u8,
        }
    }

    /// Hour as reported by the host (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// 12-hour dial position (0..=11, 0 is twelve o'clock).
    pub fn hour12(self) -> u8 {
        self.hour % 12
    }

    /// Minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Seconds since midnight.
    pub fn day_secs(self) -> u32 {
        u32::from(self.hour) * 3600 + u32::from(self.minute) * 60 + u32::from(self.second)
    }
}

impl std::fmt::Display for ClockReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Parses `HH:MM` or `HH:MM:SS`.
impl FromStr for ClockReading {
    type Err = DogfieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(DogfieldError::validation(format!(
                "expected HH:MM or HH:MM:SS, got '{s}'"
            )));
        }
        let field = |i: usize, name: &str| -> DogfieldResult<u8> {
            match parts.get(i) {
                None => Ok(0),
                Some(p) => p.parse::<u8>().map_err(|e| {
                    DogfieldError::validation(format!("invalid {name} '{p}' in '{s}': {e}"))
                }),
            }
        };
        Self::new(field(0, "hour")?, field(1, "minute")?, field(2, "second")?)
    }
}

/// Wall-clock time source sampled once per frame.
pub trait ClockSource {
    /// Sample the current reading.
    fn now(&mut self) -> ClockReading;
}

/// Local system time via `chrono`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&mut self) -> ClockReading {
        let t = chrono::Local::now();
        ClockReading {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
            second: t.second() as u8,
        }
    }
}

/// Always reports the same reading.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub ClockReading);

impl ClockSource for FixedClock {
    fn now(&mut self) -> ClockReading {
        self.0
    }
}

/// Starts at a reading and advances one frame duration per sample.
///
/// Used for offline renders where output must not depend on how fast frames are produced.
/// Elapsed time is kept as a frame count so long runs do not drift.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedClock {
    start_secs: u64,
    fps: Fps,
    samples: u64,
}

impl SimulatedClock {
    /// Create a clock starting at `start`, stepping by one frame of `fps` per sample.
    pub fn new(start: ClockReading, fps: Fps) -> Self {
        Self {
            start_secs: u64::from(start.day_secs()),
            fps,
            samples: 0,
        }
    }
}

impl ClockSource for SimulatedClock {
    fn now(&mut self) -> ClockReading {
        let num = u64::from(self.fps.num.max(1));
        let elapsed = self.samples.saturating_mul(u64::from(self.fps.den)) / num;
        self.samples = self.samples.saturating_add(1);
        ClockReading::from_day_secs((self.start_secs.saturating_add(elapsed) % 86_400) as f64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/reading.rs"]
mod tests;
