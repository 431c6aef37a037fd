use std::f64::consts::{FRAC_PI_2, TAU};

use crate::clock::reading::ClockReading;
use crate::foundation::core::{Canvas, Point};

/// Share of the smaller canvas dimension used by the field.
pub const FIELD_RADIUS_FACTOR: f64 = 0.4;
/// Orbit radius of the hour figure, as a share of the field radius.
pub const HOUR_ORBIT_FACTOR: f64 = 0.85;
/// Orbit radius of the minute figure, as a share of the field radius.
pub const MINUTE_ORBIT_FACTOR: f64 = 0.60;
/// Orbit radius of the second figure, as a share of the field radius.
pub const SECOND_ORBIT_FACTOR: f64 = 0.35;

/// One of the three clock hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FigureKind {
    /// Outermost orbit.
    Hour,
    /// Middle orbit.
    Minute,
    /// Innermost orbit.
    Second,
}

impl FigureKind {
    /// Draw order.
    pub const ALL: [FigureKind; 3] = [FigureKind::Hour, FigureKind::Minute, FigureKind::Second];

    /// Slot in per-figure tables.
    pub fn index(self) -> usize {
        match self {
            FigureKind::Hour => 0,
            FigureKind::Minute => 1,
            FigureKind::Second => 2,
        }
    }

    /// Dial value shown for this figure.
    pub fn value(self, reading: ClockReading) -> u8 {
        match self {
            FigureKind::Hour => reading.hour12(),
            FigureKind::Minute => reading.minute(),
            FigureKind::Second => reading.second(),
        }
    }

    /// Number of steps in one full orbit.
    pub fn period(self) -> u8 {
        match self {
            FigureKind::Hour => 12,
            FigureKind::Minute | FigureKind::Second => 60,
        }
    }

    /// Label text. Hour 0 reads as twelve.
    pub fn label(self, reading: ClockReading) -> String {
        match (self, self.value(reading)) {
            (FigureKind::Hour, 0) => "12".to_string(),
            (_, v) => v.to_string(),
        }
    }
}

/// Field center and orbit radii, fixed for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldGeometry {
    /// Field center in canvas pixels.
    pub center: Point,
    /// Radius of the whole field.
    pub field_radius: f64,
    /// Orbit radii indexed by [`FigureKind::index`].
    pub orbits: [f64; 3],
}

impl FieldGeometry {
    /// Derive the field layout from canvas dimensions.
    pub fn new(canvas: Canvas) -> Self {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        let field_radius = w.min(h) * FIELD_RADIUS_FACTOR;
        Self {
            center: Point::new(w / 2.0, h / 2.0),
            field_radius,
            orbits: [
                field_radius * HOUR_ORBIT_FACTOR,
                field_radius * MINUTE_ORBIT_FACTOR,
                field_radius * SECOND_ORBIT_FACTOR,
            ],
        }
    }

    /// Orbit radius for one figure.
    pub fn orbit(&self, kind: FigureKind) -> f64 {
        self.orbits[kind.index()]
    }

    /// Screen position of a figure at `angle`.
    pub fn position(&self, kind: FigureKind, angle: f64) -> Point {
        position_on(angle, self.orbit(kind), self.center)
    }
}

/// Angle of `value` out of `period` steps, with zero at the top of the dial.
pub fn dial_angle(value: f64, period: f64) -> f64 {
    (value / period) * TAU - FRAC_PI_2
}

/// Point on the circle of `radius` around `center`.
pub fn position_on(angle: f64, radius: f64, center: Point) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Angles of the three figures for one reading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockAngles {
    /// Hour figure angle, radians.
    pub hour: f64,
    /// Minute figure angle, radians.
    pub minute: f64,
    /// Second figure angle, radians.
    pub second: f64,
}

impl ClockAngles {
    /// Map a reading to angles. The hour is folded to 12-hour form first.
    pub fn from_reading(reading: ClockReading) -> Self {
        let of = |k: FigureKind| dial_angle(f64::from(k.value(reading)), f64::from(k.period()));
        Self {
            hour: of(FigureKind::Hour),
            minute: of(FigureKind::Minute),
            second: of(FigureKind::Second),
        }
    }

    /// Angle for one figure.
    pub fn get(&self, kind: FigureKind) -> f64 {
        match kind {
            FigureKind::Hour => self.hour,
            FigureKind::Minute => self.minute,
            FigureKind::Second => self.second,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/geometry.rs"]
mod tests;
