use crate::foundation::error::{DogfieldError, DogfieldResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Monotonic frame counter value. Drives animation phase only.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// The following frame. Saturates instead of wrapping.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Counter value as a float phase input.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> DogfieldResult<Self> {
        if den == 0 {
            return Err(DogfieldError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(DogfieldError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Duration of one frame as a [`std::time::Duration`].
    pub fn frame_duration(self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(self.frame_duration_secs())
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Largest dimension the CPU rasterizer accepts.
    pub const MAX_DIM: u32 = u16::MAX as u32;

    /// Create a validated canvas.
    pub fn new(width: u32, height: u32) -> DogfieldResult<Self> {
        let c = Self { width, height };
        c.validate()?;
        Ok(c)
    }

    /// Width and height must be positive and fit the rasterizer.
    pub fn validate(self) -> DogfieldResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DogfieldError::validation(
                "canvas width and height must be > 0",
            ));
        }
        if self.width > Self::MAX_DIM || self.height > Self::MAX_DIM {
            return Err(DogfieldError::validation(format!(
                "canvas {}x{} exceeds {max}x{max}",
                self.width,
                self.height,
                max = Self::MAX_DIM
            )));
        }
        Ok(())
    }

    /// Pixel count, as a byte length of an RGBA8 buffer.
    pub fn rgba_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

/// Straight-alpha RGBA8 color, as used by themes and draw ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a replaced alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Scale the color channels by `factor`, keeping alpha.
    pub fn scaled(self, factor: f64) -> Self {
        let s = |c: u8| -> u8 { (f64::from(c) * factor).round().clamp(0.0, 255.0) as u8 };
        Self {
            r: s(self.r),
            g: s(self.g),
            b: s(self.b),
            a: self.a,
        }
    }

    /// Premultiply for compositing.
    pub fn premultiplied(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, self.a)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Byte layout used by pixel buffers.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
