use crate::clock::geometry::FieldGeometry;
use crate::clock::reading::ClockReading;
use crate::config::ClockConfig;
use crate::draw::list::DisplayList;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::DogfieldResult;
use crate::scene;
use crate::theme::{Theme, ThemeKind};

/// Tracks the last minute seen so rollovers are reported once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinuteWatch {
    last: Option<u8>,
}

impl MinuteWatch {
    /// Record `minute`. Returns `true` when it differs from the previous observation.
    pub fn observe(&mut self, minute: u8) -> bool {
        if self.last == Some(minute) {
            return false;
        }
        self.last = Some(minute);
        true
    }

    /// Most recent minute, if any frame has been observed.
    pub fn last(&self) -> Option<u8> {
        self.last
    }
}

/// One rendered frame's worth of output.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    /// Counter value the frame was drawn with.
    pub frame: FrameIndex,
    /// Reading the frame shows.
    pub reading: ClockReading,
    /// Whether this frame started a new minute.
    pub minute_rolled: bool,
    /// What to draw.
    pub list: DisplayList,
}

/// Per-run state: fixed geometry and theme, plus the frame counter and minute watch.
///
/// Created once at setup, advanced once per frame, dropped when the host stops.
#[derive(Debug)]
pub struct RenderSession {
    canvas: Canvas,
    geometry: FieldGeometry,
    theme: &'static Theme,
    frame: FrameIndex,
    minutes: MinuteWatch,
}

impl RenderSession {
    /// Set up a session for `canvas`.
    pub fn new(canvas: Canvas, theme: ThemeKind) -> DogfieldResult<Self> {
        canvas.validate()?;
        tracing::debug!(
            width = canvas.width,
            height = canvas.height,
            ?theme,
            "render session created"
        );
        Ok(Self {
            canvas,
            geometry: FieldGeometry::new(canvas),
            theme: theme.theme(),
            frame: FrameIndex(0),
            minutes: MinuteWatch::default(),
        })
    }

    /// Set up a session from a validated config.
    pub fn from_config(config: &ClockConfig) -> DogfieldResult<Self> {
        config.validate()?;
        Self::new(config.canvas, config.theme)
    }

    /// Continue the frame counter from `frame` instead of zero.
    pub fn with_frame_counter(mut self, frame: FrameIndex) -> Self {
        self.frame = frame;
        self
    }

    /// Target canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Field layout.
    pub fn geometry(&self) -> &FieldGeometry {
        &self.geometry
    }

    /// Active theme.
    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    /// Counter value the next frame will use.
    pub fn frame_counter(&self) -> FrameIndex {
        self.frame
    }

    /// Draw the next frame for `reading` and advance the counter.
    pub fn render_frame(&mut self, reading: ClockReading) -> FrameOutput {
        let minute_rolled = self.minutes.observe(reading.minute());
        if minute_rolled {
            tracing::info!(minute = reading.minute(), "Minute: {}", reading.minute());
        }

        let frame = self.frame;
        let list = self.compose(reading, frame);
        self.frame = frame.next();

        FrameOutput {
            frame,
            reading,
            minute_rolled,
            list,
        }
    }

    /// Draw `reading` at an explicit counter value without touching session state.
    pub fn compose(&self, reading: ClockReading, frame: FrameIndex) -> DisplayList {
        scene::compose(self.theme, self.canvas, &self.geometry, reading, frame)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session/session.rs"]
mod tests;
