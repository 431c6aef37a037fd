use std::time::{Duration, Instant};

use crate::clock::reading::{ClockReading, ClockSource};
use crate::config::ClockConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::Fps;
use crate::foundation::error::{DogfieldError, DogfieldResult};
use crate::render::backend::{BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend};
use crate::session::{FrameOutput, RenderSession};

/// How the player spaces frames in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pacing {
    /// Render back to back, as fast as the backend allows.
    #[default]
    Offline,
    /// Sleep so frame `n` is produced no earlier than `n / fps` after the run starts.
    RealTime,
}

/// What a [`Player::run`] call should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerOpts {
    /// Number of frames to render. Must be non-zero.
    pub frames: u64,
    /// Frame spacing.
    pub pacing: Pacing,
}

/// Summary of a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames pushed to the sink.
    pub frames_rendered: u64,
    /// Frames that started a new minute.
    pub minute_rollovers: u64,
    /// Reading shown by the last frame.
    pub last_reading: Option<ClockReading>,
}

/// Host driver: owns the session and a backend, and feeds frames to a sink.
pub struct Player {
    session: RenderSession,
    backend: Box<dyn RenderBackend>,
    fps: Fps,
}

impl Player {
    pub fn new(session: RenderSession, backend: Box<dyn RenderBackend>, fps: Fps) -> Self {
        Self {
            session,
            backend,
            fps,
        }
    }

    /// Build a session and the CPU backend from `config`.
    pub fn from_config(config: &ClockConfig) -> DogfieldResult<Self> {
        let session = RenderSession::from_config(config)?;
        let backend = create_backend(
            BackendKind::Cpu,
            &RenderSettings {
                font_dir: config.font_dir.clone(),
            },
        )?;
        Ok(Self::new(session, backend, config.fps))
    }

    pub fn session(&self) -> &RenderSession {
        &self.session
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Compose and rasterize the next frame for `reading`.
    ///
    /// The frame counter advances even when rasterization fails.
    pub fn render_one(
        &mut self,
        reading: ClockReading,
    ) -> DogfieldResult<(FrameOutput, FrameRGBA)> {
        let out = self.session.render_frame(reading);
        let frame = self.backend.render_list(&out.list)?;
        Ok((out, frame))
    }

    /// Render `opts.frames` frames from `clock` into `sink`.
    pub fn run(
        &mut self,
        clock: &mut dyn ClockSource,
        opts: PlayerOpts,
        sink: &mut dyn FrameSink,
    ) -> DogfieldResult<RunStats> {
        if opts.frames == 0 {
            return Err(DogfieldError::validation("player run needs at least one frame"));
        }

        let canvas = self.session.canvas();
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps: self.fps,
        })?;
        tracing::debug!(frames = opts.frames, pacing = ?opts.pacing, "player run started");

        let started = Instant::now();
        let step = self.fps.frame_duration();
        let mut stats = RunStats::default();
        for n in 0..opts.frames {
            if opts.pacing == Pacing::RealTime {
                pace(started, step, n);
            }

            let reading = clock.now();
            let (out, frame) = self.render_one(reading)?;
            sink.push_frame(out.frame, &frame)?;

            stats.frames_rendered += 1;
            stats.minute_rollovers += u64::from(out.minute_rolled);
            stats.last_reading = Some(reading);
        }

        sink.end()?;
        tracing::debug!(
            frames = stats.frames_rendered,
            rollovers = stats.minute_rollovers,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "player run finished"
        );
        Ok(stats)
    }
}

fn pace(started: Instant, step: Duration, n: u64) {
    let offset = step.saturating_mul(u32::try_from(n).unwrap_or(u32::MAX));
    let due = started + offset;
    let now = Instant::now();
    if due > now {
        std::thread::sleep(due - now);
    }
}

#[cfg(test)]
#[path = "../tests/unit/player.rs"]
mod tests;
