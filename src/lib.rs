//! Dogfield is an abstract analog clock: three dogs run around a field, one orbit per hand.
//!
//! The pipeline is session-oriented:
//!
//! - Create a [`RenderSession`] for a canvas and [`ThemeKind`]
//! - Feed it a [`ClockReading`] per frame to get a backend-agnostic [`DisplayList`]
//! - Rasterize with a [`RenderBackend`] and stream frames into a [`FrameSink`], or let a
//!   [`Player`] do both
#![forbid(unsafe_code)]

mod clock;
mod config;
mod draw;
mod encode;
mod foundation;
mod player;
mod render;
pub mod scene;
mod session;
pub mod theme;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, Point, Rect, Rgba8, Rgba8Premul, Vec2,
};
pub use crate::foundation::error::{DogfieldError, DogfieldResult};

pub use crate::clock::geometry::{ClockAngles, FieldGeometry, FigureKind, dial_angle, position_on};
pub use crate::clock::reading::{
    ClockReading, ClockSource, FixedClock, SimulatedClock, SystemClock,
};
pub use crate::config::ClockConfig;
pub use crate::draw::list::{DisplayList, DrawOp, StrokeStyle};
pub use crate::draw::painter::{Painter, Scope};
pub use crate::encode::ffmpeg::{
    FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path,
};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use crate::player::{Pacing, Player, PlayerOpts, RunStats};
pub use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend,
};
pub use crate::render::cpu::CpuBackend;
pub use crate::session::{FrameOutput, MinuteWatch, RenderSession};
pub use crate::theme::{Theme, ThemeKind};
