//! Frame sinks.
//!
//! Sinks consume rendered frames in order and are driven by [`crate::Player`].

pub(crate) mod ffmpeg;
pub(crate) mod sink;
