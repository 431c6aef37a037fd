//! Display-list rasterization.
//!
//! [`backend`] holds the backend-agnostic frame type and trait. [`cpu`] is the `vello_cpu`
//! implementation, with blur, compositing and label text helpers alongside it.

pub(crate) mod backend;
pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod cpu;
pub(crate) mod text;
