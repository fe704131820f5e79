//! Pyre engine crate.
//!
//! This crate owns the platform + GPU runtime pieces and the scene logic of
//! the fire shader demo: geometry building, camera, uniform staging, mesh
//! rendering, and the per-frame control/driver loop.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;

pub mod geometry;
pub mod render;
pub mod scene;
