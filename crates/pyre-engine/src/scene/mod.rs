//! Scene state: camera, control store, and the per-frame driver.

mod camera;
mod controls;
mod driver;

pub use camera::Camera;
pub use controls::{ControlAction, ControlState};
pub use driver::{FrameDriver, FramePlan};
