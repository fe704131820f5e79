//! Coordinate and surface-size primitives.

mod viewport;

pub use viewport::Viewport;
