//! Color values exchanged with the GPU.

mod color;

pub use color::Color;
