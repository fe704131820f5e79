use std::fmt;

/// Argument-validation failure from a geometry builder.
///
/// Builders never return a partial mesh; an invalid argument rejects the
/// whole request.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Subdivision level beyond the supported maximum.
    LevelOutOfRange { level: u32, max: u32 },
    /// Radius must be finite and strictly positive.
    InvalidRadius { radius: f32 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::LevelOutOfRange { level, max } => {
                write!(f, "subdivision level {level} exceeds maximum {max}")
            }
            GeometryError::InvalidRadius { radius } => {
                write!(f, "radius must be finite and > 0, got {radius}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
