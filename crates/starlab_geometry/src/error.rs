//! Geometry error types

use std::fmt;

/// Error returned when a star cannot be built from its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// A star needs at least two points
    TooFewPoints(u32),
    /// Point count above [`MAX_POINTS`](crate::star::MAX_POINTS)
    TooManyPoints(u32),
    /// Radius is negative, NaN or infinite
    InvalidRadius(f32),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::TooFewPoints(n) => {
                write!(f, "Star needs at least 2 points, got {}", n)
            }
            GeometryError::TooManyPoints(n) => write!(
                f,
                "Star supports at most {} points, got {}",
                crate::star::MAX_POINTS,
                n
            ),
            GeometryError::InvalidRadius(r) => write!(f, "Invalid star radius: {}", r),
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            GeometryError::TooFewPoints(1).to_string(),
            "Star needs at least 2 points, got 1"
        );
        assert_eq!(
            GeometryError::TooManyPoints(5000).to_string(),
            "Star supports at most 1024 points, got 5000"
        );
        assert!(GeometryError::InvalidRadius(-1.0).to_string().contains("-1"));
    }
}
