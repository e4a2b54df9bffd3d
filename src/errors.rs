//! Validation errors

use std::fmt::Display;

/// All the possible validation issues we might encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// (InvalidResolution) A grid axis has zero samples
    InvalidResolution { longitude: usize, latitude: usize },
    /// (GridMismatch) Coordinate grid dimensions disagree with the target buffers
    GridMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::InvalidResolution {
                longitude,
                latitude,
            } => write!(
                f,
                "(InvalidResolution) A grid axis has zero samples: {}x{}",
                longitude, latitude
            ),
            ShapeError::GridMismatch { expected, found } => write!(
                f,
                "(GridMismatch) Coordinate grid is {}x{} but the target buffers were built for {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
        }
    }
}
