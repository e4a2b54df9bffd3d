//! Sample grids shared by the superformula evaluator and the mesh builder.

use crate::errors::ShapeError;
use crate::float_types::Real;
use nalgebra::Point3;

/// Validated sample counts for the two angular axes of a supershape grid.
///
/// `longitude` counts samples of the angle θ over `[-π, π]`, `latitude` counts
/// samples of φ over `[-π/2, π/2]`. Both must be nonzero. A single-sample axis
/// is degenerate but legal: it yields a valid grid that carries no faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridResolution {
    longitude: usize,
    latitude: usize,
}

impl GridResolution {
    /// Create a resolution of `longitude` × `latitude` samples.
    ///
    /// Returns [`ShapeError::InvalidResolution`] when either axis is zero.
    pub const fn new(longitude: usize, latitude: usize) -> Result<Self, ShapeError> {
        if longitude == 0 || latitude == 0 {
            return Err(ShapeError::InvalidResolution {
                longitude,
                latitude,
            });
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Samples along θ
    pub const fn longitude(&self) -> usize {
        self.longitude
    }

    /// Samples along φ
    pub const fn latitude(&self) -> usize {
        self.latitude
    }

    /// Total number of grid vertices
    pub const fn vertex_count(&self) -> usize {
        self.longitude * self.latitude
    }

    /// Number of quads a mesh over this grid carries.
    /// Zero when either axis is a single sample.
    pub const fn quad_count(&self) -> usize {
        (self.longitude - 1) * (self.latitude - 1)
    }

    /// Flat row-major index of grid vertex `(u, v)`
    pub const fn index(&self, u: usize, v: usize) -> usize {
        u * self.latitude + v
    }
}

impl Default for GridResolution {
    fn default() -> Self {
        Self {
            longitude: 50,
            latitude: 50,
        }
    }
}

/// `count` evenly spaced values from `start` to `end`, endpoints inclusive.
/// A single-sample request yields `[start]` rather than dividing by zero.
pub(crate) fn linspace(start: Real, end: Real, count: usize) -> Vec<Real> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as Real;
            let mut values: Vec<Real> =
                (0..count).map(|i| start + step * i as Real).collect();
            // Pin the endpoint so callers see `end` exactly
            values[count - 1] = end;
            values
        },
    }
}

/// One superformula evaluation over a full grid: three same-shaped arrays of
/// cartesian coordinates, stored flat in row-major order (index `u * V + v`).
///
/// A grid is immutable once produced. Degenerate shape parameters surface here
/// as IEEE NaN or infinity in the coordinate arrays, never as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateGrid {
    resolution: GridResolution,
    x: Vec<Real>,
    y: Vec<Real>,
    z: Vec<Real>,
}

impl CoordinateGrid {
    pub(crate) const fn new(
        resolution: GridResolution,
        x: Vec<Real>,
        y: Vec<Real>,
        z: Vec<Real>,
    ) -> Self {
        Self { resolution, x, y, z }
    }

    pub const fn resolution(&self) -> GridResolution {
        self.resolution
    }

    /// X coordinates, row-major
    pub fn x(&self) -> &[Real] {
        &self.x
    }

    /// Y coordinates, row-major
    pub fn y(&self) -> &[Real] {
        &self.y
    }

    /// Z coordinates, row-major
    pub fn z(&self) -> &[Real] {
        &self.z
    }

    /// Cartesian position of grid vertex `(u, v)`
    pub fn point(&self, u: usize, v: usize) -> Point3<Real> {
        let i = self.resolution.index(u, v);
        Point3::new(self.x[i], self.y[i], self.z[i])
    }

    /// Fraction of grid vertices whose coordinates are all finite.
    /// Useful for detecting degenerate parameter sets after the fact.
    pub fn finite_fraction(&self) -> Real {
        let total = self.resolution.vertex_count();
        if total == 0 {
            return 1.0;
        }
        let finite = (0..total)
            .filter(|&i| {
                self.x[i].is_finite() && self.y[i].is_finite() && self.z[i].is_finite()
            })
            .count();
        finite as Real / total as Real
    }
}
