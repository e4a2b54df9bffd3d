//! Mutable geometry of a supershape mesh: positions and derived normals.

use crate::errors::ShapeError;
use crate::float_types::{Real, tolerance};
use crate::grid::{CoordinateGrid, GridResolution, linspace};
use crate::mesh::topology::MeshTopology;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Vertex positions plus the normals derived from them.
///
/// Buffers are allocated once per topology and reused across parameter
/// changes: [`write_positions`](MeshBuffers::write_positions) overwrites every
/// position in place and then recomputes every normal. Connectivity and
/// texture coordinates never move, which is what makes parameter edits cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    resolution: GridResolution,
    positions: Vec<Point3<Real>>,
    face_normals: Vec<Vector3<Real>>,
    vertex_normals: Vec<Vector3<Real>>,
}

impl MeshBuffers {
    /// Allocate buffers for `topology`, seeded with the flat parametric
    /// sheet: vertex `(u, v)` starts at `(v/(V-1), u/(U-1), 0)` until the
    /// first coordinate write replaces it.
    pub fn new(topology: &MeshTopology) -> Self {
        let resolution = topology.resolution();
        let su = linspace(0.0, 1.0, resolution.longitude());
        let sv = linspace(0.0, 1.0, resolution.latitude());

        let mut positions = Vec::with_capacity(resolution.vertex_count());
        for &y in &su {
            for &x in &sv {
                positions.push(Point3::new(x, y, 0.0));
            }
        }

        let mut buffers = Self {
            resolution,
            positions,
            face_normals: vec![Vector3::zeros(); topology.quads().len()],
            vertex_normals: vec![Vector3::zeros(); resolution.vertex_count()],
        };
        buffers.recompute_normals(topology);
        buffers
    }

    pub const fn resolution(&self) -> GridResolution {
        self.resolution
    }

    /// Vertex positions, row-major over `(u, v)`
    pub fn positions(&self) -> &[Point3<Real>] {
        &self.positions
    }

    /// One unit normal per quad, zero for degenerate faces
    pub fn face_normals(&self) -> &[Vector3<Real>] {
        &self.face_normals
    }

    /// One smooth unit normal per vertex, zero where every adjacent face is
    /// degenerate
    pub fn vertex_normals(&self) -> &[Vector3<Real>] {
        &self.vertex_normals
    }

    /// Position and smooth normal of the vertex at `index`
    pub fn vertex(&self, index: usize) -> Vertex {
        Vertex::new(self.positions[index], self.vertex_normals[index])
    }

    /// Overwrite every position from `grid` and recompute all normals.
    ///
    /// The grid and topology must both match the resolution these buffers
    /// were allocated for; otherwise [`ShapeError::GridMismatch`] comes back
    /// and nothing is mutated. Dimensions are never silently truncated or
    /// padded.
    ///
    /// Non-finite coordinates are written through verbatim. Normals touching
    /// them degrade to zero vectors rather than poisoning the whole mesh.
    pub fn write_positions(
        &mut self,
        grid: &CoordinateGrid,
        topology: &MeshTopology,
    ) -> Result<(), ShapeError> {
        let expected = (self.resolution.longitude(), self.resolution.latitude());
        if grid.resolution() != self.resolution {
            return Err(ShapeError::GridMismatch {
                expected,
                found: (grid.resolution().longitude(), grid.resolution().latitude()),
            });
        }
        if topology.resolution() != self.resolution {
            return Err(ShapeError::GridMismatch {
                expected,
                found: (
                    topology.resolution().longitude(),
                    topology.resolution().latitude(),
                ),
            });
        }

        let (xs, ys, zs) = (grid.x(), grid.y(), grid.z());
        for (i, position) in self.positions.iter_mut().enumerate() {
            *position = Point3::new(xs[i], ys[i], zs[i]);
        }
        self.recompute_normals(topology);
        Ok(())
    }

    /// Derive face and smooth vertex normals from the current positions.
    ///
    /// Face normals use Newell's method over each quad. Vertex normals sum
    /// the unnormalized face vectors of every adjacent quad, which weights
    /// each face by its area, then normalize.
    fn recompute_normals(&mut self, topology: &MeshTopology) {
        let face_vectors = newell_vectors(&self.positions, topology.quads());

        for (normal, vector) in self.face_normals.iter_mut().zip(&face_vectors) {
            *normal = normalized_or_zero(*vector);
        }

        for normal in &mut self.vertex_normals {
            *normal = Vector3::zeros();
        }
        for (quad, vector) in topology.quads().iter().zip(&face_vectors) {
            for &corner in quad {
                self.vertex_normals[corner] += vector;
            }
        }
        for normal in &mut self.vertex_normals {
            *normal = normalized_or_zero(*normal);
        }
    }
}

/// Unnormalized Newell vector of one quad; its magnitude is twice the face
/// area, so summing these per vertex gives area-weighted smoothing for free
fn newell_vector(positions: &[Point3<Real>], quad: &[usize; 4]) -> Vector3<Real> {
    let origin = positions[quad[0]];
    quad.iter()
        .zip(quad.iter().cycle().skip(1))
        .fold(Vector3::zeros(), |acc, (&current, &next)| {
            acc + (positions[current] - origin).cross(&(positions[next] - origin))
        })
}

#[cfg(not(feature = "parallel"))]
fn newell_vectors(positions: &[Point3<Real>], quads: &[[usize; 4]]) -> Vec<Vector3<Real>> {
    quads
        .iter()
        .map(|quad| newell_vector(positions, quad))
        .collect()
}

/// Faces are independent, so the parallel pass is bit-identical to serial
#[cfg(feature = "parallel")]
fn newell_vectors(positions: &[Point3<Real>], quads: &[[usize; 4]]) -> Vec<Vector3<Real>> {
    quads
        .par_iter()
        .map(|quad| newell_vector(positions, quad))
        .collect()
}

/// Unit vector, or zero when the input is too short or non-finite
fn normalized_or_zero(vector: Vector3<Real>) -> Vector3<Real> {
    let norm = vector.norm();
    if norm > tolerance() {
        vector / norm
    } else {
        Vector3::zeros()
    }
}
