//! `SurfaceMesh` and the pieces it is assembled from.

use crate::errors::ShapeError;
use crate::grid::GridResolution;
use crate::superformula::SuperShape;
use crate::triangulated::Triangulated3D;

pub mod buffers;
pub mod topology;
pub mod vertex;

pub use buffers::MeshBuffers;
pub use topology::MeshTopology;
pub use vertex::{Vertex, VertexEpsilon};

/// A renderable supershape surface: quad connectivity, texture coordinates,
/// vertex positions and normals under one roof.
///
/// Two entry points cover the editing lifecycle. [`generate`](Self::generate)
/// builds everything for a shape at a resolution. [`refresh`](Self::refresh)
/// pushes new shape parameters through the existing mesh, rewriting only
/// positions and normals; connectivity and texture coordinates are reused
/// untouched. Changing resolution means generating a new mesh.
///
/// The parts stay independently usable: callers managing their own buffers
/// can combine [`SuperShape::coordinates`], [`MeshTopology::build`] and
/// [`MeshBuffers`] directly.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMesh {
    topology: MeshTopology,
    buffers: MeshBuffers,
}

impl SurfaceMesh {
    /// Build a mesh of `shape` sampled at `longitude` × `latitude` grid
    /// vertices.
    ///
    /// Returns [`ShapeError::InvalidResolution`] when either count is zero.
    /// A single-sample axis is accepted and produces a valid mesh with no
    /// quads. Degenerate shape parameters are not validated; they surface as
    /// NaN or infinite positions.
    ///
    /// ```
    /// use supershape::{SuperShape, SurfaceMesh};
    ///
    /// let mesh = SurfaceMesh::generate(&SuperShape::FLOWER, 100, 100)?;
    /// assert_eq!(mesh.topology().quads().len(), 99 * 99);
    /// # Ok::<(), supershape::ShapeError>(())
    /// ```
    pub fn generate(
        shape: &SuperShape,
        longitude: usize,
        latitude: usize,
    ) -> Result<Self, ShapeError> {
        let resolution = GridResolution::new(longitude, latitude)?;
        let topology = MeshTopology::build(resolution);
        let mut buffers = MeshBuffers::new(&topology);
        let grid = shape.coordinates(resolution);
        buffers.write_positions(&grid, &topology)?;
        Ok(Self { topology, buffers })
    }

    /// Re-evaluate the surface with new shape parameters.
    ///
    /// The resolution comes from the mesh itself, so the owned topology
    /// always matches and only positions and normals change. Refreshing with
    /// unchanged parameters reproduces bit-identical geometry.
    ///
    /// ```
    /// use supershape::{SuperShape, SurfaceMesh};
    ///
    /// let mut mesh = SurfaceMesh::generate(&SuperShape::SPHERE, 50, 50)?;
    /// mesh.refresh(&SuperShape::STARFISH)?;
    /// assert_eq!(mesh.resolution().longitude(), 50);
    /// # Ok::<(), supershape::ShapeError>(())
    /// ```
    pub fn refresh(&mut self, shape: &SuperShape) -> Result<(), ShapeError> {
        let grid = shape.coordinates(self.topology.resolution());
        self.buffers.write_positions(&grid, &self.topology)
    }

    pub const fn topology(&self) -> &MeshTopology {
        &self.topology
    }

    pub const fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    pub const fn resolution(&self) -> GridResolution {
        self.topology.resolution()
    }
}

impl Triangulated3D for SurfaceMesh {
    /// Each quad `(D, C, B, A)` splits into `(D, C, B)` and `(D, B, A)`,
    /// keeping the winding and the smooth vertex normals.
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for quad in self.topology.quads() {
            let [d, c, b, a] = *quad;
            f([
                self.buffers.vertex(d),
                self.buffers.vertex(c),
                self.buffers.vertex(b),
            ]);
            f([
                self.buffers.vertex(d),
                self.buffers.vertex(b),
                self.buffers.vertex(a),
            ]);
        }
    }
}
