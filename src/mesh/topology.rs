//! Connectivity of a supershape quad mesh.

use crate::float_types::Real;
use crate::grid::{GridResolution, linspace};

/// Connectivity and texture coordinates for one grid resolution.
///
/// Topology depends only on the resolution, never on shape parameters. Editing
/// flows exploit that: build the topology once, then push new coordinate grids
/// through [`MeshBuffers::write_positions`](crate::mesh::MeshBuffers::write_positions)
/// as parameters change.
///
/// Grid vertex `(u, v)` sits at flat index `u * V + v`. Each interior cell
/// contributes one quad wound `(D, C, B, A)`:
///
/// ```text
///   B = (u, v+1) ---- C = (u+1, v+1)
///   |                 |
///   A = (u, v) ------ D = (u+1, v)
/// ```
///
/// The winding is what keeps face normals pointing out of the surface, so it
/// is part of the contract, not an implementation detail.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshTopology {
    resolution: GridResolution,
    uvs: Vec<[Real; 2]>,
    quads: Vec<[usize; 4]>,
}

impl MeshTopology {
    /// Build the connectivity for `resolution`.
    ///
    /// Texture coordinates put `u` along texture X and flip `v` so texture Y
    /// grows downward: vertex `(u, v)` maps to `(u/(U-1), 1 - v/(V-1))`.
    /// A single-sample axis pins its texture coordinate to the start of the
    /// range instead of dividing by zero.
    ///
    /// Degenerate resolutions (`U == 1` or `V == 1`) build successfully and
    /// carry zero quads.
    ///
    /// ```
    /// use supershape::{GridResolution, MeshTopology};
    ///
    /// let topo = MeshTopology::build(GridResolution::new(4, 3)?);
    /// assert_eq!(topo.quads().len(), 6);
    /// assert_eq!(topo.uvs().len(), 12);
    /// # Ok::<(), supershape::ShapeError>(())
    /// ```
    pub fn build(resolution: GridResolution) -> Self {
        let longitude = resolution.longitude();
        let latitude = resolution.latitude();

        let su = linspace(0.0, 1.0, longitude);
        let sv = linspace(0.0, 1.0, latitude);
        let mut uvs = Vec::with_capacity(resolution.vertex_count());
        for &s in &su {
            for &t in &sv {
                uvs.push([s, 1.0 - t]);
            }
        }

        // Both axes are at least 1, so the subtractions cannot underflow
        let mut quads = Vec::with_capacity(resolution.quad_count());
        for u in 0..longitude - 1 {
            for v in 0..latitude - 1 {
                let a = resolution.index(u, v);
                let b = resolution.index(u, v + 1);
                let c = resolution.index(u + 1, v + 1);
                let d = resolution.index(u + 1, v);
                quads.push([d, c, b, a]);
            }
        }

        Self {
            resolution,
            uvs,
            quads,
        }
    }

    pub const fn resolution(&self) -> GridResolution {
        self.resolution
    }

    /// Texture coordinates per grid vertex, row-major
    pub fn uvs(&self) -> &[[Real; 2]] {
        &self.uvs
    }

    /// Texture coordinate of grid vertex `(u, v)`
    pub fn uv(&self, u: usize, v: usize) -> [Real; 2] {
        self.uvs[self.resolution.index(u, v)]
    }

    /// Quads as flat vertex indices, wound `(D, C, B, A)`
    pub fn quads(&self) -> &[[usize; 4]] {
        &self.quads
    }
}
