//! Parametric **supershape** surfaces, built from the
//! [superformula](https://en.wikipedia.org/wiki/Superformula): closed-form
//! evaluation over angular grids, plus the quad meshes (texture coordinates
//! and smooth normals included) that make the result renderable.
//!
//! Topology and geometry are deliberately split: connectivity depends only on
//! the grid resolution, so interactive parameter edits rewrite positions and
//! normals in place while quads and UVs are reused untouched.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for multithreading

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod grid;
pub mod io;
pub mod mesh;
pub mod superformula;
pub mod triangulated;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::ShapeError;
pub use grid::{CoordinateGrid, GridResolution};
pub use mesh::{MeshBuffers, MeshTopology, SurfaceMesh, Vertex};
pub use superformula::{SuperFormula, SuperShape};
pub use triangulated::Triangulated3D;
