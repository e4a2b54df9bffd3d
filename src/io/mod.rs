//! Triangle-based export backends.
//!
//! Every backend is behind a cargo feature flag and works on anything
//! implementing [`Triangulated3D`](crate::triangulated::Triangulated3D).

#[cfg(feature = "stl-io")]
pub mod stl;
