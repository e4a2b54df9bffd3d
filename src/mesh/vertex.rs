//! Position/normal pairs handed to triangle consumers.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// A mesh vertex, holding position and normal.
///
/// Coordinates are stored verbatim. In particular NaN or infinite values
/// produced by degenerate shape parameters pass through unchanged, so
/// consumers decide for themselves how to treat non-finite geometry.
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`]. The normal is copied verbatim and may be
    /// non-unit.
    #[inline]
    pub const fn new(pos: Point3<Real>, normal: Vector3<Real>) -> Self {
        Vertex { pos, normal }
    }

    /// Flip vertex normal in place.
    ///
    /// # Example
    /// ```rust
    /// # use nalgebra::{Point3, Vector3};
    /// # use supershape::Vertex;
    /// let mut v = Vertex::new(Point3::new(1.0, 2.0, 3.0), Vector3::x());
    /// v.flip();
    /// assert_eq!(v.pos, Point3::new(1.0, 2.0, 3.0), "position remains the same");
    /// assert_eq!(v.normal, -Vector3::x(), "the normal is negated");
    /// ```
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Return the linear interpolation between `self` (`t = 0`) and `other`
    /// (`t = 1`). Normals are linearly interpolated as well and not
    /// renormalized.
    pub fn interpolate(&self, other: &Vertex, t: Real) -> Vertex {
        // For positions (Point3): p(t) = p0 + t * (p1 - p0)
        let new_pos = self.pos + (other.pos - self.pos) * t;

        // For normals (Vector3): n(t) = n0 + t * (n1 - n0)
        let new_normal = self.normal + (other.normal - self.normal) * t;
        Vertex::new(new_pos, new_normal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct VertexEpsilon {
    pub position: <Point3<Real> as approx::AbsDiffEq>::Epsilon,
    pub normal: <Vector3<Real> as approx::AbsDiffEq>::Epsilon,
}

impl approx::AbsDiffEq for Vertex {
    type Epsilon = VertexEpsilon;

    fn default_epsilon() -> Self::Epsilon {
        Self::Epsilon {
            position: Point3::<Real>::default_epsilon(),
            normal: Vector3::<Real>::default_epsilon(),
        }
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.pos, &other.pos, epsilon.position)
            && approx::AbsDiffEq::abs_diff_eq(&self.normal, &other.normal, epsilon.normal)
    }
}

impl approx::RelativeEq for Vertex {
    fn default_max_relative() -> Self::Epsilon {
        Self::Epsilon {
            position: Point3::<Real>::default_max_relative(),
            normal: Vector3::<Real>::default_max_relative(),
        }
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        approx::RelativeEq::relative_eq(
            &self.pos,
            &other.pos,
            epsilon.position,
            max_relative.position,
        ) && approx::RelativeEq::relative_eq(
            &self.normal,
            &other.normal,
            epsilon.normal,
            max_relative.normal,
        )
    }
}

impl approx::UlpsEq for Vertex {
    fn default_max_ulps() -> u32 {
        debug_assert_eq!(
            Point3::<Real>::default_max_ulps(),
            Vector3::<Real>::default_max_ulps()
        );

        Point3::<Real>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        approx::UlpsEq::ulps_eq(&self.pos, &other.pos, epsilon.position, max_ulps)
            && approx::UlpsEq::ulps_eq(&self.normal, &other.normal, epsilon.normal, max_ulps)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_vertex_new() {
        let pos = Point3::new(1.0, 2.0, 3.0);
        let normal = Vector3::new(0.0, 1.0, 0.0);
        let v = Vertex::new(pos, normal);
        assert_eq!(v.pos, pos);
        assert_eq!(v.normal, normal);
    }

    #[test]
    fn test_vertex_interpolate() {
        let v1 = Vertex::new(Point3::origin(), Vector3::x());
        let v2 = Vertex::new(Point3::new(2.0, 2.0, 2.0), Vector3::y());
        let v_mid = v1.interpolate(&v2, 0.5);

        approx::assert_relative_eq!(
            v_mid,
            Vertex::new(Point3::new(1.0, 1.0, 1.0), Vector3::new(0.5, 0.5, 0.0))
        );
    }

    #[test]
    fn non_finite_coordinates_survive() {
        let v = Vertex::new(Point3::new(Real::NAN, 0.0, 0.0), Vector3::z());
        assert!(v.pos.x.is_nan());
    }
}
