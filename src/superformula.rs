//! The superformula and its evaluation over angular grids.
//!
//! A supershape surface is driven by two superformula curves, one per
//! angular axis. Evaluating the pair over a longitude/latitude grid yields
//! the cartesian coordinate arrays consumed by the mesh builder.

use crate::float_types::{FRAC_PI_2, PI, Real};
use crate::grid::{CoordinateGrid, GridResolution, linspace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Parameters of a single superformula curve.
///
/// The radius at angle `θ` is:
///
/// ```text
/// r(θ) = (|cos(m·θ/4)/a|^n2 + |sin(m·θ/4)/b|^n3)^(-1/n1)
/// ```
///
/// `m` sets the lobe count, `a` and `b` scale the cosine and sine terms, and
/// the three exponents shape the blend between them. The absolute value wraps
/// the whole quotient, which is what lets published parameter sets use
/// negative amplitudes.
///
/// Nothing is validated here: a zero amplitude or a zero `n1` produces IEEE
/// NaN or infinity in the output rather than an error, and those values
/// propagate through downstream meshing untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperFormula {
    /// Lobe count (symmetry), applied to the angle as `m·θ/4`
    pub m: Real,
    /// Amplitude of the cosine term
    pub a: Real,
    /// Amplitude of the sine term
    pub b: Real,
    /// Outer exponent, applied as `-1/n1`
    pub n1: Real,
    /// Exponent of the cosine term
    pub n2: Real,
    /// Exponent of the sine term
    pub n3: Real,
}

impl SuperFormula {
    pub const fn new(m: Real, a: Real, b: Real, n1: Real, n2: Real, n3: Real) -> Self {
        Self { m, a, b, n1, n2, n3 }
    }

    /// Radius of the curve at `angle` radians
    pub fn radius(&self, angle: Real) -> Real {
        let t = self.m * angle / 4.0;
        let cos_term = (t.cos() / self.a).abs().powf(self.n2);
        let sin_term = (t.sin() / self.b).abs().powf(self.n3);
        (cos_term + sin_term).powf(-1.0 / self.n1)
    }
}

impl From<[Real; 6]> for SuperFormula {
    /// Parameters in the conventional `[m, a, b, n1, n2, n3]` order
    fn from(p: [Real; 6]) -> Self {
        Self::new(p[0], p[1], p[2], p[3], p[4], p[5])
    }
}

/// A supershape: one superformula per angular axis.
///
/// `longitude` sweeps θ over `[-π, π]` and `latitude` sweeps φ over
/// `[-π/2, π/2]`. The two curves are evaluated independently and combined
/// into a spherical-product surface by [`SuperShape::coordinates`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperShape {
    pub longitude: SuperFormula,
    pub latitude: SuperFormula,
}

impl SuperShape {
    pub const fn new(longitude: SuperFormula, latitude: SuperFormula) -> Self {
        Self { longitude, latitude }
    }

    /// Both axes share one formula
    pub const fn uniform(formula: SuperFormula) -> Self {
        Self {
            longitude: formula,
            latitude: formula,
        }
    }

    /// Near-perfect sphere
    pub const SPHERE: Self =
        Self::uniform(SuperFormula::new(0.01, 1.0, 1.0, 0.1, 0.01, 10.0));

    /// Cube with rounded corners
    pub const ROUNDCUBE: Self =
        Self::uniform(SuperFormula::new(4.0, 1.0, 1.0, 10.0, 10.0, 10.0));

    /// Seven-lobed flower
    pub const FLOWER: Self = Self::uniform(SuperFormula::new(7.0, 1.0, 1.0, 0.2, 1.7, 1.7));

    /// Four-sided spike
    pub const CONE: Self = Self::new(
        SuperFormula::new(4.0, 1.0, 1.0, 100.0, 1.0, 1.0),
        SuperFormula::new(4.0, 1.0, 1.0, 1.0, 1.0, 1.0),
    );

    /// The stock starting shape
    pub const DEFAULT: Self = Self::uniform(SuperFormula::new(7.0, 1.0, 1.0, 0.2, 1.7, 1.7));

    /// Five-armed starfish
    pub const STARFISH: Self = Self::new(
        SuperFormula::new(7.0, 1.0, 1.0, 0.2, 1.48, 1.48),
        SuperFormula::new(1.95, 1.0, 1.0, 0.2, 1.12, 1.01),
    );

    /// Clover leaf. Its negative amplitudes and exponents push parts of the
    /// grid into NaN territory, which downstream code must tolerate.
    pub const CLOVER: Self = Self::new(
        SuperFormula::new(7.93, 1.0, 1.0, 0.10, 6.35, -0.23),
        SuperFormula::new(4.0, -0.05, -0.05, 1.0, -0.28, 1.0),
    );

    /// Curved blade with a serrated profile
    pub const SHARKTOOTH: Self = Self::new(
        SuperFormula::new(2.63, 1.03, 1.05, 0.29, 1.48, 1.48),
        SuperFormula::new(-1.90, 1.31, 1.78, 0.20, 0.64, 0.95),
    );

    /// Evaluate the shape over a full angular grid.
    ///
    /// θ takes `resolution.longitude()` samples over `[-π, π]` and φ takes
    /// `resolution.latitude()` samples over `[-π/2, π/2]`. Each axis evaluates
    /// its formula once per sample, then the cells combine as the spherical
    /// product:
    ///
    /// ```text
    /// x = r1(θ)·cos(θ) · r2(φ)·cos(φ)
    /// y = r1(θ)·sin(θ) · r2(φ)·cos(φ)
    /// z = r2(φ)·sin(φ)
    /// ```
    ///
    /// Identical inputs produce bit-identical grids, with or without the
    /// `parallel` feature.
    ///
    /// ```
    /// use supershape::{GridResolution, SuperShape};
    ///
    /// let res = GridResolution::new(50, 50)?;
    /// let grid = SuperShape::SPHERE.coordinates(res);
    /// assert_eq!(grid.x().len(), 2500);
    /// # Ok::<(), supershape::ShapeError>(())
    /// ```
    pub fn coordinates(&self, resolution: GridResolution) -> CoordinateGrid {
        let theta = linspace(-PI, PI, resolution.longitude());
        let phi = linspace(-FRAC_PI_2, FRAC_PI_2, resolution.latitude());

        // Per-axis factors; the superformula runs once per sample, not per cell
        let ru_cos: Vec<Real> = theta
            .iter()
            .map(|&t| self.longitude.radius(t) * t.cos())
            .collect();
        let ru_sin: Vec<Real> = theta
            .iter()
            .map(|&t| self.longitude.radius(t) * t.sin())
            .collect();
        let rv_cos: Vec<Real> = phi
            .iter()
            .map(|&p| self.latitude.radius(p) * p.cos())
            .collect();
        let rv_sin: Vec<Real> = phi
            .iter()
            .map(|&p| self.latitude.radius(p) * p.sin())
            .collect();

        let (x, y, z) = combine_rows(&ru_cos, &ru_sin, &rv_cos, &rv_sin);
        CoordinateGrid::new(resolution, x, y, z)
    }
}

impl Default for SuperShape {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<SuperFormula> for SuperShape {
    /// Broadcast one formula to both axes, like [`SuperShape::uniform`]
    fn from(formula: SuperFormula) -> Self {
        Self::uniform(formula)
    }
}

/// Spherical product of the per-axis factor tables, row-major over `(u, v)`
#[cfg(not(feature = "parallel"))]
fn combine_rows(
    ru_cos: &[Real],
    ru_sin: &[Real],
    rv_cos: &[Real],
    rv_sin: &[Real],
) -> (Vec<Real>, Vec<Real>, Vec<Real>) {
    let total = ru_cos.len() * rv_cos.len();
    let mut x = Vec::with_capacity(total);
    let mut y = Vec::with_capacity(total);
    let mut z = Vec::with_capacity(total);
    for (uc, us) in ru_cos.iter().zip(ru_sin) {
        for (vc, vs) in rv_cos.iter().zip(rv_sin) {
            x.push(uc * vc);
            y.push(us * vc);
            z.push(*vs);
        }
    }
    (x, y, z)
}

/// Spherical product of the per-axis factor tables, row-major over `(u, v)`.
/// Rows are filled in parallel; each cell is independent, so the result is
/// bit-identical to the serial version.
#[cfg(feature = "parallel")]
fn combine_rows(
    ru_cos: &[Real],
    ru_sin: &[Real],
    rv_cos: &[Real],
    rv_sin: &[Real],
) -> (Vec<Real>, Vec<Real>, Vec<Real>) {
    let row = rv_cos.len().max(1);
    let total = ru_cos.len() * rv_cos.len();
    let mut x = vec![0.0; total];
    let mut y = vec![0.0; total];
    let mut z = vec![0.0; total];
    x.par_chunks_mut(row)
        .zip(y.par_chunks_mut(row))
        .zip(z.par_chunks_mut(row))
        .enumerate()
        .for_each(|(u, ((xr, yr), zr))| {
            let (uc, us) = (ru_cos[u], ru_sin[u]);
            for v in 0..rv_cos.len() {
                xr[v] = uc * rv_cos[v];
                yr[v] = us * rv_cos[v];
                zr[v] = rv_sin[v];
            }
        });
    (x, y, z)
}
