mod support;

use supershape::float_types::{PI, Real, TAU};
use supershape::{GridResolution, SuperFormula, SuperShape};
use support::approx_eq;

fn sample_angles() -> Vec<Real> {
    (0..24).map(|i| -PI + TAU * (i as Real) / 23.0).collect()
}

#[test]
fn zero_m_gives_unit_radius() {
    // m = 0 pins the angle argument, so the curve degenerates to a circle
    let f = SuperFormula::new(0.0, 1.0, 1.0, 1.0, 1.0, 1.0);
    for angle in sample_angles() {
        assert!(approx_eq(f.radius(angle), 1.0, 1e-12));
    }
}

#[test]
fn pythagorean_parameters_give_unit_radius() {
    // m = 4 makes the argument equal the angle itself; the squared terms
    // then sum to one at every angle
    let f = SuperFormula::new(4.0, 1.0, 1.0, 2.0, 2.0, 2.0);
    for angle in sample_angles() {
        assert!(approx_eq(f.radius(angle), 1.0, 1e-12));
    }
}

#[test]
fn cosine_term_uses_n2() {
    // At angle 0 the sine term vanishes; only (1/a)^n2 = (1/2)^3 remains
    let f = SuperFormula::new(4.0, 2.0, 1.0, 1.0, 3.0, 7.0);
    assert!(approx_eq(f.radius(0.0), 8.0, 1e-12));
}

#[test]
fn sine_term_uses_n3() {
    // At angle π/2 the cosine term vanishes; only (1/b)^n3 = (1/2)^3 remains
    let f = SuperFormula::new(4.0, 1.0, 2.0, 1.0, 5.0, 3.0);
    assert!(approx_eq(f.radius(PI / 2.0), 8.0, 1e-9));
}

#[test]
fn negative_amplitude_matches_positive() {
    // The absolute value wraps the whole quotient, so flipping an amplitude's
    // sign never drives powf onto a negative base
    let pos = SuperFormula::new(3.0, 1.0, 1.0, 2.0, 2.5, 2.5);
    let neg = SuperFormula::new(3.0, -1.0, -1.0, 2.0, 2.5, 2.5);
    for angle in sample_angles() {
        let r = pos.radius(angle);
        assert!(r.is_finite());
        assert_eq!(r, neg.radius(angle));
    }
}

#[test]
fn uniform_broadcasts_one_formula_to_both_axes() {
    let formula = SuperFormula::from([7.0, 1.0, 1.0, 0.2, 1.7, 1.7]);
    let shape = SuperShape::uniform(formula);
    assert_eq!(shape, SuperShape::DEFAULT);
    assert_eq!(shape, SuperShape::from(formula));
    assert_eq!(shape.longitude, shape.latitude);
}

#[test]
fn evaluation_is_deterministic() {
    let res = GridResolution::new(64, 48).unwrap();
    let g1 = SuperShape::STARFISH.coordinates(res);
    let g2 = SuperShape::STARFISH.coordinates(res);
    assert_eq!(g1.x(), g2.x());
    assert_eq!(g1.y(), g2.y());
    assert_eq!(g1.z(), g2.z());
}

#[test]
fn sphere_preset_radius_is_constant() {
    let res = GridResolution::new(64, 64).unwrap();
    let grid = SuperShape::SPHERE.coordinates(res);
    let (xs, ys, zs) = (grid.x(), grid.y(), grid.z());
    let reference = xs[0] * xs[0] + ys[0] * ys[0] + zs[0] * zs[0];
    for i in 0..xs.len() {
        let r2 = xs[i] * xs[i] + ys[i] * ys[i] + zs[i] * zs[i];
        assert!(
            approx_eq(r2, reference, 1e-3),
            "vertex {i}: squared radius {r2} deviates from {reference}"
        );
    }
}

#[test]
fn clover_grid_is_mostly_finite() {
    // Negative amplitudes and exponents are legal input; they may cost some
    // grid points but must never panic
    let res = GridResolution::new(100, 100).unwrap();
    let grid = SuperShape::CLOVER.coordinates(res);
    assert!(grid.finite_fraction() >= 0.95);
}

#[test]
fn longitude_seam_rows_coincide() {
    // θ = -π and θ = π describe the same meridian; the first and last grid
    // rows land on it without being welded
    let res = GridResolution::new(33, 17).unwrap();
    let grid = SuperShape::DEFAULT.coordinates(res);
    for v in 0..17 {
        let first = grid.point(0, v);
        let seam = grid.point(32, v);
        assert!((first - seam).norm() < 1e-9, "latitude {v} seam is open");
    }
}

#[test]
fn grid_arrays_share_the_grid_shape() {
    let res = GridResolution::new(5, 3).unwrap();
    let grid = SuperShape::CONE.coordinates(res);
    assert_eq!(grid.resolution(), res);
    assert_eq!(grid.x().len(), 15);
    assert_eq!(grid.y().len(), 15);
    assert_eq!(grid.z().len(), 15);
}
