use supershape::{GridResolution, MeshTopology, ShapeError};

#[test]
fn zero_axis_is_rejected() {
    assert_eq!(
        GridResolution::new(0, 10),
        Err(ShapeError::InvalidResolution {
            longitude: 0,
            latitude: 10
        })
    );
    assert_eq!(
        GridResolution::new(10, 0),
        Err(ShapeError::InvalidResolution {
            longitude: 10,
            latitude: 0
        })
    );
    // A single sample per axis is degenerate but legal
    assert!(GridResolution::new(1, 1).is_ok());
}

#[test]
fn default_resolution_is_50_by_50() {
    let res = GridResolution::default();
    assert_eq!(res.longitude(), 50);
    assert_eq!(res.latitude(), 50);
}

#[test]
fn counts_match_the_grid() {
    let res = GridResolution::new(7, 5).unwrap();
    let topo = MeshTopology::build(res);
    assert_eq!(topo.uvs().len(), 35);
    assert_eq!(topo.quads().len(), 6 * 4);
    assert_eq!(res.vertex_count(), 35);
    assert_eq!(res.quad_count(), 24);
}

#[test]
fn quads_follow_row_major_winding() {
    // Quad k covers cell (u, v) with u outer, v inner; corners run
    // (D, C, B, A) = (a+V, a+V+1, a+1, a) off the cell's base index a
    let latitude = 4;
    let res = GridResolution::new(6, latitude).unwrap();
    let topo = MeshTopology::build(res);
    for (k, quad) in topo.quads().iter().enumerate() {
        let u = k / (latitude - 1);
        let v = k % (latitude - 1);
        let a = u * latitude + v;
        assert_eq!(*quad, [a + latitude, a + latitude + 1, a + 1, a], "quad {k}");
    }
}

#[test]
fn quad_indices_stay_in_bounds() {
    let res = GridResolution::new(9, 6).unwrap();
    let topo = MeshTopology::build(res);
    let vertex_count = res.vertex_count();
    for quad in topo.quads() {
        assert!(quad.iter().all(|&i| i < vertex_count));
    }
}

#[test]
fn uv_corners_are_pinned() {
    let res = GridResolution::new(12, 9).unwrap();
    let topo = MeshTopology::build(res);
    // Texture V is flipped: grid (0, 0) sits at the texture's top-left
    assert_eq!(topo.uv(0, 0), [0.0, 1.0]);
    assert_eq!(topo.uv(11, 0), [1.0, 1.0]);
    assert_eq!(topo.uv(0, 8), [0.0, 0.0]);
    assert_eq!(topo.uv(11, 8), [1.0, 0.0]);
}

#[test]
fn uvs_stay_in_the_unit_square() {
    let res = GridResolution::new(31, 17).unwrap();
    let topo = MeshTopology::build(res);
    for uv in topo.uvs() {
        assert!(uv.iter().all(|&c| (0.0..=1.0).contains(&c)), "uv {uv:?}");
    }
}

#[test]
fn single_sample_axes_build_with_zero_quads() {
    let topo = MeshTopology::build(GridResolution::new(1, 7).unwrap());
    assert!(topo.quads().is_empty());
    assert_eq!(topo.uvs().len(), 7);
    // The degenerate axis pins its texture coordinate instead of dividing by zero
    assert!(topo.uvs().iter().all(|uv| uv.iter().all(|c| c.is_finite())));

    let topo = MeshTopology::build(GridResolution::new(7, 1).unwrap());
    assert!(topo.quads().is_empty());
    assert_eq!(topo.uvs().len(), 7);
    assert!(topo.uvs().iter().all(|uv| uv.iter().all(|c| c.is_finite())));
}

#[test]
fn topology_is_resolution_only() {
    // Same resolution twice gives identical connectivity; shape parameters
    // never enter the picture
    let res = GridResolution::new(21, 13).unwrap();
    assert_eq!(MeshTopology::build(res), MeshTopology::build(res));
}
