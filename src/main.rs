// main.rs
//
// Generate each named supershape preset at the stock 100x100 resolution and
// export it to stl/, then demonstrate a parameter-only refresh.

use std::fs;

use supershape::{SuperShape, SurfaceMesh};

fn main() {
    // Ensure the /stl folder exists
    let _ = fs::create_dir_all("stl");

    let presets = [
        ("sphere", SuperShape::SPHERE),
        ("roundcube", SuperShape::ROUNDCUBE),
        ("flower", SuperShape::FLOWER),
        ("cone", SuperShape::CONE),
        ("default", SuperShape::DEFAULT),
        ("starfish", SuperShape::STARFISH),
        ("clover", SuperShape::CLOVER),
        ("sharktooth", SuperShape::SHARKTOOTH),
    ];

    for (name, shape) in presets {
        let mesh =
            SurfaceMesh::generate(&shape, 100, 100).expect("100x100 is a valid resolution");
        let _ = fs::write(format!("stl/{name}.stl"), mesh.to_stl_ascii(name));
    }

    // Parameter-only update: the mesh keeps its topology, only coordinates move
    let mut morph =
        SurfaceMesh::generate(&SuperShape::SPHERE, 100, 100).expect("100x100 is a valid resolution");
    morph
        .refresh(&SuperShape::SHARKTOOTH)
        .expect("refresh reuses the mesh resolution");
    let _ = fs::write("stl/morph.stl", morph.to_stl_ascii("morph"));

    println!("Wrote presets and morph to stl/");
}
