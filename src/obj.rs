//! Wavefront OBJ export of a built cuboid.

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use pcuboid_mesh::CuboidMesh;

/// Writes `mesh` as a single named object. Quads stay quads; winding is kept.
pub fn write_obj_to<W: Write>(mut w: W, mesh: &CuboidMesh, name: &str) -> std::io::Result<()> {
    writeln!(w, "# pcuboid {} vertices, {} quads", mesh.vertex_count(), mesh.face_count())?;
    writeln!(w, "o {}", name)?;
    for v in &mesh.vertices {
        writeln!(w, "v {} {} {}", v.x, v.y, v.z)?;
    }
    // OBJ indices are 1-based
    for [a, b, c, d] in &mesh.faces {
        writeln!(w, "f {} {} {} {}", a + 1, b + 1, c + 1, d + 1)?;
    }
    w.flush()
}

pub fn write_obj(path: &Path, mesh: &CuboidMesh, name: &str) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    write_obj_to(BufWriter::new(file), mesh, name)?;
    Ok(())
}
