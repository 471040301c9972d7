use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use strata_mesh_cpu::MeshData;

/// Writes the mesh as a Wavefront OBJ (`v`/`vt`/`vn` records plus
/// triangles; OBJ indices are 1-based). Position, UV, and normal buffers
/// are parallel, so one index serves all three per corner.
pub fn write_obj(mesh: &MeshData, path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    writeln!(w, "o chunk")?;
    for p in mesh.positions.chunks_exact(3) {
        writeln!(w, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for t in mesh.uvs.chunks_exact(2) {
        writeln!(w, "vt {} {}", t[0], t[1])?;
    }
    for n in mesh.normals.chunks_exact(3) {
        writeln!(w, "vn {} {} {}", n[0], n[1], n[2])?;
    }
    for tri in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        writeln!(w, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }
    w.flush()
}
