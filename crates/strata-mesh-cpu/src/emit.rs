use strata_blocks::{BlockId, TextureAtlas, UvRect};
use strata_geom::Vec3;

use crate::face::Face;
use crate::mesh_build::MeshData;

/// Converts one merged mask rectangle back into a world-space quad and
/// appends it to `out`. `depth` and the rectangle are in grid slice
/// coordinates; `offset` maps grid indices back to world coordinates.
pub(crate) fn emit_rect(
    out: &mut MeshData,
    atlas: &TextureAtlas,
    face: Face,
    depth: usize,
    u0: usize,
    v0: usize,
    w: usize,
    h: usize,
    offset: [i32; 3],
    owner: BlockId,
) {
    let (d, ua, va) = face.axes();
    // The face plane sits on the boundary between depth and depth + 1.
    let plane = (offset[d] + depth as i32 + 1) as f32;
    let u_lo = (offset[ua] + u0 as i32) as f32;
    let v_lo = (offset[va] + v0 as i32) as f32;
    let du = w as f32;
    let dv = h as f32;

    let rect = match atlas.resolve(owner, &face.side_aliases()) {
        Some(rect) => rect,
        None => {
            log::warn!("no atlas entry for block {owner} side {:?}; using full texture", face);
            UvRect::FULL
        }
    };

    let corners = face_corners(face, plane, u_lo, v_lo, du, dv);
    let uvs = UV_CORNERS[face.index()].map(|(far_u, far_v)| corner_uv(face, rect, far_u, far_v));
    out.add_quad(corners, face.normal(), uvs);
}

/// Per-direction corner offsets, wound counter-clockwise seen from outside
/// so triangles `(0,1,2)` `(0,2,3)` face outward.
fn face_corners(face: Face, plane: f32, u_lo: f32, v_lo: f32, du: f32, dv: f32) -> [Vec3; 4] {
    let (u_hi, v_hi) = (u_lo + du, v_lo + dv);
    match face {
        Face::PosY => [
            Vec3::new(u_lo, plane, v_lo),
            Vec3::new(u_lo, plane, v_hi),
            Vec3::new(u_hi, plane, v_hi),
            Vec3::new(u_hi, plane, v_lo),
        ],
        Face::NegY => [
            Vec3::new(u_lo, plane, v_lo),
            Vec3::new(u_hi, plane, v_lo),
            Vec3::new(u_hi, plane, v_hi),
            Vec3::new(u_lo, plane, v_hi),
        ],
        Face::PosX => [
            Vec3::new(plane, v_lo, u_lo),
            Vec3::new(plane, v_hi, u_lo),
            Vec3::new(plane, v_hi, u_hi),
            Vec3::new(plane, v_lo, u_hi),
        ],
        Face::NegX => [
            Vec3::new(plane, v_lo, u_lo),
            Vec3::new(plane, v_lo, u_hi),
            Vec3::new(plane, v_hi, u_hi),
            Vec3::new(plane, v_hi, u_lo),
        ],
        Face::PosZ => [
            Vec3::new(u_lo, v_lo, plane),
            Vec3::new(u_hi, v_lo, plane),
            Vec3::new(u_hi, v_hi, plane),
            Vec3::new(u_lo, v_hi, plane),
        ],
        Face::NegZ => [
            Vec3::new(u_lo, v_lo, plane),
            Vec3::new(u_lo, v_hi, plane),
            Vec3::new(u_hi, v_hi, plane),
            Vec3::new(u_hi, v_lo, plane),
        ],
    }
}

/// Which in-plane corner each vertex of `face_corners` occupies, as
/// `(far_u, far_v)` flags. Indexed by `Face::index()`; one fixed rotation
/// of the UV rectangle per direction group.
const UV_CORNERS: [[(bool, bool); 4]; 6] = [
    [(false, false), (false, true), (true, true), (true, false)], // PosY
    [(false, false), (true, false), (true, true), (false, true)], // NegY
    [(false, false), (false, true), (true, true), (true, false)], // PosX
    [(false, false), (true, false), (true, true), (false, true)], // NegX
    [(false, false), (true, false), (true, true), (false, true)], // PosZ
    [(false, false), (false, true), (true, true), (true, false)], // NegZ
];

/// Maps a corner into the resolved UV rectangle. Side faces flip V (their
/// v axis is world y, texture rows grow downward); top/bottom map directly.
#[inline]
fn corner_uv(face: Face, rect: UvRect, far_u: bool, far_v: bool) -> (f32, f32) {
    let u = if far_u { rect.u_max } else { rect.u_min };
    let v = match face {
        Face::PosY | Face::NegY => {
            if far_v {
                rect.v_max
            } else {
                rect.v_min
            }
        }
        _ => {
            if far_v {
                rect.v_min
            } else {
                rect.v_max
            }
        }
    };
    (u, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::FACES;

    #[test]
    fn corners_wind_outward() {
        for face in FACES {
            let c = face_corners(face, 2.0, -1.0, 3.0, 4.0, 5.0);
            let e1 = c[1] - c[0];
            let e2 = c[2] - c[0];
            assert!(
                e1.cross(e2).dot(face.normal()) > 0.0,
                "face {face:?} winds inward"
            );
        }
    }

    #[test]
    fn uv_corners_match_vertex_layout() {
        // The (far_u, far_v) table must agree with the geometric corners.
        for face in FACES {
            let (_, ua, va) = face.axes();
            let c = face_corners(face, 0.0, 0.0, 0.0, 1.0, 1.0);
            for (i, v3) in c.iter().enumerate() {
                let arr = v3.to_array();
                let (far_u, far_v) = UV_CORNERS[face.index()][i];
                assert_eq!(arr[ua] == 1.0, far_u, "face {face:?} corner {i}");
                assert_eq!(arr[va] == 1.0, far_v, "face {face:?} corner {i}");
            }
        }
    }
}
