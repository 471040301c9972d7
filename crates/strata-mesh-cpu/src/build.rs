use std::time::Instant;

use strata_blocks::{BlockRegistry, BlockType, TextureAtlas};
use strata_chunk::{BlockMap, VoxelGrid};

use crate::constants::MAX_MERGE_RUN;
use crate::emit::emit_rect;
use crate::face::FACES;
use crate::greedy::merge_rects;
use crate::mask::{SliceMask, build_face_mask};
use crate::mesh_build::MeshData;

/// Per-call meshing knobs. `chunk_size` is an informational sizing hint
/// used for buffer pre-reservation, not an enforced bound.
#[derive(Clone, Debug)]
pub struct MesherConfig {
    pub chunk_size: usize,
    pub max_merge_run: usize,
    pub enable_timing: bool,
    pub debug: bool,
}

impl Default for MesherConfig {
    fn default() -> Self {
        Self {
            chunk_size: 16,
            max_merge_run: MAX_MERGE_RUN,
            enable_timing: false,
            debug: false,
        }
    }
}

/// Meshes one chunk: expands the sparse block map into a padded grid, then
/// sweeps all six face directions, greedily merging each depth slice's
/// boundary mask into quads. Pure in its inputs; timing and debug output
/// go to the log only.
pub fn create_mesh_data(
    blocks: &BlockMap,
    atlas: &TextureAtlas,
    block_types: &[BlockType],
    cfg: &MesherConfig,
) -> MeshData {
    let t0 = Instant::now();
    let reg = BlockRegistry::from_defs(block_types);
    let grid = VoxelGrid::build(blocks, &reg);
    if cfg.debug {
        dump_grid(&grid);
    }

    let mut out = MeshData::default();
    out.reserve_quads(cfg.chunk_size.max(1) * cfg.chunk_size.max(1));
    let max_run = cfg.max_merge_run.max(1);
    let dims = grid.dims();
    for face in FACES {
        let (d, ua, va) = face.axes();
        let mut mask = SliceMask::new(dims[ua], dims[va]);
        for depth in 0..dims[d] - 1 {
            build_face_mask(&grid, face, depth, &mut mask);
            merge_rects(&mut mask, max_run, |u0, v0, w, h, owner| {
                emit_rect(&mut out, atlas, face, depth, u0, v0, w, h, grid.offset, owner);
            });
        }
    }

    if cfg.enable_timing {
        log::info!(
            "meshed {} blocks into {} quads ({} vertices) in {:?}",
            grid.solid_count(),
            out.quad_count(),
            out.vertex_count(),
            t0.elapsed()
        );
    }
    out
}

fn dump_grid(grid: &VoxelGrid) {
    let [sx, sy, sz] = grid.dims();
    log::debug!(
        "voxel grid {}x{}x{} offset {:?}, {} solid cells",
        sx,
        sy,
        sz,
        grid.offset,
        grid.solid_count()
    );
    if !log::log_enabled!(log::Level::Trace) {
        return;
    }
    for y in 0..sy {
        let mut rows = String::new();
        for z in 0..sz {
            for x in 0..sx {
                let id = grid.get(x as i32, y as i32, z as i32);
                rows.push_str(&format!("{id:>3} "));
            }
            rows.push('\n');
        }
        log::trace!("y={}\n{}", y, rows);
    }
}
