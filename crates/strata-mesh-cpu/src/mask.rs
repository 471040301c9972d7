use strata_blocks::BlockId;
use strata_chunk::VoxelGrid;

use crate::face::Face;

/// Row-major 2-D slice mask: 0 means no face, nonzero is the block id that
/// owns the face in that cell. Reused across depth slices of one sweep.
pub(crate) struct SliceMask {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<BlockId>,
}

impl SliceMask {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    #[inline]
    pub fn idx(&self, u: usize, v: usize) -> usize {
        v * self.width + u
    }
}

/// Fills `mask` for one depth slice of `face`'s sweep axis. A cell is
/// marked iff exactly one of the two voxels straddling the boundary
/// between `depth` and `depth + 1` is solid and the exposed side faces
/// `face`: the solid-below case feeds positive faces, the solid-above case
/// feeds the paired negative face's own sweep. Both-solid boundaries are
/// occluded and both-air boundaries have nothing to draw; neither marks.
pub(crate) fn build_face_mask(grid: &VoxelGrid, face: Face, depth: usize, mask: &mut SliceMask) {
    let (d, ua, va) = face.axes();
    let positive = face.is_positive();
    let mut coord = [0usize; 3];
    for v in 0..mask.height {
        for u in 0..mask.width {
            coord[d] = depth;
            coord[ua] = u;
            coord[va] = v;
            let below = grid.get(coord[0] as i32, coord[1] as i32, coord[2] as i32);
            coord[d] = depth + 1;
            let above = grid.get(coord[0] as i32, coord[1] as i32, coord[2] as i32);
            let owner = match (below != 0, above != 0) {
                (true, false) if positive => below,
                (false, true) if !positive => above,
                _ => 0,
            };
            let i = mask.idx(u, v);
            mask.cells[i] = owner;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_blocks::{BlockRegistry, BlockType};
    use strata_chunk::BlockMap;

    fn grid_of(entries: &[((i32, i32, i32), u16)]) -> VoxelGrid {
        let defs: Vec<BlockType> = (1u16..=4).map(BlockType::new).collect();
        let reg = BlockRegistry::from_defs(&defs);
        let map: BlockMap = entries.iter().copied().collect();
        VoxelGrid::build(&map, &reg)
    }

    #[test]
    fn single_block_marks_one_cell_per_direction() {
        let grid = grid_of(&[((0, 0, 0), 1)]);
        // Grid is 3x3x3, block at index 1 on every axis.
        for face in crate::face::FACES {
            let (d, ua, va) = face.axes();
            let dims = grid.dims();
            let mut mask = SliceMask::new(dims[ua], dims[va]);
            let mut marked = 0;
            for depth in 0..dims[d] - 1 {
                build_face_mask(&grid, face, depth, &mut mask);
                marked += mask.cells.iter().filter(|&&c| c != 0).count();
            }
            assert_eq!(marked, 1, "face {face:?}");
        }
    }

    #[test]
    fn touching_blocks_occlude_the_shared_boundary() {
        let grid = grid_of(&[((0, 0, 0), 1), ((1, 0, 0), 2)]);
        // +X sweep: the boundary between the two solids marks nothing; only
        // the right block's outer face survives.
        let dims = grid.dims();
        let mut mask = SliceMask::new(dims[2], dims[1]);
        let mut owners = Vec::new();
        for depth in 0..dims[0] - 1 {
            build_face_mask(&grid, Face::PosX, depth, &mut mask);
            owners.extend(mask.cells.iter().copied().filter(|&c| c != 0));
        }
        assert_eq!(owners, vec![2]);
    }

    #[test]
    fn negative_faces_belong_to_the_upper_voxel() {
        let grid = grid_of(&[((0, 5, 0), 3)]);
        let dims = grid.dims();
        let mut mask = SliceMask::new(dims[0], dims[2]);
        // The block sits at grid y=1; its bottom face lies on the boundary
        // below it, i.e. the NegY sweep at depth 0.
        build_face_mask(&grid, Face::NegY, 0, &mut mask);
        assert_eq!(mask.cells.iter().filter(|&&c| c == 3).count(), 1);
        build_face_mask(&grid, Face::NegY, 1, &mut mask);
        assert!(mask.cells.iter().all(|&c| c == 0));
    }
}
