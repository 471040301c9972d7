use strata_blocks::BlockId;

use crate::mask::SliceMask;

/// Greedy-rectangle sweep over a slice mask. Cells are visited row-major;
/// for each unconsumed nonzero cell the width run grows first, then the
/// height run, both capped at `max_run`. Every covered cell is zeroed so
/// it is never revisited, and `emit(u, v, w, h, owner)` fires once per
/// maximal rectangle. The width-before-height tie-break decides which
/// rectangles form on ambiguous layouts; the covered cell set does not
/// depend on it.
pub(crate) fn merge_rects(
    mask: &mut SliceMask,
    max_run: usize,
    mut emit: impl FnMut(usize, usize, usize, usize, BlockId),
) {
    let width = mask.width;
    let height = mask.height;
    for v in 0..height {
        for u in 0..width {
            let owner = mask.cells[v * width + u];
            if owner == 0 {
                continue;
            }
            let mut w = 1;
            while u + w < width && w < max_run && mask.cells[v * width + u + w] == owner {
                w += 1;
            }
            let mut h = 1;
            'grow: while v + h < height && h < max_run {
                for i in 0..w {
                    if mask.cells[(v + h) * width + u + i] != owner {
                        break 'grow;
                    }
                }
                h += 1;
            }
            for vv in v..v + h {
                for uu in u..u + w {
                    mask.cells[vv * width + uu] = 0;
                }
            }
            emit(u, v, w, h, owner);
        }
    }
}
