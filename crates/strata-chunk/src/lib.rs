//! Sparse block map and the dense padded voxel grid it expands into.
#![forbid(unsafe_code)]

use hashbrown::HashMap;

use strata_blocks::{BlockId, BlockRegistry};

/// Parses a `"x,y,z"` position key. Returns `None` for anything that does
/// not split into exactly three integers; callers skip such keys.
pub fn parse_pos_key(key: &str) -> Option<(i32, i32, i32)> {
    let mut parts = key.split(',');
    let x = parts.next()?.trim().parse().ok()?;
    let y = parts.next()?.trim().parse().ok()?;
    let z = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y, z))
}

/// Sparse chunk-local block storage: world position to block id.
/// Absence and id 0 both mean air.
#[derive(Default, Clone, Debug)]
pub struct BlockMap {
    cells: HashMap<(i32, i32, i32), BlockId>,
}

impl BlockMap {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Builds a map from string-keyed entries, e.g. `("0,4,-2", 7)`.
    /// Malformed keys and zero ids are dropped without an error.
    pub fn from_keyed<S, I>(entries: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, BlockId)>,
    {
        let mut map = Self::new();
        for (key, id) in entries {
            if let Some(pos) = parse_pos_key(key.as_ref()) {
                map.set(pos, id);
            }
        }
        map
    }

    /// Sets the block at `pos`; id 0 clears the cell.
    #[inline]
    pub fn set(&mut self, pos: (i32, i32, i32), id: BlockId) {
        if id == 0 {
            self.cells.remove(&pos);
        } else {
            self.cells.insert(pos, id);
        }
    }

    #[inline]
    pub fn get(&self, pos: (i32, i32, i32)) -> BlockId {
        self.cells.get(&pos).copied().unwrap_or(0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(i32, i32, i32), &BlockId)> {
        self.cells.iter()
    }
}

impl FromIterator<((i32, i32, i32), BlockId)> for BlockMap {
    fn from_iter<I: IntoIterator<Item = ((i32, i32, i32), BlockId)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (pos, id) in iter {
            map.set(pos, id);
        }
        map
    }
}

/// Dense block-id grid with one cell of air padding on every side, so
/// neighbor reads at the hull never branch on bounds. Scratch data:
/// rebuilt for every meshing call and dropped at return.
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    pub sx: usize,
    pub sy: usize,
    pub sz: usize,
    /// World coordinate of grid index 0 per axis (`min - 1`).
    pub offset: [i32; 3],
    cells: Vec<BlockId>,
}

impl VoxelGrid {
    /// Expands `map` into a dense grid. One pass over all entries finds the
    /// bounds; population then keeps only ids the registry knows. Unknown
    /// ids become air, silently.
    pub fn build(map: &BlockMap, reg: &BlockRegistry) -> VoxelGrid {
        let mut min = [i32::MAX; 3];
        let mut max = [i32::MIN; 3];
        for (&(x, y, z), _) in map.iter() {
            min[0] = min[0].min(x);
            min[1] = min[1].min(y);
            min[2] = min[2].min(z);
            max[0] = max[0].max(x);
            max[1] = max[1].max(y);
            max[2] = max[2].max(z);
        }
        if min[0] > max[0] {
            // Empty input: a bare padding shell with no interior.
            return VoxelGrid {
                sx: 2,
                sy: 2,
                sz: 2,
                offset: [-1, -1, -1],
                cells: vec![0; 8],
            };
        }
        let sx = (max[0] - min[0] + 3) as usize;
        let sy = (max[1] - min[1] + 3) as usize;
        let sz = (max[2] - min[2] + 3) as usize;
        let offset = [min[0] - 1, min[1] - 1, min[2] - 1];
        let mut cells = vec![0; sx * sy * sz];
        for (&(x, y, z), &id) in map.iter() {
            if !reg.contains(id) {
                continue;
            }
            let gx = (x - offset[0]) as usize;
            let gy = (y - offset[1]) as usize;
            let gz = (z - offset[2]) as usize;
            cells[(gy * sz + gz) * sx + gx] = id;
        }
        VoxelGrid {
            sx,
            sy,
            sz,
            offset,
            cells,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.sz + z) * self.sx + x
    }

    /// Reads a cell by grid index; anything outside the grid is air.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> BlockId {
        if x < 0 || y < 0 || z < 0 {
            return 0;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        if x >= self.sx || y >= self.sy || z >= self.sz {
            return 0;
        }
        self.cells[self.idx(x, y, z)]
    }

    /// Reads a cell by world coordinate; anything outside the grid is air.
    #[inline]
    pub fn get_world(&self, wx: i32, wy: i32, wz: i32) -> BlockId {
        self.get(wx - self.offset[0], wy - self.offset[1], wz - self.offset[2])
    }

    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        [self.sx, self.sy, self.sz]
    }

    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|&&id| id != 0).count()
    }
}
