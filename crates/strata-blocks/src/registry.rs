use std::collections::HashMap;

use super::types::{BlockId, BlockType};

/// Read-only lookup table over the caller-supplied block definitions.
/// Built once per meshing call; ids never found here are treated as air
/// by the grid builder rather than reported as errors.
#[derive(Default, Clone, Debug)]
pub struct BlockRegistry {
    by_id: HashMap<BlockId, BlockType>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            by_id: HashMap::new(),
        }
    }

    /// Builds the registry from a slice of definitions. Duplicate ids keep
    /// the last definition; an id of 0 is ignored since 0 means air.
    pub fn from_defs(defs: &[BlockType]) -> Self {
        let mut by_id = HashMap::with_capacity(defs.len());
        for def in defs {
            if def.id == 0 {
                continue;
            }
            by_id.insert(def.id, def.clone());
        }
        Self { by_id }
    }

    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.by_id.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: BlockId) -> bool {
        self.by_id.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
