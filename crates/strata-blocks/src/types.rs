use std::collections::HashMap;

use serde::Deserialize;

/// Block identifier. `0` is always air.
pub type BlockId = u16;

/// A block definition as supplied by the caller. Only `id` is required by
/// the meshing core; `name` and `textures` ride along for tooling.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BlockType {
    pub id: BlockId,
    #[serde(default)]
    pub name: Option<String>,
    /// Optional per-face (or `"default"`) texture keys.
    #[serde(default)]
    pub textures: HashMap<String, String>,
}

impl BlockType {
    pub fn new(id: BlockId) -> Self {
        Self {
            id,
            name: None,
            textures: HashMap::new(),
        }
    }

    pub fn named(id: BlockId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            textures: HashMap::new(),
        }
    }
}
