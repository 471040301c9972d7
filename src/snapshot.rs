use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use strata_blocks::{BlockType, TextureAtlas};
use strata_chunk::BlockMap;

/// On-disk world snapshot: the mesher's three inputs in one TOML file.
/// This is the shape the upstream region reader hands over, not a world
/// format of its own.
#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
    pub chunk_size: Option<usize>,
    #[serde(default)]
    pub blocks: HashMap<String, u16>,
    #[serde(default)]
    pub block_types: Vec<BlockType>,
    #[serde(default)]
    pub atlas: TextureAtlas,
}

impl Snapshot {
    /// Converts the string-keyed block table; malformed keys are dropped.
    pub fn block_map(&self) -> BlockMap {
        BlockMap::from_keyed(self.blocks.iter().map(|(k, &id)| (k.as_str(), id)))
    }
}

pub fn load(path: &Path) -> Result<Snapshot, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    Ok(toml::from_str(&s)?)
}
