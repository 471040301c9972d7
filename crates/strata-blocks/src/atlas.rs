use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::types::BlockId;

/// Sub-rectangle of the atlas texture in normalized UV space.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct UvRect {
    pub u_min: f32,
    pub u_max: f32,
    pub v_min: f32,
    pub v_max: f32,
}

impl UvRect {
    /// The whole texture; used when no atlas entry resolves for a face.
    pub const FULL: UvRect = UvRect {
        u_min: 0.0,
        u_max: 1.0,
        v_min: 0.0,
        v_max: 1.0,
    };
}

/// One atlas entry. Two naming conventions coexist in world data:
/// a per-side table under the plain block id, or a bare rectangle under a
/// composite `"{id}_{side}"` key (legacy per-side texture naming).
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum AtlasEntry {
    // "7_top" = { u_min = 0.0, ... }  (also "7" = {...} as an all-sides rect)
    Rect(UvRect),
    // [atlas."7"] top = { u_min = 0.0, ... }, default = { ... }
    Sides(HashMap<String, UvRect>),
}

/// Texture atlas lookup table, keyed by block id or composite id+side names.
#[derive(Default, Clone, Debug, Deserialize)]
#[serde(transparent)]
pub struct TextureAtlas {
    pub entries: HashMap<String, AtlasEntry>,
}

impl TextureAtlas {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: AtlasEntry) {
        self.entries.insert(key.into(), entry);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves the UV rectangle for one face of `block`. `aliases` are the
    /// face-side names to try, most canonical first. The trial order is part
    /// of the contract: per-side table (each alias, then `"default"`), then
    /// a plain-id rectangle, then composite `"{id}_{alias}"` keys. `None`
    /// means the caller should degrade to [`UvRect::FULL`].
    pub fn resolve(&self, block: BlockId, aliases: &[&str]) -> Option<UvRect> {
        match self.entries.get(block.to_string().as_str()) {
            Some(AtlasEntry::Sides(sides)) => {
                for alias in aliases {
                    if let Some(rect) = sides.get(*alias) {
                        return Some(*rect);
                    }
                }
                if let Some(rect) = sides.get("default") {
                    return Some(*rect);
                }
            }
            Some(AtlasEntry::Rect(rect)) => return Some(*rect),
            None => {}
        }
        for alias in aliases {
            if let Some(AtlasEntry::Rect(rect)) = self.entries.get(format!("{block}_{alias}").as_str())
            {
                return Some(*rect);
            }
        }
        None
    }
}
