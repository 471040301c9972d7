//! Block types, registry, and texture atlas crate.
#![forbid(unsafe_code)]

pub mod atlas;
pub mod registry;
pub mod types;

// Re-exports for convenience
pub use atlas::{AtlasEntry, TextureAtlas, UvRect};
pub use registry::BlockRegistry;
pub use types::{BlockId, BlockType};
