//! CPU meshing crate: greedy boundary-face mesher for sparse block maps.
//!
//! One call to [`create_mesh_data`] turns a chunk-local [`BlockMap`] plus a
//! [`TextureAtlas`] and block-type table into flat [`MeshData`] buffers
//! ready for GPU upload. Fully synchronous and allocation-local: concurrent
//! calls for different chunks need no locking.
#![forbid(unsafe_code)]

pub mod build;
pub mod constants;
pub mod face;
pub mod mesh_build;

mod emit;
mod greedy;
mod mask;

pub use build::{MesherConfig, create_mesh_data};
pub use face::{FACES, Face};
pub use mesh_build::MeshData;

// Re-export the input types so callers can depend on this crate alone.
pub use strata_blocks::{BlockId, BlockType, TextureAtlas, UvRect};
pub use strata_chunk::BlockMap;
