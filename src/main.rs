use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use strata_mesh_cpu::{MesherConfig, create_mesh_data};

mod export;
mod snapshot;

/// Greedy voxel mesher: turns a block-map snapshot into a surface mesh.
#[derive(Parser, Debug)]
#[command(name = "strata", version, about)]
struct Cli {
    /// World snapshot TOML (blocks, block types, texture atlas)
    snapshot: PathBuf,
    /// Write the mesh as a Wavefront OBJ file
    #[arg(long)]
    out: Option<PathBuf>,
    /// Log per-call meshing timings
    #[arg(long)]
    timing: bool,
    /// Dump the voxel grid to the log
    #[arg(long)]
    debug: bool,
    /// Maximum merged-rectangle run length
    #[arg(long)]
    max_run: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let snap = snapshot::load(&cli.snapshot)?;
    let blocks = snap.block_map();
    let mut cfg = MesherConfig {
        enable_timing: cli.timing,
        debug: cli.debug,
        ..MesherConfig::default()
    };
    if let Some(size) = snap.chunk_size {
        cfg.chunk_size = size;
    }
    if let Some(run) = cli.max_run {
        cfg.max_merge_run = run;
    }

    let mesh = create_mesh_data(&blocks, &snap.atlas, &snap.block_types, &cfg);
    log::info!(
        "{}: {} blocks -> {} quads, {} vertices, {} indices",
        cli.snapshot.display(),
        blocks.len(),
        mesh.quad_count(),
        mesh.vertex_count(),
        mesh.indices.len()
    );

    if let Some(out) = &cli.out {
        export::write_obj(&mesh, out)?;
        log::info!("wrote {}", out.display());
    }
    Ok(())
}
