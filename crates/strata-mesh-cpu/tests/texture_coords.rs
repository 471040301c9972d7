use strata_mesh_cpu::{
    BlockMap, BlockType, Face, MesherConfig, MeshData, TextureAtlas, create_mesh_data,
};

fn single_block(atlas: &TextureAtlas) -> MeshData {
    let blocks = BlockMap::from_keyed(vec![("0,0,0", 1u16)]);
    let types = vec![BlockType::named(1, "stone")];
    create_mesh_data(&blocks, atlas, &types, &MesherConfig::default())
}

fn quad_uvs(mesh: &MeshData, face: Face) -> [(f32, f32); 4] {
    let n = face.normal().to_array();
    let q = (0..mesh.quad_count())
        .find(|&q| mesh.normals[q * 12..q * 12 + 3] == n)
        .expect("no quad for face");
    core::array::from_fn(|i| (mesh.uvs[q * 8 + i * 2], mesh.uvs[q * 8 + i * 2 + 1]))
}

#[test]
fn per_side_entry_maps_the_top_face() {
    let atlas = TextureAtlas::from_toml_str(
        r#"
        ["1"]
        top = { u_min = 0.0, u_max = 0.25, v_min = 0.5, v_max = 0.75 }
    "#,
    )
    .unwrap();
    let m = single_block(&atlas);
    // Top faces map the rect directly in the +Y corner rotation.
    assert_eq!(
        quad_uvs(&m, Face::PosY),
        [(0.0, 0.5), (0.0, 0.75), (0.25, 0.75), (0.25, 0.5)]
    );
    // Unlisted sides miss and fall back to the full rectangle.
    assert_eq!(
        quad_uvs(&m, Face::NegZ),
        [(0.0, 1.0), (0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]
    );
}

#[test]
fn side_faces_flip_v() {
    let atlas = TextureAtlas::from_toml_str(
        r#"
        ["1"]
        west = { u_min = 0.5, u_max = 0.75, v_min = 0.0, v_max = 0.25 }
    "#,
    )
    .unwrap();
    let m = single_block(&atlas);
    // -X corner rotation with V flipped: low world y samples v_max.
    assert_eq!(
        quad_uvs(&m, Face::NegX),
        [(0.5, 0.25), (0.75, 0.25), (0.75, 0.0), (0.5, 0.0)]
    );
}

#[test]
fn default_entry_covers_every_side() {
    let atlas = TextureAtlas::from_toml_str(
        r#"
        ["1"]
        default = { u_min = 0.25, u_max = 0.5, v_min = 0.25, v_max = 0.5 }
    "#,
    )
    .unwrap();
    let m = single_block(&atlas);
    for face in strata_mesh_cpu::FACES {
        let mut corners = quad_uvs(&m, face).to_vec();
        corners.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(
            corners,
            vec![(0.25, 0.25), (0.25, 0.5), (0.5, 0.25), (0.5, 0.5)],
            "face {face:?}"
        );
    }
}

#[test]
fn composite_keys_resolve_per_side() {
    let atlas = TextureAtlas::from_toml_str(
        r#"
        "1_top" = { u_min = 0.0, u_max = 0.5, v_min = 0.0, v_max = 0.5 }
        "1_-y" = { u_min = 0.5, u_max = 1.0, v_min = 0.5, v_max = 1.0 }
    "#,
    )
    .unwrap();
    let m = single_block(&atlas);
    assert_eq!(
        quad_uvs(&m, Face::PosY),
        [(0.0, 0.0), (0.0, 0.5), (0.5, 0.5), (0.5, 0.0)]
    );
    // Sign-notation composite key found on the second alias trial.
    assert_eq!(
        quad_uvs(&m, Face::NegY),
        [(0.5, 0.5), (1.0, 0.5), (1.0, 1.0), (0.5, 1.0)]
    );
}

#[test]
fn atlas_miss_never_drops_the_quad() {
    let atlas = TextureAtlas::from_toml_str(
        r#"
        "2_top" = { u_min = 0.0, u_max = 0.5, v_min = 0.0, v_max = 0.5 }
    "#,
    )
    .unwrap();
    let m = single_block(&atlas);
    assert_eq!(m.quad_count(), 6);
    // Everything degraded to the full rectangle.
    assert!(m.uvs.iter().all(|&c| c == 0.0 || c == 1.0));
}

#[test]
fn merged_quads_still_use_the_block_rect() {
    let atlas = TextureAtlas::from_toml_str(
        r#"
        ["1"]
        default = { u_min = 0.0, u_max = 0.5, v_min = 0.0, v_max = 0.5 }
    "#,
    )
    .unwrap();
    let blocks: BlockMap = (0..4).map(|x| ((x, 0, 0), 1u16)).collect();
    let types = vec![BlockType::named(1, "stone")];
    let m = create_mesh_data(&blocks, &atlas, &types, &MesherConfig::default());
    // The merged top quad reuses the same rect corners; no per-cell tiling.
    let mut corners = quad_uvs(&m, Face::PosY).to_vec();
    corners.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(
        corners,
        vec![(0.0, 0.0), (0.0, 0.5), (0.5, 0.0), (0.5, 0.5)]
    );
}
