use anyhow::{bail, Context, Result};
use glam::{Mat3, Mat4, Vec3};
use std::path::Path;

use crate::math::AABB;
use crate::types::Vertex;

/// One glTF scene flattened to a single indexed triangle mesh.
/// Node transforms are baked into positions and normals.
#[derive(Debug, Clone, Default)]
pub struct MeshAsset {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub bounds: AABB,
}

impl MeshAsset {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Loads a .glb or .gltf file from disk
pub fn load_mesh(path: impl AsRef<Path>) -> Result<MeshAsset> {
    let path = path.as_ref();
    log::info!("Loading glTF file: {:?}", path);

    let (document, buffers, _images) =
        gltf::import(path).with_context(|| format!("Failed to load glTF file: {:?}", path))?;

    build_mesh(&document, &buffers).with_context(|| format!("Invalid glTF file: {:?}", path))
}

/// Loads a glTF asset already held in memory
pub fn load_mesh_from_slice(bytes: &[u8]) -> Result<MeshAsset> {
    let (document, buffers, _images) =
        gltf::import_slice(bytes).context("Failed to parse glTF data")?;

    build_mesh(&document, &buffers)
}

fn build_mesh(document: &gltf::Document, buffers: &[gltf::buffer::Data]) -> Result<MeshAsset> {
    log::debug!(
        "glTF contents: {} scenes, {} nodes, {} meshes",
        document.scenes().count(),
        document.nodes().count(),
        document.meshes().count()
    );

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .context("glTF file contains no scenes")?;

    let mut mesh = MeshAsset::default();
    for node in scene.nodes() {
        process_node(&node, buffers, &Mat4::IDENTITY, &mut mesh)?;
    }

    if mesh.is_empty() {
        bail!("glTF scene {:?} contains no triangle geometry", scene.name());
    }

    mesh.bounds = AABB::from_points(mesh.vertices.iter().map(|v| Vec3::from_array(v.position)))
        .unwrap_or_default();

    log::info!(
        "Extracted {} vertices, {} triangles, bounds center {:?} radius {:.3}",
        mesh.vertices.len(),
        mesh.triangle_count(),
        mesh.bounds.center(),
        mesh.bounds.radius()
    );
    Ok(mesh)
}

fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &Mat4,
    out: &mut MeshAsset,
) -> Result<()> {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        process_mesh(&mesh, buffers, &global_transform, out)?;
    }

    for child in node.children() {
        process_node(&child, buffers, &global_transform, out)?;
    }

    Ok(())
}

fn process_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    transform: &Mat4,
    out: &mut MeshAsset,
) -> Result<()> {
    let normal_matrix = Mat3::from_mat4(*transform).inverse().transpose();
    // Mirroring transforms flip winding
    let flip_winding = transform.determinant() < 0.0;

    for primitive in mesh.primitives() {
        if primitive.mode() != gltf::mesh::Mode::Triangles {
            log::warn!(
                "Skipping {:?} primitive in mesh {:?}",
                primitive.mode(),
                mesh.name()
            );
            continue;
        }

        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions: Vec<Vec3> = reader
            .read_positions()
            .context("Mesh primitive has no positions")?
            .map(|p| transform.transform_point3(Vec3::from_array(p)))
            .collect();

        if positions.is_empty() {
            continue;
        }

        let mut indices: Vec<u32> = match reader.read_indices() {
            Some(indices) => indices.into_u32().collect(),
            None => (0..positions.len() as u32).collect(),
        };
        indices.truncate(indices.len() - indices.len() % 3);

        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
            bail!(
                "Mesh {:?} index {} out of range for {} vertices",
                mesh.name(),
                bad,
                positions.len()
            );
        }

        if flip_winding {
            for tri in indices.chunks_exact_mut(3) {
                tri.swap(1, 2);
            }
        }

        let normals: Vec<Vec3> = match reader.read_normals() {
            Some(normals) => normals
                .map(|n| (normal_matrix * Vec3::from_array(n)).normalize_or_zero())
                .collect(),
            None => compute_normals(&positions, &indices),
        };

        let base_color = primitive
            .material()
            .pbr_metallic_roughness()
            .base_color_factor();
        let colors: Vec<[f32; 4]> = match reader.read_colors(0) {
            Some(colors) => colors
                .into_rgba_f32()
                .map(|c| [
                    c[0] * base_color[0],
                    c[1] * base_color[1],
                    c[2] * base_color[2],
                    c[3] * base_color[3],
                ])
                .collect(),
            None => vec![base_color; positions.len()],
        };

        let base_vertex = out.vertices.len() as u32;
        out.vertices.extend(positions.iter().enumerate().map(|(i, p)| {
            Vertex::new(
                p.to_array(),
                normals.get(i).copied().unwrap_or(Vec3::Y).to_array(),
                colors.get(i).copied().unwrap_or(base_color),
            )
        }));
        out.indices.extend(indices.iter().map(|i| i + base_vertex));
    }

    Ok(())
}

/// Area-weighted vertex normals from triangle faces
pub fn compute_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    normals
        .into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y))
        .collect()
}
