pub mod cache;
pub mod gltf;

pub use self::cache::{resolve_asset_path, AssetCache};
pub use self::gltf::{compute_normals, load_mesh, load_mesh_from_slice, MeshAsset};
