use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::gltf::{load_mesh, MeshAsset};

/// Resolve an asset URL against the static asset root.
/// A leading `/` means "from the root", as on a web server.
pub fn resolve_asset_path(root: impl AsRef<Path>, url: &str) -> PathBuf {
    let relative = url.trim_start_matches('/');
    root.as_ref().join(relative)
}

/// Parsed meshes keyed by resolved path; each file is parsed at most once
#[derive(Debug, Default)]
pub struct AssetCache {
    root: PathBuf,
    entries: HashMap<PathBuf, Arc<MeshAsset>>,
}

impl AssetCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Return the cached mesh for `url`, loading it on first use
    pub fn load(&mut self, url: &str) -> Result<Arc<MeshAsset>> {
        let path = resolve_asset_path(&self.root, url);
        if let Some(asset) = self.entries.get(&path) {
            log::debug!("Asset cache hit: {:?}", path);
            return Ok(Arc::clone(asset));
        }

        let asset = Arc::new(load_mesh(&path)?);
        self.entries.insert(path, Arc::clone(&asset));
        Ok(asset)
    }

    /// Register an already-parsed mesh under `url`
    pub fn insert(&mut self, url: &str, asset: MeshAsset) -> Arc<MeshAsset> {
        let asset = Arc::new(asset);
        self.entries
            .insert(resolve_asset_path(&self.root, url), Arc::clone(&asset));
        asset
    }

    pub fn get(&self, url: &str) -> Option<Arc<MeshAsset>> {
        self.entries.get(&resolve_asset_path(&self.root, url)).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
