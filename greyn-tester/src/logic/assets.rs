use anyhow::{Context, Result};
use greyn_core::{DataLoader, SeedBundle, SeedError, parse_seed};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

/// Reads the seed JSON shipped with the web crate straight from disk.
#[derive(Debug, Clone)]
pub struct AssetLoader {
    root: PathBuf,
}

impl AssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn assets_data_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("greyn-web")
            .join("static")
            .join("assets")
            .join("data")
    }
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new(Self::assets_data_root())
    }
}

impl DataLoader for AssetLoader {
    type Error = SeedError;

    fn load_seed<T>(&self, seed_name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        let path = self.root.join(format!("{seed_name}.json"));
        let json = fs::read_to_string(&path).map_err(|err| {
            log::warn!("cannot read {}: {err}", path.display());
            SeedError::Unknown(seed_name.to_string())
        })?;
        parse_seed(&json)
    }
}

/// Seed data every scenario runs against.
#[derive(Debug, Clone)]
pub struct TesterAssets {
    pub seeds: SeedBundle,
}

impl TesterAssets {
    pub fn load_default() -> Result<Self> {
        Self::load_from(&AssetLoader::default())
    }

    pub fn load_from(loader: &AssetLoader) -> Result<Self> {
        let seeds = SeedBundle::load(loader)
            .with_context(|| format!("loading seeds from {}", loader.root.display()))?;
        Ok(Self { seeds })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_the_shipped_seeds() {
        let assets = TesterAssets::load_default().unwrap();
        assert_eq!(assets.seeds.catalog.len(), 8);
        assert_eq!(assets.seeds.activities.activities.len(), 3);
    }

    #[test]
    fn missing_directory_names_the_seed() {
        let loader = AssetLoader::new(std::env::temp_dir().join("greyn-no-such-assets"));
        let err = TesterAssets::load_from(&loader).unwrap_err();
        assert!(format!("{err:#}").contains("unknown seed: projects"));
    }
}
