//! Loading and saving shader parameter manifests.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use oslkey_core::{KeyResult, ShaderParams, ShaderSource};

/// Parsed introspection dump: shader name mapped to its declared parameter
/// names, in declaration order.
///
/// Shader iteration order is sorted by name, so scan output and the written
/// manifest are deterministic. Parameter order is taken from the JSON
/// arrays untouched.
#[derive(Debug)]
pub struct JsonManifest {
    shaders: BTreeMap<String, Vec<String>>,
}

impl JsonManifest {
    /// Load a manifest from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        let shaders = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))?;
        Ok(Self { shaders })
    }

    /// Number of shaders in the manifest.
    pub fn shader_count(&self) -> usize {
        self.shaders.len()
    }
}

impl ShaderSource for JsonManifest {
    fn shaders(&mut self) -> KeyResult<Vec<ShaderParams>> {
        Ok(self
            .shaders
            .iter()
            .map(|(name, params)| ShaderParams::new(name.clone(), params.clone()))
            .collect())
    }
}

/// Write the expanded shader manifest as pretty-printed JSON.
pub fn save(path: &Path, manifest: &BTreeMap<String, Vec<String>>) -> Result<()> {
    let json =
        serde_json::to_string_pretty(manifest).context("Failed to serialize manifest")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
    Ok(())
}
