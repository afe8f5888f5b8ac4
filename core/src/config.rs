//! World and server configuration.
//!
//! One JSON file describes a deployment; every field has a default so a
//! bare `world-server` starts a usable world. Command-line flags in the
//! server binary override individual fields after loading.

use crate::mapgen::TerrainProfile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Address the TCP listener binds to.
    pub bind_addr:        String,
    pub grid_width:       i32,
    pub grid_height:      i32,
    /// Master seed; every RNG stream in the world derives from it.
    pub master_seed:      u64,
    /// Dragons seeded into lairs at world build.
    pub initial_dragons:  u32,
    /// World clock period. Zero disables the ticker thread.
    pub tick_interval_ms: u64,
    pub terrain:          TerrainProfile,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            bind_addr:        "127.0.0.1:4711".to_string(),
            grid_width:       32,
            grid_height:      32,
            master_seed:      42,
            initial_dragons:  4,
            tick_interval_ms: 500,
            terrain:          TerrainProfile::default(),
        }
    }
}

impl WorldConfig {
    /// Load from a JSON file. Missing fields fall back to defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: WorldConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}
