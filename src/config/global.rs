// ~/.config/delprompt/config.toml
// ref: toml crate — https://docs.rs/toml/

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::anchor::CellMetrics;
use crate::messages::Catalog;
use crate::model::asset::AssetLibrary;
use crate::model::prompt::{Direction, EntityType, Side};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub direction: Direction,
    /// left | right | unspecified
    #[serde(default = "default_side")]
    pub side: Side,
    #[serde(default)]
    pub metrics: CellMetrics,
    /// message id -> display text
    #[serde(default)]
    pub messages: HashMap<String, String>,
    #[serde(default)]
    pub assets: Vec<AssetEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetEntry {
    pub name: String,
    /// SPRITE | COSTUME | SOUND
    #[serde(default)]
    pub kind: String,
}

// Triggers sit at the right edge of the list, so the popup opens towards the list.
fn default_side() -> Side {
    Side::Left
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            side: default_side(),
            metrics: CellMetrics::default(),
            messages: HashMap::new(),
            assets: Vec::new(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("delprompt").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path().context("no config dir")?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(text)?;
        config.metrics = config.metrics.sanitized();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().context("no config dir")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::with_overrides(&self.messages)
    }

    /// Configured assets, or the demo set when none are listed.
    pub fn library(&self) -> AssetLibrary {
        if self.assets.is_empty() {
            return AssetLibrary::demo();
        }
        AssetLibrary::new(
            self.assets
                .iter()
                .map(|e| (e.name.clone(), EntityType::from_tag_lossy(&e.kind))),
        )
    }
}
