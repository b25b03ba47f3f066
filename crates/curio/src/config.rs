//! # Showcase Manifest
//!
//! TOML description of a scene made of several placed assets. Loaded once at
//! startup; asset definitions themselves stay compiled in.
//!
//! ```toml
//! [showcase]
//! name = "portfolio"
//! workers = 4
//!
//! [[assets]]
//! asset = "house"
//! color = "#4f46e5"
//! position = [0.0, 0.0, 0.0]
//! rotation = [0.0, 0.5, 0.0]
//! label = "home"
//! ```

use std::collections::HashSet;
use std::path::Path;

use curio_shared::{Transform, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{ShowcaseError, ShowcaseResult};

/// Whole manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Scene-wide settings.
    pub showcase: ShowcaseSettings,
    /// Placements, in scene order.
    #[serde(default)]
    pub assets: Vec<Placement>,
}

/// `[showcase]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShowcaseSettings {
    /// Name of the root group.
    pub name: String,
    /// Build threads; defaults to the available parallelism.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
}

/// One `[[assets]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Placement {
    /// Catalog name, e.g. `"house"`.
    pub asset: String,
    /// Accent color token.
    pub color: String,
    /// Offset from the scene origin.
    #[serde(default)]
    pub position: Vec3,
    /// Euler rotation, radians.
    #[serde(default)]
    pub rotation: Vec3,
    /// Name for the placement group; the asset name if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Placement {
    /// Creates an unrotated placement at `position`.
    #[must_use]
    pub fn new(asset: impl Into<String>, color: impl Into<String>, position: Vec3) -> Self {
        Self {
            asset: asset.into(),
            color: color.into(),
            position,
            rotation: Vec3::ZERO,
            label: None,
        }
    }

    /// Sets the group label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Transform of the placement group.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.rotation)
    }

    /// Label, falling back to the asset name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.asset)
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
}

impl ShowcaseConfig {
    /// Creates a manifest with default worker count.
    #[must_use]
    pub fn new(name: impl Into<String>, assets: Vec<Placement>) -> Self {
        Self {
            showcase: ShowcaseSettings { name: name.into(), workers: None },
            assets,
        }
    }

    /// Parses and validates a manifest.
    ///
    /// # Errors
    ///
    /// [`ShowcaseError::Parse`] for malformed TOML, [`ShowcaseError::InvalidConfig`]
    /// if [`ShowcaseConfig::validate`] rejects it.
    pub fn from_toml_str(text: &str) -> ShowcaseResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a manifest file.
    ///
    /// # Errors
    ///
    /// [`ShowcaseError::Io`] if the file cannot be read, otherwise as
    /// [`ShowcaseConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ShowcaseResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ShowcaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            name = %config.showcase.name,
            assets = config.assets.len(),
            "loaded showcase manifest"
        );
        Ok(config)
    }

    /// Structural checks. Asset names and colors are checked at build time,
    /// where the failing placement index can be reported.
    ///
    /// # Errors
    ///
    /// [`ShowcaseError::InvalidConfig`] for an empty name, zero workers, no
    /// assets, or a non-finite position or rotation.
    pub fn validate(&self) -> ShowcaseResult<()> {
        if self.showcase.name.trim().is_empty() {
            return Err(ShowcaseError::InvalidConfig("showcase name is empty".to_string()));
        }
        if self.showcase.workers == Some(0) {
            return Err(ShowcaseError::InvalidConfig("workers must be at least 1".to_string()));
        }
        if self.assets.is_empty() {
            return Err(ShowcaseError::InvalidConfig("no assets to show".to_string()));
        }

        let mut labels = HashSet::new();
        for (index, placement) in self.assets.iter().enumerate() {
            if !placement.position.is_finite() || !placement.rotation.is_finite() {
                return Err(ShowcaseError::InvalidConfig(format!(
                    "asset #{index} ({}) has a non-finite position or rotation",
                    placement.asset
                )));
            }
            if let Some(label) = placement.label.as_deref() {
                if !labels.insert(label) {
                    tracing::warn!(index, label, "duplicate placement label");
                }
            }
        }

        Ok(())
    }

    /// Threads to build with, before capping at the asset count.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.showcase.workers.unwrap_or_else(default_workers).max(1)
    }
}
