//! Mounted asset with a rebuild-on-change lifecycle.
//!
//! An [`AssetInstance`] owns the current tree for one placed asset. Changing
//! the accent builds a brand-new tree and swaps it in only once the build
//! succeeds, so a bad color never leaves the instance half-updated.

use curio_shared::Rgb;

use crate::composers::AssetComposer;
use crate::error::AssetResult;
use crate::registry::{AssetRegistry, AssetType};
use crate::scene::SceneNode;

/// One live asset and its current scene tree.
#[derive(Debug)]
pub struct AssetInstance {
    composer: &'static dyn AssetComposer,
    accent: Rgb,
    scene: SceneNode,
    generation: u64,
}

impl AssetInstance {
    /// Builds the first tree.
    ///
    /// # Errors
    ///
    /// [`crate::AssetError::InvalidColor`] if `accent` does not parse.
    pub fn mount(registry: &AssetRegistry, asset_type: AssetType, accent: &str) -> AssetResult<Self> {
        let composer = registry.composer(asset_type);
        let parsed = Rgb::parse(accent)?;
        let scene = composer.compose(accent)?;

        tracing::debug!(asset = asset_type.name(), accent = %parsed, "mounted asset");

        Ok(Self { composer, accent: parsed, scene, generation: 1 })
    }

    /// Switches to a new accent color.
    ///
    /// Returns `false` without rebuilding if the color is unchanged. On error
    /// the previous tree and color stay in place.
    ///
    /// # Errors
    ///
    /// [`crate::AssetError::InvalidColor`] if `accent` does not parse.
    pub fn recolor(&mut self, accent: &str) -> AssetResult<bool> {
        let parsed = Rgb::parse(accent)?;
        if parsed == self.accent {
            return Ok(false);
        }

        self.scene = self.composer.compose(accent)?;
        self.accent = parsed;
        self.generation += 1;

        tracing::debug!(
            asset = self.asset_type().name(),
            accent = %parsed,
            generation = self.generation,
            "recolored asset"
        );
        Ok(true)
    }

    /// Rebuilds the tree from the same inputs.
    ///
    /// # Errors
    ///
    /// Never fails for a mounted instance; the accent was validated on mount.
    pub fn rebuild(&mut self) -> AssetResult<()> {
        self.scene = self.composer.compose(&self.accent.to_hex())?;
        self.generation += 1;
        Ok(())
    }

    /// Current tree.
    #[must_use]
    pub fn scene(&self) -> &SceneNode {
        &self.scene
    }

    /// Current accent color.
    #[must_use]
    pub fn accent(&self) -> Rgb {
        self.accent
    }

    /// Asset being shown.
    #[must_use]
    pub fn asset_type(&self) -> AssetType {
        self.composer.asset_type()
    }

    /// Successful builds so far, starting at 1 after mount.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Tears the instance down, handing back the last tree.
    #[must_use]
    pub fn unmount(self) -> SceneNode {
        tracing::debug!(asset = self.asset_type().name(), "unmounted asset");
        self.scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetError;

    #[test]
    fn test_mount_and_recolor() {
        let registry = AssetRegistry::global();
        let mut house = AssetInstance::mount(registry, AssetType::House, "#ff0000").unwrap();
        assert_eq!(house.generation(), 1);
        assert_eq!(house.asset_type(), AssetType::House);

        assert!(house.recolor("blue").unwrap());
        assert_eq!(house.accent(), Rgb::from_hex(0x0000ff));
        assert_eq!(house.generation(), 2);

        let body = house.scene().find("body").and_then(SceneNode::as_mesh).unwrap();
        assert_eq!(body.material.base_color, Rgb::from_hex(0x0000ff));
    }

    #[test]
    fn test_recolor_same_color_is_noop() {
        let registry = AssetRegistry::global();
        let mut land = AssetInstance::mount(registry, AssetType::Land, "#00ff00").unwrap();
        assert!(!land.recolor("#0f0").unwrap());
        assert_eq!(land.generation(), 1);
    }

    #[test]
    fn test_failed_recolor_keeps_old_tree() {
        let registry = AssetRegistry::global();
        let mut pad = AssetInstance::mount(registry, AssetType::Gamepad, "#ff0000").unwrap();
        let before = pad.scene().clone();

        let err = pad.recolor("not-a-color").unwrap_err();
        assert!(matches!(err, AssetError::InvalidColor(_)));
        assert_eq!(pad.scene(), &before);
        assert_eq!(pad.accent(), Rgb::from_hex(0xff0000));
        assert_eq!(pad.generation(), 1);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let registry = AssetRegistry::global();
        let mut diploma = AssetInstance::mount(registry, AssetType::Diploma, "gold").unwrap();
        let before = diploma.scene().clone();

        diploma.rebuild().unwrap();
        assert_eq!(diploma.scene(), &before);
        assert_eq!(diploma.generation(), 2);

        let tree = diploma.unmount();
        assert_eq!(tree, before);
    }

    #[test]
    fn test_mount_rejects_bad_color() {
        let registry = AssetRegistry::global();
        assert!(AssetInstance::mount(registry, AssetType::Creative, "").is_err());
    }
}
