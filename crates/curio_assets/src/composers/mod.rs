//! # Asset Composers
//!
//! One pure builder per catalog asset: accent color in, scene tree out.
//!
//! Every composer follows the same steps:
//! 1. parse the accent color, failing before anything is built
//! 2. create a per-build [`MaterialCache`]
//! 3. assemble a fixed layout of primitives (positions never depend on color)
//! 4. return the root group
//!
//! Adding an asset:
//! - add a module here with a unit struct implementing [`AssetComposer`]
//! - add a variant to [`AssetType`]
//! - wire both together in the registry match

mod creative;
mod diploma;
mod gamepad;
mod house;
mod land;

use std::fmt;

use curio_shared::Rgb;

use crate::error::AssetResult;
use crate::material::MaterialCache;
use crate::registry::AssetType;
use crate::scene::SceneNode;

pub use creative::CreativeComposer;
pub use diploma::DiplomaComposer;
pub use gamepad::GamepadComposer;
pub use house::HouseComposer;
pub use land::LandComposer;

/// Builder for one asset type.
pub trait AssetComposer: Send + Sync + fmt::Debug {
    /// Catalog entry this composer builds.
    fn asset_type(&self) -> AssetType;

    /// Lays out the parts for an already-validated accent.
    ///
    /// # Errors
    ///
    /// Only if a layout constant is an invalid dimension, which the composer
    /// tests rule out.
    fn assemble(&self, accent: Rgb, materials: &mut MaterialCache) -> AssetResult<SceneNode>;

    /// Builds the asset for `accent`.
    ///
    /// # Errors
    ///
    /// [`crate::AssetError::InvalidColor`] if `accent` does not parse.
    fn compose(&self, accent: &str) -> AssetResult<SceneNode> {
        let accent = Rgb::parse(accent)?;
        let mut materials = MaterialCache::new();
        let root = self.assemble(accent, &mut materials)?;

        tracing::debug!(
            asset = self.asset_type().name(),
            %accent,
            meshes = root.mesh_count(),
            materials = materials.len(),
            cache_hits = materials.hits(),
            "composed asset"
        );

        Ok(root)
    }
}
