//! # Asset Registry
//!
//! Maps the closed catalog of asset types to their composers.
//!
//! The mapping is an exhaustive `match`, so adding an [`AssetType`] variant
//! without a composer is a compile error rather than a runtime miss. Name
//! lookup goes through [`AssetType`]'s `FromStr`, so the catalog is spelled out
//! exactly once. The registry holds no state and is free to share across
//! threads.

use std::fmt;
use std::str::FromStr;

use crate::composers::{
    AssetComposer, CreativeComposer, DiplomaComposer, GamepadComposer, HouseComposer, LandComposer,
};
use crate::error::{AssetError, AssetResult};
use crate::scene::SceneNode;

/// Catalog of buildable assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetType {
    /// Small house.
    House,
    /// Fenced land plot.
    Land,
    /// Handheld gamepad.
    Gamepad,
    /// Graduation cap and scroll.
    Diploma,
    /// Painter's palette.
    Creative,
}

impl AssetType {
    /// Size of the catalog.
    pub const COUNT: usize = 5;

    /// Every asset type, in catalog order.
    pub const ALL: [Self; Self::COUNT] = [Self::House, Self::Land, Self::Gamepad, Self::Diploma, Self::Creative];

    /// Lowercase identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::House => "house",
            Self::Land => "land",
            Self::Gamepad => "gamepad",
            Self::Diploma => "diploma",
            Self::Creative => "creative",
        }
    }

    fn composer(self) -> &'static dyn AssetComposer {
        match self {
            Self::House => &HouseComposer,
            Self::Land => &LandComposer,
            Self::Gamepad => &GamepadComposer,
            Self::Diploma => &DiplomaComposer,
            Self::Creative => &CreativeComposer,
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssetType {
    type Err = AssetError;

    /// Case-insensitive; surrounding whitespace ignored.
    fn from_str(s: &str) -> AssetResult<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AssetError::UnknownAssetType(s.to_string()))
    }
}

/// Asset type to composer mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetRegistry;

static REGISTRY: AssetRegistry = AssetRegistry::new();

impl AssetRegistry {
    /// Builds the full catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Shared process-wide registry.
    #[must_use]
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// Looks up a composer by asset name (case-insensitive).
    ///
    /// # Errors
    ///
    /// [`AssetError::UnknownAssetType`] for anything outside the catalog.
    pub fn resolve(&self, name: &str) -> AssetResult<&'static dyn AssetComposer> {
        let asset_type = name.parse::<AssetType>().map_err(|err| {
            tracing::debug!(name, "unknown asset type");
            err
        })?;
        Ok(asset_type.composer())
    }

    /// Composer for a known asset type.
    #[must_use]
    pub fn composer(&self, asset_type: AssetType) -> &'static dyn AssetComposer {
        asset_type.composer()
    }

    /// Resolves `name` and composes it with `accent`.
    ///
    /// # Errors
    ///
    /// [`AssetError::UnknownAssetType`] or [`AssetError::InvalidColor`].
    pub fn build(&self, name: &str, accent: &str) -> AssetResult<SceneNode> {
        self.resolve(name)?.compose(accent)
    }

    /// Composes a known asset type with `accent`.
    ///
    /// # Errors
    ///
    /// [`AssetError::InvalidColor`] if `accent` does not parse.
    pub fn build_type(&self, asset_type: AssetType, accent: &str) -> AssetResult<SceneNode> {
        self.composer(asset_type).compose(accent)
    }

    /// Catalog, in declaration order.
    pub fn asset_types(&self) -> impl Iterator<Item = AssetType> {
        AssetType::ALL.into_iter()
    }

    /// Number of registered asset types.
    #[must_use]
    pub fn len(&self) -> usize {
        AssetType::COUNT
    }

    /// Always false; the catalog is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        AssetType::COUNT == 0
    }
}
