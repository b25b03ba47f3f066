//! # Asset Error Types
//!
//! All errors that can occur while composing an asset. Every variant is a
//! caller-side validation failure; none of them are worth retrying.

use curio_shared::ColorError;
use thiserror::Error;

/// Errors that can occur in the asset system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    /// A primitive received a non-positive or non-finite size, or too few segments.
    #[error("invalid dimension for {primitive}: {field} = {value}")]
    InvalidDimension {
        /// Primitive being constructed.
        primitive: &'static str,
        /// Offending parameter.
        field: &'static str,
        /// Value that was rejected.
        value: f32,
    },

    /// A material scalar was non-finite or outside `[0, 1]`.
    #[error("invalid material: {field} = {value}")]
    InvalidMaterial {
        /// Offending parameter.
        field: &'static str,
        /// Value that was rejected.
        value: f32,
    },

    /// The accent color could not be parsed.
    #[error("invalid accent color: {0}")]
    InvalidColor(#[from] ColorError),

    /// Registry lookup for a name outside the catalog.
    #[error("unknown asset type: {0:?}")]
    UnknownAssetType(String),
}

/// Result type for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;
