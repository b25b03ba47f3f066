//! # Showcase Error Types

use std::path::PathBuf;

use curio_assets::AssetError;
use thiserror::Error;

/// Errors that can occur while loading or building a showcase.
#[derive(Error, Debug)]
pub enum ShowcaseError {
    /// Manifest file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not valid TOML or has the wrong shape.
    #[error("invalid manifest: {0}")]
    Parse(#[from] toml::de::Error),

    /// Manifest parsed but is unusable.
    #[error("invalid showcase config: {0}")]
    InvalidConfig(String),

    /// One placement failed to build.
    #[error("asset #{index} ({asset}) failed: {source}")]
    Asset {
        /// Position in the manifest, zero-based.
        index: usize,
        /// Asset name as written in the manifest.
        asset: String,
        /// Build failure.
        #[source]
        source: AssetError,
    },
}

/// Result type for showcase operations.
pub type ShowcaseResult<T> = Result<T, ShowcaseError>;
