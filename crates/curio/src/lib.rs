//! # CURIO
//!
//! Manifest-driven showcase of the procedural asset catalog.
//!
//! ## Crate Structure
//!
//! - `curio_shared` - math and color (re-exported as [`shared`])
//! - `curio_assets` - composers, registry, scene graph (re-exported as [`assets`])
//! - this crate - manifest loading, parallel showcase build, logging setup
//!
//! ## Example
//!
//! ```no_run
//! use curio::{build_showcase, AssetRegistry, ShowcaseConfig};
//!
//! let config = ShowcaseConfig::load("showcase.toml")?;
//! let showcase = build_showcase(&config, AssetRegistry::global())?;
//! println!("{} meshes", showcase.stats.meshes);
//! # Ok::<(), curio::ShowcaseError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod logging;
pub mod showcase;

pub use curio_assets as assets;
pub use curio_shared as shared;

pub use config::{Placement, ShowcaseConfig, ShowcaseSettings};
pub use curio_assets::{AssetRegistry, AssetType, SceneNode};
pub use error::{ShowcaseError, ShowcaseResult};
pub use logging::{init_logging, LoggingConfig};
pub use showcase::{build_showcase, render_tree, BuildReport, Showcase, TreeOutline};
