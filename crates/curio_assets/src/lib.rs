//! # CURIO Assets
//!
//! Procedural asset composition: turns an asset name and an accent color into
//! an immutable scene tree of parametric primitives.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  "house", "#4f46e5"                                      │
//! │        ↓                                                 │
//! │  AssetRegistry::resolve → AssetComposer::compose         │
//! │        ↓                        ↓                        │
//! │  Rgb::parse (fail fast)    MaterialCache (per build)     │
//! │        ↓                        ↓                        │
//! │  SceneNode tree ──→ flatten() ──→ DrawItem list          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//!
//! - Same inputs produce deep-equal trees
//! - No partially built tree is ever returned
//! - Trees are `Send + Sync` and owned outright; rebuild instead of patching

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod composers;
pub mod error;
pub mod instance;
pub mod material;
pub mod palette;
pub mod primitive;
pub mod registry;
pub mod scene;

pub use composers::AssetComposer;
pub use error::{AssetError, AssetResult};
pub use instance::AssetInstance;
pub use material::{MaterialCache, MaterialHandle, MaterialSpec};
pub use primitive::{
    make_box, make_cone, make_cylinder, make_full_sphere, make_hemisphere, make_plane, make_sphere,
    PrimitiveKind, PrimitiveSpec,
};
pub use registry::{AssetRegistry, AssetType};
pub use scene::{DrawItem, GroupNode, MeshNode, SceneNode, SceneStats};

pub use curio_shared::{ColorError, Mat4, Rgb, Transform, Vec3};
