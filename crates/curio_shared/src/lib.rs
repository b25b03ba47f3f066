//! # CURIO Shared
//!
//! Common types used by the asset composers, the showcase layer and any
//! renderer adapter that consumes the scene graph.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - `wgpu`
//! - Any GPU or window-related crate
//!
//! Tessellation and shading live in the renderer, not here.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod color;
pub mod math;

pub use color::{ColorError, Rgb};
pub use math::{Mat4, Transform, Vec3};
