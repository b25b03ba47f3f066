//! Material definitions and the per-build material cache.
//!
//! A composer asks the cache for every material it needs. Field-wise equal
//! requests inside one build come back as the same shared handle, the same
//! deduplication a chunk palette does for material ids.
//!
//! The cache lives for exactly one build. Nothing is global, so a recolored
//! asset can never be served a material from its previous color.

use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use curio_shared::Rgb;

use crate::error::{AssetError, AssetResult};

/// Appearance parameters for one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialSpec {
    /// Albedo.
    pub base_color: Rgb,
    /// Microfacet roughness, `[0, 1]`.
    pub roughness: f32,
    /// Emitted light color, if any.
    pub emissive: Option<Rgb>,
    /// Emission strength, `[0, 1]`.
    pub emissive_intensity: f32,
    /// Surface opacity, `[0, 1]`. Below 1 the renderer must blend.
    pub opacity: f32,
}

impl MaterialSpec {
    /// Creates an opaque, non-emissive material.
    #[must_use]
    pub const fn solid(base_color: Rgb, roughness: f32) -> Self {
        Self {
            base_color,
            roughness,
            emissive: None,
            emissive_intensity: 0.0,
            opacity: 1.0,
        }
    }

    /// Adds emission.
    #[must_use]
    pub const fn with_emissive(mut self, color: Rgb, intensity: f32) -> Self {
        self.emissive = Some(color);
        self.emissive_intensity = intensity;
        self
    }

    /// Makes the surface translucent.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// True if the surface emits light.
    #[must_use]
    pub fn is_emissive(&self) -> bool {
        self.emissive.is_some() && self.emissive_intensity > 0.0
    }

    /// True if the renderer must blend this surface.
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }

    /// Checks every scalar lies in `[0, 1]` and normalizes `-0.0`.
    ///
    /// # Errors
    ///
    /// [`AssetError::InvalidMaterial`] naming the first non-finite or
    /// out-of-range field.
    pub fn validated(self) -> AssetResult<Self> {
        Ok(Self {
            base_color: self.base_color,
            roughness: unit("roughness", self.roughness)?,
            emissive: self.emissive,
            emissive_intensity: unit("emissive_intensity", self.emissive_intensity)?,
            opacity: unit("opacity", self.opacity)?,
        })
    }

    fn key(&self) -> MaterialKey {
        MaterialKey {
            base_color: self.base_color,
            roughness: self.roughness.to_bits(),
            emissive: self.emissive,
            emissive_intensity: self.emissive_intensity.to_bits(),
            opacity: self.opacity.to_bits(),
        }
    }
}

fn unit(field: &'static str, value: f32) -> AssetResult<f32> {
    // NaN fails the range check too
    if (0.0..=1.0).contains(&value) {
        // + 0.0 turns -0.0 into 0.0 so equal values share one key
        Ok(value + 0.0)
    } else {
        Err(AssetError::InvalidMaterial { field, value })
    }
}

/// Exact field tuple; floats compared by bit pattern after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MaterialKey {
    base_color: Rgb,
    roughness: u32,
    emissive: Option<Rgb>,
    emissive_intensity: u32,
    opacity: u32,
}

/// Shared, immutable reference to a cached material.
///
/// Equality compares the referenced specs by value, so trees built by two
/// different caches still compare equal. Use [`MaterialHandle::ptr_eq`] to
/// check instance sharing.
#[derive(Clone)]
pub struct MaterialHandle(Arc<MaterialSpec>);

impl MaterialHandle {
    /// Wraps a spec without going through a cache.
    ///
    /// # Errors
    ///
    /// Same as [`MaterialSpec::validated`].
    pub fn new(spec: MaterialSpec) -> AssetResult<Self> {
        Ok(Self(Arc::new(spec.validated()?)))
    }

    /// True if both handles point at the same cached instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for MaterialHandle {
    type Target = MaterialSpec;

    fn deref(&self) -> &MaterialSpec {
        &self.0
    }
}

impl PartialEq for MaterialHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0 == *other.0
    }
}

impl fmt::Debug for MaterialHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MaterialHandle").field(&*self.0).finish()
    }
}

/// Per-build material deduplication.
#[derive(Debug, Default)]
pub struct MaterialCache {
    entries: HashMap<MaterialKey, MaterialHandle>,
    hits: u32,
    misses: u32,
}

impl MaterialCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle for `spec`, creating it on first request.
    ///
    /// # Errors
    ///
    /// [`AssetError::InvalidMaterial`] if `spec` fails validation. Nothing is
    /// cached and the counters are left alone.
    pub fn get_or_create(&mut self, spec: MaterialSpec) -> AssetResult<MaterialHandle> {
        let spec = spec.validated()?;
        let key = spec.key();

        if let Some(handle) = self.entries.get(&key) {
            self.hits += 1;
            tracing::trace!(color = %spec.base_color, "material cache hit");
            return Ok(handle.clone());
        }

        self.misses += 1;
        tracing::trace!(color = %spec.base_color, "material cache miss");
        let handle = MaterialHandle(Arc::new(spec));
        self.entries.insert(key, handle.clone());
        Ok(handle)
    }

    /// Number of distinct materials created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was requested yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Requests served from an existing entry.
    #[must_use]
    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// Requests that created a new entry.
    #[must_use]
    pub fn misses(&self) -> u32 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = Rgb::from_hex(0x111111);

    #[test]
    fn test_cache_deduplication() {
        let mut cache = MaterialCache::new();

        let a = cache.get_or_create(MaterialSpec::solid(BLACK, 0.8)).unwrap();
        let b = cache.get_or_create(MaterialSpec::solid(BLACK, 0.8)).unwrap();

        // Same spec should get the same instance
        assert!(a.ptr_eq(&b));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_cache_never_aliases_different_specs() {
        let mut cache = MaterialCache::new();

        let matte = cache.get_or_create(MaterialSpec::solid(BLACK, 0.8)).unwrap();
        let glossy = cache.get_or_create(MaterialSpec::solid(BLACK, 0.2)).unwrap();
        let glowing = cache
            .get_or_create(MaterialSpec::solid(BLACK, 0.8).with_emissive(BLACK, 0.5))
            .unwrap();

        assert!(!matte.ptr_eq(&glossy));
        assert!(!matte.ptr_eq(&glowing));
        assert_eq!(matte.roughness, 0.8);
        assert_eq!(glossy.roughness, 0.2);
        assert!(glowing.is_emissive());
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_out_of_range_scalars_rejected() {
        let mut cache = MaterialCache::new();
        let edge = cache.get_or_create(MaterialSpec::solid(BLACK, 1.0)).unwrap();

        let rough = cache.get_or_create(MaterialSpec::solid(BLACK, 4.0));
        assert_eq!(
            rough.unwrap_err(),
            AssetError::InvalidMaterial { field: "roughness", value: 4.0 }
        );

        // NaN never equals itself, so match on the field only
        let nan = cache.get_or_create(MaterialSpec::solid(BLACK, f32::NAN));
        assert!(matches!(nan, Err(AssetError::InvalidMaterial { field: "roughness", .. })));

        let faded = cache.get_or_create(MaterialSpec::solid(BLACK, 0.5).with_opacity(-1.0));
        assert!(matches!(faded, Err(AssetError::InvalidMaterial { field: "opacity", .. })));

        let blinding = MaterialHandle::new(MaterialSpec::solid(BLACK, 0.5).with_emissive(BLACK, f32::INFINITY));
        assert!(matches!(
            blinding,
            Err(AssetError::InvalidMaterial { field: "emissive_intensity", .. })
        ));

        // Rejected requests leave the cache untouched
        assert_eq!(edge.roughness, 1.0);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 0);
    }

    #[test]
    fn test_negative_zero_shares_entry() {
        let mut cache = MaterialCache::new();

        let pos = cache.get_or_create(MaterialSpec::solid(BLACK, 0.0)).unwrap();
        let neg = cache.get_or_create(MaterialSpec::solid(BLACK, -0.0)).unwrap();
        assert!(pos.ptr_eq(&neg));
        assert!(neg.roughness.is_sign_positive());

        let clear = cache.get_or_create(MaterialSpec::solid(BLACK, 0.5).with_opacity(0.0)).unwrap();
        assert!(clear.is_transparent());
    }

    #[test]
    fn test_handles_compare_by_value_across_caches() {
        let spec = MaterialSpec::solid(BLACK, 0.5);
        let a = MaterialCache::new().get_or_create(spec).unwrap();
        let b = MaterialCache::new().get_or_create(spec).unwrap();

        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert_eq!(a, MaterialHandle::new(spec).unwrap());
    }
}
