//! Primitive Library - parametric shape descriptors.
//!
//! Every constructor validates its inputs and returns an immutable
//! [`PrimitiveSpec`]. Tessellation into vertices is the renderer's job; these
//! values only describe *what* to tessellate.
//!
//! Parameter conventions follow the common real-time engine layouts: cylinders
//! and cones stand on the Y axis centered at the origin, planes face +Z, and
//! sphere angles are in radians (`phi` sweeps around Y, `theta` from the top pole).

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::error::{AssetError, AssetResult};

/// Minimum segment count for any curved primitive.
pub const MIN_SEGMENTS: u32 = 3;

/// Shape tag without dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Axis-aligned box.
    Box,
    /// Cylinder (possibly tapered).
    Cylinder,
    /// Cone with apex at +Y.
    Cone,
    /// Sphere or sphere section.
    Sphere,
    /// Flat rectangle.
    Plane,
}

impl PrimitiveKind {
    /// Lowercase name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Cylinder => "cylinder",
            Self::Cone => "cone",
            Self::Sphere => "sphere",
            Self::Plane => "plane",
        }
    }
}

/// Parametric description of one basic shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveSpec {
    /// Box centered at the origin.
    Box {
        /// Size along X.
        width: f32,
        /// Size along Y.
        height: f32,
        /// Size along Z.
        depth: f32,
    },
    /// Cylinder along Y.
    Cylinder {
        /// Radius of the +Y cap.
        radius_top: f32,
        /// Radius of the -Y cap.
        radius_bottom: f32,
        /// Size along Y.
        height: f32,
        /// Facets around the axis.
        radial_segments: u32,
    },
    /// Cone along Y.
    Cone {
        /// Base radius.
        radius: f32,
        /// Size along Y.
        height: f32,
        /// Facets around the axis; 4 gives a pyramid.
        radial_segments: u32,
    },
    /// Sphere section.
    Sphere {
        /// Radius.
        radius: f32,
        /// Horizontal segments.
        width_segments: u32,
        /// Vertical segments.
        height_segments: u32,
        /// Horizontal start angle.
        phi_start: f32,
        /// Horizontal sweep.
        phi_length: f32,
        /// Vertical start angle, from the top pole.
        theta_start: f32,
        /// Vertical sweep.
        theta_length: f32,
    },
    /// Rectangle in the XY plane facing +Z.
    Plane {
        /// Size along X.
        width: f32,
        /// Size along Y.
        height: f32,
    },
}

fn positive(primitive: &'static str, field: &'static str, value: f32) -> AssetResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AssetError::InvalidDimension { primitive, field, value })
    }
}

fn finite(primitive: &'static str, field: &'static str, value: f32) -> AssetResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AssetError::InvalidDimension { primitive, field, value })
    }
}

#[allow(clippy::cast_precision_loss)]
fn segments(primitive: &'static str, field: &'static str, value: u32) -> AssetResult<()> {
    if value >= MIN_SEGMENTS {
        Ok(())
    } else {
        Err(AssetError::InvalidDimension { primitive, field, value: value as f32 })
    }
}

impl PrimitiveSpec {
    /// Shape tag.
    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Box { .. } => PrimitiveKind::Box,
            Self::Cylinder { .. } => PrimitiveKind::Cylinder,
            Self::Cone { .. } => PrimitiveKind::Cone,
            Self::Sphere { .. } => PrimitiveKind::Sphere,
            Self::Plane { .. } => PrimitiveKind::Plane,
        }
    }

    /// Checks every dimension.
    ///
    /// # Errors
    ///
    /// [`AssetError::InvalidDimension`] naming the first offending field.
    pub fn validate(&self) -> AssetResult<()> {
        let name = self.kind().name();
        match *self {
            Self::Box { width, height, depth } => {
                positive(name, "width", width)?;
                positive(name, "height", height)?;
                positive(name, "depth", depth)
            }
            Self::Cylinder { radius_top, radius_bottom, height, radial_segments } => {
                positive(name, "radius_top", radius_top)?;
                positive(name, "radius_bottom", radius_bottom)?;
                positive(name, "height", height)?;
                segments(name, "radial_segments", radial_segments)
            }
            Self::Cone { radius, height, radial_segments } => {
                positive(name, "radius", radius)?;
                positive(name, "height", height)?;
                segments(name, "radial_segments", radial_segments)
            }
            Self::Sphere {
                radius,
                width_segments,
                height_segments,
                phi_start,
                phi_length,
                theta_start,
                theta_length,
            } => {
                positive(name, "radius", radius)?;
                segments(name, "width_segments", width_segments)?;
                segments(name, "height_segments", height_segments)?;
                finite(name, "phi_start", phi_start)?;
                positive(name, "phi_length", phi_length)?;
                finite(name, "theta_start", theta_start)?;
                if theta_start < 0.0 {
                    return Err(AssetError::InvalidDimension {
                        primitive: name,
                        field: "theta_start",
                        value: theta_start,
                    });
                }
                positive(name, "theta_length", theta_length)
            }
            Self::Plane { width, height } => {
                positive(name, "width", width)?;
                positive(name, "height", height)
            }
        }
    }

    fn checked(self) -> AssetResult<Self> {
        self.validate()?;
        Ok(self)
    }
}

/// Creates a box.
///
/// # Errors
///
/// [`AssetError::InvalidDimension`] if any size is not strictly positive.
pub fn make_box(width: f32, height: f32, depth: f32) -> AssetResult<PrimitiveSpec> {
    PrimitiveSpec::Box { width, height, depth }.checked()
}

/// Creates a cylinder.
///
/// # Errors
///
/// [`AssetError::InvalidDimension`] for non-positive sizes or fewer than 3 segments.
pub fn make_cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
) -> AssetResult<PrimitiveSpec> {
    PrimitiveSpec::Cylinder { radius_top, radius_bottom, height, radial_segments }.checked()
}

/// Creates a cone.
///
/// # Errors
///
/// [`AssetError::InvalidDimension`] for non-positive sizes or fewer than 3 segments.
pub fn make_cone(radius: f32, height: f32, radial_segments: u32) -> AssetResult<PrimitiveSpec> {
    PrimitiveSpec::Cone { radius, height, radial_segments }.checked()
}

/// Creates a sphere section.
///
/// # Errors
///
/// [`AssetError::InvalidDimension`] for a non-positive radius or sweep, a
/// negative `theta_start`, or fewer than 3 segments in either direction.
pub fn make_sphere(
    radius: f32,
    width_segments: u32,
    height_segments: u32,
    phi_start: f32,
    phi_length: f32,
    theta_start: f32,
    theta_length: f32,
) -> AssetResult<PrimitiveSpec> {
    PrimitiveSpec::Sphere {
        radius,
        width_segments,
        height_segments,
        phi_start,
        phi_length,
        theta_start,
        theta_length,
    }
    .checked()
}

/// Full sphere.
///
/// # Errors
///
/// Same as [`make_sphere`].
pub fn make_full_sphere(radius: f32, segments: u32) -> AssetResult<PrimitiveSpec> {
    make_sphere(radius, segments, segments, 0.0, TAU, 0.0, std::f32::consts::PI)
}

/// Upper hemisphere, flat side down.
///
/// # Errors
///
/// Same as [`make_sphere`].
pub fn make_hemisphere(radius: f32, segments: u32) -> AssetResult<PrimitiveSpec> {
    make_sphere(radius, segments, segments, 0.0, TAU, 0.0, FRAC_PI_2)
}

/// Creates a plane.
///
/// # Errors
///
/// [`AssetError::InvalidDimension`] if either size is not strictly positive.
pub fn make_plane(width: f32, height: f32) -> AssetResult<PrimitiveSpec> {
    PrimitiveSpec::Plane { width, height }.checked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_rejects_zero() {
        let err = make_box(0.0, 1.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            AssetError::InvalidDimension { primitive: "box", field: "width", value: 0.0 }
        );
    }

    #[test]
    fn test_negative_and_nan_rejected() {
        assert!(make_plane(1.0, -2.0).is_err());
        assert!(make_cone(f32::NAN, 1.0, 8).is_err());
        assert!(make_cylinder(0.5, 0.5, f32::INFINITY, 8).is_err());
    }

    #[test]
    fn test_segment_floor() {
        assert!(make_cone(1.0, 1.0, 2).is_err());
        assert!(make_cone(1.0, 1.0, 3).is_ok());
        // Four segments is the pyramid case
        assert!(make_cone(1.0, 1.0, 4).is_ok());
        let err = make_cylinder(1.0, 1.0, 1.0, 0).unwrap_err();
        assert!(matches!(err, AssetError::InvalidDimension { field: "radial_segments", .. }));
    }

    #[test]
    fn test_sphere_angles() {
        assert!(make_hemisphere(0.2, 16).is_ok());
        assert!(make_full_sphere(0.2, 8).is_ok());
        assert!(make_sphere(1.0, 8, 8, 0.0, 0.0, 0.0, 1.0).is_err());
        assert!(make_sphere(1.0, 8, 8, -1.0, 1.0, 0.0, 1.0).is_ok());
        assert!(make_sphere(1.0, 8, 8, 0.0, 1.0, -0.1, 1.0).is_err());
        assert!(make_sphere(1.0, 8, 2, 0.0, 1.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_kind_and_validate() {
        let cone = make_cone(1.6, 1.0, 4).unwrap();
        assert_eq!(cone.kind(), PrimitiveKind::Cone);
        assert_eq!(cone.kind().name(), "cone");
        assert!(cone.validate().is_ok());

        let raw = PrimitiveSpec::Plane { width: 1.0, height: 0.0 };
        assert!(raw.validate().is_err());
    }
}
