//! Mathematical types shared between composers and renderers.
//!
//! Conventions:
//! - right-handed, +Y up
//! - Euler rotations are radians, applied in XYZ order (`Rx · Ry · Rz`)
//! - matrices are column-major

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 3D Vector - position, Euler angles, direction
///
/// Serialized as a `[x, y, z]` array so manifests stay compact.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Creates a new Vec3
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit X vector
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates from array
    #[must_use]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Mirrors across the YZ plane (negates X).
    #[must_use]
    pub const fn mirror_x(self) -> Self {
        Self::new(-self.x, self.y, self.z)
    }

    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Length squared (avoids sqrt)
    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// True if every component is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(arr: [f32; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// 4x4 matrix, column-major.
///
/// `cols[c][r]` is row `r` of column `c`, the layout GPU uniform buffers expect.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    /// Columns
    pub cols: [[f32; 4]; 4],
}

impl Mat4 {
    /// Identity matrix
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Pure translation.
    #[must_use]
    pub const fn from_translation(t: Vec3) -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [t.x, t.y, t.z, 1.0],
            ],
        }
    }

    /// Rotation from XYZ Euler angles (radians): `Rx · Ry · Rz`.
    #[must_use]
    pub fn from_euler_xyz(angles: Vec3) -> Self {
        let (b, a) = angles.x.sin_cos();
        let (d, c) = angles.y.sin_cos();
        let (f, e) = angles.z.sin_cos();

        let ae = a * e;
        let af = a * f;
        let be = b * e;
        let bf = b * f;

        Self {
            cols: [
                [c * e, af + be * d, bf - ae * d, 0.0],
                [-c * f, ae - bf * d, be + af * d, 0.0],
                [d, -b * c, a * c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Returns the translation column.
    #[must_use]
    pub const fn translation(&self) -> Vec3 {
        Vec3::new(self.cols[3][0], self.cols[3][1], self.cols[3][2])
    }

    /// Transforms a point (w = 1).
    #[must_use]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let c = &self.cols;
        Vec3::new(
            c[0][0] * p.x + c[1][0] * p.y + c[2][0] * p.z + c[3][0],
            c[0][1] * p.x + c[1][1] * p.y + c[2][1] * p.z + c[3][1],
            c[0][2] * p.x + c[1][2] * p.y + c[2][2] * p.z + c[3][2],
        )
    }

    /// Component-wise comparison within `eps`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        self.cols
            .iter()
            .flatten()
            .zip(other.cols.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let mut out = [[0.0f32; 4]; 4];
        for (col, out_col) in out.iter_mut().enumerate() {
            for (row, cell) in out_col.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.cols[k][row] * rhs.cols[col][k]).sum();
            }
        }
        Self { cols: out }
    }
}

/// Transform - position + Euler rotation
///
/// No scale: composers size parts through primitive dimensions instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position relative to the parent
    pub position: Vec3,
    /// Euler rotation (XYZ order, radians)
    pub rotation: Vec3,
}

impl Transform {
    /// Creates a new transform
    #[must_use]
    pub const fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    /// Identity transform
    pub const IDENTITY: Self = Self::new(Vec3::ZERO, Vec3::ZERO);

    /// Translation only.
    #[must_use]
    pub const fn at(x: f32, y: f32, z: f32) -> Self {
        Self::new(Vec3::new(x, y, z), Vec3::ZERO)
    }

    /// Replaces the rotation.
    #[must_use]
    pub const fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    /// True if this is the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Local matrix: translation, then rotation.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_euler_xyz(self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    fn assert_vec_close(a: Vec3, b: Vec3) {
        assert!(a.distance(b) < EPS, "{a:?} != {b:?}");
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        let sum = a + b;
        assert_eq!(sum.x, 5.0);
        assert_eq!(sum.y, 7.0);
        assert_eq!(sum.z, 9.0);

        let dot = a.dot(b);
        assert_eq!(dot, 32.0); // 1*4 + 2*5 + 3*6
        assert_eq!(a.mirror_x(), Vec3::new(-1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mat4_bytemuck() {
        let m = Mat4::IDENTITY;
        let bytes: &[u8] = bytemuck::bytes_of(&m);
        assert_eq!(bytes.len(), 64); // 16 * 4 bytes
    }

    #[test]
    fn test_euler_quarter_turns() {
        let p = Vec3::X;
        // +90° about Y sends +X to -Z
        let ry = Mat4::from_euler_xyz(Vec3::new(0.0, FRAC_PI_2, 0.0));
        assert_vec_close(ry.transform_point(p), Vec3::new(0.0, 0.0, -1.0));

        // +90° about Z sends +X to +Y
        let rz = Mat4::from_euler_xyz(Vec3::new(0.0, 0.0, FRAC_PI_2));
        assert_vec_close(rz.transform_point(p), Vec3::Y);

        // +90° about X sends +Y to +Z
        let rx = Mat4::from_euler_xyz(Vec3::new(FRAC_PI_2, 0.0, 0.0));
        assert_vec_close(rx.transform_point(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_euler_order_is_xyz() {
        let angles = Vec3::new(0.3, -0.7, 1.1);
        let combined = Mat4::from_euler_xyz(angles);
        let rx = Mat4::from_euler_xyz(Vec3::new(angles.x, 0.0, 0.0));
        let ry = Mat4::from_euler_xyz(Vec3::new(0.0, angles.y, 0.0));
        let rz = Mat4::from_euler_xyz(Vec3::new(0.0, 0.0, angles.z));
        assert!(combined.approx_eq(&(rx * ry * rz), EPS));
    }

    #[test]
    fn test_transform_composition() {
        let parent = Transform::at(1.0, 0.0, 0.0).rotated(0.0, FRAC_PI_2, 0.0);
        let child = Transform::at(0.0, 0.0, 2.0);

        let world = parent.to_matrix() * child.to_matrix();
        // Child sits 2 along parent's local +Z, which the parent's yaw turns into +X
        assert_vec_close(world.translation(), Vec3::new(3.0, 0.0, 0.0));
        assert!((Mat4::IDENTITY * world).approx_eq(&world, EPS));
        assert!(Transform::IDENTITY.is_identity());
    }
}
