//! Painter's palette with three paint blobs and a brush leaning off the edge.

use std::f32::consts::{FRAC_PI_4, PI};

use curio_shared::{Rgb, Transform, Vec3};

use super::AssetComposer;
use crate::error::AssetResult;
use crate::material::{MaterialCache, MaterialSpec};
use crate::palette;
use crate::primitive::{make_cone, make_cylinder, make_hemisphere};
use crate::registry::AssetType;
use crate::scene::SceneNode;

// === LAYOUT ===

const DISK_RADIUS: f32 = 1.2;
const DISK_THICKNESS: f32 = 0.08;

const BLOB_RADIUS: f32 = 0.18;
const BLOBS: [(f32, f32, Rgb); 3] = [
    (-0.5, -0.4, palette::PAINT_RED),
    (0.1, -0.6, palette::PAINT_YELLOW),
    (0.6, -0.2, palette::PAINT_BLUE),
];

const BRUSH_POS: Vec3 = Vec3::new(0.5, 0.3, 0.6);
const HANDLE_LENGTH: f32 = 1.1;
const TIP_LENGTH: f32 = 0.25;

// === MATERIALS ===

const WOOD: MaterialSpec = MaterialSpec::solid(palette::PALETTE_WOOD, 0.7);
const HANDLE: MaterialSpec = MaterialSpec::solid(palette::BRUSH_HANDLE, 0.6);

/// Composer for [`AssetType::Creative`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CreativeComposer;

impl AssetComposer for CreativeComposer {
    fn asset_type(&self) -> AssetType {
        AssetType::Creative
    }

    fn assemble(&self, accent: Rgb, materials: &mut MaterialCache) -> AssetResult<SceneNode> {
        let mut children = vec![SceneNode::mesh(
            "palette",
            Transform::at(0.0, DISK_THICKNESS / 2.0, 0.0),
            make_cylinder(DISK_RADIUS, DISK_RADIUS, DISK_THICKNESS, 32)?,
            materials.get_or_create(WOOD)?,
        )];

        for (x, z, paint) in BLOBS {
            children.push(SceneNode::mesh(
                "paint_blob",
                Transform::at(x, DISK_THICKNESS, z),
                make_hemisphere(BLOB_RADIUS, 16)?,
                materials.get_or_create(MaterialSpec::solid(paint, 0.3))?,
            ));
        }

        // Tip points down off the bottom of the handle
        let brush = SceneNode::group(
            "brush",
            Transform::new(BRUSH_POS, Vec3::new(0.0, 0.0, -FRAC_PI_4)),
            vec![
                SceneNode::mesh(
                    "brush_handle",
                    Transform::IDENTITY,
                    make_cylinder(0.04, 0.05, HANDLE_LENGTH, 12)?,
                    materials.get_or_create(HANDLE)?,
                ),
                SceneNode::mesh(
                    "brush_tip",
                    Transform::at(0.0, -(HANDLE_LENGTH + TIP_LENGTH) / 2.0, 0.0).rotated(PI, 0.0, 0.0),
                    make_cone(0.07, TIP_LENGTH, 12)?,
                    materials.get_or_create(MaterialSpec::solid(accent, 0.4))?,
                ),
            ],
        );
        children.push(brush);

        Ok(SceneNode::group("creative", Transform::IDENTITY, children))
    }
}
