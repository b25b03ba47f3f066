//! Land plot: grass base, fenced on three sides, with a sign at the open front.

use std::f32::consts::FRAC_PI_6;

use curio_shared::{Rgb, Transform, Vec3};

use super::AssetComposer;
use crate::error::AssetResult;
use crate::material::{MaterialCache, MaterialSpec};
use crate::palette;
use crate::primitive::make_box;
use crate::registry::AssetType;
use crate::scene::SceneNode;

// === LAYOUT ===

const PLOT_SIZE: f32 = 4.0;
const PLOT_THICKNESS: f32 = 0.2;
const HALF: f32 = 1.9;

const POST_SIZE: f32 = 0.15;
const POST_HEIGHT: f32 = 0.8;
/// Back-left, back-right, front-left, front-right.
const CORNERS: [(f32, f32); 4] = [(-HALF, -HALF), (HALF, -HALF), (-HALF, HALF), (HALF, HALF)];

const RAIL_Y: f32 = 0.75;
const RAIL_LENGTH: f32 = 2.0 * HALF;
const RAIL_HEIGHT: f32 = 0.08;
const RAIL_THICKNESS: f32 = 0.06;

const SIGN_OFFSET: Vec3 = Vec3::new(1.2, PLOT_THICKNESS, 1.2);
const SIGN_POST_HEIGHT: f32 = 0.7;
const PLACARD: [f32; 3] = [0.7, 0.4, 0.05];

// === MATERIALS ===

const GRASS: MaterialSpec = MaterialSpec::solid(palette::GRASS_GREEN, 1.0);
const WOOD: MaterialSpec = MaterialSpec::solid(palette::FENCE_WOOD, 0.9);
const PLACARD_PAINT: MaterialSpec = MaterialSpec::solid(palette::SIGN_CREAM, 0.6);

/// Composer for [`AssetType::Land`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LandComposer;

impl LandComposer {
    fn sign(accent: Rgb, materials: &mut MaterialCache) -> AssetResult<SceneNode> {
        let placard_y = SIGN_POST_HEIGHT + PLACARD[1] / 4.0;

        Ok(SceneNode::group(
            "sign",
            Transform::new(SIGN_OFFSET, Vec3::new(0.0, -FRAC_PI_6, 0.0)),
            vec![
                SceneNode::mesh(
                    "sign_post",
                    Transform::at(0.0, SIGN_POST_HEIGHT / 2.0, 0.0),
                    make_box(0.08, SIGN_POST_HEIGHT, 0.08)?,
                    materials.get_or_create(WOOD)?,
                ),
                SceneNode::mesh(
                    "sign_placard",
                    Transform::at(0.0, placard_y, 0.0),
                    make_box(PLACARD[0], PLACARD[1], PLACARD[2])?,
                    materials.get_or_create(PLACARD_PAINT)?,
                ),
                SceneNode::mesh(
                    "sign_stripe",
                    Transform::at(0.0, placard_y, PLACARD[2] / 2.0 + 0.005),
                    make_box(0.5, 0.08, 0.01)?,
                    materials.get_or_create(MaterialSpec::solid(accent, 0.5))?,
                ),
            ],
        ))
    }
}

impl AssetComposer for LandComposer {
    fn asset_type(&self) -> AssetType {
        AssetType::Land
    }

    fn assemble(&self, accent: Rgb, materials: &mut MaterialCache) -> AssetResult<SceneNode> {
        let mut children = Vec::with_capacity(9);

        children.push(SceneNode::mesh(
            "plot",
            Transform::at(0.0, PLOT_THICKNESS / 2.0, 0.0),
            make_box(PLOT_SIZE, PLOT_THICKNESS, PLOT_SIZE)?,
            materials.get_or_create(GRASS)?,
        ));

        let post_y = PLOT_THICKNESS + POST_HEIGHT / 2.0;
        for (x, z) in CORNERS {
            children.push(SceneNode::mesh(
                "corner_post",
                Transform::at(x, post_y, z),
                make_box(POST_SIZE, POST_HEIGHT, POST_SIZE)?,
                materials.get_or_create(WOOD)?,
            ));
        }

        // Back, left, right; the front stays open
        let rails = [
            (Vec3::new(0.0, RAIL_Y, -HALF), [RAIL_LENGTH, RAIL_HEIGHT, RAIL_THICKNESS]),
            (Vec3::new(-HALF, RAIL_Y, 0.0), [RAIL_THICKNESS, RAIL_HEIGHT, RAIL_LENGTH]),
            (Vec3::new(HALF, RAIL_Y, 0.0), [RAIL_THICKNESS, RAIL_HEIGHT, RAIL_LENGTH]),
        ];
        for (position, [w, h, d]) in rails {
            children.push(SceneNode::mesh(
                "rail",
                Transform::new(position, Vec3::ZERO),
                make_box(w, h, d)?,
                materials.get_or_create(WOOD)?,
            ));
        }

        children.push(Self::sign(accent, materials)?);

        Ok(SceneNode::group("land", Transform::IDENTITY, children))
    }
}
