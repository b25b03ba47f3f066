//! Graduation set: mortarboard with a hanging tassel next to a rolled scroll.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use curio_shared::{Rgb, Transform, Vec3};

use super::AssetComposer;
use crate::error::AssetResult;
use crate::material::{MaterialCache, MaterialSpec};
use crate::palette;
use crate::primitive::{make_box, make_cylinder, make_full_sphere};
use crate::registry::AssetType;
use crate::scene::SceneNode;

// === LAYOUT ===

const HAT_POS: Vec3 = Vec3::new(-0.5, 0.0, 0.0);
const CAP_HEIGHT: f32 = 0.35;
const BOARD_SIZE: f32 = 1.3;
const BOARD_THICKNESS: f32 = 0.06;
const BOARD_Y: f32 = CAP_HEIGHT + BOARD_THICKNESS / 2.0;

const CORD_LENGTH: f32 = 0.45;
const TASSEL_END_RADIUS: f32 = 0.06;

const SCROLL_POS: Vec3 = Vec3::new(0.9, 0.15, 0.3);
const SCROLL_RADIUS: f32 = 0.15;
const SCROLL_LENGTH: f32 = 1.2;

const SEGMENTS: u32 = 24;

// === MATERIALS ===

/// Cap and board share this one, so they come back as a single handle.
const HAT: MaterialSpec = MaterialSpec::solid(palette::HAT_BLACK, 0.8);
const PAPER: MaterialSpec = MaterialSpec::solid(palette::PARCHMENT, 0.9);
const RIBBON: MaterialSpec = MaterialSpec::solid(palette::RIBBON_RED, 0.6);

/// Composer for [`AssetType::Diploma`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DiplomaComposer;

impl DiplomaComposer {
    fn hat(accent: Rgb, materials: &mut MaterialCache) -> AssetResult<SceneNode> {
        let tassel_material = materials.get_or_create(MaterialSpec::solid(accent, 0.6))?;

        // Hangs off the board edge
        let tassel = SceneNode::group(
            "tassel",
            Transform::at(BOARD_SIZE / 2.0, BOARD_Y, 0.0),
            vec![
                SceneNode::mesh(
                    "tassel_cord",
                    Transform::at(0.0, -CORD_LENGTH / 2.0, 0.0),
                    make_cylinder(0.015, 0.015, CORD_LENGTH, 8)?,
                    tassel_material.clone(),
                ),
                SceneNode::mesh(
                    "tassel_end",
                    Transform::at(0.0, -CORD_LENGTH - TASSEL_END_RADIUS / 2.0, 0.0),
                    make_full_sphere(TASSEL_END_RADIUS, 12)?,
                    tassel_material,
                ),
            ],
        );

        Ok(SceneNode::group(
            "hat",
            Transform::new(HAT_POS, Vec3::ZERO),
            vec![
                SceneNode::mesh(
                    "cap",
                    Transform::at(0.0, CAP_HEIGHT / 2.0, 0.0),
                    make_cylinder(0.45, 0.5, CAP_HEIGHT, SEGMENTS)?,
                    materials.get_or_create(HAT)?,
                ),
                SceneNode::mesh(
                    "board",
                    Transform::at(0.0, BOARD_Y, 0.0).rotated(0.0, FRAC_PI_4, 0.0),
                    make_box(BOARD_SIZE, BOARD_THICKNESS, BOARD_SIZE)?,
                    materials.get_or_create(HAT)?,
                ),
                tassel,
            ],
        ))
    }

    fn scroll(materials: &mut MaterialCache) -> AssetResult<SceneNode> {
        // Cylinders stand on Y; a quarter turn about Z lays them down
        let lying = Transform::IDENTITY.rotated(0.0, 0.0, FRAC_PI_2);

        Ok(SceneNode::group(
            "scroll",
            Transform::new(SCROLL_POS, Vec3::new(0.0, 0.3, 0.0)),
            vec![
                SceneNode::mesh(
                    "scroll_body",
                    lying,
                    make_cylinder(SCROLL_RADIUS, SCROLL_RADIUS, SCROLL_LENGTH, SEGMENTS)?,
                    materials.get_or_create(PAPER)?,
                ),
                SceneNode::mesh(
                    "ribbon",
                    lying,
                    make_cylinder(SCROLL_RADIUS + 0.01, SCROLL_RADIUS + 0.01, 0.12, SEGMENTS)?,
                    materials.get_or_create(RIBBON)?,
                ),
            ],
        ))
    }
}

impl AssetComposer for DiplomaComposer {
    fn asset_type(&self) -> AssetType {
        AssetType::Diploma
    }

    fn assemble(&self, accent: Rgb, materials: &mut MaterialCache) -> AssetResult<SceneNode> {
        Ok(SceneNode::group(
            "diploma",
            Transform::IDENTITY,
            vec![Self::hat(accent, materials)?, Self::scroll(materials)?],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diploma_hierarchy() {
        let diploma = DiplomaComposer.compose("#eab308").unwrap();
        let names: Vec<_> = diploma.walk().map(SceneNode::name).collect();
        assert_eq!(
            names,
            [
                "diploma",
                "hat",
                "cap",
                "board",
                "tassel",
                "tassel_cord",
                "tassel_end",
                "scroll",
                "scroll_body",
                "ribbon",
            ]
        );
        assert_eq!(diploma.depth(), 4);
    }

    #[test]
    fn test_cap_and_board_share_material() {
        let diploma = DiplomaComposer.compose("#eab308").unwrap();
        let cap = diploma.find("cap").and_then(SceneNode::as_mesh).unwrap();
        let board = diploma.find("board").and_then(SceneNode::as_mesh).unwrap();

        assert!(cap.material.ptr_eq(&board.material));
        assert_eq!(cap.material.roughness, 0.8);
        assert_eq!(cap.material.base_color, palette::HAT_BLACK);
    }

    #[test]
    fn test_tassel_takes_accent() {
        let diploma = DiplomaComposer.compose("#eab308").unwrap();
        let tassel = diploma.find("tassel").unwrap();
        for mesh in tassel.meshes() {
            assert_eq!(mesh.material.base_color, Rgb::from_hex(0xeab308));
        }

        let ribbon = diploma.find("ribbon").and_then(SceneNode::as_mesh).unwrap();
        assert_eq!(ribbon.material.base_color, palette::RIBBON_RED);
    }

    #[test]
    fn test_tassel_hangs_below_board() {
        let diploma = DiplomaComposer.compose("#eab308").unwrap();
        let items = diploma.flatten();
        let end = items.iter().find(|i| i.name == "tassel_end").unwrap();
        assert!(end.world.translation().y < BOARD_Y);
    }
}
