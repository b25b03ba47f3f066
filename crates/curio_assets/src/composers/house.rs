//! House: accent walls under a pyramid roof, two lit windows on the front.

use std::f32::consts::FRAC_PI_4;

use curio_shared::{Rgb, Transform};

use super::AssetComposer;
use crate::error::AssetResult;
use crate::material::{MaterialCache, MaterialSpec};
use crate::palette;
use crate::primitive::{make_box, make_cone, make_plane};
use crate::registry::AssetType;
use crate::scene::SceneNode;

// === LAYOUT ===

const BODY_SIZE: [f32; 3] = [2.0, 1.5, 2.0];
const ROOF_RADIUS: f32 = 1.6;
const ROOF_HEIGHT: f32 = 1.0;
const WINDOW_SIZE: f32 = 0.4;
const WINDOW_Y: f32 = 0.9;
const WINDOW_X: f32 = 0.5;
/// Just proud of the front face to avoid z-fighting.
const WINDOW_Z: f32 = BODY_SIZE[2] / 2.0 + 0.001;

// === MATERIALS ===

const ROOF: MaterialSpec = MaterialSpec::solid(palette::ROOF_GRAY, 0.8);
const WINDOW: MaterialSpec = MaterialSpec::solid(palette::WINDOW_LIGHT, 0.2)
    .with_emissive(palette::WINDOW_LIGHT, 0.5)
    .with_opacity(0.8);

/// Composer for [`AssetType::House`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HouseComposer;

impl AssetComposer for HouseComposer {
    fn asset_type(&self) -> AssetType {
        AssetType::House
    }

    fn assemble(&self, accent: Rgb, materials: &mut MaterialCache) -> AssetResult<SceneNode> {
        let walls = materials.get_or_create(MaterialSpec::solid(accent, 0.7))?;
        let roof = materials.get_or_create(ROOF)?;

        let [w, h, d] = BODY_SIZE;
        let mut children = vec![
            SceneNode::mesh("body", Transform::at(0.0, h / 2.0, 0.0), make_box(w, h, d)?, walls),
            // Four segments turned 45 degrees lines the pyramid edges up with the walls
            SceneNode::mesh(
                "roof",
                Transform::at(0.0, h + ROOF_HEIGHT / 2.0, 0.0).rotated(0.0, FRAC_PI_4, 0.0),
                make_cone(ROOF_RADIUS, ROOF_HEIGHT, 4)?,
                roof,
            ),
        ];

        for x in [-WINDOW_X, WINDOW_X] {
            children.push(SceneNode::mesh(
                "window",
                Transform::at(x, WINDOW_Y, WINDOW_Z),
                make_plane(WINDOW_SIZE, WINDOW_SIZE)?,
                materials.get_or_create(WINDOW)?,
            ));
        }

        Ok(SceneNode::group("house", Transform::IDENTITY, children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::PrimitiveSpec;

    #[test]
    fn test_house_parts() {
        let house = HouseComposer.compose("#4f46e5").unwrap();
        let names: Vec<_> = house.walk().map(SceneNode::name).collect();
        assert_eq!(names, ["house", "body", "roof", "window", "window"]);
    }

    #[test]
    fn test_walls_take_accent() {
        let house = HouseComposer.compose("#ff8800").unwrap();
        let body = house.find("body").and_then(SceneNode::as_mesh).unwrap();
        assert_eq!(body.material.base_color, Rgb::from_hex(0xff8800));

        let roof = house.find("roof").and_then(SceneNode::as_mesh).unwrap();
        assert_eq!(roof.material.base_color, palette::ROOF_GRAY);
    }

    #[test]
    fn test_roof_is_pyramid_on_top() {
        let house = HouseComposer.compose("white").unwrap();
        let roof = house.find("roof").and_then(SceneNode::as_mesh).unwrap();

        assert!(matches!(roof.primitive, PrimitiveSpec::Cone { radial_segments: 4, .. }));
        assert!(roof.transform.position.y > BODY_SIZE[1]);
        assert!((roof.transform.rotation.y - FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_windows_share_material() {
        let house = HouseComposer.compose("white").unwrap();
        let windows = house.find_all("window");
        assert_eq!(windows.len(), 2);

        let a = windows[0].as_mesh().unwrap();
        let b = windows[1].as_mesh().unwrap();
        assert!(a.material.ptr_eq(&b.material));
        assert!(a.material.is_transparent());
        assert!(a.material.is_emissive());
        assert_eq!(a.transform.position, b.transform.position.mirror_x());
    }

    #[test]
    fn test_bad_accent() {
        assert!(HouseComposer.compose("").is_err());
        assert!(HouseComposer.compose("#12345").is_err());
    }
}
