//! Handheld gamepad: shell with angled grips, a glowing screen, accent buttons
//! on the right and thumbsticks on the left.

use curio_shared::{Rgb, Transform, Vec3};

use super::AssetComposer;
use crate::error::AssetResult;
use crate::material::{MaterialCache, MaterialSpec};
use crate::palette;
use crate::primitive::{make_box, make_cylinder};
use crate::registry::AssetType;
use crate::scene::SceneNode;

// === LAYOUT ===

const BODY: [f32; 3] = [2.4, 0.5, 1.2];
const TOP: f32 = BODY[1] / 2.0;

const HANDLE_RADIUS: f32 = 0.3;
const HANDLE_LENGTH: f32 = 0.9;
/// Right grip; the left one is its mirror image.
const HANDLE_POS: Vec3 = Vec3::new(0.95, -0.15, 0.45);
const HANDLE_TILT: f32 = 1.2;
const HANDLE_SPLAY: f32 = 0.35;

const SCREEN: [f32; 3] = [0.8, 0.05, 0.45];
const BUTTONS: [Vec3; 2] = [Vec3::new(0.65, TOP + 0.04, 0.0), Vec3::new(0.85, TOP + 0.04, 0.15)];
const STICKS: [Vec3; 2] = [Vec3::new(-0.75, TOP + 0.06, 0.1), Vec3::new(-0.45, TOP + 0.06, 0.3)];
const STICK_TILT: f32 = 0.2;

const SEGMENTS: u32 = 16;

// === MATERIALS ===

const SHELL: MaterialSpec = MaterialSpec::solid(palette::GAMEPAD_SHELL, 0.6);
const SCREEN_GLASS: MaterialSpec =
    MaterialSpec::solid(palette::SCREEN_BLUE, 0.3).with_emissive(palette::SCREEN_GLOW, 0.4);
const STICK: MaterialSpec = MaterialSpec::solid(palette::STICK_BLACK, 0.5);

/// Composer for [`AssetType::Gamepad`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GamepadComposer;

impl AssetComposer for GamepadComposer {
    fn asset_type(&self) -> AssetType {
        AssetType::Gamepad
    }

    fn assemble(&self, accent: Rgb, materials: &mut MaterialCache) -> AssetResult<SceneNode> {
        let shell = materials.get_or_create(SHELL)?;
        let button = MaterialSpec::solid(accent, 0.3).with_emissive(accent, 0.6);

        let mut children = vec![SceneNode::mesh(
            "body",
            Transform::IDENTITY,
            make_box(BODY[0], BODY[1], BODY[2])?,
            shell.clone(),
        )];

        for (position, splay) in [(HANDLE_POS.mirror_x(), HANDLE_SPLAY), (HANDLE_POS, -HANDLE_SPLAY)] {
            children.push(SceneNode::mesh(
                "handle",
                Transform::new(position, Vec3::new(HANDLE_TILT, 0.0, splay)),
                make_cylinder(HANDLE_RADIUS, HANDLE_RADIUS, HANDLE_LENGTH, SEGMENTS)?,
                shell.clone(),
            ));
        }

        children.push(SceneNode::mesh(
            "screen",
            Transform::at(0.0, TOP + SCREEN[1] / 2.0, -0.1),
            make_box(SCREEN[0], SCREEN[1], SCREEN[2])?,
            materials.get_or_create(SCREEN_GLASS)?,
        ));

        for position in BUTTONS {
            children.push(SceneNode::mesh(
                "button",
                Transform::new(position, Vec3::ZERO),
                make_cylinder(0.1, 0.1, 0.08, SEGMENTS)?,
                materials.get_or_create(button)?,
            ));
        }

        for (i, position) in STICKS.into_iter().enumerate() {
            let lean = if i == 0 { STICK_TILT } else { -STICK_TILT };
            children.push(SceneNode::mesh(
                "joystick",
                Transform::new(position, Vec3::new(lean, 0.0, 0.0)),
                make_cylinder(0.14, 0.12, 0.12, SEGMENTS)?,
                materials.get_or_create(STICK)?,
            ));
        }

        Ok(SceneNode::group("gamepad", Transform::IDENTITY, children))
    }
}
