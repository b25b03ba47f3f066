//! Fixed colors for the parts of each asset that never follow the accent.
//!
//! Only the accent parts of each asset (walls, sign stripe, buttons, tassel,
//! brush tip) follow the caller's color. Everything listed here is baked in to
//! keep the multi-tone look.

use curio_shared::Rgb;

// House
/// Roof shingles.
pub const ROOF_GRAY: Rgb = Rgb::from_hex(0x4a4a4a);
/// Lit window panes.
pub const WINDOW_LIGHT: Rgb = Rgb::from_hex(0xfff3c4);

// Land
/// Lawn of the plot.
pub const GRASS_GREEN: Rgb = Rgb::from_hex(0x4caf50);
/// Fence posts, rails and sign post.
pub const FENCE_WOOD: Rgb = Rgb::from_hex(0x8b5a2b);
/// Sign board.
pub const SIGN_CREAM: Rgb = Rgb::from_hex(0xf5f0e1);

// Gamepad
/// Shell and handles.
pub const GAMEPAD_SHELL: Rgb = Rgb::from_hex(0x2d2d2d);
/// Screen surface.
pub const SCREEN_BLUE: Rgb = Rgb::from_hex(0x1e3a8a);
/// Screen glow.
pub const SCREEN_GLOW: Rgb = Rgb::from_hex(0x3b82f6);
/// Thumbstick caps.
pub const STICK_BLACK: Rgb = Rgb::from_hex(0x111111);

// Diploma
/// Mortarboard and cap.
pub const HAT_BLACK: Rgb = Rgb::from_hex(0x1a1a1a);
/// Rolled certificate.
pub const PARCHMENT: Rgb = Rgb::from_hex(0xf5e6c8);
/// Band around the scroll.
pub const RIBBON_RED: Rgb = Rgb::from_hex(0xc62828);

// Creative
/// Palette board.
pub const PALETTE_WOOD: Rgb = Rgb::from_hex(0xd2a679);
/// Brush handle.
pub const BRUSH_HANDLE: Rgb = Rgb::from_hex(0x6d4c41);
/// Red paint blob.
pub const PAINT_RED: Rgb = Rgb::from_hex(0xe53935);
/// Yellow paint blob.
pub const PAINT_YELLOW: Rgb = Rgb::from_hex(0xfdd835);
/// Blue paint blob.
pub const PAINT_BLUE: Rgb = Rgb::from_hex(0x1e88e5);
