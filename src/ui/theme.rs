//! Theme constants for the gobang GUI

use egui::Color32;

// Board - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(216, 178, 125);
pub const GRID_LINE: Color32 = Color32::from_rgb(64, 44, 24);
pub const STAR_POINT: Color32 = Color32::from_rgb(52, 38, 22);

// Stones
pub const BLACK_STONE: Color32 = Color32::from_rgb(22, 24, 28);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(72, 74, 84);
pub const WHITE_STONE: Color32 = Color32::from_rgb(248, 248, 250);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(186, 188, 194);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(226, 64, 58);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(64, 216, 76);

// Panels and cards - dark side panel next to the wooden board
pub const PANEL_BG: Color32 = Color32::from_rgb(26, 28, 33);
pub const BOARD_PANEL_BG: Color32 = Color32::from_rgb(41, 43, 48);
pub const CARD_BG: Color32 = Color32::from_rgb(36, 39, 45);
pub const DEBUG_BG: Color32 = Color32::from_rgb(31, 34, 40);
pub const BUTTON_BG: Color32 = Color32::from_rgb(52, 55, 61);
pub const WIN_CARD_BG: Color32 = Color32::from_rgb(46, 82, 58);
pub const WIN_CARD_ACCENT: Color32 = Color32::from_rgb(178, 240, 182);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(82, 62, 34);

// Text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(236, 238, 242);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(164, 168, 178);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(122, 126, 136);

// Turn status
pub const STATUS_READY: Color32 = Color32::from_rgb(84, 196, 126);
pub const STATUS_THINKING: Color32 = Color32::from_rgb(250, 176, 56);

// Hover ghost for an occupied cell (rgba colors can't be const)
pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(240, 56, 56, 100)
}

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 3.5;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.5;

// Star point positions (0-indexed)
pub const STAR_POINTS: [(u8, u8); 9] = [
    (3, 3), (3, 7), (3, 11),
    (7, 3), (7, 7), (7, 11),
    (11, 3), (11, 7), (11, 11),
];
