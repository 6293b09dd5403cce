use egui::Color32;

pub const BOARD_BACKGROUND: Color32 = Color32::WHITE;
pub const OUTLINE: Color32 = Color32::BLACK;
pub const FOOD: Color32 = Color32::from_rgb(0xFF, 0x00, 0x00);
pub const SNAKE_HEAD: Color32 = Color32::from_rgb(0x00, 0x80, 0x00);
pub const SNAKE_BODY: Color32 = Color32::from_rgb(0x00, 0x64, 0x00);
