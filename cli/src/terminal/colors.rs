use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const DEVICE_COUNT: Color = Color::BrightCyan;
pub const LINK_COUNT: Color = Color::BrightMagenta;
pub const SKIPPED: Color = Color::Yellow;
