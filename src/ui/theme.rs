//! Colors and glyphs shared by the views.

use ratatui::style::Color;

pub const COLOR_BORDER: Color = Color::DarkGray;

pub const COLOR_HEADER: Color = Color::White;

/// Focused field border and success text
pub const COLOR_ACTIVE: Color = Color::LightGreen;

pub const COLOR_DIM: Color = Color::DarkGray;

pub const COLOR_LINK: Color = Color::Cyan;

pub const COLOR_ALERT: Color = Color::Red;

pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Character shown for each password character.
pub const MASK_CHAR: char = '•';

pub const TITLE: &str = "Leads Tracker";

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}
