/// ANSI color helper utilities for terminal output.
use crate::models::priority::Priority;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn color_for_priority(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => GREEN,
        Priority::Medium => YELLOW,
        Priority::High => RED,
    }
}

/// True for a well-formed `#rrggbb` value.
pub fn is_valid_color(s: &str) -> bool {
    regex::Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap().is_match(s)
}

/// Parse `#rrggbb` into its RGB components.
pub fn hex_to_rgb(s: &str) -> Option<(u8, u8, u8)> {
    if !is_valid_color(s) {
        return None;
    }
    let r = u8::from_str_radix(&s[1..3], 16).ok()?;
    let g = u8::from_str_radix(&s[3..5], 16).ok()?;
    let b = u8::from_str_radix(&s[5..7], 16).ok()?;
    Some((r, g, b))
}

/// Paint a partition name in its configured color, falling back to plain
/// text when the stored value is not parseable.
pub fn paint_partition(name: &str, color: &str) -> String {
    match hex_to_rgb(color) {
        Some((r, g, b)) => ansi_term::Colour::RGB(r, g, b).paint(name).to_string(),
        None => name.to_string(),
    }
}
