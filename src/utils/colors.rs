/// ANSI color helper utilities for terminal output.
use crate::models::color::Rgb;
use ansi_term::{Colour, Style};

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// Two-cell block painted with the event color, for list output.
pub fn swatch(rgb: Rgb) -> String {
    Style::new()
        .on(Colour::RGB(rgb.r, rgb.g, rgb.b))
        .paint("  ")
        .to_string()
}

/// Greys out empty optional fields ("" or "--").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
