/// ANSI color helper utilities for terminal output.
use crate::models::rating::Rating;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// LOW → green, OK → yellow, HIGH → red
pub fn color_for_rating(rating: Rating) -> &'static str {
    match rating {
        Rating::Low => GREEN,
        Rating::Ok => YELLOW,
        Rating::High => RED,
    }
}

/// Grey for empty optional fields, no colour otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
