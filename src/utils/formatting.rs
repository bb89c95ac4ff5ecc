//! Formatting utilities used for CLI and export outputs.

use crate::models::rating::Rating;
use crate::utils::colors::{RESET, color_for_rating};

/// `1.15` → `"1.150 kg"`
pub fn format_kg(kg: f64) -> String {
    format!("{:.3} kg", kg)
}

/// Trim trailing zeros from a quantity (`10.0` → `10`, `2.50` → `2.5`).
pub fn format_quantity(v: f64) -> String {
    let s = format!("{:.3}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn colored_rating(rating: Rating) -> String {
    format!("{}{}{}", color_for_rating(rating), rating.as_str(), RESET)
}

/// Horizontal rule built from the configured separator character.
pub fn separator(ch: &str, width: usize) -> String {
    let ch = if ch.is_empty() { "-" } else { ch };
    ch.repeat(width)
}
