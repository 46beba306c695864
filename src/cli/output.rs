//! Terminal rendering helpers shared by the commands.

use colored::{ColoredString, Colorize};

use crate::cli::args::ColorMode;
use crate::matrix::level::RiskLevelResult;

/// Apply the color mode once, before any command prints.
/// `NO_COLOR` wins over `auto`; `always` and `never` are absolute.
pub fn init_color(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                colored::control::set_override(false);
            }
        }
    }
}

/// Level name tinted with its own colors.
pub fn paint_level(result: &RiskLevelResult) -> ColoredString {
    let mut painted = result.name.as_str().bold();
    if let Some((r, g, b)) = parse_hex(&result.background_color) {
        painted = painted.on_truecolor(r, g, b);
    }
    if let Some((r, g, b)) = parse_hex(&result.text_color) {
        painted = painted.truecolor(r, g, b);
    }
    painted
}

/// Parse `#rrggbb` or `#rgb`. Anything else is left uncolored.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(parse_hex("#dc2626"), Some((0xdc, 0x26, 0x26)));
        assert_eq!(parse_hex("#fff"), Some((255, 255, 255)));
    }

    #[test]
    fn rejects_named_and_malformed_colors() {
        assert_eq!(parse_hex("red"), None);
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }
}
