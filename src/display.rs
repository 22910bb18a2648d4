/// Terminal display adapter: renders the calculator registers as two lines
use crate::config::{DisplayConfig, MIN_DISPLAY_WIDTH};
use crate::input::Registers;
use std::io::{self, Write};

// ============================================================================
// Layout Constants (not configurable)
// ============================================================================

/// Marker placed in front of text that had to be cut to fit
const OVERFLOW_MARKER: char = '…';

/// Text substituted on the main display for values with no digit form
const MAIN_DISPLAY_FALLBACK: &str = "0";

/// Fixed-width, right-aligned two-line display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Display {
    width: usize,
}

impl Display {
    pub fn new(width: u16) -> Self {
        Self {
            width: usize::from(width.max(MIN_DISPLAY_WIDTH)),
        }
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.width)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Renders the expression line followed by the operand line.
    pub fn render(&self, registers: &Registers) -> [String; 2] {
        [
            fit_line(&registers.expression, self.width),
            fit_line(main_display_text(&registers.operand), self.width),
        ]
    }

    /// Writes the rendered lines to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W, registers: &Registers) -> io::Result<()> {
        for line in self.render(registers) {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}

/// Main-display substitution: spelled-out non-finite values show as `0`.
pub fn main_display_text(text: &str) -> &str {
    match text {
        "Infinity" | "-Infinity" | "NaN" => MAIN_DISPLAY_FALLBACK,
        other => other,
    }
}

/// Right-aligns `text` in `width` columns, keeping the rightmost characters
/// and marking the cut with `…` when it does not fit.
pub fn fit_line(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text:>width$}");
    }

    let keep = width.saturating_sub(1);
    let tail: String = text.chars().skip(len - keep).collect();
    log::debug!("Display overflow: {len} chars in {width} columns");
    format!("{OVERFLOW_MARKER}{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registers(expression: &str, operand: &str) -> Registers {
        Registers {
            expression: expression.to_string(),
            operand: operand.to_string(),
        }
    }

    #[test]
    fn test_right_aligned() {
        let display = Display::new(8);
        let [top, bottom] = display.render(&registers("5+3", "8"));
        assert_eq!(top, "     5+3");
        assert_eq!(bottom, "       8");
    }

    #[test]
    fn test_empty_expression_is_blank_line() {
        let display = Display::new(6);
        let [top, _] = display.render(&registers("", "0"));
        assert_eq!(top, "      ");
    }

    #[test]
    fn test_overflow_keeps_rightmost_digits() {
        assert_eq!(fit_line("1234567890", 6), "…67890");
        assert_eq!(fit_line("123456", 6), "123456");
    }

    #[test]
    fn test_overflow_counts_characters_not_bytes() {
        assert_eq!(fit_line("6÷4", 3), "6÷4");
        assert_eq!(fit_line("12÷4", 3), "…÷4");
    }

    #[test]
    fn test_main_display_substitution() {
        assert_eq!(main_display_text("Infinity"), "0");
        assert_eq!(main_display_text("-Infinity"), "0");
        assert_eq!(main_display_text("42"), "42");

        let display = Display::new(4);
        let [top, bottom] = display.render(&registers("Infinity", "Infinity"));
        // Only the main line is substituted
        assert_eq!(top, "…ity");
        assert_eq!(bottom, "   0");
    }

    #[test]
    fn test_width_has_a_floor() {
        assert_eq!(Display::new(1).width(), usize::from(MIN_DISPLAY_WIDTH));
    }

    #[test]
    fn test_write_to() {
        let mut out = Vec::new();
        Display::new(4)
            .write_to(&mut out, &registers("1+", "2"))
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  1+\n   2\n");
    }
}
