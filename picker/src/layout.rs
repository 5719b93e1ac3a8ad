// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Where everything goes on the screen, as a function of the terminal [`Size`] only.

use unicode_width::UnicodeWidthStr;

use crate::{Pos, Rect, RgbChannel, Size, TerminalTooSmallError};

/// Normal, protan, deutan and tritan.
pub const PANEL_COUNT: u16 = 4;
pub const PANEL_LEFT_MARGIN: u16 = 2;
pub const PANEL_TOP_MARGIN: u16 = 1;
/// Horizontal distance between two RGB adjuster columns.
pub const ADJUSTER_SPACING: u16 = 7;
pub const ADJUSTER_TOP_GLYPH: &str = "  ^  ";
pub const ADJUSTER_BOTTOM_GLYPH: &str = "  v  ";
pub const TRUNCATION_SUFFIX: &str = "...";

/// The lines of text painted under each panel, in the order they appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelLine {
    Label,
    Sequence,
    Hex,
    ColorType,
    Brightness,
}

impl PanelLine {
    /// Offset from the panel height. There is a blank row between the label and the rest.
    const fn row_offset(self) -> u16 {
        match self {
            Self::Label => 2,
            Self::Sequence => 4,
            Self::Hex => 5,
            Self::ColorType => 6,
            Self::Brightness => 7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WheelLayout {
    pub size: Size,
    pub panel_size: Size,
}

impl WheelLayout {
    /// # Errors
    ///
    /// Returns [`TerminalTooSmallError`] when the panel width or height would be zero or
    /// less.
    pub fn try_new(size: Size) -> Result<Self, TerminalTooSmallError> {
        let (panel_width, panel_height) = raw_panel_size(size);
        match (u16::try_from(panel_width), u16::try_from(panel_height)) {
            (Ok(col_width), Ok(row_height)) if col_width > 0 && row_height > 0 => Ok(Self {
                size,
                panel_size: Size::new(col_width, row_height),
            }),
            _ => Err(TerminalTooSmallError {
                size,
                panel_width,
                panel_height,
            }),
        }
    }

    /// Like [`WheelLayout::try_new`], but every panel is at least one cell wide and tall.
    #[must_use]
    pub fn new_clamped(size: Size) -> Self {
        let (panel_width, panel_height) = raw_panel_size(size);
        let clamp = |it: i32| u16::try_from(it.max(1)).unwrap_or(1);
        Self {
            size,
            panel_size: Size::new(clamp(panel_width), clamp(panel_height)),
        }
    }

    #[must_use]
    pub fn panel_rect(self, panel_index: u16) -> Rect {
        let slot_width = self.panel_size.col_width.saturating_add(2);
        let col_index = slot_width
            .saturating_mul(panel_index)
            .saturating_add(PANEL_LEFT_MARGIN);
        Rect::new(Pos::new(col_index, PANEL_TOP_MARGIN), self.panel_size)
    }

    #[must_use]
    pub fn panel_line_row(self, line: PanelLine) -> u16 {
        self.panel_size.row_height.saturating_add(line.row_offset())
    }

    /// Where `text` starts when it is centered under the panel.
    #[must_use]
    pub fn panel_text_pos(self, panel_index: u16, line: PanelLine, text: &str) -> Pos {
        let rect = self.panel_rect(panel_index);
        Pos::new(
            center_col(rect.origin.col_index, rect.size.col_width, text),
            self.panel_line_row(line),
        )
    }

    #[must_use]
    pub fn adjuster_top_row(self) -> u16 { self.size.row_height.saturating_sub(8) }

    #[must_use]
    pub fn adjuster_value_row(self) -> u16 { self.size.row_height.saturating_sub(6) }

    #[must_use]
    pub fn adjuster_bottom_row(self) -> u16 { self.size.row_height.saturating_sub(4) }

    #[must_use]
    pub fn legend_row(self) -> u16 { self.size.row_height.saturating_sub(2) }

    /// The green (middle) column is also the only column in the palette modes.
    #[must_use]
    pub fn adjuster_col(self, channel: RgbChannel) -> u16 {
        let green = (self.size.col_width / 2).saturating_sub(2);
        match channel {
            RgbChannel::Red => green.saturating_sub(ADJUSTER_SPACING),
            RgbChannel::Green => green,
            RgbChannel::Blue => green.saturating_add(ADJUSTER_SPACING),
        }
    }

    /// A channel value sits under the glyphs: one digit is shifted to the middle of the
    /// glyph, longer numbers by half their length.
    #[must_use]
    pub fn adjuster_value_pos(self, channel: RgbChannel, value: &str) -> Pos {
        let len = text_width(value);
        let shift = if len == 1 { 2 } else { len / 2 };
        Pos::new(
            self.adjuster_col(channel).saturating_add(shift),
            self.adjuster_value_row(),
        )
    }

    /// `text` centered on the whole screen, on `row_index`.
    #[must_use]
    pub fn screen_centered_pos(self, row_index: u16, text: &str) -> Pos {
        Pos::new(center_col(0, self.size.col_width, text), row_index)
    }
}

fn raw_panel_size(size: Size) -> (i32, i32) {
    let panel_count = i32::from(PANEL_COUNT);
    (
        i32::from(size.col_width) / panel_count - 2,
        i32::from(size.row_height) / 3 - 2,
    )
}

/// `left + span / 2 - width / 2`, never less than `0`.
#[must_use]
pub fn center_col(left: u16, span: u16, text: &str) -> u16 {
    left.saturating_add(span / 2).saturating_sub(text_width(text) / 2)
}

/// Display width of `text` in terminal cells.
#[must_use]
pub fn text_width(text: &str) -> u16 { u16::try_from(text.width()).unwrap_or(u16::MAX) }

/// When `text` has more than `threshold` characters, it is cut to `threshold - 1`
/// characters followed by [`TRUNCATION_SUFFIX`].
///
/// ```
/// use huepick::truncate_with_periods;
/// assert_eq!(truncate_with_periods("Deuteranopia", 8), "Deutera...");
/// assert_eq!(truncate_with_periods("Normal", 8), "Normal");
/// ```
#[must_use]
pub fn truncate_with_periods(text: &str, threshold: usize) -> String {
    if text.chars().count() <= threshold {
        return text.to_string();
    }
    let mut it: String = text.chars().take(threshold.saturating_sub(1)).collect();
    it.push_str(TRUNCATION_SUFFIX);
    it
}

#[cfg(test)]
mod tests {
    use huepick_color::assert_eq2;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_layout_for_a_regular_terminal() {
        let layout = WheelLayout::try_new(Size::new(120, 40)).unwrap();
        assert_eq2!(layout.panel_size, Size::new(28, 11));

        assert_eq2!(layout.panel_rect(0).origin, Pos::new(2, 1));
        assert_eq2!(layout.panel_rect(1).origin, Pos::new(32, 1));
        assert_eq2!(layout.panel_rect(3).origin, Pos::new(92, 1));
        assert_eq2!(layout.panel_rect(3).right(), 120);

        assert_eq2!(layout.panel_line_row(PanelLine::Label), 13);
        assert_eq2!(layout.panel_line_row(PanelLine::Brightness), 18);

        assert_eq2!(layout.adjuster_top_row(), 32);
        assert_eq2!(layout.adjuster_value_row(), 34);
        assert_eq2!(layout.adjuster_bottom_row(), 36);
        assert_eq2!(layout.legend_row(), 38);

        assert_eq2!(layout.adjuster_col(RgbChannel::Red), 51);
        assert_eq2!(layout.adjuster_col(RgbChannel::Green), 58);
        assert_eq2!(layout.adjuster_col(RgbChannel::Blue), 65);
    }

    #[test]
    fn test_centering() {
        let layout = WheelLayout::try_new(Size::new(120, 40)).unwrap();
        // 2 + 28 / 2 - 6 / 2.
        assert_eq2!(
            layout.panel_text_pos(0, PanelLine::Label, "Normal"),
            Pos::new(13, 13)
        );
        assert_eq2!(layout.screen_centered_pos(38, "abcd"), Pos::new(58, 38));
    }

    #[test_case("7", 60)]
    #[test_case("128", 59)]
    #[test_case("42", 59)]
    fn test_adjuster_value_pos(value: &str, col_index: u16) {
        let layout = WheelLayout::new_clamped(Size::new(120, 40));
        assert_eq2!(
            layout.adjuster_value_pos(RgbChannel::Green, value),
            Pos::new(col_index, 34)
        );
    }

    #[test_case(Size::new(8, 40))]
    #[test_case(Size::new(120, 6))]
    #[test_case(Size::new(0, 0))]
    fn test_too_small_terminal_is_clamped(size: Size) {
        let err = WheelLayout::try_new(size).unwrap_err();
        assert!(err.panel_width <= 0 || err.panel_height <= 0);

        let layout = WheelLayout::new_clamped(size);
        assert!(layout.panel_size.col_width >= 1);
        assert!(layout.panel_size.row_height >= 1);
    }

    #[test]
    fn test_truncate_with_periods() {
        let it = truncate_with_periods("Protanopia12", 8);
        assert_eq2!(it, "Protano...");
        assert_eq2!(it.chars().count(), 10);

        assert_eq2!(truncate_with_periods("12345678", 8), "12345678");
        assert_eq2!(truncate_with_periods("abc", 0), "...");
    }
}
