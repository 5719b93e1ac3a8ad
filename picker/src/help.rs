// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use huepick_color::{Ansi16Value, AnsiValue, Color};

use crate::{DrawCommand, Pos, Rect, Size, text_width, truncate_with_periods};

pub const HELP_LINES: [&str; 12] = [
    "Controls",
    "--------",
    "",
    "[ESC]       | Exits the color selection",
    "[ENTER]     | Accepts the color selection",
    "[<-]        | Goes to the previous RGB level",
    "[->]        | Goes to the next RGB level",
    "[CTRL + <-] | Decreases the color-blind severity",
    "[CTRL + ->] | Increases the color-blind severity",
    "[TAB]       | Changes the color mode (16, 256, true)",
    "[UP]        | Increases the current RGB value of color",
    "[DOWN]      | Decreases the current RGB value of color",
];

/// `DarkRed` in the 256 color palette.
pub const HELP_BACKGROUND: Color = Color::Palette256(AnsiValue::new(88));
/// `White`, the last of the 16 system colors.
pub const HELP_FOREGROUND: Color = Color::Palette16(Ansi16Value::WHITE);

/// Columns between the screen edges and the help text.
const HORIZONTAL_PADDING: u16 = 6;
/// Rows taken up by the border, plus one row above and below the box.
const VERTICAL_PADDING: u16 = 4;

/// One frame per page of [`HELP_LINES`], to be painted over the wheel. Long lines are
/// truncated to fit the terminal's width, and there are as many lines on a page as fit
/// its height (at least one).
#[must_use]
pub fn render_help_pages(size: Size) -> Vec<Vec<DrawCommand>> {
    let threshold = usize::from(size.col_width.saturating_sub(HORIZONTAL_PADDING));
    let lines_per_page = usize::from(size.row_height.saturating_sub(VERTICAL_PADDING)).max(1);

    let lines = HELP_LINES
        .iter()
        .map(|line| truncate_with_periods(line, threshold))
        .collect::<Vec<_>>();

    lines
        .chunks(lines_per_page)
        .map(|page| render_help_page(page, size))
        .collect()
}

fn render_help_page(page: &[String], size: Size) -> Vec<DrawCommand> {
    let content_width = page.iter().map(|it| text_width(it)).max().unwrap_or(0);
    let content_height = u16::try_from(page.len()).unwrap_or(u16::MAX);
    let box_size = Size::new(
        content_width.saturating_add(4),
        content_height.saturating_add(2),
    );
    let origin = Pos::new(
        (size.col_width / 2).saturating_sub(box_size.col_width / 2),
        (size.row_height / 2).saturating_sub(box_size.row_height / 2),
    );

    let mut acc = vec![DrawCommand::BorderedRect {
        rect: Rect::new(origin, box_size),
        fill: HELP_BACKGROUND,
        border: HELP_FOREGROUND,
    }];
    for (row_offset, line) in (0_u16..).zip(page) {
        if line.is_empty() {
            continue;
        }
        acc.push(DrawCommand::Text {
            text: line.clone(),
            pos: Pos::new(
                origin.col_index.saturating_add(2),
                origin.row_index.saturating_add(1).saturating_add(row_offset),
            ),
            fg: Some(HELP_FOREGROUND),
            bg: Some(HELP_BACKGROUND),
        });
    }
    acc
}
