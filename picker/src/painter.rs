// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crossterm::{cursor::{Hide, MoveTo, Show},
                style::{Color as CrosstermColor, Print, ResetColor, SetBackgroundColor,
                        SetForegroundColor},
                terminal::{Clear, ClearType}};
use huepick_color::{Color, ColorSupport, TransformColor, global_color_support};
use miette::IntoDiagnostic;
use unicode_width::UnicodeWidthChar;

use crate::{CommonResult, Pos, Rect, Size, ok, queue_commands_no_lock};

/// Glyphs of the double line border: corners, then the horizontal and vertical edges.
pub const BORDER_TOP_LEFT: char = '╔';
pub const BORDER_TOP_RIGHT: char = '╗';
pub const BORDER_BOTTOM_LEFT: char = '╚';
pub const BORDER_BOTTOM_RIGHT: char = '╝';
pub const BORDER_HORIZONTAL: char = '═';
pub const BORDER_VERTICAL: char = '║';

/// One thing to paint. A frame is a `Vec` of these, produced by [`crate::render_wheel`]
/// or [`crate::render_help_pages`] and consumed by [`DrawingPrimitives::paint`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    ClearScreen,
    FillRect {
        rect: Rect,
        color: Color,
    },
    BorderedRect {
        rect: Rect,
        fill: Color,
        border: Color,
    },
    /// `None` colors leave the terminal's default foreground or background.
    Text {
        text: String,
        pos: Pos,
        fg: Option<Color>,
        bg: Option<Color>,
    },
}

/// Everything the renderer needs from a terminal. Positions are absolute, so escape
/// sequences emitted for colors never shift the layout.
pub trait DrawingPrimitives {
    /// Anything painted outside of `canvas` is dropped.
    fn set_canvas_size(&mut self, canvas: Size);

    /// # Errors
    ///
    /// Returns an error if the writer fails.
    fn clear_screen(&mut self) -> CommonResult<()>;

    /// # Errors
    ///
    /// Returns an error if the writer fails.
    fn fill_rect(&mut self, rect: Rect, color: Color) -> CommonResult<()>;

    /// Fills `rect` and draws a double line border on its edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    fn draw_bordered_rect(&mut self, rect: Rect, fill: Color, border: Color)
    -> CommonResult<()>;

    /// # Errors
    ///
    /// Returns an error if the writer fails.
    fn write_text(
        &mut self,
        text: &str,
        pos: Pos,
        fg: Option<Color>,
        bg: Option<Color>,
    ) -> CommonResult<()>;

    /// # Errors
    ///
    /// Returns an error if the writer fails.
    fn set_cursor_visible(&mut self, visible: bool) -> CommonResult<()>;

    /// # Errors
    ///
    /// Returns an error if the writer fails.
    fn flush(&mut self) -> CommonResult<()>;

    /// Paints a whole frame, and then flushes it.
    ///
    /// # Errors
    ///
    /// Returns the first error from any of the other methods.
    fn paint(&mut self, commands: &[DrawCommand], canvas: Size) -> CommonResult<()> {
        self.set_canvas_size(canvas);
        for command in commands {
            match command {
                DrawCommand::ClearScreen => self.clear_screen()?,
                DrawCommand::FillRect { rect, color } => self.fill_rect(*rect, *color)?,
                DrawCommand::BorderedRect { rect, fill, border } => {
                    self.draw_bordered_rect(*rect, *fill, *border)?;
                }
                DrawCommand::Text { text, pos, fg, bg } => {
                    self.write_text(text, *pos, *fg, *bg)?;
                }
            }
        }
        self.flush()
    }
}

/// Paints with crossterm commands, queued on `writer` and written out on
/// [`DrawingPrimitives::flush`].
#[derive(Debug)]
pub struct CrosstermPainter<W: Write> {
    writer: W,
    color_support: ColorSupport,
    canvas: Size,
}

impl<W: Write> CrosstermPainter<W> {
    #[must_use]
    pub fn new(writer: W, color_support: ColorSupport) -> Self {
        Self {
            writer,
            color_support,
            canvas: Size::new(u16::MAX, u16::MAX),
        }
    }

    /// Uses [`global_color_support::detect`], which honors the override.
    #[must_use]
    pub fn new_with_detected_color_support(writer: W) -> Self {
        Self::new(writer, global_color_support::detect())
    }

    #[must_use]
    pub fn get_writer(&self) -> &W { &self.writer }

    pub fn get_writer_mut(&mut self) -> &mut W { &mut self.writer }

    #[must_use]
    pub fn color_support(&self) -> ColorSupport { self.color_support }

    fn convert(&self, color: Color) -> Option<CrosstermColor> {
        convert_color(color, self.color_support)
    }

    /// Writes `text` at `pos`, cut at the right edge of the canvas.
    fn print_clipped(
        &mut self,
        text: &str,
        pos: Pos,
        fg: Option<CrosstermColor>,
        bg: Option<CrosstermColor>,
    ) -> CommonResult<()> {
        if pos.row_index >= self.canvas.row_height || pos.col_index >= self.canvas.col_width
        {
            return ok!();
        }

        let available = usize::from(self.canvas.col_width - pos.col_index);
        let clipped = clip_to_width(text, available);
        if clipped.is_empty() {
            return ok!();
        }

        let writer = &mut self.writer;
        queue_commands_no_lock!(writer, MoveTo(pos.col_index, pos.row_index));
        if let Some(fg) = fg {
            queue_commands_no_lock!(writer, SetForegroundColor(fg));
        }
        if let Some(bg) = bg {
            queue_commands_no_lock!(writer, SetBackgroundColor(bg));
        }
        queue_commands_no_lock!(writer, Print(clipped), ResetColor);

        ok!()
    }
}

impl<W: Write> DrawingPrimitives for CrosstermPainter<W> {
    fn set_canvas_size(&mut self, canvas: Size) { self.canvas = canvas; }

    fn clear_screen(&mut self) -> CommonResult<()> {
        let writer = &mut self.writer;
        queue_commands_no_lock!(writer, ResetColor, Clear(ClearType::All), MoveTo(0, 0));
        ok!()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> CommonResult<()> {
        let bg = self.convert(color);
        let line = " ".repeat(usize::from(rect.size.col_width));
        for row_index in rect.origin.row_index..rect.bottom() {
            self.print_clipped(&line, Pos::new(rect.origin.col_index, row_index), None, bg)?;
        }
        ok!()
    }

    fn draw_bordered_rect(
        &mut self,
        rect: Rect,
        fill: Color,
        border: Color,
    ) -> CommonResult<()> {
        let width = usize::from(rect.size.col_width);
        if width < 2 || rect.size.row_height < 2 {
            return self.fill_rect(rect, fill);
        }

        let fg = self.convert(border);
        let bg = self.convert(fill);
        let inner = width - 2;
        let top = format!(
            "{BORDER_TOP_LEFT}{}{BORDER_TOP_RIGHT}",
            BORDER_HORIZONTAL.to_string().repeat(inner)
        );
        let middle = format!("{BORDER_VERTICAL}{}{BORDER_VERTICAL}", " ".repeat(inner));
        let bottom = format!(
            "{BORDER_BOTTOM_LEFT}{}{BORDER_BOTTOM_RIGHT}",
            BORDER_HORIZONTAL.to_string().repeat(inner)
        );

        let last_row = rect.bottom().saturating_sub(1);
        for row_index in rect.origin.row_index..rect.bottom() {
            let line = if row_index == rect.origin.row_index {
                &top
            } else if row_index == last_row {
                &bottom
            } else {
                &middle
            };
            self.print_clipped(line, Pos::new(rect.origin.col_index, row_index), fg, bg)?;
        }
        ok!()
    }

    fn write_text(
        &mut self,
        text: &str,
        pos: Pos,
        fg: Option<Color>,
        bg: Option<Color>,
    ) -> CommonResult<()> {
        let fg = fg.and_then(|it| self.convert(it));
        let bg = bg.and_then(|it| self.convert(it));
        self.print_clipped(text, pos, fg, bg)
    }

    fn set_cursor_visible(&mut self, visible: bool) -> CommonResult<()> {
        let writer = &mut self.writer;
        if visible {
            queue_commands_no_lock!(writer, Show);
        } else {
            queue_commands_no_lock!(writer, Hide);
        }
        ok!()
    }

    fn flush(&mut self) -> CommonResult<()> { self.writer.flush().into_diagnostic() }
}

/// Palette colors stay palette colors on terminals that can display them. True colors
/// are downgraded to what the terminal supports.
#[must_use]
pub fn convert_color(color: Color, color_support: ColorSupport) -> Option<CrosstermColor> {
    match color_support {
        ColorSupport::NoColor => None,
        ColorSupport::Grayscale => Some(CrosstermColor::AnsiValue(color.as_grayscale().index)),
        ColorSupport::Ansi256 => Some(CrosstermColor::AnsiValue(color.as_ansi().index)),
        ColorSupport::Truecolor => Some(match color {
            Color::TrueColor(rgb) => CrosstermColor::Rgb {
                r: rgb.red,
                g: rgb.green,
                b: rgb.blue,
            },
            Color::Palette256(_) | Color::Palette16(_) => {
                CrosstermColor::AnsiValue(color.as_ansi().index)
            }
        }),
    }
}

/// The longest prefix of `text` that is at most `max_width` cells wide.
fn clip_to_width(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (byte_index, character) in text.char_indices() {
        used += character.width().unwrap_or(0);
        if used > max_width {
            return &text[..byte_index];
        }
    }
    text
}
