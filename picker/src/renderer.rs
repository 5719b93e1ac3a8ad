// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use huepick_color::{Ansi16Value, Color, Deficiency, Severity, SimulateDeficiency,
                    TransformColor};
use strum::IntoEnumIterator;

use crate::{ADJUSTER_BOTTOM_GLYPH, ADJUSTER_TOP_GLYPH, ColorMode, DrawCommand, PanelLine,
            Pos, RgbChannel, Size, WheelLayout, WheelState, truncate_with_periods};

pub const LEGEND: &str = "[ESC] Exit | [ENTER] Accept | [H] Help";
pub const NORMAL_PANEL_LABEL: &str = "Normal";

/// The color shown in one panel, and how it was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelColor {
    pub deficiency: Option<Deficiency>,
    pub color: Color,
}

impl PanelColor {
    /// `Normal` for the resolved color, eg `Protanopia [0.60]` for simulated ones.
    #[must_use]
    pub fn label(self, severity: Severity) -> String {
        match self.deficiency {
            None => NORMAL_PANEL_LABEL.to_string(),
            Some(deficiency) => format!("{deficiency} [{severity}]"),
        }
    }
}

/// The resolved color followed by its protan, deutan and tritan simulations, all at the
/// state's severity. Simulated colors are always true colors.
#[must_use]
pub fn compute_panel_colors(
    state: &WheelState,
    simulator: &impl SimulateDeficiency,
) -> Vec<PanelColor> {
    let color = state.resolve();
    let rgb = color.as_rgb();
    let severity = state.severity();

    let mut acc = vec![PanelColor {
        deficiency: None,
        color,
    }];
    acc.extend(Deficiency::iter().map(|deficiency| PanelColor {
        deficiency: Some(deficiency),
        color: Color::TrueColor(simulator.simulate(rgb, deficiency, severity)),
    }));
    acc
}

/// Builds one frame of the color wheel. This doesn't touch the terminal, and `state` is
/// only read.
///
/// A terminal that is too small for the panels is not an error, the panels are clamped
/// to one cell.
#[must_use]
pub fn render_wheel(
    state: &WheelState,
    size: Size,
    simulator: &impl SimulateDeficiency,
) -> Vec<DrawCommand> {
    let layout = WheelLayout::try_new(size).unwrap_or_else(|error| {
        tracing::warn!(message = "Terminal is too small for the color wheel", %error);
        WheelLayout::new_clamped(size)
    });

    let mut acc = vec![DrawCommand::ClearScreen];
    render_panels(&mut acc, &layout, state, simulator);
    render_adjuster(&mut acc, &layout, state);
    render_legend(&mut acc, &layout);
    acc
}

fn render_panels(
    acc: &mut Vec<DrawCommand>,
    layout: &WheelLayout,
    state: &WheelState,
    simulator: &impl SimulateDeficiency,
) {
    let threshold = usize::from(layout.panel_size.col_width);

    for (panel_index, panel) in (0_u16..).zip(compute_panel_colors(state, simulator)) {
        acc.push(DrawCommand::FillRect {
            rect: layout.panel_rect(panel_index),
            color: panel.color,
        });

        let lines = [
            (PanelLine::Label, panel.label(state.severity())),
            (PanelLine::Sequence, panel.color.plain_sequence()),
            (PanelLine::Hex, panel.color.to_hex()),
            (PanelLine::ColorType, panel.color.color_type().to_string()),
            (PanelLine::Brightness, panel.color.brightness_label().to_string()),
        ];
        for (line, text) in lines {
            let text = truncate_with_periods(&text, threshold);
            acc.push(DrawCommand::Text {
                pos: layout.panel_text_pos(panel_index, line, &text),
                text,
                fg: Some(panel.color),
                bg: None,
            });
        }
    }
}

fn render_adjuster(acc: &mut Vec<DrawCommand>, layout: &WheelLayout, state: &WheelState) {
    match state.mode() {
        ColorMode::TrueColor => {
            for channel in RgbChannel::iter() {
                render_channel_adjuster(acc, layout, state, channel);
            }
        }
        ColorMode::Palette256 | ColorMode::Palette16 => {
            render_palette_adjuster(acc, layout, state.resolve());
        }
    }
}

/// The active channel has inverted colors: the glyphs sit on the channel's color.
fn render_channel_adjuster(
    acc: &mut Vec<DrawCommand>,
    layout: &WheelLayout,
    state: &WheelState,
    channel: RgbChannel,
) {
    let channel_color = channel.display_color();
    let (fg, bg) = if channel == state.active_channel() {
        (None, Some(channel_color))
    } else {
        (Some(channel_color), None)
    };
    let col_index = layout.adjuster_col(channel);

    acc.push(DrawCommand::Text {
        text: ADJUSTER_TOP_GLYPH.to_string(),
        pos: Pos::new(col_index, layout.adjuster_top_row()),
        fg,
        bg,
    });

    let value = state.channel_value(channel).to_string();
    acc.push(DrawCommand::Text {
        pos: layout.adjuster_value_pos(channel, &value),
        text: value,
        fg: Some(channel_color),
        bg: None,
    });

    acc.push(DrawCommand::Text {
        text: ADJUSTER_BOTTOM_GLYPH.to_string(),
        pos: Pos::new(col_index, layout.adjuster_bottom_row()),
        fg,
        bg,
    });
}

/// One column, painted in the resolved color, with the palette entry's name and index.
fn render_palette_adjuster(acc: &mut Vec<DrawCommand>, layout: &WheelLayout, color: Color) {
    let col_index = layout.adjuster_col(RgbChannel::Green);

    acc.push(DrawCommand::Text {
        text: ADJUSTER_TOP_GLYPH.to_string(),
        pos: Pos::new(col_index, layout.adjuster_top_row()),
        fg: None,
        bg: Some(color),
    });

    if let Some(entry) = color.palette_entry() {
        let text = format!("{} [{}]", entry.name(), entry.index);
        acc.push(DrawCommand::Text {
            pos: layout.screen_centered_pos(layout.adjuster_value_row(), &text),
            text,
            fg: Some(color),
            bg: None,
        });
    }

    acc.push(DrawCommand::Text {
        text: ADJUSTER_BOTTOM_GLYPH.to_string(),
        pos: Pos::new(col_index, layout.adjuster_bottom_row()),
        fg: None,
        bg: Some(color),
    });
}

fn render_legend(acc: &mut Vec<DrawCommand>, layout: &WheelLayout) {
    let row_index = layout.legend_row();
    acc.push(DrawCommand::Text {
        text: LEGEND.to_string(),
        pos: layout.screen_centered_pos(row_index, LEGEND),
        fg: Some(legend_color()),
        bg: None,
    });
}

/// The `White` system color.
fn legend_color() -> Color { Color::Palette16(Ansi16Value::WHITE) }
