// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, ValueEnum};
use huepick_color::{Color, ColorSupport, Severity};

use crate::{LOG_FILE_NAME, WheelState};

// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "huepick")]
#[command(about = "Pick a terminal color with the keyboard 🎨, and preview it as seen with color blindness")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  huepick [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(
        long,
        short = 'c',
        help = "Color to start from: `#RRGGBB`, `r;g;b`, a 256 color index like `196`, or `ansi16:<0..15>`"
    )]
    pub initial_color: Option<Color>,

    #[arg(
        long,
        short = 's',
        default_value = "0.60",
        help = "Color blindness severity of the preview panels, from 0.0 to 1.0"
    )]
    pub severity: Severity,

    #[arg(
        long,
        value_enum,
        help = "Ignore the environment and use these terminal colors"
    )]
    pub color_support: Option<ColorSupportArg>,

    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Summary,
        help = "How the picked color is printed"
    )]
    pub format: OutputFormat,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file (`log.txt` by default) for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value = LOG_FILE_NAME,
        help = "The file that `--enable-logging` writes to."
    )]
    pub log_file: String,
}

impl CLIArg {
    /// The state that the session starts with, and returns to when cancelled.
    #[must_use]
    pub fn wheel_state(&self) -> WheelState {
        WheelState::new(self.initial_color).with_severity(self.severity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorSupportArg {
    Truecolor,
    Ansi256,
    Grayscale,
    NoColor,
}

impl From<ColorSupportArg> for ColorSupport {
    fn from(arg: ColorSupportArg) -> Self {
        match arg {
            ColorSupportArg::Truecolor => Self::Truecolor,
            ColorSupportArg::Ansi256 => Self::Ansi256,
            ColorSupportArg::Grayscale => Self::Grayscale,
            ColorSupportArg::NoColor => Self::NoColor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<type> <sequence> <hex>`, eg: `TrueColor 200;50;75 #C8324B`.
    Summary,
    /// `#RRGGBB`.
    Hex,
    /// `r;g;b`, or the palette index.
    Sequence,
}

impl OutputFormat {
    #[must_use]
    pub fn format(self, color: Color) -> String {
        match self {
            Self::Summary => format!(
                "{} {} {}",
                color.color_type(),
                color.plain_sequence(),
                color.to_hex()
            ),
            Self::Hex => color.to_hex(),
            Self::Sequence => color.plain_sequence(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use huepick_color::assert_eq2;
    use test_case::test_case;

    use super::*;
    use crate::ColorMode;

    #[test]
    fn test_command_is_well_formed() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::try_parse_from(["huepick"]).unwrap();
        assert_eq2!(cli_arg.initial_color, None);
        assert_eq2!(cli_arg.severity, Severity::default());
        assert_eq2!(cli_arg.color_support, None);
        assert_eq2!(cli_arg.format, OutputFormat::Summary);
        assert!(!cli_arg.global_options.enable_logging);
        assert_eq2!(cli_arg.global_options.log_file, LOG_FILE_NAME);
    }

    #[test]
    fn test_all_flags() {
        let cli_arg = CLIArg::try_parse_from([
            "huepick",
            "-c",
            "ansi256:196",
            "-s",
            "0.25",
            "--color-support",
            "no-color",
            "--format",
            "hex",
            "-l",
            "--log-file",
            "/tmp/huepick.log",
        ])
        .unwrap();

        assert_eq2!(cli_arg.initial_color, Some(Color::palette_256(196)));
        assert_eq2!(cli_arg.severity.hundredths(), 25);
        assert_eq2!(cli_arg.color_support, Some(ColorSupportArg::NoColor));
        assert_eq2!(cli_arg.format, OutputFormat::Hex);
        assert!(cli_arg.global_options.enable_logging);
        assert_eq2!(cli_arg.global_options.log_file, "/tmp/huepick.log");

        let state = cli_arg.wheel_state();
        assert_eq2!(state.mode(), ColorMode::Palette256);
        assert_eq2!(state.severity(), cli_arg.severity);
    }

    #[test_case(&["huepick", "-c", "#GG0000"])]
    #[test_case(&["huepick", "-s", "2"])]
    #[test_case(&["huepick", "--format", "json"])]
    fn test_invalid_flags(args: &[&str]) { assert!(CLIArg::try_parse_from(args).is_err()); }

    #[test_case(OutputFormat::Summary, "TrueColor 200;50;75 #C8324B")]
    #[test_case(OutputFormat::Hex, "#C8324B")]
    #[test_case(OutputFormat::Sequence, "200;50;75")]
    fn test_output_format(format: OutputFormat, expected: &str) {
        assert_eq2!(format.format(Color::rgb(200, 50, 75)), expected);
    }

    #[test]
    fn test_palette_summary() {
        assert_eq2!(
            OutputFormat::Summary.format(Color::palette_256(196)),
            "256Color 196 #FF0000"
        );
    }
}
