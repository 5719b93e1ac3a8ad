// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          io::IsTerminal,
          sync::atomic::{AtomicI8, Ordering}};

use strum_macros::{Display, EnumString};

/// Process wide color support, which can be overridden (eg: from a command line flag),
/// and is otherwise detected from the environment and memoized.
pub mod global_color_support {
    use super::{AtomicI8, ColorSupport, Ordering, Stream,
                examine_env_vars_to_determine_color_support};

    static OVERRIDE: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    static DETECTED: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    const NOT_SET_VALUE: i8 = -1;

    /// Returns the override if one is set, otherwise the (memoized) result of
    /// [`examine_env_vars_to_determine_color_support`] for stdout.
    #[must_use]
    pub fn detect() -> ColorSupport {
        if let Some(it) = try_get_override() {
            return it;
        }

        if let Ok(it) = ColorSupport::try_from(DETECTED.load(Ordering::SeqCst)) {
            return it;
        }

        let it = examine_env_vars_to_determine_color_support(Stream::Stdout);
        DETECTED.store(i8::from(it), Ordering::SeqCst);
        it
    }

    /// Regardless of the environment, [`detect`] returns `value` until
    /// [`clear_override`] is called.
    ///
    /// Tests that call this must be annotated with `#[serial]` from the
    /// [serial_test](https://crates.io/crates/serial_test) crate, since tests run in
    /// parallel.
    pub fn set_override(value: ColorSupport) {
        OVERRIDE.store(i8::from(value), Ordering::SeqCst);
    }

    pub fn clear_override() { OVERRIDE.store(NOT_SET_VALUE, Ordering::SeqCst); }

    #[must_use]
    pub fn try_get_override() -> Option<ColorSupport> {
        ColorSupport::try_from(OVERRIDE.load(Ordering::SeqCst)).ok()
    }
}

/// What kind of colors the terminal is able to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ColorSupport {
    Truecolor,
    Ansi256,
    Grayscale,
    NoColor,
}

/// The stream to check for color support.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Heuristic based on the environment variables of this process, and whether `stream`
/// is a terminal.
#[must_use]
pub fn examine_env_vars_to_determine_color_support(stream: Stream) -> ColorSupport {
    color_support_from_env(
        |key| env::var(key).ok(),
        is_a_tty(stream),
        is_ci::cached(),
        env::consts::OS,
    )
}

/// Same as [`examine_env_vars_to_determine_color_support`] but everything it looks at is
/// passed in: the environment variables, whether the stream is a terminal, whether this
/// runs in CI, and the OS.
#[must_use]
pub fn color_support_from_env(
    lookup: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    is_ci: bool,
    os: &str,
) -> ColorSupport {
    let var_is = |key: &str, expected: &str| lookup(key).as_deref() == Some(expected);
    let var_is_set_and_not_zero =
        |key: &str| lookup(key).is_some_and(|value| value != "0");
    let term = lookup("TERM").unwrap_or_default();

    if var_is_set_and_not_zero("NO_COLOR")
        || term == "dumb"
        || !(is_tty || var_is_set_and_not_zero("IGNORE_IS_TERMINAL"))
    {
        return ColorSupport::NoColor;
    }

    if os == "macos" {
        if var_is("TERM_PROGRAM", "Apple_Terminal") && check_256_color(&term) {
            return ColorSupport::Ansi256;
        }

        if var_is("TERM_PROGRAM", "iTerm.app") || var_is("COLORTERM", "truecolor") {
            return ColorSupport::Truecolor;
        }
    }

    if os == "windows"
        || var_is("COLORTERM", "truecolor")
        || var_is("COLORTERM", "24bit")
    {
        return ColorSupport::Truecolor;
    }

    if check_256_color(&term) {
        return ColorSupport::Ansi256;
    }

    if lookup("COLORTERM").is_some()
        || check_ansi_color(&term)
        || var_is_set_and_not_zero("CLICOLOR")
        || is_ci
    {
        return ColorSupport::Truecolor;
    }

    ColorSupport::NoColor
}

/// `ColorSupport` is stored in an [`AtomicI8`] in [`global_color_support`].
mod convert_between_color_support_and_i8 {
    use super::ColorSupport;

    impl TryFrom<i8> for ColorSupport {
        type Error = i8;

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(ColorSupport::Ansi256),
                2 => Ok(ColorSupport::Truecolor),
                3 => Ok(ColorSupport::NoColor),
                4 => Ok(ColorSupport::Grayscale),
                other => Err(other),
            }
        }
    }

    impl From<ColorSupport> for i8 {
        #[rustfmt::skip]
        fn from(value: ColorSupport) -> Self {
            match value {
                ColorSupport::Ansi256   => 1,
                ColorSupport::Truecolor => 2,
                ColorSupport::NoColor   => 3,
                ColorSupport::Grayscale => 4,
            }
        }
    }
}

fn is_a_tty(stream: Stream) -> bool {
    match stream {
        Stream::Stdout => std::io::stdout().is_terminal(),
        Stream::Stderr => std::io::stderr().is_terminal(),
    }
}

fn check_256_color(term: &str) -> bool {
    term.ends_with("256") || term.ends_with("256color")
}

fn check_ansi_color(term: &str) -> bool {
    ["screen", "xterm", "vt100", "vt220", "rxvt"]
        .iter()
        .any(|prefix| term.starts_with(prefix))
        || ["color", "ansi", "cygwin", "linux"]
            .iter()
            .any(|part| term.contains(part))
}
