// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The xterm 256 color palette, as `0xRRGGBB` values and xterm names.
//!
//! - 0..=15: the 16 system colors.
//! - 16..=231: the 6x6x6 color cube, with levels `[0, 95, 135, 175, 215, 255]`.
//! - 232..=255: the grayscale ramp, `8 + 10 * i`.
//!
//! More info: <https://www.ditig.com/256-colors-cheat-sheet>

/// Channel levels used by the 6x6x6 color cube (indices 16..=231).
pub const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Index of the first entry of the grayscale ramp.
pub const GRAYSCALE_START: u8 = 232;

#[rustfmt::skip]
#[allow(clippy::unreadable_literal)]
pub const ANSI_COLOR_PALETTE: [u32; 256] = [
    0x000000, 0x800000, 0x008000, 0x808000, 0x000080, 0x800080, 0x008080, 0xc0c0c0,
    0x808080, 0xff0000, 0x00ff00, 0xffff00, 0x0000ff, 0xff00ff, 0x00ffff, 0xffffff,
    0x000000, 0x00005f, 0x000087, 0x0000af, 0x0000d7, 0x0000ff, 0x005f00, 0x005f5f,
    0x005f87, 0x005faf, 0x005fd7, 0x005fff, 0x008700, 0x00875f, 0x008787, 0x0087af,
    0x0087d7, 0x0087ff, 0x00af00, 0x00af5f, 0x00af87, 0x00afaf, 0x00afd7, 0x00afff,
    0x00d700, 0x00d75f, 0x00d787, 0x00d7af, 0x00d7d7, 0x00d7ff, 0x00ff00, 0x00ff5f,
    0x00ff87, 0x00ffaf, 0x00ffd7, 0x00ffff, 0x5f0000, 0x5f005f, 0x5f0087, 0x5f00af,
    0x5f00d7, 0x5f00ff, 0x5f5f00, 0x5f5f5f, 0x5f5f87, 0x5f5faf, 0x5f5fd7, 0x5f5fff,
    0x5f8700, 0x5f875f, 0x5f8787, 0x5f87af, 0x5f87d7, 0x5f87ff, 0x5faf00, 0x5faf5f,
    0x5faf87, 0x5fafaf, 0x5fafd7, 0x5fafff, 0x5fd700, 0x5fd75f, 0x5fd787, 0x5fd7af,
    0x5fd7d7, 0x5fd7ff, 0x5fff00, 0x5fff5f, 0x5fff87, 0x5fffaf, 0x5fffd7, 0x5fffff,
    0x870000, 0x87005f, 0x870087, 0x8700af, 0x8700d7, 0x8700ff, 0x875f00, 0x875f5f,
    0x875f87, 0x875faf, 0x875fd7, 0x875fff, 0x878700, 0x87875f, 0x878787, 0x8787af,
    0x8787d7, 0x8787ff, 0x87af00, 0x87af5f, 0x87af87, 0x87afaf, 0x87afd7, 0x87afff,
    0x87d700, 0x87d75f, 0x87d787, 0x87d7af, 0x87d7d7, 0x87d7ff, 0x87ff00, 0x87ff5f,
    0x87ff87, 0x87ffaf, 0x87ffd7, 0x87ffff, 0xaf0000, 0xaf005f, 0xaf0087, 0xaf00af,
    0xaf00d7, 0xaf00ff, 0xaf5f00, 0xaf5f5f, 0xaf5f87, 0xaf5faf, 0xaf5fd7, 0xaf5fff,
    0xaf8700, 0xaf875f, 0xaf8787, 0xaf87af, 0xaf87d7, 0xaf87ff, 0xafaf00, 0xafaf5f,
    0xafaf87, 0xafafaf, 0xafafd7, 0xafafff, 0xafd700, 0xafd75f, 0xafd787, 0xafd7af,
    0xafd7d7, 0xafd7ff, 0xafff00, 0xafff5f, 0xafff87, 0xafffaf, 0xafffd7, 0xafffff,
    0xd70000, 0xd7005f, 0xd70087, 0xd700af, 0xd700d7, 0xd700ff, 0xd75f00, 0xd75f5f,
    0xd75f87, 0xd75faf, 0xd75fd7, 0xd75fff, 0xd78700, 0xd7875f, 0xd78787, 0xd787af,
    0xd787d7, 0xd787ff, 0xd7af00, 0xd7af5f, 0xd7af87, 0xd7afaf, 0xd7afd7, 0xd7afff,
    0xd7d700, 0xd7d75f, 0xd7d787, 0xd7d7af, 0xd7d7d7, 0xd7d7ff, 0xd7ff00, 0xd7ff5f,
    0xd7ff87, 0xd7ffaf, 0xd7ffd7, 0xd7ffff, 0xff0000, 0xff005f, 0xff0087, 0xff00af,
    0xff00d7, 0xff00ff, 0xff5f00, 0xff5f5f, 0xff5f87, 0xff5faf, 0xff5fd7, 0xff5fff,
    0xff8700, 0xff875f, 0xff8787, 0xff87af, 0xff87d7, 0xff87ff, 0xffaf00, 0xffaf5f,
    0xffaf87, 0xffafaf, 0xffafd7, 0xffafff, 0xffd700, 0xffd75f, 0xffd787, 0xffd7af,
    0xffd7d7, 0xffd7ff, 0xffff00, 0xffff5f, 0xffff87, 0xffffaf, 0xffffd7, 0xffffff,
    0x080808, 0x121212, 0x1c1c1c, 0x262626, 0x303030, 0x3a3a3a, 0x444444, 0x4e4e4e,
    0x585858, 0x626262, 0x6c6c6c, 0x767676, 0x808080, 0x8a8a8a, 0x949494, 0x9e9e9e,
    0xa8a8a8, 0xb2b2b2, 0xbcbcbc, 0xc6c6c6, 0xd0d0d0, 0xdadada, 0xe4e4e4, 0xeeeeee,
];

#[rustfmt::skip]
pub const ANSI_COLOR_NAMES: [&str; 256] = [
    "Black", "Maroon", "Green", "Olive", "Navy", "Purple", "Teal", "Silver", "Grey",
    "Red", "Lime", "Yellow", "Blue", "Fuchsia", "Aqua", "White",
    "Grey0", "NavyBlue", "DarkBlue", "Blue3", "Blue3", "Blue1", "DarkGreen",
    "DeepSkyBlue4", "DeepSkyBlue4", "DeepSkyBlue4", "DodgerBlue3", "DodgerBlue2",
    "Green4", "SpringGreen4", "Turquoise4", "DeepSkyBlue3", "DeepSkyBlue3", "DodgerBlue1",
    "Green3", "SpringGreen3", "DarkCyan", "LightSeaGreen", "DeepSkyBlue2", "DeepSkyBlue1",
    "Green3", "SpringGreen3", "SpringGreen2", "Cyan3", "DarkTurquoise", "Turquoise2",
    "Green1", "SpringGreen2", "SpringGreen1", "MediumSpringGreen", "Cyan2", "Cyan1",
    "DarkRed", "DeepPink4", "Purple4", "Purple4", "Purple3", "BlueViolet", "Orange4",
    "Grey37", "MediumPurple4", "SlateBlue3", "SlateBlue3", "RoyalBlue1", "Chartreuse4",
    "DarkSeaGreen4", "PaleTurquoise4", "SteelBlue", "SteelBlue3", "CornflowerBlue",
    "Chartreuse3", "DarkSeaGreen4", "CadetBlue", "CadetBlue", "SkyBlue3", "SteelBlue1",
    "Chartreuse3", "PaleGreen3", "SeaGreen3", "Aquamarine3", "MediumTurquoise",
    "SteelBlue1", "Chartreuse2", "SeaGreen2", "SeaGreen1", "SeaGreen1", "Aquamarine1",
    "DarkSlateGray2",
    "DarkRed", "DeepPink4", "DarkMagenta", "DarkMagenta", "DarkViolet", "Purple",
    "Orange4", "LightPink4", "Plum4", "MediumPurple3", "MediumPurple3", "SlateBlue1",
    "Yellow4", "Wheat4", "Grey53", "LightSlateGrey", "MediumPurple", "LightSlateBlue",
    "Yellow4", "DarkOliveGreen3", "DarkSeaGreen", "LightSkyBlue3", "LightSkyBlue3",
    "SkyBlue2", "Chartreuse2", "DarkOliveGreen3", "PaleGreen3", "DarkSeaGreen3",
    "DarkSlateGray3", "SkyBlue1", "Chartreuse1", "LightGreen", "LightGreen", "PaleGreen1",
    "Aquamarine1", "DarkSlateGray1",
    "Red3", "DeepPink4", "MediumVioletRed", "Magenta3", "DarkViolet", "Purple",
    "DarkOrange3", "IndianRed", "HotPink3", "MediumOrchid3", "MediumOrchid",
    "MediumPurple2", "DarkGoldenrod", "LightSalmon3", "RosyBrown", "Grey63",
    "MediumPurple2", "MediumPurple1", "Gold3", "DarkKhaki", "NavajoWhite3", "Grey69",
    "LightSteelBlue3", "LightSteelBlue", "Yellow3", "DarkOliveGreen3", "DarkSeaGreen3",
    "DarkSeaGreen2", "LightCyan3", "LightSkyBlue1", "GreenYellow", "DarkOliveGreen2",
    "PaleGreen1", "DarkSeaGreen2", "DarkSeaGreen1", "PaleTurquoise1",
    "Red3", "DeepPink3", "DeepPink3", "Magenta3", "Magenta3", "Magenta2", "DarkOrange3",
    "IndianRed", "HotPink3", "HotPink2", "Orchid", "MediumOrchid1", "Orange3",
    "LightSalmon3", "LightPink3", "Pink3", "Plum3", "Violet", "Gold3", "LightGoldenrod3",
    "Tan", "MistyRose3", "Thistle3", "Plum2", "Yellow3", "Khaki3", "LightGoldenrod2",
    "LightYellow3", "Grey84", "LightSteelBlue1", "Yellow2", "DarkOliveGreen1",
    "DarkOliveGreen1", "DarkSeaGreen1", "Honeydew2", "LightCyan1",
    "Red1", "DeepPink2", "DeepPink1", "DeepPink1", "Magenta2", "Magenta1", "OrangeRed1",
    "IndianRed1", "IndianRed1", "HotPink", "HotPink", "MediumOrchid1", "DarkOrange",
    "Salmon1", "LightCoral", "PaleVioletRed1", "Orchid2", "Orchid1", "Orange1",
    "SandyBrown", "LightSalmon1", "LightPink1", "Pink1", "Plum1", "Gold1",
    "LightGoldenrod2", "LightGoldenrod2", "NavajoWhite1", "MistyRose1", "Thistle1",
    "Yellow1", "LightGoldenrod1", "Khaki1", "Wheat1", "Cornsilk1", "Grey100",
    "Grey3", "Grey7", "Grey11", "Grey15", "Grey19", "Grey23", "Grey27", "Grey30",
    "Grey35", "Grey39", "Grey42", "Grey46", "Grey50", "Grey54", "Grey58", "Grey62",
    "Grey66", "Grey70", "Grey74", "Grey78", "Grey82", "Grey85", "Grey89", "Grey93",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_palette_endpoints() {
        assert_eq2!(ANSI_COLOR_NAMES[0], "Black");
        assert_eq2!(ANSI_COLOR_NAMES[15], "White");
        assert_eq2!(ANSI_COLOR_NAMES[255], "Grey93");
        assert_eq2!(ANSI_COLOR_PALETTE[255], 0x00ee_eeee);
    }

    #[test]
    fn test_cube_entries_match_levels() {
        for (r, red) in CUBE_LEVELS.iter().enumerate() {
            for (g, green) in CUBE_LEVELS.iter().enumerate() {
                for (b, blue) in CUBE_LEVELS.iter().enumerate() {
                    let index = 16 + r * 36 + g * 6 + b;
                    let expected = (u32::from(*red) << 16)
                        | (u32::from(*green) << 8)
                        | u32::from(*blue);
                    assert_eq2!(ANSI_COLOR_PALETTE[index], expected);
                }
            }
        }
    }

    #[test]
    fn test_grayscale_ramp() {
        let start = usize::from(GRAYSCALE_START);
        for step in 0..24_u32 {
            let level = 8 + 10 * step;
            let expected = (level << 16) | (level << 8) | level;
            assert_eq2!(ANSI_COLOR_PALETTE[start + step as usize], expected);
        }
    }
}
