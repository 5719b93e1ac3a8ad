// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal cells. Columns and rows are 0 based, `(0, 0)` is the top left corner.

use std::fmt::{Debug, Formatter, Result};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub col_width: u16,
    pub row_height: u16,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub col_index: u16,
    pub row_index: u16,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Rect {
    pub origin: Pos,
    pub size: Size,
}

impl Size {
    #[must_use]
    pub const fn new(col_width: u16, row_height: u16) -> Self {
        Self {
            col_width,
            row_height,
        }
    }
}

impl Pos {
    #[must_use]
    pub const fn new(col_index: u16, row_index: u16) -> Self {
        Self {
            col_index,
            row_index,
        }
    }
}

impl Rect {
    #[must_use]
    pub const fn new(origin: Pos, size: Size) -> Self { Self { origin, size } }

    /// Index of the first column to the right of this rect.
    #[must_use]
    pub fn right(self) -> u16 { self.origin.col_index.saturating_add(self.size.col_width) }

    /// Index of the first row below this rect.
    #[must_use]
    pub fn bottom(self) -> u16 {
        self.origin.row_index.saturating_add(self.size.row_height)
    }
}

/// `crossterm::terminal::size()` returns `(columns, rows)`.
impl From<(u16, u16)> for Size {
    fn from((col_width, row_height): (u16, u16)) -> Self { Self::new(col_width, row_height) }
}

impl Debug for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[width:{}, height:{}]", self.col_width, self.row_height)
    }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[col:{}, row:{}]", self.col_index, self.row_index)
    }
}
