//! Glyph themes for drawing table borders

use std::str::FromStr;

use winnow::combinator::repeat;
use winnow::token::any;
use winnow::ModalResult;
use winnow::Parser;

use crate::error::TableError;

/// Number of glyphs in a theme
const GLYPH_COUNT: usize = 11;

/// The eleven glyphs a table border is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub top_junction: char,    // ┬
    pub bottom_junction: char, // ┴
    pub left_junction: char,   // ├
    pub right_junction: char,  // ┤
    pub cross: char,
}

impl BorderChars {
    pub const ASCII: BorderChars = BorderChars::from_glyphs([
        '-', '|', '+', '+', '+', '+', '+', '+', '+', '+', '+',
    ]);

    pub const BOX: BorderChars = BorderChars::from_glyphs([
        '─', '│', '┌', '┐', '└', '┘', '┬', '┴', '├', '┤', '┼',
    ]);

    pub const DOUBLE_BOX: BorderChars = BorderChars::from_glyphs([
        '═', '║', '╔', '╗', '╚', '╝', '╦', '╩', '╠', '╣', '╬',
    ]);

    /// Build a theme from glyphs in field order
    pub const fn from_glyphs(g: [char; GLYPH_COUNT]) -> Self {
        Self {
            horizontal: g[0],
            vertical: g[1],
            top_left: g[2],
            top_right: g[3],
            bottom_left: g[4],
            bottom_right: g[5],
            top_junction: g[6],
            bottom_junction: g[7],
            left_junction: g[8],
            right_junction: g[9],
            cross: g[10],
        }
    }
}

impl Default for BorderChars {
    fn default() -> Self {
        Self::BOX
    }
}

/// Exactly eleven glyphs, nothing trailing
fn w_glyphs(input: &mut &str) -> ModalResult<Vec<char>> {
    repeat(GLYPH_COUNT, any).parse_next(input)
}

impl FromStr for BorderChars {
    type Err = TableError;

    /// Parse a theme written as its glyphs in field order, e.g. `"─│┌┐└┘┬┴├┤┼"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let glyphs = w_glyphs.parse(s).map_err(|_| {
            TableError::InvalidTheme(format!(
                "expected {} glyphs, found {}",
                GLYPH_COUNT,
                s.chars().count()
            ))
        })?;

        let mut g = [' '; GLYPH_COUNT];
        g.copy_from_slice(&glyphs);
        Ok(Self::from_glyphs(g))
    }
}
