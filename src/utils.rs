/// Epochs run when `--epochs` is not given
pub const DEFAULT_EPOCHS: u64 = 111;

/// Glyph for a white cell
pub const WHITE_GLYPH: char = ' ';
/// Glyph for a black cell
pub const BLACK_GLYPH: char = '.';

/// Width of the `==========` rule under each epoch header
pub const RULE_WIDTH: usize = 10;

/// ANSI clear screen + cursor home
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Map a cell to its glyph
#[inline]
pub const fn cell_glyph(black: bool) -> char {
    if black {
        BLACK_GLYPH
    } else {
        WHITE_GLYPH
    }
}
