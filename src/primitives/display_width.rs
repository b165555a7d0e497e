//! Display width measurement
//!
//! Columns are measured the way a terminal renders them, not by byte or char
//! index: a tab advances to the next tab stop, wide glyphs (CJK, most emoji)
//! take two cells, and combining sequences are measured as one grapheme
//! cluster.
//!
//! Display columns are 1-based: the first cell of a line is column 1.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Tab size used when the host doesn't configure one
pub const DEFAULT_TAB_SIZE: usize = 8;

/// Width of a grapheme cluster placed at 0-based cell `column`
///
/// The column only matters for tabs, which stretch to the next tab stop.
pub fn grapheme_advance(grapheme: &str, column: usize, tab_size: usize) -> usize {
    if grapheme == "\t" {
        if tab_size == 0 {
            return 0;
        }
        return tab_size - (column % tab_size);
    }
    UnicodeWidthStr::width(grapheme)
}

/// Total display width of a line
pub fn str_display_width(line: &str, tab_size: usize) -> usize {
    line.graphemes(true)
        .fold(0, |column, g| column + grapheme_advance(g, column, tab_size))
}

/// 1-based display column at which the char at `char_offset` starts
///
/// An offset inside a grapheme cluster maps to the start of that cluster.
/// An offset at or past the end of the line maps to `width + 1`, the column
/// where the next character would be drawn.
pub fn display_column(line: &str, char_offset: usize, tab_size: usize) -> usize {
    let mut column = 0;
    let mut chars_seen = 0;

    for g in line.graphemes(true) {
        let len = g.chars().count();
        if chars_seen + len > char_offset {
            break;
        }
        column += grapheme_advance(g, column, tab_size);
        chars_seen += len;
    }

    column + 1
}

/// Strip the line terminator (`\n` or `\r\n`) from a line
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
