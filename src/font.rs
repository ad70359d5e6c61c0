//! Fixed 5x8 bitmap font
//!
//! One glyph per printable ASCII code (0x20..=0x7E). Each glyph is five column
//! bytes, left to right; bit 0 of a column is the top row. A sixth, blank
//! column is added by the text renderer as spacing.
//!
//! ## Example
//!
//! ```
//! use st77xx::font::{glyph, FALLBACK_GLYPH};
//!
//! assert_eq!(glyph('0'), &[0x3E, 0x51, 0x49, 0x45, 0x3E]);
//! assert_eq!(glyph('\u{e9}'), &FALLBACK_GLYPH);
//! ```

/// Glyph width in pixels, without spacing
pub const GLYPH_WIDTH: usize = 5;

/// Glyph height in pixels
pub const GLYPH_HEIGHT: usize = 8;

/// Horizontal advance per character (glyph plus one blank column)
pub const CELL_WIDTH: u16 = 6;

/// Vertical advance per text line
pub const CELL_HEIGHT: u16 = 8;

/// First character code in [`FONT`]
pub const FIRST_CHAR: u8 = 0x20;

/// Last character code in [`FONT`]
pub const LAST_CHAR: u8 = 0x7E;

/// Hollow box drawn for characters outside the table
pub const FALLBACK_GLYPH: [u8; GLYPH_WIDTH] = [0x7F, 0x41, 0x41, 0x41, 0x7F];

/// Glyph table, indexed by `code - FIRST_CHAR`
pub static FONT: [[u8; GLYPH_WIDTH]; (LAST_CHAR - FIRST_CHAR + 1) as usize] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // '!'
    [0x00, 0x07, 0x00, 0x07, 0x00], // '"'
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // '#'
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // '$'
    [0x23, 0x13, 0x08, 0x64, 0x62], // '%'
    [0x36, 0x49, 0x55, 0x22, 0x50], // '&'
    [0x00, 0x05, 0x03, 0x00, 0x00], // "'"
    [0x00, 0x1C, 0x22, 0x41, 0x00], // '('
    [0x00, 0x41, 0x22, 0x1C, 0x00], // ')'
    [0x14, 0x08, 0x3E, 0x08, 0x14], // '*'
    [0x08, 0x08, 0x3E, 0x08, 0x08], // '+'
    [0x00, 0x50, 0x30, 0x00, 0x00], // ','
    [0x08, 0x08, 0x08, 0x08, 0x08], // '-'
    [0x00, 0x60, 0x60, 0x00, 0x00], // '.'
    [0x20, 0x10, 0x08, 0x04, 0x02], // '/'
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // '0'
    [0x00, 0x42, 0x7F, 0x40, 0x00], // '1'
    [0x42, 0x61, 0x51, 0x49, 0x46], // '2'
    [0x21, 0x41, 0x45, 0x4B, 0x31], // '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10], // '4'
    [0x27, 0x45, 0x45, 0x45, 0x39], // '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // '6'
    [0x01, 0x71, 0x09, 0x05, 0x03], // '7'
    [0x36, 0x49, 0x49, 0x49, 0x36], // '8'
    [0x06, 0x49, 0x49, 0x29, 0x1E], // '9'
    [0x00, 0x36, 0x36, 0x00, 0x00], // ':'
    [0x00, 0x56, 0x36, 0x00, 0x00], // ';'
    [0x08, 0x14, 0x22, 0x41, 0x00], // '<'
    [0x14, 0x14, 0x14, 0x14, 0x14], // '='
    [0x00, 0x41, 0x22, 0x14, 0x08], // '>'
    [0x02, 0x01, 0x51, 0x09, 0x06], // '?'
    [0x32, 0x49, 0x79, 0x41, 0x3E], // '@'
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // 'A'
    [0x7F, 0x49, 0x49, 0x49, 0x36], // 'B'
    [0x3E, 0x41, 0x41, 0x41, 0x22], // 'C'
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // 'D'
    [0x7F, 0x49, 0x49, 0x49, 0x41], // 'E'
    [0x7F, 0x09, 0x09, 0x09, 0x01], // 'F'
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // 'G'
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // 'H'
    [0x00, 0x41, 0x7F, 0x41, 0x00], // 'I'
    [0x20, 0x40, 0x41, 0x3F, 0x01], // 'J'
    [0x7F, 0x08, 0x14, 0x22, 0x41], // 'K'
    [0x7F, 0x40, 0x40, 0x40, 0x40], // 'L'
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // 'M'
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // 'N'
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // 'O'
    [0x7F, 0x09, 0x09, 0x09, 0x06], // 'P'
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // 'Q'
    [0x7F, 0x09, 0x19, 0x29, 0x46], // 'R'
    [0x46, 0x49, 0x49, 0x49, 0x31], // 'S'
    [0x01, 0x01, 0x7F, 0x01, 0x01], // 'T'
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // 'U'
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // 'V'
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // 'W'
    [0x63, 0x14, 0x08, 0x14, 0x63], // 'X'
    [0x07, 0x08, 0x70, 0x08, 0x07], // 'Y'
    [0x61, 0x51, 0x49, 0x45, 0x43], // 'Z'
    [0x00, 0x7F, 0x41, 0x41, 0x00], // '['
    [0x02, 0x04, 0x08, 0x10, 0x20], // '\\'
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ']'
    [0x04, 0x02, 0x01, 0x02, 0x04], // '^'
    [0x40, 0x40, 0x40, 0x40, 0x40], // '_'
    [0x00, 0x01, 0x02, 0x04, 0x00], // '`'
    [0x20, 0x54, 0x54, 0x54, 0x78], // 'a'
    [0x7F, 0x48, 0x44, 0x44, 0x38], // 'b'
    [0x38, 0x44, 0x44, 0x44, 0x20], // 'c'
    [0x38, 0x44, 0x44, 0x48, 0x7F], // 'd'
    [0x38, 0x54, 0x54, 0x54, 0x18], // 'e'
    [0x08, 0x7E, 0x09, 0x01, 0x02], // 'f'
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // 'g'
    [0x7F, 0x08, 0x04, 0x04, 0x78], // 'h'
    [0x00, 0x44, 0x7D, 0x40, 0x00], // 'i'
    [0x20, 0x40, 0x44, 0x3D, 0x00], // 'j'
    [0x7F, 0x10, 0x28, 0x44, 0x00], // 'k'
    [0x00, 0x41, 0x7F, 0x40, 0x00], // 'l'
    [0x7C, 0x04, 0x18, 0x04, 0x78], // 'm'
    [0x7C, 0x08, 0x04, 0x04, 0x78], // 'n'
    [0x38, 0x44, 0x44, 0x44, 0x38], // 'o'
    [0x7C, 0x14, 0x14, 0x14, 0x08], // 'p'
    [0x08, 0x14, 0x14, 0x18, 0x7C], // 'q'
    [0x7C, 0x08, 0x04, 0x04, 0x08], // 'r'
    [0x48, 0x54, 0x54, 0x54, 0x20], // 's'
    [0x04, 0x3F, 0x44, 0x40, 0x20], // 't'
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // 'u'
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // 'v'
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // 'w'
    [0x44, 0x28, 0x10, 0x28, 0x44], // 'x'
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // 'y'
    [0x44, 0x64, 0x54, 0x4C, 0x44], // 'z'
    [0x00, 0x08, 0x36, 0x41, 0x00], // '{'
    [0x00, 0x00, 0x7F, 0x00, 0x00], // '|'
    [0x00, 0x41, 0x36, 0x08, 0x00], // '}'
    [0x08, 0x04, 0x08, 0x10, 0x08], // '~'
];

/// Glyph columns for `c`
pub fn glyph(c: char) -> &'static [u8; GLYPH_WIDTH] {
    u8::try_from(c)
        .ok()
        .filter(|code| (FIRST_CHAR..=LAST_CHAR).contains(code))
        .and_then(|code| FONT.get(usize::from(code - FIRST_CHAR)))
        .unwrap_or(&FALLBACK_GLYPH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_printable_ascii() {
        assert_eq!(FONT.len(), 95);
        assert_eq!(glyph(' '), &[0x00; GLYPH_WIDTH]);
        assert_eq!(glyph('A'), &[0x7E, 0x11, 0x11, 0x11, 0x7E]);
        assert_eq!(glyph('~'), &FONT[FONT.len() - 1]);
    }

    #[test]
    fn test_printable_glyphs_are_not_blank_except_space() {
        for code in (FIRST_CHAR + 1)..=LAST_CHAR {
            let g = glyph(char::from(code));
            assert!(g.iter().any(|&col| col != 0), "blank glyph for {code:#04x}");
        }
    }

    #[test]
    fn test_glyphs_leave_bottom_row_clear() {
        // Row 7 is the inter-line gap for every glyph in this font
        assert!(FONT.iter().flatten().all(|col| col & 0x80 == 0));
    }

    #[test]
    fn test_unprintable_characters_use_fallback() {
        assert_eq!(glyph('\n'), &FALLBACK_GLYPH);
        assert_eq!(glyph('\u{7f}'), &FALLBACK_GLYPH);
        assert_eq!(glyph('\u{e9}'), &FALLBACK_GLYPH);
        assert_eq!(glyph('\u{1F600}'), &FALLBACK_GLYPH);
    }
}
