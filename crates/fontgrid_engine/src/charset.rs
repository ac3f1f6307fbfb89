//! The fixed character set a font table covers
//!
//! Printable ASCII from space (labelled `sp`) to `~`, in code point order.
//! The position in this list is the glyph index everywhere else.

/// Number of glyphs in a font table
pub const GLYPH_COUNT: usize = 95;

const FIRST_CHAR: char = ' ';
const LAST_CHAR: char = '~';

/// Display labels, in table order
pub const LABELS: [&str; GLYPH_COUNT] = [
    "sp", "!", "\"", "#", "$", "%", "&", "'", "(", ")", "*", "+", ",", "-", ".", "/", "0", "1", "2", "3", "4", "5", "6", "7",
    "8", "9", ":", ";", "<", "=", ">", "?", "@", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O",
    "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "[", "\\", "]", "^", "_", "`", "a", "b", "c", "d", "e", "f", "g",
    "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "{", "|", "}", "~",
];

/// Label of the glyph at `index`
pub fn label(index: usize) -> Option<&'static str> {
    LABELS.get(index).copied()
}

/// Glyph index of a character, `None` outside the charset
pub fn glyph_index(ch: char) -> Option<usize> {
    if (FIRST_CHAR..=LAST_CHAR).contains(&ch) {
        Some(ch as usize - FIRST_CHAR as usize)
    } else {
        None
    }
}

/// Character drawn by the glyph at `index`
pub fn glyph_char(index: usize) -> Option<char> {
    if index < GLYPH_COUNT {
        char::from_u32(FIRST_CHAR as u32 + index as u32)
    } else {
        None
    }
}
