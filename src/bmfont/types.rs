/// BMFont Data Types

// ========== File Header ==========

pub const BMF_MAGIC: [u8; 3] = *b"BMF";
pub const BMF_VERSION: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub magic: [u8; 3],
    pub version: u8,
}

impl FileHeader {
    pub fn is_bmf(&self) -> bool {
        self.magic == BMF_MAGIC
    }
}

// ========== Info Block ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FontStyle {
    pub smooth: bool,
    pub unicode: bool,
    pub italic: bool,
    pub bold: bool,
    pub fixed_height: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontInfo {
    pub font_size: i16,
    pub style: FontStyle,
    pub char_set: u8,
    /// Font height stretch in percent, 100 means none
    pub stretch_h: u16,
    pub super_sampling: u8,
    /// up, right, down, left
    pub padding: [u8; 4],
    /// horizontal, vertical
    pub spacing: [u8; 2],
    pub outline: u8,
    pub font_name: String,
}

// ========== Common Block ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FontMetrics {
    pub line_height: u16,
    /// Distance from the top of a line to the baseline
    pub base: u16,
    pub texture_width: u16,
    pub texture_height: u16,
}

// ========== Pages Block ==========

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: u32,
    pub file_name: String,
}

// ========== Chars Block ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Glyph {
    pub id: u32,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub x_offset: i16,
    pub y_offset: i16,
    pub x_advance: i16,
    pub page: u8,
}

impl Glyph {
    /// The code point as a `char`, if it is a valid scalar value.
    pub fn as_char(&self) -> Option<char> {
        std::char::from_u32(self.id)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_as_char() {
        let a = Glyph {
            id: 'A' as u32,
            ..Glyph::default()
        };
        assert_eq!(a.as_char(), Some('A'));

        let surrogate = Glyph {
            id: 0xD800,
            ..Glyph::default()
        };
        assert_eq!(surrogate.as_char(), None);
    }

    #[test]
    fn test_glyph_is_empty() {
        let space = Glyph {
            id: 32,
            width: 0,
            height: 0,
            x_advance: 4,
            ..Glyph::default()
        };
        assert!(space.is_empty());

        let a = Glyph {
            id: 65,
            width: 10,
            height: 14,
            ..Glyph::default()
        };
        assert!(!a.is_empty());
    }
}
