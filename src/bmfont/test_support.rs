/// Synthetic BMFont streams and page images for tests.

use std::io::Cursor;

use image::{ImageBuffer, ImageFormat, Rgba};

use crate::font::pixels::MemorySource;
use crate::font::BitmapFont;

use super::error::LoadError;
use super::options::LoadOptions;
use super::types::Glyph;

pub struct SampleFont {
    pub magic: [u8; 3],
    pub version: u8,
    /// Kind bytes written for info, common, pages, chars
    pub block_kinds: [u8; 4],
    pub line_height: u16,
    pub base: u16,
    pub texture_width: u16,
    pub texture_height: u16,
    pub pages: Vec<(String, (u32, u32))>,
    pub glyphs: Vec<Glyph>,
    pub trailing: Vec<u8>,
}

impl Default for SampleFont {
    fn default() -> Self {
        Self {
            magic: *b"BMF",
            version: 3,
            block_kinds: [1, 2, 3, 4],
            line_height: 16,
            base: 12,
            texture_width: 256,
            texture_height: 256,
            pages: vec![("font.png".to_string(), (256, 256))],
            glyphs: vec![Glyph {
                id: 65,
                x: 0,
                y: 0,
                width: 10,
                height: 14,
                x_offset: 0,
                y_offset: 0,
                x_advance: 11,
                page: 0,
            }],
            trailing: Vec::new(),
        }
    }
}

pub fn block(kind: u8, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![kind];
    data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    data.extend_from_slice(payload);
    data
}

pub fn info_payload(font_name: &str) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&32i16.to_le_bytes());
    data.push(0b1100_0000); // smooth, unicode
    data.push(0); // charset
    data.extend_from_slice(&100u16.to_le_bytes());
    data.push(1); // aa
    data.extend_from_slice(&[0, 0, 0, 0]); // padding
    data.extend_from_slice(&[1, 1]); // spacing
    data.push(0); // outline
    data.extend_from_slice(font_name.as_bytes());
    data.push(0);
    data
}

pub fn common_payload(line_height: u16, base: u16, width: u16, height: u16, pages: u16) -> Vec<u8> {
    let mut data = Vec::new();
    for value in &[line_height, base, width, height, pages] {
        data.extend_from_slice(&value.to_le_bytes());
    }
    // bitField, alpha, red, green, blue
    data.extend_from_slice(&[0, 1, 0, 0, 0]);
    data
}

pub fn pages_payload<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<u8> {
    let mut data = Vec::new();
    for name in names {
        data.extend_from_slice(name.as_bytes());
        data.push(0);
    }
    data
}

pub fn char_record(glyph: &Glyph) -> Vec<u8> {
    let mut data = Vec::with_capacity(20);
    data.extend_from_slice(&glyph.id.to_le_bytes());
    data.extend_from_slice(&glyph.x.to_le_bytes());
    data.extend_from_slice(&glyph.y.to_le_bytes());
    data.extend_from_slice(&glyph.width.to_le_bytes());
    data.extend_from_slice(&glyph.height.to_le_bytes());
    data.extend_from_slice(&glyph.x_offset.to_le_bytes());
    data.extend_from_slice(&glyph.y_offset.to_le_bytes());
    data.extend_from_slice(&glyph.x_advance.to_le_bytes());
    data.push(glyph.page);
    data.push(15); // all channels
    data
}

pub fn chars_payload(glyphs: &[Glyph]) -> Vec<u8> {
    glyphs.iter().flat_map(char_record).collect()
}

/// Opaque white RGBA PNG.
pub fn png_page(width: u32, height: u32) -> Vec<u8> {
    let image: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_pixel(width, height, Rgba([0xFF, 0xFF, 0xFF, 0xFF]));
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .expect("png encode");
    cursor.into_inner()
}

impl SampleFont {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&self.magic);
        data.push(self.version);
        data.extend(block(self.block_kinds[0], &info_payload("Sample Sans")));
        data.extend(block(
            self.block_kinds[1],
            &common_payload(
                self.line_height,
                self.base,
                self.texture_width,
                self.texture_height,
                self.pages.len() as u16,
            ),
        ));
        data.extend(block(
            self.block_kinds[2],
            &pages_payload(self.pages.iter().map(|(name, _)| name.as_str())),
        ));
        data.extend(block(self.block_kinds[3], &chars_payload(&self.glyphs)));
        data.extend_from_slice(&self.trailing);
        data
    }

    pub fn page_source(&self) -> MemorySource {
        let mut source = MemorySource::new();
        for (name, (width, height)) in &self.pages {
            source.insert(name.clone(), png_page(*width, *height));
        }
        source
    }
}

pub fn load_sample_font(sample: &SampleFont) -> Result<BitmapFont, LoadError> {
    super::load_font_with(
        Cursor::new(sample.to_bytes()),
        &sample.page_source(),
        &LoadOptions::default(),
    )
}
