pub mod pixels;
pub mod texture;

use itertools::Itertools;
use nohash_hasher::IntMap;

use crate::bmfont::types::{FileHeader, FontInfo, FontMetrics, Glyph, Page};

use self::pixels::PixelBuffer;

/// A fully loaded bitmap font.
///
/// Only the loader can build one, and it does so after every block decoded
/// successfully. Nothing mutates it afterwards, so a shared reference can be
/// handed to any number of readers. Not `Clone`; the page texture lives in the
/// single `LazyTexture` that takes ownership of the font.
#[derive(Debug, PartialEq)]
pub struct BitmapFont {
    header: FileHeader,
    info: Option<FontInfo>,
    metrics: FontMetrics,
    pages: Vec<Page>,
    glyphs: IntMap<u32, Glyph>,
    pixels: PixelBuffer,
}

impl BitmapFont {
    pub(crate) fn from_parts(
        header: FileHeader,
        info: Option<FontInfo>,
        metrics: FontMetrics,
        pages: Vec<Page>,
        glyphs: IntMap<u32, Glyph>,
        pixels: PixelBuffer,
    ) -> Self {
        Self {
            header,
            info,
            metrics,
            pages,
            glyphs,
            pixels,
        }
    }

    pub fn glyph(&self, code_point: u32) -> Option<&Glyph> {
        self.glyphs.get(&code_point)
    }

    pub fn glyph_for_char(&self, c: char) -> Option<&Glyph> {
        self.glyph(c as u32)
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// All code points with a glyph, ascending.
    pub fn code_points(&self) -> Vec<u32> {
        self.glyphs.keys().copied().sorted().collect_vec()
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    pub fn info(&self) -> Option<&FontInfo> {
        self.info.as_ref()
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Pages in file order; a page's id is its index.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, id: u32) -> Option<&Page> {
        self.pages.get(id as usize)
    }

    /// Pixels of the loaded page. With several pages this is the last one.
    pub fn pixel_buffer(&self) -> &PixelBuffer {
        &self.pixels
    }
}
