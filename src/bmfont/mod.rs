/// Binary BMFont Loader
///
/// Reads AngelCode binary font descriptors (version 3): a 4 byte header
/// followed by the info, common, pages and chars blocks, always in that order.
/// The page image named by the pages block is decoded while the block is read,
/// and the resulting `BitmapFont` is only built once every stage succeeded.

pub mod block;
pub mod chars;
pub mod common;
pub mod error;
pub mod info;
pub mod options;
pub mod pages;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use crate::font::pixels::{load_page_pixels, DirectorySource, PageSource, PixelBuffer};
use crate::font::BitmapFont;
use crate::io::reader::FieldReader;

use block::{read_block, read_file_header, Block, BlockKind};
use error::{FontError, LoadError};
use options::{BlockOrder, LoadOptions, TextureSizeCheck};
use types::{FileHeader, FontMetrics, BMF_MAGIC, BMF_VERSION};

/// Load a font from `source`, resolving page images against `base_path`.
pub fn load_font<R: Read>(source: R, base_path: impl AsRef<Path>) -> Result<BitmapFont, LoadError> {
    load_font_with(
        source,
        &DirectorySource::new(base_path),
        &LoadOptions::default(),
    )
}

pub fn load_font_with<R, S>(
    mut source: R,
    pages: &S,
    options: &LoadOptions,
) -> Result<BitmapFont, LoadError>
where
    R: Read,
    S: PageSource + ?Sized,
{
    let mut data = Vec::new();
    source
        .read_to_end(&mut data)
        .map_err(|source| FontError::Io { source })?;
    Ok(parse_bmfont(&data, pages, options)?)
}

pub fn load_font_from_bytes<S>(
    data: &[u8],
    pages: &S,
    options: &LoadOptions,
) -> Result<BitmapFont, LoadError>
where
    S: PageSource + ?Sized,
{
    Ok(parse_bmfont(data, pages, options)?)
}

/// Decode a whole font file. Blocks are consumed strictly in file order since
/// the pages block has to be read before glyph page references mean anything.
pub fn parse_bmfont<S>(
    data: &[u8],
    page_source: &S,
    options: &LoadOptions,
) -> Result<BitmapFont, FontError>
where
    S: PageSource + ?Sized,
{
    debug!("bmfont: parsing {} bytes", data.len());
    let mut reader = FieldReader::new(data);

    let header = read_file_header(&mut reader)?;
    check_header(&header, options)?;

    let info_block = next_block(&mut reader, BlockKind::Info, options)?;
    let info = info::parse_info_block(&info_block.payload);

    let common_block = next_block(&mut reader, BlockKind::Common, options)?;
    let metrics = common::parse_common_block(&common_block.payload)?;

    let pages_block = next_block(&mut reader, BlockKind::Pages, options)?;
    let mut pixels: Option<PixelBuffer> = None;
    let pages = pages::parse_pages_block(&pages_block.payload, |page| {
        if pixels.is_some() {
            // Only one page buffer is kept.
            warn!(
                "page {} ('{}') replaces the previously loaded page pixels",
                page.id, page.file_name
            );
        }
        pixels = Some(load_page_pixels(page_source, &page.file_name)?);
        Ok(())
    })?;
    let pixels = pixels.ok_or_else(|| FontError::malformed("pages", "no page file names"))?;
    check_texture_size(&metrics, &pixels, options)?;

    let chars_block = next_block(&mut reader, BlockKind::Chars, options)?;
    let glyphs = chars::parse_chars_block(&chars_block.payload)?;
    if let Some(glyph) = glyphs.values().find(|g| g.page as usize >= pages.len()) {
        return Err(FontError::malformed(
            "chars",
            format!(
                "glyph {} references page {} but only {} page(s) exist",
                glyph.id,
                glyph.page,
                pages.len()
            ),
        ));
    }

    if !reader.is_eof() {
        // Kerning pairs, when present, are not used.
        debug!(
            "bmfont: {} bytes after the chars block left unread",
            reader.remaining()
        );
    }

    debug!(
        "bmfont: loaded {} glyphs on {} page(s), lineHeight={}",
        glyphs.len(),
        pages.len(),
        metrics.line_height
    );

    Ok(BitmapFont::from_parts(
        header, info, metrics, pages, glyphs, pixels,
    ))
}

fn check_header(header: &FileHeader, options: &LoadOptions) -> Result<(), FontError> {
    if options.block_order != BlockOrder::Strict {
        return Ok(());
    }
    if header.magic != BMF_MAGIC {
        return Err(FontError::malformed(
            "header",
            format!("unexpected file identifier {:02X?}", header.magic),
        ));
    }
    if header.version != BMF_VERSION {
        return Err(FontError::malformed(
            "header",
            format!("unsupported version {}", header.version),
        ));
    }
    Ok(())
}

fn next_block(
    reader: &mut FieldReader,
    expected: BlockKind,
    options: &LoadOptions,
) -> Result<Block, FontError> {
    let block = read_block(reader)?;
    if options.block_order == BlockOrder::Strict && block.kind != expected as u8 {
        return Err(FontError::malformed(
            expected.name(),
            format!(
                "expected block kind {} at this position, found {}",
                expected as u8, block.kind
            ),
        ));
    }
    Ok(block)
}

fn check_texture_size(
    metrics: &FontMetrics,
    pixels: &PixelBuffer,
    options: &LoadOptions,
) -> Result<(), FontError> {
    let declared = (
        u32::from(metrics.texture_width),
        u32::from(metrics.texture_height),
    );
    let actual = (pixels.width, pixels.height);
    if declared == actual {
        return Ok(());
    }

    let reason = format!(
        "declared texture size {}x{} does not match page image {}x{}",
        declared.0, declared.1, actual.0, actual.1
    );
    match options.texture_size_check {
        TextureSizeCheck::Warn => {
            warn!("{}", reason);
            Ok(())
        }
        TextureSizeCheck::Error => Err(FontError::malformed("common", reason)),
    }
}
