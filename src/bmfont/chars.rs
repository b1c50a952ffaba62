use log::debug;
use nohash_hasher::IntMap;

use crate::io::reader::FieldReader;

use super::error::FontError;
use super::types::Glyph;

pub const CHAR_RECORD_SIZE: usize = 20;

/// Decode the chars block into a code point -> glyph map.
///
/// Each 20 byte record is:
/// id(u32) x(u16) y(u16) width(u16) height(u16) xoffset(i16) yoffset(i16)
/// xadvance(i16) page(u8) chnl(u8)
///
/// A duplicated id keeps the last record.
pub fn parse_chars_block(payload: &[u8]) -> Result<IntMap<u32, Glyph>, FontError> {
    if payload.len() % CHAR_RECORD_SIZE != 0 {
        return Err(FontError::malformed(
            "chars",
            format!(
                "payload length {} is not a multiple of {}",
                payload.len(),
                CHAR_RECORD_SIZE
            ),
        ));
    }

    let count = payload.len() / CHAR_RECORD_SIZE;
    let mut reader = FieldReader::new(payload);
    let mut glyphs = IntMap::default();
    glyphs.reserve(count);

    for _ in 0..count {
        let glyph = read_char_record(&mut reader)?;
        if glyphs.insert(glyph.id, glyph).is_some() {
            debug!("chars: duplicate glyph id {}, keeping the later record", glyph.id);
        }
    }

    debug!("chars: {} records, {} glyphs", count, glyphs.len());
    Ok(glyphs)
}

fn read_char_record(reader: &mut FieldReader) -> Result<Glyph, FontError> {
    let glyph = Glyph {
        id: reader.read_u32("char id")?,
        x: reader.read_u16("char x")?,
        y: reader.read_u16("char y")?,
        width: reader.read_u16("char width")?,
        height: reader.read_u16("char height")?,
        x_offset: reader.read_i16("char x offset")?,
        y_offset: reader.read_i16("char y offset")?,
        x_advance: reader.read_i16("char x advance")?,
        page: reader.read_u8("char page")?,
    };
    let _channel = reader.read_u8("char channel")?;
    Ok(glyph)
}
