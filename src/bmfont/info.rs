/// Info block decoder
///
/// The info block only describes how the font was generated. Nothing in the
/// loader depends on it, so it is decoded best effort: a payload that does
/// not fit the layout yields `None` rather than failing the load.
///
/// Layout:
///   fontSize(i16) bitField(1) charSet(1) stretchH(u16) aa(1)
///   paddingUp/Right/Down/Left(4) spacingHoriz/Vert(2) outline(1) fontName(cstr)

use bitvec::prelude::*;
use log::debug;

use crate::io::reader::FieldReader;

use super::error::FontError;
use super::types::{FontInfo, FontStyle};

pub fn parse_info_block(payload: &[u8]) -> Option<FontInfo> {
    match read_info(payload) {
        Ok(info) => {
            debug!(
                "info: face='{}' size={} bold={} italic={}",
                info.font_name, info.font_size, info.style.bold, info.style.italic
            );
            Some(info)
        }
        Err(err) => {
            debug!("info block ignored: {}", err);
            None
        }
    }
}

fn read_style(bits: u8) -> FontStyle {
    // bit 0 is the most significant bit of the field
    let bits = bits.view_bits::<Msb0>();
    FontStyle {
        smooth: bits[0],
        unicode: bits[1],
        italic: bits[2],
        bold: bits[3],
        fixed_height: bits[4],
    }
}

fn read_info(payload: &[u8]) -> Result<FontInfo, FontError> {
    let mut reader = FieldReader::new(payload);

    let font_size = reader.read_i16("info font size")?;
    let style = read_style(reader.read_u8("info bit field")?);
    let char_set = reader.read_u8("info char set")?;
    let stretch_h = reader.read_u16("info stretch")?;
    let super_sampling = reader.read_u8("info super sampling")?;

    let mut padding = [0u8; 4];
    for p in padding.iter_mut() {
        *p = reader.read_u8("info padding")?;
    }
    let mut spacing = [0u8; 2];
    for s in spacing.iter_mut() {
        *s = reader.read_u8("info spacing")?;
    }
    let outline = reader.read_u8("info outline")?;

    // Some writers drop the terminator on the last string of a block.
    let rest = reader.read_bytes(reader.remaining(), "info font name")?;
    let name_len = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
    let font_name = String::from_utf8_lossy(&rest[..name_len]).into_owned();

    Ok(FontInfo {
        font_size,
        style,
        char_set,
        stretch_h,
        super_sampling,
        padding,
        spacing,
        outline,
        font_name,
    })
}
