/// BMFont block framing
///
/// Every block is `[kind: u8][length: u32 LE][payload: length bytes]`.
/// The framer hands back an owned payload and never looks at the kind;
/// which decoder runs is decided by position in the file.

use log::debug;
use num::FromPrimitive;

use crate::io::reader::FieldReader;

use super::error::FontError;
use super::types::FileHeader;

pub const BLOCK_HEADER_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum BlockKind {
    Info = 1,
    Common = 2,
    Pages = 3,
    Chars = 4,
    KerningPairs = 5,
}

impl BlockKind {
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Info => "info",
            BlockKind::Common => "common",
            BlockKind::Pages => "pages",
            BlockKind::Chars => "chars",
            BlockKind::KerningPairs => "kerning pairs",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: u8,
    pub payload: Vec<u8>,
}

impl Block {
    pub fn known_kind(&self) -> Option<BlockKind> {
        BlockKind::from_u8(self.kind)
    }
}

/// Read the 3-byte identifier and the version byte. Content is not checked here.
pub fn read_file_header(reader: &mut FieldReader) -> Result<FileHeader, FontError> {
    let magic = reader.read_bytes(3, "file identifier")?;
    let version = reader.read_u8("file version")?;
    Ok(FileHeader {
        magic: [magic[0], magic[1], magic[2]],
        version,
    })
}

pub fn read_block(reader: &mut FieldReader) -> Result<Block, FontError> {
    let offset = reader.position();
    let kind = reader.read_u8("block kind")?;
    let length = reader.read_u32("block length")? as usize;
    let payload = reader.read_bytes(length, "block payload")?;

    debug!(
        "block kind={} ({}) length={} at offset {}",
        kind,
        BlockKind::from_u8(kind).map_or("unknown", BlockKind::name),
        length,
        offset
    );

    Ok(Block { kind, payload })
}
