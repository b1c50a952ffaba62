use log::debug;

use crate::io::reader::FieldReader;

use super::error::FontError;
use super::types::FontMetrics;

/// Decode the common block: lineHeight, base, scaleW, scaleH (all u16).
/// The page count, packed flag and channel bytes that follow are not used.
pub fn parse_common_block(payload: &[u8]) -> Result<FontMetrics, FontError> {
    let mut reader = FieldReader::new(payload);

    let metrics = FontMetrics {
        line_height: reader.read_u16("common line height")?,
        base: reader.read_u16("common base")?,
        texture_width: reader.read_u16("common texture width")?,
        texture_height: reader.read_u16("common texture height")?,
    };

    debug!(
        "common: lineHeight={} base={} texture={}x{} ({} bytes ignored)",
        metrics.line_height,
        metrics.base,
        metrics.texture_width,
        metrics.texture_height,
        reader.remaining()
    );

    Ok(metrics)
}
