use log::{debug, warn};

use crate::io::reader::FieldReader;

use super::error::FontError;
use super::types::Page;

/// Decode the pages block: a run of NUL-terminated file names, one per page.
/// Ids are assigned in file order starting at 0. `on_page` runs as soon as a
/// page is discovered; its error aborts the decode.
pub fn parse_pages_block<F>(payload: &[u8], mut on_page: F) -> Result<Vec<Page>, FontError>
where
    F: FnMut(&Page) -> Result<(), FontError>,
{
    let mut reader = FieldReader::new(payload);
    let mut pages = Vec::new();

    while !reader.is_eof() {
        let file_name = match reader.read_cstr("page file name") {
            Ok(name) => name,
            Err(FontError::TruncatedInput { remaining, .. }) => {
                warn!(
                    "pages block: ignoring {} trailing bytes without terminator",
                    remaining
                );
                break;
            }
            Err(err) => return Err(err),
        };
        let page = Page {
            id: pages.len() as u32,
            file_name,
        };
        debug!("page {}: '{}'", page.id, page.file_name);
        on_page(&page)?;
        pages.push(page);
    }

    Ok(pages)
}
