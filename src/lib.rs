pub mod bmfont;
pub mod font;
pub mod io;
pub mod rendering_gpu;
pub mod utils;

use utils::{init_logging, set_panic_hook};
use wasm_bindgen::prelude::*;

#[macro_use]
extern crate num_derive;

pub use bmfont::error::{FontError, LoadError};
pub use bmfont::options::{BlockOrder, LoadOptions, TextureSizeCheck};
pub use bmfont::types::{FileHeader, FontInfo, FontMetrics, FontStyle, Glyph, Page};
pub use bmfont::{load_font, load_font_from_bytes, load_font_with, parse_bmfont};
pub use font::pixels::{DirectorySource, MemorySource, PageSource, PixelBuffer, PixelFormat};
pub use font::texture::{LazyTexture, TextureDescriptor, TextureSink};
pub use font::BitmapFont;

#[wasm_bindgen(start)]
pub fn main() {
    set_panic_hook();
    init_logging(log::Level::Info);
}
