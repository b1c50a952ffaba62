/// Lazy GPU texture for a loaded font page.
///
/// A `LazyTexture` takes ownership of its `BitmapFont`, and a loaded font
/// cannot be cloned, so each font has exactly one texture slot. Share the
/// wrapper itself (`Arc<LazyTexture<T>>`) to hand the font to several
/// renderers. The slot mutex is held across the whole build-or-fetch path, so
/// two callers racing on an empty slot still produce a single texture.

use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

use crate::bmfont::error::FontError;

use super::pixels::PixelFormat;
use super::BitmapFont;

#[derive(Debug, Clone, Copy)]
pub struct TextureDescriptor<'a> {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: &'a [u8],
}

/// Graphics backend that turns pixel data into a texture handle.
pub trait TextureSink {
    type Texture;

    fn create_texture(&self, desc: &TextureDescriptor<'_>) -> Result<Self::Texture, String>;
}

pub struct LazyTexture<T> {
    font: BitmapFont,
    slot: Mutex<Option<Arc<T>>>,
}

impl<T> LazyTexture<T> {
    pub fn new(font: BitmapFont) -> Self {
        Self {
            font,
            slot: Mutex::new(None),
        }
    }

    pub fn font(&self) -> &BitmapFont {
        &self.font
    }

    pub fn is_built(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Size comes from the decoded page rather than the declared texture size,
    /// so the upload always matches the buffer length.
    pub fn descriptor(&self) -> TextureDescriptor<'_> {
        let pixels = self.font.pixel_buffer();
        TextureDescriptor {
            width: pixels.width,
            height: pixels.height,
            format: pixels.format,
            pixels: &pixels.data,
        }
    }

    /// Return the cached texture, building it through `sink` on first use.
    /// Once built, later calls ignore `sink`. A failed build caches nothing.
    pub fn get_texture<S>(&self, sink: &S) -> Result<Arc<T>, FontError>
    where
        S: TextureSink<Texture = T> + ?Sized,
    {
        // Only written after a successful build, so a poisoned slot is still consistent.
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(texture) = slot.as_ref() {
            return Ok(Arc::clone(texture));
        }

        let desc = self.descriptor();
        debug!(
            "building font texture {}x{} ({} bytes)",
            desc.width,
            desc.height,
            desc.pixels.len()
        );
        let texture = Arc::new(
            sink.create_texture(&desc)
                .map_err(FontError::ResourceCreation)?,
        );
        *slot = Some(Arc::clone(&texture));
        Ok(texture)
    }
}
