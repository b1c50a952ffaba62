use std::io;
use std::path::{Path, PathBuf};

use fxhash::FxHashMap;
use log::debug;

use crate::bmfont::error::FontError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 4 channels, 8 bits each
    Rgba8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Raw pixels of one page, ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    pub fn bytes_per_pixel(&self) -> usize {
        self.format.bytes_per_pixel()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Where page images come from. `file_name` is the name stored in the pages block.
pub trait PageSource {
    fn open(&self, file_name: &str) -> io::Result<Vec<u8>>;
}

/// Resolves page names against a base directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    base_path: PathBuf,
}

impl DirectorySource {
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn resolve(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }
}

impl PageSource for DirectorySource {
    fn open(&self, file_name: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.resolve(file_name))
    }
}

/// Page images held in memory, for hosts that fetch resources themselves.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: FxHashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file_name: impl Into<String>, bytes: Vec<u8>) {
        self.files.insert(file_name.into(), bytes);
    }

    pub fn with_file(mut self, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(file_name, bytes);
        self
    }
}

impl PageSource for MemorySource {
    fn open(&self, file_name: &str) -> io::Result<Vec<u8>> {
        self.files.get(file_name).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no page image named '{}'", file_name),
            )
        })
    }
}

/// Resolve a page image and decode it to RGBA8.
pub fn load_page_pixels<S: PageSource + ?Sized>(
    source: &S,
    file_name: &str,
) -> Result<PixelBuffer, FontError> {
    let bytes = source
        .open(file_name)
        .map_err(|err| FontError::image_decode(file_name, err))?;
    let image =
        image::load_from_memory(&bytes).map_err(|err| FontError::image_decode(file_name, err))?;

    // No copy when the page already is RGBA8.
    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();

    debug!(
        "page '{}': decoded {}x{} ({} bytes)",
        file_name,
        width,
        height,
        bytes.len()
    );

    Ok(PixelBuffer {
        width,
        height,
        format: PixelFormat::Rgba8,
        data: rgba.into_raw(),
    })
}
