/// How the loader treats block kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOrder {
    /// Blocks are decoded by position; kind bytes and the file identifier are
    /// not looked at. Out-of-order files mis-decode.
    Positional,
    /// Each block kind must match its position and the header must read
    /// `BMF` version 3.
    Strict,
}

/// What to do when the page image does not have the size the common block declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSizeCheck {
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub block_order: BlockOrder,
    pub texture_size_check: TextureSizeCheck,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            block_order: BlockOrder::Positional,
            texture_size_check: TextureSizeCheck::Warn,
        }
    }
}

impl LoadOptions {
    /// Strict block order and texture size checks.
    pub fn strict() -> Self {
        Self {
            block_order: BlockOrder::Strict,
            texture_size_check: TextureSizeCheck::Error,
        }
    }

    pub fn with_block_order(mut self, block_order: BlockOrder) -> Self {
        self.block_order = block_order;
        self
    }

    pub fn with_texture_size_check(mut self, check: TextureSizeCheck) -> Self {
        self.texture_size_check = check;
        self
    }
}
