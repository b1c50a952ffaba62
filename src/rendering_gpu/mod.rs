//! GPU backends for font page textures.

pub mod webgl2;
