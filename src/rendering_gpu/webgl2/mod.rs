//! WebGL2 texture upload for font pages
//!
//! Lets a `WebGl2RenderingContext` act as the texture sink of a
//! `LazyTexture`, so the page is uploaded the first time a renderer asks for it.

use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{WebGl2RenderingContext, WebGlTexture};

use crate::font::pixels::PixelFormat;
use crate::font::texture::{TextureDescriptor, TextureSink};

fn gl_format(format: PixelFormat) -> (i32, u32, u32) {
    match format {
        PixelFormat::Rgba8 => (
            WebGl2RenderingContext::RGBA as i32,
            WebGl2RenderingContext::RGBA,
            WebGl2RenderingContext::UNSIGNED_BYTE,
        ),
    }
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl TextureSink for WebGl2RenderingContext {
    type Texture = WebGlTexture;

    fn create_texture(&self, desc: &TextureDescriptor<'_>) -> Result<WebGlTexture, String> {
        let gl = self;
        let tex = gl
            .create_texture()
            .ok_or_else(|| "WebGL2 create_texture returned null".to_string())?;

        let (internal_format, format, pixel_type) = gl_format(desc.format);
        gl.bind_texture(WebGl2RenderingContext::TEXTURE_2D, Some(&tex));
        let upload = gl.tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
            WebGl2RenderingContext::TEXTURE_2D,
            0,
            internal_format,
            desc.width as i32,
            desc.height as i32,
            0,
            format,
            pixel_type,
            Some(desc.pixels),
        );
        if let Err(err) = upload {
            gl.bind_texture(WebGl2RenderingContext::TEXTURE_2D, None);
            gl.delete_texture(Some(&tex));
            return Err(format!("WebGL2 texture upload failed: {}", js_error_message(&err)));
        }

        // Glyphs are sampled pixel for pixel.
        gl.tex_parameteri(WebGl2RenderingContext::TEXTURE_2D, WebGl2RenderingContext::TEXTURE_MIN_FILTER, WebGl2RenderingContext::NEAREST as i32);
        gl.tex_parameteri(WebGl2RenderingContext::TEXTURE_2D, WebGl2RenderingContext::TEXTURE_MAG_FILTER, WebGl2RenderingContext::NEAREST as i32);
        gl.tex_parameteri(WebGl2RenderingContext::TEXTURE_2D, WebGl2RenderingContext::TEXTURE_WRAP_S, WebGl2RenderingContext::CLAMP_TO_EDGE as i32);
        gl.tex_parameteri(WebGl2RenderingContext::TEXTURE_2D, WebGl2RenderingContext::TEXTURE_WRAP_T, WebGl2RenderingContext::CLAMP_TO_EDGE as i32);
        gl.bind_texture(WebGl2RenderingContext::TEXTURE_2D, None);

        debug!("WebGL2: uploaded font page {}x{}", desc.width, desc.height);
        Ok(tex)
    }
}
