//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use std::collections::HashMap;

#[cfg(any(feature = "builder", feature = "png_source"))]
use std::io::Cursor;

#[cfg(any(feature = "builder", feature = "png_source"))]
use png::{ColorType, Decoder};

use crate::{Color, Dimensioni, GuiError, Layer, Real, Recti, Renderer, RendererHandle, Sprite, TextRun, Texture, TextureId, Vec2f, vec2f};

/// Describes image bytes that can be uploaded to a texture.
#[derive(Copy, Clone)]
pub enum ImageSource<'a> {
    /// Raw RGBA pixels laid out as width × height × 4 bytes.
    Raw {
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
        /// Pixel buffer in RGBA8888 format.
        pixels: &'a [u8],
    },
    #[cfg(any(feature = "builder", feature = "png_source"))]
    /// PNG-compressed byte slice (requires the `builder` or `png_source` feature).
    /// Grayscale and RGB images are expanded to opaque RGBA (alpha = 255).
    Png {
        /// Compressed PNG payload.
        bytes: &'a [u8],
    },
}

#[derive(Clone, Debug)]
/// A recorded draw submission.
pub enum Command {
    /// Textured rectangle.
    Sprite(Sprite),
    /// Text run.
    Text(TextRun),
}

impl Command {
    /// Layer key of the submission.
    pub fn layer(&self) -> Real {
        match self {
            Command::Sprite(s) => s.layer,
            Command::Text(t) => t.layer,
        }
    }
}

#[derive(Default)]
/// Draw submissions recorded during one traversal.
pub struct CommandBuffer {
    commands: Vec<Command>,
}

impl CommandBuffer {
    /// Records a whole texture drawn at `pos` with a uniform `scale`.
    pub fn push_texture(&mut self, texture: &Texture, pos: Vec2f, color: Color, scale: Real, layer: Layer) {
        self.push_sprite(texture, pos, None, color, vec2f(scale, scale), layer);
    }

    /// Records a (sub-)texture drawn at `pos` with a per-axis `scale`.
    pub fn push_sprite(&mut self, texture: &Texture, pos: Vec2f, src: Option<Recti>, color: Color, scale: Vec2f, layer: Layer) {
        self.commands.push(Command::Sprite(Sprite {
            texture: texture.id(),
            pos,
            src,
            color,
            origin: vec2f(0.0, 0.0),
            scale,
            layer: layer.depth(),
        }));
    }

    /// Records a text run.
    pub fn push_text(&mut self, text: TextRun) { self.commands.push(Command::Text(text)); }

    /// Recorded submissions in recording order.
    pub fn commands(&self) -> &[Command] { &self.commands }

    /// Number of recorded submissions.
    pub fn len(&self) -> usize { self.commands.len() }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Drops every recorded submission.
    pub fn clear(&mut self) { self.commands.clear() }

    fn sort_by_layer(&mut self) {
        // stable: submissions on the same layer keep their recording order
        self.commands.sort_by(|a, b| a.layer().total_cmp(&b.layer()));
    }
}

/// Owns the renderer handle and the textures uploaded through it.
pub struct Canvas<R: Renderer> {
    current_dim: Dimensioni,
    renderer: RendererHandle<R>,
    next_texture_id: u32,
    textures: HashMap<TextureId, Texture>,
}

impl<R: Renderer> Canvas<R> {
    /// Creates a canvas around the provided renderer handle.
    pub fn from(renderer: RendererHandle<R>, dim: Dimensioni) -> Self {
        Self { current_dim: dim, renderer, next_texture_id: 1, textures: HashMap::new() }
    }

    /// Returns the viewport dimensions.
    pub fn current_dimension(&self) -> Dimensioni { self.current_dim }

    /// Changes the viewport dimensions used by the next frame.
    pub fn set_dimension(&mut self, dim: Dimensioni) { self.current_dim = dim; }

    /// Returns a clone of the underlying renderer handle.
    pub fn renderer_handle(&self) -> RendererHandle<R> { self.renderer.clone() }

    /// Returns the number of live textures.
    pub fn texture_count(&self) -> usize { self.textures.len() }

    /// Uploads raw RGBA pixels as a renderer-owned texture.
    pub fn load_texture_rgba(&mut self, width: i32, height: i32, pixels: &[u8]) -> Texture {
        let id = TextureId(self.next_texture_id);
        self.next_texture_id += 1;
        let texture = Texture::new(id, width, height);
        self.textures.insert(id, texture);
        self.renderer.scope_mut(|r| r.create_texture(id, width, height, pixels));
        texture
    }

    /// Creates a texture filled with `color`. Returns `None` for degenerate sizes.
    pub fn create_solid_texture(&mut self, width: i32, height: i32, color: Color) -> Option<Texture> {
        if width < 1 || height < 1 {
            log::warn!("cannot create a {}x{} solid texture", width, height);
            return None;
        }
        let pixels: Vec<u8> = std::iter::repeat([color.r, color.g, color.b, color.a])
            .take(width as usize * height as usize)
            .flatten()
            .collect();
        Some(self.load_texture_rgba(width, height, &pixels))
    }

    /// Uploads texture data described by `source`. PNG decoding is only available when the
    /// `png_source` (or `builder`) feature is enabled.
    pub fn load_image_from(&mut self, source: ImageSource) -> Result<Texture, GuiError> {
        match source {
            ImageSource::Raw { width, height, pixels } => {
                Self::check_rgba_len(width, height, pixels.len())?;
                Ok(self.load_texture_rgba(width, height, pixels))
            }
            #[cfg(any(feature = "builder", feature = "png_source"))]
            ImageSource::Png { bytes } => {
                let (width, height, rgba) = Self::decode_png(bytes).inspect_err(|e| log::warn!("png upload failed: {}", e))?;
                Ok(self.load_texture_rgba(width, height, rgba.as_slice()))
            }
        }
    }

    /// Destroys a texture created by this canvas. Unknown textures are ignored.
    pub fn free_texture(&mut self, texture: &Texture) {
        if self.textures.remove(&texture.id()).is_some() {
            self.renderer.scope_mut(|r| r.destroy_texture(texture.id()));
        }
    }

    /// Submits one frame: the buffer is sorted by layer, replayed between `begin` and `end`, and
    /// left empty.
    pub fn render(&mut self, buffer: &mut CommandBuffer) {
        buffer.sort_by_layer();
        let dim = self.current_dim;
        log::trace!("rendering {} commands", buffer.len());
        self.renderer.scope_mut(|r| {
            r.begin(dim.width, dim.height);
            for cmd in buffer.commands() {
                match cmd {
                    Command::Sprite(s) => r.draw_sprite(s),
                    Command::Text(t) => r.draw_text(t),
                }
            }
            r.end();
        });
        buffer.clear();
    }

    fn check_rgba_len(width: i32, height: i32, len: usize) -> Result<(), GuiError> {
        if width <= 0 || height <= 0 {
            return Err(GuiError::Image(String::from("image dimensions must be positive")));
        }
        let expected = width as usize * height as usize * 4;
        if len != expected {
            return Err(GuiError::Image(format!("expected {} RGBA bytes, received {}", expected, len)));
        }
        Ok(())
    }

    #[cfg(any(feature = "builder", feature = "png_source"))]
    fn decode_png(bytes: &[u8]) -> Result<(i32, i32, Vec<u8>), GuiError> {
        let cursor = Cursor::new(bytes);
        let decoder = Decoder::new(cursor);
        let mut reader = decoder.read_info().map_err(|e| GuiError::Image(e.to_string()))?;
        let buf_size = reader
            .output_buffer_size()
            .ok_or_else(|| GuiError::Image("PNG decoder did not report output size".to_string()))?;
        let mut buf = vec![0; buf_size];
        let info = reader.next_frame(&mut buf).map_err(|e| GuiError::Image(e.to_string()))?;
        let raw = &buf[..info.buffer_size()];
        let mut rgba = Vec::with_capacity((info.width as usize) * (info.height as usize) * 4);
        match info.color_type {
            ColorType::Rgba => rgba.extend_from_slice(raw),
            ColorType::Rgb => {
                for chunk in raw.chunks(3) {
                    rgba.extend_from_slice(chunk);
                    rgba.push(0xFF);
                }
            }
            ColorType::Grayscale => {
                for &v in raw {
                    rgba.extend_from_slice(&[v, v, v, 0xFF]);
                }
            }
            ColorType::GrayscaleAlpha => {
                for chunk in raw.chunks(2) {
                    rgba.extend_from_slice(&[chunk[0], chunk[0], chunk[0], chunk[1]]);
                }
            }
            _ => return Err(GuiError::Image("unsupported PNG color type".into())),
        }
        Ok((info.width as i32, info.height as i32, rgba))
    }
}

impl<R: Renderer> Drop for Canvas<R> {
    fn drop(&mut self) {
        let ids: Vec<_> = self.textures.keys().copied().collect();
        self.renderer.scope_mut(|r| {
            for id in &ids {
                r.destroy_texture(*id);
            }
        });
        self.textures.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Recorded, RecordingRenderer};

    fn canvas() -> (Canvas<RecordingRenderer>, RendererHandle<RecordingRenderer>) {
        let handle = RendererHandle::new(RecordingRenderer::default());
        (Canvas::from(handle.clone(), Dimensioni::new(320, 240)), handle)
    }

    #[test]
    fn degenerate_solid_texture_is_none() {
        let (mut canvas, handle) = canvas();
        assert!(canvas.create_solid_texture(0, 10, Color::WHITE).is_none());
        assert!(canvas.create_solid_texture(10, -1, Color::WHITE).is_none());
        assert_eq!(canvas.texture_count(), 0);
        handle.scope(|r| assert!(r.created.is_empty()));
    }

    #[test]
    fn solid_texture_uploads_filled_pixels() {
        let (mut canvas, handle) = canvas();
        let tex = canvas.create_solid_texture(2, 3, Color { r: 1, g: 2, b: 3, a: 4 }).unwrap();
        assert_eq!((tex.width(), tex.height()), (2, 3));
        handle.scope(|r| {
            let (id, w, h, pixels) = &r.created[0];
            assert_eq!((*id, *w, *h), (tex.id(), 2, 3));
            assert_eq!(pixels.len(), 24);
            assert!(pixels.chunks(4).all(|p| p == [1, 2, 3, 4]));
        });
    }

    #[test]
    fn raw_image_with_wrong_length_is_rejected() {
        let (mut canvas, _) = canvas();
        let res = canvas.load_image_from(ImageSource::Raw { width: 2, height: 2, pixels: &[0; 15] });
        assert!(matches!(res, Err(GuiError::Image(_))));
    }

    #[test]
    fn render_sorts_by_layer_and_keeps_ties_in_order() {
        let (mut canvas, handle) = canvas();
        let tex = canvas.create_solid_texture(1, 1, Color::WHITE).unwrap();
        let mut buffer = CommandBuffer::default();
        buffer.push_texture(&tex, vec2f(1.0, 0.0), Color::WHITE, 1.0, Layer::UpperTexture);
        buffer.push_texture(&tex, vec2f(2.0, 0.0), Color::WHITE, 1.0, Layer::LowerTexture);
        buffer.push_texture(&tex, vec2f(3.0, 0.0), Color::WHITE, 1.0, Layer::LowerTexture);
        canvas.render(&mut buffer);
        assert!(buffer.is_empty());
        handle.scope(|r| {
            let xs: Vec<Real> = r
                .frame
                .iter()
                .filter_map(|c| match c {
                    Recorded::Sprite(s) => Some(s.pos.x),
                    _ => None,
                })
                .collect();
            assert_eq!(xs, vec![2.0, 3.0, 1.0]);
            assert_eq!(r.frames, 1);
        });
    }

    #[test]
    fn drop_releases_remaining_textures() {
        let (mut canvas, handle) = canvas();
        let a = canvas.create_solid_texture(1, 1, Color::WHITE).unwrap();
        let _b = canvas.create_solid_texture(1, 1, Color::WHITE).unwrap();
        canvas.free_texture(&a);
        canvas.free_texture(&a);
        handle.scope(|r| assert_eq!(r.destroyed.len(), 1));
        drop(canvas);
        handle.scope(|r| assert_eq!(r.destroyed.len(), 2));
    }
}
