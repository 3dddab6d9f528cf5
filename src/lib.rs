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
#![deny(missing_docs)]
//! `dockui` provides a retained-mode widget layer for real-time rendered applications.
//! Widgets own their textures, resolve their screen position from a docking rule, and derive
//! their interactive state (selection, press, click) from per-frame pointer and keyboard input.
//! The crate stays backend-agnostic: rendering, font rasterization and device polling are
//! supplied by the host through the [`Renderer`] and [`Font`] traits and the [`Input`] accumulator.

use std::sync::{Arc, RwLock};

mod canvas;
mod context;
mod error;
mod font;
mod input;
mod layer;
mod layout;
mod press;
mod style;
mod widgets;

#[cfg(test)]
mod test_support;

pub use canvas::*;
pub use context::Gui;
pub use error::GuiError;
pub use font::*;
pub use input::*;
pub use layer::Layer;
pub use layout::{Dock, resolve};
pub use press::*;
pub use rs_math3d::{Dimensioni, Recti, Vec2f, Vec2i};
pub use style::Style;
pub use widgets::*;

/// Floating-point type used by widgets and layout calculations.
pub type Real = f32;

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
/// Simple RGBA color stored with 8-bit components.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque white, the neutral tint.
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };
    /// Opaque black.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 0xFF };
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    /// Returns the color with its alpha channel scaled by `alpha` (clamped to `[0, 1]`).
    pub fn with_alpha(self, alpha: Real) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        Self { a: (self.a as Real * alpha).round() as u8, ..self }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Handle referencing a renderer-owned texture.
pub struct TextureId(u32);

impl TextureId {
    /// Returns the raw numeric identifier stored inside the handle.
    pub fn raw(self) -> u32 { self.0 }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
/// Handle the renderer uses to pick the font a text run is drawn with.
pub struct FontId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// A renderer-owned texture together with its pixel size.
pub struct Texture {
    id: TextureId,
    width: i32,
    height: i32,
}

impl Texture {
    pub(crate) fn new(id: TextureId, width: i32, height: i32) -> Self { Self { id, width, height } }

    /// Returns the renderer handle of the texture.
    pub fn id(&self) -> TextureId { self.id }

    /// Width in pixels.
    pub fn width(&self) -> i32 { self.width }

    /// Height in pixels.
    pub fn height(&self) -> i32 { self.height }

    /// Returns the texture size as a [`Dimensioni`].
    pub fn size(&self) -> Dimensioni { Dimensioni::new(self.width, self.height) }
}

#[derive(Clone, Debug)]
/// A textured rectangle submitted to the renderer.
pub struct Sprite {
    /// Texture to sample.
    pub texture: TextureId,
    /// Screen position of the origin point.
    pub pos: Vec2f,
    /// Source rectangle inside the texture, `None` for the whole texture.
    pub src: Option<Recti>,
    /// Tint color.
    pub color: Color,
    /// Origin inside the (unscaled) source rectangle that lands on `pos`.
    pub origin: Vec2f,
    /// Per-axis scale.
    pub scale: Vec2f,
    /// Layer key used to order submissions.
    pub layer: Real,
}

#[derive(Clone, Debug)]
/// A run of text submitted to the renderer.
pub struct TextRun {
    /// Font used to draw the text.
    pub font: FontId,
    /// UTF-8 string to render.
    pub text: String,
    /// Screen position of the origin point.
    pub pos: Vec2f,
    /// Text color.
    pub color: Color,
    /// Origin inside the measured text box that lands on `pos`.
    pub origin: Vec2f,
    /// Uniform scale.
    pub scale: Real,
    /// Layer key used to order submissions.
    pub layer: Real,
}

/// Trait implemented by render backends driven by the widget layer.
pub trait Renderer {
    /// Begins a new frame with the viewport size.
    fn begin(&mut self, width: i32, height: i32);
    /// Draws a textured rectangle.
    fn draw_sprite(&mut self, sprite: &Sprite);
    /// Draws a run of text.
    fn draw_text(&mut self, text: &TextRun);
    /// Ends the frame, finalizing any outstanding GPU work.
    fn end(&mut self);
    /// Creates a texture owned by the renderer from RGBA8888 pixels.
    fn create_texture(&mut self, id: TextureId, width: i32, height: i32, pixels: &[u8]);
    /// Destroys a previously created texture.
    fn destroy_texture(&mut self, id: TextureId);
}

/// Thread-safe handle that shares ownership of a [`Renderer`].
pub struct RendererHandle<R: Renderer> {
    handle: Arc<RwLock<R>>,
}

// seems there's a bug in #[derive(Clone)] as it's unable to induce that Arc is sufficient
impl<R: Renderer> Clone for RendererHandle<R> {
    fn clone(&self) -> Self { Self { handle: self.handle.clone() } }
}

impl<R: Renderer> RendererHandle<R> {
    /// Wraps a renderer inside an [`Arc<RwLock<...>>`] so it can be shared.
    pub fn new(renderer: R) -> Self { Self { handle: Arc::new(RwLock::new(renderer)) } }

    /// Executes the provided closure with a shared reference to the renderer.
    pub fn scope<Res, F: Fn(&R) -> Res>(&self, f: F) -> Res {
        match self.handle.read() {
            Ok(guard) => f(&*guard),
            // a handler that panicked mid-frame leaves the lock poisoned; the data is still usable
            Err(poisoned) => f(&*poisoned.into_inner()),
        }
    }

    /// Executes the provided closure with a mutable reference to the renderer.
    pub fn scope_mut<Res, F: FnMut(&mut R) -> Res>(&mut self, mut f: F) -> Res {
        match self.handle.write() {
            Ok(mut guard) => f(&mut *guard),
            Err(poisoned) => f(&mut *poisoned.into_inner()),
        }
    }
}

/// Convenience constructor for [`Vec2i`].
pub fn vec2(x: i32, y: i32) -> Vec2i { Vec2i { x, y } }

/// Convenience constructor for [`Vec2f`].
pub fn vec2f(x: Real, y: Real) -> Vec2f { Vec2f { x, y } }

/// Convenience constructor for [`Color`].
pub fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }
