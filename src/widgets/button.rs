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
use crate::{Color, FontHandle, Layer, Real, TextRun, Texture, Vec2f, vec2f};

use super::{WidgetBase, WidgetCtx, draw_base, probe};

/// Push button with separate released/pressed textures and optional centered picture or text.
///
/// A pressed texture shorter than the released one is drawn lower by the height difference so
/// both share the same bottom edge.
pub struct Button {
    pub(crate) normal: Texture,
    pressed: Texture,
    picture: Option<Texture>,
    inside_scale: Real,
    text: Option<(String, FontHandle)>,
    /// Color of the label text.
    pub text_color: Color,
}

impl Button {
    /// Creates a button from its released and pressed textures.
    pub fn new(normal: Texture, pressed: Texture) -> Self {
        Self { normal, pressed, picture: None, inside_scale: 1.0, text: None, text_color: Color::BLACK }
    }

    /// Adds a picture centered on the button, fitted into `inside_scale` (clamped to `[0, 1]`) of
    /// the button's smaller side.
    pub fn with_picture(mut self, picture: Texture, inside_scale: Real) -> Self {
        self.picture = Some(picture);
        self.inside_scale = inside_scale.clamp(0.0, 1.0);
        self
    }

    /// Adds a text label centered on the button.
    pub fn with_text(mut self, text: &str, color: Color, font: FontHandle) -> Self {
        self.text = Some((text.to_string(), font));
        self.text_color = color;
        self
    }

    /// Released texture.
    pub fn normal_texture(&self) -> Texture { self.normal }

    /// Pressed texture.
    pub fn pressed_texture(&self) -> Texture { self.pressed }

    /// Label text, if any.
    pub fn text(&self) -> Option<&str> { self.text.as_ref().map(|(t, _)| t.as_str()) }

    /// Replaces the label text of a button created with a font.
    pub fn set_text(&mut self, text: &str) {
        if let Some((t, _)) = &mut self.text {
            *t = text.to_string();
        }
    }

    /// Uniform scale fitting the picture into the button at the given button `scale`.
    pub fn picture_scale(&self, scale: Real) -> Real {
        let picture = match self.picture {
            Some(p) => p,
            None => return 0.0,
        };
        let side = self.normal.width().min(self.normal.height()) as Real;
        let longest = picture.width().max(picture.height()).max(1) as Real;
        side / longest * scale * self.inside_scale
    }

    pub(crate) fn draw(&mut self, base: &mut WidgetBase, ctx: &mut WidgetCtx) -> bool {
        base.place_on(Some(self.normal));
        let pressed = probe(base, ctx);
        let shift = if pressed { self.normal.height() - self.pressed.height() } else { 0 };
        if pressed {
            base.texture = Some(self.pressed);
            base.position.y += shift as Real * base.scale;
        }
        let clicked = draw_base(base, ctx);

        let current = if pressed { self.pressed } else { self.normal };
        let center = vec2f(
            base.position.x + current.width() as Real * base.scale / 2.0,
            base.position.y + (current.height() + shift) as Real * base.scale / 2.0,
        );

        if let Some(picture) = self.picture {
            let s = self.picture_scale(base.scale);
            let top_left = vec2f(center.x - picture.width() as Real * s / 2.0, center.y - picture.height() as Real * s / 2.0);
            ctx.commands().push_texture(&picture, top_left, Color::WHITE, s, Layer::MiddlePicture);
        }

        if let Some((text, font)) = &self.text {
            let size = font.measure(text);
            ctx.commands().push_text(TextRun {
                font: font.id(),
                text: text.clone(),
                pos: center,
                color: self.text_color,
                origin: Vec2f { x: size.x / 2.0, y: size.y / 2.0 },
                scale: 1.0,
                layer: Layer::MiddleText.depth(),
            });
        }
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextureId;

    fn tex(id: u32, w: i32, h: i32) -> Texture { Texture::new(TextureId(id), w, h) }

    #[test]
    fn picture_fits_smaller_side() {
        let button = Button::new(tex(1, 100, 40), tex(2, 100, 36)).with_picture(tex(3, 20, 10), 0.5);
        // 40 / 20 * 0.5
        assert_eq!(button.picture_scale(1.0), 1.0);
        assert_eq!(button.picture_scale(2.0), 2.0);
    }

    #[test]
    fn inside_scale_is_clamped() {
        let button = Button::new(tex(1, 10, 10), tex(2, 10, 10)).with_picture(tex(3, 10, 10), 3.0);
        assert_eq!(button.picture_scale(1.0), 1.0);
        let button = Button::new(tex(1, 10, 10), tex(2, 10, 10)).with_picture(tex(3, 10, 10), -1.0);
        assert_eq!(button.picture_scale(1.0), 0.0);
    }
}
