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
use crate::{Color, FontHandle, Layer, TextRun, Texture, vec2f};

use super::{WidgetBase, WidgetCtx, draw_base, probe};

/// Text drawn centered on an optional background texture, or centered on the anchor point when
/// there is none.
pub struct Label {
    /// Displayed text.
    pub text: String,
    /// Text color.
    pub text_color: Color,
    font: FontHandle,
}

impl Label {
    /// Creates a label. Give the widget a background with [`Widget::set_texture`](crate::Widget::set_texture).
    pub fn new(text: &str, text_color: Color, font: FontHandle) -> Self { Self { text: text.to_string(), text_color, font } }

    pub(crate) fn draw(&mut self, base: &mut WidgetBase, ctx: &mut WidgetCtx) -> bool {
        probe(base, ctx);
        let clicked = draw_base(base, ctx);
        let extent = base.extent();
        let size = self.font.measure(&self.text);
        ctx.commands().push_text(TextRun {
            font: self.font.id(),
            text: self.text.clone(),
            pos: vec2f(base.position.x + extent.x / 2.0, base.position.y + extent.y / 2.0),
            color: self.text_color,
            origin: vec2f(size.x / 2.0, size.y / 2.0),
            scale: 1.0,
            layer: Layer::MiddleText.depth(),
        });
        clicked
    }
}

/// Static picture drawn on the middle picture layer.
pub struct Image {
    pub(crate) texture: Texture,
}

impl Image {
    /// Creates an image widget.
    pub fn new(texture: Texture) -> Self { Self { texture } }

    /// Displayed texture.
    pub fn texture(&self) -> Texture { self.texture }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FixedFont, Harness};
    use crate::{Dimensioni, Dock, Layer, TextureId, Widget, vec2};
    use std::rc::Rc;

    #[test]
    fn untextured_label_centers_on_anchor() {
        let mut h = Harness::new();
        let mut w = Widget::new(Dock::Center, vec2(0, 0), 1.0, Label::new("abcd", Color::BLACK, Rc::new(FixedFont::new(8.0, 16.0))));
        w.set_viewport(Dimensioni::new(800, 600));
        h.frame(&mut [&mut w]);
        let text = h.texts();
        assert_eq!(text.len(), 1);
        assert_eq!((text[0].pos.x, text[0].pos.y), (400.0, 300.0));
        assert_eq!((text[0].origin.x, text[0].origin.y), (16.0, 8.0));
        assert!(h.sprites().is_empty());
    }

    #[test]
    fn image_replacement_repositions() {
        let mut w = Widget::new(Dock::CornerBottomRight, vec2(0, 0), 1.0, Image::new(Texture::new(TextureId(1), 10, 10)));
        w.set_viewport(Dimensioni::new(100, 100));
        assert_eq!(w.base.layer, Layer::MiddlePicture);
        assert_eq!(w.base.position().x, 90.0);
        w.set_texture(Some(Texture::new(TextureId(2), 40, 10))).unwrap();
        assert_eq!(w.base.position().x, 60.0);
        assert!(w.set_texture(None).is_err());
    }

    #[test]
    fn set_image_redocks_and_rejects_other_kinds() {
        let mut w = Widget::new(Dock::CornerBottomRight, vec2(0, 0), 1.0, Image::new(Texture::new(TextureId(1), 10, 10)));
        w.set_viewport(Dimensioni::new(100, 100));
        assert!(w.set_image(Texture::new(TextureId(3), 30, 20)));
        assert_eq!((w.base.position().x, w.base.position().y), (70.0, 80.0));
        assert_eq!(w.kind.as_image().map(|i| i.texture().id()), Some(TextureId(3)));

        let mut label = Widget::new(Dock::Center, vec2(0, 0), 1.0, Label::new("x", Color::BLACK, Rc::new(FixedFont::new(8.0, 16.0))));
        assert!(!label.set_image(Texture::new(TextureId(4), 5, 5)));
        assert!(label.base.texture().is_none());
    }
}
