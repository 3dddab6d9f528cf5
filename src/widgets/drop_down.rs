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
use crate::{Bounds, Color, FontHandle, GuiError, Layer, PressLatch, Real, Style, TextRun, Texture, Vec2f, vec2f};

use super::{WidgetBase, WidgetCtx, draw_base, probe};

/// Box showing the active item; pressing it opens a list of rows below it, pressing a row makes
/// it the active item and closes the list.
pub struct DropDownList {
    pub(crate) texture: Texture,
    items: Vec<String>,
    active: usize,
    font: FontHandle,
    /// Text color of the box and the rows.
    pub text_color: Color,
    /// Row background.
    pub item_color: Color,
    /// Background of the row under the pointer.
    pub item_hover_color: Color,
    picture: Option<(Texture, Color, Real)>,
    is_dropped: bool,
    was_toggled: bool,
    rows_latch: PressLatch,
}

impl DropDownList {
    /// Creates a list over `items`, the first item being active.
    pub fn new<S: AsRef<str>>(texture: Texture, items: &[S], font: FontHandle) -> Self {
        let style = Style::default();
        Self {
            texture,
            items: items.iter().map(|s| s.as_ref().to_string()).collect(),
            active: 0,
            font,
            text_color: style.text_color,
            item_color: style.list_color,
            item_hover_color: style.list_hover_color,
            picture: None,
            is_dropped: false,
            was_toggled: false,
            rows_latch: PressLatch::default(),
        }
    }

    /// Sets a picture drawn at the right edge of the box.
    pub fn set_picture(&mut self, texture: Texture, color: Color, scale: Real) { self.picture = Some((texture, color, scale)); }

    /// All items.
    pub fn items(&self) -> &[String] { &self.items }

    /// Index of the active item.
    pub fn active_index(&self) -> usize { self.active }

    /// Text of the active item.
    pub fn active_item(&self) -> Option<&str> { self.items.get(self.active).map(|s| s.as_str()) }

    /// Makes the item at `index` active. Out-of-range indices are ignored.
    pub fn set_active(&mut self, index: usize) {
        if index < self.items.len() {
            self.active = index;
        }
    }

    /// Returns `true` while the list is open.
    pub fn is_dropped(&self) -> bool { self.is_dropped }

    pub(crate) fn release(&mut self, ctx: &mut WidgetCtx) {
        ctx.reset_press_state(&mut self.rows_latch);
        self.was_toggled = false;
    }

    pub(crate) fn validate(&self) -> Result<(), GuiError> { if self.items.is_empty() { Err(GuiError::EmptyItems) } else { Ok(()) } }

    fn push_row_text(&self, ctx: &mut WidgetCtx, text: &str, top_left: Vec2f, height: Real, layer: Layer) {
        let size = self.font.measure(text);
        ctx.commands().push_text(TextRun {
            font: self.font.id(),
            text: text.to_string(),
            pos: vec2f(top_left.x, top_left.y + height / 2.0),
            color: self.text_color,
            origin: vec2f(0.0, size.y / 2.0),
            scale: 1.0,
            layer: layer.depth(),
        });
    }

    pub(crate) fn draw(&mut self, base: &mut WidgetBase, ctx: &mut WidgetCtx) -> bool {
        if !probe(base, ctx) {
            self.was_toggled = false;
        } else if !self.was_toggled {
            self.is_dropped = !self.is_dropped;
            self.was_toggled = true;
        }
        let clicked = draw_base(base, ctx);
        let extent = base.extent();

        if let Some((picture, color, scale)) = self.picture {
            let pos = vec2f(base.position.x + extent.x - picture.width() as Real * scale, base.position.y);
            ctx.commands().push_texture(&picture, pos, color, scale, Layer::MiddlePicture);
        }
        if let Some(active) = self.items.get(self.active) {
            self.push_row_text(ctx, active, base.position, extent.y, Layer::MiddleText);
        }

        if !self.is_dropped {
            return clicked;
        }
        let mut claimed = false;
        for i in 0..self.items.len() {
            let row = vec2f(base.position.x, base.position.y + extent.y * (i + 1) as Real);
            let bounds = Bounds::new(row, self.texture.size(), base.scale);
            let selected = ctx.is_selected(base, &bounds);
            if !claimed {
                // every row gets its own chance within the frame
                ctx.reset_press_state(&mut self.rows_latch);
                if ctx.is_pressed(&mut self.rows_latch, selected) {
                    self.active = i;
                    self.is_dropped = false;
                    claimed = true;
                }
            }
            let color = if selected { self.item_hover_color } else { self.item_color };
            ctx.commands().push_texture(&self.texture, row, color, base.scale, Layer::UpperTexture);
            let text = self.items[i].clone();
            self.push_row_text(ctx, &text, row, extent.y, Layer::UpperText);
        }
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FixedFont, Harness};
    use crate::{Dock, MouseButton, TextureId, Widget, vec2};
    use std::rc::Rc;

    fn list(items: &[&str]) -> Widget {
        let dd = DropDownList::new(Texture::new(TextureId(1), 100, 20), items, Rc::new(FixedFont::new(8.0, 16.0)));
        Widget::new(Dock::CornerTopLeft, vec2(0, 0), 1.0, dd)
    }

    fn dd(w: &Widget) -> &DropDownList { w.kind.as_drop_down().unwrap() }

    #[test]
    fn empty_list_is_a_configuration_error() {
        assert_eq!(list(&[]).validate().err(), Some(GuiError::EmptyItems));
        assert!(list(&["a"]).validate().is_ok());
    }

    #[test]
    fn open_then_pick_a_row() {
        let mut h = Harness::new();
        let mut w = list(&["red", "green", "blue"]);
        assert_eq!(dd(&w).active_item(), Some("red"));

        h.input.mousedown(10, 10, MouseButton::LEFT);
        for _ in 0..3 {
            h.frame(&mut [&mut w]);
        }
        assert!(dd(&w).is_dropped());
        h.input.mouseup(10, 10, MouseButton::LEFT);
        h.frame(&mut [&mut w]);
        assert!(dd(&w).is_dropped());
        assert_eq!(h.texts().len(), 4);

        // second row spans y in [40, 60]
        h.input.mousedown(10, 50, MouseButton::LEFT);
        h.frame(&mut [&mut w]);
        assert!(!dd(&w).is_dropped());
        assert_eq!(dd(&w).active_item(), Some("green"));

        h.frame(&mut [&mut w]);
        h.input.mouseup(10, 50, MouseButton::LEFT);
        h.frame(&mut [&mut w]);
        assert!(!dd(&w).is_dropped());
        assert_eq!(h.texts().len(), 1);
    }

    #[test]
    fn press_started_on_the_box_does_not_pick_rows() {
        let mut h = Harness::new();
        let mut w = list(&["a", "b"]);
        h.input.mousedown(10, 10, MouseButton::LEFT);
        h.frame(&mut [&mut w]);
        // drag down over the freshly opened rows without releasing
        h.input.mousemove(10, 30);
        h.frame(&mut [&mut w]);
        assert!(dd(&w).is_dropped());
        assert_eq!(dd(&w).active_index(), 0);
    }
}
