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
use std::time::Duration;

use crate::{Color, FontHandle, Input, KeyCode, Layer, Real, Style, TextRun, Texture, supports_all, vec2f};

use super::{EditBuffer, NavKey, WidgetBase, WidgetCtx, draw_base, probe};

fn held_navigation(keys: KeyCode) -> Option<NavKey> {
    if keys.is_left() {
        Some(NavKey::Left)
    } else if keys.is_right() {
        Some(NavKey::Right)
    } else if keys.is_home() {
        Some(NavKey::Home)
    } else if keys.is_end() {
        Some(NavKey::End)
    } else {
        None
    }
}

/// Single-line text input.
///
/// A press on the box enters edit mode; a primary-button press anywhere else leaves it. Typed
/// characters are inserted at the caret when the font supports them, the text still fits the
/// box (unless `overflow` is set) and `max_chars` is not reached. Held navigation keys repeat
/// after an initial delay.
pub struct TextBox {
    pub(crate) texture: Texture,
    buffer: EditBuffer,
    font: FontHandle,
    /// Text color.
    pub text_color: Color,
    /// Caret color, the style's caret color when `None`.
    pub caret_color: Option<Color>,
    /// Accept characters even if the text no longer fits the box.
    pub overflow: bool,
    /// Maximum number of characters.
    pub max_chars: usize,
    /// Horizontal padding before the text, in pixels.
    pub indent: Real,
    editing: bool,
    caret_visible: bool,
    blink_timer: Duration,
    key_timer: Duration,
    repeat_timer: Duration,
    key_ready: bool,
}

impl TextBox {
    /// Creates a text box drawn with `texture`. Text containing unsupported characters is
    /// replaced by an empty string.
    pub fn new(texture: Texture, text: &str, font: FontHandle) -> Self {
        let text = if supports_all(&*font, text) { text } else { "" };
        Self {
            texture,
            buffer: EditBuffer::new(text),
            font,
            text_color: Color::BLACK,
            caret_color: None,
            overflow: false,
            max_chars: u16::MAX as usize,
            indent: 0.0,
            editing: false,
            caret_visible: true,
            blink_timer: Duration::ZERO,
            key_timer: Duration::ZERO,
            repeat_timer: Duration::ZERO,
            key_ready: true,
        }
    }

    /// Current text.
    pub fn text(&self) -> &str { self.buffer.text() }

    /// Replaces the text. Rejected (returns `false`) if any character is unsupported by the font.
    pub fn set_text(&mut self, text: &str) -> bool {
        if !supports_all(&*self.font, text) {
            return false;
        }
        self.buffer.replace(text);
        true
    }

    /// Caret position as a character index.
    pub fn caret(&self) -> usize { self.buffer.caret() }

    /// Moves the caret, clamped to the text.
    pub fn set_caret(&mut self, index: usize) { self.buffer.set_caret(index) }

    /// Returns `true` while the box takes keyboard input.
    pub fn is_editing(&self) -> bool { self.editing }

    /// Returns `true` if the caret is currently shown.
    pub fn is_caret_visible(&self) -> bool { self.caret_visible }

    /// Inserts `ch` at the caret if the font supports it, it fits into `width` pixels and the
    /// length limit allows it. Returns `true` if the character was inserted.
    pub fn insert_char(&mut self, ch: char, width: Real) -> bool {
        if !self.font.supports(ch) || self.buffer.char_count() >= self.max_chars {
            return false;
        }
        if !self.overflow && self.font.measure(&self.buffer.with_inserted(ch)).x + self.indent >= width {
            return false;
        }
        self.buffer.insert(ch);
        true
    }

    fn edit(&mut self, input: &Input, width: Real) {
        for ch in input.text_input().chars().filter(|c| !c.is_control()) {
            self.insert_char(ch, width);
        }
        if input.key_pressed().is_backspace() {
            self.buffer.delete_prev();
        }
        if input.key_pressed().is_delete() {
            self.buffer.delete_next();
        }
    }

    fn poll_navigation(&mut self, input: &Input, style: &Style, dt: Duration) {
        if !input.is_any_key_down() {
            self.key_ready = true;
            self.key_timer = Duration::ZERO;
        } else {
            self.key_timer += dt;
        }
        let repeating = self.key_timer >= style.key_repeat_delay;
        if !self.key_ready && !repeating {
            return;
        }
        if repeating {
            self.repeat_timer += dt;
            if self.repeat_timer < style.key_repeat_interval {
                return;
            }
            self.repeat_timer = Duration::ZERO;
        }
        if let Some(key) = held_navigation(input.key_codes()) {
            self.buffer.navigate(key);
            self.key_ready = false;
        }
    }

    fn blink(&mut self, input: &Input, style: &Style, dt: Duration) {
        if input.is_any_key_down() {
            self.caret_visible = true;
            return;
        }
        self.blink_timer += dt;
        if self.blink_timer >= style.caret_blink {
            self.blink_timer = Duration::ZERO;
            self.caret_visible = !self.caret_visible;
        }
    }

    pub(crate) fn draw(&mut self, base: &mut WidgetBase, ctx: &mut WidgetCtx) -> bool {
        let pressed = probe(base, ctx);
        let clicked = draw_base(base, ctx);
        if pressed {
            self.editing = true;
        } else if ctx.input().is_primary_down() {
            self.editing = false;
        }

        let extent = base.extent();
        let center_y = base.position.y + extent.y / 2.0;
        if self.editing && base.is_interactive() {
            let dt = ctx.elapsed();
            let style = *ctx.style();
            let input = ctx.input().clone();
            self.edit(&input, extent.x);
            self.poll_navigation(&input, &style, dt);
            self.blink(&input, &style, dt);

            if self.caret_visible {
                if let Some(white) = ctx.white() {
                    let height = self.font.measure("|").y;
                    let x = base.position.x + self.indent + self.font.measure(self.buffer.before_caret()).x;
                    let color = self.caret_color.unwrap_or(style.caret_color);
                    ctx.commands()
                        .push_sprite(&white, vec2f(x - 0.5, center_y - height / 2.0), None, color, vec2f(1.0, height), Layer::MiddleText);
                }
            }
        }

        let size = self.font.measure(self.buffer.text());
        ctx.commands().push_text(TextRun {
            font: self.font.id(),
            text: self.buffer.text().to_string(),
            pos: vec2f(base.position.x + self.indent, center_y),
            color: self.text_color,
            origin: vec2f(0.0, size.y / 2.0),
            scale: 1.0,
            layer: Layer::MiddleText.depth(),
        });
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FixedFont, Harness};
    use crate::{Dock, MouseButton, TextureId, Widget, vec2};
    use std::rc::Rc;

    fn text_box(font: FixedFont, text: &str) -> Widget {
        let texture = Texture::new(TextureId(1), 100, 25);
        Widget::new(Dock::CornerTopLeft, vec2(0, 0), 1.0, TextBox::new(texture, text, Rc::new(font)))
    }

    fn tb(w: &Widget) -> &TextBox { w.kind.as_text_box().unwrap() }

    fn focus(h: &mut Harness, w: &mut Widget) {
        h.input.mousedown(10, 10, MouseButton::LEFT);
        h.frame(&mut [&mut *w]);
        h.input.mouseup(10, 10, MouseButton::LEFT);
        h.frame(&mut [&mut *w]);
        assert!(tb(w).is_editing());
    }

    #[test]
    fn fourth_character_rejected_by_width() {
        let mut h = Harness::new();
        let font = FixedFont::new(30.0, 16.0).with_widths(&[0.0, 30.0, 60.0, 95.0, 110.0]);
        let mut w = text_box(font, "");
        focus(&mut h, &mut w);
        h.input.text("abcd");
        h.frame(&mut [&mut w]);
        assert_eq!(tb(&w).text(), "abc");
        assert_eq!(tb(&w).caret(), 3);
    }

    #[test]
    fn overflow_and_length_limit() {
        let mut h = Harness::new();
        let mut w = text_box(FixedFont::new(40.0, 16.0), "");
        w.kind.as_text_box_mut().unwrap().overflow = true;
        w.kind.as_text_box_mut().unwrap().max_chars = 4;
        focus(&mut h, &mut w);
        h.input.text("abcdef");
        h.frame(&mut [&mut w]);
        assert_eq!(tb(&w).text(), "abcd");
    }

    #[test]
    fn unsupported_characters_are_ignored() {
        let mut h = Harness::new();
        let mut w = text_box(FixedFont::new(8.0, 16.0).without('#'), "");
        focus(&mut h, &mut w);
        h.input.text("a#b");
        h.frame(&mut [&mut w]);
        assert_eq!(tb(&w).text(), "ab");
        let tbm = w.kind.as_text_box_mut().unwrap();
        assert!(!tbm.set_text("x#y"));
        assert_eq!(tbm.text(), "ab");
        assert!(tbm.set_text("xyz"));
    }

    #[test]
    fn typing_is_ignored_outside_edit_mode() {
        let mut h = Harness::new();
        let mut w = text_box(FixedFont::new(8.0, 16.0), "");
        h.input.text("abc");
        h.frame(&mut [&mut w]);
        assert_eq!(tb(&w).text(), "");
    }

    #[test]
    fn click_outside_leaves_edit_mode() {
        let mut h = Harness::new();
        let mut w = text_box(FixedFont::new(8.0, 16.0), "");
        focus(&mut h, &mut w);
        h.input.mousedown(300, 300, MouseButton::LEFT);
        h.frame(&mut [&mut w]);
        assert!(!tb(&w).is_editing());
    }

    #[test]
    fn backspace_and_delete_edit_once_per_key_press() {
        let mut h = Harness::new();
        let mut w = text_box(FixedFont::new(8.0, 16.0), "abcd");
        focus(&mut h, &mut w);
        w.kind.as_text_box_mut().unwrap().set_caret(2);

        h.input.keydown(KeyCode::BACKSPACE);
        h.frame(&mut [&mut w]);
        h.frame(&mut [&mut w]);
        assert_eq!((tb(&w).text(), tb(&w).caret()), ("acd", 1));
        h.input.keyup(KeyCode::BACKSPACE);

        h.input.keydown(KeyCode::DELETE);
        h.frame(&mut [&mut w]);
        assert_eq!((tb(&w).text(), tb(&w).caret()), ("ad", 1));
    }

    #[test]
    fn held_navigation_key_repeats_after_delay() {
        let mut h = Harness::new();
        h.elapsed = Duration::from_millis(25);
        let mut w = text_box(FixedFont::new(1.0, 16.0), "abcdefghijklmnopqrstuvwxyz");
        focus(&mut h, &mut w);
        assert_eq!(tb(&w).caret(), 0);

        h.input.keydown(KeyCode::RIGHT);
        h.frame(&mut [&mut w]);
        assert_eq!(tb(&w).caret(), 1);
        // 375ms more of holding, still inside the arm delay
        for _ in 0..14 {
            h.frame(&mut [&mut w]);
        }
        assert_eq!(tb(&w).caret(), 1);
        h.frame(&mut [&mut w]);
        assert_eq!(tb(&w).caret(), 2);
        h.frame(&mut [&mut w]);
        assert_eq!(tb(&w).caret(), 3);

        h.input.keyup(KeyCode::RIGHT);
        h.frame(&mut [&mut w]);
        h.input.keydown(KeyCode::HOME);
        h.frame(&mut [&mut w]);
        assert_eq!(tb(&w).caret(), 0);
    }

    #[test]
    fn caret_blinks_only_while_idle() {
        let mut h = Harness::new();
        h.elapsed = Duration::from_millis(250);
        let mut w = text_box(FixedFont::new(8.0, 16.0), "ab");
        focus(&mut h, &mut w);
        // focus ran two idle frames (500ms)
        assert!(!tb(&w).is_caret_visible());
        h.input.keydown(KeyCode::LEFT);
        h.frame(&mut [&mut w]);
        assert!(tb(&w).is_caret_visible());
        h.frame(&mut [&mut w]);
        h.frame(&mut [&mut w]);
        assert!(tb(&w).is_caret_visible());
    }
}
