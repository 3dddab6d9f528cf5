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
use crate::{Vec2i, vec2};
use bitflags::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Mouse button state as reported by the input system.
    pub struct MouseButton : u32 {
        /// Middle mouse button.
        const MIDDLE = 4;
        /// Right mouse button.
        const RIGHT = 2;
        /// Left (primary) mouse button.
        const LEFT = 1;
        /// No buttons pressed.
        const NONE = 0;
    }
}

impl MouseButton {
    /// Returns `true` if the middle mouse button is pressed.
    pub fn is_middle(&self) -> bool { self.intersects(Self::MIDDLE) }
    /// Returns `true` if the right mouse button is pressed.
    pub fn is_right(&self) -> bool { self.intersects(Self::RIGHT) }
    /// Returns `true` if the left mouse button is pressed.
    pub fn is_left(&self) -> bool { self.intersects(Self::LEFT) }
    /// Returns `true` if no mouse buttons are pressed.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Keys the widget layer reacts to.
    pub struct KeyCode : u32 {
        /// Any key that produces a printable character.
        const CHARACTER = 512;
        /// Return/Enter key.
        const RETURN = 256;
        /// Backspace key.
        const BACKSPACE = 128;
        /// Delete key.
        const DELETE = 64;
        /// Home key.
        const HOME = 32;
        /// End key.
        const END = 16;
        /// Right arrow key.
        const RIGHT = 8;
        /// Left arrow key.
        const LEFT = 4;
        /// Down arrow key.
        const DOWN = 2;
        /// Up arrow key.
        const UP = 1;
        /// No keys pressed.
        const NONE = 0;
    }
}

impl KeyCode {
    /// Returns `true` if no key is pressed.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
    /// Returns `true` if Backspace is pressed.
    pub fn is_backspace(&self) -> bool { self.intersects(Self::BACKSPACE) }
    /// Returns `true` if Delete is pressed.
    pub fn is_delete(&self) -> bool { self.intersects(Self::DELETE) }
    /// Returns `true` if Home is pressed.
    pub fn is_home(&self) -> bool { self.intersects(Self::HOME) }
    /// Returns `true` if End is pressed.
    pub fn is_end(&self) -> bool { self.intersects(Self::END) }
    /// Returns `true` if left is pressed.
    pub fn is_left(&self) -> bool { self.intersects(Self::LEFT) }
    /// Returns `true` if right is pressed.
    pub fn is_right(&self) -> bool { self.intersects(Self::RIGHT) }
}

#[derive(Clone, Debug)]
/// Aggregates raw pointer and keyboard input for the current frame.
///
/// The host feeds device events into the accumulator between frames; held state (pointer
/// position, buttons and keys down) persists, while per-frame edges (keys pressed this frame
/// and typed text) are cleared once the frame has been drawn.
pub struct Input {
    mouse_pos: Vec2i,
    mouse_down: MouseButton,
    mouse_pressed: MouseButton,
    key_down: KeyCode,
    key_pressed: KeyCode,
    input_text: String,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            mouse_pos: Vec2i::default(),
            mouse_down: MouseButton::NONE,
            mouse_pressed: MouseButton::NONE,
            key_down: KeyCode::NONE,
            key_pressed: KeyCode::NONE,
            input_text: String::default(),
        }
    }
}

impl Input {
    /// Returns the pointer position in screen pixels.
    pub fn mouse_pos(&self) -> Vec2i { self.mouse_pos }

    /// Returns the currently held mouse buttons.
    pub fn mouse_buttons(&self) -> MouseButton { self.mouse_down }

    /// Returns the mouse buttons that went down since the last frame.
    pub fn mouse_pressed(&self) -> MouseButton { self.mouse_pressed }

    /// Returns `true` while the primary (left) button is held.
    pub fn is_primary_down(&self) -> bool { self.mouse_down.is_left() }

    /// Returns `true` while the secondary (right) button is held.
    pub fn is_secondary_down(&self) -> bool { self.mouse_down.is_right() }

    /// Returns the set of keys currently held.
    pub fn key_codes(&self) -> KeyCode { self.key_down }

    /// Returns the keys that went down since the last frame.
    pub fn key_pressed(&self) -> KeyCode { self.key_pressed }

    /// Returns `true` if any key is held or text was typed this frame.
    pub fn is_any_key_down(&self) -> bool { !self.key_down.is_none() || !self.input_text.is_empty() }

    /// Returns the accumulated UTF-8 text entered this frame.
    pub fn text_input(&self) -> &str { &self.input_text }

    /// Updates the current mouse pointer position.
    pub fn mousemove(&mut self, x: i32, y: i32) { self.mouse_pos = vec2(x, y); }

    /// Records that the specified mouse button was pressed.
    pub fn mousedown(&mut self, x: i32, y: i32, btn: MouseButton) {
        self.mousemove(x, y);
        self.mouse_down |= btn;
        self.mouse_pressed |= btn;
    }

    /// Records that the specified mouse button was released.
    pub fn mouseup(&mut self, x: i32, y: i32, btn: MouseButton) {
        self.mousemove(x, y);
        self.mouse_down &= !btn;
    }

    /// Records that a key was pressed.
    pub fn keydown(&mut self, key: KeyCode) {
        self.key_pressed |= key;
        self.key_down |= key;
    }

    /// Records that a key was released.
    pub fn keyup(&mut self, key: KeyCode) { self.key_down &= !key; }

    /// Appends typed UTF-8 text to the input buffer.
    pub fn text(&mut self, text: &str) { self.input_text.push_str(text); }

    pub(crate) fn epilogue(&mut self) {
        self.key_pressed = KeyCode::NONE;
        self.mouse_pressed = MouseButton::NONE;
        self.input_text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_state_survives_epilogue() {
        let mut input = Input::default();
        input.mousedown(4, 5, MouseButton::LEFT);
        input.keydown(KeyCode::LEFT);
        input.text("ab");
        assert!(input.mouse_pressed().is_left());
        assert!(input.key_pressed().is_left());

        input.epilogue();

        assert!(input.is_primary_down());
        assert!(input.key_codes().is_left());
        assert!(input.mouse_pressed().is_none());
        assert!(input.key_pressed().is_none());
        assert!(input.text_input().is_empty());
        assert_eq!((input.mouse_pos().x, input.mouse_pos().y), (4, 5));
    }

    #[test]
    fn typed_text_counts_as_key_activity() {
        let mut input = Input::default();
        assert!(!input.is_any_key_down());
        input.text("x");
        assert!(input.is_any_key_down());
        input.epilogue();
        assert!(!input.is_any_key_down());
    }

    #[test]
    fn mouseup_releases_only_that_button() {
        let mut input = Input::default();
        input.mousedown(0, 0, MouseButton::LEFT | MouseButton::RIGHT);
        input.mouseup(1, 1, MouseButton::LEFT);
        assert!(!input.is_primary_down());
        assert!(input.is_secondary_down());
    }
}
