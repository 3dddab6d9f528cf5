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
//! Caret-indexed editing of a single-line UTF-8 buffer.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Caret movement keys polled through the key-repeat timer.
pub enum NavKey {
    /// One character towards the start.
    Left,
    /// One character towards the end.
    Right,
    /// Start of the buffer.
    Home,
    /// End of the buffer.
    End,
}

#[derive(Clone, Debug, Default)]
/// Text buffer with a caret kept on a character boundary.
pub struct EditBuffer {
    text: String,
    // byte offset, always on a char boundary
    cursor: usize,
}

fn prev_boundary(buf: &str, cursor: usize) -> usize {
    if cursor == 0 {
        return 0;
    }
    let mut new_cursor = cursor - 1;
    while new_cursor > 0 && !buf.is_char_boundary(new_cursor) {
        new_cursor -= 1;
    }
    new_cursor
}

fn next_boundary(buf: &str, cursor: usize) -> usize {
    if cursor >= buf.len() {
        return buf.len();
    }
    let mut new_cursor = cursor + 1;
    while new_cursor < buf.len() && !buf.is_char_boundary(new_cursor) {
        new_cursor += 1;
    }
    new_cursor
}

impl EditBuffer {
    /// Creates a buffer holding `text` with the caret at the start.
    pub fn new(text: &str) -> Self { Self { text: text.to_string(), cursor: 0 } }

    /// Current contents.
    pub fn text(&self) -> &str { &self.text }

    /// Number of characters.
    pub fn char_count(&self) -> usize { self.text.chars().count() }

    /// Caret position as a character index in `[0, char_count]`.
    pub fn caret(&self) -> usize { self.text[..self.cursor].chars().count() }

    /// Text in front of the caret.
    pub fn before_caret(&self) -> &str { &self.text[..self.cursor] }

    /// Places the caret at character index `index`, clamped to the buffer.
    pub fn set_caret(&mut self, index: usize) {
        self.cursor = self.text.char_indices().nth(index).map(|(i, _)| i).unwrap_or(self.text.len());
    }

    /// Replaces the contents; the caret keeps its index, clamped to the new length.
    pub fn replace(&mut self, text: &str) {
        let caret = self.caret();
        self.text.clear();
        self.text.push_str(text);
        self.set_caret(caret);
    }

    /// Moves the caret without touching the text. Returns `true` if it moved.
    pub fn navigate(&mut self, key: NavKey) -> bool {
        let old = self.cursor;
        self.cursor = match key {
            NavKey::Left => prev_boundary(&self.text, self.cursor),
            NavKey::Right => next_boundary(&self.text, self.cursor),
            NavKey::Home => 0,
            NavKey::End => self.text.len(),
        };
        old != self.cursor
    }

    /// Inserts `ch` at the caret and advances the caret past it.
    pub fn insert(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Removes the character before the caret. Returns `true` if something was removed.
    pub fn delete_prev(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = prev_boundary(&self.text, self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
        true
    }

    /// Removes the character at the caret without moving it. Returns `true` if something was removed.
    pub fn delete_next(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        let end = next_boundary(&self.text, self.cursor);
        self.text.replace_range(self.cursor..end, "");
        true
    }

    /// Returns the contents with `ch` inserted at the caret, leaving the buffer untouched.
    pub fn with_inserted(&self, ch: char) -> String {
        let mut candidate = self.text.clone();
        candidate.insert(self.cursor, ch);
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_never_leaves_the_buffer() {
        let mut buf = EditBuffer::new("ab");
        assert!(!buf.navigate(NavKey::Left));
        assert_eq!(buf.caret(), 0);
        assert!(buf.navigate(NavKey::End));
        assert!(!buf.navigate(NavKey::Right));
        assert_eq!(buf.caret(), 2);
        assert!(buf.navigate(NavKey::Home));
        assert_eq!(buf.caret(), 0);
        assert_eq!(buf.text(), "ab");
    }

    #[test]
    fn backspace_and_delete_around_caret() {
        let mut buf = EditBuffer::new("abcd");
        buf.set_caret(2);
        assert!(buf.delete_prev());
        assert_eq!((buf.text(), buf.caret()), ("acd", 1));
        assert!(buf.delete_next());
        assert_eq!((buf.text(), buf.caret()), ("ad", 1));
        buf.navigate(NavKey::End);
        assert!(!buf.delete_next());
        buf.navigate(NavKey::Home);
        assert!(!buf.delete_prev());
    }

    #[test]
    fn multibyte_characters_count_as_one() {
        let mut buf = EditBuffer::new("héllo");
        buf.set_caret(2);
        assert_eq!(buf.before_caret(), "hé");
        buf.insert('ö');
        assert_eq!((buf.text(), buf.caret()), ("héöllo", 3));
        buf.navigate(NavKey::Left);
        buf.navigate(NavKey::Left);
        assert_eq!(buf.caret(), 1);
        assert!(buf.delete_next());
        assert_eq!(buf.text(), "höllo");
    }

    #[test]
    fn replace_clamps_caret() {
        let mut buf = EditBuffer::new("abcdef");
        buf.set_caret(5);
        buf.replace("xy");
        assert_eq!(buf.caret(), 2);
        buf.set_caret(99);
        assert_eq!(buf.caret(), 2);
    }
}
