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

use crate::widgets::WidgetCtx;
use crate::{
    Command, CommandBuffer, Font, FontId, Input, PressToken, Real, Renderer, Sprite, Style, TextRun, Texture, TextureId, Vec2f, Widget, vec2f,
};

pub(crate) enum Recorded {
    Sprite(Sprite),
    Text(TextRun),
}

#[derive(Default)]
pub(crate) struct RecordingRenderer {
    pub created: Vec<(TextureId, i32, i32, Vec<u8>)>,
    pub destroyed: Vec<TextureId>,
    pub frame: Vec<Recorded>,
    pub frames: usize,
    pub viewport: (i32, i32),
}

impl Renderer for RecordingRenderer {
    fn begin(&mut self, width: i32, height: i32) {
        self.frame.clear();
        self.viewport = (width, height);
    }
    fn draw_sprite(&mut self, sprite: &Sprite) { self.frame.push(Recorded::Sprite(sprite.clone())) }
    fn draw_text(&mut self, text: &TextRun) { self.frame.push(Recorded::Text(text.clone())) }
    fn end(&mut self) { self.frames += 1 }
    fn create_texture(&mut self, id: TextureId, width: i32, height: i32, pixels: &[u8]) { self.created.push((id, width, height, pixels.to_vec())) }
    fn destroy_texture(&mut self, id: TextureId) { self.destroyed.push(id) }
}

impl RecordingRenderer {
    pub fn sprites(&self) -> Vec<Sprite> {
        self.frame
            .iter()
            .filter_map(|c| match c {
                Recorded::Sprite(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<TextRun> {
        self.frame
            .iter()
            .filter_map(|c| match c {
                Recorded::Text(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Monospaced font; `widths` overrides the width of strings by character count.
pub(crate) struct FixedFont {
    advance: Real,
    height: Real,
    missing: Vec<char>,
    widths: Vec<Real>,
}

impl FixedFont {
    pub fn new(advance: Real, height: Real) -> Self { Self { advance, height, missing: Vec::new(), widths: Vec::new() } }

    pub fn without(mut self, ch: char) -> Self {
        self.missing.push(ch);
        self
    }

    pub fn with_widths(mut self, widths: &[Real]) -> Self {
        self.widths = widths.to_vec();
        self
    }
}

impl Font for FixedFont {
    fn id(&self) -> FontId { FontId(7) }
    fn supports(&self, ch: char) -> bool { !self.missing.contains(&ch) }
    fn measure(&self, text: &str) -> Vec2f {
        let n = text.chars().count();
        let width = self.widths.get(n).copied().unwrap_or(n as Real * self.advance);
        vec2f(width, self.height)
    }
}

/// Drives widgets frame by frame without a [`Gui`](crate::Gui).
pub(crate) struct Harness {
    pub input: Input,
    pub token: PressToken,
    pub style: Style,
    pub elapsed: Duration,
    pub white: Option<Texture>,
    commands: CommandBuffer,
    last: Vec<Command>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            input: Input::default(),
            token: PressToken::default(),
            style: Style::default(),
            elapsed: Duration::from_millis(16),
            white: Some(Texture::new(TextureId(999), 1, 1)),
            commands: CommandBuffer::default(),
            last: Vec::new(),
        }
    }

    /// Draws `widgets` in order and returns which of them started a press episode.
    pub fn frame(&mut self, widgets: &mut [&mut Widget]) -> Vec<bool> {
        let mut ctx = WidgetCtx::new(&self.input, &mut self.token, &mut self.commands, &self.style, self.white, self.elapsed);
        let clicked = widgets.iter_mut().map(|w| w.draw(&mut ctx)).collect();
        self.input.epilogue();
        self.last = self.commands.commands().to_vec();
        self.commands.clear();
        clicked
    }

    pub fn sprites(&self) -> Vec<Sprite> {
        self.last
            .iter()
            .filter_map(|c| match c {
                Command::Sprite(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<TextRun> {
        self.last
            .iter()
            .filter_map(|c| match c {
                Command::Text(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }
}
