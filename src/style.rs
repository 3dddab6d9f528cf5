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

use crate::{Color, Dimensioni, Vec2i, color, vec2};

#[derive(Copy, Clone, Debug)]
/// Defaults and timings shared by the widgets created through a [`Gui`](crate::Gui).
pub struct Style {
    /// Tint applied to a selected widget unless the widget overrides it.
    pub selection_color: Color,
    /// Background of drop-down rows.
    pub list_color: Color,
    /// Background of the drop-down row under the pointer.
    pub list_hover_color: Color,
    /// Text color used by text boxes and lists.
    pub text_color: Color,
    /// Caret color of text boxes.
    pub caret_color: Color,
    /// Background behind tooltip text.
    pub tooltip_background: Color,
    /// Time a widget stays selected before its tooltip starts to appear.
    pub tooltip_show_time: Duration,
    /// Duration of the tooltip fade-in.
    pub tooltip_fade_in: Duration,
    /// Offset from the pointer to the tooltip's top-left corner.
    pub tooltip_offset: Vec2i,
    /// Caret blink half-period.
    pub caret_blink: Duration,
    /// Delay before a held navigation key starts repeating.
    pub key_repeat_delay: Duration,
    /// Interval between repeats of a held navigation key.
    pub key_repeat_interval: Duration,
    /// Size of text boxes created with [`Gui::new_text_box`](crate::Gui::new_text_box).
    pub text_box_size: Dimensioni,
    /// Size of drop-down lists created with [`Gui::new_drop_down`](crate::Gui::new_drop_down).
    pub drop_down_size: Dimensioni,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            selection_color: color(144, 238, 144, 255),
            list_color: color(211, 211, 211, 255),
            list_hover_color: color(112, 128, 144, 255),
            text_color: Color::BLACK,
            caret_color: Color::BLACK,
            tooltip_background: color(255, 255, 225, 255),
            tooltip_show_time: Duration::from_millis(600),
            tooltip_fade_in: Duration::from_millis(200),
            tooltip_offset: vec2(0, 20),
            caret_blink: Duration::from_millis(500),
            key_repeat_delay: Duration::from_millis(400),
            key_repeat_interval: Duration::from_millis(25),
            text_box_size: Dimensioni::new(200, 25),
            drop_down_size: Dimensioni::new(180, 25),
        }
    }
}
