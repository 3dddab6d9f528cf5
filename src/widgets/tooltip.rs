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
use std::{cell::RefCell, rc::Rc, time::Duration};

use crate::{Color, FontHandle, Layer, Real, Style, TextRun, Texture, Vec2i, measure_scaled, vec2f};

use super::WidgetCtx;

/// What a tooltip shows.
pub enum TooltipContent {
    /// Text on a flat background sized to the text.
    Text {
        /// Displayed string.
        text: String,
        /// Font used to measure and draw the text.
        font: FontHandle,
        /// Text color.
        color: Color,
    },
    /// A picture.
    Picture {
        /// Picture texture.
        texture: Texture,
        /// Uniform scale.
        scale: Real,
    },
}

/// Returns the opacity of a tooltip that has been selected for `selected_for`, or `None` while it
/// is still hidden.
///
/// The opacity ramps linearly from 0 to 1 over `fade_in` once `show_time` has elapsed and holds
/// at 1 afterwards.
pub fn fade_alpha(selected_for: Duration, show_time: Duration, fade_in: Duration) -> Option<Real> {
    if selected_for < show_time {
        return None;
    }
    if fade_in.is_zero() {
        return Some(1.0);
    }
    let t = (selected_for - show_time).as_micros() as f64 / fade_in.as_micros() as f64;
    Some(t.min(1.0) as Real)
}

/// Delayed, fading overlay shown next to the pointer while its widget stays selected.
pub struct Tooltip {
    /// Displayed content.
    pub content: TooltipContent,
    /// Background tint behind text content.
    pub background: Color,
    /// Selection time before the tooltip appears.
    pub show_time: Duration,
    /// Fade-in duration after it appears.
    pub fade_in: Duration,
    /// Offset from the pointer.
    pub offset: Vec2i,
    /// Free-form label.
    pub tag: Option<String>,
    selected_for: Duration,
}

impl Tooltip {
    fn with_content(content: TooltipContent) -> Self {
        let style = Style::default();
        Self {
            content,
            background: style.tooltip_background,
            show_time: style.tooltip_show_time,
            fade_in: style.tooltip_fade_in,
            offset: style.tooltip_offset,
            tag: None,
            selected_for: Duration::ZERO,
        }
    }

    /// Creates a text tooltip.
    pub fn text(text: &str, font: FontHandle, color: Color) -> Self {
        Self::with_content(TooltipContent::Text { text: text.to_string(), font, color })
    }

    /// Creates a picture tooltip.
    pub fn picture(texture: Texture, scale: Real) -> Self { Self::with_content(TooltipContent::Picture { texture, scale }) }

    /// Sets the tag.
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    /// Replaces the text of a text tooltip. Picture tooltips are left unchanged.
    pub fn set_text(&mut self, new_text: &str) {
        if let TooltipContent::Text { text, .. } = &mut self.content {
            *text = new_text.to_string();
        }
    }

    /// Replaces the content with a picture.
    pub fn set_picture(&mut self, texture: Texture, scale: Real) { self.content = TooltipContent::Picture { texture, scale }; }

    /// Time the bound widget has been selected without interruption.
    pub fn selected_for(&self) -> Duration { self.selected_for }

    /// Current opacity, `None` while hidden.
    pub fn alpha(&self) -> Option<Real> { fade_alpha(self.selected_for, self.show_time, self.fade_in) }

    /// Advances the timer by `elapsed` while `selected`, resets it otherwise, and returns the
    /// resulting opacity.
    pub fn update(&mut self, selected: bool, elapsed: Duration) -> Option<Real> {
        if !selected {
            self.selected_for = Duration::ZERO;
            return None;
        }
        self.selected_for += elapsed;
        self.alpha()
    }

    pub(crate) fn apply_style(&mut self, style: &Style) {
        self.background = style.tooltip_background;
        self.show_time = style.tooltip_show_time;
        self.fade_in = style.tooltip_fade_in;
        self.offset = style.tooltip_offset;
    }

    fn show(&self, ctx: &mut WidgetCtx, alpha: Real) {
        let pointer = ctx.pointer();
        let pos = vec2f(pointer.x + self.offset.x as Real, pointer.y + self.offset.y as Real);
        match &self.content {
            TooltipContent::Picture { texture, scale } => {
                ctx.commands().push_texture(texture, pos, Color::WHITE.with_alpha(alpha), *scale, Layer::UpperPicture);
            }
            TooltipContent::Text { text, font, color } => {
                if text.is_empty() {
                    return;
                }
                let size = measure_scaled(&**font, text, 1.0);
                if let Some(white) = ctx.white() {
                    ctx.commands().push_sprite(&white, pos, None, self.background.with_alpha(alpha), size, Layer::UpperTexture);
                }
                ctx.commands().push_text(TextRun {
                    font: font.id(),
                    text: text.clone(),
                    pos,
                    color: color.with_alpha(alpha),
                    origin: vec2f(0.0, 0.0),
                    scale: 1.0,
                    layer: Layer::UpperText.depth(),
                });
            }
        }
    }
}

#[derive(Clone)]
/// Shared handle to a registered tooltip.
pub struct TooltipHandle(Rc<RefCell<Tooltip>>);

impl TooltipHandle {
    pub(crate) fn new(tooltip: Tooltip) -> Self { Self(Rc::new(RefCell::new(tooltip))) }

    /// Executes `f` with a shared reference to the tooltip.
    pub fn with<R>(&self, f: impl FnOnce(&Tooltip) -> R) -> R { f(&self.0.borrow()) }

    /// Executes `f` with a mutable reference to the tooltip.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Tooltip) -> R) -> R { f(&mut self.0.borrow_mut()) }

    /// Returns `true` if both handles refer to the same tooltip.
    pub fn ptr_eq(&self, other: &TooltipHandle) -> bool { Rc::ptr_eq(&self.0, &other.0) }

    pub(crate) fn activate(&self, selected: bool, ctx: &mut WidgetCtx) {
        let mut tooltip = self.0.borrow_mut();
        if let Some(alpha) = tooltip.update(selected, ctx.elapsed()) {
            tooltip.show(ctx, alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedFont;

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    #[test]
    fn fades_in_after_show_time() {
        let mut tip = Tooltip::text("hint", Rc::new(FixedFont::new(8.0, 16.0)), Color::BLACK);
        assert_eq!(tip.update(true, ms(300)), None);
        assert_eq!(tip.update(true, ms(300)), Some(0.0));
        assert_eq!(tip.update(true, ms(100)), Some(0.5));
        assert_eq!(tip.update(true, ms(100)), Some(1.0));
        assert_eq!(tip.update(true, ms(500)), Some(1.0));
    }

    #[test]
    fn losing_selection_resets_the_timer() {
        let mut tip = Tooltip::picture(Texture::new(crate::TextureId(1), 4, 4), 1.0);
        tip.update(true, ms(700));
        assert_eq!(tip.update(false, ms(16)), None);
        assert_eq!(tip.selected_for(), Duration::ZERO);
        assert_eq!(tip.update(true, ms(599)), None);
    }

    #[test]
    fn zero_fade_is_fully_opaque() {
        assert_eq!(fade_alpha(ms(600), ms(600), Duration::ZERO), Some(1.0));
        assert_eq!(fade_alpha(ms(599), ms(600), Duration::ZERO), None);
    }
}
