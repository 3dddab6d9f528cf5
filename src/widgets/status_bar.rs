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
//! Fill indicators: the read-only [`ProgressBar`] and the draggable [`Slider`].

use crate::{Bounds, Color, GuiError, Layer, PressLatch, Real, Recti, Texture, Vec2f, vec2f};

use super::{WidgetBase, WidgetCtx, draw_base, probe};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
/// Axis a status bar fills along.
pub enum Alignment {
    #[default]
    /// Fills left to right.
    Horizontal,
    /// Fills top to bottom.
    Vertical,
}

impl Alignment {
    fn along(self, v: Vec2f) -> Real {
        match self {
            Alignment::Horizontal => v.x,
            Alignment::Vertical => v.y,
        }
    }
}

/// Source rectangle of `texture` covering the `status` fraction along `alignment`.
pub fn status_rect(texture: &Texture, status: Real, alignment: Alignment) -> Recti {
    match alignment {
        Alignment::Horizontal => Recti::new(0, 0, (texture.width() as Real * status) as i32, texture.height()),
        Alignment::Vertical => Recti::new(0, 0, texture.width(), (texture.height() as Real * status) as i32),
    }
}

fn clamp(v: Real, min: Real, max: Real) -> Real {
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}

/// Background texture partially covered by a tinted status texture.
pub struct ProgressBar {
    pub(crate) background: Texture,
    status_texture: Texture,
    status: Real,
    /// Tint of the filled part.
    pub progress_color: Color,
    /// Fill axis.
    pub alignment: Alignment,
}

impl ProgressBar {
    /// Creates a progress bar; `status` is clamped to `[0, 1]`.
    pub fn new(background: Texture, status_texture: Texture, status: Real) -> Self {
        let mut bar = Self { background, status_texture, status: 0.0, progress_color: Color::WHITE, alignment: Alignment::Horizontal };
        bar.set_status(status);
        bar
    }

    /// Filled fraction in `[0, 1]`.
    pub fn status(&self) -> Real { self.status }

    /// Sets the filled fraction, clamped to `[0, 1]`. NaN counts as empty.
    pub fn set_status(&mut self, status: Real) { self.status = if status.is_nan() { 0.0 } else { clamp(status, 0.0, 1.0) } }

    pub(crate) fn draw(&mut self, base: &mut WidgetBase, ctx: &mut WidgetCtx) -> bool {
        probe(base, ctx);
        let clicked = draw_base(base, ctx);
        let src = status_rect(&self.status_texture, self.status, self.alignment);
        ctx.commands()
            .push_sprite(&self.status_texture, base.position, Some(src), self.progress_color, vec2f(base.scale, base.scale), Layer::MiddlePicture);
        clicked
    }
}

/// Value selector dragged along a bar.
///
/// The widget's own texture is the handle; the bar is docked with the widget's anchor and drawn
/// at `bar_scale`. Without a step, clicking the bar jumps the value to the click point and keeps
/// dragging from there. With a step the value only moves by one step per frame while the handle
/// is dragged past the neighbouring step positions.
pub struct Slider {
    pub(crate) handle: Texture,
    background: Texture,
    status_texture: Texture,
    min: Real,
    max: Real,
    value: Real,
    step: Option<Real>,
    alignment: Alignment,
    /// Tint of the bar background.
    pub background_color: Color,
    /// Tint of the filled part of the bar.
    pub status_color: Color,
    bar_scale: Real,
    bar_pos: Vec2f,
    first_press: bool,
    handle_offset: Real,
    bar_latch: PressLatch,
}

impl Slider {
    /// Creates a horizontal slider over `[min, max]`.
    pub fn new(min: Real, max: Real, value: Real, background: Texture, status_texture: Texture, handle: Texture) -> Self {
        let mut slider = Self {
            handle,
            background,
            status_texture,
            min,
            max,
            value: min,
            step: None,
            alignment: Alignment::Horizontal,
            background_color: Color::WHITE,
            status_color: Color::WHITE,
            bar_scale: 1.0,
            bar_pos: Vec2f::default(),
            first_press: false,
            handle_offset: 0.0,
            bar_latch: PressLatch::default(),
        };
        slider.set_value(value);
        slider
    }

    /// Quantizes dragging to `step`. Non-positive steps are ignored.
    pub fn with_step(mut self, step: Real) -> Self {
        self.set_step(Some(step));
        self
    }

    /// Sets the fill axis.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the scale of the bar textures.
    pub fn with_bar_scale(mut self, bar_scale: Real) -> Self {
        self.bar_scale = bar_scale;
        self
    }

    /// Sets the bar background and filled-part tints.
    pub fn with_colors(mut self, background: Color, status: Color) -> Self {
        self.background_color = background;
        self.status_color = status;
        self
    }

    /// Lower bound.
    pub fn min(&self) -> Real { self.min }

    /// Upper bound.
    pub fn max(&self) -> Real { self.max }

    /// Current value in `[min, max]`.
    pub fn value(&self) -> Real { self.value }

    /// Sets the value, clamped to `[min, max]`.
    pub fn set_value(&mut self, value: Real) {
        if !value.is_nan() {
            self.value = clamp(value, self.min, self.max);
        }
    }

    /// Step granularity, if any.
    pub fn step(&self) -> Option<Real> { self.step }

    /// Sets or clears the step. Non-positive or non-finite steps clear it.
    pub fn set_step(&mut self, step: Option<Real>) { self.step = step.filter(|s| s.is_finite() && *s > 0.0) }

    /// Fill axis.
    pub fn alignment(&self) -> Alignment { self.alignment }

    /// Fraction of the range covered by the value.
    pub fn status(&self) -> Real { (self.value - self.min) / (self.max - self.min) }

    /// Top-left screen position of the bar.
    pub fn bar_position(&self) -> Vec2f { self.bar_pos }

    pub(crate) fn release(&mut self, ctx: &mut WidgetCtx) {
        ctx.reset_press_state(&mut self.bar_latch);
        self.first_press = false;
    }

    pub(crate) fn validate(&self) -> Result<(), GuiError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(GuiError::InvalidRange { min: self.min, max: self.max });
        }
        if !self.bar_scale.is_finite() || self.bar_scale < 0.0 {
            return Err(GuiError::InvalidScale(self.bar_scale));
        }
        Ok(())
    }

    fn track_len(&self) -> Real {
        match self.alignment {
            Alignment::Horizontal => self.background.width() as Real * self.bar_scale,
            Alignment::Vertical => self.background.height() as Real * self.bar_scale,
        }
    }

    // half the handle along the track, so the handle's center marks the value
    fn bar_offset(&self, scale: Real) -> Real {
        match self.alignment {
            Alignment::Horizontal => self.handle.width() as Real * scale * 0.5,
            Alignment::Vertical => self.handle.height() as Real * scale * 0.5,
        }
    }

    fn handle_position(&self, scale: Real) -> Vec2f {
        let along = self.alignment.along(self.bar_pos) + self.track_len() * self.status() - self.bar_offset(scale);
        match self.alignment {
            Alignment::Horizontal => vec2f(
                along,
                self.bar_pos.y + self.background.height() as Real * self.bar_scale * 0.5 - self.handle.height() as Real * scale * 0.5,
            ),
            Alignment::Vertical => vec2f(
                self.bar_pos.x + self.background.width() as Real * self.bar_scale * 0.5 - self.handle.width() as Real * scale * 0.5,
                along,
            ),
        }
    }

    pub(crate) fn relayout(&mut self, base: &mut WidgetBase) {
        self.bar_pos = base.resolve_for(self.background.size(), self.bar_scale);
        base.texture = Some(self.handle);
        base.position = self.handle_position(base.scale);
    }

    fn remap(&mut self, pos: Real, start: Real) {
        let len = self.track_len();
        if len <= 0.0 {
            return;
        }
        let pos = clamp(pos, start, start + len);
        self.set_value(self.min + (self.max - self.min) * (pos - start) / len);
    }

    fn drag(&mut self, pointer: Real, handle: Real, scale: Real) {
        if !self.first_press {
            self.handle_offset = pointer - handle;
            self.first_press = true;
        }
        let mut pointer = pointer;
        // only a grab ahead of the handle's leading edge is compensated
        if self.handle_offset > 0.0 {
            pointer -= self.handle_offset;
        }
        let start = self.alignment.along(self.bar_pos) - self.bar_offset(scale);
        match self.step {
            Some(step) => {
                let len = self.track_len();
                let (min, range) = (self.min, self.max - self.min);
                let at = move |v: Real| start + len * (v - min) / range;
                if pointer >= at(self.value + step) {
                    self.set_value(self.value + step);
                } else if pointer <= at(self.value - step) {
                    self.set_value(self.value - step);
                }
            }
            None => self.remap(pointer, start),
        }
    }

    pub(crate) fn draw(&mut self, base: &mut WidgetBase, ctx: &mut WidgetCtx) -> bool {
        self.relayout(base);
        let handle_pressed = probe(base, ctx);
        let bar_pressed = if !handle_pressed && self.step.is_none() {
            let bar = Bounds::new(self.bar_pos, self.background.size(), self.bar_scale);
            let selected = ctx.is_selected(base, &bar);
            ctx.is_pressed(&mut self.bar_latch, selected)
        } else {
            false
        };

        if handle_pressed || bar_pressed {
            let pointer = self.alignment.along(ctx.pointer());
            if bar_pressed && !self.first_press {
                self.first_press = true;
                self.handle_offset = self.bar_offset(base.scale);
                self.remap(pointer, self.alignment.along(self.bar_pos));
            } else {
                self.drag(pointer, self.alignment.along(base.position), base.scale);
            }
            base.pressed = true;
        } else {
            self.first_press = false;
        }
        base.position = self.handle_position(base.scale);

        let status = self.status();
        let commands = ctx.commands();
        commands.push_texture(&self.background, self.bar_pos, self.background_color, self.bar_scale, Layer::LowerTexture);
        commands.push_sprite(
            &self.status_texture,
            self.bar_pos,
            Some(status_rect(&self.status_texture, status, self.alignment)),
            self.status_color,
            vec2f(self.bar_scale, self.bar_scale),
            Layer::LowerPicture,
        );
        draw_base(base, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Harness;
    use crate::{Dock, MouseButton, TextureId, Widget, vec2};

    fn tex(id: u32, w: i32, h: i32) -> Texture { Texture::new(TextureId(id), w, h) }

    fn slider(value: Real) -> Slider { Slider::new(0.0, 100.0, value, tex(1, 100, 10), tex(2, 100, 10), tex(3, 10, 20)) }

    fn widget(slider: Slider) -> Widget { Widget::new(Dock::CornerTopLeft, vec2(0, 0), 1.0, slider) }

    fn value(w: &Widget) -> Real { w.kind.as_slider().map(|s| s.value()).unwrap() }

    #[test]
    fn value_is_clamped_and_status_monotonic() {
        let mut s = slider(0.0);
        s.set_value(-5.0);
        assert_eq!((s.value(), s.status()), (0.0, 0.0));
        s.set_value(250.0);
        assert_eq!((s.value(), s.status()), (100.0, 1.0));
        let mut last = -1.0;
        for v in [0.0, 12.5, 12.5, 40.0, 99.0, 100.0] {
            s.set_value(v);
            assert!(s.status() >= last);
            last = s.status();
        }
    }

    #[test]
    fn invalid_range_is_rejected() {
        let s = Slider::new(5.0, 5.0, 5.0, tex(1, 10, 1), tex(2, 10, 1), tex(3, 1, 1));
        assert_eq!(s.validate(), Err(GuiError::InvalidRange { min: 5.0, max: 5.0 }));
        let s = Slider::new(0.0, Real::NAN, 0.0, tex(1, 10, 1), tex(2, 10, 1), tex(3, 1, 1));
        assert!(s.validate().is_err());
    }

    #[test]
    fn status_rect_follows_alignment() {
        let t = tex(1, 100, 40);
        let r = status_rect(&t, 0.25, Alignment::Horizontal);
        assert_eq!((r.x, r.y, r.width, r.height), (0, 0, 25, 40));
        let r = status_rect(&t, 0.5, Alignment::Vertical);
        assert_eq!((r.x, r.y, r.width, r.height), (0, 0, 100, 20));
    }

    #[test]
    fn handle_centers_on_the_value() {
        let w = widget(slider(50.0));
        let pos = w.base.position();
        assert_eq!((pos.x, pos.y), (45.0, -5.0));
    }

    #[test]
    fn dragging_maps_pointer_to_value_and_clamps() {
        let mut h = Harness::new();
        let mut w = widget(slider(0.0));
        h.input.mousedown(0, 0, MouseButton::LEFT);
        h.frame(&mut [&mut w]);
        assert_eq!(value(&w), 0.0);

        h.input.mousemove(50, 0);
        h.frame(&mut [&mut w]);
        assert_eq!(value(&w), 50.0);

        h.input.mousemove(500, 0);
        h.frame(&mut [&mut w]);
        assert_eq!(value(&w), 100.0);

        h.input.mousemove(-500, 0);
        h.frame(&mut [&mut w]);
        assert_eq!(value(&w), 0.0);
    }

    #[test]
    fn stepped_drag_moves_one_step_per_frame() {
        let mut h = Harness::new();
        let mut w = widget(slider(50.0).with_step(10.0));
        h.input.mousedown(50, 5, MouseButton::LEFT);
        h.frame(&mut [&mut w]);
        assert_eq!(value(&w), 50.0);

        h.input.mousemove(400, 5);
        for expected in [60.0, 70.0, 80.0, 90.0, 100.0, 100.0] {
            h.frame(&mut [&mut w]);
            assert_eq!(value(&w), expected);
        }

        h.input.mousemove(-400, 5);
        for expected in [90.0, 80.0] {
            h.frame(&mut [&mut w]);
            assert_eq!(value(&w), expected);
        }
    }

    #[test]
    fn bar_click_jumps_then_drags() {
        let mut h = Harness::new();
        let mut w = widget(slider(0.0));
        h.input.mousedown(70, 5, MouseButton::LEFT);
        h.frame(&mut [&mut w]);
        assert_eq!(value(&w), 70.0);
        assert_eq!(w.base.position().x, 65.0);

        h.input.mousemove(80, 5);
        h.frame(&mut [&mut w]);
        assert_eq!(value(&w), 80.0);

        h.input.mouseup(80, 5, MouseButton::LEFT);
        h.frame(&mut [&mut w]);
        assert!(!w.base.is_pressed());
    }

    #[test]
    fn stepped_slider_ignores_bar_clicks() {
        let mut h = Harness::new();
        let mut w = widget(slider(0.0).with_step(10.0));
        h.input.mousedown(70, 5, MouseButton::LEFT);
        h.frame(&mut [&mut w]);
        h.frame(&mut [&mut w]);
        assert_eq!(value(&w), 0.0);
    }

    #[test]
    fn vertical_slider_drags_along_y() {
        let mut h = Harness::new();
        let s = Slider::new(0.0, 100.0, 0.0, tex(1, 10, 100), tex(2, 10, 100), tex(3, 20, 10)).with_alignment(Alignment::Vertical);
        let mut w = widget(s);
        assert_eq!((w.base.position().x, w.base.position().y), (-5.0, -5.0));

        h.input.mousedown(0, 0, MouseButton::LEFT);
        h.frame(&mut [&mut w]);
        assert_eq!(value(&w), 0.0);

        h.input.mousemove(0, 50);
        h.frame(&mut [&mut w]);
        assert_eq!(value(&w), 50.0);
        assert_eq!((w.base.position().x, w.base.position().y), (-5.0, 45.0));

        let fill = h.sprites().into_iter().find(|s| s.layer == Layer::LowerPicture.depth()).unwrap();
        let src = fill.src.unwrap();
        assert_eq!((src.x, src.y, src.width, src.height), (0, 0, 10, 50));
    }

    #[test]
    fn scaled_bar_and_handle() {
        let w = Widget::new(Dock::CornerTopLeft, vec2(0, 0), 2.0, slider(50.0).with_bar_scale(2.0));
        assert_eq!((w.base.position().x, w.base.position().y), (90.0, -10.0));

        let mut h = Harness::new();
        let mut w = Widget::new(Dock::CornerTopLeft, vec2(0, 0), 2.0, slider(0.0).with_bar_scale(2.0));
        h.input.mousedown(150, 5, MouseButton::LEFT);
        h.frame(&mut [&mut w]);
        assert_eq!(value(&w), 75.0);
        assert_eq!(w.base.position().x, 140.0);

        h.input.mousemove(170, 5);
        h.frame(&mut [&mut w]);
        assert_eq!(value(&w), 85.0);

        let bar = h.sprites().into_iter().find(|s| s.layer == Layer::LowerTexture.depth()).unwrap();
        assert_eq!((bar.scale.x, bar.scale.y), (2.0, 2.0));
    }

    #[test]
    fn progress_bar_draws_partial_status() {
        let mut h = Harness::new();
        let mut bar = ProgressBar::new(tex(1, 100, 10), tex(2, 100, 10), 0.25);
        let fill = Color { r: 10, g: 20, b: 30, a: 255 };
        bar.progress_color = fill;
        let mut w = Widget::new(Dock::CornerTopLeft, vec2(0, 0), 1.0, bar);
        h.frame(&mut [&mut w]);

        let sprites = h.sprites();
        assert_eq!(sprites.len(), 2);
        let status = sprites.iter().find(|s| s.layer == Layer::MiddlePicture.depth()).unwrap();
        assert_eq!(status.texture, TextureId(2));
        assert_eq!(status.color, fill);
        let src = status.src.unwrap();
        assert_eq!((src.x, src.y, src.width, src.height), (0, 0, 25, 10));
        assert!(sprites.iter().any(|s| s.texture == TextureId(1) && s.src.is_none()));
    }

    #[test]
    fn progress_status_is_clamped() {
        let mut bar = ProgressBar::new(tex(1, 10, 10), tex(2, 10, 10), 1.5);
        assert_eq!(bar.status(), 1.0);
        bar.set_status(-0.5);
        assert_eq!(bar.status(), 0.0);
        bar.set_status(Real::NAN);
        assert_eq!(bar.status(), 0.0);
    }
}
