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

use crate::{
    Canvas, Color, CommandBuffer, Dimensioni, Dock, DropDownList, FontHandle, GuiError, ImageSource, Input, PressToken, ProgressBar, Real,
    Renderer, RendererHandle, Slider, Style, TextBox, Texture, Tooltip, TooltipHandle, Vec2i, Widget, WidgetHandle, WidgetType,
};
use crate::widgets::WidgetCtx;

enum Item {
    Widget(WidgetHandle),
    Tooltip(TooltipHandle),
}

/// Composition registry: owns the canvas, the shared press token and every live widget and
/// tooltip, and draws them once per frame in registration order.
pub struct Gui<R: Renderer> {
    canvas: Canvas<R>,
    style: Rc<Style>,
    token: PressToken,
    items: Vec<Item>,
    commands: CommandBuffer,
    white: Option<Texture>,

    /// Shared pointer to the input state driving this context.
    pub input: Rc<RefCell<Input>>,
}

impl<R: Renderer> Gui<R> {
    /// Creates a new registry around the provided renderer and viewport size.
    pub fn new(renderer: RendererHandle<R>, dim: Dimensioni) -> Self {
        let mut canvas = Canvas::from(renderer, dim);
        let white = canvas.create_solid_texture(1, 1, Color::WHITE);
        Self {
            canvas,
            style: Rc::new(Style::default()),
            token: PressToken::default(),
            items: Vec::new(),
            commands: CommandBuffer::default(),
            white,
            input: Rc::new(RefCell::new(Input::default())),
        }
    }

    /// Returns a handle to the underlying renderer.
    pub fn renderer_handle(&self) -> RendererHandle<R> { self.canvas.renderer_handle() }

    /// Current viewport size.
    pub fn viewport(&self) -> Dimensioni { self.canvas.current_dimension() }

    /// Changes the viewport size and re-docks every widget.
    pub fn resize(&mut self, dim: Dimensioni) {
        self.canvas.set_dimension(dim);
        for w in self.widget_handles() {
            w.with_mut(|w| w.set_viewport(dim));
        }
    }

    /// Style applied to widgets and tooltips registered from now on.
    pub fn style(&self) -> &Style { &self.style }

    /// Replaces the shared style. Registration defaults (selection tint, tooltip timing, simple
    /// constructor sizes and colors) apply to widgets and tooltips registered afterwards. Caret
    /// blink, key repeat and caret color are read every frame, so existing text boxes follow the
    /// new values from the next [`Gui::draw_all`].
    pub fn set_style(&mut self, style: &Style) { self.style = Rc::new(*style) }

    /// Validates `widget` and appends it to the draw order.
    pub fn add(&mut self, mut widget: Widget) -> Result<WidgetHandle, GuiError> {
        widget.validate()?;
        if widget.tints_selection() && widget.base.selection_color.is_none() {
            widget.base.selection_color = Some(self.style.selection_color);
        }
        widget.set_viewport(self.viewport());
        log::debug!("registered {:?} widget", widget.widget_type());
        let handle = WidgetHandle::new(widget);
        self.items.push(Item::Widget(handle.clone()));
        Ok(handle)
    }

    /// Registers a tooltip. Attach the returned handle to widgets with [`Widget::with_tooltip`].
    pub fn add_tooltip(&mut self, mut tooltip: Tooltip) -> TooltipHandle {
        tooltip.apply_style(&self.style);
        let handle = TooltipHandle::new(tooltip);
        self.items.push(Item::Tooltip(handle.clone()));
        handle
    }

    /// Removes a widget from the draw order. Returns `false` if it was not registered.
    pub fn remove(&mut self, widget: &WidgetHandle) -> bool {
        let before = self.items.len();
        self.items.retain(|i| !matches!(i, Item::Widget(w) if w.ptr_eq(widget)));
        let removed = self.items.len() != before;
        if removed {
            log::debug!("removed {:?} widget", widget.widget_type());
        }
        removed
    }

    /// Removes a tooltip and detaches it from every registered widget showing it.
    pub fn remove_tooltip(&mut self, tooltip: &TooltipHandle) -> bool {
        let before = self.items.len();
        self.items.retain(|i| !matches!(i, Item::Tooltip(t) if t.ptr_eq(tooltip)));
        for w in self.widget_handles() {
            w.with_mut(|w| {
                if w.base.tooltip.as_ref().is_some_and(|t| t.ptr_eq(tooltip)) {
                    w.base.tooltip = None;
                }
            });
        }
        self.items.len() != before
    }

    /// Number of registered widgets and tooltips.
    pub fn len(&self) -> usize { self.items.len() }

    /// Returns `true` when nothing is registered.
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    fn widget_handles(&self) -> Vec<WidgetHandle> {
        self.items
            .iter()
            .filter_map(|i| match i {
                Item::Widget(w) => Some(w.clone()),
                Item::Tooltip(_) => None,
            })
            .collect()
    }

    /// Live widgets of type `ty`, in registration order.
    pub fn display(&self, ty: WidgetType) -> Vec<WidgetHandle> { self.widget_handles().into_iter().filter(|w| w.widget_type() == ty).collect() }

    /// Registered tooltips, in registration order.
    pub fn tooltips(&self) -> Vec<TooltipHandle> {
        self.items
            .iter()
            .filter_map(|i| match i {
                Item::Tooltip(t) => Some(t.clone()),
                Item::Widget(_) => None,
            })
            .collect()
    }

    /// First widget carrying `tag`.
    pub fn find_by_tag(&self, tag: &str) -> Option<WidgetHandle> {
        self.widget_handles().into_iter().find(|w| w.with(|w| w.base.tag.as_deref() == Some(tag)))
    }

    /// First tooltip carrying `tag`.
    pub fn find_tooltip_by_tag(&self, tag: &str) -> Option<TooltipHandle> {
        self.tooltips().into_iter().find(|t| t.with(|t| t.tag.as_deref() == Some(tag)))
    }

    /// Runs one frame: every widget samples the input, updates its state and submits its
    /// visuals, then the batch is flushed to the renderer and per-frame input edges are cleared.
    pub fn draw_all(&mut self, elapsed: Duration) {
        let input = self.input.borrow().clone();
        let widgets = self.widget_handles();
        let mut ctx = WidgetCtx::new(&input, &mut self.token, &mut self.commands, &self.style, self.white, elapsed);
        for w in &widgets {
            w.draw(&mut ctx);
        }
        self.input.borrow_mut().epilogue();
        log::trace!("frame: {} widgets, {} commands", widgets.len(), self.commands.len());
        self.canvas.render(&mut self.commands);
    }

    /// Creates a texture filled with `color`. Returns `None` for non-positive sizes.
    pub fn create_solid_texture(&mut self, width: i32, height: i32, color: Color) -> Option<Texture> { self.canvas.create_solid_texture(width, height, color) }

    /// Uploads raw RGBA or PNG encoded pixels.
    pub fn load_image_from(&mut self, source: ImageSource) -> Result<Texture, GuiError> { self.canvas.load_image_from(source) }

    /// Releases a texture created through this registry.
    pub fn free_texture(&mut self, texture: &Texture) { self.canvas.free_texture(texture) }

    fn solid(&mut self, name: &'static str, width: i32, height: i32, color: Color) -> Result<Texture, GuiError> {
        self.create_solid_texture(width, height, color).ok_or(GuiError::MissingTexture(name))
    }

    fn add_owning(&mut self, widget: Widget, textures: &[Texture]) -> Result<WidgetHandle, GuiError> {
        self.add(widget).inspect_err(|_| {
            for t in textures {
                self.canvas.free_texture(t);
            }
        })
    }

    /// Builds a progress bar from solid `width` x `height` textures.
    #[allow(clippy::too_many_arguments)]
    pub fn new_progress_bar(
        &mut self,
        dock: Dock,
        offset: Vec2i,
        status: Real,
        width: i32,
        height: i32,
        progress_color: Color,
        background_color: Color,
    ) -> Result<WidgetHandle, GuiError> {
        let background = self.solid("progress bar", width, height, Color::WHITE)?;
        let status_texture = match self.solid("progress bar", width, height, Color::WHITE) {
            Ok(t) => t,
            Err(e) => {
                self.free_texture(&background);
                return Err(e);
            }
        };
        let mut bar = ProgressBar::new(background, status_texture, status);
        bar.progress_color = progress_color;
        let widget = Widget::new(dock, offset, 1.0, bar).with_color(background_color);
        self.add_owning(widget, &[background, status_texture])
    }

    /// Builds a slider whose track is a solid `width` x `height` bar around `handle`.
    #[allow(clippy::too_many_arguments)]
    pub fn new_slider(
        &mut self,
        dock: Dock,
        offset: Vec2i,
        min: Real,
        max: Real,
        value: Real,
        width: i32,
        height: i32,
        handle: Texture,
    ) -> Result<WidgetHandle, GuiError> {
        let background = self.solid("slider", width, height, Color::WHITE)?;
        let status_texture = match self.solid("slider", width, height, Color::WHITE) {
            Ok(t) => t,
            Err(e) => {
                self.free_texture(&background);
                return Err(e);
            }
        };
        let slider = Slider::new(min, max, value, background, status_texture, handle).with_colors(Color::WHITE, Color::BLACK);
        self.add_owning(Widget::new(dock, offset, 1.0, slider), &[background, status_texture])
    }

    /// Builds a text box of the style's default size.
    pub fn new_text_box(&mut self, dock: Dock, offset: Vec2i, text: &str, font: FontHandle) -> Result<WidgetHandle, GuiError> {
        let size = self.style.text_box_size;
        let texture = self.solid("text box", size.width, size.height, Color::WHITE)?;
        let mut text_box = TextBox::new(texture, text, font);
        text_box.text_color = self.style.text_color;
        self.add_owning(Widget::new(dock, offset, 1.0, text_box), &[texture])
    }

    /// Builds a drop-down list of the style's default size.
    pub fn new_drop_down<S: AsRef<str>>(&mut self, dock: Dock, offset: Vec2i, items: &[S], font: FontHandle) -> Result<WidgetHandle, GuiError> {
        let size = self.style.drop_down_size;
        let texture = self.solid("drop-down list", size.width, size.height, Color::WHITE)?;
        let mut list = DropDownList::new(texture, items, font);
        list.text_color = self.style.text_color;
        list.item_color = self.style.list_color;
        list.item_hover_color = self.style.list_hover_color;
        self.add_owning(Widget::new(dock, offset, 1.0, list), &[texture])
    }
}
