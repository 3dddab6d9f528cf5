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
macro_rules! kind_accessors {
    ($($variant:ident => $ty:ty, $as_ref:ident, $as_mut:ident;)*) => {
        impl WidgetKind {
            $(
                /// Returns the payload if the widget is of the matching kind.
                pub fn $as_ref(&self) -> Option<&$ty> {
                    match self {
                        WidgetKind::$variant(w) => Some(w),
                        _ => None,
                    }
                }

                /// Returns the mutable payload if the widget is of the matching kind.
                pub fn $as_mut(&mut self) -> Option<&mut $ty> {
                    match self {
                        WidgetKind::$variant(w) => Some(w),
                        _ => None,
                    }
                }
            )*

            /// Returns the type tag of the payload.
            pub fn widget_type(&self) -> WidgetType {
                match self {
                    $(WidgetKind::$variant(_) => WidgetType::$variant,)*
                }
            }
        }

        $(
            impl From<$ty> for WidgetKind {
                fn from(w: $ty) -> Self { WidgetKind::$variant(w) }
            }
        )*
    };
}

mod button;
mod drop_down;
mod label;
mod status_bar;
mod text_edit;
mod textbox;
mod toggle;
mod tooltip;

pub use button::*;
pub use drop_down::*;
pub use label::*;
pub use status_bar::*;
pub use text_edit::{EditBuffer, NavKey};
pub use textbox::*;
pub use toggle::*;
pub use tooltip::*;

use std::{cell::RefCell, mem, rc::Rc, time::Duration};

use crate::{
    Bounds, Color, CommandBuffer, Dimensioni, Dock, GuiError, Input, Layer, PressLatch, PressToken, Real, Style, Texture, Vec2f, Vec2i, reset_press_state,
    resolve, update_press, vec2f,
};

/// Per-frame state handed to every widget during the draw traversal.
pub(crate) struct WidgetCtx<'a> {
    input: &'a Input,
    token: &'a mut PressToken,
    commands: &'a mut CommandBuffer,
    style: &'a Style,
    white: Option<Texture>,
    elapsed: Duration,
}

impl<'a> WidgetCtx<'a> {
    pub(crate) fn new(
        input: &'a Input,
        token: &'a mut PressToken,
        commands: &'a mut CommandBuffer,
        style: &'a Style,
        white: Option<Texture>,
        elapsed: Duration,
    ) -> Self {
        Self { input, token, commands, style, white, elapsed }
    }

    pub(crate) fn input(&self) -> &Input { self.input }

    pub(crate) fn style(&self) -> &Style { self.style }

    pub(crate) fn elapsed(&self) -> Duration { self.elapsed }

    /// 1x1 white texture used for flat fills.
    pub(crate) fn white(&self) -> Option<Texture> { self.white }

    pub(crate) fn commands(&mut self) -> &mut CommandBuffer { self.commands }

    pub(crate) fn pointer(&self) -> Vec2f {
        let pos = self.input.mouse_pos();
        vec2f(pos.x as Real, pos.y as Real)
    }

    /// Pointer-over test gated by the widget's active and visible flags.
    pub(crate) fn is_selected(&self, base: &WidgetBase, bounds: &Bounds) -> bool { base.is_interactive() && bounds.contains(self.input.mouse_pos()) }

    pub(crate) fn is_pressed(&mut self, latch: &mut PressLatch, selected: bool) -> bool {
        update_press(self.token, latch, selected, self.input.is_primary_down())
    }

    pub(crate) fn reset_press_state(&mut self, latch: &mut PressLatch) { reset_press_state(self.token, latch) }
}

/// Click handler attached to a widget.
pub type ClickHandler = Box<dyn FnMut()>;

/// State shared by every widget kind: placement, tint, flags and press bookkeeping.
pub struct WidgetBase {
    texture: Option<Texture>,
    position: Vec2f,
    dock: Dock,
    offset: Vec2i,
    scale: Real,
    viewport: Dimensioni,
    /// Draw-order band of the widget's main texture.
    pub layer: Layer,
    /// Tint of the main texture.
    pub color: Color,
    /// Tint used instead of `color` while the pointer is over the widget.
    pub selection_color: Option<Color>,
    is_active: bool,
    is_visible: bool,
    /// Free-form label used by [`Gui::find_by_tag`](crate::Gui::find_by_tag).
    pub tag: Option<String>,
    /// Tooltip driven by the widget's selection state.
    pub tooltip: Option<TooltipHandle>,
    latch: PressLatch,
    click_latch: bool,
    selected: bool,
    pressed: bool,
    on_click: Vec<ClickHandler>,
}

impl WidgetBase {
    fn new(dock: Dock, offset: Vec2i, scale: Real) -> Self {
        Self {
            texture: None,
            position: Vec2f::default(),
            dock,
            offset,
            scale,
            viewport: Dimensioni::new(0, 0),
            layer: Layer::MiddleTexture,
            color: Color::WHITE,
            selection_color: None,
            is_active: true,
            is_visible: true,
            tag: None,
            tooltip: None,
            latch: PressLatch::default(),
            click_latch: false,
            selected: false,
            pressed: false,
            on_click: Vec::new(),
        }
    }

    /// Texture currently drawn (and hit-tested) for the widget.
    pub fn texture(&self) -> Option<Texture> { self.texture }

    /// Top-left screen position of the main texture.
    pub fn position(&self) -> Vec2f { self.position }

    /// Anchor the widget docks onto.
    pub fn dock(&self) -> Dock { self.dock }

    /// Margin from the anchor.
    pub fn offset(&self) -> Vec2i { self.offset }

    /// Scale applied to the main texture.
    pub fn scale(&self) -> Real { self.scale }

    /// Viewport the position was resolved against.
    pub fn viewport(&self) -> Dimensioni { self.viewport }

    /// Returns `true` if the widget reacts to input.
    pub fn is_active(&self) -> bool { self.is_active }

    /// Enables or disables input handling.
    pub fn set_active(&mut self, active: bool) { self.is_active = active }

    /// Flips the active flag.
    pub fn toggle_active(&mut self) { self.is_active = !self.is_active }

    /// Returns `true` if the widget is drawn.
    pub fn is_visible(&self) -> bool { self.is_visible }

    /// Shows or hides the widget. Hidden widgets ignore input as well.
    pub fn set_visible(&mut self, visible: bool) { self.is_visible = visible }

    /// Flips the visible flag.
    pub fn toggle_visible(&mut self) { self.is_visible = !self.is_visible }

    /// Returns `true` if the widget is both active and visible.
    pub fn is_interactive(&self) -> bool { self.is_active && self.is_visible }

    /// Whether the pointer was over the widget during the last frame.
    pub fn is_selected(&self) -> bool { self.selected }

    /// Whether the widget held the press during the last frame.
    pub fn is_pressed(&self) -> bool { self.pressed }

    /// Appends a handler invoked once at the start of every press episode.
    pub fn on_click<F: FnMut() + 'static>(&mut self, f: F) { self.on_click.push(Box::new(f)) }

    /// Hit-test rectangle of the main texture.
    pub fn bounds(&self) -> Option<Bounds> { self.texture.map(|t| Bounds::new(self.position, t.size(), self.scale)) }

    /// Size the scaled main texture covers on screen, zero without a texture.
    pub fn extent(&self) -> Vec2f { self.bounds().map(|b| b.extent()).unwrap_or_default() }

    fn require(name: &'static str, texture: Option<Texture>) -> Result<Texture, GuiError> { texture.ok_or(GuiError::MissingTexture(name)) }

    pub(crate) fn resolve_for(&self, size: Dimensioni, scale: Real) -> Vec2f { resolve(self.dock, self.offset, size, scale, self.viewport) }

    fn place_on(&mut self, texture: Option<Texture>) {
        self.texture = texture;
        let size = texture.map(|t| t.size()).unwrap_or(Dimensioni::new(0, 0));
        self.position = self.resolve_for(size, self.scale);
    }
}

/// Samples selection and press state of the main texture for this frame.
pub(crate) fn probe(base: &mut WidgetBase, ctx: &mut WidgetCtx) -> bool {
    let bounds = match base.bounds() {
        Some(b) => b,
        None => return false,
    };
    base.selected = ctx.is_selected(base, &bounds);
    base.pressed = ctx.is_pressed(&mut base.latch, base.selected);
    base.pressed
}

/// Submits the main texture, drives the tooltip and reports whether a press episode started.
pub(crate) fn draw_base(base: &mut WidgetBase, ctx: &mut WidgetCtx) -> bool {
    let texture = match base.texture {
        Some(t) => t,
        None => return false,
    };
    let color = match base.selection_color {
        Some(c) if base.selected => c,
        _ => base.color,
    };
    ctx.commands().push_texture(&texture, base.position, color, base.scale, base.layer);

    if let Some(tooltip) = &base.tooltip {
        tooltip.activate(base.selected, ctx);
    }

    if !base.pressed {
        base.click_latch = false;
        return false;
    }
    let first = !base.click_latch;
    base.click_latch = true;
    first
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Kind tag used to look widgets up by type.
pub enum WidgetType {
    /// [`Button`].
    Button,
    /// [`Checkbox`].
    Checkbox,
    /// [`RadioButton`].
    RadioButton,
    /// [`Slider`].
    Slider,
    /// [`ProgressBar`].
    ProgressBar,
    /// [`TextBox`].
    TextBox,
    /// [`Label`].
    Label,
    /// [`Image`].
    Image,
    /// [`DropDownList`].
    DropDownList,
}

/// Widget-specific payload.
pub enum WidgetKind {
    /// Push button.
    Button(Button),
    /// Two-state toggle.
    Checkbox(Checkbox),
    /// Member of a mutually exclusive group.
    RadioButton(RadioButton),
    /// Draggable value selector.
    Slider(Slider),
    /// Read-only fill indicator.
    ProgressBar(ProgressBar),
    /// Single-line text input.
    TextBox(TextBox),
    /// Static text.
    Label(Label),
    /// Static picture.
    Image(Image),
    /// Collapsible list of choices.
    DropDownList(DropDownList),
}

kind_accessors! {
    Button => Button, as_button, as_button_mut;
    Checkbox => Checkbox, as_checkbox, as_checkbox_mut;
    RadioButton => RadioButton, as_radio_button, as_radio_button_mut;
    Slider => Slider, as_slider, as_slider_mut;
    ProgressBar => ProgressBar, as_progress_bar, as_progress_bar_mut;
    TextBox => TextBox, as_text_box, as_text_box_mut;
    Label => Label, as_label, as_label_mut;
    Image => Image, as_image, as_image_mut;
    DropDownList => DropDownList, as_drop_down, as_drop_down_mut;
}

/// A widget: common placement and interaction state plus a kind-specific payload.
pub struct Widget {
    /// Shared state.
    pub base: WidgetBase,
    /// Kind-specific state.
    pub kind: WidgetKind,
}

impl Widget {
    /// Creates a widget docked onto `dock` with an `offset` margin. The scale applies to the
    /// widget's main texture.
    pub fn new<K: Into<WidgetKind>>(dock: Dock, offset: Vec2i, scale: Real, kind: K) -> Self {
        let kind = kind.into();
        let mut base = WidgetBase::new(dock, offset, scale);
        if let WidgetKind::Image(_) = kind {
            base.layer = Layer::MiddlePicture;
        }
        let mut widget = Self { base, kind };
        widget.relayout();
        widget
    }

    /// Sets the tag.
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.base.tag = Some(tag.to_string());
        self
    }

    /// Attaches a tooltip.
    pub fn with_tooltip(mut self, tooltip: TooltipHandle) -> Self {
        self.base.tooltip = Some(tooltip);
        self
    }

    /// Sets the main tint.
    pub fn with_color(mut self, color: Color) -> Self {
        self.base.color = color;
        self
    }

    /// Sets the selection tint.
    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.base.selection_color = Some(color);
        self
    }

    /// Appends a click handler.
    pub fn with_on_click<F: FnMut() + 'static>(mut self, f: F) -> Self {
        self.base.on_click(f);
        self
    }

    /// Returns the type tag.
    pub fn widget_type(&self) -> WidgetType { self.kind.widget_type() }

    /// Moves the widget to a new anchor and margin and recomputes its position.
    pub fn set_position(&mut self, dock: Dock, offset: Vec2i) {
        self.base.dock = dock;
        self.base.offset = offset;
        self.relayout();
    }

    /// Replaces the main texture and recomputes the position. For toggles this is the texture of
    /// the current state, for sliders the handle and for progress bars the background. Only
    /// labels accept `None`.
    pub fn set_texture(&mut self, texture: Option<Texture>) -> Result<(), GuiError> {
        if let WidgetKind::Label(_) = self.kind {
            self.base.place_on(texture);
            return Ok(());
        }
        let texture = WidgetBase::require(self.type_name(), texture)?;
        match &mut self.kind {
            WidgetKind::Button(b) => b.normal = texture,
            WidgetKind::Checkbox(c) => c.set_current_texture(texture),
            WidgetKind::RadioButton(r) => r.set_current_texture(texture),
            WidgetKind::Slider(s) => s.handle = texture,
            WidgetKind::ProgressBar(p) => p.background = texture,
            WidgetKind::TextBox(t) => t.texture = texture,
            WidgetKind::Image(i) => i.texture = texture,
            WidgetKind::DropDownList(d) => d.texture = texture,
            WidgetKind::Label(_) => {}
        }
        self.relayout();
        Ok(())
    }

    /// Replaces the picture of an [`Image`] and re-docks it. Returns `false` for other kinds.
    pub fn set_image(&mut self, texture: Texture) -> bool {
        match &mut self.kind {
            WidgetKind::Image(i) => i.texture = texture,
            _ => return false,
        }
        self.relayout();
        true
    }

    fn type_name(&self) -> &'static str {
        match self.kind.widget_type() {
            WidgetType::Button => "button",
            WidgetType::Checkbox => "checkbox",
            WidgetType::RadioButton => "radio button",
            WidgetType::Slider => "slider",
            WidgetType::ProgressBar => "progress bar",
            WidgetType::TextBox => "text box",
            WidgetType::Label => "label",
            WidgetType::Image => "image",
            WidgetType::DropDownList => "drop-down list",
        }
    }

    pub(crate) fn validate(&self) -> Result<(), GuiError> {
        let scale = self.base.scale;
        if !scale.is_finite() || scale < 0.0 {
            return Err(GuiError::InvalidScale(scale));
        }
        match &self.kind {
            WidgetKind::Slider(s) => s.validate(),
            WidgetKind::DropDownList(d) => d.validate(),
            _ => Ok(()),
        }
    }

    /// Widgets that tint on hover by default.
    pub(crate) fn tints_selection(&self) -> bool {
        matches!(self.kind, WidgetKind::Button(_) | WidgetKind::Checkbox(_) | WidgetKind::RadioButton(_))
    }

    pub(crate) fn set_viewport(&mut self, viewport: Dimensioni) {
        self.base.viewport = viewport;
        self.relayout();
    }

    pub(crate) fn relayout(&mut self) {
        let base = &mut self.base;
        match &mut self.kind {
            WidgetKind::Button(b) => base.place_on(Some(b.normal)),
            WidgetKind::Checkbox(c) => base.place_on(Some(c.current_texture())),
            WidgetKind::RadioButton(r) => base.place_on(Some(r.current_texture())),
            WidgetKind::Slider(s) => s.relayout(base),
            WidgetKind::ProgressBar(p) => base.place_on(Some(p.background)),
            WidgetKind::TextBox(t) => base.place_on(Some(t.texture)),
            WidgetKind::Label(_) => base.place_on(base.texture),
            WidgetKind::Image(i) => base.place_on(Some(i.texture)),
            WidgetKind::DropDownList(d) => base.place_on(Some(d.texture)),
        }
    }

    // hidden widgets hold no press state
    fn release_press(&mut self, ctx: &mut WidgetCtx) {
        ctx.reset_press_state(&mut self.base.latch);
        self.base.click_latch = false;
        self.base.selected = false;
        self.base.pressed = false;
        match &mut self.kind {
            WidgetKind::Slider(s) => s.release(ctx),
            WidgetKind::DropDownList(d) => d.release(ctx),
            WidgetKind::Checkbox(c) => c.release(),
            _ => {}
        }
    }

    /// Runs one frame of the widget. Returns `true` when a press episode started.
    pub(crate) fn draw(&mut self, ctx: &mut WidgetCtx) -> bool {
        if !self.base.is_visible {
            self.release_press(ctx);
            if let Some(tooltip) = &self.base.tooltip {
                tooltip.activate(false, ctx);
            }
            return false;
        }
        let base = &mut self.base;
        match &mut self.kind {
            WidgetKind::Button(b) => b.draw(base, ctx),
            WidgetKind::Checkbox(c) => c.draw(base, ctx),
            WidgetKind::RadioButton(r) => r.draw(base, ctx),
            WidgetKind::Slider(s) => s.draw(base, ctx),
            WidgetKind::ProgressBar(p) => p.draw(base, ctx),
            WidgetKind::TextBox(t) => t.draw(base, ctx),
            WidgetKind::Label(l) => l.draw(base, ctx),
            WidgetKind::Image(_) => {
                probe(base, ctx);
                draw_base(base, ctx)
            }
            WidgetKind::DropDownList(d) => d.draw(base, ctx),
        }
    }
}

#[derive(Clone)]
/// Shared handle to a registered widget.
pub struct WidgetHandle(Rc<RefCell<Widget>>);

impl WidgetHandle {
    pub(crate) fn new(widget: Widget) -> Self { Self(Rc::new(RefCell::new(widget))) }

    /// Executes `f` with a shared reference to the widget.
    pub fn with<R>(&self, f: impl FnOnce(&Widget) -> R) -> R { f(&self.0.borrow()) }

    /// Executes `f` with a mutable reference to the widget.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Widget) -> R) -> R { f(&mut self.0.borrow_mut()) }

    /// Returns the type tag of the widget.
    pub fn widget_type(&self) -> WidgetType { self.0.borrow().widget_type() }

    /// Whether the pointer was over the widget during the last frame.
    pub fn is_selected(&self) -> bool { self.0.borrow().base.is_selected() }

    /// Whether the widget held the press during the last frame.
    pub fn is_pressed(&self) -> bool { self.0.borrow().base.is_pressed() }

    /// Moves the widget to a new anchor and margin.
    pub fn set_position(&self, dock: Dock, offset: Vec2i) { self.0.borrow_mut().set_position(dock, offset) }

    /// Replaces the picture of an image widget. Returns `false` for other kinds.
    pub fn set_image(&self, texture: Texture) -> bool { self.0.borrow_mut().set_image(texture) }

    /// Appends a click handler.
    pub fn on_click<F: FnMut() + 'static>(&self, f: F) { self.0.borrow_mut().base.on_click(f) }

    /// Returns `true` if both handles refer to the same widget.
    pub fn ptr_eq(&self, other: &WidgetHandle) -> bool { Rc::ptr_eq(&self.0, &other.0) }

    pub(crate) fn draw(&self, ctx: &mut WidgetCtx) {
        let clicked = self.0.borrow_mut().draw(ctx);
        if clicked {
            self.fire_click();
        }
    }

    fn fire_click(&self) {
        // handlers run without the widget borrowed so they can use this handle
        let mut handlers = mem::take(&mut self.0.borrow_mut().base.on_click);
        for handler in handlers.iter_mut() {
            handler();
        }
        let mut widget = self.0.borrow_mut();
        handlers.append(&mut widget.base.on_click);
        widget.base.on_click = handlers;
    }
}
