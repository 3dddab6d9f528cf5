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
use std::{cell::RefCell, rc::Rc};

use crate::Texture;

use super::{WidgetBase, WidgetCtx, draw_base, probe};

/// Two-state toggle that flips once per press episode.
pub struct Checkbox {
    off: Texture,
    on: Texture,
    state: bool,
    was_toggled: bool,
}

impl Checkbox {
    /// Creates a checkbox from its off/on textures and initial state.
    pub fn new(off: Texture, on: Texture, state: bool) -> Self { Self { off, on, state, was_toggled: false } }

    /// Current state.
    pub fn state(&self) -> bool { self.state }

    /// Overrides the state.
    pub fn set_state(&mut self, state: bool) { self.state = state }

    pub(crate) fn current_texture(&self) -> Texture { if self.state { self.on } else { self.off } }

    pub(crate) fn set_current_texture(&mut self, texture: Texture) {
        if self.state {
            self.on = texture;
        } else {
            self.off = texture;
        }
    }

    pub(crate) fn release(&mut self) { self.was_toggled = false }

    pub(crate) fn draw(&mut self, base: &mut WidgetBase, ctx: &mut WidgetCtx) -> bool {
        base.place_on(Some(self.current_texture()));
        if !probe(base, ctx) {
            self.was_toggled = false;
        } else if !self.was_toggled {
            self.state = !self.state;
            self.was_toggled = true;
        }
        base.place_on(Some(self.current_texture()));
        draw_base(base, ctx)
    }
}

#[derive(Default)]
struct GroupState {
    members: usize,
    selected: Option<usize>,
}

#[derive(Clone, Default)]
/// Set of radio buttons of which at most one is on.
pub struct RadioGroup(Rc<RefCell<GroupState>>);

impl RadioGroup {
    /// Creates an empty group.
    pub fn new() -> Self { Self::default() }

    /// Number of registered buttons.
    pub fn len(&self) -> usize { self.0.borrow().members }

    /// Returns `true` if no button has joined the group.
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Slot of the button that is on, if any.
    pub fn selected(&self) -> Option<usize> { self.0.borrow().selected }

    /// Turns the button in `slot` on and every other member off.
    pub fn select(&self, slot: usize) {
        let mut state = self.0.borrow_mut();
        if slot < state.members {
            state.selected = Some(slot);
        }
    }

    fn register(&self) -> usize {
        let mut state = self.0.borrow_mut();
        state.members += 1;
        state.members - 1
    }
}

/// Member of a [`RadioGroup`]. Pressing an off button turns it on and the rest of the group off.
pub struct RadioButton {
    off: Texture,
    on: Texture,
    group: RadioGroup,
    slot: usize,
}

impl RadioButton {
    /// Creates a button and registers it with `group`.
    pub fn new(off: Texture, on: Texture, group: &RadioGroup) -> Self {
        let slot = group.register();
        Self { off, on, group: group.clone(), slot }
    }

    /// Returns `true` if this button is the group's selection.
    pub fn state(&self) -> bool { self.group.selected() == Some(self.slot) }

    /// Position of the button inside its group.
    pub fn slot(&self) -> usize { self.slot }

    /// The group the button belongs to.
    pub fn group(&self) -> &RadioGroup { &self.group }

    pub(crate) fn current_texture(&self) -> Texture { if self.state() { self.on } else { self.off } }

    pub(crate) fn set_current_texture(&mut self, texture: Texture) {
        if self.state() {
            self.on = texture;
        } else {
            self.off = texture;
        }
    }

    pub(crate) fn draw(&mut self, base: &mut WidgetBase, ctx: &mut WidgetCtx) -> bool {
        base.place_on(Some(self.current_texture()));
        if probe(base, ctx) && !self.state() {
            self.group.select(self.slot);
        }
        base.place_on(Some(self.current_texture()));
        draw_base(base, ctx)
    }
}
