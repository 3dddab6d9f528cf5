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
//! Anchor-relative placement of widgets inside the viewport.

use crate::{Dimensioni, Real, Vec2f, Vec2i, vec2f};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
/// Viewport-relative reference point a widget docks onto.
pub enum Dock {
    #[default]
    /// Center of the viewport.
    Center,
    /// Top-left corner.
    CornerTopLeft,
    /// Top-right corner.
    CornerTopRight,
    /// Bottom-left corner.
    CornerBottomLeft,
    /// Bottom-right corner.
    CornerBottomRight,
    /// Middle of the top edge.
    MiddleTop,
    /// Middle of the bottom edge.
    MiddleBottom,
    /// Middle of the left edge.
    MiddleLeft,
    /// Middle of the right edge.
    MiddleRight,
}

#[derive(Copy, Clone)]
enum Edge {
    Start,
    Middle,
    End,
}

impl Dock {
    fn edges(self) -> (Edge, Edge) {
        match self {
            Dock::Center => (Edge::Middle, Edge::Middle),
            Dock::CornerTopLeft => (Edge::Start, Edge::Start),
            Dock::CornerTopRight => (Edge::End, Edge::Start),
            Dock::CornerBottomLeft => (Edge::Start, Edge::End),
            Dock::CornerBottomRight => (Edge::End, Edge::End),
            Dock::MiddleTop => (Edge::Middle, Edge::Start),
            Dock::MiddleBottom => (Edge::Middle, Edge::End),
            Dock::MiddleLeft => (Edge::Start, Edge::Middle),
            Dock::MiddleRight => (Edge::End, Edge::Middle),
        }
    }
}

fn axis(edge: Edge, offset: i32, size: i32, scale: Real, extent: i32) -> Real {
    let scaled = size as Real * scale;
    match edge {
        Edge::Start => offset as Real,
        Edge::Middle => extent as Real / 2.0 - scaled / 2.0 + offset as Real,
        // offsets on the far edges push inwards
        Edge::End => extent as Real - scaled - offset as Real,
    }
}

/// Computes the top-left screen position of a box of `size` pixels scaled by `scale`, docked
/// onto `dock` with an `offset` margin inside a viewport of `viewport` pixels.
///
/// A zero `size` (no texture yet) resolves to the anchor point itself.
pub fn resolve(dock: Dock, offset: Vec2i, size: Dimensioni, scale: Real, viewport: Dimensioni) -> Vec2f {
    let (h, v) = dock.edges();
    vec2f(axis(h, offset.x, size.width, scale, viewport.width), axis(v, offset.y, size.height, scale, viewport.height))
}
