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
use crate::Real;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Fixed draw-order bands. Submissions are sorted by [`Layer::depth`], back to front.
pub enum Layer {
    /// Plain surfaces of ordinary widgets.
    LowerTexture,
    /// Pictures drawn over lower surfaces.
    LowerPicture,
    /// Text drawn over lower pictures.
    LowerText,
    /// Surfaces of widgets that sit above ordinary ones.
    MiddleTexture,
    /// Pictures drawn over middle surfaces.
    MiddlePicture,
    /// Text drawn over middle pictures.
    MiddleText,
    /// Overlay surfaces (open lists, tooltips).
    UpperTexture,
    /// Overlay pictures.
    UpperPicture,
    /// Overlay text.
    UpperText,
}

impl Layer {
    /// Every band, back to front.
    pub const ALL: [Layer; 9] = [
        Layer::LowerTexture,
        Layer::LowerPicture,
        Layer::LowerText,
        Layer::MiddleTexture,
        Layer::MiddlePicture,
        Layer::MiddleText,
        Layer::UpperTexture,
        Layer::UpperPicture,
        Layer::UpperText,
    ];

    /// Returns the layer key in `(0.90, 1.00)` handed to the renderer.
    pub fn depth(self) -> Real {
        match self {
            Layer::LowerTexture => 0.91,
            Layer::LowerPicture => 0.92,
            Layer::LowerText => 0.93,
            Layer::MiddleTexture => 0.94,
            Layer::MiddlePicture => 0.95,
            Layer::MiddleText => 0.96,
            Layer::UpperTexture => 0.97,
            Layer::UpperPicture => 0.98,
            Layer::UpperText => 0.99,
        }
    }
}

impl Default for Layer {
    fn default() -> Self { Layer::LowerTexture }
}
