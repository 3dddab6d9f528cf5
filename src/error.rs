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
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
/// Errors surfaced when a widget is configured or a resource is loaded.
pub enum GuiError {
    /// A widget that draws a texture was given none.
    #[error("widget `{0}` requires a texture")]
    MissingTexture(&'static str),
    /// The scale factor is negative or not finite.
    #[error("invalid scale {0}: expected a finite, non-negative value")]
    InvalidScale(f32),
    /// A slider range is empty, inverted or not finite.
    #[error("invalid range [{min}, {max}]: expected finite bounds with min < max")]
    InvalidRange {
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },
    /// A drop-down list was created without items.
    #[error("drop-down list requires at least one item")]
    EmptyItems,
    /// An image could not be decoded or uploaded.
    #[error("image error: {0}")]
    Image(String),
    /// A font could not be parsed.
    #[error("font error: {0}")]
    Font(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = GuiError::InvalidRange { min: 2.0, max: 1.0 };
        assert_eq!(err.to_string(), "invalid range [2, 1]: expected finite bounds with min < max");
        assert_eq!(GuiError::MissingTexture("button").to_string(), "widget `button` requires a texture");
    }
}
