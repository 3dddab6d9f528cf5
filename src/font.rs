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
use std::rc::Rc;

use crate::{FontId, Real, Vec2f, vec2f};

/// Text measurement and glyph coverage of a font the renderer knows how to draw.
pub trait Font {
    /// Identifier passed to the renderer with every text run.
    fn id(&self) -> FontId;
    /// Returns `true` if the font has a glyph for `ch`.
    fn supports(&self, ch: char) -> bool;
    /// Returns the unscaled width and height of `text`.
    fn measure(&self, text: &str) -> Vec2f;
}

/// Shared font reference held by text-drawing widgets.
pub type FontHandle = Rc<dyn Font>;

/// Returns `true` if every character of `text` is supported by `font`.
pub fn supports_all(font: &dyn Font, text: &str) -> bool { text.chars().all(|c| font.supports(c)) }

/// Measures `text` with `font` and applies a uniform `scale`.
pub fn measure_scaled(font: &dyn Font, text: &str, scale: Real) -> Vec2f {
    let size = font.measure(text);
    vec2f(size.x * scale, size.y * scale)
}

#[cfg(feature = "builder")]
pub use self::truetype::FontdueFont;

#[cfg(feature = "builder")]
mod truetype {
    use super::*;
    use crate::GuiError;
    use fontdue::FontSettings;

    /// TrueType/OpenType font measured with `fontdue` at a fixed pixel size.
    pub struct FontdueFont {
        id: FontId,
        font: fontdue::Font,
        size: Real,
        line_size: Real,
    }

    impl FontdueFont {
        /// Parses `bytes` and prepares measurements at `size` pixels. The renderer must map `id`
        /// to the same face.
        pub fn from_bytes(id: FontId, bytes: &[u8], size: Real) -> Result<Self, GuiError> {
            let font = fontdue::Font::from_bytes(bytes, FontSettings::default()).map_err(|e| GuiError::Font(e.to_string()))?;
            let line_size = font.horizontal_line_metrics(size).map(|m| m.new_line_size).unwrap_or(size);
            Ok(Self { id, font, size, line_size })
        }

        /// Pixel size the font is measured at.
        pub fn size(&self) -> Real { self.size }
    }

    impl Font for FontdueFont {
        fn id(&self) -> FontId { self.id }

        fn supports(&self, ch: char) -> bool { ch == ' ' || self.font.lookup_glyph_index(ch) != 0 }

        fn measure(&self, text: &str) -> Vec2f {
            let mut width: Real = 0.0;
            let mut lines = 0;
            for line in text.split('\n') {
                let w: Real = line.chars().map(|c| self.font.metrics(c, self.size).advance_width).sum();
                width = width.max(w);
                lines += 1;
            }
            vec2f(width, self.line_size * lines as Real)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedFont;

    #[test]
    fn coverage_fails_on_any_missing_glyph() {
        let font = FixedFont::new(8.0, 16.0).without('#');
        assert!(supports_all(&font, "abc"));
        assert!(!supports_all(&font, "a#c"));
        assert!(supports_all(&font, ""));
    }

    #[test]
    fn scaled_measure() {
        let font = FixedFont::new(8.0, 16.0);
        let size = measure_scaled(&font, "abcd", 0.5);
        assert_eq!((size.x, size.y), (16.0, 8.0));
    }
}
