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
//! Selection and exclusive-press tracking shared by every widget.
//!
//! A press episode starts when the primary button goes down and ends when it is released. The
//! [`PressToken`] is owned by the [`Gui`](crate::Gui) and handed to each widget in registration
//! order; the first region that is selected when it is tested claims the token and keeps it for
//! the rest of the episode. Every region carries its own [`PressLatch`] recording whether it is
//! the holder or already lost its chance during the current episode.

use crate::{Dimensioni, Real, Vec2f, Vec2i, vec2f};

#[derive(Copy, Clone, Debug)]
/// Screen rectangle derived from a texture size, a position and a scale.
pub struct Bounds {
    /// Top-left corner in screen pixels.
    pub pos: Vec2f,
    /// Unscaled size in pixels.
    pub size: Dimensioni,
    /// Scale applied to `size`.
    pub scale: Real,
}

impl Bounds {
    /// Creates bounds from a position, an unscaled size and a scale.
    pub fn new(pos: Vec2f, size: Dimensioni, scale: Real) -> Self { Self { pos, size, scale } }

    /// Returns the scaled size.
    pub fn extent(&self) -> Vec2f { vec2f(self.size.width as Real * self.scale, self.size.height as Real * self.scale) }

    /// Returns `true` if `point` lies inside the bounds, both edges included.
    pub fn contains(&self, point: Vec2i) -> bool {
        let ext = self.extent();
        let (x, y) = (point.x as Real, point.y as Real);
        x >= self.pos.x && x <= self.pos.x + ext.x && y >= self.pos.y && y <= self.pos.y + ext.y
    }
}

#[derive(Copy, Clone, Debug, Default)]
/// Shared claim on the current press episode. At most one region holds it at a time.
pub struct PressToken {
    claimed: bool,
}

impl PressToken {
    /// Returns `true` while some region holds the press.
    pub fn is_claimed(&self) -> bool { self.claimed }
}

#[derive(Copy, Clone, Debug, Default)]
/// Per-region press bookkeeping for the current episode.
pub struct PressLatch {
    held_down: bool,
    press_done: bool,
}

impl PressLatch {
    /// Returns `true` while this region holds the press.
    pub fn is_held(&self) -> bool { self.held_down }
}

/// Advances the press state of one region for this frame and reports whether it is pressed.
///
/// Releasing the primary button clears the latch and the shared claim. While the button is down,
/// the region is pressed if it already holds the claim, or if it is `selected`, had no earlier
/// chance in this episode and nobody else holds the claim. Any other outcome spends the region's
/// chance until the button is released.
pub fn update_press(token: &mut PressToken, latch: &mut PressLatch, selected: bool, primary_down: bool) -> bool {
    if !primary_down {
        token.claimed = false;
        *latch = PressLatch::default();
        return false;
    }
    if latch.held_down || (selected && !latch.press_done && !token.claimed) {
        token.claimed = true;
        latch.held_down = true;
        return true;
    }
    latch.press_done = true;
    false
}

/// Forgets the region's progress in the current episode so another sub-region can be probed
/// with the same latch. The shared claim is released only if this latch was holding it.
pub fn reset_press_state(token: &mut PressToken, latch: &mut PressLatch) {
    if latch.held_down {
        token.claimed = false;
    }
    *latch = PressLatch::default();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec2;

    fn bounds(x: Real, y: Real, w: i32, h: i32, scale: Real) -> Bounds { Bounds::new(vec2f(x, y), Dimensioni::new(w, h), scale) }

    #[test]
    fn containment_is_inclusive_on_both_edges() {
        let b = bounds(10.0, 20.0, 30, 10, 2.0);
        assert!(b.contains(vec2(10, 20)));
        assert!(b.contains(vec2(70, 40)));
        assert!(b.contains(vec2(40, 30)));
        assert!(!b.contains(vec2(9, 30)));
        assert!(!b.contains(vec2(71, 30)));
        assert!(!b.contains(vec2(40, 19)));
        assert!(!b.contains(vec2(40, 41)));
    }

    #[test]
    fn only_one_region_is_pressed_per_episode() {
        let mut token = PressToken::default();
        let mut latches = [PressLatch::default(); 3];
        // every region is under the pointer, the first one tested wins
        for _ in 0..5 {
            let pressed: Vec<bool> = latches.iter_mut().map(|l| update_press(&mut token, l, true, true)).collect();
            assert_eq!(pressed, vec![true, false, false]);
        }
        // releasing clears everything on the very next evaluation
        let pressed: Vec<bool> = latches.iter_mut().map(|l| update_press(&mut token, l, true, false)).collect();
        assert_eq!(pressed, vec![false, false, false]);
        assert!(!token.is_claimed());
    }

    #[test]
    fn press_stays_with_holder_when_pointer_leaves() {
        let mut token = PressToken::default();
        let (mut a, mut b) = (PressLatch::default(), PressLatch::default());
        assert!(update_press(&mut token, &mut a, true, true));
        assert!(!update_press(&mut token, &mut b, false, true));
        // pointer moved from a to b while still holding the button
        assert!(update_press(&mut token, &mut a, false, true));
        assert!(!update_press(&mut token, &mut b, true, true));
    }

    #[test]
    fn late_arrival_cannot_claim_within_episode() {
        let mut token = PressToken::default();
        let mut a = PressLatch::default();
        // button went down outside the region
        assert!(!update_press(&mut token, &mut a, false, true));
        assert!(!update_press(&mut token, &mut a, true, true));
        assert!(!update_press(&mut token, &mut a, true, false));
        assert!(update_press(&mut token, &mut a, true, true));
    }

    #[test]
    fn reset_lets_a_sub_region_probe_again() {
        let mut token = PressToken::default();
        let mut other = PressLatch::default();
        let mut rows = PressLatch::default();
        assert!(!update_press(&mut token, &mut rows, false, true));
        reset_press_state(&mut token, &mut rows);
        assert!(update_press(&mut token, &mut rows, true, true));

        // a reset on a latch that does not hold the claim leaves the holder alone
        reset_press_state(&mut token, &mut other);
        assert!(token.is_claimed());
        assert!(!update_press(&mut token, &mut other, true, true));
    }
}
