// Copyright 2026 the Vitrail contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The stateful drawing-context contract implemented by backend adapters.

use crate::math::{Point, Rect, Rgba};
use crate::render::Image;
use std::cell::RefCell;
use std::rc::Rc;

/// A drawing context shared between a window, its paint events, and
/// application code.
///
/// Single-threaded shared ownership: the window keeps one reference alive
/// for its lifetime, paint events carry a clone pre-clipped to the exposed
/// rectangle.
pub type SharedRenderState = Rc<RefCell<dyn RenderState>>;

/// The stateful drawing-context abstraction.
///
/// Two target variants share this one contract: **window-bound** contexts
/// draw live into an on-screen surface, **image-bound** contexts draw into
/// an owned pixel buffer. Both are constructed by the backend adapter.
///
/// State setters are chainable; primitives take effect immediately against
/// the current ink/pen/clip state — there is no deferred command buffer.
/// Backend implementations consult the window's
/// [`RenderCache`](crate::render::RenderCache) before every native
/// state-changing call and skip calls whose value has not changed; that
/// skipping is part of the observable contract, not an optimization.
pub trait RenderState {
    /// Sets the drawing (foreground) color.
    fn set_ink(&mut self, color: Rgba) -> &mut dyn RenderState;

    /// The current drawing color.
    fn ink(&self) -> Rgba;

    /// Sets the background color used by text and fill operations.
    fn set_paper(&mut self, color: Rgba) -> &mut dyn RenderState;

    /// The current background color.
    fn paper(&self) -> Rgba;

    /// Sets the pen thickness in pixels.
    fn set_pen(&mut self, thickness: u32) -> &mut dyn RenderState;

    /// The current pen thickness.
    fn pen(&self) -> u32;

    /// Restricts drawing to a rectangle.
    ///
    /// The effective clip is the *intersection* of the requested rectangle
    /// with the target's bounds — a clip can never grow past the surface.
    fn set_clip(&mut self, rect: Rect) -> &mut dyn RenderState;

    /// The current clip rectangle.
    fn clip(&self) -> Rect;

    /// Fills the clip region with a color.
    fn clear(&mut self, color: Rgba);

    /// Draws a line between two points with the current ink and pen.
    fn draw_line(&mut self, from: Point, to: Point);

    /// Draws a rectangle outline, or fills it when `filled` is `true`.
    fn draw_rect(&mut self, rect: Rect, filled: bool);

    /// Draws a string with its baseline anchor at `at`.
    fn draw_text(&mut self, text: &str, at: Point);

    /// Blits an image with its top-left corner at `at`.
    fn draw_img(&mut self, image: &Image, at: Point);
}

/// The state half of a [`RenderState`], for backend implementations to embed.
///
/// Keeps the ink/paper/pen/clip bookkeeping in one place so every backend
/// context answers the getters identically; the backend supplies only the
/// primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderProps {
    /// Current drawing color.
    pub ink: Rgba,
    /// Current background color.
    pub paper: Rgba,
    /// Current pen thickness in pixels.
    pub pen: u32,
    /// Current clip rectangle, always within the target bounds.
    pub clip: Rect,
    /// The full bounds of the draw target, at origin zero.
    pub target_bounds: Rect,
}

impl RenderProps {
    /// Creates the default state for a target of the given bounds: black
    /// ink on white paper, 1-pixel pen, clip covering the whole target.
    pub fn for_target(target_bounds: Rect) -> Self {
        Self {
            ink: Rgba::BLACK,
            paper: Rgba::WHITE,
            pen: 1,
            clip: target_bounds,
            target_bounds,
        }
    }

    /// Applies the intersect-with-target clip rule.
    pub fn clip_to(&mut self, requested: Rect) {
        self.clip = requested.intersect(&self.target_bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Rect;

    #[test]
    fn test_default_props_cover_target() {
        let bounds = Rect::from_xywh(0, 0, 640, 480);
        let props = RenderProps::for_target(bounds);
        assert_eq!(props.ink, Rgba::BLACK);
        assert_eq!(props.paper, Rgba::WHITE);
        assert_eq!(props.pen, 1);
        assert_eq!(props.clip, bounds);
    }

    #[test]
    fn test_clip_intersects_with_target_bounds() {
        let mut props = RenderProps::for_target(Rect::from_xywh(0, 0, 100, 100));

        props.clip_to(Rect::from_xywh(50, 50, 100, 100));
        assert_eq!(props.clip, Rect::from_xywh(50, 50, 50, 50));

        // A clip fully outside the target collapses to empty.
        props.clip_to(Rect::from_xywh(200, 200, 10, 10));
        assert!(props.clip.is_empty());
    }
}
