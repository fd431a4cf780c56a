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

//! The headless drawing context: software rasterization into a shared
//! pixel buffer, with the per-window render cache in front of every
//! simulated native state call.

use crate::backend::NativeCall;
use std::cell::RefCell;
use std::rc::Rc;
use vitrail_core::math::{Point, Rect, Rgba};
use vitrail_core::render::{FontHandle, Image, RenderCache, RenderProps, RenderState};

/// The single built-in font of the headless backend. A real adapter would
/// map font specs to handles; here one synthetic handle stands in so the
/// font channel of the cache still gates a native call.
const DEFAULT_FONT: FontHandle = FontHandle(1);

pub(crate) type CallJournal = Rc<RefCell<Vec<NativeCall>>>;

/// Drawing context over an in-memory surface.
///
/// State setters only update [`RenderProps`]; the simulated native calls
/// (`SetForeground`, `SetLineWidth`) are issued lazily right before a
/// primitive, and only when the [`RenderCache`] reports the value changed.
/// That mirrors how a display-server backend batches GC updates, and it is
/// what the journal-based memoization tests observe.
pub(crate) struct HeadlessRenderState {
    surface: Rc<RefCell<Image>>,
    props: RenderProps,
    cache: RenderCache,
    journal: CallJournal,
}

impl HeadlessRenderState {
    pub(crate) fn new(surface: Rc<RefCell<Image>>, journal: CallJournal) -> Self {
        let bounds = surface.borrow().bounds();
        Self {
            surface,
            props: RenderProps::for_target(bounds),
            cache: RenderCache::new(),
            journal,
        }
    }

    fn record(&self, call: NativeCall) {
        self.journal.borrow_mut().push(call);
    }

    /// Flushes pending ink/pen state to the "native" side before a
    /// primitive touches pixels.
    fn sync_draw_state(&mut self) {
        if self.cache.apply_ink(self.props.ink) {
            self.record(NativeCall::SetForeground(self.props.ink));
        }
        if self.cache.apply_pen(self.props.pen) {
            self.record(NativeCall::SetLineWidth(self.props.pen));
        }
    }

    fn plot(&mut self, pt: Point, color: Rgba) {
        if self.props.clip.contains(pt) {
            self.surface.borrow_mut().set(pt, color);
        }
    }
}

impl RenderState for HeadlessRenderState {
    fn set_ink(&mut self, color: Rgba) -> &mut dyn RenderState {
        self.props.ink = color;
        self
    }

    fn ink(&self) -> Rgba {
        self.props.ink
    }

    fn set_paper(&mut self, color: Rgba) -> &mut dyn RenderState {
        self.props.paper = color;
        self
    }

    fn paper(&self) -> Rgba {
        self.props.paper
    }

    fn set_pen(&mut self, thickness: u32) -> &mut dyn RenderState {
        self.props.pen = thickness;
        self
    }

    fn pen(&self) -> u32 {
        self.props.pen
    }

    fn set_clip(&mut self, rect: Rect) -> &mut dyn RenderState {
        self.props.clip_to(rect);
        if self.cache.apply_clip(self.props.clip) {
            self.record(NativeCall::SetClip(self.props.clip));
        }
        self
    }

    fn clip(&self) -> Rect {
        self.props.clip
    }

    fn clear(&mut self, color: Rgba) {
        self.record(NativeCall::Clear(color));
        let clip = self.props.clip;
        self.surface.borrow_mut().fill(clip, color);
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.sync_draw_state();
        self.record(NativeCall::DrawLine(from, to));

        // Bresenham over integer coordinates, clipped per pixel.
        let ink = self.props.ink;
        let (mut x, mut y) = (from.x, from.y);
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(Point::new(x, y), ink);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_rect(&mut self, rect: Rect, filled: bool) {
        self.sync_draw_state();
        self.record(NativeCall::DrawRect(rect, filled));

        let ink = self.props.ink;
        if filled {
            let area = rect.intersect(&self.props.clip);
            self.surface.borrow_mut().fill(area, ink);
        } else if !rect.is_empty() {
            for x in rect.x1()..rect.x2() {
                self.plot(Point::new(x, rect.y1()), ink);
                self.plot(Point::new(x, rect.y2() - 1), ink);
            }
            for y in rect.y1()..rect.y2() {
                self.plot(Point::new(rect.x1(), y), ink);
                self.plot(Point::new(rect.x2() - 1, y), ink);
            }
        }
    }

    fn draw_text(&mut self, text: &str, at: Point) {
        // No glyph rasterization headlessly; the calls themselves are the
        // observable effect.
        self.sync_draw_state();
        if self.cache.apply_font(DEFAULT_FONT) {
            self.record(NativeCall::SelectFont(DEFAULT_FONT));
        }
        self.record(NativeCall::DrawText(text.to_owned(), at));
    }

    fn draw_img(&mut self, image: &Image, at: Point) {
        self.record(NativeCall::DrawImage(image.size(), at));
        for y in 0..image.size().h {
            for x in 0..image.size().w {
                let src = Point::new(x, y);
                if let Some(color) = image.get(src) {
                    self.plot(Point::new(at.x + x, at.y + y), color);
                }
            }
        }
    }
}
