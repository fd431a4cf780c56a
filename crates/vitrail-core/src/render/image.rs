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

//! An owned pixel buffer, the target of image-bound render states.

use crate::error::ToolkitError;
use crate::math::{Point, Rect, Rgba, Size};

/// A width × height buffer of packed [`Rgba`] pixels in row-major order.
///
/// Images are plain CPU-side data; drawing into one goes through an
/// image-bound [`RenderState`](crate::render::RenderState) supplied by the
/// backend, and blitting one to a window goes through
/// [`RenderState::draw_img`](crate::render::RenderState::draw_img).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    size: Size,
    pixels: Vec<Rgba>,
}

impl Image {
    /// Creates an image filled with transparent black.
    ///
    /// # Errors
    ///
    /// Fails fast with [`ToolkitError::IllegalState`] if either dimension
    /// is zero or negative.
    pub fn new(size: Size) -> Result<Self, ToolkitError> {
        if size.is_empty() {
            return Err(ToolkitError::illegal_state(format!(
                "image dimensions must be positive, got {}x{}",
                size.w, size.h
            )));
        }
        let len = (size.w as usize) * (size.h as usize);
        Ok(Self {
            size,
            pixels: vec![Rgba::TRANSPARENT; len],
        })
    }

    /// The image dimensions.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The image bounds at origin zero.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(Point::ZERO, self.size)
    }

    /// The pixel rows, top to bottom.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Mutable access to the pixel rows.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Reads one pixel, or `None` outside the bounds.
    pub fn get(&self, pt: Point) -> Option<Rgba> {
        if !self.bounds().contains(pt) {
            return None;
        }
        Some(self.pixels[pt.y as usize * self.size.w as usize + pt.x as usize])
    }

    /// Writes one pixel; out-of-bounds writes are ignored.
    pub fn set(&mut self, pt: Point, color: Rgba) {
        if self.bounds().contains(pt) {
            self.pixels[pt.y as usize * self.size.w as usize + pt.x as usize] = color;
        }
    }

    /// Fills a rectangle (clipped to the image) with a color.
    pub fn fill(&mut self, rect: Rect, color: Rgba) {
        let area = rect.intersect(&self.bounds());
        for y in area.y1()..area.y2() {
            let row = y as usize * self.size.w as usize;
            for x in area.x1()..area.x2() {
                self.pixels[row + x as usize] = color;
            }
        }
    }
}
