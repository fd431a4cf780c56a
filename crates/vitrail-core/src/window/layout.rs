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

//! Child-window arrangement strategies.

use crate::math::{Coord, Rect};

/// A strategy for distributing a window's client area among its children.
///
/// A window optionally owns one layout manager. The toolkit does not apply
/// layouts implicitly; application code asks the parent to
/// [`arrange`](crate::window::Window::arrange) (typically from a resize
/// handler) and then moves each child to its computed rectangle.
pub trait LayoutManager {
    /// Computes one rectangle per child inside `area`, in child order.
    fn arrange(&mut self, area: Rect, child_count: usize) -> Vec<Rect>;
}

/// Stacks children top to bottom in equal-height rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnLayout {
    /// Gap between consecutive rows, in pixels.
    pub spacing: Coord,
}

impl ColumnLayout {
    /// Creates a column layout with the given row gap.
    pub const fn new(spacing: Coord) -> Self {
        Self { spacing }
    }
}

impl LayoutManager for ColumnLayout {
    fn arrange(&mut self, area: Rect, child_count: usize) -> Vec<Rect> {
        if child_count == 0 {
            return Vec::new();
        }
        let n = child_count as Coord;
        let total_spacing = self.spacing * (n - 1);
        let row_h = ((area.h() - total_spacing) / n).max(0);

        (0..n)
            .map(|i| {
                Rect::from_xywh(
                    area.x1(),
                    area.y1() + i * (row_h + self.spacing),
                    area.w(),
                    row_h,
                )
            })
            .collect()
    }
}
