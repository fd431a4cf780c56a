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

//! Bus-neutral event payload types.
//!
//! Backend adapters translate raw platform events into these values before
//! emitting them on the owning window's buses; application code never sees a
//! platform event structure.

use crate::math::{Coord, Point, Rect};
use crate::render::SharedRenderState;

/// A mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseButton {
    /// No button (e.g. a synthetic event).
    #[default]
    None,
    /// The primary button.
    Left,
    /// The secondary button.
    Right,
    /// The middle button or wheel press.
    Middle,
    /// The first extra button.
    X1,
    /// The second extra button.
    X2,
}

/// A button press at a position, emitted on the mouse-click bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseEvent {
    /// Which button was pressed.
    pub button: MouseButton,
    /// The pointer position in window coordinates.
    pub position: Point,
}

impl MouseEvent {
    /// Creates a new mouse event.
    pub const fn new(button: MouseButton, position: Point) -> Self {
        Self { button, position }
    }
}

/// The scroll axis of a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WheelDirection {
    /// Scrolling along the vertical axis.
    #[default]
    Vertical,
    /// Scrolling along the horizontal axis.
    Horizontal,
}

/// A scroll-wheel movement, emitted on the mouse-wheel bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseWheelEvent {
    /// Where the pointer was during the scroll.
    pub position: Point,
    /// Scroll amount. Positive = up/right, negative = down/left.
    pub delta: Coord,
    /// The axis scrolled along.
    pub direction: WheelDirection,
}

impl MouseWheelEvent {
    /// Creates a new wheel event.
    pub const fn new(position: Point, delta: Coord, direction: WheelDirection) -> Self {
        Self {
            position,
            delta,
            direction,
        }
    }
}

/// A repaint request, emitted on the paint bus.
///
/// Carries the invalidated rectangle and a render state already clipped to
/// it, so a paint handler can draw immediately without touching window
/// internals.
#[derive(Clone)]
pub struct PaintEvent {
    /// The rectangle that needs repainting, in window coordinates.
    pub rect: Rect,
    /// The window's render state, pre-clipped to `rect`.
    pub gpx: SharedRenderState,
}

impl std::fmt::Debug for PaintEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaintEvent").field("rect", &self.rect).finish()
    }
}

/// A translated native event, ready to be routed to a window's buses.
///
/// This is what a backend's event pump produces for each raw platform event
/// after resolving the owning window through the handle registry. Routing
/// itself happens in [`Window::dispatch`](crate::window::Window::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The window finished native creation.
    Created,
    /// The window moved to a new origin.
    Moved(Point),
    /// The window was resized.
    Resized(crate::math::Size),
    /// A region of the window was exposed and must repaint.
    Expose(Rect),
    /// The pointer moved inside the window.
    MouseMoved(Point),
    /// A mouse button was pressed.
    MouseClicked(MouseEvent),
    /// The scroll wheel moved.
    MouseWheel(MouseWheelEvent),
}
