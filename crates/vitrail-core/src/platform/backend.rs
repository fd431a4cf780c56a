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

//! The capability contract implemented once per platform backend.

use crate::error::ToolkitError;
use crate::math::Rect;
use crate::platform::Screen;
use crate::render::{Image, SharedRenderState};
use crate::window::WindowId;

/// An opaque backend-native window identifier.
///
/// Backends fold whatever their platform uses — an X11 `Window`, a Win32
/// `HWND`, an SDL window id — into this 64-bit value. The toolkit never
/// interprets it; it is only a registry key for resolving events back to
/// their owning [`Window`](crate::window::Window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeHandle(pub u64);

/// The window/drawing capability interface of a platform backend.
///
/// Exactly one concrete implementation is compiled per target and handed to
/// the toolkit at composition time — windows receive it by injection on
/// every backend-touching call, so no global backend state exists and
/// several independent toolkit instances can share a process.
///
/// Besides implementing these operations, a backend owns the platform event
/// loop: it pumps native events, resolves the owning window through the
/// session's [`HandleRegistry`](crate::HandleRegistry), translates each
/// event into a [`WindowEvent`](crate::event::WindowEvent), and hands it to
/// [`Window::dispatch`](crate::window::Window::dispatch).
pub trait WindowBackend {
    /// Allocates a native window with the given bounds and title.
    ///
    /// The window is created hidden; [`show_window`](Self::show_window)
    /// makes it visible.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::ResourceUnavailable`] if the platform refuses the
    /// allocation. The caller's `Window` stays Uncreated in that case.
    fn create_window(&mut self, bounds: Rect, title: &str) -> Result<NativeHandle, ToolkitError>;

    /// Requests the platform make the window visible.
    fn show_window(&mut self, handle: NativeHandle) -> Result<(), ToolkitError>;

    /// Moves and/or resizes the native window.
    fn move_window(&mut self, handle: NativeHandle, bounds: Rect) -> Result<(), ToolkitError>;

    /// Requests a repaint of the whole window, or of `region` only.
    fn invalidate_window(&mut self, handle: NativeHandle, region: Option<Rect>);

    /// Releases the native window and every drawing resource cached for it,
    /// including its [`RenderCache`](crate::render::RenderCache).
    fn destroy_window(&mut self, handle: NativeHandle);

    /// Constructs the window-bound render state for a created window and
    /// binds a fresh render cache to `window`.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::ResourceUnavailable`] if native drawing resources
    /// cannot be allocated.
    fn create_render_state(
        &mut self,
        handle: NativeHandle,
        window: WindowId,
    ) -> Result<SharedRenderState, ToolkitError>;

    /// Constructs an image-bound render state that draws into `image`.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::ResourceUnavailable`] if the backend cannot set up
    /// an off-screen drawing context.
    fn create_image_render_state(&mut self, image: Image)
        -> Result<SharedRenderState, ToolkitError>;

    /// Enumerates the monitors known to the platform.
    fn screens(&self) -> Vec<Screen>;

    /// Whether this backend can reparent a window that has already been
    /// created. Backends that cannot (common on several platforms) simply
    /// report `false`; calling
    /// [`Window::set_parent`](crate::window::Window::set_parent) after
    /// creation is then a documented capability gap, not an error.
    fn supports_reparenting(&self) -> bool {
        false
    }
}
