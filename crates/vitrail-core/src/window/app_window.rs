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

//! Top-level (titled) application windows.

use crate::context::Context;
use crate::error::ToolkitError;
use crate::math::Rect;
use crate::platform::WindowBackend;
use crate::window::Window;
use std::ops::{Deref, DerefMut};

/// A top-level window with a caption.
///
/// `AppWindow` is a thin specialization of [`Window`]: it derefs to the
/// inner window for everything except creation, which passes the title to
/// the backend. The title is fixed at construction.
pub struct AppWindow {
    window: Window,
    title: String,
}

impl AppWindow {
    /// Creates an Uncreated titled window.
    pub fn new(ctx: &mut Context, bounds: Rect, title: impl Into<String>) -> Self {
        Self {
            window: Window::new(ctx, bounds),
            title: title.into(),
        }
    }

    /// The window caption.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Allocates the native window with this window's title. Shadows
    /// [`Window::create`] so the caption reaches the backend; everything
    /// else about the lifecycle is the inner window's.
    pub fn create(
        &mut self,
        backend: &mut dyn WindowBackend,
        ctx: &mut Context,
    ) -> Result<(), ToolkitError> {
        self.window.create_titled(backend, ctx, &self.title)
    }
}

impl Deref for AppWindow {
    type Target = Window;

    fn deref(&self) -> &Window {
        &self.window
    }
}

impl DerefMut for AppWindow {
    fn deref_mut(&mut self) -> &mut Window {
        &mut self.window
    }
}

impl std::fmt::Debug for AppWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppWindow")
            .field("title", &self.title)
            .field("window", &self.window)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Point, Rect};
    use crate::platform::{NativeHandle, Screen};
    use crate::render::{Image, SharedRenderState};
    use crate::window::WindowId;

    #[derive(Default)]
    struct TitleBackend {
        titles: Vec<String>,
    }

    impl WindowBackend for TitleBackend {
        fn create_window(
            &mut self,
            _bounds: Rect,
            title: &str,
        ) -> Result<NativeHandle, ToolkitError> {
            self.titles.push(title.to_owned());
            Ok(NativeHandle(self.titles.len() as u64))
        }
        fn show_window(&mut self, _handle: NativeHandle) -> Result<(), ToolkitError> {
            Ok(())
        }
        fn move_window(&mut self, _handle: NativeHandle, _bounds: Rect) -> Result<(), ToolkitError> {
            Ok(())
        }
        fn invalidate_window(&mut self, _handle: NativeHandle, _region: Option<Rect>) {}
        fn destroy_window(&mut self, _handle: NativeHandle) {}
        fn create_render_state(
            &mut self,
            _handle: NativeHandle,
            _window: WindowId,
        ) -> Result<SharedRenderState, ToolkitError> {
            Err(ToolkitError::resource_unavailable("drawing context"))
        }
        fn create_image_render_state(
            &mut self,
            _image: Image,
        ) -> Result<SharedRenderState, ToolkitError> {
            Err(ToolkitError::resource_unavailable("drawing context"))
        }
        fn screens(&self) -> Vec<Screen> {
            Vec::new()
        }
    }

    #[test]
    fn test_create_passes_title_to_backend() {
        let mut ctx = Context::new();
        let mut backend = TitleBackend::default();
        let mut w = AppWindow::new(&mut ctx, Rect::from_xywh(0, 0, 100, 100), "hello");

        assert_eq!(w.title(), "hello");
        w.create(&mut backend, &mut ctx).unwrap();
        assert_eq!(backend.titles, vec!["hello".to_owned()]);
    }

    #[test]
    fn test_derefs_to_inner_window() {
        let mut ctx = Context::new();
        let mut backend = TitleBackend::default();
        let mut w = AppWindow::new(&mut ctx, Rect::from_xywh(0, 0, 100, 100), "t");

        w.create(&mut backend, &mut ctx).unwrap();
        assert!(w.is_created());
        w.set_position(Point::new(7, 9), &mut backend).unwrap();
        assert_eq!(w.bounds().origin, Point::new(7, 9));
    }
}
