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

//! The in-memory window backend and its native-call journal.

use crate::render::{CallJournal, HeadlessRenderState};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use vitrail_core::error::ToolkitError;
use vitrail_core::math::{Point, Rect, Rgba, Size};
use vitrail_core::platform::{NativeHandle, Screen, WindowBackend};
use vitrail_core::render::{FontHandle, Image, SharedRenderState};
use vitrail_core::window::WindowId;

/// One simulated native call, in issue order.
///
/// The journal is the headless stand-in for the platform's wire protocol:
/// tests assert on it to verify both what was drawn and — for the state
/// calls — that the render cache suppressed redundant writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeCall {
    /// A native window was allocated.
    CreateWindow(NativeHandle, Rect, String),
    /// A window was made visible.
    ShowWindow(NativeHandle),
    /// A window was moved and/or resized.
    MoveWindow(NativeHandle, Rect),
    /// A repaint was requested, for the whole window or a region.
    Invalidate(NativeHandle, Option<Rect>),
    /// A native window was released.
    DestroyWindow(NativeHandle),
    /// The foreground (ink) color was written to the drawing resources.
    SetForeground(Rgba),
    /// The pen thickness was written to the drawing resources.
    SetLineWidth(u32),
    /// The clip region was written to the drawing resources.
    SetClip(Rect),
    /// A font was selected into the drawing resources.
    SelectFont(FontHandle),
    /// The clip region was filled with a color.
    Clear(Rgba),
    /// A line primitive was issued.
    DrawLine(Point, Point),
    /// A rectangle primitive was issued (`true` = filled).
    DrawRect(Rect, bool),
    /// A text primitive was issued.
    DrawText(String, Point),
    /// An image blit was issued (source size, destination).
    DrawImage(Size, Point),
}

struct HeadlessWindow {
    bounds: Rect,
    title: String,
    visible: bool,
    surface: Rc<RefCell<Image>>,
}

/// A [`WindowBackend`] with no display server behind it.
///
/// Every window is an in-memory pixel surface; every operation that a real
/// adapter would forward to the platform is appended to the
/// [`NativeCall`] journal instead (drawing also rasterizes into the
/// surface, so pixel-level assertions work too).
#[derive(Default)]
pub struct HeadlessBackend {
    next_handle: u64,
    windows: HashMap<NativeHandle, HeadlessWindow>,
    images: Vec<Rc<RefCell<Image>>>,
    journal: CallJournal,
}

impl HeadlessBackend {
    /// Creates a backend with no windows and an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the native-call journal, in issue order.
    #[must_use]
    pub fn journal(&self) -> Vec<NativeCall> {
        self.journal.borrow().clone()
    }

    /// Drains the journal, returning the calls issued so far.
    pub fn take_journal(&mut self) -> Vec<NativeCall> {
        std::mem::take(&mut *self.journal.borrow_mut())
    }

    /// The number of currently live native windows.
    #[must_use]
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// The pixel surface of a live window.
    #[must_use]
    pub fn surface(&self, handle: NativeHandle) -> Option<Rc<RefCell<Image>>> {
        self.windows.get(&handle).map(|w| Rc::clone(&w.surface))
    }

    /// Whether a live window has been shown.
    #[must_use]
    pub fn is_visible(&self, handle: NativeHandle) -> bool {
        self.windows.get(&handle).is_some_and(|w| w.visible)
    }

    /// The title a live window was created with.
    #[must_use]
    pub fn title_of(&self, handle: NativeHandle) -> Option<&str> {
        self.windows.get(&handle).map(|w| w.title.as_str())
    }

    /// The pixel buffers behind image-bound render states, in creation
    /// order. Lets callers read back what was drawn off-screen, since the
    /// backend takes the [`Image`] by value.
    #[must_use]
    pub fn image_surfaces(&self) -> &[Rc<RefCell<Image>>] {
        &self.images
    }

    fn window(&self, handle: NativeHandle) -> Result<&HeadlessWindow, ToolkitError> {
        self.windows.get(&handle).ok_or_else(|| {
            ToolkitError::illegal_state(format!("no live window for {handle:?}"))
        })
    }

    fn record(&self, call: NativeCall) {
        self.journal.borrow_mut().push(call);
    }
}

impl WindowBackend for HeadlessBackend {
    fn create_window(&mut self, bounds: Rect, title: &str) -> Result<NativeHandle, ToolkitError> {
        let surface = Image::new(bounds.size).map_err(|_| {
            ToolkitError::resource_unavailable(format!(
                "window surface of {}x{}",
                bounds.w(),
                bounds.h()
            ))
        })?;

        self.next_handle += 1;
        let handle = NativeHandle(self.next_handle);
        self.windows.insert(
            handle,
            HeadlessWindow {
                bounds,
                title: title.to_owned(),
                visible: false,
                surface: Rc::new(RefCell::new(surface)),
            },
        );
        log::debug!("headless: created {handle:?} ({title:?}) at {bounds:?}");
        self.record(NativeCall::CreateWindow(handle, bounds, title.to_owned()));
        Ok(handle)
    }

    fn show_window(&mut self, handle: NativeHandle) -> Result<(), ToolkitError> {
        self.windows
            .get_mut(&handle)
            .ok_or_else(|| ToolkitError::illegal_state(format!("no live window for {handle:?}")))?
            .visible = true;
        self.record(NativeCall::ShowWindow(handle));
        Ok(())
    }

    fn move_window(&mut self, handle: NativeHandle, bounds: Rect) -> Result<(), ToolkitError> {
        let window = self
            .windows
            .get_mut(&handle)
            .ok_or_else(|| ToolkitError::illegal_state(format!("no live window for {handle:?}")))?;
        if window.bounds.size != bounds.size {
            // A resize invalidates the old surface wholesale.
            let surface = Image::new(bounds.size).map_err(|_| {
                ToolkitError::resource_unavailable(format!(
                    "window surface of {}x{}",
                    bounds.w(),
                    bounds.h()
                ))
            })?;
            *window.surface.borrow_mut() = surface;
        }
        window.bounds = bounds;
        self.record(NativeCall::MoveWindow(handle, bounds));
        Ok(())
    }

    fn invalidate_window(&mut self, handle: NativeHandle, region: Option<Rect>) {
        self.record(NativeCall::Invalidate(handle, region));
    }

    fn destroy_window(&mut self, handle: NativeHandle) {
        if self.windows.remove(&handle).is_some() {
            log::debug!("headless: destroyed {handle:?}");
            self.record(NativeCall::DestroyWindow(handle));
        }
    }

    /// The returned state owns its `RenderCache`, and the `Window` holds
    /// on to this acquisition for its created lifetime — that pairing is
    /// the per-window cache binding. Destroying the window drops the state
    /// and the cache with it; no separate cache table is kept.
    fn create_render_state(
        &mut self,
        handle: NativeHandle,
        window: WindowId,
    ) -> Result<SharedRenderState, ToolkitError> {
        let surface = Rc::clone(&self.window(handle)?.surface);
        log::debug!("headless: render state for {window:?} on {handle:?}");
        Ok(Rc::new(RefCell::new(HeadlessRenderState::new(
            surface,
            Rc::clone(&self.journal),
        ))))
    }

    fn create_image_render_state(
        &mut self,
        image: Image,
    ) -> Result<SharedRenderState, ToolkitError> {
        let surface = Rc::new(RefCell::new(image));
        self.images.push(Rc::clone(&surface));
        Ok(Rc::new(RefCell::new(HeadlessRenderState::new(
            surface,
            Rc::clone(&self.journal),
        ))))
    }

    fn screens(&self) -> Vec<Screen> {
        // One fixed full-HD monitor with a 40-pixel taskbar at the bottom.
        let bounds = Rect::from_xywh(0, 0, 1920, 1080);
        let work_area = Rect::from_xywh(0, 0, 1920, 1040);
        vec![Screen::new(0, bounds, work_area, true)]
    }

    fn supports_reparenting(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_show_destroy_round_trip() {
        let mut backend = HeadlessBackend::new();
        let handle = backend
            .create_window(Rect::from_xywh(0, 0, 20, 20), "t")
            .unwrap();

        assert_eq!(backend.window_count(), 1);
        assert!(!backend.is_visible(handle));
        backend.show_window(handle).unwrap();
        assert!(backend.is_visible(handle));
        assert_eq!(backend.title_of(handle), Some("t"));

        backend.destroy_window(handle);
        assert_eq!(backend.window_count(), 0);
        assert_eq!(
            backend.journal(),
            vec![
                NativeCall::CreateWindow(handle, Rect::from_xywh(0, 0, 20, 20), "t".to_owned()),
                NativeCall::ShowWindow(handle),
                NativeCall::DestroyWindow(handle),
            ]
        );
    }

    #[test]
    fn test_empty_window_is_refused() {
        let mut backend = HeadlessBackend::new();
        let err = backend
            .create_window(Rect::from_xywh(0, 0, 0, 10), "t")
            .unwrap_err();
        assert!(matches!(err, ToolkitError::ResourceUnavailable { .. }));
    }

    #[test]
    fn test_ops_on_dead_handle_fail() {
        let mut backend = HeadlessBackend::new();
        assert!(backend.show_window(NativeHandle(9)).is_err());
        assert!(backend
            .move_window(NativeHandle(9), Rect::from_xywh(0, 0, 5, 5))
            .is_err());
    }

    #[test]
    fn test_resize_replaces_the_surface() {
        let mut backend = HeadlessBackend::new();
        let handle = backend
            .create_window(Rect::from_xywh(0, 0, 10, 10), "t")
            .unwrap();
        let surface = backend.surface(handle).unwrap();
        surface.borrow_mut().set(Point::new(1, 1), Rgba::RED);

        backend
            .move_window(handle, Rect::from_xywh(0, 0, 30, 30))
            .unwrap();
        assert_eq!(surface.borrow().size(), Size::new(30, 30));
        assert_eq!(surface.borrow().get(Point::new(1, 1)), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_move_without_resize_keeps_pixels() {
        let mut backend = HeadlessBackend::new();
        let handle = backend
            .create_window(Rect::from_xywh(0, 0, 10, 10), "t")
            .unwrap();
        let surface = backend.surface(handle).unwrap();
        surface.borrow_mut().set(Point::new(1, 1), Rgba::RED);

        backend
            .move_window(handle, Rect::from_xywh(50, 60, 10, 10))
            .unwrap();
        assert_eq!(surface.borrow().get(Point::new(1, 1)), Some(Rgba::RED));
    }

    #[test]
    fn test_image_render_state_draws_into_the_buffer() {
        let mut backend = HeadlessBackend::new();
        let image = Image::new(Size::new(8, 8)).unwrap();
        let gpx = backend.create_image_render_state(image).unwrap();

        gpx.borrow_mut().set_ink(Rgba::GREEN);
        gpx.borrow_mut().draw_rect(Rect::from_xywh(0, 0, 8, 8), true);

        let surface = &backend.image_surfaces()[0];
        assert_eq!(surface.borrow().get(Point::new(4, 4)), Some(Rgba::GREEN));
    }

    #[test]
    fn test_single_primary_screen() {
        let backend = HeadlessBackend::new();
        let screens = backend.screens();
        assert_eq!(screens.len(), 1);
        assert!(screens[0].primary);
        assert!(screens[0].work_area.h() < screens[0].bounds.h());
    }
}
