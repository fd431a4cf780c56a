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

//! The window lifecycle state machine.

use crate::context::Context;
use crate::error::ToolkitError;
use crate::event::{EventBus, MouseEvent, MouseWheelEvent, PaintEvent, WindowEvent};
use crate::math::{Coord, Point, Rect, Size};
use crate::platform::{NativeHandle, WindowBackend};
use crate::render::SharedRenderState;
use crate::window::LayoutManager;
use std::rc::Rc;

/// Session-scoped window identity.
///
/// Ids link windows to each other (parent/child back-references) and to the
/// session's handle registry without any ownership: dropping a `WindowId`
/// keeps nothing alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub(crate) u64);

/// A toolkit window: bounds, parent link, lifecycle state, lazily-created
/// drawing context, and one event bus per notification kind.
///
/// # Lifecycle
///
/// A window starts **Uncreated**; only [`create`](Self::create) allocates
/// backend resources and registers the native-handle pair, and only
/// [`destroy`](Self::destroy) releases them. [`show`](Self::show) requires
/// a created window. `destroy` returns the object to a state
/// indistinguishable from Uncreated, so the same `Window` may be created
/// again afterwards.
///
/// Every backend-touching method receives the backend by injection; the
/// window itself holds no reference to it.
pub struct Window {
    id: WindowId,
    bounds: Rect,
    parent: Option<WindowId>,
    children: Vec<WindowId>,
    created: bool,
    shown: bool,
    native: Option<NativeHandle>,
    layout: Option<Box<dyn LayoutManager>>,
    render_state: Option<SharedRenderState>,

    /// Emitted once native creation completes.
    pub on_create: EventBus<()>,
    /// Emitted when the native window moves; payload is the new origin.
    pub on_move: EventBus<Point>,
    /// Emitted when the native window resizes; payload is the new size.
    pub on_resize: EventBus<Size>,
    /// Emitted when a region must repaint; payload carries the rect and a
    /// render state pre-clipped to it.
    pub on_paint: EventBus<PaintEvent>,
    /// Emitted on pointer motion inside the window.
    pub on_mouse_move: EventBus<Point>,
    /// Emitted on mouse button presses.
    pub on_mouse_click: EventBus<MouseEvent>,
    /// Emitted on scroll-wheel movement.
    pub on_mouse_wheel: EventBus<MouseWheelEvent>,
}

impl Window {
    /// Creates an Uncreated window with the given bounds. No backend
    /// resource exists until [`create`](Self::create) is called.
    pub fn new(ctx: &mut Context, bounds: Rect) -> Self {
        Self {
            id: ctx.alloc_window_id(),
            bounds,
            parent: None,
            children: Vec::new(),
            created: false,
            shown: false,
            native: None,
            layout: None,
            render_state: None,
            on_create: EventBus::new(),
            on_move: EventBus::new(),
            on_resize: EventBus::new(),
            on_paint: EventBus::new(),
            on_mouse_move: EventBus::new(),
            on_mouse_click: EventBus::new(),
            on_mouse_wheel: EventBus::new(),
        }
    }

    /// This window's session-scoped identity.
    #[inline]
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// The window bounds as last set (or as constructed).
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The left edge of the window.
    #[inline]
    pub fn x(&self) -> Coord {
        self.bounds.x1()
    }

    /// The top edge of the window.
    #[inline]
    pub fn y(&self) -> Coord {
        self.bounds.y1()
    }

    /// The window width.
    #[inline]
    pub fn width(&self) -> Coord {
        self.bounds.w()
    }

    /// The window height.
    #[inline]
    pub fn height(&self) -> Coord {
        self.bounds.h()
    }

    /// Whether the native window currently exists.
    #[inline]
    pub fn is_created(&self) -> bool {
        self.created
    }

    /// Whether [`show`](Self::show) has run since creation.
    #[inline]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// The native handle, while created.
    #[inline]
    pub fn native_handle(&self) -> Option<NativeHandle> {
        self.native
    }

    /// Allocates the backend-native window.
    ///
    /// Registers the `(native handle, window id)` pair in the session,
    /// marks the window Created, and emits the create event. Calling it on
    /// an already-created window is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates the backend's allocation failure; the window stays
    /// Uncreated so the caller may retry or abort.
    pub fn create(
        &mut self,
        backend: &mut dyn WindowBackend,
        ctx: &mut Context,
    ) -> Result<(), ToolkitError> {
        self.create_titled(backend, ctx, "")
    }

    /// Shared creation path; `AppWindow` passes its title through here.
    pub(crate) fn create_titled(
        &mut self,
        backend: &mut dyn WindowBackend,
        ctx: &mut Context,
        title: &str,
    ) -> Result<(), ToolkitError> {
        if self.created {
            log::debug!("window {:?}: create() ignored, already created", self.id);
            return Ok(());
        }

        let handle = backend.create_window(self.bounds, title)?;
        ctx.windows_mut().register_pair(handle, self.id);
        self.native = Some(handle);
        self.created = true;
        log::info!(
            "window {:?} created as native {:?} at {:?}",
            self.id,
            handle,
            self.bounds
        );

        self.on_create.emit(&());
        Ok(())
    }

    /// Requests the backend make the window visible.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::IllegalState`] when the window is not created.
    pub fn show(&mut self, backend: &mut dyn WindowBackend) -> Result<(), ToolkitError> {
        let handle = self.require_created("show")?;
        backend.show_window(handle)?;
        self.shown = true;
        Ok(())
    }

    /// Moves the window origin. See [`set_bounds`](Self::set_bounds).
    pub fn set_position(
        &mut self,
        origin: Point,
        backend: &mut dyn WindowBackend,
    ) -> Result<(), ToolkitError> {
        self.set_bounds(Rect::new(origin, self.bounds.size), backend)
    }

    /// Resizes the window. See [`set_bounds`](Self::set_bounds).
    pub fn set_dimensions(
        &mut self,
        size: Size,
        backend: &mut dyn WindowBackend,
    ) -> Result<(), ToolkitError> {
        self.set_bounds(Rect::new(self.bounds.origin, size), backend)
    }

    /// Updates the window bounds.
    ///
    /// The in-memory bounds change immediately in every state. The backend
    /// move/resize call is issued only while the window is created; bounds
    /// set before creation are deferred and take effect at
    /// [`create`](Self::create) time rather than being discarded.
    pub fn set_bounds(
        &mut self,
        bounds: Rect,
        backend: &mut dyn WindowBackend,
    ) -> Result<(), ToolkitError> {
        self.bounds = bounds;
        if let Some(handle) = self.native {
            backend.move_window(handle, bounds)?;
        }
        Ok(())
    }

    /// Stores a non-owning back-reference to the parent window.
    ///
    /// Whether a backend can reparent an already-created native window is a
    /// capability question
    /// ([`WindowBackend::supports_reparenting`]); the toolkit records the
    /// link either way.
    pub fn set_parent(&mut self, parent: Option<WindowId>) {
        self.parent = parent;
    }

    /// The parent back-reference, if any.
    #[inline]
    pub fn parent(&self) -> Option<WindowId> {
        self.parent
    }

    /// Records a child id. The link carries no ownership; the caller also
    /// sets the child's [`set_parent`](Self::set_parent) back-reference.
    pub fn add_child(&mut self, child: WindowId) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }

    /// Removes a child id; no-op if absent.
    pub fn remove_child(&mut self, child: WindowId) {
        self.children.retain(|&c| c != child);
    }

    /// The child ids in insertion order.
    #[inline]
    pub fn children(&self) -> &[WindowId] {
        &self.children
    }

    /// Installs (or clears) the layout manager for this window's children.
    pub fn set_layout(&mut self, layout: Option<Box<dyn LayoutManager>>) {
        self.layout = layout;
    }

    /// Computes one rectangle per child from the installed layout manager,
    /// in client coordinates. Returns `None` when no layout is installed.
    ///
    /// The caller applies the rectangles to the children; the toolkit never
    /// moves windows behind the application's back.
    pub fn arrange(&mut self) -> Option<Vec<Rect>> {
        let count = self.children.len();
        let area = Rect::new(Point::ZERO, self.bounds.size);
        self.layout.as_mut().map(|l| l.arrange(area, count))
    }

    /// Requests a repaint of the whole window. No-op while not created.
    pub fn invalidate(&mut self, backend: &mut dyn WindowBackend) {
        if let Some(handle) = self.native {
            backend.invalidate_window(handle, None);
        }
    }

    /// Requests a repaint of a sub-rectangle. No-op while not created.
    pub fn invalidate_rect(&mut self, rect: Rect, backend: &mut dyn WindowBackend) {
        if let Some(handle) = self.native {
            backend.invalidate_window(handle, Some(rect));
        }
    }

    /// Releases the native window and everything nested in its lifetime:
    /// the backend drops the window's render cache, the session binding is
    /// removed, and the lazily-created render state is dropped.
    ///
    /// No-op on an Uncreated window. Afterwards the window may be
    /// [`create`](Self::create)d again.
    pub fn destroy(&mut self, backend: &mut dyn WindowBackend, ctx: &mut Context) {
        let Some(handle) = self.native.take() else {
            log::debug!("window {:?}: destroy() ignored, not created", self.id);
            return;
        };
        backend.destroy_window(handle);
        ctx.windows_mut().unregister_by_a(&handle);
        self.created = false;
        self.shown = false;
        self.render_state = None;
        log::info!("window {:?} destroyed (was native {:?})", self.id, handle);
    }

    /// The window's drawing context, constructed lazily on first call.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::IllegalState`] before [`create`](Self::create);
    /// backend resource failures propagate.
    pub fn render_state(
        &mut self,
        backend: &mut dyn WindowBackend,
    ) -> Result<SharedRenderState, ToolkitError> {
        let handle = self.require_created("render_state")?;
        if let Some(state) = &self.render_state {
            return Ok(Rc::clone(state));
        }
        let state = backend.create_render_state(handle, self.id)?;
        self.render_state = Some(Rc::clone(&state));
        Ok(state)
    }

    /// Routes a translated native event to the owning bus.
    ///
    /// Backend event pumps call this after resolving the window through the
    /// session registry. An `Expose` event is intersected with the window's
    /// client area, the render state is pre-clipped to the result, and a
    /// [`PaintEvent`] carrying both is emitted; empty exposures are dropped.
    ///
    /// # Errors
    ///
    /// `Expose` needs the render state, so it can surface the same errors
    /// as [`render_state`](Self::render_state).
    pub fn dispatch(
        &mut self,
        event: WindowEvent,
        backend: &mut dyn WindowBackend,
    ) -> Result<(), ToolkitError> {
        match event {
            WindowEvent::Created => self.on_create.emit(&()),
            WindowEvent::Moved(origin) => self.on_move.emit(&origin),
            WindowEvent::Resized(size) => self.on_resize.emit(&size),
            WindowEvent::Expose(exposed) => {
                let client = Rect::new(Point::ZERO, self.bounds.size);
                let rect = exposed.intersect(&client);
                if rect.is_empty() {
                    return Ok(());
                }
                let gpx = self.render_state(backend)?;
                gpx.borrow_mut().set_clip(rect);
                self.on_paint.emit(&PaintEvent { rect, gpx });
            }
            WindowEvent::MouseMoved(position) => self.on_mouse_move.emit(&position),
            WindowEvent::MouseClicked(click) => self.on_mouse_click.emit(&click),
            WindowEvent::MouseWheel(wheel) => self.on_mouse_wheel.emit(&wheel),
        }
        Ok(())
    }

    fn require_created(&self, op: &str) -> Result<NativeHandle, ToolkitError> {
        self.native.ok_or_else(|| {
            ToolkitError::illegal_state(format!(
                "{op}() requires a created window, but {:?} is not created",
                self.id
            ))
        })
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .field("bounds", &self.bounds)
            .field("created", &self.created)
            .field("shown", &self.shown)
            .field("native", &self.native)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Screen;
    use crate::render::{Image, RenderProps, RenderState, SharedRenderState};
    use crate::math::Rgba;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    /// Minimal counting backend for lifecycle tests.
    #[derive(Default)]
    struct FakeBackend {
        next: u64,
        fail_create: bool,
        create_calls: u32,
        show_calls: u32,
        destroy_calls: u32,
        moves: Vec<(NativeHandle, Rect)>,
        invalidations: Vec<(NativeHandle, Option<Rect>)>,
        live: HashMap<NativeHandle, Rect>,
    }

    struct FakeRenderState {
        props: RenderProps,
    }

    impl RenderState for FakeRenderState {
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
            self
        }
        fn clip(&self) -> Rect {
            self.props.clip
        }
        fn clear(&mut self, _color: Rgba) {}
        fn draw_line(&mut self, _from: Point, _to: Point) {}
        fn draw_rect(&mut self, _rect: Rect, _filled: bool) {}
        fn draw_text(&mut self, _text: &str, _at: Point) {}
        fn draw_img(&mut self, _image: &Image, _at: Point) {}
    }

    impl WindowBackend for FakeBackend {
        fn create_window(
            &mut self,
            bounds: Rect,
            _title: &str,
        ) -> Result<NativeHandle, ToolkitError> {
            if self.fail_create {
                return Err(ToolkitError::resource_unavailable("native window"));
            }
            self.create_calls += 1;
            self.next += 1;
            let handle = NativeHandle(self.next);
            self.live.insert(handle, bounds);
            Ok(handle)
        }

        fn show_window(&mut self, _handle: NativeHandle) -> Result<(), ToolkitError> {
            self.show_calls += 1;
            Ok(())
        }

        fn move_window(&mut self, handle: NativeHandle, bounds: Rect) -> Result<(), ToolkitError> {
            self.moves.push((handle, bounds));
            self.live.insert(handle, bounds);
            Ok(())
        }

        fn invalidate_window(&mut self, handle: NativeHandle, region: Option<Rect>) {
            self.invalidations.push((handle, region));
        }

        fn destroy_window(&mut self, handle: NativeHandle) {
            self.destroy_calls += 1;
            self.live.remove(&handle);
        }

        fn create_render_state(
            &mut self,
            handle: NativeHandle,
            _window: WindowId,
        ) -> Result<SharedRenderState, ToolkitError> {
            let bounds = Rect::new(Point::ZERO, self.live[&handle].size);
            Ok(std::rc::Rc::new(RefCell::new(FakeRenderState {
                props: RenderProps::for_target(bounds),
            })))
        }

        fn create_image_render_state(
            &mut self,
            image: Image,
        ) -> Result<SharedRenderState, ToolkitError> {
            Ok(std::rc::Rc::new(RefCell::new(FakeRenderState {
                props: RenderProps::for_target(image.bounds()),
            })))
        }

        fn screens(&self) -> Vec<Screen> {
            Vec::new()
        }
    }

    fn fixture() -> (Context, FakeBackend) {
        (Context::new(), FakeBackend::default())
    }

    #[test]
    fn test_create_is_idempotent() {
        let (mut ctx, mut backend) = fixture();
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 100, 100));

        w.create(&mut backend, &mut ctx).unwrap();
        w.create(&mut backend, &mut ctx).unwrap();

        assert_eq!(backend.create_calls, 1);
        assert!(w.is_created());
    }

    #[test]
    fn test_create_registers_handle_pair() {
        let (mut ctx, mut backend) = fixture();
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 10, 10));
        w.create(&mut backend, &mut ctx).unwrap();

        let handle = w.native_handle().unwrap();
        assert_eq!(ctx.window_for(handle), Some(w.id()));
        assert_eq!(ctx.handle_for(w.id()), Some(handle));
    }

    #[test]
    fn test_create_emits_create_event() {
        let (mut ctx, mut backend) = fixture();
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 10, 10));
        let fired = std::rc::Rc::new(Cell::new(0));
        let f = std::rc::Rc::clone(&fired);
        w.on_create.connect(move |_| {
            f.set(f.get() + 1);
            false
        });

        w.create(&mut backend, &mut ctx).unwrap();
        w.create(&mut backend, &mut ctx).unwrap(); // no second emission
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_failed_create_leaves_window_uncreated() {
        let (mut ctx, mut backend) = fixture();
        backend.fail_create = true;
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 10, 10));

        let err = w.create(&mut backend, &mut ctx).unwrap_err();
        assert!(matches!(err, ToolkitError::ResourceUnavailable { .. }));
        assert!(!w.is_created());
        assert!(ctx.windows().is_empty());

        // The caller may retry once the backend recovers.
        backend.fail_create = false;
        w.create(&mut backend, &mut ctx).unwrap();
        assert!(w.is_created());
    }

    #[test]
    fn test_show_requires_created() {
        let (mut ctx, mut backend) = fixture();
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 10, 10));

        assert!(matches!(
            w.show(&mut backend),
            Err(ToolkitError::IllegalState { .. })
        ));

        w.create(&mut backend, &mut ctx).unwrap();
        w.show(&mut backend).unwrap();
        assert!(w.is_shown());
        assert_eq!(backend.show_calls, 1);
    }

    #[test]
    fn test_bounds_before_create_are_deferred() {
        let (mut ctx, mut backend) = fixture();
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 10, 10));

        let moved = Rect::from_xywh(5, 5, 200, 150);
        w.set_bounds(moved, &mut backend).unwrap();
        assert_eq!(w.bounds(), moved);
        assert!(backend.moves.is_empty(), "no backend call before create");

        w.create(&mut backend, &mut ctx).unwrap();
        // The deferred bounds were passed to create_window itself.
        assert_eq!(backend.live[&w.native_handle().unwrap()], moved);
    }

    #[test]
    fn test_bounds_after_create_move_the_native_window() {
        let (mut ctx, mut backend) = fixture();
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 10, 10));
        w.create(&mut backend, &mut ctx).unwrap();

        w.set_position(Point::new(30, 40), &mut backend).unwrap();
        w.set_dimensions(Size::new(300, 200), &mut backend).unwrap();

        assert_eq!(backend.moves.len(), 2);
        assert_eq!(w.bounds(), Rect::from_xywh(30, 40, 300, 200));
    }

    #[test]
    fn test_invalidate_is_noop_before_create() {
        let (mut ctx, mut backend) = fixture();
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 10, 10));

        w.invalidate(&mut backend);
        w.invalidate_rect(Rect::from_xywh(0, 0, 5, 5), &mut backend);
        assert!(backend.invalidations.is_empty());

        w.create(&mut backend, &mut ctx).unwrap();
        w.invalidate(&mut backend);
        w.invalidate_rect(Rect::from_xywh(0, 0, 5, 5), &mut backend);
        assert_eq!(backend.invalidations.len(), 2);
        assert_eq!(backend.invalidations[0].1, None);
        assert_eq!(
            backend.invalidations[1].1,
            Some(Rect::from_xywh(0, 0, 5, 5))
        );
    }

    #[test]
    fn test_destroy_uncreated_is_noop() {
        let (mut ctx, mut backend) = fixture();
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 10, 10));
        w.destroy(&mut backend, &mut ctx);
        assert_eq!(backend.destroy_calls, 0);
    }

    #[test]
    fn test_destroy_releases_everything() {
        let (mut ctx, mut backend) = fixture();
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 10, 10));
        w.create(&mut backend, &mut ctx).unwrap();
        let handle = w.native_handle().unwrap();
        w.render_state(&mut backend).unwrap();

        w.destroy(&mut backend, &mut ctx);

        assert!(!w.is_created());
        assert_eq!(w.native_handle(), None);
        assert_eq!(ctx.window_for(handle), None);
        assert_eq!(backend.destroy_calls, 1);
    }

    #[test]
    fn test_window_is_recreatable_after_destroy() {
        let (mut ctx, mut backend) = fixture();
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 10, 10));

        w.create(&mut backend, &mut ctx).unwrap();
        w.destroy(&mut backend, &mut ctx);
        w.create(&mut backend, &mut ctx).unwrap();

        assert!(w.is_created());
        assert_eq!(backend.create_calls, 2);
        assert_eq!(ctx.window_for(w.native_handle().unwrap()), Some(w.id()));
    }

    #[test]
    fn test_render_state_before_create_is_illegal() {
        let (mut ctx, mut backend) = fixture();
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 10, 10));
        assert!(matches!(
            w.render_state(&mut backend),
            Err(ToolkitError::IllegalState { .. })
        ));
        let _ = ctx;
    }

    #[test]
    fn test_render_state_is_lazily_created_once() {
        let (mut ctx, mut backend) = fixture();
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 10, 10));
        w.create(&mut backend, &mut ctx).unwrap();

        let a = w.render_state(&mut backend).unwrap();
        let b = w.render_state(&mut backend).unwrap();
        assert!(std::rc::Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_dispatch_expose_preclips_and_emits_paint() {
        let (mut ctx, mut backend) = fixture();
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 100, 100));
        w.create(&mut backend, &mut ctx).unwrap();

        let seen = std::rc::Rc::new(RefCell::new(None));
        let s = std::rc::Rc::clone(&seen);
        w.on_paint.connect(move |ev: &PaintEvent| {
            *s.borrow_mut() = Some((ev.rect, ev.gpx.borrow().clip()));
            true
        });

        w.dispatch(WindowEvent::Expose(Rect::from_xywh(0, 0, 50, 50)), &mut backend)
            .unwrap();

        let (rect, clip) = seen.borrow_mut().take().unwrap();
        assert_eq!(rect, Rect::from_xywh(0, 0, 50, 50));
        assert_eq!(clip, Rect::from_xywh(0, 0, 50, 50));
    }

    #[test]
    fn test_dispatch_expose_clamps_to_client_area() {
        let (mut ctx, mut backend) = fixture();
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 40, 40));
        w.create(&mut backend, &mut ctx).unwrap();

        let seen = std::rc::Rc::new(RefCell::new(None));
        let s = std::rc::Rc::clone(&seen);
        w.on_paint.connect(move |ev: &PaintEvent| {
            *s.borrow_mut() = Some(ev.rect);
            true
        });

        w.dispatch(WindowEvent::Expose(Rect::from_xywh(30, 30, 50, 50)), &mut backend)
            .unwrap();
        assert_eq!(seen.borrow().unwrap(), Rect::from_xywh(30, 30, 10, 10));

        // Fully outside the client area: dropped.
        *seen.borrow_mut() = None;
        w.dispatch(WindowEvent::Expose(Rect::from_xywh(200, 200, 5, 5)), &mut backend)
            .unwrap();
        assert!(seen.borrow().is_none());
    }

    #[test]
    fn test_dispatch_routes_input_events() {
        let (mut ctx, mut backend) = fixture();
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 10, 10));
        w.create(&mut backend, &mut ctx).unwrap();

        let moves = std::rc::Rc::new(RefCell::new(Vec::new()));
        let m = std::rc::Rc::clone(&moves);
        w.on_mouse_move.connect(move |p: &Point| {
            m.borrow_mut().push(*p);
            false
        });

        w.dispatch(WindowEvent::MouseMoved(Point::new(3, 4)), &mut backend)
            .unwrap();
        w.dispatch(WindowEvent::MouseMoved(Point::new(5, 6)), &mut backend)
            .unwrap();
        assert_eq!(*moves.borrow(), vec![Point::new(3, 4), Point::new(5, 6)]);
    }

    #[test]
    fn test_dispatch_routes_wheel_events() {
        use crate::event::{MouseWheelEvent, WheelDirection};

        let (mut ctx, mut backend) = fixture();
        let mut w = Window::new(&mut ctx, Rect::from_xywh(0, 0, 10, 10));
        w.create(&mut backend, &mut ctx).unwrap();

        let seen = std::rc::Rc::new(Cell::new(0));
        let s = std::rc::Rc::clone(&seen);
        w.on_mouse_wheel.connect(move |ev: &MouseWheelEvent| {
            s.set(ev.delta);
            true
        });

        // Positive delta is scrolling up.
        let up = MouseWheelEvent::new(Point::new(2, 2), 1, WheelDirection::Vertical);
        w.dispatch(WindowEvent::MouseWheel(up), &mut backend).unwrap();
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn test_parent_and_children_links() {
        let (mut ctx, _backend) = fixture();
        let mut parent = Window::new(&mut ctx, Rect::from_xywh(0, 0, 100, 100));
        let mut child = Window::new(&mut ctx, Rect::from_xywh(10, 10, 20, 20));

        child.set_parent(Some(parent.id()));
        parent.add_child(child.id());
        parent.add_child(child.id()); // duplicates are ignored

        assert_eq!(child.parent(), Some(parent.id()));
        assert_eq!(parent.children(), &[child.id()]);

        parent.remove_child(child.id());
        assert!(parent.children().is_empty());
    }

    #[test]
    fn test_arrange_uses_installed_layout() {
        let (mut ctx, _backend) = fixture();
        let mut parent = Window::new(&mut ctx, Rect::from_xywh(0, 0, 100, 60));
        let a = Window::new(&mut ctx, Rect::from_xywh(0, 0, 1, 1));
        let b = Window::new(&mut ctx, Rect::from_xywh(0, 0, 1, 1));
        parent.add_child(a.id());
        parent.add_child(b.id());

        assert!(parent.arrange().is_none(), "no layout installed yet");

        parent.set_layout(Some(Box::new(crate::window::ColumnLayout::new(0))));
        let rects = parent.arrange().unwrap();
        assert_eq!(
            rects,
            vec![
                Rect::from_xywh(0, 0, 100, 30),
                Rect::from_xywh(0, 30, 100, 30),
            ]
        );
    }
}
