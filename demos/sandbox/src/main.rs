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

// Vitrail Sandbox
// Drives the full window lifecycle over the headless backend and prints
// the simulated native-call journal, so the toolkit can be demoed without
// a display server.

use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use vitrail_core::event::{PaintEvent, WindowEvent};
use vitrail_core::math::{Point, Rect, Rgba, Size};
use vitrail_core::platform::WindowBackend;
use vitrail_core::window::AppWindow;
use vitrail_core::Context;
use vitrail_headless::HeadlessBackend;

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut ctx = Context::new();
    let mut backend = HeadlessBackend::new();

    for screen in backend.screens() {
        log::info!(
            "screen {}: {:?} (work area {:?}){}",
            screen.index,
            screen.bounds,
            screen.work_area,
            if screen.primary { " [primary]" } else { "" }
        );
    }

    let mut win = AppWindow::new(&mut ctx, Rect::from_xywh(40, 40, 320, 240), "Vitrail Sandbox");

    let clicks = Rc::new(RefCell::new(Vec::new()));
    let c = Rc::clone(&clicks);
    win.on_mouse_click.connect(move |ev| {
        log::info!("click: {:?} at {:?}", ev.button, ev.position);
        c.borrow_mut().push(ev.position);
        true
    });

    win.on_paint.connect(|ev: &PaintEvent| {
        let mut gpx = ev.gpx.borrow_mut();
        gpx.clear(Rgba::WHITE);
        gpx.set_ink(Rgba::BLUE).set_pen(2);
        gpx.draw_rect(Rect::from_xywh(10, 10, 300, 220), false);
        gpx.draw_line(Point::new(10, 10), Point::new(309, 229));
        gpx.draw_text("hello from vitrail", Point::new(20, 120));
        true
    });

    win.create(&mut backend, &mut ctx)?;
    win.show(&mut backend)?;
    win.invalidate(&mut backend);

    // Synthetic event stream, in the order a platform pump would deliver it.
    win.dispatch(WindowEvent::Expose(Rect::from_xywh(0, 0, 320, 240)), &mut backend)?;
    win.dispatch(WindowEvent::MouseMoved(Point::new(100, 80)), &mut backend)?;
    win.dispatch(
        WindowEvent::MouseClicked(vitrail_core::event::MouseEvent {
            button: vitrail_core::event::MouseButton::Left,
            position: Point::new(100, 80),
        }),
        &mut backend,
    )?;
    win.set_dimensions(Size::new(400, 300), &mut backend)?;
    win.dispatch(WindowEvent::Resized(Size::new(400, 300)), &mut backend)?;

    log::info!("recorded {} click(s)", clicks.borrow().len());
    for call in backend.take_journal() {
        log::info!("native: {call:?}");
    }

    win.destroy(&mut backend, &mut ctx);
    ctx.verify()?;
    Ok(())
}
