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

//! The toolkit session object.

use crate::error::ToolkitError;
use crate::platform::NativeHandle;
use crate::registry::HandleRegistry;
use crate::window::WindowId;

/// One toolkit session: window identity allocation plus the
/// native-handle ↔ window binding table.
///
/// The context replaces what older toolkits keep as module-level globals.
/// It is an explicit value, constructed at backend init and dropped at
/// shutdown, passed to every component that needs handle translation — so
/// two independent toolkit instances can live in one process without
/// sharing any state. Like everything in this crate it is single-threaded:
/// it must only be touched from the UI thread that runs the event loop.
#[derive(Debug, Default)]
pub struct Context {
    next_window_id: u64,
    windows: HandleRegistry<NativeHandle, WindowId>,
}

impl Context {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next window identity. Ids are unique per session and
    /// never reused.
    pub(crate) fn alloc_window_id(&mut self) -> WindowId {
        self.next_window_id += 1;
        WindowId(self.next_window_id)
    }

    /// The native-handle ↔ window binding table.
    #[must_use]
    pub fn windows(&self) -> &HandleRegistry<NativeHandle, WindowId> {
        &self.windows
    }

    /// Mutable access to the binding table. Windows register themselves on
    /// `create` and unregister on `destroy`; backend shutdown may
    /// [`clear`](HandleRegistry::clear) it wholesale.
    pub fn windows_mut(&mut self) -> &mut HandleRegistry<NativeHandle, WindowId> {
        &mut self.windows
    }

    /// Resolves a native handle to the owning window id, as a backend event
    /// pump does for every raw platform event.
    #[must_use]
    pub fn window_for(&self, handle: NativeHandle) -> Option<WindowId> {
        self.windows.from_a(&handle).copied()
    }

    /// Resolves a window id back to its native handle.
    #[must_use]
    pub fn handle_for(&self, window: WindowId) -> Option<NativeHandle> {
        self.windows.from_b(&window).copied()
    }

    /// Asserts the binding table's 1:1 bijection.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::InvariantViolation`] if the two directions disagree.
    pub fn verify(&self) -> Result<(), ToolkitError> {
        if self.windows.is_consistent() {
            Ok(())
        } else {
            Err(ToolkitError::invariant_violation(
                "window binding table lost its bijection",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_ids_are_unique_and_increasing() {
        let mut ctx = Context::new();
        let a = ctx.alloc_window_id();
        let b = ctx.alloc_window_id();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_handle_resolution_round_trip() {
        let mut ctx = Context::new();
        let id = ctx.alloc_window_id();
        let handle = NativeHandle(0xDEAD);
        ctx.windows_mut().register_pair(handle, id);

        assert_eq!(ctx.window_for(handle), Some(id));
        assert_eq!(ctx.handle_for(id), Some(handle));
        assert!(ctx.verify().is_ok());
    }

    #[test]
    fn test_unknown_handle_resolves_to_none() {
        let ctx = Context::new();
        assert_eq!(ctx.window_for(NativeHandle(1)), None);
    }
}
