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

//! # Vitrail Headless
//!
//! An in-memory [`WindowBackend`](vitrail_core::platform::WindowBackend)
//! adapter. Windows are plain pixel buffers, drawing runs through the same
//! [`RenderCache`](vitrail_core::render::RenderCache) discipline a real
//! backend uses, and every simulated native call is appended to an
//! inspectable journal.
//!
//! The crate exists for tests, CI, and demos: toolkit behavior that normally
//! needs a display server can be exercised and asserted on without one.

#![warn(missing_docs)]

mod backend;
mod render;

pub use self::backend::{HeadlessBackend, NativeCall};
