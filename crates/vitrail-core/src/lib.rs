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

//! # Vitrail Core
//!
//! Platform-agnostic core of the Vitrail windowing toolkit: the typed
//! publish/subscribe event layer, the bidirectional handle registry that
//! ties native platform handles to toolkit objects, and the stateful
//! drawing-context contract with its redundant-call cache.
//!
//! Backend adapters (one per platform) implement the [`platform::WindowBackend`]
//! trait and the [`render::RenderState`] primitives; everything else in this
//! crate is backend-neutral.

#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod event;
pub mod math;
pub mod platform;
pub mod registry;
pub mod render;
pub mod window;

pub use context::Context;
pub use error::ToolkitError;
pub use registry::HandleRegistry;
