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

//! The drawing-context contract and its dirty-state cache.
//!
//! [`RenderState`] is the polymorphic drawing interface (window-bound or
//! image-bound, both backend-implemented), [`RenderCache`] is the per-window
//! memo that lets a backend skip redundant native state changes, and
//! [`Image`] is the owned pixel buffer behind the image-bound variant.

mod cache;
mod image;
mod state;

pub use self::cache::{FontHandle, RenderCache};
pub use self::image::Image;
pub use self::state::{RenderProps, RenderState, SharedRenderState};
