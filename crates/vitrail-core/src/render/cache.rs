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

//! Per-window memo of last-applied native drawing state.

use crate::math::{Rect, Rgba};

/// An opaque identifier for a backend-loaded font resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontHandle(pub u64);

/// The last state values written to a window's native drawing resources.
///
/// A backend adapter owns one `RenderCache` per created window (bound
/// through a [`HandleRegistry`](crate::HandleRegistry)), created on first
/// render-state acquisition and destroyed with the window. Before issuing a
/// native state-changing call — set foreground color, set pen width, set
/// clip region, select font — the adapter asks the cache whether the
/// requested value differs from the last one written, and issues the call
/// only then.
///
/// Each `apply_*` method compares and records in one step; `true` means
/// "changed, issue the native call now". A fresh or [`reset`](Self::reset)
/// cache reports every first application as changed, since no native value
/// exists yet. This is write-once-per-change memoization over a strictly
/// sequential, single-threaded stream of draw calls — not a retained scene.
#[derive(Debug, Clone, Default)]
pub struct RenderCache {
    last_ink: Option<Rgba>,
    last_pen: Option<u32>,
    last_clip: Option<Rect>,
    last_font: Option<FontHandle>,
}

impl RenderCache {
    /// Creates an empty cache; every first `apply_*` will report a change.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the requested ink color; `true` if the native foreground
    /// must be (re)written.
    pub fn apply_ink(&mut self, requested: Rgba) -> bool {
        if self.last_ink == Some(requested) {
            return false;
        }
        self.last_ink = Some(requested);
        true
    }

    /// Records the requested pen thickness; `true` if the native line
    /// attributes must be (re)written.
    pub fn apply_pen(&mut self, requested: u32) -> bool {
        if self.last_pen == Some(requested) {
            return false;
        }
        self.last_pen = Some(requested);
        true
    }

    /// Records the requested clip rectangle; `true` if the native clip
    /// region must be (re)written.
    pub fn apply_clip(&mut self, requested: Rect) -> bool {
        if self.last_clip == Some(requested) {
            return false;
        }
        self.last_clip = Some(requested);
        true
    }

    /// Records the requested font; `true` if the native font must be
    /// (re)selected.
    pub fn apply_font(&mut self, requested: FontHandle) -> bool {
        if self.last_font == Some(requested) {
            return false;
        }
        self.last_font = Some(requested);
        true
    }

    /// Forgets all recorded state.
    ///
    /// Used when the backend recreates the native drawing resources, after
    /// which every cached value is stale by definition.
    pub fn reset(&mut self) {
        log::trace!("render cache reset");
        *self = Self::default();
    }
}
