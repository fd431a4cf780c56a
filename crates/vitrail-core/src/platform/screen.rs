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

//! Monitor description reported by backend adapters.

use crate::math::Rect;

/// One monitor as reported by [`WindowBackend::screens`](crate::platform::WindowBackend::screens).
///
/// Enumeration only — DPI scaling is out of the toolkit's scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Screen {
    /// Backend-assigned index, stable for the session.
    pub index: usize,
    /// Full bounds in the virtual desktop coordinate space.
    pub bounds: Rect,
    /// Bounds minus reserved areas (taskbars, docks).
    pub work_area: Rect,
    /// Whether this is the primary monitor.
    pub primary: bool,
}

impl Screen {
    /// Creates a screen description.
    pub const fn new(index: usize, bounds: Rect, work_area: Rect, primary: bool) -> Self {
        Self {
            index,
            bounds,
            work_area,
            primary,
        }
    }
}
