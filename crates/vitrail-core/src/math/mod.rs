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

//! Plain value types used throughout the toolkit.
//!
//! All geometry is integer-based: window systems address pixels, and the
//! toolkit follows the native convention of signed coordinates (a window may
//! sit partially off-screen) with half-open rectangle extents.

pub mod color;
pub mod geometry;

pub use self::color::Rgba;
pub use self::geometry::{Coord, Line, Point, Rect, Size};
