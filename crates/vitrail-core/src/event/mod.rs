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

//! Event-driven communication primitives.
//!
//! The [`EventBus`] is the single notification mechanism of the toolkit:
//! every window owns one bus per event kind (create, move, resize, paint,
//! mouse move/click/wheel) and backend adapters publish translated native
//! events into them. The payload types live in [`types`].

mod bus;
mod types;

pub use self::bus::{EventBus, SubscriptionId};
pub use self::types::{
    MouseButton, MouseEvent, MouseWheelEvent, PaintEvent, WheelDirection, WindowEvent,
};
