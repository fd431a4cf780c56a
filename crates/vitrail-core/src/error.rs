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

//! Defines the error types shared by the toolkit core and backend adapters.

use std::fmt;

/// The error taxonomy of the toolkit core.
///
/// Every fallible operation in this crate and in backend adapters reports one
/// of these three categories. Subscriber callbacks are deliberately *not*
/// isolated: a panic inside an event handler unwinds out of
/// [`EventBus::emit`](crate::event::EventBus::emit) to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolkitError {
    /// A precondition was not met, or construction-time input was invalid
    /// (e.g. requesting a render state before `create()`, or a
    /// zero-dimension image).
    IllegalState {
        /// Description of the violated precondition.
        what: String,
    },
    /// The backend failed to allocate a native window or drawing resource.
    ///
    /// The operation that surfaced this error leaves the toolkit object in
    /// its prior state so the caller may retry or abort.
    ResourceUnavailable {
        /// Description of the resource that could not be allocated.
        what: String,
    },
    /// A structural invariant was broken, such as the handle registry's 1:1
    /// bijection becoming inconsistent.
    InvariantViolation {
        /// Description of the broken invariant.
        what: String,
    },
}

impl ToolkitError {
    /// Convenience constructor for [`ToolkitError::IllegalState`].
    pub fn illegal_state(what: impl Into<String>) -> Self {
        ToolkitError::IllegalState { what: what.into() }
    }

    /// Convenience constructor for [`ToolkitError::ResourceUnavailable`].
    pub fn resource_unavailable(what: impl Into<String>) -> Self {
        ToolkitError::ResourceUnavailable { what: what.into() }
    }

    /// Convenience constructor for [`ToolkitError::InvariantViolation`].
    pub fn invariant_violation(what: impl Into<String>) -> Self {
        ToolkitError::InvariantViolation { what: what.into() }
    }
}

impl fmt::Display for ToolkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolkitError::IllegalState { what } => {
                write!(f, "Illegal state: {what}")
            }
            ToolkitError::ResourceUnavailable { what } => {
                write!(f, "Resource unavailable: {what}")
            }
            ToolkitError::InvariantViolation { what } => {
                write!(f, "Invariant violation: {what}")
            }
        }
    }
}

impl std::error::Error for ToolkitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_state_display() {
        let err = ToolkitError::illegal_state("render state requested before create()");
        assert_eq!(
            format!("{err}"),
            "Illegal state: render state requested before create()"
        );
    }

    #[test]
    fn resource_unavailable_display() {
        let err = ToolkitError::resource_unavailable("native window");
        assert_eq!(format!("{err}"), "Resource unavailable: native window");
    }

    #[test]
    fn invariant_violation_display() {
        let err = ToolkitError::invariant_violation("handle registry bijection broken");
        assert_eq!(
            format!("{err}"),
            "Invariant violation: handle registry bijection broken"
        );
    }
}
