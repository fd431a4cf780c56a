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

//! A bidirectional 1:1 registry between native handles and toolkit objects.
//!
//! The toolkit instantiates this generic structure once per binding need;
//! the central one is native-handle ↔ window id, which lets a backend's
//! event pump find the owning window for every raw platform event. Backend
//! adapters may add their own for native resources. Registries are plain
//! values owned by a session or backend — never global state — so several
//! independent toolkit instances can coexist in one process.

use std::collections::HashMap;
use std::hash::Hash;

/// A two-way map enforcing a strict 1:1 bijection between `A` and `B`.
///
/// While the bijection holds, `from_a(from_b(b)) == b` and
/// `from_b(from_a(a)) == a` for every registered pair. Re-registering either
/// key evicts the stale pair on *both* sides first, so a key can never be
/// left silently orphaned in one direction.
///
/// # Example
///
/// ```rust
/// use vitrail_core::HandleRegistry;
///
/// let mut reg = HandleRegistry::new();
/// reg.register_pair(7u64, "main");
/// assert_eq!(reg.from_a(&7), Some(&"main"));
/// assert_eq!(reg.from_b(&"main"), Some(&7));
/// ```
#[derive(Debug, Clone)]
pub struct HandleRegistry<A, B> {
    a_to_b: HashMap<A, B>,
    b_to_a: HashMap<B, A>,
}

// Manual impl: an empty registry needs no `Default` on its key types.
impl<A, B> Default for HandleRegistry<A, B> {
    fn default() -> Self {
        Self {
            a_to_b: HashMap::new(),
            b_to_a: HashMap::new(),
        }
    }
}

impl<A, B> HandleRegistry<A, B>
where
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
{
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            a_to_b: HashMap::new(),
            b_to_a: HashMap::new(),
        }
    }

    /// Inserts an association between `a` and `b`.
    ///
    /// Any existing pair containing `a` and any existing pair containing `b`
    /// are removed in full before the new pair is inserted, keeping both
    /// directions consistent.
    pub fn register_pair(&mut self, a: A, b: B) {
        self.unregister_by_a(&a);
        self.unregister_by_b(&b);
        self.a_to_b.insert(a.clone(), b.clone());
        self.b_to_a.insert(b, a);
    }

    /// Removes the pair containing the given `A` key, both directions at
    /// once. No-op if the key is not registered.
    pub fn unregister_by_a(&mut self, a: &A) {
        if let Some(b) = self.a_to_b.remove(a) {
            self.b_to_a.remove(&b);
        }
    }

    /// Removes the pair containing the given `B` key, both directions at
    /// once. No-op if the key is not registered.
    pub fn unregister_by_b(&mut self, b: &B) {
        if let Some(a) = self.b_to_a.remove(b) {
            self.a_to_b.remove(&a);
        }
    }

    /// Looks up the `B` bound to `a`, or `None` if unmapped.
    #[must_use]
    pub fn from_a(&self, a: &A) -> Option<&B> {
        self.a_to_b.get(a)
    }

    /// Looks up the `A` bound to `b`, or `None` if unmapped.
    #[must_use]
    pub fn from_b(&self, b: &B) -> Option<&A> {
        self.b_to_a.get(b)
    }

    /// Empties both directions.
    pub fn clear(&mut self) {
        self.a_to_b.clear();
        self.b_to_a.clear();
    }

    /// Returns the number of registered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.a_to_b.len()
    }

    /// Returns `true` if no pair is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.a_to_b.is_empty()
    }

    /// Verifies the 1:1 bijection: every forward mapping must have the
    /// matching reverse mapping and vice versa.
    ///
    /// The registry's own operations preserve this; the check exists so
    /// sessions can assert it cheaply in debug paths and surface an
    /// [`InvariantViolation`](crate::ToolkitError::InvariantViolation)
    /// instead of corrupting lookups.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.a_to_b.len() == self.b_to_a.len()
            && self
                .a_to_b
                .iter()
                .all(|(a, b)| self.b_to_a.get(b) == Some(a))
    }
}
