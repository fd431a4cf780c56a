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

//! The ordered publish/subscribe primitive behind every toolkit event.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Handle returned by [`EventBus::connect`], usable for later removal.
///
/// Ids are unique and monotonically increasing within one bus instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Rc<RefCell<dyn FnMut(&T) -> bool>>;

struct Slots<T> {
    by_id: BTreeMap<u64, Callback<T>>,
    next_id: u64,
}

/// A typed, ordered publish/subscribe channel with "handled" short-circuiting.
///
/// Subscribers are invoked in **reverse registration order**: the most
/// recently connected callback runs first, and the first callback to return
/// `true` stops the emission. This lets a later-attached, more specific
/// handler intercept an event before earlier, more generic ones — the
/// toolkit's equivalent of capture-before-bubble without a routing tree.
///
/// An optional zero-argument initializer runs at most once per bus, lazily,
/// the first time the bus is connected to or emitted on. Backends use it to
/// defer native event-mask setup until someone actually listens.
///
/// The bus is single-threaded (interior mutability via `RefCell`), matching
/// the toolkit's UI-thread affinity. Subscribers may connect and disconnect
/// on the very bus that is mid-emission; the emission operates on a snapshot
/// of the subscription ids taken when `emit` began — ids removed during the
/// emission are skipped, ids added during it are not invoked.
///
/// Subscriber failures are not isolated: a panicking callback unwinds out of
/// [`emit`](EventBus::emit) to the caller.
pub struct EventBus<T> {
    slots: RefCell<Slots<T>>,
    initializer: RefCell<Option<Box<dyn FnMut()>>>,
    initialized: std::cell::Cell<bool>,
}

impl<T> EventBus<T> {
    /// Creates an empty bus with no initializer.
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Slots {
                by_id: BTreeMap::new(),
                next_id: 0,
            }),
            initializer: RefCell::new(None),
            initialized: std::cell::Cell::new(false),
        }
    }

    /// Creates an empty bus whose `init` closure runs exactly once, lazily,
    /// before the first connection or emission.
    pub fn with_initializer(init: impl FnMut() + 'static) -> Self {
        let bus = Self::new();
        *bus.initializer.borrow_mut() = Some(Box::new(init));
        bus
    }

    /// Registers a callback; returns the id to [`disconnect`](Self::disconnect) it.
    ///
    /// The callback returns `true` to mark the event handled, which stops
    /// the emission before older subscribers run. Bound methods need no
    /// special overload: capture the receiver in the closure.
    pub fn connect(&self, callback: impl FnMut(&T) -> bool + 'static) -> SubscriptionId {
        self.ensure_init();
        let mut slots = self.slots.borrow_mut();
        slots.next_id += 1;
        let id = slots.next_id;
        slots.by_id.insert(id, Rc::new(RefCell::new(callback)));
        SubscriptionId(id)
    }

    /// Removes a subscription; no-op if the id is unknown or already removed.
    pub fn disconnect(&self, id: SubscriptionId) {
        self.slots.borrow_mut().by_id.remove(&id.0);
    }

    /// Removes every subscription.
    pub fn disconnect_all(&self) {
        self.slots.borrow_mut().by_id.clear();
    }

    /// Returns the number of live subscriptions.
    pub fn len(&self) -> usize {
        self.slots.borrow().by_id.len()
    }

    /// Returns `true` if no subscriber is connected.
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().by_id.is_empty()
    }

    /// Publishes an event to all subscribers.
    ///
    /// Runs the lazy initializer first if it has not run yet, then invokes
    /// subscribers most-recent-first, stopping at the first that returns
    /// `true`. Emitting on an empty bus is a no-op.
    pub fn emit(&self, payload: &T) {
        self.ensure_init();

        // Snapshot-at-entry: ids and callbacks captured up front; the bus
        // borrow is released before any callback runs so subscribers can
        // freely mutate the subscription list.
        let snapshot: Vec<(u64, Callback<T>)> = self
            .slots
            .borrow()
            .by_id
            .iter()
            .rev()
            .map(|(id, cb)| (*id, Rc::clone(cb)))
            .collect();

        for (id, callback) in snapshot {
            if !self.slots.borrow().by_id.contains_key(&id) {
                // Disconnected by an earlier subscriber in this emission.
                continue;
            }
            let handled = (callback.borrow_mut())(payload);
            if handled {
                log::trace!("event handled by subscription {id}, short-circuiting");
                break;
            }
        }
    }

    fn ensure_init(&self) {
        if self.initialized.get() {
            return;
        }
        self.initialized.set(true);
        // Taken out of the cell before running, in case the initializer
        // connects to this same bus.
        if let Some(mut init) = self.initializer.borrow_mut().take() {
            init();
        }
    }
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.len())
            .field("initialized", &self.initialized.get())
            .finish()
    }
}
