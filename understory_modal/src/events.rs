// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle notifications: typed observer lists for the four modal events.
//!
//! ## Events
//!
//! - `pre_open`: before the modal is added to the display root.
//! - `open`: after the fade-in completes (or immediately when not animated).
//! - `pre_dismiss`: before the veto check.
//! - `dismiss`: the veto point. Each listener returns `true` to keep the modal
//!   open. Every listener runs, in registration order, and the results are
//!   OR-ed together.
//!
//! ## Minimal example
//!
//! ```
//! use understory_modal::events::ModalEvents;
//! let mut events = ModalEvents::default();
//! let keep_open = events.on_dismiss(|| true);
//! assert!(events.unbind(keep_open));
//! assert!(!events.unbind(keep_open));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

/// Handle returned when registering a listener; pass to [`ModalEvents::unbind`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

type Notify = Box<dyn FnMut()>;
type Veto = Box<dyn FnMut() -> bool>;

/// Observer lists for modal lifecycle events.
#[derive(Default)]
pub struct ModalEvents {
    next_id: u64,
    pre_open: Vec<(ListenerId, Notify)>,
    open: Vec<(ListenerId, Notify)>,
    pre_dismiss: Vec<(ListenerId, Notify)>,
    dismiss: Vec<(ListenerId, Veto)>,
}

impl core::fmt::Debug for ModalEvents {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModalEvents")
            .field("pre_open", &self.pre_open.len())
            .field("open", &self.open.len())
            .field("pre_dismiss", &self.pre_dismiss.len())
            .field("dismiss", &self.dismiss.len())
            .finish_non_exhaustive()
    }
}

impl ModalEvents {
    fn allocate(&mut self) -> ListenerId {
        self.next_id += 1;
        ListenerId(self.next_id)
    }

    /// Listen for `pre_open`. The modal is not in the display root yet.
    pub fn on_pre_open(&mut self, f: impl FnMut() + 'static) -> ListenerId {
        let id = self.allocate();
        self.pre_open.push((id, Box::new(f)));
        id
    }

    /// Listen for `open`.
    pub fn on_open(&mut self, f: impl FnMut() + 'static) -> ListenerId {
        let id = self.allocate();
        self.open.push((id, Box::new(f)));
        id
    }

    /// Listen for `pre_dismiss`.
    pub fn on_pre_dismiss(&mut self, f: impl FnMut() + 'static) -> ListenerId {
        let id = self.allocate();
        self.pre_dismiss.push((id, Box::new(f)));
        id
    }

    /// Listen for `dismiss`. Return `true` to veto a non-forced dismissal.
    pub fn on_dismiss(&mut self, f: impl FnMut() -> bool + 'static) -> ListenerId {
        let id = self.allocate();
        self.dismiss.push((id, Box::new(f)));
        id
    }

    /// Remove a listener. Returns `false` if it was already removed.
    pub fn unbind(&mut self, id: ListenerId) -> bool {
        fn remove<F: ?Sized>(list: &mut Vec<(ListenerId, Box<F>)>, id: ListenerId) -> bool {
            let before = list.len();
            list.retain(|(l, _)| *l != id);
            list.len() != before
        }
        remove(&mut self.pre_open, id)
            || remove(&mut self.open, id)
            || remove(&mut self.pre_dismiss, id)
            || remove(&mut self.dismiss, id)
    }

    /// Number of registered listeners across all events.
    pub fn len(&self) -> usize {
        self.pre_open.len() + self.open.len() + self.pre_dismiss.len() + self.dismiss.len()
    }

    /// Returns `true` if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn emit_pre_open(&mut self) {
        for (_, f) in &mut self.pre_open {
            f();
        }
    }

    pub(crate) fn emit_open(&mut self) {
        for (_, f) in &mut self.open {
            f();
        }
    }

    pub(crate) fn emit_pre_dismiss(&mut self) {
        for (_, f) in &mut self.pre_dismiss {
            f();
        }
    }

    /// Returns `true` if any listener vetoed.
    pub(crate) fn emit_dismiss(&mut self) -> bool {
        // No short-circuit: every listener observes the attempt.
        let mut veto = false;
        for (_, f) in &mut self.dismiss {
            veto |= f();
        }
        veto
    }
}
