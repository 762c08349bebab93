// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forwarding target for input the modal lets through to its children.

use crate::types::{Outcome, PointerEvent};

/// The modal's inner content, i.e. the children of its container.
///
/// The modal decides whether an event is forwarded; the content decides what
/// it means. Return values are informational: the modal consumes every
/// pointer event regardless.
///
/// All hooks default to ignoring the event.
pub trait Content {
    /// A press the modal chose to forward.
    fn pointer_down(&mut self, _event: &PointerEvent) -> Outcome {
        Outcome::Continue
    }

    /// A move the modal chose to forward.
    fn pointer_move(&mut self, _event: &PointerEvent) -> Outcome {
        Outcome::Continue
    }

    /// A release the modal chose to forward.
    fn pointer_up(&mut self, _event: &PointerEvent) -> Outcome {
        Outcome::Continue
    }

    /// A hover notification.
    fn hover(&mut self, _event: &PointerEvent) -> Outcome {
        Outcome::Continue
    }
}

/// No children.
impl Content for () {}
