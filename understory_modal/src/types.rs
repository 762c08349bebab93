// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the modal: outcomes, keys, pointer events, lifecycle state, and colors.
//!
//! ## Overview
//!
//! These types describe the contract between a host event loop and a
//! [`ModalView`](crate::modal::ModalView). They are also used by the collaborator
//! traits in [`root`](crate::root), [`content`](crate::content), and
//! [`animation`](crate::animation).

use kurbo::Point;

/// Result of delivering an input event.
///
/// Returned by every input handler on [`ModalView`](crate::modal::ModalView)
/// and by the [`Content`](crate::content::Content) forwarding hooks. A host
/// stops walking its widget stack once an event is consumed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Not handled; the host may offer the event to the next widget.
    Continue,
    /// Handled; the event must not reach anything beneath this widget.
    Consumed,
}

impl Outcome {
    /// Returns `true` for [`Outcome::Consumed`].
    #[inline]
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// A platform key code as delivered by the display root's keyboard notification.
///
/// Decoding of key events is a host concern; the modal only compares codes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct KeyCode(pub u32);

impl KeyCode {
    /// The escape key.
    pub const ESCAPE: Self = Self(27);
}

/// A pointer gesture phase or hover notification, in root coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position.
    pub position: Point,
}

impl PointerEvent {
    /// Create an event at `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
        }
    }
}

/// Where the gesture in progress started relative to the modal's bounds.
///
/// Held as `Option<TouchOrigin>`: `None` means no gesture is in progress,
/// which is distinct from a gesture that started outside.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TouchOrigin {
    /// The press landed within the modal's bounds.
    Inside,
    /// The press landed outside the modal's bounds.
    Outside,
}

/// Lifecycle state of a [`ModalView`](crate::modal::ModalView).
///
/// `Closed → Opening → Open → Dismissing → Closed`. Non-animated transitions
/// skip the intermediate states.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ModalState {
    /// Not attached to any display root.
    Closed,
    /// Attached; fade-in in flight, `open` not yet emitted.
    Opening,
    /// Attached and settled.
    Open,
    /// Still attached; fade-out in flight, removal pending.
    Dismissing,
}

bitflags::bitflags! {
    /// Display root notifications a widget can subscribe to.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Subscriptions: u8 {
        /// Root surface size changed.
        const RESIZE   = 0b0000_0001;
        /// Key pressed while the root has focus.
        const KEYBOARD = 0b0000_0010;
    }
}

/// Straight-alpha RGBA color with `f32` components in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a color from components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Return the color with its alpha multiplied by `factor` (clamped to `[0, 1]`).
    pub fn with_alpha_scaled(self, factor: f64) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Fade factors are in [0, 1]; f32 precision is plenty for alpha."
        )]
        let factor = factor.clamp(0.0, 1.0) as f32;
        Self {
            a: self.a * factor,
            ..self
        }
    }

    pub(crate) fn components(self) -> [(&'static str, f32); 4] {
        [("r", self.r), ("g", self.g), ("b", self.b), ("a", self.a)]
    }
}
