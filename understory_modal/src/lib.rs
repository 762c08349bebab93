// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Modal: a `no_std` modal overlay controller.
//!
//! ## Overview
//!
//! A modal is a widget that places itself on top of a shared display root,
//! dims everything beneath it, and captures input until it is dismissed.
//! This crate implements the part of that which is easy to get wrong: the
//! open/dismiss lifecycle, fade sequencing, and the input capture rules.
//! It does not draw anything and it does not lay anything out.
//!
//! ## Collaborators
//!
//! The controller, [`ModalView`], talks to its environment through three narrow seams:
//! - [`DisplayRoot`](crate::root::DisplayRoot): the shared top-level surface. The modal
//!   registers itself there while open and subscribes to resize and keyboard notifications.
//!   [`Window`](crate::root::Window) is a reference implementation.
//! - [`Animator`](crate::animation::Animator): moves the fade value over time and reports
//!   [`Frame`](crate::animation::Frame)s. [`LinearAnimator`](crate::animation::LinearAnimator)
//!   is a reference implementation.
//! - [`Content`](crate::content::Content): receives the pointer events the modal lets through.
//!
//! Lifecycle listeners live in [`ModalEvents`](crate::events::ModalEvents). A `dismiss`
//! listener can veto a dismissal by returning `true`.
//!
//! ## Lifecycle
//!
//! `Closed → Opening → Open → Dismissing → Closed`, reported by
//! [`ModalView::state`](crate::modal::ModalView::state). [`open`](crate::modal::ModalView::open)
//! and [`dismiss`](crate::modal::ModalView::dismiss) are no-ops outside their valid source state.
//!
//! ## Input capture
//!
//! Every pointer event is consumed. With auto-dismiss on, a press and release
//! that both land outside the modal dismiss it, and a drag that starts inside
//! keeps going to the content wherever it ends. Escape dismisses as well.
//!
//! ## Example
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//! use kurbo::Size;
//! use understory_modal::{ModalState, ModalView, PointerEvent, Window};
//!
//! let window = Rc::new(RefCell::new(Window::new(Size::new(800.0, 600.0))));
//! let mut modal: ModalView<Rc<RefCell<Window<u32>>>> = ModalView::with_id(1);
//! modal.set_size(Size::new(400.0, 300.0));
//!
//! modal.open(window.clone());
//! assert_eq!(modal.state(), ModalState::Opening);
//! modal.advance(0.1);
//! assert_eq!(modal.state(), ModalState::Open);
//! assert_eq!(window.borrow().topmost(), Some(1));
//!
//! // Click away: press and release outside the modal's bounds.
//! modal.pointer_down(&PointerEvent::at(10.0, 10.0));
//! modal.pointer_up(&PointerEvent::at(10.0, 10.0));
//! modal.advance(0.1);
//! assert_eq!(modal.state(), ModalState::Closed);
//! assert!(window.borrow().widgets().is_empty());
//! ```
//!
//! ## Logging
//!
//! Lifecycle transitions are reported through [`tracing`] at `debug` level and
//! ignored calls at `trace` level. The crate installs no subscriber.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `serde`: derive `Serialize`/`Deserialize` for [`ModalConfig`](crate::config::ModalConfig)
//!   and [`Rgba`](crate::types::Rgba).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod animation;
pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod modal;
pub mod root;
pub mod types;

pub use animation::{AnimationId, Animator, Frame, LinearAnimator};
pub use config::{DismissOptions, ModalConfig, OpenOptions};
pub use content::Content;
pub use error::{Error, Result};
pub use events::{ListenerId, ModalEvents};
pub use modal::ModalView;
pub use root::{DisplayRoot, Window};
pub use types::{KeyCode, ModalState, Outcome, PointerEvent, Rgba, Subscriptions, TouchOrigin};
