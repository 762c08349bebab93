// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display root contract and a reference window.
//!
//! ## Overview
//!
//! The display root is the shared top-level surface that owns the visible
//! widget stack. A modal holds a handle to it only while open: it registers
//! itself as the topmost widget, subscribes to resize and keyboard
//! notifications, and undoes all three on final removal.
//!
//! Handles are cheap and shared. [`DisplayRoot`] is implemented for
//! `Rc<RefCell<W>>` whenever `W` implements it, so a host typically keeps one
//! `Rc<RefCell<Window<_>>>` and clones it into each modal it opens.
//!
//! ## Host loop sketch
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//! use kurbo::Size;
//! use understory_modal::{ModalView, Window};
//!
//! let window = Rc::new(RefCell::new(Window::new(Size::new(800.0, 600.0))));
//! let mut modal: ModalView<Rc<RefCell<Window<u32>>>> = ModalView::with_id(1);
//! modal.open(window.clone());
//!
//! // The host owns notification delivery.
//! let notify = window.borrow_mut().resize(Size::new(1024.0, 768.0));
//! for id in notify {
//!     if id == modal.id() {
//!         modal.handle_resize();
//!     }
//! }
//! assert_eq!(modal.bounds().center(), kurbo::Point::new(512.0, 384.0));
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{Point, Size};

use crate::types::Subscriptions;

/// The shared top-level surface a modal attaches to.
pub trait DisplayRoot {
    /// Key the root uses to identify widgets in its stack.
    type WidgetId: Copy + Eq + core::fmt::Debug;

    /// Push `widget` on top of the stack so it receives input first.
    fn add_widget(&mut self, widget: Self::WidgetId);

    /// Remove `widget` from the stack. Absent widgets are ignored.
    fn remove_widget(&mut self, widget: Self::WidgetId);

    /// Deliver the notifications in `topics` to `widget` from now on.
    fn subscribe(&mut self, widget: Self::WidgetId, topics: Subscriptions);

    /// Stop delivering the notifications in `topics` to `widget`.
    fn unsubscribe(&mut self, widget: Self::WidgetId, topics: Subscriptions);

    /// Current surface size.
    fn size(&self) -> Size;

    /// Current center of the surface.
    fn center(&self) -> Point {
        Point::ORIGIN + self.size().to_vec2() / 2.0
    }
}

impl<W: DisplayRoot> DisplayRoot for Rc<RefCell<W>> {
    type WidgetId = W::WidgetId;

    fn add_widget(&mut self, widget: Self::WidgetId) {
        self.borrow_mut().add_widget(widget);
    }

    fn remove_widget(&mut self, widget: Self::WidgetId) {
        self.borrow_mut().remove_widget(widget);
    }

    fn subscribe(&mut self, widget: Self::WidgetId, topics: Subscriptions) {
        self.borrow_mut().subscribe(widget, topics);
    }

    fn unsubscribe(&mut self, widget: Self::WidgetId, topics: Subscriptions) {
        self.borrow_mut().unsubscribe(widget, topics);
    }

    fn size(&self) -> Size {
        self.borrow().size()
    }

    fn center(&self) -> Point {
        self.borrow().center()
    }
}

/// Reference display root: a widget stack plus per-widget subscriptions.
///
/// Stack order is insertion order; the last widget is topmost. Subscription
/// order is tracked so keyboard delivery can favor the most recent subscriber.
#[derive(Clone, Debug)]
pub struct Window<K> {
    size: Size,
    widgets: Vec<K>,
    // Insertion order; a widget appears at most once.
    subscriptions: Vec<(K, Subscriptions)>,
}

impl<K: Copy + Eq + core::fmt::Debug> Window<K> {
    /// Create an empty window of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            widgets: Vec::new(),
            subscriptions: Vec::new(),
        }
    }

    /// Widgets bottom to top.
    pub fn widgets(&self) -> &[K] {
        &self.widgets
    }

    /// The widget that receives input first, if any.
    pub fn topmost(&self) -> Option<K> {
        self.widgets.last().copied()
    }

    /// Returns `true` if `widget` is in the stack.
    pub fn contains(&self, widget: K) -> bool {
        self.widgets.contains(&widget)
    }

    /// Notifications currently delivered to `widget`.
    pub fn subscriptions_of(&self, widget: K) -> Subscriptions {
        self.subscriptions
            .iter()
            .find(|(k, _)| *k == widget)
            .map(|(_, s)| *s)
            .unwrap_or_default()
    }

    /// Returns `true` if no widget holds any subscription.
    pub fn has_no_subscribers(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Resize the surface and return the widgets to notify, in subscription order.
    pub fn resize(&mut self, size: Size) -> Vec<K> {
        self.size = size;
        self.subscribers(Subscriptions::RESIZE).collect()
    }

    /// Keyboard subscribers, most recent first; stop at the first that consumes.
    pub fn keyboard_order(&self) -> Vec<K> {
        let mut out: Vec<K> = self.subscribers(Subscriptions::KEYBOARD).collect();
        out.reverse();
        out
    }

    fn subscribers(&self, topic: Subscriptions) -> impl Iterator<Item = K> + '_ {
        self.subscriptions
            .iter()
            .filter(move |(_, s)| s.contains(topic))
            .map(|(k, _)| *k)
    }
}

impl<K: Copy + Eq + core::fmt::Debug> DisplayRoot for Window<K> {
    type WidgetId = K;

    fn add_widget(&mut self, widget: K) {
        // Re-adding moves the widget to the top.
        self.widgets.retain(|w| *w != widget);
        self.widgets.push(widget);
    }

    fn remove_widget(&mut self, widget: K) {
        self.widgets.retain(|w| *w != widget);
    }

    fn subscribe(&mut self, widget: K, topics: Subscriptions) {
        match self.subscriptions.iter_mut().find(|(k, _)| *k == widget) {
            Some((_, s)) => *s |= topics,
            None => self.subscriptions.push((widget, topics)),
        }
    }

    fn unsubscribe(&mut self, widget: K, topics: Subscriptions) {
        for (k, s) in &mut self.subscriptions {
            if *k == widget {
                s.remove(topics);
            }
        }
        self.subscriptions.retain(|(_, s)| !s.is_empty());
    }

    fn size(&self) -> Size {
        self.size
    }
}
