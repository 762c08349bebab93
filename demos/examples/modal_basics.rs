// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modal basics.
//!
//! Opens a modal with a fade, lets a listener veto the first dismissal,
//! then forces the second and prints each lifecycle notification.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example modal_basics`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::Size;
use tracing_subscriber::EnvFilter;
use understory_modal::{DismissOptions, ModalState, ModalView, Window};

type Shared = Rc<RefCell<Window<u32>>>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let window: Shared = Rc::new(RefCell::new(Window::new(Size::new(800.0, 600.0))));
    let mut modal: ModalView<Shared> = ModalView::with_id(1);
    modal.set_size(Size::new(400.0, 400.0));

    let refusals = Rc::new(Cell::new(1_u32));
    let events = modal.events_mut();
    events.on_pre_open(|| println!("pre_open"));
    events.on_open(|| println!("open"));
    events.on_pre_dismiss(|| println!("pre_dismiss"));
    let left = refusals.clone();
    events.on_dismiss(move || {
        let veto = left.get() > 0;
        left.set(left.get().saturating_sub(1));
        println!("dismiss (veto: {veto})");
        veto
    });

    modal.open(window.clone());
    while modal.state() == ModalState::Opening {
        modal.advance(1.0 / 60.0);
        println!("  fade {:.2}", modal.fade_alpha());
    }
    println!("== Open ==\n  bounds {:?}", modal.bounds());

    modal.dismiss();
    assert_eq!(modal.state(), ModalState::Open);

    modal.dismiss_with(DismissOptions::default().force());
    while modal.state() == ModalState::Dismissing {
        modal.advance(1.0 / 60.0);
        println!("  fade {:.2}", modal.fade_alpha());
    }
    println!("== Closed ==\n  window widgets {:?}", window.borrow().widgets());
    assert!(window.borrow().widgets().is_empty());
}
