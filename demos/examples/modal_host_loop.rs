// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A host loop around a modal.
//!
//! The window holds a background widget and, once opened, the modal on top.
//! Pointer events go to the topmost widget first; resize and keyboard
//! notifications go to subscribers. Shows that a drag started inside the
//! modal survives leaving its bounds, and that a click outside dismisses.
//!
//! Run:
//! - `cargo run -p understory_demos --example modal_host_loop`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Size;
use understory_modal::{
    Content, DisplayRoot as _, KeyCode, LinearAnimator, ModalState, ModalView, OpenOptions,
    Outcome, PointerEvent, Window,
};

type Shared = Rc<RefCell<Window<u32>>>;

const BACKGROUND: u32 = 1;
const MODAL: u32 = 2;

/// Content that prints what reaches it.
struct Logger;

impl Content for Logger {
    fn pointer_down(&mut self, e: &PointerEvent) -> Outcome {
        println!("  content: down at {:?}", e.position);
        Outcome::Consumed
    }
    fn pointer_move(&mut self, e: &PointerEvent) -> Outcome {
        println!("  content: move at {:?}", e.position);
        Outcome::Consumed
    }
    fn pointer_up(&mut self, e: &PointerEvent) -> Outcome {
        println!("  content: up at {:?}", e.position);
        Outcome::Consumed
    }
}

enum Input {
    Down(f64, f64),
    Move(f64, f64),
    Up(f64, f64),
}

/// Deliver to the topmost widget first, stopping once consumed.
fn route(window: &Shared, modal: &mut ModalView<Shared, LinearAnimator, Logger>, input: &Input) {
    let stack: Vec<u32> = window.borrow().widgets().iter().rev().copied().collect();
    for id in stack {
        let outcome = match (id, input) {
            (MODAL, Input::Down(x, y)) => modal.pointer_down(&PointerEvent::at(*x, *y)),
            (MODAL, Input::Move(x, y)) => modal.pointer_move(&PointerEvent::at(*x, *y)),
            (MODAL, Input::Up(x, y)) => modal.pointer_up(&PointerEvent::at(*x, *y)),
            _ => {
                println!("  background widget received input");
                Outcome::Consumed
            }
        };
        if outcome.is_consumed() {
            break;
        }
    }
}

fn main() {
    let window: Shared = Rc::new(RefCell::new(Window::new(Size::new(800.0, 600.0))));
    window.borrow_mut().add_widget(BACKGROUND);

    let mut modal = ModalView::new(MODAL, LinearAnimator::new(), Logger);
    modal.set_size(Size::new(300.0, 200.0));
    modal.open_with(window.clone(), OpenOptions::default().without_animation());
    println!("== Open ==\n  stack {:?}", window.borrow().widgets());

    println!("== Drag from inside to outside ==");
    for input in [Input::Down(400.0, 300.0), Input::Move(20.0, 20.0), Input::Up(20.0, 20.0)] {
        route(&window, &mut modal, &input);
    }
    assert_eq!(modal.state(), ModalState::Open);

    println!("== Resize ==");
    let notify = window.borrow_mut().resize(Size::new(1200.0, 900.0));
    for id in notify {
        if id == MODAL {
            modal.handle_resize();
        }
    }
    println!("  modal bounds {:?}", modal.bounds());

    println!("== Unrelated key ==");
    let keyboard = window.borrow().keyboard_order();
    for id in keyboard {
        if id == MODAL && modal.handle_key(KeyCode(13)).is_consumed() {
            break;
        }
    }

    println!("== Click outside ==");
    for input in [Input::Down(10.0, 10.0), Input::Up(10.0, 10.0)] {
        route(&window, &mut modal, &input);
    }
    while modal.state() == ModalState::Dismissing {
        modal.advance(1.0 / 60.0);
    }
    println!("== Closed ==\n  stack {:?}", window.borrow().widgets());
    assert_eq!(window.borrow().widgets(), &[BACKGROUND]);

    println!("== Background reachable again ==");
    route(&window, &mut modal, &Input::Down(10.0, 10.0));
}
