// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_modal::{DismissOptions, ModalState, ModalView, OpenOptions, PointerEvent, Window};

type Shared = Rc<RefCell<Window<u32>>>;

fn window() -> Shared {
    Rc::new(RefCell::new(Window::new(Size::new(1280.0, 800.0))))
}

fn open_modal(win: &Shared) -> ModalView<Shared> {
    debug_assert!(win.borrow().widgets().is_empty());
    let mut m: ModalView<Shared> = ModalView::with_id(1);
    m.set_size(Size::new(400.0, 300.0));
    m.events_mut().on_dismiss(|| true);
    m.open_with(win.clone(), OpenOptions::default().without_animation());
    m
}

/// Points on a grid covering the whole window; roughly a tenth land inside the modal.
fn gen_points(n: usize) -> Vec<PointerEvent> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(PointerEvent::at(
                x as f64 * 1280.0 / n as f64,
                y as f64 * 800.0 / n as f64,
            ));
        }
    }
    out
}

fn close(mut m: ModalView<Shared>) {
    m.dismiss_with(DismissOptions::default().force().without_animation());
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures");
    let win = window();
    for &n in &[16usize, 64] {
        let points = gen_points(n);
        group.throughput(Throughput::Elements((n * n) as u64));
        // Every outside gesture asks to dismiss; the veto keeps the modal up.
        group.bench_function(format!("press_move_release_n{n}"), |b| {
            let mut m = open_modal(&win);
            b.iter(|| {
                for p in &points {
                    black_box(m.pointer_down(p));
                    black_box(m.pointer_move(p));
                    black_box(m.pointer_up(p));
                }
            });
            close(m);
        });
        group.bench_function(format!("hover_n{n}"), |b| {
            let mut m = open_modal(&win);
            b.iter(|| {
                for p in &points {
                    black_box(m.hover(p));
                }
            });
            close(m);
        });
    }
    group.finish();
}

fn bench_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle");
    let win = window();
    group.bench_function("open_dismiss_immediate", |b| {
        let mut m: ModalView<Shared> = ModalView::with_id(1);
        b.iter(|| {
            m.open_with(win.clone(), OpenOptions::default().without_animation());
            m.dismiss_with(DismissOptions::default().without_animation());
        });
    });
    group.bench_function("open_dismiss_animated_10_frames", |b| {
        b.iter_batched(
            || ModalView::<Shared>::with_id(1),
            |mut m| {
                m.open(win.clone());
                for _ in 0..10 {
                    m.advance(0.01);
                }
                m.dismiss();
                for _ in 0..10 {
                    m.advance(0.01);
                }
                debug_assert_eq!(m.state(), ModalState::Closed);
                black_box(m.is_open());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_gestures, bench_lifecycle);
criterion_main!(benches);
