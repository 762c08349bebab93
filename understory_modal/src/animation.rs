// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation service contract and a linear reference implementation.
//!
//! ## Overview
//!
//! The modal does not interpolate anything itself. It asks an [`Animator`] to
//! move its fade value from the current level to a target over a duration, and
//! keeps the returned [`AnimationId`] as its only live handle. Progress comes
//! back as [`Frame`]s. A frame is applied only if its id matches the handle
//! the modal currently holds, so stopping a handle and starting a new one is
//! enough to make late frames from the old one harmless.
//!
//! ## Driving
//!
//! - Owned clock: call [`ModalView::advance`](crate::modal::ModalView::advance)
//!   each frame; it advances the modal's animator and applies the frames.
//! - Shared clock: advance the animator elsewhere and feed each frame to
//!   [`ModalView::apply_frame`](crate::modal::ModalView::apply_frame).

use alloc::vec::Vec;

/// Identifier of one running animation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AnimationId(pub u64);

/// One step of progress for a running animation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// Animation this frame belongs to.
    pub id: AnimationId,
    /// Interpolated value.
    pub value: f64,
    /// Set on the last frame; the animation has reached its target.
    pub finished: bool,
}

/// Time-based scalar interpolation service.
pub trait Animator {
    /// Start moving a value from `from` to `to` over `duration` seconds.
    fn start(&mut self, from: f64, to: f64, duration: f64) -> AnimationId;

    /// Stop an animation. No further frames are reported for `id`.
    /// Stopping an unknown or finished id does nothing.
    fn stop(&mut self, id: AnimationId);

    /// Advance time by `dt` seconds, appending one frame per running animation.
    /// Finished animations report `finished = true` once and are then dropped.
    fn advance(&mut self, dt: f64, frames: &mut Vec<Frame>);
}

#[derive(Clone, Debug)]
struct Track {
    id: AnimationId,
    from: f64,
    to: f64,
    duration: f64,
    elapsed: f64,
}

/// Relative slack when comparing elapsed time against the duration, so that
/// `n` steps of `duration / n` finish on step `n` despite rounding.
const FINISH_TOLERANCE: f64 = 1e-9;

impl Track {
    fn is_done(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration * (1.0 - FINISH_TOLERANCE)
    }
}

/// Linear interpolation clock.
///
/// A non-positive duration finishes on the next [`advance`](Animator::advance).
#[derive(Clone, Debug, Default)]
pub struct LinearAnimator {
    next_id: u64,
    tracks: Vec<Track>,
}

impl LinearAnimator {
    /// Create an idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of animations still running.
    pub fn running(&self) -> usize {
        self.tracks.len()
    }
}

impl Animator for LinearAnimator {
    fn start(&mut self, from: f64, to: f64, duration: f64) -> AnimationId {
        self.next_id += 1;
        let id = AnimationId(self.next_id);
        self.tracks.push(Track {
            id,
            from,
            to,
            duration,
            elapsed: 0.0,
        });
        id
    }

    fn stop(&mut self, id: AnimationId) {
        self.tracks.retain(|t| t.id != id);
    }

    fn advance(&mut self, dt: f64, frames: &mut Vec<Frame>) {
        for t in &mut self.tracks {
            t.elapsed += dt.max(0.0);
            let finished = t.is_done();
            let value = if finished {
                t.to
            } else {
                t.from + (t.to - t.from) * (t.elapsed / t.duration)
            };
            frames.push(Frame {
                id: t.id,
                value,
                finished,
            });
        }
        self.tracks.retain(|t| !t.is_done());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(a: &mut LinearAnimator, dt: f64) -> Vec<Frame> {
        let mut out = Vec::new();
        a.advance(dt, &mut out);
        out
    }

    #[test]
    fn interpolates_linearly_and_finishes_once() {
        let mut a = LinearAnimator::new();
        let id = a.start(0.0, 1.0, 0.1);

        let f = step(&mut a, 0.05);
        assert_eq!(f.len(), 1);
        assert_eq!(f[0].id, id);
        assert!((f[0].value - 0.5).abs() < 1e-9);
        assert!(!f[0].finished);

        let f = step(&mut a, 0.05);
        assert_eq!(f[0].value, 1.0);
        assert!(f[0].finished);

        assert!(step(&mut a, 0.05).is_empty());
        assert_eq!(a.running(), 0);
    }

    #[test]
    fn overshoot_lands_exactly_on_target() {
        let mut a = LinearAnimator::new();
        a.start(0.8, 0.0, 0.1);
        let f = step(&mut a, 1.0);
        assert_eq!(f[0].value, 0.0);
        assert!(f[0].finished);
    }

    #[test]
    fn fixed_steps_finish_on_the_last_step() {
        let mut a = LinearAnimator::new();
        let id = a.start(0.0, 1.0, 0.1);
        // Ten steps of 0.01 sum to slightly less than 0.1.
        for _ in 0..9 {
            let f = step(&mut a, 0.01);
            assert!(!f[0].finished);
        }
        let f = step(&mut a, 0.01);
        assert_eq!(f[0].id, id);
        assert!(f[0].finished);
        assert_eq!(f[0].value, 1.0);
        assert_eq!(a.running(), 0);
    }

    #[test]
    fn zero_duration_finishes_on_next_advance() {
        let mut a = LinearAnimator::new();
        a.start(0.0, 1.0, 0.0);
        let f = step(&mut a, 0.0);
        assert_eq!(f.len(), 1);
        assert!(f[0].finished);
        assert_eq!(f[0].value, 1.0);
        assert_eq!(a.running(), 0);
    }

    #[test]
    fn stopped_animation_reports_nothing() {
        let mut a = LinearAnimator::new();
        let old = a.start(0.0, 1.0, 0.1);
        let new = a.start(0.0, 0.0, 0.1);
        a.stop(old);
        let f = step(&mut a, 0.2);
        assert_eq!(f.len(), 1);
        assert_eq!(f[0].id, new);
        // Stopping again is harmless.
        a.stop(old);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut a = LinearAnimator::new();
        let first = a.start(0.0, 1.0, 0.0);
        let _ = step(&mut a, 0.0);
        let second = a.start(0.0, 1.0, 0.0);
        assert_ne!(first, second);
    }
}
