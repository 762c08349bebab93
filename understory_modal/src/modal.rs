// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The modal controller.
//!
//! ## Lifecycle
//!
//! `Closed → Opening → Open → Dismissing → Closed`.
//!
//! - [`ModalView::open`] attaches to a display root, emits `pre_open` before
//!   registering, and emits `open` once the fade-in completes.
//! - [`ModalView::dismiss`] emits `pre_dismiss`, then `dismiss`, where
//!   listeners may veto. Unless vetoed (or forced), it fades out and then
//!   detaches, undoing every registration made by `open`.
//! - Both are no-ops outside their valid source state. In particular `open`
//!   does nothing while a fade-out is still running.
//!
//! ## Input
//!
//! While attached the modal is topmost, so the host offers it every pointer
//! event first. It consumes all of them. A press/release pair entirely
//! outside the bounds dismisses (when auto-dismiss is on); a drag that began
//! inside stays with the content even if it ends outside.
//!
//! ## Animation
//!
//! At most one fade is live. Starting a fade stops the previous one, and
//! frames for any other id are dropped, so a superseded continuation never
//! runs.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::animation::{AnimationId, Animator, Frame, LinearAnimator};
use crate::config::{DismissOptions, ModalConfig, OpenOptions, validate_duration};
use crate::content::Content;
use crate::error::Result;
use crate::events::ModalEvents;
use crate::root::DisplayRoot;
use crate::types::{KeyCode, ModalState, Outcome, PointerEvent, Rgba, Subscriptions, TouchOrigin};

/// Notifications a modal takes from its root while open.
const ROOT_TOPICS: Subscriptions = Subscriptions::RESIZE.union(Subscriptions::KEYBOARD);

/// Default bounds for a freshly created modal.
const DEFAULT_BOUNDS: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum FadeGoal {
    /// Emit `open` when done.
    Open,
    /// Detach from the root when done.
    Remove,
}

#[derive(Copy, Clone, Debug)]
struct ActiveFade {
    id: AnimationId,
    goal: FadeGoal,
}

/// A modal overlay attached on demand to a shared [`DisplayRoot`].
///
/// ## Usage
///
/// - Construct with [`ModalView::new`] (explicit animator and content) or
///   [`ModalView::with_id`] (linear fades, no content).
/// - Register listeners through [`ModalView::events_mut`].
/// - Call [`ModalView::open`] with a root handle; drive fades with
///   [`ModalView::advance`]; route root notifications to
///   [`ModalView::handle_resize`] and [`ModalView::handle_key`], and pointer
///   input to the `pointer_*` and [`hover`](ModalView::hover) handlers.
///
/// The modal never destroys itself. After it closes it can be opened again.
pub struct ModalView<R: DisplayRoot, A: Animator = LinearAnimator, C: Content = ()> {
    id: R::WidgetId,
    config: ModalConfig,
    bounds: Rect,
    content: C,
    animator: A,
    events: ModalEvents,
    // `Some` exactly while open.
    root: Option<R>,
    active: Option<ActiveFade>,
    fade_alpha: f64,
    touch_origin: Option<TouchOrigin>,
}

impl<R: DisplayRoot, A: Animator, C: Content> core::fmt::Debug for ModalView<R, A, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModalView")
            .field("id", &self.id)
            .field("state", &self.state())
            .field("bounds", &self.bounds)
            .field("fade_alpha", &self.fade_alpha)
            .field("touch_origin", &self.touch_origin)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl<R: DisplayRoot> ModalView<R> {
    /// Create an empty modal with linear fades and the default configuration.
    pub fn with_id(id: R::WidgetId) -> Self {
        Self::new(id, LinearAnimator::new(), ())
    }
}

impl<R: DisplayRoot, A: Animator, C: Content> ModalView<R, A, C> {
    /// Create a closed modal registered under `id` once opened.
    pub fn new(id: R::WidgetId, animator: A, content: C) -> Self {
        Self {
            id,
            config: ModalConfig::default(),
            bounds: DEFAULT_BOUNDS,
            content,
            animator,
            events: ModalEvents::default(),
            root: None,
            active: None,
            fade_alpha: 0.0,
            touch_origin: None,
        }
    }

    /// Replace the configuration, rejecting out-of-range values.
    pub fn with_config(mut self, config: ModalConfig) -> Result<Self> {
        self.set_config(config)?;
        Ok(self)
    }

    /// Key this modal is registered under in the display root.
    pub fn id(&self) -> R::WidgetId {
        self.id
    }

    /// Current configuration.
    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    /// Replace the configuration. On error the previous one is kept.
    pub fn set_config(&mut self, config: ModalConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Whether outside clicks and escape dismiss the modal.
    pub fn auto_dismiss(&self) -> bool {
        self.config.auto_dismiss
    }

    /// Enable or disable auto-dismiss.
    pub fn set_auto_dismiss(&mut self, auto_dismiss: bool) {
        self.config.auto_dismiss = auto_dismiss;
    }

    /// Fade duration in seconds.
    pub fn animation_duration(&self) -> f64 {
        self.config.animation_duration
    }

    /// Set the fade duration. Applies to fades started afterwards.
    pub fn set_animation_duration(&mut self, seconds: f64) -> Result<()> {
        validate_duration(seconds)?;
        self.config.animation_duration = seconds;
        Ok(())
    }

    /// Lifecycle listeners.
    pub fn events_mut(&mut self) -> &mut ModalEvents {
        &mut self.events
    }

    /// The content receiving forwarded input.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Mutable access to the content.
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// The animator driving fades.
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// `true` from the start of `open` until final removal.
    pub fn is_open(&self) -> bool {
        self.root.is_some()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ModalState {
        match (self.is_open(), self.active.map(|a| a.goal)) {
            (false, _) => ModalState::Closed,
            (true, Some(FadeGoal::Open)) => ModalState::Opening,
            (true, Some(FadeGoal::Remove)) => ModalState::Dismissing,
            (true, None) => ModalState::Open,
        }
    }

    /// The attached display root, if open.
    pub fn root(&self) -> Option<&R> {
        self.root.as_ref()
    }

    /// Overlay opacity factor in `[0, 1]`.
    pub fn fade_alpha(&self) -> f64 {
        self.fade_alpha
    }

    /// Where the gesture in progress started, if one is in progress.
    pub fn touch_origin(&self) -> Option<TouchOrigin> {
        self.touch_origin
    }

    /// Own geometry in root coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Set own geometry. While open, the modal is re-centered on the root.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.align_center();
    }

    /// Resize, keeping the origin. While open, the modal is re-centered.
    pub fn set_size(&mut self, size: Size) {
        self.bounds = self.bounds.with_size(size);
        self.align_center();
    }

    /// Move the center. While open, the root center wins.
    pub fn set_center(&mut self, center: Point) {
        self.bounds = Rect::from_center_size(center, self.bounds.size());
        self.align_center();
    }

    /// Point containment against own bounds, edges inclusive.
    pub fn contains_point(&self, p: Point) -> bool {
        let r = self.bounds;
        p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
    }

    /// Overlay color with alpha following the fade.
    pub fn overlay_tint(&self) -> Rgba {
        self.config.overlay_color.with_alpha_scaled(self.fade_alpha)
    }

    /// Area dimmed by the overlay: the whole root while open, empty otherwise.
    pub fn overlay_rect(&self) -> Rect {
        match &self.root {
            Some(root) => Rect::from_origin_size(Point::ORIGIN, root.size()),
            None => Rect::ZERO,
        }
    }

    /// Open with a fade-in.
    pub fn open(&mut self, root: R) {
        self.open_with(root, OpenOptions::default());
    }

    /// Attach to `root` and show the modal. Does nothing if already open.
    pub fn open_with(&mut self, root: R, options: OpenOptions) {
        if self.is_open() {
            tracing::trace!(id = ?self.id, "open ignored: already open");
            return;
        }
        self.clear_animation();
        self.root = Some(root);
        tracing::debug!(id = ?self.id, animation = options.animation, "modal opening");
        self.events.emit_pre_open();
        if let Some(root) = self.root.as_mut() {
            root.add_widget(self.id);
            root.subscribe(self.id, ROOT_TOPICS);
        }
        self.align_center();
        if options.animation {
            self.start_fade(1.0, FadeGoal::Open);
        } else {
            self.fade_alpha = 1.0;
            self.events.emit_open();
        }
    }

    /// Dismiss with a fade-out, honoring vetoes.
    pub fn dismiss(&mut self) {
        self.dismiss_with(DismissOptions::default());
    }

    /// Close the modal. Does nothing if closed.
    ///
    /// `dismiss` listeners always run; their veto is ignored when
    /// [`DismissOptions::force`] is set.
    pub fn dismiss_with(&mut self, options: DismissOptions) {
        if !self.is_open() {
            tracing::trace!(id = ?self.id, "dismiss ignored: not open");
            return;
        }
        self.clear_animation();
        self.events.emit_pre_dismiss();
        if self.events.emit_dismiss() && !options.force {
            tracing::debug!(id = ?self.id, "dismiss vetoed by listener");
            return;
        }
        tracing::debug!(
            id = ?self.id,
            force = options.force,
            animation = options.animation,
            "modal dismissing"
        );
        if options.animation {
            self.start_fade(0.0, FadeGoal::Remove);
        } else {
            self.detach();
        }
    }

    /// Advance the owned animator by `dt` seconds and apply its frames.
    pub fn advance(&mut self, dt: f64) {
        let mut frames = Vec::new();
        self.animator.advance(dt, &mut frames);
        for frame in frames {
            self.apply_frame(frame);
        }
    }

    /// Apply one animation frame. Frames for anything but the live fade are ignored.
    pub fn apply_frame(&mut self, frame: Frame) {
        let Some(active) = self.active else {
            tracing::trace!(id = ?self.id, anim = ?frame.id, "frame ignored: no live fade");
            return;
        };
        if active.id != frame.id {
            tracing::trace!(id = ?self.id, anim = ?frame.id, "frame ignored: stale fade");
            return;
        }
        self.fade_alpha = frame.value;
        if frame.finished {
            self.active = None;
            match active.goal {
                FadeGoal::Open => self.events.emit_open(),
                FadeGoal::Remove => self.detach(),
            }
        }
    }

    /// Root resize notification.
    pub fn handle_resize(&mut self) {
        self.align_center();
    }

    /// Center on the root. Does nothing while closed.
    pub fn align_center(&mut self) {
        if let Some(root) = &self.root {
            self.bounds = Rect::from_center_size(root.center(), self.bounds.size());
        }
    }

    /// Root keyboard notification. Escape dismisses when auto-dismiss is on.
    pub fn handle_key(&mut self, key: KeyCode) -> Outcome {
        if key == KeyCode::ESCAPE && self.config.auto_dismiss {
            tracing::debug!(id = ?self.id, "escape pressed");
            self.dismiss();
            Outcome::Consumed
        } else {
            Outcome::Continue
        }
    }

    /// Press: remember where the gesture started; forward only if it counts.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> Outcome {
        let inside = self.contains_point(event.position);
        self.touch_origin = Some(if inside {
            TouchOrigin::Inside
        } else {
            TouchOrigin::Outside
        });
        if !self.config.auto_dismiss || inside {
            let _ = self.content.pointer_down(event);
        }
        Outcome::Consumed
    }

    /// Move: forward only for gestures that started inside (or without auto-dismiss).
    pub fn pointer_move(&mut self, event: &PointerEvent) -> Outcome {
        if !self.config.auto_dismiss || self.touch_origin == Some(TouchOrigin::Inside) {
            let _ = self.content.pointer_move(event);
        }
        Outcome::Consumed
    }

    /// Release: a gesture that started outside dismisses; anything else is forwarded.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> Outcome {
        // An unset origin (release without a press) is forwarded, not a click-away.
        if self.config.auto_dismiss && self.touch_origin == Some(TouchOrigin::Outside) {
            self.dismiss();
        } else {
            let _ = self.content.pointer_up(event);
        }
        self.touch_origin = None;
        Outcome::Consumed
    }

    /// Hover: content may react, nothing beneath the modal sees it.
    pub fn hover(&mut self, event: &PointerEvent) -> Outcome {
        let _ = self.content.hover(event);
        Outcome::Consumed
    }

    fn clear_animation(&mut self) {
        if let Some(active) = self.active.take() {
            self.animator.stop(active.id);
        }
    }

    fn start_fade(&mut self, to: f64, goal: FadeGoal) {
        self.clear_animation();
        let id = self
            .animator
            .start(self.fade_alpha, to, self.config.animation_duration);
        self.active = Some(ActiveFade { id, goal });
    }

    fn detach(&mut self) {
        let Some(mut root) = self.root.take() else {
            return;
        };
        root.remove_widget(self.id);
        root.unsubscribe(self.id, ROOT_TOPICS);
        tracing::debug!(id = ?self.id, "modal removed");
    }
}
