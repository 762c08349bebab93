// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modal configuration and per-call options.

use alloc::string::String;

use crate::error::{Error, Result};
use crate::types::Rgba;

/// Default fade duration in seconds.
pub const DEFAULT_ANIMATION_DURATION: f64 = 0.1;

/// Default background image source.
pub const DEFAULT_BACKGROUND: &str = "atlas://data/images/defaulttheme/modalview-background";

/// Modal configuration.
///
/// Only [`auto_dismiss`](Self::auto_dismiss) and
/// [`animation_duration`](Self::animation_duration) affect behavior. The
/// remaining fields are carried for the renderer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModalConfig {
    /// Dismiss on escape and on a press/release entirely outside the bounds.
    pub auto_dismiss: bool,
    /// Fade duration in seconds for both open and dismiss.
    pub animation_duration: f64,
    /// Multiplier applied to the background image.
    pub background_color: Rgba,
    /// Color used to dim the root behind the modal; alpha follows the fade.
    pub overlay_color: Rgba,
    /// Background image source.
    pub background: String,
    /// Nine-slice border widths: bottom, right, top, left.
    pub border: [f64; 4],
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            auto_dismiss: true,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            background_color: Rgba::WHITE,
            overlay_color: Rgba::new(0.0, 0.0, 0.0, 0.7),
            background: String::from(DEFAULT_BACKGROUND),
            border: [16.0; 4],
        }
    }
}

impl ModalConfig {
    /// Set auto-dismiss behavior.
    pub fn auto_dismiss(mut self, auto_dismiss: bool) -> Self {
        self.auto_dismiss = auto_dismiss;
        self
    }

    /// Set the fade duration in seconds.
    pub fn animation_duration(mut self, seconds: f64) -> Self {
        self.animation_duration = seconds;
        self
    }

    /// Set the background color multiplier.
    pub fn background_color(mut self, color: Rgba) -> Self {
        self.background_color = color;
        self
    }

    /// Set the overlay (dimming) color.
    pub fn overlay_color(mut self, color: Rgba) -> Self {
        self.overlay_color = color;
        self
    }

    /// Set the background image source.
    pub fn background(mut self, source: impl Into<String>) -> Self {
        self.background = source.into();
        self
    }

    /// Set the border widths (bottom, right, top, left).
    pub fn border(mut self, border: [f64; 4]) -> Self {
        self.border = border;
        self
    }

    /// Check every value, returning the first one that is out of range.
    pub fn validate(&self) -> Result<()> {
        validate_duration(self.animation_duration)?;
        validate_color("background_color", self.background_color)?;
        validate_color("overlay_color", self.overlay_color)?;
        if let Some(&bad) = self.border.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(Error::InvalidBorder(bad));
        }
        Ok(())
    }
}

pub(crate) fn validate_duration(seconds: f64) -> Result<()> {
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDuration(seconds))
    }
}

fn validate_color(field: &'static str, color: Rgba) -> Result<()> {
    for (channel, value) in color.components() {
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::InvalidColor {
                field,
                channel,
                value,
            });
        }
    }
    Ok(())
}

/// Options for [`ModalView::open_with`](crate::modal::ModalView::open_with).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OpenOptions {
    /// Fade in over the configured duration; otherwise appear at full opacity.
    pub animation: bool,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self { animation: true }
    }
}

impl OpenOptions {
    /// Open at full opacity with no fade.
    pub fn without_animation(mut self) -> Self {
        self.animation = false;
        self
    }
}

/// Options for [`ModalView::dismiss_with`](crate::modal::ModalView::dismiss_with).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DismissOptions {
    /// Ignore vetoes from `dismiss` listeners. Listeners are still invoked.
    pub force: bool,
    /// Fade out before removal; otherwise remove immediately.
    pub animation: bool,
}

impl Default for DismissOptions {
    fn default() -> Self {
        Self {
            force: false,
            animation: true,
        }
    }
}

impl DismissOptions {
    /// Dismiss even if a listener vetoes.
    pub fn force(mut self) -> Self {
        self.force = true;
        self
    }

    /// Remove immediately with no fade.
    pub fn without_animation(mut self) -> Self {
        self.animation = false;
        self
    }
}
