use crate::anchor::Anchor;
use crate::errors::FloatError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatOptions {
    pub anchor: Anchor,
    /// Largest displacement, per axis and in points, that still counts as a tap.
    pub click_threshold: f32,
    /// Seconds the panel takes to glide to its resting place after release.
    pub settle_duration: f32,
    /// Vertical inset of the home position from the anchored screen edge.
    pub edge_margin: f32,
}

impl Default for FloatOptions {
    fn default() -> Self {
        Self {
            anchor: Anchor::default(),
            click_threshold: FloatOptions::CLICK_THRESHOLD,
            settle_duration: FloatOptions::SETTLE_DURATION,
            edge_margin: FloatOptions::EDGE_MARGIN,
        }
    }
}

impl FloatOptions {
    pub const CLICK_THRESHOLD: f32 = 10.0;
    pub const SETTLE_DURATION: f32 = 0.1;
    pub const EDGE_MARGIN: f32 = 16.0;

    #[inline]
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[inline]
    pub fn click_threshold(mut self, threshold: f32) -> Self {
        self.click_threshold = threshold;
        self
    }

    #[inline]
    pub fn settle_duration(mut self, seconds: f32) -> Self {
        self.settle_duration = seconds;
        self
    }

    #[inline]
    pub fn edge_margin(mut self, margin: f32) -> Self {
        self.edge_margin = margin;
        self
    }

    pub fn validate(&self) -> Result<(), FloatError> {
        if !is_non_negative(self.click_threshold) {
            return Err(FloatError::ClickThreshold(self.click_threshold));
        }
        if !is_non_negative(self.settle_duration) {
            return Err(FloatError::SettleDuration(self.settle_duration));
        }
        if !is_non_negative(self.edge_margin) {
            return Err(FloatError::EdgeMargin(self.edge_margin));
        }
        Ok(())
    }
}

fn is_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
