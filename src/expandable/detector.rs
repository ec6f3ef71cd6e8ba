//! Overflow detection.
//!
//! The detector compares the natural height of a [`ContentNode`] against the
//! collapsed height of a [`LineClampConfig`]. It runs after the content has
//! been laid out and again whenever the configuration changes; it does not
//! watch the content itself.

use super::config::LineClampConfig;
use crate::style::{ContentHeightRule, StyleVars};
use tracing::{debug, trace};

/// Something whose unconstrained rendered height can be measured.
pub trait ContentNode {
    /// Natural height in pixels given the height of one text row.
    ///
    /// Returns `None` while the node is not attached or has no layout yet.
    fn natural_height(&self, row_height_px: f64) -> Option<f64>;
}

/// Result of the latest measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverflowState {
    /// Natural height exceeded the collapsed height.
    pub is_overflowing: bool,
}

/// Tracks whether content overflows its collapsed height.
#[derive(Debug, Clone)]
pub struct OverflowDetector {
    config: LineClampConfig,
    state: OverflowState,
    last_natural_px: Option<f64>,
}

impl OverflowDetector {
    /// A detector that has not measured anything yet.
    pub fn new(config: LineClampConfig) -> Self {
        Self {
            config,
            state: OverflowState::default(),
            last_natural_px: None,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &LineClampConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// Returns `true` when the line height or line count changed, meaning the
    /// caller should evaluate again.
    pub fn set_config(&mut self, config: LineClampConfig) -> bool {
        if config == self.config {
            return false;
        }
        self.config = config;
        true
    }

    /// Measures `node` and records whether it overflows.
    ///
    /// An absent or unmeasurable node leaves the previous state untouched.
    pub fn evaluate(&mut self, node: Option<&dyn ContentNode>) -> OverflowState {
        let collapsed = self.config.collapsed_height_px();
        let natural = match node.and_then(|n| n.natural_height(self.config.row_height_px())) {
            Some(px) => px,
            None => {
                trace!(collapsed, "content not laid out, keeping overflow state");
                return self.state;
            }
        };

        let is_overflowing = natural > collapsed;
        trace!(natural, collapsed, is_overflowing, "measured content");
        if is_overflowing != self.state.is_overflowing {
            debug!(natural, collapsed, is_overflowing, "overflow state changed");
        }
        self.last_natural_px = Some(natural);
        self.state = OverflowState { is_overflowing };
        self.state
    }

    /// State from the most recent successful measurement.
    pub fn state(&self) -> OverflowState {
        self.state
    }

    /// Shorthand for `state().is_overflowing`.
    pub fn is_overflowing(&self) -> bool {
        self.state.is_overflowing
    }

    /// Natural height seen by the most recent successful measurement.
    pub fn last_natural_height(&self) -> Option<f64> {
        self.last_natural_px
    }

    /// Style variables matching the current state.
    pub fn style_vars(&self) -> StyleVars {
        let content_height = if self.state.is_overflowing {
            ContentHeightRule::ClampedUnlessChecked {
                collapsed_px: self.config.collapsed_height_px(),
            }
        } else {
            ContentHeightRule::Unconstrained
        };
        StyleVars {
            line_height: self.config.line_height(),
            number_of_lines: self.config.number_of_lines(),
            content_height,
        }
    }
}
