//! Line clamp configuration and its validation.

use thiserror::Error;

/// Pixel height of one `em` used when computing the collapsed height.
///
/// This is fixed and not derived from the actual font size; hosts whose text
/// metrics differ get a proportionally imprecise clamp.
pub const BASE_FONT_SIZE_PX: f64 = 16.0;

/// Line height multiplier used when the caller does not pick one.
pub const DEFAULT_LINE_HEIGHT: f64 = 1.5;

/// Line count used when nothing else is configured.
pub const DEFAULT_NUMBER_OF_LINES: usize = 3;

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Line height must be greater than zero.
    #[error("line height must be positive, got {0}")]
    NonPositiveLineHeight(f64),
    /// Line height must be a finite number.
    #[error("line height must be finite, got {0}")]
    NonFiniteLineHeight(f64),
    /// At least one line must stay visible.
    #[error("number of lines must be at least 1")]
    ZeroLines,
}

/// How much content stays visible while collapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineClampConfig {
    line_height: f64,
    number_of_lines: usize,
}

impl LineClampConfig {
    /// Validates and builds a configuration.
    ///
    /// ```rust
    /// use bubbletea_expandable::expandable::{ConfigError, LineClampConfig};
    ///
    /// let config = LineClampConfig::new(1.5, 3).unwrap();
    /// assert_eq!(config.collapsed_height_px(), 72.0);
    /// assert_eq!(LineClampConfig::new(1.5, 0), Err(ConfigError::ZeroLines));
    /// ```
    pub fn new(line_height: f64, number_of_lines: usize) -> Result<Self, ConfigError> {
        validate_line_height(line_height)?;
        if number_of_lines == 0 {
            return Err(ConfigError::ZeroLines);
        }
        Ok(Self {
            line_height,
            number_of_lines,
        })
    }

    /// Configuration with the default line height.
    pub fn with_lines(number_of_lines: usize) -> Result<Self, ConfigError> {
        Self::new(DEFAULT_LINE_HEIGHT, number_of_lines)
    }

    /// Line height multiplier, in `em`.
    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// Visible line count while collapsed.
    pub fn number_of_lines(&self) -> usize {
        self.number_of_lines
    }

    /// Height of a single text row in pixels.
    pub fn row_height_px(&self) -> f64 {
        self.line_height * BASE_FONT_SIZE_PX
    }

    /// `line_height * number_of_lines * 16`.
    pub fn collapsed_height_px(&self) -> f64 {
        self.line_height * self.number_of_lines as f64 * BASE_FONT_SIZE_PX
    }
}

impl Default for LineClampConfig {
    fn default() -> Self {
        Self {
            line_height: DEFAULT_LINE_HEIGHT,
            number_of_lines: DEFAULT_NUMBER_OF_LINES,
        }
    }
}

fn validate_line_height(line_height: f64) -> Result<(), ConfigError> {
    if !line_height.is_finite() {
        return Err(ConfigError::NonFiniteLineHeight(line_height));
    }
    if line_height <= 0.0 {
        return Err(ConfigError::NonPositiveLineHeight(line_height));
    }
    Ok(())
}
