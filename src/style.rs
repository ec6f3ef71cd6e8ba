//! Style-variable contract between the expandable container and its content.
//!
//! The container publishes three custom properties:
//!
//! | Variable | Value |
//! |----------|-------|
//! | `--line-height` | configured line height multiplier |
//! | `--number-of-lines` | configured line count |
//! | `--expandable-content-height` | collapsed height or `initial` |
//!
//! The content height is never stored as state. It is resolved from the
//! disclosure toggle's checked state every time it is needed, so flipping the
//! toggle changes presentation without touching anything else.

use std::fmt;

/// Custom property carrying the line height multiplier.
pub const LINE_HEIGHT_VAR: &str = "--line-height";
/// Custom property carrying the number of visible lines.
pub const NUMBER_OF_LINES_VAR: &str = "--number-of-lines";
/// Custom property carrying the realized content height.
pub const CONTENT_HEIGHT_VAR: &str = "--expandable-content-height";

/// A realized content height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentHeight {
    /// Clipped to the given pixel height.
    Clamped(f64),
    /// Natural height, no constraint.
    Auto,
}

impl ContentHeight {
    /// Number of text rows visible out of `total_rows`, each `row_height_px` tall.
    ///
    /// A clamp that falls between rows shows only the rows that fit entirely.
    pub fn visible_rows(&self, total_rows: usize, row_height_px: f64) -> usize {
        match *self {
            ContentHeight::Auto => total_rows,
            ContentHeight::Clamped(px) => {
                if row_height_px <= 0.0 || px <= 0.0 {
                    return 0;
                }
                // Tolerate float noise such as 71.99999 for a 72px budget.
                let rows = (px / row_height_px + 1e-9).floor() as usize;
                rows.min(total_rows)
            }
        }
    }

    /// Whether a constraint is applied.
    pub fn is_clamped(&self) -> bool {
        matches!(self, ContentHeight::Clamped(_))
    }
}

impl fmt::Display for ContentHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentHeight::Clamped(px) => write!(f, "{px}px"),
            ContentHeight::Auto => f.write_str("initial"),
        }
    }
}

/// How `--expandable-content-height` depends on the toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentHeightRule {
    /// Always `initial`, whatever the toggle says.
    Unconstrained,
    /// Collapsed height while unchecked, `initial` while checked.
    ClampedUnlessChecked {
        /// Collapsed height in pixels.
        collapsed_px: f64,
    },
}

/// The custom properties emitted on the container.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleVars {
    /// Line height multiplier.
    pub line_height: f64,
    /// Visible line count when collapsed.
    pub number_of_lines: usize,
    /// Rule producing the content height.
    pub content_height: ContentHeightRule,
}

impl StyleVars {
    /// Resolves the content height for the toggle's checked state.
    pub fn resolve(&self, checked: bool) -> ContentHeight {
        match self.content_height {
            ContentHeightRule::Unconstrained => ContentHeight::Auto,
            ContentHeightRule::ClampedUnlessChecked { collapsed_px } => {
                if checked {
                    ContentHeight::Auto
                } else {
                    ContentHeight::Clamped(collapsed_px)
                }
            }
        }
    }

    /// The variable declarations for the given checked state.
    pub fn declarations(&self, checked: bool) -> Vec<(String, String)> {
        vec![
            (LINE_HEIGHT_VAR.to_string(), self.line_height.to_string()),
            (
                NUMBER_OF_LINES_VAR.to_string(),
                self.number_of_lines.to_string(),
            ),
            (
                CONTENT_HEIGHT_VAR.to_string(),
                self.resolve(checked).to_string(),
            ),
        ]
    }
}

/// Appends caller declarations after `base`.
///
/// A caller declaration with the same property name replaces the base entry in
/// place, so callers can override the variables without losing the rest.
pub fn merge_declarations(
    base: Vec<(String, String)>,
    overrides: &[(String, String)],
) -> Vec<(String, String)> {
    let mut merged = base;
    for (name, value) in overrides {
        match merged.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.clone(),
            None => merged.push((name.clone(), value.clone())),
        }
    }
    merged
}

/// Parses an inline style string such as `color: red; margin: 0`.
///
/// Entries without a colon or with an empty name are skipped.
pub fn parse_inline(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Formats declarations as an inline style string: `a: 1; b: 2`.
pub fn to_inline(declarations: &[(String, String)]) -> String {
    declarations
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}
