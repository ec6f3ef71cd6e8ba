#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-expandable/")]

//! # bubbletea-expandable
//!
//! A line-clamping content component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications. Content longer than a configured number of lines is clipped
//! and a "Show more" / "Show less" toggle appears underneath it.
//!
//! ## Overview
//!
//! The component follows the Elm Architecture with `init()`, `update()` and
//! `view()`. Overflow is measured once the content has a layout and again when
//! the line height or line count change. Expanding and collapsing is a pure
//! function of the toggle's checked state: nothing else is recomputed.
//!
//! ## Modules
//!
//! - [`expandable`]: the component, its overflow detector and toggle
//! - [`style`]: the style variables the component publishes
//! - [`key`]: type-safe key bindings
//! - [`id`]: process-wide identifier allocation
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_expandable::prelude::*;
//! use bubbletea_rs::Model as _;
//!
//! let mut details = Expandable::new(2, 30).unwrap();
//! details.set_content("first\nsecond\nthird");
//! details.measure();
//!
//! assert!(details.is_overflowing());
//! assert_eq!(details.toggle_state(), Some(ToggleState::Collapsed));
//! assert!(details.view().contains("Show more"));
//! ```
//!
//! ## Focus Management
//!
//! ```rust
//! use bubbletea_expandable::prelude::*;
//!
//! let mut details = Expandable::default();
//! assert!(!details.focused());
//! details.focus();
//! assert!(details.focused());
//! ```

pub mod expandable;
pub mod id;
pub mod key;
pub mod style;

use bubbletea_rs::Cmd;

/// Components that can take keyboard focus.
///
/// A focused expandable reacts to its toggle bindings; a blurred one ignores
/// key presses and renders its toggle without the focus underline.
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for the runtime to execute.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns `true` while focused.
    fn focused(&self) -> bool;
}

pub use expandable::Model as Expandable;
pub use expandable::{
    ConfigError, ContentNode, DisclosureToggle, LineClampConfig, MeasureMsg, OverflowDetector,
    OverflowState, ToggleState,
};
pub use key::{Binding, KeyMap, KeyPress};
pub use style::{ContentHeight, StyleVars};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_expandable::prelude::*;
///
/// let config = LineClampConfig::with_lines(4).unwrap();
/// assert_eq!(config.collapsed_height_px(), 96.0);
/// ```
pub mod prelude {
    pub use crate::expandable::{
        new as expandable_new, new_with as expandable_new_with, with_class, with_control_id,
        with_line_height, with_remeasure_on_resize, ConfigError, ContentNode, DisclosureToggle,
        ExpandableOption, LineClampConfig, MeasureMsg, Model as Expandable, OverflowDetector,
        ToggleState,
    };
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::style::{ContentHeight, StyleVars};
    pub use crate::Component;
}
