//! Line-clamped content with a Show more / Show less toggle.
//!
//! The component has two moving parts:
//!
//! - an [`OverflowDetector`] that measures the content once it has a layout and
//!   decides whether it exceeds `line_height * number_of_lines * 16` pixels;
//! - a [`DisclosureToggle`] that is mounted only when the content overflows and
//!   whose checked state alone decides whether the clamp applies.
//!
//! "Is overflowing" drives structure (is there a toggle at all), "is expanded"
//! drives presentation (which height the style variables resolve to). The two
//! are never merged into one piece of state.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_expandable::expandable::{new_with, with_line_height, with_class};
//!
//! let mut notes = new_with(3, 40, &[with_line_height(1.25), with_class("notes")]).unwrap();
//! notes.set_content("A short note.");
//! notes.measure();
//! assert!(!notes.is_overflowing());
//! assert!(notes.toggle().is_none());
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use bubbletea_expandable::expandable;
//!
//! struct App {
//!     details: expandable::Model,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let details = expandable::new(3, 60)
//!             .unwrap()
//!             .with_content("Long release notes...");
//!         // Measurement happens when the mount command comes back as a message.
//!         let cmd = details.mount();
//!         (Self { details }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.details.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.details.view()
//!     }
//! }
//! ```

pub mod config;
pub mod content;
pub mod detector;
pub mod keymap;
pub mod model;
pub mod toggle;

#[cfg(test)]
mod tests;

pub use config::{
    ConfigError, LineClampConfig, BASE_FONT_SIZE_PX, DEFAULT_LINE_HEIGHT,
    DEFAULT_NUMBER_OF_LINES,
};
pub use content::TextContent;
pub use detector::{ContentNode, OverflowDetector, OverflowState};
pub use keymap::{default_key_map, KeyMap};
pub use model::{
    new, new_with, with_attribute, with_class, with_container_style, with_content_attribute,
    with_control_id, with_line_height, with_remeasure_on_resize, with_style_declaration,
    with_toggle_children, with_toggle_styles, Attributes, ExpandableOption, MeasureMsg, Model,
};
pub use toggle::{DisclosureToggle, ToggleState, NO_DND_ATTRIBUTE, SHOW_LESS, SHOW_MORE};
