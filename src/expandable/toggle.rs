//! The Show more / Show less disclosure control.
//!
//! A toggle is a label bound to an invisible binary input. Its checked state
//! is the only expand/collapse state there is; labels and content height are
//! both derived from it.

use crate::id;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Label shown while collapsed.
pub const SHOW_MORE: &str = "Show more";
/// Label shown while expanded.
pub const SHOW_LESS: &str = "Show less";

/// Marker telling ancestor drag-and-drop handlers to ignore this control.
pub const NO_DND_ATTRIBUTE: &str = "data-no-dnd";

/// The two presentation states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToggleState {
    /// Content clipped to the collapsed height.
    #[default]
    Collapsed,
    /// Content shown at natural height.
    Expanded,
}

impl ToggleState {
    /// The other state.
    pub fn flipped(self) -> Self {
        match self {
            ToggleState::Collapsed => ToggleState::Expanded,
            ToggleState::Expanded => ToggleState::Collapsed,
        }
    }
}

/// Styles for the toggle label.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Label while not focused.
    pub label: Style,
    /// Label while focused.
    pub focused_label: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        Self {
            label: Style::new().foreground(AdaptiveColor {
                Light: "#5A56E0",
                Dark: "#7571F9",
            }),
            focused_label: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#5A56E0",
                    Dark: "#7571F9",
                })
                .underline(true),
        }
    }
}

/// A mounted disclosure control.
#[derive(Debug, Clone)]
pub struct DisclosureToggle {
    control_id: String,
    state: ToggleState,
    children: Option<String>,
    /// Label styling.
    pub styles: Styles,
}

impl DisclosureToggle {
    /// Mounts a toggle with a generated control id.
    pub fn new() -> Self {
        Self::with_control_id(id::next_control_id())
    }

    /// Mounts a toggle bound to `control_id`.
    pub fn with_control_id(control_id: impl Into<String>) -> Self {
        Self {
            control_id: control_id.into(),
            state: ToggleState::Collapsed,
            children: None,
            styles: Styles::default(),
        }
    }

    /// Content rendered before the label.
    pub fn with_children(mut self, children: impl Into<String>) -> Self {
        self.children = Some(children.into());
        self
    }

    /// Identifier shared by the label and its hidden input.
    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    /// Current state.
    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Whether the hidden input is checked.
    pub fn checked(&self) -> bool {
        self.state == ToggleState::Expanded
    }

    /// User activation: flips between collapsed and expanded.
    pub fn activate(&mut self) -> ToggleState {
        self.state = self.state.flipped();
        self.state
    }

    /// The visible label for the current state.
    pub fn label(&self) -> &'static str {
        match self.state {
            ToggleState::Collapsed => SHOW_MORE,
            ToggleState::Expanded => SHOW_LESS,
        }
    }

    /// Attributes carried by the label element.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("for", self.control_id.clone()),
            (NO_DND_ATTRIBUTE, String::new()),
        ]
    }

    /// Attributes carried by the hidden input the label points at.
    pub fn input_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("id", self.control_id.clone()),
            ("type", "checkbox".to_string()),
        ];
        if self.checked() {
            attrs.push(("checked", String::new()));
        }
        attrs
    }

    /// Renders children and the label.
    pub fn view(&self, focused: bool) -> String {
        let style = if focused {
            &self.styles.focused_label
        } else {
            &self.styles.label
        };
        let label = style.render(self.label());
        match &self.children {
            Some(children) => format!("{children}{label}"),
            None => label,
        }
    }
}

impl Default for DisclosureToggle {
    fn default() -> Self {
        Self::new()
    }
}
