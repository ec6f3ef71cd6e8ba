//! Key bindings for the expandable component.

use crate::key::{Binding, KeyMap as KeyMapTrait};
use crossterm::event::KeyCode;

/// Bindings that activate the disclosure toggle while the component is focused.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Flips between collapsed and expanded.
    pub toggle: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            toggle: Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
                .with_help("enter/space", "show more"),
        }
    }
}

impl KeyMapTrait for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.toggle]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.toggle]]
    }
}

/// The default bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap::default()
}
