//! The expandable component model.

use super::config::{ConfigError, LineClampConfig, DEFAULT_LINE_HEIGHT};
use super::content::TextContent;
use super::detector::{ContentNode, OverflowDetector};
use super::keymap::{default_key_map, KeyMap};
use super::toggle::{self, DisclosureToggle, ToggleState};
use crate::id;
use crate::style::{self, ContentHeight, StyleVars};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use lipgloss_extras::prelude::*;
use std::collections::BTreeMap;
use tracing::warn;

/// Asks a specific expandable to measure its content.
///
/// Returned by [`Model::mount`]; it arrives after the host has rendered the
/// first frame, which is when the content has a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureMsg {
    /// Instance the message is addressed to.
    pub id: i64,
}

/// Attributes forwarded to the container element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    /// Element id.
    pub id: Option<String>,
    /// Class names, in the order they were added.
    pub classes: Vec<String>,
    /// Caller style declarations, applied after the style variables.
    pub style: Vec<(String, String)>,
    /// Any other attribute.
    pub extra: BTreeMap<String, String>,
}

impl Attributes {
    /// Records an attribute. `id`, `class` and `style` land in their own
    /// fields, so each appears once on the element; `style` is parsed into
    /// declarations.
    pub fn set(&mut self, name: &str, value: &str) {
        match name {
            "id" => self.id = Some(value.to_string()),
            "class" => self.classes.push(value.to_string()),
            "style" => self.style.extend(style::parse_inline(value)),
            _ => {
                self.extra.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Element attributes with `base` declarations placed before the
    /// caller's style.
    pub fn to_element(&self, base: Vec<(String, String)>) -> Vec<(String, String)> {
        let mut attrs = Vec::new();
        if let Some(id) = &self.id {
            attrs.push(("id".to_string(), id.clone()));
        }
        let class_name = self.class_name();
        if !class_name.is_empty() {
            attrs.push(("class".to_string(), class_name));
        }
        let declarations = style::merge_declarations(base, &self.style);
        if !declarations.is_empty() {
            attrs.push(("style".to_string(), style::to_inline(&declarations)));
        }
        attrs.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        attrs
    }

    /// Class names joined by spaces, later duplicates dropped.
    pub fn class_name(&self) -> String {
        let mut seen: Vec<&str> = Vec::new();
        for class in self.classes.iter().flat_map(|c| c.split_whitespace()) {
            if !seen.contains(&class) {
                seen.push(class);
            }
        }
        seen.join(" ")
    }
}

/// Construction options, applied in order by [`new_with`].
#[derive(Debug, Clone)]
pub enum ExpandableOption {
    /// Line height multiplier.
    WithLineHeight(f64),
    /// Explicit id for the toggle's label and hidden input.
    WithControlId(String),
    /// Content rendered before the toggle label.
    WithToggleChildren(String),
    /// Container attribute.
    WithAttribute(String, String),
    /// Attribute on the clamped content element.
    WithContentAttribute(String, String),
    /// Container class name.
    WithClass(String),
    /// Container style declaration.
    WithStyleDeclaration(String, String),
    /// Lipgloss style for the whole component.
    WithContainerStyle(Box<Style>),
    /// Lipgloss styles for the toggle label.
    WithToggleStyles(Box<toggle::Styles>),
    /// Measure again whenever the terminal is resized.
    WithRemeasureOnResize(bool),
}

impl ExpandableOption {
    fn apply(&self, m: &mut Model) {
        match self {
            ExpandableOption::WithLineHeight(line_height) => {
                if let Err(err) = m.set_line_height(*line_height) {
                    warn!(%err, "ignoring line height option");
                }
            }
            ExpandableOption::WithControlId(control_id) => {
                m.control_id = control_id.clone();
            }
            ExpandableOption::WithToggleChildren(children) => {
                m.toggle_children = Some(children.clone());
            }
            ExpandableOption::WithAttribute(name, value) => m.attributes.set(name, value),
            ExpandableOption::WithContentAttribute(name, value) => {
                m.content_attributes.set(name, value)
            }
            ExpandableOption::WithClass(class) => m.attributes.classes.push(class.clone()),
            ExpandableOption::WithStyleDeclaration(name, value) => {
                m.attributes.style.push((name.clone(), value.clone()));
            }
            ExpandableOption::WithContainerStyle(style) => {
                m.container_style = style.as_ref().clone();
            }
            ExpandableOption::WithToggleStyles(styles) => {
                m.toggle_styles = styles.as_ref().clone();
            }
            ExpandableOption::WithRemeasureOnResize(enabled) => m.remeasure_on_resize = *enabled,
        }
    }
}

/// Sets the line height multiplier. Invalid values are logged and ignored.
pub fn with_line_height(line_height: f64) -> ExpandableOption {
    ExpandableOption::WithLineHeight(line_height)
}

/// Uses `control_id` instead of a generated id.
pub fn with_control_id(control_id: impl Into<String>) -> ExpandableOption {
    ExpandableOption::WithControlId(control_id.into())
}

/// Renders `children` before the toggle label.
pub fn with_toggle_children(children: impl Into<String>) -> ExpandableOption {
    ExpandableOption::WithToggleChildren(children.into())
}

/// Forwards an attribute to the container.
pub fn with_attribute(name: impl Into<String>, value: impl Into<String>) -> ExpandableOption {
    ExpandableOption::WithAttribute(name.into(), value.into())
}

/// Forwards an attribute to the clamped content element.
pub fn with_content_attribute(
    name: impl Into<String>,
    value: impl Into<String>,
) -> ExpandableOption {
    ExpandableOption::WithContentAttribute(name.into(), value.into())
}

/// Adds a container class name.
pub fn with_class(class: impl Into<String>) -> ExpandableOption {
    ExpandableOption::WithClass(class.into())
}

/// Adds a container style declaration.
pub fn with_style_declaration(
    name: impl Into<String>,
    value: impl Into<String>,
) -> ExpandableOption {
    ExpandableOption::WithStyleDeclaration(name.into(), value.into())
}

/// Styles the whole component.
pub fn with_container_style(style: Style) -> ExpandableOption {
    ExpandableOption::WithContainerStyle(Box::new(style))
}

/// Styles the toggle label.
pub fn with_toggle_styles(styles: toggle::Styles) -> ExpandableOption {
    ExpandableOption::WithToggleStyles(Box::new(styles))
}

/// Opts into measuring again on terminal resize.
pub fn with_remeasure_on_resize(enabled: bool) -> ExpandableOption {
    ExpandableOption::WithRemeasureOnResize(enabled)
}

/// Block content clamped to a number of lines, with a Show more / Show less
/// toggle when it does not fit.
///
/// Whether the content overflows is measured once the content has a layout
/// (see [`Model::mount`]) and again whenever the line height or line count
/// change. Editing the text or resizing does not measure again unless the
/// host calls [`Model::measure`] or opts in with
/// [`with_remeasure_on_resize`].
///
/// ```rust
/// use bubbletea_expandable::expandable::Model;
/// use bubbletea_rs::Model as _;
///
/// let mut expandable = Model::new(2, 20).unwrap();
/// expandable.set_content("one\ntwo\nthree\nfour");
/// expandable.measure();
/// assert!(expandable.is_overflowing());
/// assert!(expandable.view().contains("Show more"));
///
/// expandable.activate();
/// assert!(expandable.view().contains("four"));
/// ```
#[derive(Debug)]
pub struct Model {
    detector: OverflowDetector,
    content: TextContent,
    toggle: Option<DisclosureToggle>,
    control_id: String,
    toggle_children: Option<String>,
    /// Attributes forwarded to the container.
    pub attributes: Attributes,
    /// Attributes forwarded to the clamped content element.
    pub content_attributes: Attributes,
    /// Style applied to the rendered component.
    pub container_style: Style,
    /// Styles handed to the toggle when it mounts.
    pub toggle_styles: toggle::Styles,
    /// Key bindings.
    pub keymap: KeyMap,
    id: i64,
    mounted: bool,
    focus: bool,
    remeasure_on_resize: bool,
}

impl Model {
    /// Creates an expandable showing `number_of_lines` lines of `width`
    /// columns while collapsed, with the default line height.
    pub fn new(number_of_lines: usize, width: usize) -> Result<Self, ConfigError> {
        let config = LineClampConfig::new(DEFAULT_LINE_HEIGHT, number_of_lines)?;
        Ok(Self::from_config(config, width))
    }

    fn from_config(config: LineClampConfig, width: usize) -> Self {
        let mut keymap = default_key_map();
        keymap.toggle.set_enabled(false);
        Self {
            detector: OverflowDetector::new(config),
            content: TextContent::new("", width),
            toggle: None,
            control_id: id::next_control_id(),
            toggle_children: None,
            attributes: Attributes::default(),
            content_attributes: Attributes::default(),
            container_style: Style::new(),
            toggle_styles: toggle::Styles::default(),
            keymap,
            id: id::next_instance_id(),
            mounted: false,
            focus: false,
            remeasure_on_resize: false,
        }
    }

    /// Builder for the content text.
    pub fn with_content(mut self, text: impl Into<String>) -> Self {
        self.content.set_text(text);
        self
    }

    /// Instance id used to route [`MeasureMsg`].
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Identifier shared by the toggle label and its hidden input.
    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    /// Current clamp configuration.
    pub fn config(&self) -> &LineClampConfig {
        self.detector.config()
    }

    /// Changes the line height; measures again if already mounted.
    pub fn set_line_height(&mut self, line_height: f64) -> Result<(), ConfigError> {
        let config = LineClampConfig::new(line_height, self.config().number_of_lines())?;
        self.apply_config(config);
        Ok(())
    }

    /// Changes the line count; measures again if already mounted.
    pub fn set_number_of_lines(&mut self, number_of_lines: usize) -> Result<(), ConfigError> {
        let config = LineClampConfig::new(self.config().line_height(), number_of_lines)?;
        self.apply_config(config);
        Ok(())
    }

    fn apply_config(&mut self, config: LineClampConfig) {
        if self.detector.set_config(config) && self.mounted {
            self.measure();
        }
    }

    /// Replaces the content text. Does not measure.
    pub fn set_content(&mut self, text: impl Into<String>) {
        self.content.set_text(text);
    }

    /// Content text.
    pub fn content(&self) -> &str {
        self.content.text()
    }

    /// Layout width in columns.
    pub fn width(&self) -> usize {
        self.content.width()
    }

    /// Changes the layout width. Does not measure.
    pub fn set_width(&mut self, width: usize) {
        self.content.set_width(width);
    }

    /// Command delivering this instance's [`MeasureMsg`].
    pub fn mount(&self) -> Cmd {
        let id = self.id;
        Box::pin(async move { Some(Box::new(MeasureMsg { id }) as Msg) })
    }

    /// Measures the content now and mounts or unmounts the toggle to match.
    pub fn measure(&mut self) {
        self.mounted = true;
        let node: &dyn ContentNode = &self.content;
        let state = self.detector.evaluate(Some(node));

        match (state.is_overflowing, self.toggle.is_some()) {
            (true, false) => {
                let mut t = DisclosureToggle::with_control_id(self.control_id.clone());
                if let Some(children) = &self.toggle_children {
                    t = t.with_children(children.clone());
                }
                t.styles = self.toggle_styles.clone();
                self.toggle = Some(t);
                self.keymap.toggle.set_enabled(true);
                self.keymap.toggle.set_help_desc("show more");
            }
            (false, true) => {
                self.toggle = None;
                self.keymap.toggle.set_enabled(false);
                self.keymap.toggle.set_help_desc("show more");
            }
            _ => {}
        }
    }

    /// Whether the content was found to overflow.
    pub fn is_overflowing(&self) -> bool {
        self.detector.is_overflowing()
    }

    /// The toggle, when mounted.
    pub fn toggle(&self) -> Option<&DisclosureToggle> {
        self.toggle.as_ref()
    }

    /// Toggle state, or `None` when no toggle is mounted.
    pub fn toggle_state(&self) -> Option<ToggleState> {
        self.toggle.as_ref().map(DisclosureToggle::state)
    }

    /// Whether the content is shown at natural height because the user
    /// expanded it.
    pub fn is_expanded(&self) -> bool {
        self.toggle_state() == Some(ToggleState::Expanded)
    }

    /// Activates the toggle. Does nothing when the content fits.
    pub fn activate(&mut self) -> Option<ToggleState> {
        let state = self.toggle.as_mut().map(DisclosureToggle::activate)?;
        let desc = match state {
            ToggleState::Collapsed => "show more",
            ToggleState::Expanded => "show less",
        };
        self.keymap.toggle.set_help_desc(desc);
        Some(state)
    }

    /// Style variables for the current overflow state.
    pub fn style_vars(&self) -> StyleVars {
        self.detector.style_vars()
    }

    /// The realized content height.
    pub fn content_height(&self) -> ContentHeight {
        let checked = self.toggle.as_ref().is_some_and(DisclosureToggle::checked);
        self.style_vars().resolve(checked)
    }

    /// Container style declarations: the variables, then caller overrides.
    pub fn style_declarations(&self) -> Vec<(String, String)> {
        let checked = self.toggle.as_ref().is_some_and(DisclosureToggle::checked);
        style::merge_declarations(
            self.style_vars().declarations(checked),
            &self.attributes.style,
        )
    }

    /// [`Self::style_declarations`] as an inline style string.
    pub fn inline_style(&self) -> String {
        style::to_inline(&self.style_declarations())
    }

    /// All attributes of the container element.
    pub fn container_attributes(&self) -> Vec<(String, String)> {
        let checked = self.toggle.as_ref().is_some_and(DisclosureToggle::checked);
        self.attributes
            .to_element(self.style_vars().declarations(checked))
    }

    /// All attributes of the clamped content element: its height follows
    /// the container's content height variable and overflow is hidden.
    pub fn content_element_attributes(&self) -> Vec<(String, String)> {
        self.content_attributes.to_element(vec![
            (
                "height".to_string(),
                format!("var({})", style::CONTENT_HEIGHT_VAR),
            ),
            ("overflow".to_string(), "hidden".to_string()),
        ])
    }

    /// Content rows currently visible.
    pub fn visible_rows(&self) -> &[String] {
        let rows = self.content.rows();
        let n = self
            .content_height()
            .visible_rows(rows.len(), self.config().row_height_px());
        &rows[..n]
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::from_config(LineClampConfig::default(), 80)
    }
}

/// Creates an expandable and applies `opts` in order.
pub fn new_with(
    number_of_lines: usize,
    width: usize,
    opts: &[ExpandableOption],
) -> Result<Model, ConfigError> {
    let mut m = Model::new(number_of_lines, width)?;
    for opt in opts {
        opt.apply(&mut m);
    }
    Ok(m)
}

/// Same as [`Model::new`].
pub fn new(number_of_lines: usize, width: usize) -> Result<Model, ConfigError> {
    Model::new(number_of_lines, width)
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let model = Self::default();
        let cmd = model.mount();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(measure) = msg.downcast_ref::<MeasureMsg>() {
            if measure.id == self.id {
                self.measure();
            }
            return None;
        }

        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            if self.remeasure_on_resize {
                self.set_width(size.width as usize);
                if self.mounted {
                    self.measure();
                }
            }
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.focus && self.keymap.toggle.matches(key_msg) {
                self.activate();
            }
        }
        None
    }

    fn view(&self) -> String {
        let mut output = self.visible_rows().join("\n");
        if let Some(t) = &self.toggle {
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&t.view(self.focus));
        }
        self.container_style.render(&output)
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
