//! Tests for the expandable component.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ContentHeight;
    use crate::Component;
    use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn numbered(n: usize) -> String {
        (1..=n)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Plain, right-trimmed output lines.
    fn rendered(m: &Model) -> Vec<String> {
        strip_ansi_escapes::strip_str(m.view())
            .lines()
            .map(|l| l.trim_end().to_string())
            .collect()
    }

    fn mounted(rows: usize) -> Model {
        let mut m = new(3, 20).unwrap().with_content(numbered(rows));
        m.measure();
        m
    }

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    struct Fixed(f64);

    impl ContentNode for Fixed {
        fn natural_height(&self, _row_height_px: f64) -> Option<f64> {
            Some(self.0)
        }
    }

    #[test]
    fn test_fitting_content_has_no_toggle() {
        let m = mounted(3);
        assert!(!m.is_overflowing());
        assert!(m.toggle().is_none());
        assert_eq!(m.content_height(), ContentHeight::Auto);
        assert_eq!(rendered(&m), vec!["line 1", "line 2", "line 3"]);
    }

    #[test]
    fn test_overflowing_content_starts_collapsed() {
        let m = mounted(5);
        assert!(m.is_overflowing());
        assert_eq!(m.toggle_state(), Some(ToggleState::Collapsed));
        assert_eq!(m.content_height(), ContentHeight::Clamped(72.0));
        assert_eq!(rendered(&m), vec!["line 1", "line 2", "line 3", SHOW_MORE]);
    }

    #[test]
    fn test_activation_expands_then_collapses() {
        let mut m = mounted(5);

        assert_eq!(m.activate(), Some(ToggleState::Expanded));
        assert!(m.is_expanded());
        assert_eq!(m.content_height(), ContentHeight::Auto);
        let lines = rendered(&m);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4], "line 5");
        assert_eq!(lines[5], SHOW_LESS);

        assert_eq!(m.activate(), Some(ToggleState::Collapsed));
        assert_eq!(m.content_height(), ContentHeight::Clamped(72.0));
        assert_eq!(rendered(&m).last().map(String::as_str), Some(SHOW_MORE));
        assert_eq!(m.visible_rows().len(), 3);
    }

    #[test]
    fn test_activation_ignored_when_content_fits() {
        let mut m = mounted(2);
        assert_eq!(m.activate(), None);
        assert_eq!(m.activate(), None);
        assert!(m.toggle().is_none());
        assert_eq!(m.content_height(), ContentHeight::Auto);
    }

    #[test]
    fn test_instances_get_distinct_control_ids() {
        let a = mounted(5);
        let b = mounted(5);
        assert_ne!(a.control_id(), b.control_id());
        assert_ne!(
            a.toggle().map(DisclosureToggle::control_id),
            b.toggle().map(DisclosureToggle::control_id)
        );
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_explicit_control_id_is_used() {
        let mut m = new_with(3, 20, &[with_control_id("release-notes")])
            .unwrap()
            .with_content(numbered(5));
        m.measure();
        assert_eq!(m.control_id(), "release-notes");
        assert_eq!(
            m.toggle().map(DisclosureToggle::control_id),
            Some("release-notes")
        );
    }

    #[test]
    fn test_pixel_budget_examples() {
        let config = LineClampConfig::new(1.5, 3).unwrap();
        assert_eq!(config.collapsed_height_px(), 72.0);

        let mut detector = OverflowDetector::new(config);
        assert!(detector.evaluate(Some(&Fixed(100.0))).is_overflowing);

        let mut detector = OverflowDetector::new(config);
        assert!(!detector.evaluate(Some(&Fixed(60.0))).is_overflowing);
    }

    #[test]
    fn test_unmounted_content_renders_in_full() {
        let m = new(3, 20).unwrap().with_content(numbered(5));
        assert!(!m.is_overflowing());
        assert_eq!(rendered(&m).len(), 5);
    }

    #[test]
    fn test_unlaid_out_content_is_not_measured() {
        let mut m = new(3, 0).unwrap().with_content(numbered(5));
        m.measure();
        assert!(!m.is_overflowing());
        assert!(m.toggle().is_none());
    }

    #[tokio::test]
    async fn test_mount_command_triggers_measurement() {
        let mut m = new(3, 20).unwrap().with_content(numbered(5));
        let msg = m.mount().await.expect("mount yields a message");
        assert!(m.update(msg).is_none());
        assert!(m.is_overflowing());
        assert_eq!(m.toggle_state(), Some(ToggleState::Collapsed));
    }

    #[test]
    fn test_measure_msg_for_other_instance_ignored() {
        let mut m = new(3, 20).unwrap().with_content(numbered(5));
        let other = MeasureMsg { id: m.id() + 1000 };
        m.update(Box::new(other) as Msg);
        assert!(!m.is_overflowing());
    }

    #[test]
    fn test_init_schedules_mount() {
        let (m, cmd) = Model::init();
        assert!(cmd.is_some());
        assert_eq!(m.config().number_of_lines(), DEFAULT_NUMBER_OF_LINES);
        assert_eq!(m.config().line_height(), DEFAULT_LINE_HEIGHT);
    }

    #[test]
    fn test_keys_activate_only_when_focused() {
        let mut m = mounted(5);
        m.update(key(KeyCode::Enter));
        assert_eq!(m.toggle_state(), Some(ToggleState::Collapsed));

        m.focus();
        assert!(m.focused());
        m.update(key(KeyCode::Enter));
        assert_eq!(m.toggle_state(), Some(ToggleState::Expanded));
        assert_eq!(m.keymap.toggle.help().desc, "show less");
        m.update(key(KeyCode::Char(' ')));
        assert_eq!(m.toggle_state(), Some(ToggleState::Collapsed));
        m.update(key(KeyCode::Char('x')));
        assert_eq!(m.toggle_state(), Some(ToggleState::Collapsed));

        m.blur();
        m.update(key(KeyCode::Enter));
        assert_eq!(m.toggle_state(), Some(ToggleState::Collapsed));
    }

    #[test]
    fn test_config_change_measures_again() {
        let mut m = mounted(5);
        assert!(m.is_overflowing());

        m.set_number_of_lines(5).unwrap();
        assert!(!m.is_overflowing());
        assert!(m.toggle().is_none());

        m.set_number_of_lines(2).unwrap();
        assert!(m.is_overflowing());
        assert_eq!(m.visible_rows().len(), 2);
    }

    #[test]
    fn test_remount_resets_toggle_state() {
        let mut m = mounted(5);
        m.activate();
        assert!(m.is_expanded());

        m.set_number_of_lines(6).unwrap();
        assert!(m.toggle().is_none());
        m.set_number_of_lines(3).unwrap();
        assert_eq!(m.toggle_state(), Some(ToggleState::Collapsed));
    }

    #[test]
    fn test_line_height_change_keeps_row_budget() {
        let mut m = mounted(5);
        m.set_line_height(2.0).unwrap();
        assert_eq!(m.content_height(), ContentHeight::Clamped(96.0));
        assert_eq!(m.visible_rows().len(), 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut m = mounted(5);
        assert_eq!(m.set_number_of_lines(0), Err(ConfigError::ZeroLines));
        assert_eq!(
            m.set_line_height(0.0),
            Err(ConfigError::NonPositiveLineHeight(0.0))
        );
        assert_eq!(m.config().number_of_lines(), 3);
        assert_eq!(m.config().line_height(), DEFAULT_LINE_HEIGHT);
        assert!(new(0, 20).is_err());
    }

    #[test]
    fn test_invalid_option_keeps_default() {
        let m = new_with(3, 20, &[with_line_height(-1.0)]).unwrap();
        assert_eq!(m.config().line_height(), DEFAULT_LINE_HEIGHT);
    }

    #[test]
    fn test_content_change_does_not_measure() {
        let mut m = mounted(2);
        m.set_content(numbered(6));
        assert!(!m.is_overflowing());
        assert_eq!(rendered(&m).len(), 6);

        m.measure();
        assert!(m.is_overflowing());
    }

    #[test]
    fn test_resize_ignored_by_default() {
        let mut m = new(3, 40)
            .unwrap()
            .with_content("alpha beta gamma delta epsilon zeta");
        m.measure();
        assert!(!m.is_overflowing());

        m.update(Box::new(WindowSizeMsg {
            width: 6,
            height: 40,
        }) as Msg);
        assert_eq!(m.width(), 40);
        assert!(!m.is_overflowing());
    }

    #[test]
    fn test_resize_measures_when_enabled() {
        let mut m = new_with(3, 40, &[with_remeasure_on_resize(true)])
            .unwrap()
            .with_content("alpha beta gamma delta epsilon zeta");
        m.measure();
        assert!(!m.is_overflowing());

        m.update(Box::new(WindowSizeMsg {
            width: 6,
            height: 40,
        }) as Msg);
        assert_eq!(m.width(), 6);
        assert!(m.is_overflowing());
    }

    #[test]
    fn test_style_declarations() {
        let m = new_with(
            3,
            20,
            &[
                with_style_declaration("color", "red"),
                with_class("card"),
                with_class("card notes"),
                with_attribute("id", "details"),
                with_attribute("data-kind", "changelog"),
            ],
        )
        .unwrap()
        .with_content(numbered(5));
        assert_eq!(
            m.inline_style(),
            "--line-height: 1.5; --number-of-lines: 3; --expandable-content-height: initial; color: red"
        );

        let mut m = m;
        m.measure();
        assert!(m
            .inline_style()
            .contains("--expandable-content-height: 72px"));
        m.activate();
        assert!(m
            .inline_style()
            .contains("--expandable-content-height: initial"));

        let attrs = m.container_attributes();
        assert_eq!(attrs[0], ("id".to_string(), "details".to_string()));
        assert_eq!(attrs[1], ("class".to_string(), "card notes".to_string()));
        assert_eq!(attrs[2].0, "style");
        assert_eq!(
            attrs[3],
            ("data-kind".to_string(), "changelog".to_string())
        );
    }

    #[test]
    fn test_toggle_children_rendered() {
        let mut m = new_with(3, 20, &[with_toggle_children("… ")])
            .unwrap()
            .with_content(numbered(4));
        m.measure();
        assert_eq!(rendered(&m).last().map(String::as_str), Some("… Show more"));
        assert!(m
            .toggle()
            .is_some_and(|t| t.attributes().iter().any(|(k, _)| *k == NO_DND_ATTRIBUTE)));
    }

    #[test]
    fn test_trailing_newline_does_not_overflow() {
        let mut m = new(3, 20).unwrap().with_content("line 1\nline 2\nline 3\n");
        m.measure();
        assert!(!m.is_overflowing());
        assert!(m.toggle().is_none());
        assert_eq!(rendered(&m), vec!["line 1", "line 2", "line 3"]);
    }

    #[test]
    fn test_class_and_style_attributes_are_merged() {
        let m = new_with(
            3,
            20,
            &[
                with_class("a"),
                with_attribute("class", "b"),
                with_attribute("style", "color: red; --line-height: 2"),
            ],
        )
        .unwrap();

        let attrs = m.container_attributes();
        let names: Vec<&str> = attrs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["class", "style"]);
        assert_eq!(attrs[0].1, "a b");
        assert_eq!(
            attrs[1].1,
            "--line-height: 2; --number-of-lines: 3; --expandable-content-height: initial; color: red"
        );
        assert_eq!(attrs[1].1, m.inline_style());
    }

    #[test]
    fn test_toggle_binding_follows_toggle_mount() {
        let mut m = new(3, 20).unwrap().with_content(numbered(5));
        assert!(!m.keymap.toggle.enabled());

        m.measure();
        assert!(m.keymap.toggle.enabled());
        m.activate();
        assert_eq!(m.keymap.toggle.help().desc, "show less");

        m.set_number_of_lines(6).unwrap();
        assert!(m.toggle().is_none());
        assert!(!m.keymap.toggle.enabled());
        assert_eq!(m.keymap.toggle.help().desc, "show more");

        m.focus();
        m.update(key(KeyCode::Enter));
        assert!(m.toggle().is_none());
    }

    #[test]
    fn test_content_element_attributes() {
        let m = new_with(
            3,
            20,
            &[
                with_content_attribute("class", "prose"),
                with_content_attribute("style", "overflow: clip"),
                with_content_attribute("data-role", "body"),
            ],
        )
        .unwrap();

        let attrs = m.content_element_attributes();
        assert_eq!(attrs[0], ("class".to_string(), "prose".to_string()));
        assert_eq!(
            attrs[1],
            (
                "style".to_string(),
                "height: var(--expandable-content-height); overflow: clip".to_string()
            )
        );
        assert_eq!(attrs[2], ("data-role".to_string(), "body".to_string()));
        assert!(!m
            .container_attributes()
            .iter()
            .any(|(k, _)| k == "data-role"));
    }
}
