use crate::drum::zone::TouchControlScheme;
use crate::settings::Settings;
use log::warn;

/// A value the player can change, as a closed set of variants. Each variant
/// knows its own shape; no runtime type inspection anywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum SettableValue {
    Range { value: f32, min: f32, max: f32, step: f32 },
    Toggle(bool),
    Text(String),
    Choice { choices: Vec<String>, selected: usize },
}

/// Rendering hint for a settable value. A front-end turns these into actual
/// widgets; this crate stops at the hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Slider,
    Checkbox,
    TextBox,
    Dropdown,
}

/// Dispatches a value to its control. Total over the variant set; adding a
/// variant forces a decision here at compile time.
pub fn control_for(value: &SettableValue) -> ControlKind {
    match value {
        SettableValue::Range { .. } => ControlKind::Slider,
        SettableValue::Toggle(_) => ControlKind::Checkbox,
        SettableValue::Text(_) => ControlKind::TextBox,
        SettableValue::Choice { .. } => ControlKind::Dropdown,
    }
}

pub struct OptionRow {
    pub name: String,
    pub help: Vec<String>,
    pub value: SettableValue,
}

const ROW_TOUCH_SCHEME: &str = "Touch Control Scheme";
const ROW_TOUCH_OVERLAY: &str = "Touch Overlay";
const ROW_DISPLAY_WIDTH: &str = "Display Width";
const ROW_DISPLAY_HEIGHT: &str = "Display Height";

fn scheme_choice(current: TouchControlScheme) -> SettableValue {
    SettableValue::Choice {
        choices: TouchControlScheme::ALL.iter().map(|s| s.as_str().to_string()).collect(),
        selected: TouchControlScheme::ALL.iter().position(|&s| s == current).unwrap_or(0),
    }
}

/// Builds the option rows for the current settings.
pub fn build_rows(settings: &Settings) -> Vec<OptionRow> {
    vec![
        OptionRow {
            name: ROW_TOUCH_SCHEME.to_string(),
            help: vec![
                "Physical drum layout used to remap touch zones.".to_string(),
                "K: kat (rim) | D: don (centre), left to right.".to_string(),
            ],
            value: scheme_choice(settings.touch_scheme),
        },
        OptionRow {
            name: ROW_TOUCH_OVERLAY.to_string(),
            help: vec!["Show the on-screen drum when the screen is touched.".to_string()],
            value: SettableValue::Toggle(settings.touch_overlay_enabled),
        },
        OptionRow {
            name: ROW_DISPLAY_WIDTH.to_string(),
            help: vec!["Window width in pixels.".to_string()],
            value: SettableValue::Range {
                value: settings.display_width as f32,
                min: 640.0,
                max: 3840.0,
                step: 16.0,
            },
        },
        OptionRow {
            name: ROW_DISPLAY_HEIGHT.to_string(),
            help: vec!["Window height in pixels.".to_string()],
            value: SettableValue::Range {
                value: settings.display_height as f32,
                min: 480.0,
                max: 2160.0,
                step: 16.0,
            },
        },
    ]
}

/// Writes edited rows back into settings. Rows are matched by name so a
/// front-end can reorder or filter them.
pub fn apply_rows(rows: &[OptionRow], settings: &mut Settings) {
    for row in rows {
        match (row.name.as_str(), &row.value) {
            (ROW_TOUCH_SCHEME, SettableValue::Choice { selected, .. }) => {
                match TouchControlScheme::ALL.get(*selected) {
                    Some(&scheme) => settings.touch_scheme = scheme,
                    None => warn!("Choice index {} out of range for '{}'", selected, row.name),
                }
            }
            (ROW_TOUCH_OVERLAY, SettableValue::Toggle(enabled)) => {
                settings.touch_overlay_enabled = *enabled;
            }
            (ROW_DISPLAY_WIDTH, SettableValue::Range { value, .. }) => {
                settings.display_width = *value as u32;
            }
            (ROW_DISPLAY_HEIGHT, SettableValue::Range { value, .. }) => {
                settings.display_height = *value as u32;
            }
            _ => warn!("Ignoring unknown option row '{}'", row.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_a_control() {
        assert_eq!(
            control_for(&SettableValue::Range { value: 1.0, min: 0.0, max: 2.0, step: 0.1 }),
            ControlKind::Slider
        );
        assert_eq!(control_for(&SettableValue::Toggle(true)), ControlKind::Checkbox);
        assert_eq!(control_for(&SettableValue::Text("don".to_string())), ControlKind::TextBox);
        assert_eq!(
            control_for(&SettableValue::Choice { choices: vec![], selected: 0 }),
            ControlKind::Dropdown
        );
    }

    #[test]
    fn rows_reflect_current_settings() {
        let settings = Settings {
            touch_scheme: TouchControlScheme::Ddkk,
            touch_overlay_enabled: false,
            ..Settings::default()
        };
        let rows = build_rows(&settings);

        match &rows[0].value {
            SettableValue::Choice { choices, selected } => {
                assert_eq!(choices, &["KDDK", "DDKK", "KKDD"]);
                assert_eq!(*selected, 1);
            }
            other => panic!("expected a choice row, got {:?}", other),
        }
        assert_eq!(rows[1].value, SettableValue::Toggle(false));
    }

    #[test]
    fn edited_rows_apply_back() {
        let mut settings = Settings::default();
        let mut rows = build_rows(&settings);

        if let SettableValue::Choice { selected, .. } = &mut rows[0].value {
            *selected = 2; // KKDD
        }
        if let SettableValue::Toggle(enabled) = &mut rows[1].value {
            *enabled = false;
        }
        if let SettableValue::Range { value, .. } = &mut rows[2].value {
            *value = 1920.0;
        }

        apply_rows(&rows, &mut settings);
        assert_eq!(settings.touch_scheme, TouchControlScheme::Kkdd);
        assert!(!settings.touch_overlay_enabled);
        assert_eq!(settings.display_width, 1920);
    }

    #[test]
    fn out_of_range_choice_leaves_settings_alone() {
        let mut settings = Settings::default();
        let mut rows = build_rows(&settings);
        if let SettableValue::Choice { selected, .. } = &mut rows[0].value {
            *selected = 99;
        }
        apply_rows(&rows, &mut settings);
        assert_eq!(settings.touch_scheme, TouchControlScheme::Kddk);
    }

    #[test]
    fn build_then_apply_is_lossless() {
        let original = Settings {
            touch_scheme: TouchControlScheme::Kkdd,
            touch_overlay_enabled: false,
            display_width: 1600,
            display_height: 900,
        };
        let mut round_tripped = Settings::default();
        apply_rows(&build_rows(&original), &mut round_tripped);
        assert_eq!(round_tripped, original);
    }
}
