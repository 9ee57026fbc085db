// Theme layer: legend placement, the counterpart of theme(legend.position)

use super::Defaults;
use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::env::Environment;

pub const GLOBAL_DEFAULTS: Defaults = &[
    ("legend_position", "right"),
    ("legend_direction", "vertical"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    None,
    Left,
    Right,
    Top,
    Bottom,
}

impl LegendPosition {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(LegendPosition::None),
            "left" => Some(LegendPosition::Left),
            "right" => Some(LegendPosition::Right),
            "top" => Some(LegendPosition::Top),
            "bottom" => Some(LegendPosition::Bottom),
            _ => None,
        }
    }

    /// Argument of `set key`.
    pub fn key_clause(self, direction: &str) -> String {
        match self {
            LegendPosition::None => "off".to_string(),
            LegendPosition::Left => format!("outside left center {}", direction),
            LegendPosition::Right => format!("outside right center {}", direction),
            LegendPosition::Top => format!("outside center top {}", direction),
            LegendPosition::Bottom => format!("outside center bottom {}", direction),
        }
    }
}

pub(super) fn render_setters(global: &Environment, diagnostics: &mut Diagnostics) -> String {
    let position = global.get("legend_position");
    let clause = match LegendPosition::parse(&position) {
        Some(p) => p.key_clause(&global.get("legend_direction")),
        None => {
            diagnostics.push(Diagnostic::InvalidLegendPosition { value: position });
            LegendPosition::None.key_clause("")
        }
    };
    format!("set key {}\n", clause)
}
