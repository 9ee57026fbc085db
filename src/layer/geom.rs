// Geometry layers: points, lines and bars

use super::Defaults;
use crate::env::Environment;
use crate::field::{title_clause, using_clause};

pub const POINT_DEFAULTS: Defaults = &[
    ("x_data", "1"),
    ("y_data", "1"),
    ("color", "black"),
    ("shape", "8"),
    ("size", "1"),
    ("label", ""),
];

pub const LINE_DEFAULTS: Defaults = &[
    ("x_data", "1"),
    ("y_data", "1"),
    ("color", "black"),
    ("linetype", "1"),
    ("linewidth", "1"),
    ("label", ""),
];

pub const BAR_GLOBAL_DEFAULTS: Defaults = &[("width", "0.8"), ("fillstyle", "solid")];

// fillstyle is filled from the global value the first bar layer set
pub const BAR_DEFAULTS: Defaults = &[
    ("x_data", "1"),
    ("y_data", "1"),
    ("color", "black"),
    ("shape", "1"),
    ("label", ""),
    ("fillstyle", "solid"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geom {
    Point,
    Line,
    Bar,
}

impl Geom {
    pub fn global_defaults(self) -> Defaults {
        match self {
            Geom::Bar => BAR_GLOBAL_DEFAULTS,
            Geom::Point | Geom::Line => &[],
        }
    }

    pub fn local_defaults(self) -> Defaults {
        match self {
            Geom::Point => POINT_DEFAULTS,
            Geom::Line => LINE_DEFAULTS,
            Geom::Bar => BAR_DEFAULTS,
        }
    }

    /// Bars share one fill style and box width across the whole plot.
    pub fn render_setters(self, global: &Environment) -> String {
        match self {
            Geom::Bar => format!(
                "set style fill {}\nset boxwidth {} relative\n",
                global.get("fillstyle"),
                global.get("width")
            ),
            Geom::Point | Geom::Line => String::new(),
        }
    }

    /// `'<file>' [using x:y] with <style> ... <title>`
    pub fn render_plotcmd(self, local: &Environment) -> String {
        let mut parts = vec![format!("'{}'", local.get("file"))];
        let using = using_clause(local);
        if !using.is_empty() {
            parts.push(using);
        }
        parts.push(self.style_clause(local));
        parts.push(title_clause(&local.get("label")));
        parts.join(" ")
    }

    fn style_clause(self, local: &Environment) -> String {
        match self {
            Geom::Point => format!(
                "with points pointtype {} pointsize {} linecolor rgb '{}'",
                local.get("shape"),
                local.get("size"),
                local.get("color")
            ),
            Geom::Line => format!(
                "with lines linetype {} linewidth {} linecolor rgb '{}'",
                local.get("linetype"),
                local.get("linewidth"),
                local.get("color")
            ),
            Geom::Bar => format!(
                "with boxes fillstyle {} linecolor rgb '{}'",
                local.get("fillstyle"),
                local.get("color")
            ),
        }
    }
}
