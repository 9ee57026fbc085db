//! Layer composition.
//!
//! Every layer runs the same five steps exactly once, in order:
//!
//! ```text
//! update_globals   push this kind's defaults into the global store
//! update_locals    pull resolved values into the layer's local store
//! render_setters   "set ..." lines, read from the global store
//! render_plotcmd   plot clause, read from the local store
//! inline data      "x y" rows when the layer's file is "-"
//! ```
//!
//! The kinds differ only in their default tables and renderers, which live
//! in the submodules.

pub mod base;
pub mod geom;
pub mod labels;
pub mod theme;

use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::env::Environment;
use crate::field::{split_csv, INLINE_SENTINEL};
use anyhow::{anyhow, Result};
use geom::Geom;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Default value table: (setting name, built-in default).
pub type Defaults = &'static [(&'static str, &'static str)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Global,
    Labels,
    Theme,
    Point,
    Line,
    Bar,
}

impl LayerKind {
    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Global => "global",
            LayerKind::Labels => "labs",
            LayerKind::Theme => "theme",
            LayerKind::Point => "point",
            LayerKind::Line => "line",
            LayerKind::Bar => "bar",
        }
    }

    /// Geometry layers read a data file and contribute a plot clause.
    pub fn geom(self) -> Option<Geom> {
        match self {
            LayerKind::Point => Some(Geom::Point),
            LayerKind::Line => Some(Geom::Line),
            LayerKind::Bar => Some(Geom::Bar),
            _ => None,
        }
    }

    /// Whether the layer flag takes the data file as its value.
    pub fn takes_file(self) -> bool {
        matches!(self, LayerKind::Global) || self.geom().is_some()
    }

    fn update_globals(self, cx: &mut Composer<'_>) {
        match self {
            LayerKind::Global => base::update_globals(cx),
            LayerKind::Labels => cx.fill_globals(labels::GLOBAL_DEFAULTS),
            LayerKind::Theme => cx.fill_globals(theme::GLOBAL_DEFAULTS),
            LayerKind::Point | LayerKind::Line | LayerKind::Bar => {
                if let Some(g) = self.geom() {
                    cx.fill_globals(g.global_defaults());
                }
            }
        }
    }

    fn update_locals(self, cx: &mut Composer<'_>) {
        if let Some(g) = self.geom() {
            cx.resolve_data_file();
            cx.fill_locals(g.local_defaults());
        }
    }

    fn render_setters(self, global: &Environment, diagnostics: &mut Diagnostics) -> String {
        match self {
            LayerKind::Global => base::render_setters(global),
            LayerKind::Labels => labels::render_setters(global),
            LayerKind::Theme => theme::render_setters(global, diagnostics),
            LayerKind::Point | LayerKind::Line | LayerKind::Bar => self
                .geom()
                .map(|g| g.render_setters(global))
                .unwrap_or_default(),
        }
    }

    fn render_plotcmd(self, local: &Environment) -> String {
        self.geom()
            .map(|g| g.render_plotcmd(local))
            .unwrap_or_default()
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "global" => Ok(LayerKind::Global),
            "labs" | "labels" => Ok(LayerKind::Labels),
            "theme" => Ok(LayerKind::Theme),
            "point" => Ok(LayerKind::Point),
            "line" => Ok(LayerKind::Line),
            "bar" => Ok(LayerKind::Bar),
            other => Err(anyhow!("unknown layer type '{}'", other)),
        }
    }
}

/// Inline `x y` rows for a layer whose file is the inline sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineData {
    rows: Vec<(String, String)>,
}

impl InlineData {
    pub fn rows(&self) -> &[(String, String)] {
        &self.rows
    }

    /// The data block gnuplot reads after the plot line, terminated by `e`.
    pub fn block(&self) -> String {
        let mut out = String::new();
        for (x, y) in &self.rows {
            out.push_str(x);
            out.push(' ');
            out.push_str(y);
            out.push('\n');
        }
        out.push_str("e\n");
        out
    }
}

/// A composed layer: its set lines, plot clause and inline data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    kind: LayerKind,
    set_lines: String,
    plot_clause: String,
    inline: Option<InlineData>,
}

impl Layer {
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn set_lines(&self) -> &str {
        &self.set_lines
    }

    pub fn plot_clause(&self) -> &str {
        &self.plot_clause
    }

    pub fn inline_data(&self) -> Option<&InlineData> {
        self.inline.as_ref()
    }

    pub fn inline_block(&self) -> String {
        self.inline.as_ref().map(InlineData::block).unwrap_or_default()
    }
}

/// Run the five composition steps for one layer. The local store is
/// consumed; the global store keeps whatever this layer defaulted.
pub fn compose(
    kind: LayerKind,
    global: &mut Environment,
    local: Environment,
    diagnostics: &mut Diagnostics,
) -> Layer {
    let mut cx = Composer {
        global,
        local,
        diagnostics,
    };

    kind.update_globals(&mut cx);
    kind.update_locals(&mut cx);
    let set_lines = kind.render_setters(cx.global, cx.diagnostics);
    let plot_clause = kind.render_plotcmd(&cx.local);
    // only a layer with a plot clause can carry a data block
    let inline = kind.geom().and_then(|_| cx.inline_data());

    debug!(layer = %kind, set = %set_lines.trim_end(), plot = %plot_clause, "composed layer");

    Layer {
        kind,
        set_lines,
        plot_clause,
        inline,
    }
}

/// Stores and diagnostic sink for one composition window.
struct Composer<'a> {
    global: &'a mut Environment,
    local: Environment,
    diagnostics: &'a mut Diagnostics,
}

impl Composer<'_> {
    /// Insert into global the local value if given, else the layer default.
    /// Diagnoses when global already holds the key.
    fn fill_global(&mut self, key: &str, layer_default: &str) {
        let value = self.local.get_or(key, layer_default);
        let diag = self.global.insert(key, &value);
        self.diagnostics.record(diag);
    }

    /// Fill local from global if set there, else from the layer default.
    fn fill_local(&mut self, key: &str, layer_default: &str) {
        let value = self.global.get_or(key, layer_default);
        self.local.fill(key, &value);
    }

    fn fill_globals(&mut self, defaults: Defaults) {
        for (key, value) in defaults {
            self.fill_global(key, value);
        }
    }

    fn fill_locals(&mut self, defaults: Defaults) {
        for (key, value) in defaults {
            self.fill_local(key, value);
        }
    }

    /// An empty local file falls back to the global file. When both are
    /// empty the file stays blank and an error diagnostic is raised.
    fn resolve_data_file(&mut self) {
        let local_file = self.local.get("file");
        let resolved = if local_file.is_empty() {
            let global_file = self.global.get("file");
            if global_file.is_empty() {
                self.diagnostics.push(Diagnostic::MissingDataSource);
            }
            global_file
        } else {
            local_file
        };
        self.local.replace("file", &resolved);
    }

    fn inline_data(&mut self) -> Option<InlineData> {
        if self.local.get("file") != INLINE_SENTINEL {
            return None;
        }
        let x = split_csv(&self.local.get("x_data"));
        let y = split_csv(&self.local.get("y_data"));
        if x.len() != y.len() {
            self.diagnostics.push(Diagnostic::InlineLengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }

        let mut rows = Vec::with_capacity(x.len().min(y.len()));
        for (xv, yv) in x.iter().zip(y.iter()) {
            let (xv, yv) = (xv.trim(), yv.trim());
            for v in [xv, yv] {
                if v.parse::<f64>().is_err() {
                    self.diagnostics.push(Diagnostic::NonNumericInline {
                        value: v.to_string(),
                    });
                }
            }
            rows.push((xv.to_string(), yv.to_string()));
        }
        Some(InlineData { rows })
    }
}
