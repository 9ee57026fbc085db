// Non-fatal problems found while composing layers

use std::fmt;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem that does not abort the run. The default value that replaces
/// the offending setting is chosen by whoever reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `insert` hit a key that was already set; the first value is kept.
    DuplicateSetting { key: String },
    /// Neither the layer nor the global layer named a data file.
    MissingDataSource,
    /// The global layer was given the inline sentinel as its file.
    InlineGlobalData,
    /// `legend_position` is not one of none/left/right/top/bottom.
    InvalidLegendPosition { value: String },
    /// `-w` used in a layer that has no width setting.
    IgnoredWidth { layer: &'static str },
    /// Inline x and y lists have different lengths; extra values are dropped.
    InlineLengthMismatch { x: usize, y: usize },
    /// Inline value that is not a number. It is still sent to gnuplot.
    NonNumericInline { value: String },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::MissingDataSource | Diagnostic::InlineGlobalData => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateSetting { key } => {
                write!(f, "key '{}' already set, ignoring", key)
            }
            Diagnostic::MissingDataSource => {
                write!(f, "no global data set, nothing to use as default")
            }
            Diagnostic::InlineGlobalData => {
                write!(f, "the global layer cannot use inline data, ignoring")
            }
            Diagnostic::InvalidLegendPosition { value } => {
                write!(f, "invalid legend position '{}', ignoring", value)
            }
            Diagnostic::IgnoredWidth { layer } => {
                write!(f, "-w has no meaning for a {} layer, ignoring", layer)
            }
            Diagnostic::InlineLengthMismatch { x, y } => {
                write!(f, "inline data has {} x values and {} y values, extra values dropped", x, y)
            }
            Diagnostic::NonNumericInline { value } => {
                write!(f, "inline value '{}' is not a number", value)
            }
        }
    }
}

/// Collects diagnostics in the order they were raised and logs each one.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Warning => warn!("{}", diagnostic),
            Severity::Error => error!("{}", diagnostic),
        }
        self.entries.push(diagnostic);
    }

    /// Record the diagnostic returned by a store operation, if any.
    pub fn record(&mut self, diagnostic: Option<Diagnostic>) {
        if let Some(d) = diagnostic {
            self.push(d);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|d| d.severity() == Severity::Error)
    }
}
