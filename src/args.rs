// Layer flag stream: groups attribute flags under the layer flag before them

use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::env::Environment;
use crate::layer::LayerKind;
use anyhow::{anyhow, bail, Result};

/// One layer flag and the local settings given after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerBatch {
    pub kind: LayerKind,
    pub local: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Layer(LayerKind),
    Attr(Attr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attr {
    X,
    Y,
    Color,
    Shape,
    Size,
    Linetype,
    Linewidth,
    Width,
    /// `-w`: linewidth for lines, width for bars
    AnyWidth,
    Fillstyle,
    Label,
    Title,
    LegendPosition,
    LegendDirection,
    Delim,
}

impl Flag {
    fn from_short(c: char) -> Option<Flag> {
        let flag = match c {
            'G' => Flag::Layer(LayerKind::Global),
            'P' => Flag::Layer(LayerKind::Point),
            'L' => Flag::Layer(LayerKind::Line),
            'B' => Flag::Layer(LayerKind::Bar),
            'x' => Flag::Attr(Attr::X),
            'y' => Flag::Attr(Attr::Y),
            'c' => Flag::Attr(Attr::Color),
            's' => Flag::Attr(Attr::Shape),
            'z' => Flag::Attr(Attr::Size),
            't' => Flag::Attr(Attr::Linetype),
            'w' => Flag::Attr(Attr::AnyWidth),
            'f' => Flag::Attr(Attr::Fillstyle),
            'l' => Flag::Attr(Attr::Label),
            'd' => Flag::Attr(Attr::Delim),
            _ => return None,
        };
        Some(flag)
    }

    fn from_long(name: &str) -> Option<Flag> {
        let flag = match name {
            "global" => Flag::Layer(LayerKind::Global),
            "point" => Flag::Layer(LayerKind::Point),
            "line" => Flag::Layer(LayerKind::Line),
            "bar" => Flag::Layer(LayerKind::Bar),
            "labs" => Flag::Layer(LayerKind::Labels),
            "theme" => Flag::Layer(LayerKind::Theme),
            // ggplot's fill is gnuplot's linecolor for boxes
            "color" | "fill" => Flag::Attr(Attr::Color),
            "shape" => Flag::Attr(Attr::Shape),
            "size" => Flag::Attr(Attr::Size),
            "linetype" => Flag::Attr(Attr::Linetype),
            "linewidth" => Flag::Attr(Attr::Linewidth),
            "width" => Flag::Attr(Attr::Width),
            "fillstyle" => Flag::Attr(Attr::Fillstyle),
            "label" => Flag::Attr(Attr::Label),
            "title" => Flag::Attr(Attr::Title),
            "legend_position" | "legend-position" => Flag::Attr(Attr::LegendPosition),
            "legend_direction" | "legend-direction" => Flag::Attr(Attr::LegendDirection),
            "delim" => Flag::Attr(Attr::Delim),
            _ => return None,
        };
        Some(flag)
    }

    fn takes_value(self) -> bool {
        match self {
            Flag::Layer(kind) => kind.takes_file(),
            Flag::Attr(_) => true,
        }
    }
}

impl Attr {
    /// Setting name this flag writes in a layer of the given kind.
    fn key(self, kind: LayerKind) -> Option<&'static str> {
        let key = match (self, kind) {
            (Attr::X, LayerKind::Labels) => "xlab",
            (Attr::Y, LayerKind::Labels) => "ylab",
            (Attr::X, _) => "x_data",
            (Attr::Y, _) => "y_data",
            (Attr::AnyWidth, LayerKind::Line) => "linewidth",
            (Attr::AnyWidth, LayerKind::Bar) => "width",
            (Attr::AnyWidth, _) => return None,
            (Attr::Color, _) => "color",
            (Attr::Shape, _) => "shape",
            (Attr::Size, _) => "size",
            (Attr::Linetype, _) => "linetype",
            (Attr::Linewidth, _) => "linewidth",
            (Attr::Width, _) => "width",
            (Attr::Fillstyle, _) => "fillstyle",
            (Attr::Label, _) => "label",
            (Attr::Title, _) => "title",
            (Attr::LegendPosition, _) => "legend_position",
            (Attr::LegendDirection, _) => "legend_direction",
            (Attr::Delim, _) => "file_delim",
        };
        Some(key)
    }
}

/// Split the layer flag stream into batches.
///
/// A flag's value is the rest of the same token (`-x1`, `--color=red`) or
/// else the next token, whatever it looks like, so `-P -` and `-x -1`
/// work. Repeating an attribute inside a batch keeps the first value.
pub fn batch_layer_args<S: AsRef<str>>(
    args: &[S],
    diagnostics: &mut Diagnostics,
) -> Result<Vec<LayerBatch>> {
    let mut batches: Vec<LayerBatch> = Vec::new();
    let mut tokens = args.iter().map(AsRef::as_ref);

    while let Some(arg) = tokens.next() {
        if arg == "--" {
            continue;
        }

        let (flag, attached, name) = split_flag(arg)?;
        let value = if flag.takes_value() {
            match attached {
                Some(v) => v.to_string(),
                None => tokens
                    .next()
                    .ok_or_else(|| anyhow!("option '{}' requires a value", name))?
                    .to_string(),
            }
        } else {
            if attached.is_some() {
                bail!("option '{}' does not take a value", name);
            }
            String::new()
        };

        match flag {
            Flag::Layer(kind) => {
                let mut local = Environment::new();
                if kind.takes_file() {
                    local.replace("file", &value);
                }
                batches.push(LayerBatch { kind, local });
            }
            Flag::Attr(attr) => {
                let batch = batches
                    .last_mut()
                    .ok_or_else(|| anyhow!("option '{}' must follow a layer option", name))?;
                match attr.key(batch.kind) {
                    Some(key) => diagnostics.record(batch.local.insert(key, &value)),
                    None => diagnostics.push(Diagnostic::IgnoredWidth {
                        layer: batch.kind.name(),
                    }),
                }
            }
        }
    }

    Ok(batches)
}

/// Returns the flag, a value attached to the same token and the flag as
/// written (for error messages).
fn split_flag(arg: &str) -> Result<(Flag, Option<&str>, String)> {
    if let Some(long) = arg.strip_prefix("--") {
        let (name, attached) = match long.split_once('=') {
            Some((n, v)) => (n, Some(v)),
            None => (long, None),
        };
        let flag = Flag::from_long(name).ok_or_else(|| anyhow!("unknown option '--{}'", name))?;
        return Ok((flag, attached, format!("--{}", name)));
    }

    if let Some(short) = arg.strip_prefix('-') {
        if let Some(c) = short.chars().next() {
            let flag = Flag::from_short(c).ok_or_else(|| anyhow!("unknown option '-{}'", c))?;
            let rest = &short[c.len_utf8()..];
            let attached = if rest.is_empty() { None } else { Some(rest) };
            return Ok((flag, attached, format!("-{}", c)));
        }
    }

    bail!("unexpected argument '{}'", arg)
}
