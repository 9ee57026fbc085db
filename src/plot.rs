// Layer sequence: builds layers in order and assembles the gnuplot script

use crate::diagnostic::Diagnostics;
use crate::env::Environment;
use crate::layer::{self, Layer, LayerKind};
use anyhow::{bail, Result};
use tracing::debug;

/// The global store and the layers composed against it so far.
#[derive(Debug, Default)]
pub struct Plot {
    global: Environment,
    layers: Vec<Layer>,
}

impl Plot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose one layer from its local settings and append it.
    ///
    /// The global layer is only accepted as the first layer.
    pub fn add_layer(
        &mut self,
        kind: LayerKind,
        local: Environment,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        if kind == LayerKind::Global && !self.layers.is_empty() {
            bail!("if the global layer (--global, -G) is used, it must come first");
        }
        debug!(layer = %kind, index = self.layers.len(), "adding layer");
        let layer = layer::compose(kind, &mut self.global, local, diagnostics);
        self.layers.push(layer);
        Ok(())
    }

    /// Same as [`Plot::add_layer`] with the kind given by name.
    pub fn add_layer_named(
        &mut self,
        kind: &str,
        local: Environment,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        self.add_layer(kind.parse()?, local, diagnostics)
    }

    pub fn global(&self) -> &Environment {
        &self.global
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// True when at least one layer contributes to the plot line.
    pub fn has_plot_clauses(&self) -> bool {
        self.layers.iter().any(|l| !l.plot_clause().is_empty())
    }

    /// Set lines in layer order, one `plot` line joining every clause,
    /// then the inline data blocks in layer order.
    pub fn script(&self) -> String {
        let mut script = String::new();
        for layer in &self.layers {
            script.push_str(layer.set_lines());
        }

        let clauses: Vec<&str> = self
            .layers
            .iter()
            .map(Layer::plot_clause)
            .filter(|c| !c.is_empty())
            .collect();
        script.push_str("plot ");
        script.push_str(&clauses.join(", "));
        script.push('\n');

        for layer in &self.layers {
            script.push_str(&layer.inline_block());
        }
        script
    }
}
