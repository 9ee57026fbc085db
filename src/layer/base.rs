// Global layer: data source and aesthetics shared by every later layer,
// the counterpart of ggplot(data, aes(...)).

use super::{Composer, Defaults};
use crate::diagnostic::Diagnostic;
use crate::env::Environment;
use crate::field::INLINE_SENTINEL;

pub const GLOBAL_DEFAULTS: Defaults = &[
    ("file_delim", " "),
    ("x_data", "1"),
    ("y_data", "1"),
    ("color", "black"),
    ("shape", "1"),
];

/// The global file is always inserted, even when empty. Inline data is
/// rejected here since the global layer has no plot clause to carry it.
pub(super) fn update_globals(cx: &mut Composer<'_>) {
    let mut file = cx.local.get("file");
    if file == INLINE_SENTINEL {
        cx.diagnostics.push(Diagnostic::InlineGlobalData);
        file.clear();
        cx.local.replace("file", "");
    }
    let diag = cx.global.insert("file", &file);
    cx.diagnostics.record(diag);
    cx.fill_globals(GLOBAL_DEFAULTS);
}

pub(super) fn render_setters(global: &Environment) -> String {
    format!("set datafile separator '{}'\n", global.get("file_delim"))
}

#[cfg(test)]
mod tests {
    use crate::diagnostic::{Diagnostic, Diagnostics};
    use crate::env::Environment;
    use crate::layer::{compose, LayerKind};

    #[test]
    fn test_global_layer_defaults() {
        let mut global = Environment::new();
        let mut diags = Diagnostics::new();
        let mut local = Environment::new();
        assert!(local.insert("file", "data.dat").is_none());
        let layer = compose(LayerKind::Global, &mut global, local, &mut diags);

        assert_eq!(layer.set_lines(), "set datafile separator ' '\n");
        assert_eq!(layer.plot_clause(), "");
        assert_eq!(global.get("file"), "data.dat");
        assert_eq!(global.get("x_data"), "1");
        assert_eq!(global.get("color"), "black");
        assert_eq!(global.get("shape"), "1");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_global_layer_custom_delim() {
        let mut global = Environment::new();
        let mut diags = Diagnostics::new();
        let mut local = Environment::new();
        assert!(local.insert("file", "data.csv").is_none());
        assert!(local.insert("file_delim", ",").is_none());
        let layer = compose(LayerKind::Global, &mut global, local, &mut diags);
        assert_eq!(layer.set_lines(), "set datafile separator ','\n");
    }

    #[test]
    fn test_global_layer_rejects_inline() {
        let mut global = Environment::new();
        let mut diags = Diagnostics::new();
        let mut local = Environment::new();
        assert!(local.insert("file", "-").is_none());
        assert!(local.insert("x_data", "1,2").is_none());
        let layer = compose(LayerKind::Global, &mut global, local, &mut diags);

        assert!(layer.inline_data().is_none());
        assert_eq!(layer.inline_block(), "");

        assert!(global.contains("file"));
        assert_eq!(global.get("file"), "");
        assert_eq!(diags.iter().next(), Some(&Diagnostic::InlineGlobalData));
        assert_eq!(diags.len(), 1);
    }
}
