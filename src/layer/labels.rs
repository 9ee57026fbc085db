// Labels layer: plot title and axis labels, the counterpart of labs()

use super::Defaults;
use crate::env::Environment;

pub const GLOBAL_DEFAULTS: Defaults = &[("title", ""), ("xlab", "x"), ("ylab", "y")];

pub(super) fn render_setters(global: &Environment) -> String {
    format!(
        "set title '{}'\nset xlabel '{}'\nset ylabel '{}'\n",
        global.get("title"),
        global.get("xlab"),
        global.get("ylab")
    )
}
