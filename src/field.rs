// Field resolution: column tokens, inline data lists and title clauses

use crate::env::Environment;

/// File value that marks a layer as carrying inline data.
pub const INLINE_SENTINEL: &str = "-";

/// Render an x/y field for a `using` clause.
///
/// `(expr)` is passed through, a bare column index stays unquoted and
/// anything else is treated as a column name and single-quoted.
pub fn render_token(token: &str) -> String {
    if token.starts_with('(') {
        return token.to_string();
    }
    if token.chars().any(|c| !c.is_ascii_digit()) {
        return format!("'{}'", token);
    }
    token.to_string()
}

/// Split inline data on commas. Empty input gives one empty token.
pub fn split_csv(data: &str) -> Vec<String> {
    data.split(',').map(str::to_string).collect()
}

/// `using x:y` for a resolved local store, or nothing for inline layers.
pub fn using_clause(local: &Environment) -> String {
    if local.get("file") == INLINE_SENTINEL {
        return String::new();
    }
    format!(
        "using {}:{}",
        render_token(&local.get("x_data")),
        render_token(&local.get("y_data"))
    )
}

pub fn title_clause(label: &str) -> String {
    if label.is_empty() {
        "notitle".to_string()
    } else {
        format!("title '{}'", label)
    }
}
