use std::fmt::{Display, Write};

/// Renders a sequence of errors as a bullet list, one line per error, in the
/// order given.
pub fn errors_to_string<E: Display>(errors: &[E]) -> String {
    let mut rendered = String::new();
    for error in errors {
        let _ = writeln!(rendered, "- {error}");
    }
    rendered
}
