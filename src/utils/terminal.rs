//! Terminal capability detection

use std::io::IsTerminal;

/// True when the `NO_COLOR` convention asks for uncolored output
pub fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").map_or(false, |value| !value.is_empty())
}

/// Whether standard error is attached to a terminal
pub fn stderr_is_terminal() -> bool {
    std::io::stderr().is_terminal()
}

/// Whether standard output is attached to a terminal
pub fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}
