//! Utility modules

pub mod debug;
pub mod terminal;

pub use debug::DebugLogger;
pub use terminal::{no_color_requested, stderr_is_terminal, stdout_is_terminal};
