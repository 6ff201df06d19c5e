//! Output rendering.

mod console;

pub use console::ConsoleReporter;
