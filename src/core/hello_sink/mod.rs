// src/core/hello_sink/mod.rs

use crate::core::error::HelloError;

pub mod hello_sink_console;
pub mod hello_sink_memory;

pub use hello_sink_console::ConsoleSink;
pub use hello_sink_memory::{MemorySink, SinkRecord};

/// Ziel für die zeilenweise Ausgabe (Konsole, UART, Testpuffer).
///
/// Die Senke hängt den Zeilenumbruch selbst an: jeder Eintrag ist `line + "\n"`.
pub trait LogSink {
    fn write_line(&mut self, line: &str) -> Result<(), HelloError>;
}
