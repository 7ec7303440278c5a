// src/core/hello_sink/hello_sink_memory.rs

use std::sync::{Arc, Mutex};
use tokio::time::Instant;

use super::LogSink;
use crate::core::error::HelloError;

#[derive(Debug, Clone)]
pub struct SinkRecord {
    pub text: String, // inklusive "\n"
    pub at: Instant,
}

/// Gemeinsamer Puffer; Klone teilen sich dieselben Einträge.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<SinkRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    pub fn records(&self) -> Vec<SinkRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<(), HelloError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| HelloError::Sink(format!("Memory sink poisoned: {}", e)))?;
        records.push(SinkRecord {
            text: format!("{}\n", line),
            at: Instant::now(),
        });
        Ok(())
    }
}
