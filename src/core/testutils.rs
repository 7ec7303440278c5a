// src/core/testutils.rs
use crate::core::error::HelloError;
use crate::core::hello_config::HelloConfig;
use crate::core::hello_runtime::StartupHook;
use crate::core::hello_sink::{LogSink, MemorySink};
use std::sync::{Arc, Mutex};

/// Hook, der bei jedem Aufruf die aktuelle Zeilenzahl der Senke festhält.
#[derive(Debug, Clone)]
pub struct RecordingHook {
    sink: MemorySink,
    calls: Arc<Mutex<Vec<usize>>>,
}

impl RecordingHook {
    pub fn new(sink: MemorySink) -> Self {
        RecordingHook {
            sink,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sink_len_at_calls(&self) -> Vec<usize> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.sink_len_at_calls().len()
    }
}

impl StartupHook for RecordingHook {
    fn call(&mut self) {
        let seen = self.sink.len();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(seen);
        }
    }

    fn name(&self) -> &str {
        "recording_hook"
    }
}

/// Senke, die jeden Schreibversuch zählt und immer fehlschlägt.
#[derive(Debug, Default)]
pub struct FailingSink {
    attempts: u64,
}

impl FailingSink {
    pub fn attempts(&self) -> u64 {
        self.attempts
    }
}

impl LogSink for FailingSink {
    fn write_line(&mut self, _line: &str) -> Result<(), HelloError> {
        self.attempts += 1;
        Err(HelloError::Sink("console unavailable".to_string()))
    }
}

pub fn test_config(usr_fun_enabled: bool, max_iterations: Option<u64>) -> HelloConfig {
    let mut config = HelloConfig::default();
    config.hook_config.usr_fun_enabled = usr_fun_enabled;
    config.loop_config.max_iterations = max_iterations;
    config
}
