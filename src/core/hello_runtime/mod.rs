// src/core/hello_runtime/mod.rs

use crate::core::error::HelloError;
use crate::core::hello_config::HelloConfig;
use crate::core::hello_sink::LogSink;

pub mod hello_runtime_execution;
pub mod hello_runtime_hooks;

pub use hello_runtime_hooks::{FnHook, StartupHook, UsrFun};

/// Zustand der Hauptschleife.
pub struct HelloRuntime<S: LogSink, H: StartupHook> {
    config: HelloConfig,
    sink: S,
    hook: H,
    iterations: u64,
    hook_invoked: bool,
}

impl<S: LogSink, H: StartupHook> HelloRuntime<S, H> {
    pub fn new(config: HelloConfig, sink: S, hook: H) -> Result<Self, HelloError> {
        config.validate()?;
        Ok(HelloRuntime {
            config,
            sink,
            hook,
            iterations: 0,
            hook_invoked: false,
        })
    }

    pub fn config(&self) -> &HelloConfig {
        &self.config
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn hook_invoked(&self) -> bool {
        self.hook_invoked
    }

    pub fn into_parts(self) -> (S, H) {
        (self.sink, self.hook)
    }
}
