// src/core/mod.rs
pub mod hello_config;
pub mod hello_runtime;
pub mod hello_sink;
pub mod error;
pub mod testutils;

pub use hello_config::{HelloConfig, HookConfig, LoopConfig};
pub use hello_runtime::{HelloRuntime, StartupHook, UsrFun, FnHook};
pub use hello_sink::{LogSink, ConsoleSink, MemorySink};
pub use error::HelloError;

pub fn initialize_core(config: &HelloConfig) -> Result<(), HelloError> {
    config.validate()?;
    log::info!("Hello core initialized with config: {}", config);
    if config.hook_config.usr_fun_enabled {
        log::info!("Startup hook enabled");
    }
    Ok(())
}
