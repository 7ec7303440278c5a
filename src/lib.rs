// src/lib.rs
use std::result::Result;

pub mod core;

pub use core::{
    initialize_core,
    ConsoleSink,
    HelloConfig,
    HelloError,
    HelloRuntime,
    LogSink,
    StartupHook,
    UsrFun,
};

/// Startet die Anwendung auf stdout mit dem Standard-Hook.
/// Ohne `max_iterations` kehrt die Funktion nie zurück.
pub async fn start_hello(config: HelloConfig) -> Result<u64, HelloError> {
    initialize_core(&config)?;
    let mut runtime = HelloRuntime::new(config, ConsoleSink::stdout(), UsrFun)?;
    log::info!("Hello heartbeat started");
    Ok(runtime.run().await)
}
