// src/core/hello_runtime/hello_runtime_execution.rs

use tokio::time::sleep;

use super::{HelloRuntime, StartupHook};
use crate::core::hello_config::HELLO_LINE;
use crate::core::hello_sink::LogSink;

impl<S: LogSink, H: StartupHook> HelloRuntime<S, H> {
    /// Ruft den Hook genau einmal auf, falls aktiviert.
    pub fn run_startup_hook(&mut self) {
        if !self.config.hook_config.usr_fun_enabled {
            log::debug!("Startup hook disabled, skipping");
            return;
        }
        if self.hook_invoked {
            return;
        }
        log::debug!("Invoking startup hook '{}'", self.hook.name());
        self.hook.call();
        self.hook_invoked = true;
    }

    /// Eine Iteration: Zeile schreiben, dann schlafen.
    pub async fn tick(&mut self) {
        if let Err(e) = self.sink.write_line(HELLO_LINE) {
            // Fehler der Senke gehören der Plattform; die Schleife läuft weiter
            log::warn!("Failed to write heartbeat line: {}", e);
        }
        self.iterations += 1;
        log::trace!("Heartbeat {} emitted", self.iterations);
        sleep(self.config.loop_config.interval()).await;
    }

    /// Hook, dann Endlosschleife. Kehrt nur bei gesetztem `max_iterations` zurück.
    pub async fn run(&mut self) -> u64 {
        self.run_startup_hook();
        log::info!(
            "Entering main loop (interval {} ms, limit {:?})",
            self.config.loop_config.interval_ms,
            self.config.loop_config.max_iterations
        );
        loop {
            if let Some(max) = self.config.loop_config.max_iterations {
                if self.iterations >= max {
                    break;
                }
            }
            self.tick().await;
        }
        log::info!("Main loop stopped after {} iterations", self.iterations);
        self.iterations
    }
}
