// src/main.rs

use hello_heartbeat::{start_hello, HelloConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // .env zuerst laden, damit auch RUST_LOG von dort greift
    let config = HelloConfig::from_env();

    // Initialisiere den Logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = start_hello(config).await {
        eprintln!("Failed to start hello heartbeat: {}", e);
        std::process::exit(1);
    }
}
