// src/bin/print_config.rs
use hello_heartbeat::HelloConfig;

fn main() {
    match HelloConfig::from_env().and_then(|config| config.to_json()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
