// build.rs
use std::env;

fn main() {
    // Rohwert von CONFIG_USR_FUN durchreichen; ausgewertet wird in hello_config_hook.rs
    let raw = env::var("CONFIG_USR_FUN").unwrap_or_default();
    println!("cargo:rustc-env=HELLO_USR_FUN_DEFAULT={}", raw.trim());
    println!("cargo:rerun-if-env-changed=CONFIG_USR_FUN");
    println!("cargo:rerun-if-changed=build.rs");
}
