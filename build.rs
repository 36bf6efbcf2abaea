use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=BUILD_VERSION");

    // Explicit override wins (CI sets it, Docker builds have no .git)
    let hash = env::var("BUILD_VERSION").unwrap_or_else(|_| {
        Command::new("git")
            .args(["rev-parse", "--short=8", "HEAD"])
            .output()
            .ok()
            .filter(|o| o.status.success())
            .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
            .unwrap_or_default()
    });

    // "0.1.0" or "0.1.0 (abc12345)"
    let pkg = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let full = if hash.is_empty() {
        pkg
    } else {
        format!("{} ({})", pkg, hash)
    };

    println!("cargo:rustc-env=BUILD_VERSION={}", hash);
    println!("cargo:rustc-env=FULL_VERSION={}", full);
}
