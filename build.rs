use std::env;
use std::process::Command;

/// Short commit hash of the checkout, when built from a git tree.
fn commit_hash() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let hash = String::from_utf8(out.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}

fn main() {
    let base = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let version = match commit_hash() {
        Some(hash) => format!("{}+g{}", base, hash),
        None => base,
    };

    println!("cargo:rustc-env=RUNELINK_VERSION={}", version);
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
