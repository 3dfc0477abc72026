//! Stamps version metadata for `bytewords --version`.
//!
//! Nothing is written to the source tree; all values travel as
//! `cargo:rustc-env` variables.

use std::env;
use std::fs;
use std::process::Command;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let version_path = format!("{}/VERSION", manifest_dir);

    let version = fs::read_to_string(&version_path)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| env::var("CARGO_PKG_VERSION").ok())
        .unwrap_or_else(|| "0.0.0".to_string());

    let profile = match env::var("PROFILE").as_deref() {
        Ok("release") => "release",
        _ => "development",
    };

    let commit = git_commit().unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=BYTEWORDS_VERSION={}", version);
    println!("cargo:rustc-env=BYTEWORDS_PROFILE={}", profile);
    println!("cargo:rustc-env=BYTEWORDS_GIT_HASH={}", commit);

    if std::path::Path::new(&version_path).exists() {
        println!("cargo:rerun-if-changed={}", version_path);
    } else {
        println!("cargo:rerun-if-changed=build.rs");
    }
    println!("cargo:rerun-if-env-changed=PROFILE");
}

/// Short hash of HEAD, if built from a git checkout
fn git_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    Some(hash.trim().to_string()).filter(|h| !h.is_empty())
}
