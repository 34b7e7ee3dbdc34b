use std::env;
use std::process::Command;

/// Output of `git <args>`, or the `fallback` env var (Docker builds have no .git)
fn git(args: &[&str], fallback: &str) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| env::var(fallback).ok())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    let git_dirty = Command::new("git")
        .args(["status", "--porcelain"])
        .output()
        .ok()
        .map(|output| !output.stdout.is_empty())
        .or_else(|| env::var("GIT_DIRTY").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(false);

    let rust_version = rustc_version::version()
        .map(|v| v.to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    let vars = [
        ("GIT_HASH", git(&["rev-parse", "--short", "HEAD"], "GIT_HASH")),
        ("GIT_DATE", git(&["log", "-1", "--format=%ci"], "GIT_DATE")),
        ("GIT_BRANCH", git(&["rev-parse", "--abbrev-ref", "HEAD"], "GIT_BRANCH")),
        ("GIT_DIRTY", git_dirty.to_string()),
        ("BUILD_TIMESTAMP", chrono::Utc::now().to_rfc3339()),
        ("RUST_VERSION", rust_version),
    ];

    for (key, value) in vars {
        println!("cargo:rustc-env={}={}", key, value);
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
}
