use std::process::Command;

fn main() {
    // Short git SHA, shown by `cubic --version`
    let sha = std::env::var("CUBIC_BUILD_SHA").ok().or_else(|| {
        Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .output()
            .ok()
            .filter(|o| o.status.success())
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .map(|s| s.trim().to_string())
    }).unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=CUBIC_BUILD_SHA={}", sha);
    println!("cargo:rerun-if-env-changed=CUBIC_BUILD_SHA");
    println!("cargo:rerun-if-changed=../.git/HEAD");
}
