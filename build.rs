use std::path::Path;
use std::process::Command;

/// The crate version, followed by the git revision when building from a checkout.
fn version() -> String {
    let version = env!("CARGO_PKG_VERSION").to_string();
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty=+dirty"])
        .output();
    match output {
        Ok(output) if output.status.success() => {
            let revision = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if revision.is_empty() {
                version
            } else {
                format!("{version} ({revision})")
            }
        }
        _ => version,
    }
}

fn main() {
    let out_dir = std::env::var("OUT_DIR").expect("missing OUT_DIR");
    let path = Path::new(&out_dir).join("version.txt");
    if let Err(e) = std::fs::write(&path, version()) {
        panic!("Failed to write {}: {}", path.display(), e);
    }
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
}
