use std::{env, process::Command};

const APP_DIR: &str = "../featuremap-frontend";
const APP_SRC: &str = "../featuremap-frontend/src";
const APP_FEATURE_NAME: &str = "app";

fn main() {
    if env::var(format!("CARGO_FEATURE_{}", APP_FEATURE_NAME.to_uppercase())).is_ok() {
        assert_trunk_is_installed();
        let status = Command::new("trunk")
            .args(["build", "--release"])
            .current_dir(APP_DIR)
            .status()
            .expect("Unable to execute trunk");
        assert!(status.success(), "Unable to build the frontend with trunk");
        println!("cargo:rerun-if-changed={APP_SRC}");
        for entry in walkdir::WalkDir::new(APP_SRC)
            .into_iter()
            .filter_map(Result::ok)
        {
            println!("cargo:rerun-if-changed={}", entry.path().display());
        }
    }
}

fn assert_trunk_is_installed() {
    let output = Command::new("cargo")
        .args(["install", "--list"])
        .output()
        .expect("Unable to check trunk installation");
    let output_string = String::from_utf8_lossy(&output.stdout);
    if !output_string.contains("trunk") {
        Command::new("cargo")
            .args(["install", "trunk"])
            .status()
            .expect("Unable to install trunk");
    }
}
