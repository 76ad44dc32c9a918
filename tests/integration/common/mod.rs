#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Creates `<root>/resources` holding placeholder files with the given names.
pub fn resources_with(root: &Path, names: &[&str]) -> PathBuf {
    let resources = root.join("resources");
    fs::create_dir_all(&resources).expect("create resources dir");
    for name in names {
        fs::write(resources.join(name), b"PK").expect("write artifact");
    }
    resources
}

/// Writes an executable shell script standing in for the JVM.
#[cfg(unix)]
pub fn fake_interpreter(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-java");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write interpreter");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("chmod interpreter");
    path
}

/// Writes a config file for the `bot-<version>.jar` naming scheme.
pub fn write_config(dir: &Path, interpreter: &Path) -> PathBuf {
    let config_path = dir.join("jarlaunch.yaml");
    fs::write(
        &config_path,
        format!(
            r#"prefix: "bot-"
suffix: ".jar"
launch_token: "jarlaunch-test-token-that-never-matches"
interpreter: "{}"
"#,
            interpreter.display()
        ),
    )
    .expect("write config");
    config_path
}
