#![cfg(test)]

use std::path::{Path, PathBuf};

use crate::mixer::Invocation;

/// Writes an executable `sh` script named `fake-amixer` into `dir`.
#[cfg(unix)]
pub fn write_fake_mixer(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-amixer");
    std::fs::write(&path, format!("#!/bin/sh\n{}", body)).expect("failed to write fake mixer");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("failed to chmod fake mixer");
    path
}

pub fn invocation(stdout: &str) -> Invocation {
    Invocation {
        error: None,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

/// Output of `amixer -D pulse set Capture toggle` on a stereo PulseAudio source.
pub fn amixer_output(left: &str, right: &str) -> String {
    format!(
        "Simple mixer control 'Capture',0\n  \
         Capabilities: cvolume cswitch\n  \
         Capture channels: Front Left - Front Right\n  \
         Limits: Capture 0 - 65536\n  \
         Front Left: Capture 65536 [100%] [{}]\n  \
         Front Right: Capture 65536 [100%] [{}]\n",
        left, right
    )
}
