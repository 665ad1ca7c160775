use serde::Serialize;
use std::fmt;

use crate::mixer::{self, Invocation, MixerCommand};

const ON_TOKEN: &str = "[on]";
const OFF_TOKEN: &str = "[off]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaptureState {
    Unmuted,
    Muted,
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureState::Unmuted => write!(f, "Unmuted"),
            CaptureState::Muted => write!(f, "Muted"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ToggleResult {
    pub command: String,
    pub error: Option<String>,
    pub states: Vec<CaptureState>,
    pub stderr: Option<String>,
}

/// Runs the mixer once and reads the new capture state from its output.
pub fn toggle_mute(cmd: &MixerCommand, debug: bool) -> ToggleResult {
    if debug {
        eprintln!("[debug] toggle: running {}", cmd.display());
    }
    let inv = mixer::run(cmd);
    if debug {
        eprintln!(
            "[debug] toggle: error={:?} stdout={} bytes stderr={} bytes",
            inv.error,
            inv.stdout.len(),
            inv.stderr.len()
        );
    }
    evaluate(cmd.display(), inv)
}

/// Token checks are independent, so multi-channel output with mixed states
/// yields both `Unmuted` and `Muted`.
pub fn evaluate(command: String, inv: Invocation) -> ToggleResult {
    let mut states = Vec::new();
    if inv.stdout.contains(ON_TOKEN) {
        states.push(CaptureState::Unmuted);
    }
    if inv.stdout.contains(OFF_TOKEN) {
        states.push(CaptureState::Muted);
    }

    let stderr = if inv.stderr.is_empty() {
        None
    } else {
        Some(inv.stderr)
    };

    ToggleResult {
        command,
        error: inv.error,
        states,
        stderr,
    }
}

pub fn format_toggle_human(result: &ToggleResult) -> String {
    let mut lines = Vec::new();
    if let Some(error) = &result.error {
        lines.push(error.clone());
    }
    for state in &result.states {
        lines.push(state.to_string());
    }
    if let Some(stderr) = &result.stderr {
        lines.push(stderr.trim_end_matches('\n').to_string());
    }
    lines.join("\n")
}
