use std::process::{Command, Stdio};

pub const DEFAULT_PROGRAM: &str = "amixer";
pub const DEFAULT_DEVICE: &str = "pulse";
pub const DEFAULT_CONTROL: &str = "Capture";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixerCommand {
    pub program: String,
    pub device: String,
    pub control: String,
}

impl Default for MixerCommand {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            device: DEFAULT_DEVICE.to_string(),
            control: DEFAULT_CONTROL.to_string(),
        }
    }
}

impl MixerCommand {
    pub fn args(&self) -> Vec<&str> {
        vec!["-D", self.device.as_str(), "set", self.control.as_str(), "toggle"]
    }

    pub fn display(&self) -> String {
        let mut parts = vec![self.program.as_str()];
        parts.extend(self.args());
        parts.join(" ")
    }
}

/// Everything one run of the mixer produced. A failure to launch or a
/// non-zero exit lands in `error`; output captured before the exit is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub error: Option<String>,
    pub stdout: String,
    pub stderr: String,
}

pub fn run(cmd: &MixerCommand) -> Invocation {
    let output = match Command::new(&cmd.program)
        .args(cmd.args())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            return Invocation {
                error: Some(format!("failed to run {}: {}", cmd.display(), e)),
                ..Invocation::default()
            };
        }
    };

    let error = if output.status.success() {
        None
    } else {
        Some(format!(
            "{} failed (exit code: {})",
            cmd.display(),
            output
                .status
                .code()
                .map_or("signal".to_string(), |c| c.to_string()),
        ))
    };

    Invocation {
        error,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_command_is_literal() {
        let cmd = MixerCommand::default();
        assert_eq!(cmd.display(), "amixer -D pulse set Capture toggle");
        assert_eq!(cmd.args(), ["-D", "pulse", "set", "Capture", "toggle"]);
    }

    #[test]
    fn missing_program_reports_launch_error() {
        let cmd = MixerCommand {
            program: "mic-toggle-no-such-mixer".to_string(),
            ..MixerCommand::default()
        };
        let inv = run(&cmd);
        let err = inv.error.expect("launch should fail");
        assert!(
            err.starts_with("failed to run mic-toggle-no-such-mixer -D pulse"),
            "unexpected error: {}",
            err
        );
        assert!(inv.stdout.is_empty());
        assert!(inv.stderr.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_and_stderr() {
        let tmp = tempfile::tempdir().unwrap();
        let script = crate::testutil::write_fake_mixer(
            tmp.path(),
            "echo \"args: $*\"\necho 'amixer: warning' >&2\n",
        );
        let cmd = MixerCommand {
            program: script.display().to_string(),
            ..MixerCommand::default()
        };
        assert_eq!(
            run(&cmd),
            Invocation {
                error: None,
                stdout: "args: -D pulse set Capture toggle\n".to_string(),
                stderr: "amixer: warning\n".to_string(),
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_keeps_output() {
        let tmp = tempfile::tempdir().unwrap();
        let script = crate::testutil::write_fake_mixer(
            tmp.path(),
            "echo \"Capture [off]\"\necho 'Unable to find simple control' >&2\nexit 3\n",
        );
        let cmd = MixerCommand {
            program: script.display().to_string(),
            ..MixerCommand::default()
        };
        let inv = run(&cmd);
        let err = inv.error.expect("non-zero exit should be an error");
        assert!(err.ends_with("failed (exit code: 3)"), "got: {}", err);
        assert_eq!(inv.stdout, "Capture [off]\n");
        assert_eq!(inv.stderr, "Unable to find simple control\n");
    }

    #[cfg(unix)]
    #[test]
    fn killed_by_signal_reports_signal() {
        let tmp = tempfile::tempdir().unwrap();
        let script = crate::testutil::write_fake_mixer(tmp.path(), "kill -9 $$\n");
        let cmd = MixerCommand {
            program: script.display().to_string(),
            ..MixerCommand::default()
        };
        let inv = run(&cmd);
        let err = inv.error.expect("killed mixer should be an error");
        assert!(err.ends_with("(exit code: signal)"), "got: {}", err);
    }

    #[cfg(unix)]
    #[test]
    fn invalid_utf8_output_is_decoded_lossily() {
        let tmp = tempfile::tempdir().unwrap();
        let script = crate::testutil::write_fake_mixer(
            tmp.path(),
            "printf '\\377[off]\\n'\nprintf '\\376\\n' >&2\n",
        );
        let cmd = MixerCommand {
            program: script.display().to_string(),
            ..MixerCommand::default()
        };
        let inv = run(&cmd);
        assert_eq!(inv.error, None);
        assert!(inv.stdout.contains("[off]"), "got: {:?}", inv.stdout);
        assert!(inv.stdout.starts_with('\u{FFFD}'));
        assert_eq!(inv.stderr, "\u{FFFD}\n");

        let result = crate::toggle::evaluate(cmd.display(), inv);
        assert_eq!(result.states, vec![crate::toggle::CaptureState::Muted]);
    }
}
