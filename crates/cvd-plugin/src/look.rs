//! Look activation.
//!
//! A "look" is a `.cube` LUT the compositor applies to everything on
//! screen. Activation is delegated to a [`LookBackend`]; [`Gamescope`]
//! drives `gamescopectl`.

use crate::{PluginError, PluginResult};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

/// Runtime directory used when the environment does not provide one.
pub const DEFAULT_XDG_RUNTIME_DIR: &str = "/run/user/1000";

/// Result of one activation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookOutcome {
    /// Exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured diagnostic output.
    pub stderr: String,
}

impl LookOutcome {
    /// Outcome of a successful call with no output.
    pub fn ok() -> Self {
        Self {
            code: Some(0),
            ..Self::default()
        }
    }

    /// Whether the tool exited with status 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turns a failed outcome into [`PluginError::Look`], logging it at
    /// `warn` level.
    pub fn check(self) -> PluginResult<Self> {
        if self.success() {
            return Ok(self);
        }
        let stderr = self.stderr.trim().to_string();
        warn!(code = ?self.code, stderr = %stderr, "set_look failed");
        Err(PluginError::Look {
            code: self.code,
            stderr,
        })
    }
}

/// Applies or clears the active look.
pub trait LookBackend {
    /// Activates the LUT at `path`, or resets to no look when `None`.
    ///
    /// Returns `Err` only when the call could not be made; a tool that ran
    /// and failed is reported through [`LookOutcome::code`].
    fn set_look(&self, path: Option<&Path>) -> PluginResult<LookOutcome>;
}

/// `gamescopectl set_look [path]`.
#[derive(Debug, Clone)]
pub struct Gamescope {
    program: PathBuf,
}

impl Default for Gamescope {
    fn default() -> Self {
        Self {
            program: PathBuf::from("gamescopectl"),
        }
    }
}

impl Gamescope {
    /// Uses `gamescopectl` from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a specific executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Builds the command without running it.
    ///
    /// `LD_LIBRARY_PATH` is cleared so a host process's bundled libraries
    /// don't leak into the tool, and `XDG_RUNTIME_DIR` is filled in when
    /// missing since the tool needs it to find the display.
    pub fn command(&self, path: Option<&Path>) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("set_look");
        if let Some(path) = path {
            cmd.arg(path);
        }
        cmd.env("LD_LIBRARY_PATH", "");
        if env::var_os("XDG_RUNTIME_DIR").is_none_or(|v| v.is_empty()) {
            cmd.env("XDG_RUNTIME_DIR", OsString::from(DEFAULT_XDG_RUNTIME_DIR));
        }
        cmd
    }
}

impl LookBackend for Gamescope {
    fn set_look(&self, path: Option<&Path>) -> PluginResult<LookOutcome> {
        match path {
            Some(p) => info!(path = %p.display(), "setting look"),
            None => info!("resetting look"),
        }

        let output = self.command(path).output()?;
        let outcome = LookOutcome {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!(code = ?outcome.code, "set_look exit code");
        debug!(stderr = %outcome.stderr.trim(), "set_look stderr");
        debug!(stdout = %outcome.stdout.trim(), "set_look stdout");

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn args(cmd: &Command) -> Vec<&OsStr> {
        cmd.get_args().collect()
    }

    fn env_value<'a>(cmd: &'a Command, key: &str) -> Option<Option<&'a OsStr>> {
        cmd.get_envs().find(|(k, _)| *k == OsStr::new(key)).map(|(_, v)| v)
    }

    #[test]
    fn command_with_path() {
        let cmd = Gamescope::new().command(Some(Path::new("/tmp/lut.cube")));
        assert_eq!(cmd.get_program(), OsStr::new("gamescopectl"));
        assert_eq!(args(&cmd), [OsStr::new("set_look"), OsStr::new("/tmp/lut.cube")]);
        assert_eq!(env_value(&cmd, "LD_LIBRARY_PATH"), Some(Some(OsStr::new(""))));
    }

    #[test]
    fn reset_has_no_path_argument() {
        let cmd = Gamescope::with_program("/usr/bin/gamescopectl").command(None);
        assert_eq!(cmd.get_program(), OsStr::new("/usr/bin/gamescopectl"));
        assert_eq!(args(&cmd), [OsStr::new("set_look")]);
    }

    #[test]
    fn outcome_check() {
        assert!(LookOutcome::ok().check().is_ok());

        let failed = LookOutcome {
            code: Some(2),
            stdout: String::new(),
            stderr: "cannot connect\n".into(),
        };
        assert!(!failed.success());
        match failed.check() {
            Err(PluginError::Look { code, stderr }) => {
                assert_eq!(code, Some(2));
                assert_eq!(stderr, "cannot connect");
            }
            other => panic!("unexpected: {other:?}"),
        }

        let killed = LookOutcome::default();
        assert!(!killed.success());
    }

    /// Shared buffer the test subscriber writes into.
    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_check_logs_warning() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            assert!(LookOutcome::ok().check().is_ok());
            let failed = LookOutcome {
                code: Some(3),
                stdout: String::new(),
                stderr: "no display\n".into(),
            };
            assert!(failed.check().is_err());
        });

        let log = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(log.lines().count(), 1, "{log}");
        assert!(log.contains("WARN"), "{log}");
        assert!(log.contains("set_look failed"), "{log}");
        assert!(log.contains("code=Some(3)"), "{log}");
        assert!(log.contains("stderr=no display"), "{log}");
    }

    #[test]
    fn missing_program_is_io_error() {
        let backend = Gamescope::with_program("/nonexistent/gamescopectl");
        assert!(matches!(backend.set_look(None), Err(PluginError::Io(_))));
    }

    #[cfg(unix)]
    #[test]
    fn captures_exit_code() {
        // `true` and `false` ignore their arguments.
        let ok = Gamescope::with_program("true").set_look(None).unwrap();
        assert!(ok.success());

        let failed = Gamescope::with_program("false").set_look(None).unwrap();
        assert_eq!(failed.code, Some(1));
    }
}
