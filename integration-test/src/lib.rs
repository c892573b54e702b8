//! Test driver for binary-level tests.
//!
//! Spawns a workspace binary with:
//! - stdin: closed
//! - stdout and stderr: pipes, drained by background threads so the child
//!   never blocks on a full pipe
//!
//! and checks the exit code once it finishes.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;

/// A running child process.
pub struct TestSession {
    child: Child,
    /// Captured stdout, populated by background thread.
    stdout_capture: Arc<Mutex<Vec<u8>>>,
    /// Captured stderr, populated by background thread.
    stderr_capture: Arc<Mutex<Vec<u8>>>,
    _stdout_thread: thread::JoinHandle<()>,
    _stderr_thread: thread::JoinHandle<()>,
}

impl TestSession {
    /// Spawn `binary` with the given arguments.
    ///
    /// `env` are additional environment variables to set.
    pub fn spawn(binary: &str, args: &[&str], env: &[(&str, &str)]) -> std::io::Result<TestSession> {
        Self::spawn_in(binary, args, env, None)
    }

    /// Like `spawn`, but with an optional working directory.
    pub fn spawn_in(
        binary: &str,
        args: &[&str],
        env: &[(&str, &str)],
        cwd: Option<&str>,
    ) -> std::io::Result<TestSession> {
        let mut cmd = Command::new(binary);
        cmd.args(args);
        for (k, v) in env {
            cmd.env(k, v);
        }
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let mut child = cmd.spawn()?;

        let stdout_pipe = child
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "no stdout pipe"))?;
        let stderr_pipe = child
            .stderr
            .take()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "no stderr pipe"))?;

        let stdout_capture = Arc::new(Mutex::new(Vec::new()));
        let stdout_thread = drain(stdout_pipe, Arc::clone(&stdout_capture), "stdout");
        let stderr_capture = Arc::new(Mutex::new(Vec::new()));
        let stderr_thread = drain(stderr_pipe, Arc::clone(&stderr_capture), "stderr");

        Ok(TestSession {
            child,
            stdout_capture,
            stderr_capture,
            _stdout_thread: stdout_thread,
            _stderr_thread: stderr_thread,
        })
    }

    /// Wait for the child to exit and assert the exit code.
    pub fn wait_exit(mut self, expected_code: i32) -> SessionOutput {
        let status = self.child.wait().expect("failed to wait for child");
        let code = status.code().unwrap_or(-1);

        // The drain threads finish once the child's pipes close.
        let _ = self._stdout_thread.join();
        let _ = self._stderr_thread.join();

        let stdout = String::from_utf8_lossy(&self.stdout_capture.lock().unwrap()).to_string();
        let stderr = String::from_utf8_lossy(&self.stderr_capture.lock().unwrap()).to_string();

        assert_eq!(
            code, expected_code,
            "expected exit code {expected_code}, got {code}\nstdout:\n{stdout}\nstderr:\n{stderr}"
        );

        SessionOutput { stdout, stderr }
    }
}

fn drain<R>(mut pipe: R, capture: Arc<Mutex<Vec<u8>>>, name: &'static str) -> thread::JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = [0u8; 4096];
        loop {
            match pipe.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    capture.lock().unwrap().extend_from_slice(&buf[..n]);
                }
                Err(e) => {
                    eprintln!("{name} drain error: {e}");
                    break;
                }
            }
        }
    })
}

/// Output captured from a completed session.
pub struct SessionOutput {
    pub stdout: String,
    pub stderr: String,
}

impl SessionOutput {
    /// Lines of stdout, without trailing newlines.
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    /// Lines of stderr, without trailing newlines.
    pub fn stderr_lines(&self) -> Vec<&str> {
        self.stderr.lines().collect()
    }
}

/// Run `binary` to completion and assert its exit code.
pub fn run(binary: &str, args: &[&str], env: &[(&str, &str)], expected_code: i32) -> SessionOutput {
    TestSession::spawn(binary, args, env)
        .unwrap_or_else(|e| panic!("failed to spawn {binary}: {e}"))
        .wait_exit(expected_code)
}
