//! Background process management for the `fz` binary.
//!
//! `fz` reads from stdin until it is interrupted, so tests need to:
//! - spawn it with piped stdin/stdout/stderr
//! - feed status lines while it runs
//! - deliver a signal and collect the output

use std::io::{Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// A background process handle.
pub struct BackgroundProcess {
    child: Child,
}

/// Everything a finished process wrote, plus its exit status.
#[derive(Debug)]
pub struct Finished {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl BackgroundProcess {
    /// Spawn a new background process with piped stdin, stdout and stderr.
    pub fn spawn_piped(mut command: Command) -> std::io::Result<Self> {
        command.stdin(Stdio::piped());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());
        let child = command.spawn()?;
        Ok(Self { child })
    }

    /// Write one line to the process's stdin.
    pub fn send_line(&mut self, line: &str) -> std::io::Result<()> {
        let stdin = self.child.stdin.as_mut().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin already closed")
        })?;
        writeln!(stdin, "{}", line)?;
        stdin.flush()
    }

    /// Close stdin so the process observes end of input.
    pub fn close_stdin(&mut self) {
        drop(self.child.stdin.take());
    }

    /// Deliver SIGINT, as a terminal does on Ctrl+C.
    #[cfg(unix)]
    pub fn interrupt(&self) -> std::io::Result<()> {
        self.signal(libc::SIGINT)
    }

    /// Deliver an arbitrary signal.
    #[cfg(unix)]
    pub fn signal(&self, signal: i32) -> std::io::Result<()> {
        let pid = self.child.id() as libc::pid_t;
        // SAFETY: kill(2) has no memory-safety preconditions.
        let result = unsafe { libc::kill(pid, signal) };
        if result == 0 {
            Ok(())
        } else {
            Err(std::io::Error::last_os_error())
        }
    }

    /// Wait for the process to exit with a timeout.
    pub fn wait_timeout(&mut self, timeout: Duration) -> std::io::Result<Option<ExitStatus>> {
        // Simple polling implementation
        let start = Instant::now();
        loop {
            match self.child.try_wait()? {
                Some(status) => return Ok(Some(status)),
                None => {
                    if start.elapsed() > timeout {
                        return Ok(None);
                    }
                    std::thread::sleep(Duration::from_millis(50));
                }
            }
        }
    }

    /// Wait for exit and collect everything written to stdout and stderr.
    ///
    /// Returns `None` if the process is still running after `timeout`.
    pub fn finish(mut self, timeout: Duration) -> std::io::Result<Option<Finished>> {
        let Some(status) = self.wait_timeout(timeout)? else {
            return Ok(None);
        };

        let mut stdout = String::new();
        if let Some(out) = self.child.stdout.as_mut() {
            out.read_to_string(&mut stdout)?;
        }

        let mut stderr = String::new();
        if let Some(err) = self.child.stderr.as_mut() {
            err.read_to_string(&mut stderr)?;
        }

        Ok(Some(Finished {
            status,
            stdout,
            stderr,
        }))
    }
}

impl Drop for BackgroundProcess {
    fn drop(&mut self) {
        // Ensure process is killed when dropped
        let _ = self.child.kill();
    }
}
