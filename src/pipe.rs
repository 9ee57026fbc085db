// Pipe to the external gnuplot process

use crate::PipeOptions;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};
use tracing::{debug, warn};

/// A running gnuplot process fed through its stdin.
///
/// Dropping the pipe closes stdin and waits for the process, so an early
/// return never leaves gnuplot blocked on a half-written script.
#[derive(Debug)]
pub struct GnuplotPipe {
    child: Child,
    stdin: Option<ChildStdin>,
}

impl GnuplotPipe {
    pub fn spawn(options: &PipeOptions) -> Result<Self> {
        let mut command = Command::new(&options.program);
        if options.persist {
            command.arg("-persist");
        }
        debug!(program = %options.program, persist = options.persist, "spawning plotter");

        let mut child = command
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| format!("Could not open pipe to '{}'", options.program))?;
        let stdin = child.stdin.take();
        Ok(Self { child, stdin })
    }

    /// Write the whole script and flush it.
    pub fn send(&mut self, script: &str) -> Result<()> {
        let stdin = self
            .stdin
            .as_mut()
            .context("Pipe to plotter is already closed")?;
        stdin
            .write_all(script.as_bytes())
            .context("Failed to write script to plotter")?;
        stdin.flush().context("Failed to flush script to plotter")?;
        Ok(())
    }

    /// Close stdin and wait for the process to exit.
    pub fn close(mut self) -> Result<ExitStatus> {
        self.release().context("Failed to wait for plotter")
    }

    fn release(&mut self) -> io::Result<ExitStatus> {
        drop(self.stdin.take());
        self.child.wait()
    }
}

impl Drop for GnuplotPipe {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            warn!("failed to release plotter process: {}", e);
        }
    }
}
