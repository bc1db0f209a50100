//! User-facing output.
//!
//! Progress and success lines go to stdout, warnings and errors to stderr.
//! A buffered manager records lines instead, for tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum Sink {
    Std,
    Buffer(Arc<Mutex<Vec<String>>>),
}

/// Writes status lines for the packaging run
#[derive(Debug, Clone)]
pub struct OutputManager {
    quiet: bool,
    sink: Sink,
}

impl OutputManager {
    /// Create an output manager writing to the standard streams
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            sink: Sink::Std,
        }
    }

    /// Create an output manager that records lines in memory
    pub fn buffered() -> Self {
        Self {
            quiet: false,
            sink: Sink::Buffer(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// Lines recorded by a buffered manager
    pub fn lines(&self) -> Vec<String> {
        match &self.sink {
            Sink::Buffer(lines) => lines.lock().map(|l| l.clone()).unwrap_or_default(),
            Sink::Std => Vec::new(),
        }
    }

    fn out(&self, line: &str) -> io::Result<()> {
        match &self.sink {
            Sink::Std => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", line)?;
                stdout.flush()
            }
            Sink::Buffer(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(line.to_string());
                }
                Ok(())
            }
        }
    }

    fn err(&self, line: &str) -> io::Result<()> {
        match &self.sink {
            Sink::Std => writeln!(io::stderr().lock(), "{}", line),
            Sink::Buffer(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(line.to_string());
                }
                Ok(())
            }
        }
    }

    /// Print a line regardless of verbosity (e.g. dry-run output)
    pub fn println(&self, message: &str) -> io::Result<()> {
        self.out(message)
    }

    /// Print a progress line
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.out(message)
    }

    /// Print a success line
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.out(message)
    }

    /// Print a warning
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.err(&format!("Warning: {}", message))
    }

    /// Print an error; never suppressed
    pub fn error(&self, message: &str) -> io::Result<()> {
        self.err(message)
    }
}
