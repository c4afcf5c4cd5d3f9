//! Cluster tool subprocesses
//!
//! Runs `kubectl`/`helm` with an optional stdin body and forwards their
//! stdout/stderr line by line to a [`Reporter`]. Feeding and forwarding happen
//! on scoped threads so a large manifest stream never blocks on a full pipe.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::process::{Command, Stdio};
use std::thread;

use crate::domain::ports::Reporter;
use crate::error::DeployerError;

/// A fully built cluster tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Command line as shown in messages and errors
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run to completion, streaming `input` to stdin and output to `reporter`.
    ///
    /// A non-zero exit becomes [`DeployerError::CommandFailed`] carrying the
    /// last non-empty stderr line.
    pub fn run(&self, input: Option<&str>, reporter: &dyn Reporter) -> Result<(), DeployerError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| DeployerError::Spawn {
                command: self.display(),
                source,
            })?;

        let stdin = child.stdin.take();
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let (fed, last_stderr) = thread::scope(|scope| {
            let feeder = scope.spawn(move || feed(stdin, input));
            let forwarder = scope.spawn(move || forward(stdout, reporter));
            let last_stderr = forward(stderr, reporter);
            let fed = feeder
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            let _ = forwarder.join();
            (fed, last_stderr)
        });

        let status = child.wait()?;
        if !status.success() {
            return Err(DeployerError::CommandFailed {
                command: self.display(),
                code: status.code(),
                stderr: last_stderr,
            });
        }
        fed?;
        Ok(())
    }

    /// Run to completion and return stdout; nothing is forwarded
    pub fn capture(&self) -> Result<String, DeployerError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| DeployerError::Spawn {
                command: self.display(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DeployerError::CommandFailed {
                command: self.display(),
                code: output.status.code(),
                stderr: last_line(&stderr),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn feed<W: Write>(stdin: Option<W>, input: Option<&str>) -> io::Result<()> {
    let (Some(mut stdin), Some(input)) = (stdin, input) else {
        return Ok(());
    };
    // The tool may exit before reading everything; its exit status tells the story
    match stdin.write_all(input.as_bytes()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn forward<R: Read>(stream: Option<R>, reporter: &dyn Reporter) -> Option<String> {
    let stream = stream?;
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    let mut last = None;
    // Drain to EOF even past undecodable bytes so the tool never hits a closed pipe
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end();
        if line.is_empty() {
            continue;
        }
        reporter.output(line);
        last = Some(line.to_string());
    }
    last
}

fn last_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .last()
        .map(str::to_string)
}
