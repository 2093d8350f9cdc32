//! Line-oriented terminal I/O that mirrors everything into the transcript.

use super::transcript::Transcript;
use crate::error::{SessionError, SessionResult};
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            transcript: Transcript::new(),
        }
    }

    /// Prints one line to the user.
    pub fn say(&mut self, line: &str) -> SessionResult<()> {
        self.transcript.record(line);
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    /// Blocks until a line is available and returns it trimmed.
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn read_line(&mut self) -> SessionResult<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(SessionError::InputClosed);
        }
        let raw = String::from_utf8_lossy(&buf);
        let line = raw.trim_end_matches(['\n', '\r']);
        self.transcript.record(line);
        Ok(line.trim().to_string())
    }

    pub fn prompt(&mut self, question: &str) -> SessionResult<String> {
        self.say(question)?;
        self.read_line()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}
