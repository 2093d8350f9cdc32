//! Chronological record of every line read from and written to the user.

use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Newline-terminated lines, in the order they were recorded.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Writes the whole transcript to `path`, overwriting it. The buffer is kept.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, self.render())?;
        log::info!("saved {} transcript lines to {}", self.len(), path.display());
        Ok(())
    }
}
