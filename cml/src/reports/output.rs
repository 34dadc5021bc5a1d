//! Output trait for rendering reports to different targets.

/// Target output for reports.
///
/// Reports describe *what* to output with the semantic methods; an
/// implementation only decides where lines go.
pub trait Output {
    /// Write one line to the primary stream.
    fn line(&mut self, text: &str);

    /// Write one line to the diagnostic stream.
    fn diagnostic(&mut self, text: &str);

    fn section(&mut self, name: &str) {
        self.line(&format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(&format!("  {}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.line(&format!("  - {}", text));
    }

    /// A file or entry that was created.
    fn added_item(&mut self, text: &str) {
        self.line(&format!("  + {}", text));
    }

    fn divider(&mut self, label: &str) {
        self.line(&format!("── {} ──", label));
    }

    /// Multi-line text, written as-is.
    fn preformatted(&mut self, text: &str) {
        self.line(text);
    }

    fn newline(&mut self) {
        self.line("");
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Stdout for report lines, stderr for diagnostics.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn diagnostic(&mut self, text: &str) {
        eprintln!("{}", text);
    }
}

/// Collects rendered lines, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

#[cfg(test)]
impl RecordingOutput {
    pub fn text(&self) -> String {
        self.stdout.join("\n")
    }
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn line(&mut self, text: &str) {
        self.stdout.push(text.to_string());
    }

    fn diagnostic(&mut self, text: &str) {
        self.stderr.push(text.to_string());
    }
}
