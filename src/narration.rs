// Narration sink: the only place demo output leaves the crate.
// Model code writes lines here; tests swap in `RecordingNarrator`.

use colored::Colorize;

pub trait Narrator {
    fn narrate(&mut self, line: &str);
}

impl<N: Narrator + ?Sized> Narrator for &mut N {
    fn narrate(&mut self, line: &str) {
        (**self).narrate(line);
    }
}

/// Writes every line to stdout. Header and verdict lines get colour.
#[derive(Debug, Default)]
pub struct ConsoleNarrator;

impl ConsoleNarrator {
    pub fn new() -> Self {
        ConsoleNarrator
    }
}

impl Narrator for ConsoleNarrator {
    fn narrate(&mut self, line: &str) {
        if line.starts_with("===") || line.starts_with("DEMONSTRATION") {
            println!("{}", line.bold().cyan());
        } else if line.starts_with("PROBLEM") {
            println!("{}", line.red());
        } else if line.starts_with("SUCCESS") {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
}

/// Keeps lines in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingNarrator {
    lines: Vec<String>,
}

impl RecordingNarrator {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl Narrator for RecordingNarrator {
    fn narrate(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn narrate(&mut self, _line: &str) {}
}
