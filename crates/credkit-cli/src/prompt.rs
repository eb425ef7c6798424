//! Line-based prompts on a terminal.

use credkit_core::ports::Prompter;
use std::cell::RefCell;
use std::io::{BufRead, Write};

/// Prompter reading answers line by line. End of input cancels.
pub struct LinePrompter<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!("Failed to read input: {}", e);
                None
            }
        }
    }

    fn say(&self, text: &str) {
        let mut out = self.output.borrow_mut();
        // Nothing useful to do if the terminal is gone; the next read fails too.
        let _ = writeln!(out, "{text}");
        let _ = out.flush();
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output.into_inner()
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn prompt_for_text(&self, title: &str, initial: Option<&str>) -> Option<String> {
        match initial {
            Some(initial) => self.say(&format!("{title} [{initial}]:")),
            None => self.say(&format!("{title}:")),
        }
        let line = self.read_line()?;
        match initial {
            Some(initial) if line.is_empty() => Some(initial.to_string()),
            _ => Some(line),
        }
    }

    fn present_choice(
        &self,
        title: &str,
        cancel_label: &str,
        options: &[String],
    ) -> Option<String> {
        self.say(title);
        for (i, option) in options.iter().enumerate() {
            self.say(&format!("  {}) {}", i + 1, option));
        }
        self.say(&format!("  0) {cancel_label}"));

        let line = self.read_line()?;
        let picked = line
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i));
        Some(picked.cloned().unwrap_or_else(|| cancel_label.to_string()))
    }
}
