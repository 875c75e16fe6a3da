//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers, and the frame buffer the TUI draws through.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const REVERSE: &str = "\x1b[7m";
pub const DIM: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}\x1b[?25h");
    flush();
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Lines of box-drawn output, built up and then written in one go.
///
/// The TUI writes frames while raw mode is on, where a bare `\n` does not
/// return the carriage, so [`Frame::draw`] ends lines with `\r\n`.
#[derive(Debug, Default)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Box top with optional title: ┌─ Title ───────────────────────────┐
    pub fn top(&mut self, title: &str) -> &mut Self {
        let line = if title.is_empty() {
            format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
            format!("┌{}{}┐", title_part, "─".repeat(remaining))
        };
        self.lines.push(line);
        self
    }

    /// Box content line: │ content                                        │
    pub fn line(&mut self, content: &str) -> &mut Self {
        let padding = INNER_WIDTH.saturating_sub(console_width(content));
        self.lines
            .push(format!("│ {}{} │", content, " ".repeat(padding)));
        self
    }

    /// Centered box content line: │          content          │
    pub fn line_center(&mut self, content: &str) -> &mut Self {
        let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.lines.push(format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ));
        self
    }

    /// Horizontal rule inside a box.
    pub fn rule(&mut self) -> &mut Self {
        self.lines.push(format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    /// Box bottom: └───────────────────────────────────────────────────────┘
    pub fn bottom(&mut self) -> &mut Self {
        self.lines.push(format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    /// Help option with flag and description, wrapping the description.
    pub fn opt(&mut self, flag: &str, desc: &str) -> &mut Self {
        let flag_col = 27;
        let desc_col = INNER_WIDTH - flag_col;

        let flag_padded = format!("{:<width$}", flag, width = flag_col);
        let lines = wrap_words(desc, desc_col);

        let first = lines.first().map(String::as_str).unwrap_or("");
        self.lines.push(format!(
            "│ {}{}{} │",
            flag_padded,
            first,
            " ".repeat(desc_col.saturating_sub(first.len()))
        ));

        let indent = " ".repeat(flag_col);
        for line in lines.iter().skip(1) {
            self.lines.push(format!(
                "│ {}{}{} │",
                indent,
                line,
                " ".repeat(desc_col.saturating_sub(line.len()))
            ));
        }
        self
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print in cooked mode.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    /// Clear the screen and write the frame (raw mode safe).
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(b"\x1b[2J\x1b[H")?;
        for line in &self.lines {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\x1b[K\r\n")?;
        }
        out.flush()
    }
}

fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_lines_have_fixed_width() {
        let mut frame = Frame::new();
        frame
            .top("Title")
            .line("plain")
            .line(&format!("{GREEN}colored{RESET}"))
            .line_center("mid")
            .rule()
            .bottom();

        for line in frame.lines() {
            assert_eq!(console_width(line), BOX_WIDTH, "{line:?}");
        }
    }

    #[test]
    fn long_descriptions_wrap() {
        let mut frame = Frame::new();
        frame.opt("  -l, --length <N>", &"word ".repeat(30));
        assert!(frame.lines().len() > 1);
        for line in frame.lines() {
            assert_eq!(console_width(line), BOX_WIDTH);
        }
    }

    #[test]
    fn draw_uses_carriage_returns() {
        let mut frame = Frame::new();
        frame.line("x");
        let mut out = Vec::new();
        frame.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("\x1b[K\r\n"));
    }
}
