use crate::app::View;
use crate::terminal::{DIM, Frame, GREEN, RESET, REVERSE, UNDERLINE, console_width};

/// History rows shown at once.
const HISTORY_ROWS: usize = 10;
/// Characters of password per box line.
const PASSWORD_WRAP: usize = 60;
const ENTRY_WIDTH: usize = 64;

pub fn render(view: &View<'_>, selected: Option<usize>) -> Frame {
    let mut frame = Frame::new();

    frame
        .top("Passmint")
        .line(&format!(
            "Password length: {UNDERLINE}{}{RESET}   {DIM}[←/→] adjust  [e] edit{RESET}",
            view.length
        ))
        .rule();

    for (n, (class, checked)) in view.options.iter().enumerate() {
        let mark = if *checked { "x" } else { " " };
        frame.line(&format!("[{mark}] {}) {}", n + 1, class.label()));
    }

    frame.rule();
    let password: Vec<char> = view.password.chars().collect();
    if password.is_empty() {
        frame.line(&format!("{DIM}(no password){RESET}"));
    }
    for chunk in password.chunks(PASSWORD_WRAP) {
        let chunk: String = chunk.iter().collect();
        frame.line(&format!("{REVERSE}{chunk}{RESET}"));
    }
    frame
        .line(&format!(
            "{DIM}Entropy: {:.1} bits ({}){RESET}",
            view.entropy_bits, view.strength
        ))
        .bottom();

    frame.top("History");
    if view.history.is_empty() {
        frame.line(&format!("{DIM}(empty){RESET}"));
    }
    let (start, end) = history_window(view.history.len(), selected);
    for entry in &view.history[start..end] {
        let text = truncate(&entry.to_string(), ENTRY_WIDTH);
        if selected == Some(entry.index) {
            frame.line(&format!("> {REVERSE}{text}{RESET}"));
        } else {
            frame.line(&format!("  {text}"));
        }
    }
    frame.bottom();

    match view.notification {
        Some(message) => frame.line_center(&format!("{GREEN}{message}{RESET}")),
        None => frame.blank(),
    };
    frame.line_center(&format!(
        "{DIM}[g] gen  [c] copy  [↑/↓] select  [y] copy sel  [x] clear  [q] quit{RESET}"
    ));

    frame
}

/// Slice of history to display: the newest rows, or a window that keeps the
/// selected entry in view.
fn history_window(len: usize, selected: Option<usize>) -> (usize, usize) {
    let end = match selected {
        Some(s) if s > HISTORY_ROWS => s.min(len),
        Some(_) => len.min(HISTORY_ROWS),
        None => len,
    };
    (end.saturating_sub(HISTORY_ROWS), end)
}

fn truncate(text: &str, width: usize) -> String {
    if console_width(text) <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

pub fn print_help() {
    help_frame().print();
    println!();
}

fn help_frame() -> Frame {
    let mut frame = Frame::new();
    frame
        .top("Passmint")
        .line_center("Password generator with remembered settings")
        .line("")
        .line("MODES:")
        .line("  1) Interactive: Run without arguments. Adjust length and")
        .line("     character classes, generate, copy and browse history.")
        .line("  2) Client: Pass flags (e.g. -l 20 -n 5) to print passwords")
        .line("     built from the saved settings.")
        .line("")
        .line("USAGE:")
        .line("  passmint [OPTIONS]")
        .line("")
        .line("OPTIONS:")
        .opt("  -l, --length <N>", "Characters per password, 1 to 512 (default: 12)")
        .opt("  -n, --number <N>", "How many passwords to print, 1 to 10000")
        .opt("      --only <LIST>", "Comma separated classes: lowercase, uppercase, numbers, special")
        .opt("      --no-special", "Drop the special class from the selection")
        .opt("  -b, --board", "Copy the generated passwords to the clipboard instead of printing")
        .opt("  -s, --save", "Store the resulting length and classes as defaults")
        .opt("  -q, --quiet", "Suppress everything but passwords and errors")
        .opt("  -h, --help", "Display this help message")
        .opt("  -v, --version", "Display version")
        .line("")
        .line("INTERACTIVE KEYS:")
        .opt("  ←/→ or -/+", "Change length by one")
        .opt("  e", "Type a length")
        .opt("  1-4", "Toggle lowercase / uppercase / numbers / special")
        .opt("  Enter or g", "Generate")
        .opt("  c", "Copy current password")
        .opt("  ↑/↓ then y", "Copy a history entry")
        .opt("  x", "Clear history")
        .opt("  q or Esc", "Quit")
        .line("")
        .line("ENVIRONMENT:")
        .opt("  PASSMINT_CONFIG_DIR", "Settings and log directory (default ~/.config/passmint)")
        .opt("  PASSMINT_LOG", "Log filter, e.g. debug (default warn)")
        .bottom();
    frame
}
