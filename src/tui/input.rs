use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::pass::charset::CharClass;
use crate::terminal::{RawModeGuard, flush};

/// What a key press asks the TUI to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    LengthUp,
    LengthDown,
    EditLength,
    Toggle(CharClass),
    Generate,
    Copy,
    SelectUp,
    SelectDown,
    CopySelected,
    ClearHistory,
}

pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => Command::LengthUp,
        KeyCode::Left | KeyCode::Char('-') => Command::LengthDown,
        KeyCode::Char('e') => Command::EditLength,
        KeyCode::Char('1') => Command::Toggle(CharClass::Lowercase),
        KeyCode::Char('2') => Command::Toggle(CharClass::Uppercase),
        KeyCode::Char('3') => Command::Toggle(CharClass::Numbers),
        KeyCode::Char('4') => Command::Toggle(CharClass::Special),
        KeyCode::Enter | KeyCode::Char('g') => Command::Generate,
        KeyCode::Char('c') => Command::Copy,
        KeyCode::Up | KeyCode::Char('k') => Command::SelectUp,
        KeyCode::Down | KeyCode::Char('j') => Command::SelectDown,
        KeyCode::Char('y') => Command::CopySelected,
        KeyCode::Char('x') => Command::ClearHistory,
        _ => return None,
    };
    Some(command)
}

/// Move the history cursor towards older entries. `None` means no entry is
/// selected; moving up from there selects the newest.
pub fn select_prev(selected: Option<usize>, len: usize) -> Option<usize> {
    match selected {
        _ if len == 0 => None,
        None => Some(len),
        Some(i) => Some(i.saturating_sub(1).clamp(1, len)),
    }
}

/// Move the history cursor towards newer entries, deselecting past the end.
pub fn select_next(selected: Option<usize>, len: usize) -> Option<usize> {
    match selected {
        Some(i) if i < len => Some(i + 1),
        _ => None,
    }
}

/// Read a number with in-place editing. `None` when cancelled.
/// Input is capped at `max`.
pub fn get_numeric_input(prompt: &str, initial_value: usize, max: usize) -> Option<usize> {
    let mut digits = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };
    let mut cursor_pos = digits.len() + 1; // 1-based: 1 = before first digit
    let mut cancelled = false;

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return None,
    };

    print!("{}: {}", prompt, digits);
    flush();

    let mut last_display_len = digits.len();

    loop {
        match read() {
            Ok(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
                match key_event.code {
                    KeyCode::Char('c') | KeyCode::Char('q')
                        if key_event.modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        digits.clear();
                        cursor_pos = 1;
                    }
                    KeyCode::Enter => {
                        break;
                    }
                    KeyCode::Backspace => {
                        if cursor_pos > 1 {
                            cursor_pos -= 1;
                            digits.remove(cursor_pos - 1);
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_pos <= digits.len() {
                            digits.remove(cursor_pos - 1);
                        }
                    }
                    KeyCode::Left => {
                        if cursor_pos > 1 {
                            cursor_pos -= 1;
                        }
                    }
                    KeyCode::Right => {
                        if cursor_pos < digits.len() + 1 {
                            cursor_pos += 1;
                        }
                    }
                    KeyCode::Home => {
                        cursor_pos = 1;
                    }
                    KeyCode::End => {
                        cursor_pos = digits.len() + 1;
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        let mut candidate = digits.clone();
                        candidate.insert(cursor_pos - 1, c);
                        if candidate.parse::<usize>().is_ok_and(|n| n <= max) {
                            digits = candidate;
                            cursor_pos += 1;
                        }
                    }
                    _ => {}
                }

                print!("\r{}: {}", prompt, " ".repeat(last_display_len + 1));
                print!("\r{}: {}", prompt, digits);
                last_display_len = digits.len();
                print!("\x1b[{}G", prompt.len() + 2 + cursor_pos);
                flush();
            }
            Err(_) => break,
            _ => {}
        }
    }

    drop(_guard);
    print!("\r\n");
    flush();

    if cancelled || digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}
