use ethio_core::transliterate::{transliterate_full_text, Keystroke, TransliterationState};
use ethio_core::unicode::count_non_ethiopic;

use super::pad;

/// `<` stands for backspace; every other character is a keystroke.
pub fn parse_keys(sequence: &str) -> Vec<Keystroke> {
    sequence
        .chars()
        .map(|c| match c {
            '<' => Keystroke::Backspace,
            c => Keystroke::Char(c),
        })
        .collect()
}

/// Replay a key sequence, one line per keystroke with the resulting buffers.
pub fn render_keys(sequence: &str) -> Vec<String> {
    let mut state = TransliterationState::new();
    let mut lines = Vec::new();
    for key in parse_keys(sequence) {
        state = state.apply(key);
        let label = match key {
            Keystroke::Char(' ') => "' '".to_string(),
            Keystroke::Char(c) => c.to_string(),
            Keystroke::Backspace => "⌫".to_string(),
        };
        lines.push(format!(
            "{}  {}  [{}]",
            pad(&label, 3),
            pad(state.rendered(), 12),
            state.latin()
        ));
    }
    lines
}

pub fn transliterate(text: &str) {
    let rendered = transliterate_full_text(text);
    println!("{rendered}");
    let unmapped = count_non_ethiopic(&rendered);
    if unmapped > 0 {
        eprintln!("note: {unmapped} character(s) passed through unchanged");
    }
}

pub fn keys(sequence: &str) {
    for line in render_keys(sequence) {
        println!("{line}");
    }
}
