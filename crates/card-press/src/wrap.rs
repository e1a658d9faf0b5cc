//! Greedy word wrapping for back-side card text
//!
//! Lines are filled word by word. A word joins the current line while the
//! line plus the word and its trailing space stays within the width limit;
//! otherwise the line is flushed and the word starts the next one. Width is
//! counted in characters, which pairs with the renderer's fixed line pitch.

/// Wrap `text` into lines of at most `max_line_width` characters.
///
/// Words are whitespace-delimited; runs of whitespace collapse to single
/// spaces. A single word longer than the limit gets its own over-long line
/// rather than being split. Output is deterministic for identical input.
pub fn wrap_text(text: &str, max_line_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + word_len + 1 > max_line_width {
            lines.push(current.trim_end().to_string());
            current.clear();
            current_len = 0;
        }

        current.push_str(word);
        current.push(' ');
        current_len += word_len + 1;
    }

    if current_len > 0 {
        lines.push(current.trim_end().to_string());
    }

    lines
}
