use ratatui::text::Line;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps plain text into lines no wider than `width` terminal columns.
///
/// Words wider than a full line are broken by character.
pub fn wrap_lines(text: &str, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut wrapped = Vec::new();

    for line in text.split('\n') {
        let mut current_line = String::new();
        let mut current_width = 0;

        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            wrapped.push(Line::from(""));
            continue;
        }

        for word in words {
            let word_width = word.width();
            let space_width = usize::from(current_width != 0);

            if current_width + space_width + word_width > width && !current_line.is_empty() {
                wrapped.push(Line::from(std::mem::take(&mut current_line)));
                current_width = 0;
            }

            if current_width > 0 {
                current_line.push(' ');
                current_width += 1;
            }

            if word_width <= width {
                current_line.push_str(word);
                current_width += word_width;
                continue;
            }

            for character in word.chars() {
                let character_width = character.width().unwrap_or(0);
                if current_width + character_width > width && !current_line.is_empty() {
                    wrapped.push(Line::from(std::mem::take(&mut current_line)));
                    current_width = 0;
                }
                current_line.push(character);
                current_width += character_width;
            }
        }

        if !current_line.is_empty() {
            wrapped.push(Line::from(current_line));
        }
    }

    wrapped
}

/// Returns the trailing part of `input` that fits in `width` columns, so the
/// cursor end of a long input stays visible.
pub fn input_tail(input: &str, width: usize) -> &str {
    let mut visible_width = 0;
    let mut start = input.len();

    for (index, character) in input.char_indices().rev() {
        let character_width = character.width().unwrap_or(0);
        if visible_width + character_width > width {
            break;
        }
        visible_width += character_width;
        start = index;
    }

    &input[start..]
}

/// Returns the spaces needed between `left` and `right` to push `right` to
/// the edge of a `width`-column row. Always at least one space.
pub fn gap_between(left: &str, right: &str, width: usize) -> String {
    let used = left.width() + right.width();

    " ".repeat(width.saturating_sub(used).max(1))
}
