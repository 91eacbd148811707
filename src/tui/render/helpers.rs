use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::util::unicode;

/// Rect of `percent_x` by `percent_y` of `area`, centered
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    centered_rect_fixed(width, height, area)
}

/// Rect of fixed size centered in `area`, clipped to it
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Word-wrap `text` into lines of at most `max_width` columns.
/// Every line (including the first) is prefixed with `indent`.
pub(super) fn wrap_text(indent: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_w = unicode::display_width(indent);
    let mut lines = Vec::new();
    let mut current = indent.to_string();
    let mut current_w = indent_w;

    for word in text.split_whitespace() {
        let word_w = unicode::display_width(word);
        let space = if current_w == indent_w { 0 } else { 1 };
        if current_w + space + word_w > max_width && current_w > indent_w {
            lines.push(std::mem::replace(&mut current, indent.to_string()));
            current_w = indent_w;
        }
        if current_w > indent_w {
            current.push(' ');
            current_w += 1;
        }
        current.push_str(word);
        current_w += word_w;
    }
    if current_w > indent_w || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_words() {
        let lines = wrap_text(" ", "Please select a task to delete.", 16);
        assert_eq!(lines, vec![" Please select a", " task to delete."]);
    }

    #[test]
    fn wrap_keeps_long_words_whole() {
        let lines = wrap_text("", "supercalifragilistic x", 5);
        assert_eq!(lines, vec!["supercalifragilistic", "x"]);
    }

    #[test]
    fn wrap_empty_text_yields_indent() {
        assert_eq!(wrap_text("  ", "", 10), vec!["  "]);
    }

    #[test]
    fn centered_fixed_clips_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect_fixed(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect_fixed(40, 40, area), area);
        assert_eq!(centered_rect(50, 50, area), Rect::new(5, 2, 10, 5));
    }
}
