//! Plain-text normalization applied to clipboard content before it is
//! compared or translated.

/// Strip carriage returns and collapse embedded newlines to single spaces,
/// so multi-line copies translate as one paragraph.
pub fn normalize(text: &str) -> String {
    if !text.contains('\n') && !text.contains('\r') {
        return text.to_string();
    }
    text.replace('\r', "").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_line_breaks_to_spaces() {
        assert_eq!(normalize("a\r\nb\nc"), "a b c");
    }

    #[test]
    fn leaves_single_line_text_untouched() {
        assert_eq!(normalize("hello world"), "hello world");
    }

    #[test]
    fn strips_bare_carriage_returns() {
        assert_eq!(normalize("a\rb"), "ab");
    }

    #[test]
    fn handles_empty_text() {
        assert_eq!(normalize(""), "");
    }
}
