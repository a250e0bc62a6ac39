//! Transcript line splitting.

/// Split text into lines, treating `\n`, `\r\n` and a lone `\r` as line breaks.
///
/// Terminators are not included, and a final terminator does not start an
/// extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_line_endings() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_trailing_terminator_adds_no_line() {
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\r"), vec!["a"]);
        assert_eq!(split_lines("a\r\n"), vec!["a"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_blank_lines_are_kept() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\r\r\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_multibyte_text_is_not_split() {
        assert_eq!(split_lines("2024年5月1日\r田中"), vec!["2024年5月1日", "田中"]);
    }
}
