//! Minimal quote-aware CSV line handling

/// Split text into lines on `\n` or `\r\n`
///
/// Mirrors a `\r?\n` split: a trailing newline yields a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Split one CSV line into trimmed cells
///
/// `"` toggles quoting, `""` inside quotes is a literal quote, and commas
/// inside quotes do not separate cells.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    cells.push(current.trim().to_string());
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_mixed_endings() {
        assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_split_plain() {
        assert_eq!(split_csv_line("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_quoted_comma() {
        assert_eq!(
            split_csv_line(r#"ASUS,"Zenbook 14, OLED",Ultraportable"#),
            vec!["ASUS", "Zenbook 14, OLED", "Ultraportable"]
        );
    }

    #[test]
    fn test_split_escaped_quote() {
        assert_eq!(
            split_csv_line(r#""15.6"" FHD",x"#),
            vec![r#"15.6" FHD"#, "x"]
        );
    }

    #[test]
    fn test_split_empty_cells() {
        assert_eq!(split_csv_line(",,"), vec!["", "", ""]);
        assert_eq!(split_csv_line(""), vec![""]);
    }

    #[test]
    fn test_split_unterminated_quote_swallows_rest() {
        assert_eq!(split_csv_line(r#"a,"b,c"#), vec!["a", "b,c"]);
    }
}
