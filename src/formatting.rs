//! Header text formatting
//!
//! Header editors and the Postman export represent a header list as
//! newline-joined "name: value" lines. These functions convert between that
//! text form and the structured list, and round-trip for lists with no
//! blank lines and no ": " inside a header name.

use crate::collection::Header;

/// Format a header list as newline-joined "name: value" lines
pub fn headers_to_header_string(headers: &[Header]) -> String {
    headers
        .iter()
        .map(|h| format!("{}: {}", h.name, h.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse newline-joined "name: value" lines into a header list
///
/// Blank lines are skipped. The value starts after the first ": "; a line
/// without the separator becomes a header with an empty value.
pub fn header_string_to_headers(text: &str) -> Vec<Header> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(": ") {
            Some((name, value)) => Header {
                name: name.to_string(),
                value: value.to_string(),
            },
            None => Header {
                name: line.to_string(),
                value: String::new(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(name: &str, value: &str) -> Header {
        Header {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_headers_to_header_string() {
        let headers = vec![
            header("Accept", "application/json"),
            header("X-Api-Key", "secret"),
        ];

        assert_eq!(
            headers_to_header_string(&headers),
            "Accept: application/json\nX-Api-Key: secret"
        );
    }

    #[test]
    fn test_empty_list_formats_to_empty_string() {
        assert_eq!(headers_to_header_string(&[]), "");
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let parsed = header_string_to_headers("Accept: text/html\n\nHost: example.com\n");
        assert_eq!(
            parsed,
            vec![header("Accept", "text/html"), header("Host", "example.com")]
        );
    }

    #[test]
    fn test_parse_splits_on_first_separator_only() {
        let parsed = header_string_to_headers("Referer: https://example.com/a: b");
        assert_eq!(parsed, vec![header("Referer", "https://example.com/a: b")]);
    }

    #[test]
    fn test_parse_line_without_separator() {
        let parsed = header_string_to_headers("X-Flag");
        assert_eq!(parsed, vec![header("X-Flag", "")]);
    }

    #[test]
    fn test_round_trip() {
        let headers = vec![
            header("Accept", "application/json"),
            header("Cache-Control", "no-cache, no-store"),
            header("X-Empty", ""),
        ];

        let text = headers_to_header_string(&headers);
        assert_eq!(header_string_to_headers(&text), headers);
    }
}
