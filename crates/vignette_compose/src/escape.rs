//! Escaping caption text for the drawtext filter graph.

/// Characters that are syntactically significant inside a drawtext option
/// value: the filter-graph separators and expansion characters, plus the
/// quote and escape characters themselves.
const METACHARS: &[char] = &['\\', '\'', ':', '%', ',', ';', '[', ']', '='];

/// Backslash-escape every filter-graph metacharacter in `text`.
///
/// Treats escaping as whitelist-negative: any character in the metachar set
/// is escaped, not just the colon and single quote. Backslash itself is in
/// the set, so pre-escaped input comes out double-escaped rather than
/// silently merging.
///
/// # Examples
///
/// ```
/// use vignette_compose::escape_drawtext;
///
/// assert_eq!(escape_drawtext("it's 10:30"), "it\\'s 10\\:30");
/// assert_eq!(escape_drawtext("plain text"), "plain text");
/// ```
pub fn escape_drawtext(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if METACHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_colon_and_quote_is_escaped() {
        let input = "Paris: the city of light, isn't it: yes";
        let escaped = escape_drawtext(input);

        let mut chars = escaped.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\\' {
                // Consume the escaped character.
                chars.next();
                continue;
            }
            assert_ne!(c, ':', "unescaped colon in {escaped}");
            assert_ne!(c, '\'', "unescaped quote in {escaped}");
        }
    }

    #[test]
    fn all_metachars_are_escaped() {
        assert_eq!(escape_drawtext("a=b"), "a\\=b");
        assert_eq!(escape_drawtext("50%"), "50\\%");
        assert_eq!(escape_drawtext("a,b;c"), "a\\,b\\;c");
        assert_eq!(escape_drawtext("[tag]"), "\\[tag\\]");
    }

    #[test]
    fn backslash_is_escaped_first_not_merged() {
        assert_eq!(escape_drawtext("a\\:b"), "a\\\\\\:b");
    }

    #[test]
    fn plain_text_is_untouched() {
        let input = "A short summary of the article";
        assert_eq!(escape_drawtext(input), input);
    }
}
