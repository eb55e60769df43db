//! Prompt templates for summarization and keyword extraction.

use vignette_core::MediaKind;

/// Prompt asking the model to condense the input text.
pub fn summary_prompt(text: &str) -> String {
    format!(
        "Summarize the following text in two or three sentences:\n{text}\nSummary:"
    )
}

/// Prompt asking the model for exactly one search keyword for the intent.
///
/// The intent steers the keyword towards a photo-search term for images or
/// a genre/mood term for music.
pub fn keyword_prompt(summary: &str, intent: MediaKind) -> String {
    let target = match intent {
        MediaKind::Image => "a stock-photo search",
        MediaKind::Music => "a music-track search",
    };
    format!(
        "From the following summary, return exactly one single-word keyword \
         best suited for {target}. Reply with the keyword only.\n\
         Summary: {summary}\nKeyword:"
    )
}

/// Reduce a raw model reply to a single trimmed keyword token.
///
/// Takes the first whitespace-separated token of the first non-empty line
/// and strips surrounding quotes and trailing punctuation. Returns `None`
/// if nothing usable remains.
pub fn first_token(raw: &str) -> Option<String> {
    let token = raw
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())?
        .split_whitespace()
        .next()?
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '`')
        .trim_end_matches(|c: char| c == '.' || c == ',' || c == ';' || c == ':');

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_token_trims_whitespace_and_quotes() {
        assert_eq!(first_token("  \"sunset\" \n"), Some("sunset".to_string()));
        assert_eq!(first_token("'jazz'."), Some("jazz".to_string()));
    }

    #[test]
    fn first_token_takes_first_word_of_first_line() {
        assert_eq!(
            first_token("\n\nmountain landscape\nsecond line"),
            Some("mountain".to_string())
        );
    }

    #[test]
    fn first_token_rejects_empty_replies() {
        assert_eq!(first_token(""), None);
        assert_eq!(first_token("  \n \t "), None);
        assert_eq!(first_token("\"\""), None);
    }

    #[test]
    fn keyword_prompt_mentions_intent() {
        let image = keyword_prompt("a sunset over hills", MediaKind::Image);
        let music = keyword_prompt("a sunset over hills", MediaKind::Music);
        assert!(image.contains("stock-photo"));
        assert!(music.contains("music-track"));
    }
}
