//! Keyword extraction: lowercase, strip punctuation, drop short tokens and stop words.

/// Tokens must be strictly longer than this to count as keywords.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Common English function words that never count as keywords.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "should", "could", "may", "might", "must", "can", "this", "that",
    "these", "those",
];

/// Extracts keywords from `text` in their original order, duplicates retained.
///
/// Word characters are ASCII letters, digits and `_`; every other non-whitespace
/// character becomes a separator. Accented and non-Latin letters therefore split
/// tokens rather than joining them.
pub fn extract(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if is_word_char(c) || is_separator_space(c) {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split(is_separator_space)
        .filter(|token| is_keyword(token))
        .map(str::to_string)
        .collect()
}

/// Returns true when `token` (already lowercased) qualifies as a keyword.
pub fn is_keyword(token: &str) -> bool {
    token.len() > MIN_KEYWORD_LEN && !STOP_WORDS.contains(&token)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// BOM counts as whitespace for splitting purposes.
fn is_separator_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(extract("").is_empty());
        assert!(extract("   \n\t ").is_empty());
    }

    #[test]
    fn test_stop_words_and_short_tokens_dropped() {
        assert_eq!(extract("the quick fox and the lazy dog"), vec!["quick", "lazy"]);
    }

    #[test]
    fn test_long_stop_words_dropped() {
        // every stop word longer than three characters
        let text = "have been were does will would should could might must \
                    this that these those with from";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_lowercases_and_keeps_duplicates_in_order() {
        assert_eq!(
            extract("Python developer needed with Python experience"),
            vec!["python", "developer", "needed", "python", "experience"]
        );
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        assert_eq!(
            extract("node.js/TypeScript, (React)! CI-CD"),
            vec!["node", "typescript", "react"]
        );
        assert_eq!(extract("e-mail: team@example.com"), vec!["mail", "team", "example"]);
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        assert_eq!(extract("snake_case 2024 k8s_ops"), vec!["snake_case", "2024", "k8s_ops"]);
    }

    #[test]
    fn test_non_ascii_letters_act_as_separators() {
        // "é" is not an ASCII word character: "développeur" splits into "d" + "veloppeur"
        assert_eq!(extract("Développeur senior"), vec!["veloppeur", "senior"]);
        assert!(extract("مطور برمجيات").is_empty());
    }

    #[test]
    fn test_unicode_whitespace_and_bom_split() {
        assert_eq!(
            extract("kubernetes\u{00A0}terraform\u{FEFF}ansible\u{2003}docker"),
            vec!["kubernetes", "terraform", "ansible", "docker"]
        );
    }

    #[test]
    fn test_is_keyword_boundary_length() {
        assert!(!is_keyword("api"));
        assert!(is_keyword("rust"));
        assert!(!is_keyword("with"));
    }
}
