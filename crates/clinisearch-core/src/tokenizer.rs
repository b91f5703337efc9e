//! Query tokenizer

/// Tokens must be longer than this many characters to be kept
const MIN_TOKEN_CHARS: usize = 2;

/// Lowercase and split query text into keyword tokens.
///
/// Order and duplicates are preserved; tokens of two characters or fewer are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_drops_short() {
        assert_eq!(
            tokenize("Patients on Metformin BID"),
            vec!["patients", "metformin", "bid"]
        );
    }

    #[test]
    fn test_tokenize_keeps_order_and_duplicates() {
        assert_eq!(
            tokenize("asthma plan asthma"),
            vec!["asthma", "plan", "asthma"]
        );
    }

    #[test]
    fn test_tokenize_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n ").is_empty());
        assert!(tokenize("an of to").is_empty());
    }

    #[test]
    fn test_tokenize_counts_chars_not_bytes() {
        // "été" is three chars but six bytes
        assert_eq!(tokenize("été ça"), vec!["été"]);
    }
}
