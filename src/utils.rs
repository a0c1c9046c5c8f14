/// Characters removed before splitting a message into words.
pub const STRIPPED_PUNCTUATION: &[char] = &['.', ',', '!'];

pub fn normalize_text(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}

pub fn words(text: &str) -> Vec<String> {
    normalize_text(text)
        .split_whitespace()
        .map(|w| w.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_listed_punctuation_only() {
        assert_eq!(normalize_text("  Hi, there. Wow!? "), "hi there wow?");
    }

    #[test]
    fn words_ignores_repeated_whitespace() {
        assert_eq!(words("a  b\t c"), vec!["a", "b", "c"]);
        assert!(words("   ").is_empty());
    }
}
