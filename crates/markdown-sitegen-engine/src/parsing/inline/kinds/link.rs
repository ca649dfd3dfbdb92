use std::sync::OnceLock;

use regex::Regex;

/// Link inline type: `[label](target)`.
///
/// The pattern also matches the tail of image markup, which is why images are
/// extracted before links.
pub struct Link;

impl Link {
    pub fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_links_in_order() {
        let text = "This is text with a [link](https://www.example.com) and [another](https://www.example.com/another)";
        let found: Vec<(String, String)> = Link::pattern()
            .captures_iter(text)
            .map(|c| (c[1].to_string(), c[2].to_string()))
            .collect();
        assert_eq!(
            found,
            vec![
                ("link".to_string(), "https://www.example.com".to_string()),
                (
                    "another".to_string(),
                    "https://www.example.com/another".to_string()
                ),
            ]
        );
    }

    #[test]
    fn unclosed_link_does_not_match() {
        assert!(!Link::pattern().is_match("[label](https://example.com"));
    }
}
