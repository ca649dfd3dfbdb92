use std::sync::OnceLock;

use regex::Regex;

/// Image inline type: `![label](target)`.
///
/// Label and target are matched lazily; nested brackets or parentheses are
/// not supported.
pub struct Image;

impl Image {
    pub fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX
            .get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"))
    }
}
