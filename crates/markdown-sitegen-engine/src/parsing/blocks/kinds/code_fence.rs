/// Fenced code block type.
///
/// Only backtick fences are recognised. The opening fence may carry an info
/// string (```` ```rust ````), which is ignored.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns true if the trimmed line starts with a fence.
    pub fn is_fence_line(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }

    /// Returns true if `line` can open a fence: backticks followed by at most
    /// an info string. Lines like ```` ```a``` b ```` are inline code instead.
    pub fn opens(line: &str) -> bool {
        line.trim()
            .strip_prefix(Self::BACKTICKS)
            .is_some_and(|info| !info.contains('`'))
    }

    /// Returns true if the whole block is wrapped in fences.
    pub fn encloses(block: &str) -> bool {
        let block = block.trim();
        block.len() >= 2 * Self::BACKTICKS.len()
            && block.starts_with(Self::BACKTICKS)
            && block.ends_with(Self::BACKTICKS)
    }

    /// Lines strictly between the opening and closing fence.
    ///
    /// For a one-line fence the text between the backtick runs is returned.
    /// Text before the closing backticks on the last line is kept.
    pub fn body(block: &str) -> Vec<&str> {
        let lines: Vec<&str> = block.lines().collect();
        match lines.as_slice() {
            [] => vec![],
            [only] => {
                let inner = only
                    .trim()
                    .strip_prefix(Self::BACKTICKS)
                    .and_then(|s| s.strip_suffix(Self::BACKTICKS))
                    .unwrap_or_default();
                vec![inner]
            }
            [_open, inner @ .., close] => {
                let mut body = inner.to_vec();
                let tail = close
                    .trim_end()
                    .strip_suffix(Self::BACKTICKS)
                    .unwrap_or(*close);
                if !tail.trim().is_empty() {
                    body.push(tail);
                }
                body
            }
        }
    }

    /// Removes the indentation common to all non-blank lines, right-trims
    /// every line and joins them with `\n`. Blank lines become empty.
    pub fn dedent(lines: &[&str]) -> String {
        let indent = lines
            .iter()
            .filter(|l| !l.trim().is_empty())
            .map(|l| leading_whitespace(l))
            .min()
            .unwrap_or(0);

        lines
            .iter()
            .map(|l| {
                if l.trim().is_empty() {
                    ""
                } else {
                    skip_chars(l, indent).trim_end()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn skip_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((i, _)) => &line[i..],
        None => "",
    }
}
