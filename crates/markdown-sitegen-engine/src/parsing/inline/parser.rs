use regex::Regex;

use crate::{error::MarkdownError, node::Node};

use super::{
    kinds::{Bold, CodeSpan, Image, Italic, Link},
    types::{InlineKind, InlineToken},
};

/// Tokenizes the inline markdown in `text`.
///
/// # Errors
/// [`MarkdownError::UnbalancedDelimiter`] if any plain span has an odd number
/// of `**`, `*`, `_` or `` ` `` delimiters at the time its pass runs.
///
/// # Returns
/// Tokens covering the whole input in order. Empty spans are dropped, so
/// `""` yields no tokens.
pub fn tokenize_inline(text: &str) -> Result<Vec<InlineToken>, MarkdownError> {
    if text.is_empty() {
        return Ok(vec![]);
    }

    let tokens = vec![InlineToken::plain(text)];
    let tokens = split_images(tokens);
    let tokens = split_links(tokens);
    let tokens = split_delimiter(tokens, Bold::DELIM, InlineKind::Bold)?;
    let tokens = split_delimiter(tokens, Italic::STAR, InlineKind::Italic)?;
    let tokens = split_delimiter(tokens, Italic::UNDERSCORE, InlineKind::Italic)?;
    split_delimiter(tokens, CodeSpan::TICK, InlineKind::Code)
}

/// Tokenizes `text` and converts every token into an HTML node.
pub fn text_to_children(text: &str) -> Result<Vec<Node>, MarkdownError> {
    tokenize_inline(text)?
        .iter()
        .map(InlineToken::to_node)
        .collect()
}

/// Extracts `![alt](src)` from plain tokens.
pub fn split_images(tokens: Vec<InlineToken>) -> Vec<InlineToken> {
    split_pattern(tokens, Image::pattern(), |alt, src| {
        InlineToken::image(alt, src)
    })
}

/// Extracts `[label](href)` from plain tokens.
pub fn split_links(tokens: Vec<InlineToken>) -> Vec<InlineToken> {
    split_pattern(tokens, Link::pattern(), |label, href| {
        InlineToken::link(label, href)
    })
}

/// Splits every plain token around each match of `pattern`, left to right.
///
/// Text before, between and after matches stays plain (empty runs dropped);
/// each match becomes `make(label, target)`.
fn split_pattern(
    tokens: Vec<InlineToken>,
    pattern: &Regex,
    make: fn(&str, &str) -> InlineToken,
) -> Vec<InlineToken> {
    let mut out = Vec::with_capacity(tokens.len());

    for token in tokens {
        if !token.is_plain() {
            out.push(token);
            continue;
        }

        let text = token.content();
        let mut last = 0;
        for caps in pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            push_plain(&mut out, &text[last..whole.start()]);
            let label = caps.get(1).map_or("", |m| m.as_str());
            let target = caps.get(2).map_or("", |m| m.as_str());
            out.push(make(label, target));
            last = whole.end();
        }

        if last == 0 {
            out.push(token);
        } else {
            push_plain(&mut out, &text[last..]);
        }
    }

    out
}

/// Splits plain tokens on `delimiter`; odd-positioned parts become `kind`.
///
/// # Errors
/// [`MarkdownError::UnbalancedDelimiter`] when a plain token contains an odd
/// number of delimiters.
pub fn split_delimiter(
    tokens: Vec<InlineToken>,
    delimiter: &'static str,
    kind: InlineKind,
) -> Result<Vec<InlineToken>, MarkdownError> {
    let mut out = Vec::with_capacity(tokens.len());

    for token in tokens {
        if !token.is_plain() {
            out.push(token);
            continue;
        }

        let parts: Vec<&str> = token.content().split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(MarkdownError::UnbalancedDelimiter { delimiter });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(InlineToken::plain(part));
            } else {
                out.push(InlineToken::marked(kind, part));
            }
        }
    }

    Ok(out)
}

fn push_plain(out: &mut Vec<InlineToken>, text: &str) {
    if !text.is_empty() {
        out.push(InlineToken::plain(text));
    }
}
