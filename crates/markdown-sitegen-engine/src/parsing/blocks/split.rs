use super::kinds::CodeFence;

/// Splits a document into blocks at runs of blank lines.
///
/// Whitespace-only lines count as blank. A fence opens only on the first line
/// of a block and closes on the next fence line; inside it nothing splits, and
/// an unterminated fence runs to the end of the document. Each block is
/// trimmed and empty blocks are dropped.
pub fn split_into_blocks(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut in_fence = false;

    for line in document.lines() {
        if in_fence {
            in_fence = !CodeFence::is_fence_line(line);
        } else if line.trim().is_empty() {
            flush(&mut blocks, &mut current);
            continue;
        } else if current.is_empty() {
            in_fence = CodeFence::opens(line);
        }
        current.push(line);
    }
    flush(&mut blocks, &mut current);

    blocks
}

fn flush(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
    if current.is_empty() {
        return;
    }
    let block = current.join("\n");
    current.clear();
    let trimmed = block.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed.to_string());
    }
}
