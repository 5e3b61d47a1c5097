//! Reading a header block back out of generated content.
use crate::header::HeaderSet;

/// Parse the first `/** ... */` block of `content` into a [`HeaderSet`].
///
/// Each ` * Key: Value` line becomes one entry; lines without `": "` are
/// ignored. Returns an empty set when no block is found.
#[must_use]
pub fn parse_header_block(content: &str) -> HeaderSet {
    content
        .lines()
        .skip_while(|line| line.trim() != "/**")
        .skip(1)
        .take_while(|line| line.trim() != "*/")
        .filter_map(|line| line.strip_prefix(" * ")?.split_once(": "))
        .collect()
}
