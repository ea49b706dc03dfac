//! Versioned reference-block parser.
//!
//! A reference block is a named, versioned documentation fragment embedded
//! in a scanned file between a matched tag pair:
//!
//! ```text
//! <fd:install-steps:2>
//! Run the installer, then reboot.
//! </fd:install-steps:2>
//! ```
//!
//! The tags may sit inside HTML comments; the comment wrapping around the
//! fragment is stripped, the fragment itself is kept verbatim.

use regex::Regex;

/// One parsed reference block, before it is bound to a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Identifier from the tag: letters, digits, `-`, `_`.
    pub name: String,
    /// Literal text between the tags, comment wrapping stripped.
    pub value: String,
    /// Version from the tag, parsed as a non-negative integer.
    pub version: u64,
}

/// Extract every well-formed reference block from a file's text, in order
/// of appearance.
///
/// Malformed input never errors — it simply yields no match:
/// - an open tag with no closing tag repeating the exact same
///   `name:version` triple is ignored;
/// - a version fragment that does not fit a `u64` is ignored.
///
/// # Panics
///
/// Panics if the hardcoded block regexes are invalid (compile-time invariant).
pub fn extract_blocks(content: &str) -> Vec<Block> {
    let open = Regex::new(r"<fd:([A-Za-z0-9_-]+):([0-9]+)>").expect("valid regex");
    let mut blocks = Vec::new();

    for caps in open.captures_iter(content) {
        let whole = caps.get(0).expect("capture 0 always present");
        let name = &caps[1];
        let version_text = &caps[2];

        let Ok(version) = version_text.parse::<u64>() else {
            continue;
        };

        // The closing tag must repeat the exact textual triple, so "01"
        // and "1" do not pair up.
        let closing = format!("</fd:{name}:{version_text}>");
        let tail = &content[whole.end()..];
        let Some(close_at) = tail.find(&closing) else {
            continue;
        };

        blocks.push(Block {
            name: name.to_string(),
            value: strip_comment_wrapping(&tail[..close_at]).to_string(),
            version,
        });
    }

    return blocks;
}

/// Strip the optional HTML-comment wrapping around a fragment: the tail of
/// the comment holding the open tag (`... -->`) and the head of the comment
/// holding the close tag (`<!-- ...`). Anything else, including interior
/// whitespace, is preserved verbatim.
fn strip_comment_wrapping(raw: &str) -> &str {
    let lead = Regex::new(r"^[.\s]*-->").expect("valid regex");
    let trail = Regex::new(r"<!--[.\s]*$").expect("valid regex");

    let without_lead = lead.find(raw).map_or(raw, |m| &raw[m.end()..]);
    return trail
        .find(without_lead)
        .map_or(without_lead, |m| &without_lead[..m.start()]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_a_plain_block() {
        let blocks = extract_blocks("<fd:intro:1>Hello</fd:intro:1>");
        assert_eq!(
            blocks,
            vec![Block {
                name: "intro".to_string(),
                value: "Hello".to_string(),
                version: 1,
            }]
        );
    }

    #[test]
    fn value_is_verbatim_across_lines() {
        let text = "<fd:setup:3>line one\n  line two\n</fd:setup:3>";
        let blocks = extract_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].value, "line one\n  line two\n");
    }

    #[test]
    fn strips_html_comment_wrapping() {
        let text = "<!-- <fd:intro:2> -->\nHello world\n<!-- </fd:intro:2> -->";
        let blocks = extract_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "intro");
        assert_eq!(blocks[0].version, 2);
        assert_eq!(blocks[0].value, "\nHello world\n");
    }

    #[test]
    fn empty_value_is_valid() {
        let blocks = extract_blocks("<fd:empty:0></fd:empty:0>");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].value, "");
        assert_eq!(blocks[0].version, 0);
    }

    #[test]
    fn unterminated_open_tag_is_ignored() {
        assert!(extract_blocks("<fd:lost:1>no closing tag here").is_empty());
    }

    #[test]
    fn closing_tag_must_repeat_the_exact_triple() {
        // Version differs between open and close: not a block.
        assert!(extract_blocks("<fd:a:1>text</fd:a:2>").is_empty());
        // Name differs: not a block.
        assert!(extract_blocks("<fd:a:1>text</fd:b:1>").is_empty());
    }

    #[test]
    fn non_numeric_version_is_not_a_match() {
        assert!(extract_blocks("<fd:name:v1>text</fd:name:v1>").is_empty());
    }

    #[test]
    fn oversized_version_is_excluded_silently() {
        let v = "99999999999999999999999999";
        let text = format!("<fd:big:{v}>text</fd:big:{v}>");
        assert!(extract_blocks(&text).is_empty());
    }

    #[test]
    fn multiple_blocks_are_independent_and_ordered() {
        let text = "<fd:a:1>A</fd:a:1> filler <fd:b:2>B</fd:b:2>";
        let blocks = extract_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].name, "a");
        assert_eq!(blocks[1].name, "b");
    }

    #[test]
    fn name_accepts_dash_underscore_digits() {
        let blocks = extract_blocks("<fd:my-ref_2:7>x</fd:my-ref_2:7>");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "my-ref_2");
    }

    #[test]
    fn value_stops_at_the_first_matching_close() {
        let text = "<fd:a:1>first</fd:a:1> tail </fd:a:1>";
        let blocks = extract_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].value, "first");
    }
}
