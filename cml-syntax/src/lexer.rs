//! Line classifier: turns raw CML text into logical lines.
//!
//! Comments (`// ...` and `/* ... */`, possibly spanning lines) are removed,
//! every line is trimmed, and blank lines are dropped.

/// A non-blank, comment-free, trimmed source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based line number in the original text.
    pub number: usize,
    pub text: String,
}

/// Split raw CML text into logical lines.
pub fn logical_lines(src: &str) -> Vec<LogicalLine> {
    let mut in_block = false;
    let mut lines = Vec::new();

    for (index, raw) in src.lines().enumerate() {
        let stripped = strip_comments(raw, &mut in_block);
        let text = stripped.trim();
        if !text.is_empty() {
            lines.push(LogicalLine {
                number: index + 1,
                text: text.to_string(),
            });
        }
    }

    lines
}

/// Remove comments from one raw line, tracking block comments across lines.
fn strip_comments(raw: &str, in_block: &mut bool) -> String {
    let mut out = String::new();
    let mut rest = raw;

    loop {
        if *in_block {
            match rest.find("*/") {
                Some(end) => {
                    rest = &rest[end + 2..];
                    *in_block = false;
                }
                None => break,
            }
        }

        let line_comment = rest.find("//");
        let block_comment = rest.find("/*");
        match (line_comment, block_comment) {
            (Some(l), Some(b)) if l < b => {
                out.push_str(&rest[..l]);
                break;
            }
            (Some(l), None) => {
                out.push_str(&rest[..l]);
                break;
            }
            (_, Some(b)) => {
                out.push_str(&rest[..b]);
                // keep tokens on either side of an inline block comment apart
                out.push(' ');
                rest = &rest[b + 2..];
                *in_block = true;
            }
            (None, None) => {
                out.push_str(rest);
                break;
            }
        }
    }

    out
}
