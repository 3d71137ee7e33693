use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

use crate::catalogs::MODEL_KEYWORD;
use crate::types::RawModelBlock;

static RE_MODEL_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{}\s+(\S*)", regex::escape(MODEL_KEYWORD))).unwrap()
});

/// Block being collected, with its running brace depth.
struct OpenBlock {
    name: String,
    lines: Vec<String>,
    depth: i64,
}

/// Split Prisma source text into raw `model` blocks, in source order.
///
/// Lenient by construction:
/// - a declaration with no name (`model {`) opens nothing, and its line is dropped;
/// - a block whose braces never balance is dropped;
/// - a new declaration while a block is still open abandons the open block;
/// - lines outside any block are ignored.
pub fn segment(content: &str) -> Vec<RawModelBlock> {
    let (blocks, open) = content
        .split('\n')
        .enumerate()
        .fold((Vec::new(), None), |(mut blocks, open), (i, raw_line)| {
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            let open = step(open, line, i + 1, &mut blocks);
            (blocks, open)
        });

    if let Some(unterminated) = open {
        debug!(
            "dropping unterminated model `{}` ({} lines)",
            unterminated.name,
            unterminated.lines.len()
        );
    }

    blocks
}

fn step(
    open: Option<OpenBlock>,
    line: &str,
    line_num: usize,
    blocks: &mut Vec<RawModelBlock>,
) -> Option<OpenBlock> {
    let trimmed = line.trim();

    let mut open = match declaration_name(trimmed) {
        Some(name) if name.is_empty() => {
            debug!("line {line_num}: skipping model declaration without a name");
            return open;
        }
        Some(name) => {
            if let Some(abandoned) = open {
                debug!(
                    "line {line_num}: model `{}` never closed before `{name}`",
                    abandoned.name
                );
            }
            Some(OpenBlock {
                name,
                lines: Vec::new(),
                depth: 0,
            })
        }
        None => open,
    };

    let Some(block) = open.as_mut() else {
        trace!("line {line_num}: outside any model");
        return None;
    };

    block.lines.push(line.to_string());
    block.depth += count(trimmed, '{');

    if trimmed.contains('}') {
        block.depth -= count(trimmed, '}');
        if block.depth != 0 {
            return open;
        }
        if let Some(closed) = open.take() {
            trace!("line {line_num}: closed model `{}`", closed.name);
            blocks.push(RawModelBlock {
                name: closed.name,
                lines: closed.lines,
            });
        }
    }

    open
}

/// Returns the declared model name when `trimmed` is a declaration line.
/// An empty string means the declaration is malformed.
fn declaration_name(trimmed: &str) -> Option<String> {
    RE_MODEL_DECL
        .captures(trimmed)
        .map(|caps| caps[1].replace('{', ""))
}

fn count(s: &str, c: char) -> i64 {
    s.chars().filter(|&ch| ch == c).count() as i64
}
