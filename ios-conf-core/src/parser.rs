use std::fs;
use std::path::Path;
use std::str::Lines;

use thiserror::Error;

use crate::tree::{ConfigNode, ConfigTree};

/// Errors raised while reading a configuration file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse IOS-style configuration text into a tree.
///
/// Nesting follows indentation: a line attaches as a child of the nearest
/// preceding line with smaller indentation. Blank lines and `!` comment
/// lines are dropped. Top-level `banner` statements fold their raw payload
/// lines, up to and including the closing delimiter, in as children.
pub fn parse(input: &str) -> ConfigTree {
    let mut nodes = Vec::new();
    let mut stack: Vec<ConfigNode> = Vec::new();

    let mut lines = input.lines();
    while let Some(line) = lines.next() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('!') {
            continue;
        }

        let node = ConfigNode::new(line);
        close_open_nodes(&mut stack, &mut nodes, node.indent);

        if node.indent == 0 {
            if let Some(delimiter) = banner_delimiter(trimmed) {
                nodes.push(read_banner_block(node, delimiter, &mut lines));
                continue;
            }
        }
        stack.push(node);
    }
    close_open_nodes(&mut stack, &mut nodes, 0);

    ConfigTree { nodes }
}

/// Parse the configuration file at `path`.
pub fn parse_file(path: &Path) -> Result<ConfigTree, ParseError> {
    let input = fs::read_to_string(path)?;
    Ok(parse(&input))
}

/// Pop every open node at `indent` or deeper, attaching each to its parent.
fn close_open_nodes(stack: &mut Vec<ConfigNode>, nodes: &mut Vec<ConfigNode>, indent: usize) {
    while stack.last().is_some_and(|open| open.indent >= indent) {
        let Some(done) = stack.pop() else {
            return;
        };
        match stack.last_mut() {
            Some(parent) => parent.children.push(done),
            None => nodes.push(done),
        }
    }
}

/// Delimiter character of a `banner <kind> <delimiter>` statement, if any.
///
/// The delimiter is the first character of the third field, so
/// `banner motd ^CAuthorized use only^C` closes on the second `^`.
fn banner_delimiter(trimmed: &str) -> Option<char> {
    let mut fields = trimmed.split_whitespace();
    if fields.next() != Some("banner") {
        return None;
    }
    fields.next()?;
    fields.next()?.chars().next()
}

/// Whether the opening line already carries the closing delimiter.
fn opener_is_closed(text: &str, delimiter: char) -> bool {
    text.find(delimiter)
        .map(|at| text[at + delimiter.len_utf8()..].contains(delimiter))
        .unwrap_or(false)
}

/// Consume raw banner payload lines until the closing delimiter or EOF.
///
/// Payload lines keep their text verbatim, including blanks and lines
/// starting with `!`. The line carrying the closing delimiter is kept.
fn read_banner_block(mut banner: ConfigNode, delimiter: char, lines: &mut Lines<'_>) -> ConfigNode {
    if opener_is_closed(&banner.text, delimiter) {
        return banner;
    }
    for raw in lines {
        let closes = raw.contains(delimiter);
        banner.children.push(ConfigNode::new(raw));
        if closes {
            break;
        }
    }
    banner
}
