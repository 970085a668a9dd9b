use std::fmt::{self, Display, Formatter};

use regex::Regex;
use serde::Serialize;

/// A single configuration line and the lines nested beneath it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigNode {
    /// Raw line text with leading indentation preserved.
    pub text: String,
    /// Number of leading whitespace characters.
    pub indent: usize,
    /// Lines indented under this one.
    pub children: Vec<ConfigNode>,
}

impl ConfigNode {
    /// Create a leaf node from a raw config line.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let indent = text.len() - text.trim_start().len();
        Self {
            text,
            indent,
            children: Vec::new(),
        }
    }

    /// Whether the pattern matches anywhere in this line.
    pub fn is_match(&self, pattern: &Regex) -> bool {
        pattern.is_match(&self.text)
    }

    /// First capture group of the pattern against this line.
    pub fn capture(&self, pattern: &Regex) -> Option<&str> {
        pattern
            .captures(&self.text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Return all direct children whose line matches the pattern.
    pub fn search_children(&self, pattern: &Regex) -> Vec<&ConfigNode> {
        self.children
            .iter()
            .filter(|child| pattern.is_match(&child.text))
            .collect()
    }
}

impl Display for ConfigNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.text)?;
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        Ok(())
    }
}

/// An ordered forest of top-level configuration statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigTree {
    /// Top-level statements in document order.
    pub nodes: Vec<ConfigNode>,
}

impl ConfigTree {
    /// Return every node at any depth whose line matches, in document order.
    pub fn find_objects(&self, pattern: &Regex) -> Vec<&ConfigNode> {
        let mut found = Vec::new();
        for node in &self.nodes {
            collect_matches(node, pattern, &mut found);
        }
        found
    }

    /// Return the raw text of every matching node, in document order.
    pub fn find_lines(&self, pattern: &Regex) -> Vec<&str> {
        self.find_objects(pattern)
            .into_iter()
            .map(|node| node.text.as_str())
            .collect()
    }

    /// Return the raw lines of every top-level block containing a match.
    ///
    /// A block is a top-level statement together with everything nested
    /// under it. Blocks keep document order and each appears at most once.
    pub fn find_blocks(&self, pattern: &Regex) -> Vec<&str> {
        let mut found = Vec::new();
        for node in &self.nodes {
            if block_contains_match(node, pattern) {
                collect_lines(node, &mut found);
            }
        }
        found
    }
}

impl Display for ConfigTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

fn collect_matches<'a>(node: &'a ConfigNode, pattern: &Regex, found: &mut Vec<&'a ConfigNode>) {
    if node.is_match(pattern) {
        found.push(node);
    }
    for child in &node.children {
        collect_matches(child, pattern, found);
    }
}

fn block_contains_match(node: &ConfigNode, pattern: &Regex) -> bool {
    node.is_match(pattern)
        || node
            .children
            .iter()
            .any(|child| block_contains_match(child, pattern))
}

fn collect_lines<'a>(node: &'a ConfigNode, found: &mut Vec<&'a str>) {
    found.push(node.text.as_str());
    for child in &node.children {
        collect_lines(child, found);
    }
}
