//! Generic Cisco IOS-style configuration parsing primitives used by higher-level tools.

pub mod parser;
pub mod tree;

pub use parser::{parse, parse_file, ParseError};
pub use tree::{ConfigNode, ConfigTree};
