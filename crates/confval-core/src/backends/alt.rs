//! alt-config adapter.
//!
//! alt-config scalars are untyped, so each one is interpreted by trying, in
//! order, a number, then a boolean, then falling back to the raw string. The
//! order matters: `0.0` must read as a number, `true` as a boolean, and only
//! text that is neither (`0.0.0.0`) stays a string.

use crate::altcfg::{self, Node};
use crate::backend::Backend;
use crate::error::{ConfigError, Result};
use crate::value::{Dict, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct AltBackend;

impl Backend for AltBackend {
    type Node = Node;

    const NAME: &'static str = "alt-config";

    fn parse_native(&self, text: &str) -> Result<Node> {
        altcfg::parse(text).map_err(|err| ConfigError::parse(Self::NAME, err))
    }

    fn to_value(&self, node: Node) -> Value {
        match node {
            Node::List(items) => Value::List(items.into_iter().map(|n| self.to_value(n)).collect()),
            Node::Dict(entries) => {
                let mut dict = Dict::with_capacity(entries.len());
                for (key, child) in entries {
                    // Later duplicates overwrite earlier ones.
                    dict.insert(key, self.to_value(child));
                }
                Value::Dict(dict)
            }
            scalar @ Node::Scalar(_) => sniff_scalar(&scalar),
        }
    }
}

/// Interpret an untyped scalar: number, then bool, then string.
fn sniff_scalar(node: &Node) -> Value {
    let value = node
        .to_number()
        .map(Value::Number)
        .or_else(|| node.to_bool().map(Value::Bool))
        .or_else(|| node.as_str().map(|s| Value::String(s.to_owned())));
    match value {
        Some(value) => {
            tracing::trace!(scalar = ?node.as_str(), kind = %value.kind(), "sniffed scalar");
            value
        }
        None => {
            debug_assert!(false, "sniff_scalar called on a non-scalar node");
            Value::Null
        }
    }
}
