//! TOML adapter over `toml::Value`.
//!
//! TOML distinguishes integers from floats; both fold into `Number`. Dates and
//! times have no counterpart in the tree and are kept as their RFC 3339 text.
//! Table order survives because the workspace enables `preserve_order`.

use toml::Value as Toml;

use crate::backend::Backend;
use crate::error::{ConfigError, Result};
use crate::value::{Dict, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct TomlBackend;

impl Backend for TomlBackend {
    type Node = Toml;

    const NAME: &'static str = "toml";

    fn parse_native(&self, text: &str) -> Result<Toml> {
        toml::from_str::<toml::Table>(text)
            .map(Toml::Table)
            .map_err(|err| {
                let message = match err.span() {
                    Some(span) => format!("line {}: {}", line_of(text, span.start), err.message()),
                    None => err.message().to_string(),
                };
                ConfigError::parse(Self::NAME, message)
            })
    }

    fn to_value(&self, node: Toml) -> Value {
        match node {
            Toml::String(s) => Value::String(s),
            Toml::Integer(i) => Value::Number(i as f64),
            Toml::Float(f) => Value::Number(f),
            Toml::Boolean(b) => Value::Bool(b),
            Toml::Datetime(dt) => Value::String(dt.to_string()),
            Toml::Array(items) => Value::List(items.into_iter().map(|n| self.to_value(n)).collect()),
            Toml::Table(table) => {
                let mut dict = Dict::with_capacity(table.len());
                for (key, child) in table {
                    dict.insert(key, self.to_value(child));
                }
                Value::Dict(dict)
            }
        }
    }
}

/// 1-based line of a byte offset.
fn line_of(text: &str, offset: usize) -> usize {
    text.as_bytes()[..offset.min(text.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}
