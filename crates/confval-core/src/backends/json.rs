//! JSON adapter over `serde_json::Value`.
//!
//! The native node already knows its type, so the fold is a tag translation.
//! Object order survives because the workspace enables `preserve_order`.

use serde_json::Value as Json;

use crate::backend::Backend;
use crate::error::{ConfigError, Result};
use crate::value::{Dict, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBackend;

impl Backend for JsonBackend {
    type Node = Json;

    const NAME: &'static str = "json";

    fn parse_native(&self, text: &str) -> Result<Json> {
        serde_json::from_str(text).map_err(|err| ConfigError::parse(Self::NAME, err))
    }

    fn to_value(&self, node: Json) -> Value {
        match node {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_f64() {
                Some(f) => Value::Number(f),
                None => {
                    debug_assert!(false, "json number {n} has no f64 representation");
                    Value::Null
                }
            },
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::List(items.into_iter().map(|n| self.to_value(n)).collect()),
            Json::Object(map) => {
                let mut dict = Dict::with_capacity(map.len());
                for (key, child) in map {
                    dict.insert(key, self.to_value(child));
                }
                Value::Dict(dict)
            }
        }
    }
}

impl From<Json> for Value {
    fn from(node: Json) -> Self {
        JsonBackend.to_value(node)
    }
}
