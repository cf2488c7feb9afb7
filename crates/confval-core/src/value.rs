//! The uniform configuration tree.
//!
//! Every backend folds its native parse tree into a [`Value`]. Navigation never
//! fails: asking a node for a key or index it does not have yields a reference
//! to a shared `Null`, so optimistic chains like
//! `config.get("server").get("listen").get(0)` need no per-step checks.
//!
//! # Example
//! ```
//! use confval_core::Value;
//!
//! let config: Value = [("port", Value::from(7788))].into_iter().collect();
//! assert_eq!(config.get("port").coerce::<u16>().unwrap(), 7788);
//! assert!(config.get("missing").get("deeper").get(3).is_null());
//! ```

use std::fmt;
use std::ops;

use indexmap::IndexMap;

/// Ordered sequence of child values.
pub type List = Vec<Value>;

/// Unique-key mapping that keeps insertion order for stable serialization.
pub type Dict = IndexMap<String, Value>;

static NULL: Value = Value::Null;

/// A configuration value. Exactly one variant is active; children are owned
/// exclusively so the tree is acyclic by construction.
///
/// Equality compares dicts as maps: entry order only affects serialization.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    /// Integer and float literals share one representation.
    Number(f64),
    String(String),
    List(List),
    Dict(Dict),
}

/// The active variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    List,
    Dict,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::List => "list",
            Kind::Dict => "dict",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that can select a child of a [`Value`]: a dict key or a list index.
///
/// Sealed; implemented for `str`, `String`, `usize` and references to them.
pub trait Key: private::Sealed {
    #[doc(hidden)]
    fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value>;
}

impl Key for usize {
    fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match value {
            Value::List(list) => list.get(*self),
            _ => None,
        }
    }
}

impl Key for str {
    fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match value {
            Value::Dict(dict) => dict.get(self),
            _ => None,
        }
    }
}

impl Key for String {
    fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        self.as_str().lookup(value)
    }
}

impl<T> Key for &T
where
    T: ?Sized + Key,
{
    fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        (**self).lookup(value)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

impl Value {
    /// Child at `key`, or `Null` when absent or when `self` has no children of
    /// that shape. Never fails, so calls chain freely.
    pub fn get<K: Key>(&self, key: K) -> &Value {
        key.lookup(self).unwrap_or(&NULL)
    }

    /// Like [`get`](Self::get) but distinguishes a missing child (`None`)
    /// from one that is present and `Null`.
    pub fn find<K: Key>(&self, key: K) -> Option<&Value> {
        key.lookup(self)
    }

    /// True when `self` is a dict holding `key`, even if it maps to `Null`.
    pub fn contains_key(&self, key: &str) -> bool {
        matches!(self, Value::Dict(dict) if dict.contains_key(key))
    }

    /// Resolve a dot-separated path such as `server.listen.0`.
    ///
    /// A segment indexes a list when the current node is a list and the
    /// segment parses as `usize`; otherwise it is a dict key. An empty path
    /// returns `self`.
    pub fn get_path(&self, path: &str) -> &Value {
        if path.is_empty() {
            return self;
        }
        path.split('.').fold(self, |node, segment| match node {
            Value::List(_) => match segment.parse::<usize>() {
                Ok(index) => node.get(index),
                Err(_) => &NULL,
            },
            _ => node.get(segment),
        })
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::List(_) => Kind::List,
            Value::Dict(_) => Kind::Dict,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_dict(&self) -> bool {
        matches!(self, Value::Dict(_))
    }

    /// Exact-kind accessor; use [`coerce`](Self::coerce) for conversions.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }
}

impl<K: Key> ops::Index<K> for Value {
    type Output = Value;

    fn index(&self, key: K) -> &Value {
        self.get(key)
    }
}

// ============================================================================
// Construction from native values
// ============================================================================

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_lossless {
    ($($ty:ty)+) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(f64::from(n))
                }
            }
        )+
    };
}

impl_from_lossless! { u8 u16 u32 i8 i16 i32 f32 f64 }

// Magnitudes above 2^53 lose precision, same as any f64 literal would.
macro_rules! impl_from_wide {
    ($($ty:ty)+) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )+
    };
}

impl_from_wide! { u64 i64 usize isize }

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<'a> From<&'a str> for Value {
    fn from(s: &'a str) -> Self {
        Value::String(s.to_owned())
    }
}

impl<V> From<Vec<V>> for Value
where
    V: Into<Value>,
{
    fn from(list: Vec<V>) -> Self {
        Value::List(list.into_iter().map(Into::into).collect())
    }
}

impl From<Dict> for Value {
    fn from(dict: Dict) -> Self {
        Value::Dict(dict)
    }
}

impl<V> From<Option<V>> for Value
where
    V: Into<Value>,
{
    fn from(opt: Option<V>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}

/// Builds a dict; a repeated key overwrites the earlier value in place.
impl<K, V> FromIterator<(K, V)> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dict::new();
        for (key, value) in iter {
            dict.insert(key.into(), value.into());
        }
        Value::Dict(dict)
    }
}
