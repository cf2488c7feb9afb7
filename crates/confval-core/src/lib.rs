//! # confval-core
//!
//! A backend-agnostic configuration value tree.
//!
//! Any configuration format is folded into one [`Value`] tree. Callers then walk
//! it with chainable lookups that never fail on missing paths, pull typed
//! scalars out under a fixed coercion table, and render it back to canonical
//! JSON-like text.
//!
//! ## Quick start
//!
//! ```rust
//! use confval_core::{AltBackend, Backend};
//!
//! let config = AltBackend
//!     .parse("port: 7788\nnested: { inner: { port: 7799 } }")
//!     .unwrap();
//! assert_eq!(config.get("port").coerce::<i64>().unwrap(), 7788);
//! assert_eq!(config["nested"]["inner"]["port"].coerce::<u16>().unwrap(), 7799);
//! assert!(config.get("missing").get("deeper").is_null());
//! assert_eq!(config.to_text(false), r#"{"port":7788,"nested":{"inner":{"port":7799}}}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Value` tree, navigation, construction
//! - [`coerce`]: typed extraction (`FromValue`, `Value::coerce`)
//! - [`encoder`]: canonical serialization (`Value::to_text`, `Display`)
//! - [`backend`]: the `Backend` conversion contract
//! - [`backends`]: JSON, TOML and alt-config adapters
//! - [`altcfg`]: native alt-config tree and parser
//! - [`error`]: error types

pub mod altcfg;
pub mod backend;
pub mod backends;
pub mod coerce;
pub mod encoder;
pub mod error;
mod interop;
pub mod value;

pub use backend::{parse_with, Backend};
pub use backends::{AltBackend, JsonBackend, TomlBackend};
pub use coerce::FromValue;
pub use error::{CoercionError, ConfigError, Result};
pub use value::{Dict, Key, Kind, List, Value};
