//! Bundled adapters.
//!
//! - [`json`]: `serde_json`, a statically typed native node
//! - [`toml`]: `toml`, typed like JSON but with separate integers and dates
//! - [`alt`]: alt-config, untyped scalars resolved by sniffing

pub mod alt;
pub mod json;
pub mod toml;

pub use alt::AltBackend;
pub use json::JsonBackend;
pub use self::toml::TomlBackend;
