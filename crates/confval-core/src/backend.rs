//! The conversion contract every format adapter implements.
//!
//! A backend pairs a parser for one concrete syntax, which yields the parser's
//! own native tree, with a total fold of that tree into a [`Value`]. The
//! provided [`Backend::parse`] composes the two and reports parser failures as
//! [`ConfigError::Parse`](crate::ConfigError::Parse). A malformed document is
//! never confused with an empty one.

use crate::error::Result;
use crate::value::Value;

pub trait Backend {
    /// Native parse-tree node produced by this backend's parser.
    type Node;

    /// Format name used in errors and log events.
    const NAME: &'static str;

    /// Parse text into the native tree.
    fn parse_native(&self, text: &str) -> Result<Self::Node>;

    /// Fold a native node, and everything below it, into a [`Value`].
    ///
    /// Must handle every shape `Self::Node` can take.
    fn to_value(&self, node: Self::Node) -> Value;

    /// Parse text straight into a [`Value`].
    fn parse(&self, text: &str) -> Result<Value> {
        let node = self.parse_native(text).inspect_err(|err| {
            tracing::debug!(format = Self::NAME, error = %err, "parse failed");
        })?;
        tracing::trace!(format = Self::NAME, bytes = text.len(), "converting native tree");
        Ok(self.to_value(node))
    }
}

/// Parse `text` with any backend.
pub fn parse_with<B: Backend>(backend: &B, text: &str) -> Result<Value> {
    backend.parse(text)
}
