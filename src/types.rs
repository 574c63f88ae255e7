//! Common types used across the pagekit crate.

use indexmap::IndexMap;
use std::io::Write;

/// String-keyed variable mapping passed into template execution. Insertion
/// order is preserved, so handlers that add keys in sequence produce a
/// predictable final mapping.
pub type Variables = IndexMap<String, serde_json::Value>;

/// A registered transformation applied to the variable mapping before
/// execution. Handlers run in registration order; each receives the response
/// context and the mapping produced so far and returns the mapping to use
/// next, so later handlers observe earlier mutations.
pub type VariableHandler =
    Box<dyn Fn(&mut dyn ResponseContext, Variables) -> Variables + Send + Sync>;

/// Abstraction over the transport's request/response context.
///
/// The render pipeline writes the body through the `Write` supertrait and
/// finalizes the response through the two setters. Transports implement this
/// for their native context type.
pub trait ResponseContext: Write {
    /// Sets the response status code.
    fn set_status(&mut self, status: u16);

    /// Sets the response content type.
    fn set_content_type(&mut self, content_type: &str);
}
