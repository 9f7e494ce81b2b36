//! Incremental validation and tree building for a string-only JSON dialect.
//!
//! Documents arrive one character at a time. [`Validator`] answers "is this
//! prefix still on track" with a [`Status`]; [`TreeBuilder`] does the same
//! while mirroring the characters into a [`Node`] tree that can be rendered,
//! compared, and hashed.
//!
//! The dialect is narrower than JSON: every scalar is a quoted string, the
//! document must open with an object, object keys start with a letter, and
//! the whitespace controls `\n`, `\t`, `\r`, and `\u{c}` are dropped
//! wherever they appear, string payloads included. Acceptance is driven by
//! lookbehind over the cleaned text rather than a grammar, so classification
//! is exact on well-formed input and deliberately permissive at a few odd
//! edges.
//!
//! # Example
//!
//! ```
//! use jsondrip::{Status, TreeBuilder};
//!
//! let mut builder = TreeBuilder::new();
//! for chunk in ["{\"greeting\"", ":\"hello", " world\"}"] {
//!     builder.feed(chunk)?;
//! }
//! assert_eq!(builder.status(), Status::Valid);
//! let root = builder.finish().unwrap();
//! assert_eq!(root.render(), "{\n  \"greeting\":\"hello world\"\n}");
//! # Ok::<(), jsondrip::BuildError>(())
//! ```

mod builder;
mod classify;
mod engine;
mod error;
mod node;
mod validator;

#[cfg(test)]
mod tests;

pub use builder::TreeBuilder;
pub use engine::Status;
pub use error::{BuildError, InputErrorKind, InvalidInputError, InvalidKeyError};
pub use node::{ArrayNode, Node, ObjectNode};
pub use validator::Validator;
