//! Error types reported by the streaming engines and the document model.

use thiserror::Error;

/// Raised when a streamed character cannot extend the current document.
///
/// Once raised, the engine that produced it is poisoned: its status is pinned
/// to [`Status::Invalid`] and every further non-whitespace `input` fails too.
///
/// [`Status::Invalid`]: crate::Status::Invalid
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct InvalidInputError {
    pub(crate) kind: InputErrorKind,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl InvalidInputError {
    /// Why the character was rejected.
    #[must_use]
    pub fn kind(&self) -> &InputErrorKind {
        &self.kind
    }

    /// 1-based line of the offending character.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the offending character.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

/// The ways a streamed character can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputErrorKind {
    /// The character cannot extend any valid-or-incomplete prefix here.
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    /// A non-space character arrived after the document was already complete.
    #[error("trailing content after a complete document: '{0}'")]
    TrailingContent(char),
    /// The engine was already invalid before this call.
    #[error("document is already invalid")]
    Poisoned,
}

/// Raised when an object rejects a key at construction time.
///
/// This is the admission gate on [`ObjectNode::add`], independent of the
/// streaming key scanner; see the type-level docs there for the rule.
///
/// [`ObjectNode::add`]: crate::ObjectNode::add
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid object key {key:?}")]
pub struct InvalidKeyError {
    pub(crate) key: String,
}

impl InvalidKeyError {
    /// The rejected key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Raised by [`TreeBuilder::input`], which can fail either way: the grammar
/// rejects the character, or a completed pair's key fails the admission gate.
///
/// [`TreeBuilder::input`]: crate::TreeBuilder::input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The streamed character violated the grammar; the engine is poisoned.
    #[error(transparent)]
    Input(#[from] InvalidInputError),
    /// An attached pair's key failed the gate; engine status is untouched.
    #[error(transparent)]
    Key(#[from] InvalidKeyError),
}
