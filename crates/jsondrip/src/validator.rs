//! Validation-only streaming front end.

use crate::{
    engine::{Engine, Status},
    error::InvalidInputError,
};

/// A streaming validator that classifies a document one character at a time
/// without building a tree.
///
/// Feed characters with [`input`] (or whole chunks with [`feed`]) and observe
/// [`output`] between characters. Each successful call hands back the same
/// live validator, so inputs chain with `?`. Once a character is rejected the
/// validator is poisoned: every later non-whitespace character raises
/// [`InputErrorKind::Poisoned`].
///
/// [`input`]: Validator::input
/// [`feed`]: Validator::feed
/// [`output`]: Validator::output
/// [`InputErrorKind::Poisoned`]: crate::InputErrorKind::Poisoned
///
/// # Examples
///
/// ```
/// use jsondrip::{Status, Validator};
///
/// let mut validator = Validator::new();
/// validator.feed("{\"a\":\"b\"")?;
/// assert_eq!(validator.output(), Status::Incomplete);
/// validator.input('}')?;
/// assert_eq!(validator.output(), Status::Valid);
/// # Ok::<(), jsondrip::InvalidInputError>(())
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    engine: Engine,
}

impl Validator {
    /// Creates a validator in [`Status::Empty`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one character.
    ///
    /// The whitespace controls `'\n'`, `'\t'`, `'\r'`, and `'\u{c}'` are
    /// dropped before any other rule applies, so they never change the
    /// outcome; a bare space is accepted anywhere. Everything else is held
    /// to the grammar.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] when `c` violates the grammar at the
    /// current position, when content follows a complete document, or when
    /// the validator was already poisoned by an earlier rejection.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondrip::{Status, Validator};
    ///
    /// let mut validator = Validator::new();
    /// validator.input('{')?.input('}')?;
    /// assert_eq!(validator.output(), Status::Valid);
    /// # Ok::<(), jsondrip::InvalidInputError>(())
    /// ```
    pub fn input(&mut self, c: char) -> Result<&mut Self, InvalidInputError> {
        self.engine.advance(c)?;
        Ok(self)
    }

    /// Consumes every character of `text` in order, stopping at the first
    /// rejection.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidInputError`] raised, leaving the validator
    /// poisoned at that character.
    pub fn feed(&mut self, text: &str) -> Result<&mut Self, InvalidInputError> {
        for c in text.chars() {
            self.engine.advance(c)?;
        }
        Ok(self)
    }

    /// Classification of everything consumed so far.
    #[must_use]
    pub fn output(&self) -> Status {
        self.engine.status()
    }

    /// Same classification as [`output`], under the name [`TreeBuilder`]
    /// uses.
    ///
    /// [`output`]: Validator::output
    /// [`TreeBuilder`]: crate::TreeBuilder
    #[must_use]
    pub fn status(&self) -> Status {
        self.engine.status()
    }
}
