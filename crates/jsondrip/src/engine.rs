//! The shared streaming grammar engine.
//!
//! Both [`Validator`] and [`TreeBuilder`] drive this engine one character at
//! a time. It owns every piece of streaming state (the accumulated buffer,
//! the bracket stack, the cadence counters, the scan mode, the status) and
//! reports each accepted character's structural effect as a [`Shift`] so the
//! tree layer can mirror the document without re-parsing anything.
//!
//! [`Validator`]: crate::Validator
//! [`TreeBuilder`]: crate::TreeBuilder

use core::{fmt, ops::Range};

use crate::{
    classify::{self, KeyStep, Lookbehind, QuoteRole},
    error::{InputErrorKind, InvalidInputError},
};

/// Where a streamed document currently stands.
///
/// Transitions are monotonic: `Empty` moves to `Incomplete` or `Valid`,
/// either of those can fall to `Invalid`, and `Invalid` is terminal. A
/// poisoned engine never recovers; parsing again means constructing a fresh
/// engine.
///
/// The `Display` form is the wire-facing string:
///
/// ```
/// use jsondrip::Status;
///
/// assert_eq!(Status::Incomplete.to_string(), "Status:Incomplete");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// No structural character has been accepted yet.
    #[default]
    Empty,
    /// A complete well-formed document has been seen.
    Valid,
    /// The characters so far form a prefix of some valid document.
    Incomplete,
    /// The document can no longer become valid.
    Invalid,
}

impl Status {
    /// Returns `true` if the status is [`Valid`].
    ///
    /// [`Valid`]: Status::Valid
    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns `true` if the status is [`Invalid`].
    ///
    /// [`Invalid`]: Status::Invalid
    #[must_use]
    pub fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "Empty",
            Self::Valid => "Valid",
            Self::Incomplete => "Incomplete",
            Self::Invalid => "Invalid",
        };
        write!(f, "Status:{name}")
    }
}

/// Open-container markers on the bracket stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bracket {
    /// An object opened by `{`.
    Brace,
    /// An array opened by `[`.
    Square,
}

/// Pacing counters for object keys, announced pairs, and separators.
///
/// The counters are global across the whole document, not per frame;
/// `colons <= keys <= slots` holds at every accepted prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Cadence {
    /// Keys whose opening quote has been accepted.
    pub(crate) keys: usize,
    /// Key/value slots announced by `{` and by `,` inside an object.
    pub(crate) slots: usize,
    /// Colons accepted.
    pub(crate) colons: usize,
}

/// What the engine is currently scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    /// Between tokens; the structural rules apply.
    Structural,
    /// Inside a key string; `start` is the byte offset of the payload.
    Key { start: usize },
    /// Inside a value string; `start` is the byte offset of the payload.
    Value { start: usize },
}

/// The structural effect of one accepted character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Shift {
    /// Nothing for the tree layer to do.
    None,
    /// `{` was accepted.
    OpenedObject,
    /// `[` was accepted.
    OpenedArray,
    /// `}` was accepted and the bracket stack popped.
    ClosedObject,
    /// `]` was accepted and the bracket stack popped.
    ClosedArray,
    /// A key's closing quote was accepted; the payload lives at `span`.
    FinishedKey {
        /// Byte range of the key payload in the buffer.
        span: Range<usize>,
    },
    /// A value's closing quote was accepted; the payload lives at `span`.
    FinishedValue {
        /// Byte range of the value payload in the buffer.
        span: Range<usize>,
    },
}

/// The streaming state machine shared by both public engines.
#[derive(Debug, Clone)]
pub(crate) struct Engine {
    source: String,
    status: Status,
    brackets: Vec<Bracket>,
    braces_opened: usize,
    cadence: Cadence,
    mode: ScanMode,
    line: usize,
    column: usize,
}

impl Engine {
    pub(crate) fn new() -> Self {
        Self {
            source: String::new(),
            status: Status::Empty,
            brackets: Vec::new(),
            braces_opened: 0,
            cadence: Cadence::default(),
            mode: ScanMode::Structural,
            line: 1,
            column: 1,
        }
    }

    pub(crate) fn status(&self) -> Status {
        self.status
    }

    /// Text of a span previously reported in a [`Shift`].
    pub(crate) fn span_text(&self, span: Range<usize>) -> &str {
        &self.source[span]
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    #[cfg(test)]
    pub(crate) fn cadence(&self) -> Cadence {
        self.cadence
    }

    #[cfg(test)]
    pub(crate) fn braces_opened(&self) -> usize {
        self.braces_opened
    }

    /// Drive the engine by one character.
    ///
    /// The step order is observable: a complete document is poisoned by any
    /// non-space character, the whitespace controls included; otherwise the
    /// controls are dropped before anything else, even on an engine that is
    /// already invalid.
    pub(crate) fn advance(&mut self, c: char) -> Result<Shift, InvalidInputError> {
        let at = (self.line, self.column);
        self.track(c);

        if self.status == Status::Valid && c != ' ' {
            return Err(self.rejected(InputErrorKind::TrailingContent(c), at));
        }
        if matches!(c, '\n' | '\t' | '\r' | '\u{000C}') {
            return Ok(Shift::None);
        }
        if self.status == Status::Invalid {
            return Err(self.rejected(InputErrorKind::Poisoned, at));
        }
        match self.mode {
            ScanMode::Value { start } => Ok(self.scan_value(c, start)),
            ScanMode::Key { start } => self.scan_key(c, start, at),
            ScanMode::Structural => self.structural(c, at),
        }
    }

    fn track(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    fn rejected(&mut self, kind: InputErrorKind, at: (usize, usize)) -> InvalidInputError {
        self.status = Status::Invalid;
        InvalidInputError {
            kind,
            line: at.0,
            column: at.1,
        }
    }

    /// Append an accepted character and refresh the status.
    fn accept(&mut self, c: char) {
        self.source.push(c);
        self.status = if self.brackets.is_empty() {
            Status::Valid
        } else {
            Status::Incomplete
        };
    }

    fn scan_value(&mut self, c: char, start: usize) -> Shift {
        if c == '"' {
            let span = start..self.source.len();
            self.mode = ScanMode::Structural;
            self.accept(c);
            Shift::FinishedValue { span }
        } else {
            self.accept(c);
            Shift::None
        }
    }

    fn scan_key(
        &mut self,
        c: char,
        start: usize,
        at: (usize, usize),
    ) -> Result<Shift, InvalidInputError> {
        match classify::key_step(c, self.source.len() == start) {
            KeyStep::Accept => {
                self.accept(c);
                Ok(Shift::None)
            }
            KeyStep::Finish => {
                let span = start..self.source.len();
                self.mode = ScanMode::Structural;
                self.accept(c);
                Ok(Shift::FinishedKey { span })
            }
            KeyStep::Reject => Err(self.rejected(InputErrorKind::InvalidCharacter(c), at)),
        }
    }

    fn structural(&mut self, c: char, at: (usize, usize)) -> Result<Shift, InvalidInputError> {
        match c {
            '{' if classify::object_may_open(&self.lookbehind()) => {
                self.brackets.push(Bracket::Brace);
                self.braces_opened += 1;
                self.cadence.slots += 1;
                self.accept(c);
                Ok(Shift::OpenedObject)
            }
            '}' if classify::object_may_close(&self.lookbehind()) => {
                self.brackets.pop();
                self.accept(c);
                Ok(Shift::ClosedObject)
            }
            '[' if classify::array_may_open(&self.lookbehind()) => {
                self.brackets.push(Bracket::Square);
                self.accept(c);
                Ok(Shift::OpenedArray)
            }
            ']' if classify::array_may_close(&self.lookbehind()) => {
                self.brackets.pop();
                self.accept(c);
                Ok(Shift::ClosedArray)
            }
            '"' => match classify::quote_role(&self.lookbehind()) {
                Some(QuoteRole::Key) => {
                    self.cadence.keys += 1;
                    self.accept(c);
                    self.mode = ScanMode::Key {
                        start: self.source.len(),
                    };
                    Ok(Shift::None)
                }
                Some(QuoteRole::Value) => {
                    self.accept(c);
                    self.mode = ScanMode::Value {
                        start: self.source.len(),
                    };
                    Ok(Shift::None)
                }
                None => Err(self.rejected(InputErrorKind::InvalidCharacter(c), at)),
            },
            ',' if classify::comma_may_separate(&self.lookbehind()) => {
                if self.brackets.last() == Some(&Bracket::Brace) {
                    self.cadence.slots += 1;
                }
                self.accept(c);
                Ok(Shift::None)
            }
            ':' if classify::colon_may_pair(&self.lookbehind()) => {
                self.cadence.colons += 1;
                self.accept(c);
                Ok(Shift::None)
            }
            // Bare spaces are structurally fine anywhere but never buffered.
            ' ' => Ok(Shift::None),
            _ => Err(self.rejected(InputErrorKind::InvalidCharacter(c), at)),
        }
    }

    fn lookbehind(&self) -> Lookbehind<'_> {
        Lookbehind {
            source: &self.source,
            top: self.brackets.last().copied(),
            braces_opened: self.braces_opened,
            cadence: self.cadence,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
