//! Per-character legality rules.
//!
//! Pure functions over a [`Lookbehind`] view of the engine: the accumulated
//! buffer, the bracket-stack top, and the cadence counters. No rule looks
//! ahead; every tie-break reads "the last accepted character" and, for `}`,
//! one literal scan-back over the buffer.

use crate::engine::{Bracket, Cadence};

/// Immutable engine state consulted by the rules.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lookbehind<'a> {
    /// Accumulated accepted characters.
    pub(crate) source: &'a str,
    /// Top of the bracket stack.
    pub(crate) top: Option<Bracket>,
    /// Total `{` ever accepted; never decremented.
    pub(crate) braces_opened: usize,
    /// Key/slot/colon pacing.
    pub(crate) cadence: Cadence,
}

impl Lookbehind<'_> {
    fn last(&self) -> Option<char> {
        self.source.chars().next_back()
    }

    /// Was a `:` accepted after the most recent `{`?
    ///
    /// The scan is literal, so a colon inside an earlier value string counts
    /// and a brace inside one hides a real colon. Both effects are part of
    /// the accepted language.
    fn colon_since_brace(&self) -> bool {
        match (self.source.rfind(':'), self.source.rfind('{')) {
            (Some(colon), Some(brace)) => colon > brace,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

/// `{` opens a document or follows `[`, `,`, `:`.
pub(crate) fn object_may_open(lb: &Lookbehind<'_>) -> bool {
    matches!(lb.last(), None | Some('[' | ',' | ':'))
}

/// `}` needs an object on top and one of: an empty body, a closed child, or a
/// paired value (some `:` since the most recent `{`, then a closing quote).
pub(crate) fn object_may_close(lb: &Lookbehind<'_>) -> bool {
    lb.top == Some(Bracket::Brace)
        && match lb.last() {
            Some('{' | ']' | '}') => true,
            Some('"') => lb.colon_since_brace(),
            _ => false,
        }
}

/// `[` only ever occurs inside some object, after `[`, `:`, or an array `,`.
pub(crate) fn array_may_open(lb: &Lookbehind<'_>) -> bool {
    lb.braces_opened >= 1
        && match lb.last() {
            Some('[' | ':') => true,
            Some(',') => lb.top == Some(Bracket::Square),
            _ => false,
        }
}

/// `]` needs an array on top and a completed element before it. `[` is never
/// a legal last character here, which is what rejects the empty array.
pub(crate) fn array_may_close(lb: &Lookbehind<'_>) -> bool {
    lb.top == Some(Bracket::Square) && matches!(lb.last(), Some('"' | ']' | '}'))
}

/// Which string a structural `"` starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuoteRole {
    /// An object key.
    Key,
    /// A scalar value.
    Value,
}

/// A `"` starts a key when the enclosing object still owes one (an announced
/// slot without its key) and the quote does not directly follow `:`;
/// otherwise it starts a value after `[`, `:`, or `,`.
pub(crate) fn quote_role(lb: &Lookbehind<'_>) -> Option<QuoteRole> {
    if lb.top == Some(Bracket::Brace)
        && lb.cadence.keys < lb.cadence.slots
        && lb.last() != Some(':')
    {
        return Some(QuoteRole::Key);
    }
    if lb.braces_opened >= 1 && matches!(lb.last(), Some('[' | ':' | ',')) {
        return Some(QuoteRole::Value);
    }
    None
}

/// `,` needs every announced key paired off and a completed entry before it.
pub(crate) fn comma_may_separate(lb: &Lookbehind<'_>) -> bool {
    lb.cadence.colons == lb.cadence.keys && matches!(lb.last(), Some('}' | ']' | '"'))
}

/// `:` pairs the key quote directly before it, object context only.
pub(crate) fn colon_may_pair(lb: &Lookbehind<'_>) -> bool {
    lb.top == Some(Bracket::Brace) && lb.last() == Some('"')
}

/// One step of key scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyStep {
    /// The character joins the key.
    Accept,
    /// The closing quote; the key is complete.
    Finish,
    /// Not a legal key character here.
    Reject,
}

/// Keys admit ASCII letters anywhere and ASCII digits after the first
/// character; the closing quote finishes the key.
pub(crate) fn key_step(c: char, at_start: bool) -> KeyStep {
    if c == '"' {
        KeyStep::Finish
    } else if c.is_ascii_alphabetic() || (c.is_ascii_digit() && !at_start) {
        KeyStep::Accept
    } else {
        KeyStep::Reject
    }
}
