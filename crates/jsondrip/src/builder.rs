//! Streaming front end that mirrors the document into a [`Node`] tree.
//!
//! The builder drives the same engine as [`Validator`] and applies each
//! reported shift to a pair of stacks: `nodes` holds every container (or
//! stray leaf) that is still open or unattached, `keys` holds finished
//! object keys awaiting their value. Containers are pushed on their opening
//! delimiter and spliced into the parent on close; leaves attach the moment
//! their closing quote arrives.
//!
//! [`Validator`]: crate::Validator

use crate::{
    engine::{Engine, Shift, Status},
    error::{BuildError, InvalidKeyError},
    node::{ArrayNode, Node, ObjectNode},
};

/// A streaming validator that additionally grows the document tree.
///
/// Feed characters with [`input`] or chunks with [`feed`]; each successful
/// call hands back the same live builder, so inputs chain with `?`. The root
/// is available through [`output`] exactly while the status is
/// [`Status::Valid`].
///
/// Rejections poison the builder the same way they poison a [`Validator`],
/// with one exception: an inadmissible streamed key raises
/// [`BuildError::Key`] without touching the grammar state, and the document
/// can still stream to completion minus that pair.
///
/// [`input`]: TreeBuilder::input
/// [`feed`]: TreeBuilder::feed
/// [`output`]: TreeBuilder::output
/// [`Validator`]: crate::Validator
///
/// # Examples
///
/// ```
/// use jsondrip::TreeBuilder;
///
/// let mut builder = TreeBuilder::new();
/// builder.feed("{\"name\":\"Some Name\"}")?;
/// let root = builder.output().unwrap();
/// assert_eq!(root.render(), "{\n  \"name\":\"Some Name\"\n}");
/// # Ok::<(), jsondrip::BuildError>(())
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    engine: Engine,
    nodes: Vec<Node>,
    keys: Vec<String>,
}

impl TreeBuilder {
    /// Creates a builder in [`Status::Empty`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one character and applies its structural effect to the tree.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Input`] whenever a [`Validator`] would reject
    /// the character, and [`BuildError::Key`] when a completed pair's key
    /// fails admission; the latter leaves the streaming state intact.
    ///
    /// [`Validator`]: crate::Validator
    pub fn input(&mut self, c: char) -> Result<&mut Self, BuildError> {
        let shift = self.engine.advance(c)?;
        self.apply(shift)?;
        Ok(self)
    }

    /// Consumes every character of `text` in order, stopping at the first
    /// error.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError`] raised; see [`input`].
    ///
    /// [`input`]: TreeBuilder::input
    pub fn feed(&mut self, text: &str) -> Result<&mut Self, BuildError> {
        for c in text.chars() {
            self.input(c)?;
        }
        Ok(self)
    }

    /// Classification of everything consumed so far.
    #[must_use]
    pub fn status(&self) -> Status {
        self.engine.status()
    }

    /// The document root, present exactly while the status is
    /// [`Status::Valid`].
    ///
    /// A just-closed root can still be sitting on top of an earlier stray
    /// node, so this drains the stack down to one entry before borrowing it.
    #[must_use]
    pub fn output(&mut self) -> Option<&Node> {
        if self.engine.status() != Status::Valid {
            return None;
        }
        while self.nodes.len() > 1 {
            // Streamed keys already passed admission when their pair was
            // formed, so a drain-time key error has no witness to return.
            if self.splice().is_err() {
                return None;
            }
        }
        self.nodes.last()
    }

    /// Consumes the builder and returns the owned root under the same
    /// contract as [`output`].
    ///
    /// [`output`]: TreeBuilder::output
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondrip::TreeBuilder;
    ///
    /// let mut builder = TreeBuilder::new();
    /// builder.feed("{}")?;
    /// assert_eq!(builder.finish().unwrap().render(), "{\n}");
    /// # Ok::<(), jsondrip::BuildError>(())
    /// ```
    #[must_use]
    pub fn finish(mut self) -> Option<Node> {
        self.output()?;
        self.nodes.pop()
    }

    fn apply(&mut self, shift: Shift) -> Result<(), InvalidKeyError> {
        match shift {
            Shift::None => Ok(()),
            Shift::OpenedObject => {
                self.nodes.push(Node::Object(ObjectNode::new()));
                Ok(())
            }
            Shift::OpenedArray => {
                self.nodes.push(Node::Array(ArrayNode::new()));
                Ok(())
            }
            Shift::ClosedObject | Shift::ClosedArray => self.splice(),
            Shift::FinishedKey { span } => {
                let key = self.engine.span_text(span).to_owned();
                self.keys.push(key);
                Ok(())
            }
            Shift::FinishedValue { span } => {
                let payload = self.engine.span_text(span).to_owned();
                self.attach_leaf(Node::String(payload))
            }
        }
    }

    /// Attach a finished string leaf to whatever is on top of the stack.
    fn attach_leaf(&mut self, leaf: Node) -> Result<(), InvalidKeyError> {
        let key = match self.nodes.last_mut() {
            // First node seen; it becomes the root candidate.
            None => {
                self.nodes.push(leaf);
                return Ok(());
            }
            Some(Node::Array(parent)) => {
                parent.add(leaf);
                return Ok(());
            }
            Some(Node::Object(_)) => match self.keys.pop() {
                Some(key) => key,
                // No key announced; park the leaf on the stack.
                None => {
                    self.nodes.push(leaf);
                    return Ok(());
                }
            },
            Some(Node::String(_)) => return Ok(()),
        };
        self.add_to_top(key, leaf)
    }

    /// Merge the just-closed container into its parent.
    fn splice(&mut self) -> Result<(), InvalidKeyError> {
        // A lone node is the root candidate; nothing to merge into.
        if self.nodes.len() < 2 {
            return Ok(());
        }
        let Some(child) = self.nodes.pop() else {
            return Ok(());
        };
        let key = match self.nodes.last_mut() {
            Some(Node::Array(parent)) => {
                parent.add(child);
                return Ok(());
            }
            Some(Node::Object(_)) => match self.keys.pop() {
                Some(key) => key,
                // An unkeyed container inside an object has nowhere to go.
                None => return Ok(()),
            },
            Some(Node::String(_)) | None => return Ok(()),
        };
        self.add_to_top(key, child)
    }

    fn add_to_top(&mut self, key: String, value: Node) -> Result<(), InvalidKeyError> {
        let Some(Node::Object(parent)) = self.nodes.last_mut() else {
            return Ok(());
        };
        parent.add(key, value)
    }
}
