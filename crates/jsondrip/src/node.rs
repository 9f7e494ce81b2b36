//! The document tree: node variants, gated construction, structural
//! equality, and the pretty printer.
//!
//! Scalars are always strings in this dialect. Arrays compare positionally.
//! Objects keep their pairs in insertion order (duplicate keys included) for
//! rendering, while equality and hashing see only a key → value → count
//! frequency structure, so neither insertion order nor key order can
//! distinguish two objects.
//!
//! # Examples
//!
//! ```
//! use jsondrip::{Node, ObjectNode};
//!
//! let mut object = ObjectNode::new();
//! object.add("name", "value")?;
//! let root = Node::from(object);
//! assert_eq!(root.render(), "{\n  \"name\":\"value\"\n}");
//! # Ok::<(), jsondrip::InvalidKeyError>(())
//! ```

use std::{
    collections::HashMap,
    fmt,
    hash::{DefaultHasher, Hash, Hasher},
};

use crate::error::InvalidKeyError;

/// A parsed document node.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    /// A quoted scalar.
    String(String),
    /// An ordered sequence of nodes.
    Array(ArrayNode),
    /// A sequence of key/value pairs.
    Object(ObjectNode),
}

impl Node {
    /// Returns `true` if the node is [`String`].
    ///
    /// [`String`]: Node::String
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondrip::{ArrayNode, Node};
    ///
    /// assert!(Node::from("x").is_string());
    /// assert!(!Node::from(ArrayNode::new()).is_string());
    /// ```
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the node is [`Array`].
    ///
    /// [`Array`]: Node::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the node is [`Object`].
    ///
    /// [`Object`]: Node::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Borrows the payload if the node is [`String`].
    ///
    /// [`String`]: Node::String
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondrip::Node;
    ///
    /// assert_eq!(Node::from("x").as_string(), Some("x"));
    /// ```
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(payload) => Some(payload),
            _ => None,
        }
    }

    /// Borrows the array if the node is [`Array`].
    ///
    /// [`Array`]: Node::Array
    #[must_use]
    pub fn as_array(&self) -> Option<&ArrayNode> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Borrows the object if the node is [`Object`].
    ///
    /// [`Object`]: Node::Object
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectNode> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Pretty-prints the node.
    ///
    /// Containers open with their delimiter and a newline, indent entries by
    /// two spaces per nesting level, and close on their own line at the
    /// enclosing indent. String values in an object stay inline with their
    /// key; container values start on the following line. Empty containers
    /// render as `"{\n}"` and `"[\n]"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondrip::{Node, ObjectNode};
    ///
    /// assert_eq!(Node::from(ObjectNode::new()).render(), "{\n}");
    /// assert_eq!(Node::from("x").render(), "\"x\"");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_pretty<W: fmt::Write>(&self, w: &mut W, depth: usize) -> fmt::Result {
        match self {
            Self::String(payload) => write!(w, "\"{payload}\""),
            Self::Array(array) => array.write_pretty(w, depth),
            Self::Object(object) => object.write_pretty(w, depth),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_pretty(f, 0)
    }
}

impl From<String> for Node {
    fn from(payload: String) -> Self {
        Self::String(payload)
    }
}

impl From<&str> for Node {
    fn from(payload: &str) -> Self {
        Self::String(payload.to_owned())
    }
}

impl From<ArrayNode> for Node {
    fn from(array: ArrayNode) -> Self {
        Self::Array(array)
    }
}

impl From<ObjectNode> for Node {
    fn from(object: ObjectNode) -> Self {
        Self::Object(object)
    }
}

/// An array node: an ordered, append-only sequence.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ArrayNode {
    items: Vec<Node>,
}

impl ArrayNode {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value`. Never fails.
    pub fn add(&mut self, value: impl Into<Node>) {
        self.items.push(value.into());
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows the elements in order.
    #[must_use]
    pub fn items(&self) -> &[Node] {
        &self.items
    }

    /// Pretty-prints the array; see [`Node::render`].
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_pretty<W: fmt::Write>(&self, w: &mut W, depth: usize) -> fmt::Result {
        w.write_str("[\n")?;
        for (index, item) in self.items.iter().enumerate() {
            indent(w, depth + 1)?;
            item.write_pretty(w, depth + 1)?;
            if index + 1 < self.items.len() {
                w.write_str(",")?;
            }
            w.write_str("\n")?;
        }
        indent(w, depth)?;
        w.write_str("]")
    }
}

impl fmt::Display for ArrayNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_pretty(f, 0)
    }
}

/// An object node: insertion-ordered key/value pairs behind a gated [`add`].
///
/// Duplicate keys are representable; rendering walks the pairs in insertion
/// order, while equality and hashing do not observe order at all.
///
/// [`add`]: ObjectNode::add
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Default)]
pub struct ObjectNode {
    entries: Vec<(String, Node)>,
}

impl ObjectNode {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `value` under `key`.
    ///
    /// The gate here is independent of the streaming key scanner and more
    /// lenient in one direction: a key containing a space anywhere is
    /// admitted wholesale, so `"What is this?"` passes while `"Test?"` does
    /// not.
    ///
    /// # Errors
    ///
    /// Rejects keys that are empty, do not start with a letter, or mix
    /// non-alphanumeric characters without containing a space.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondrip::ObjectNode;
    ///
    /// let mut object = ObjectNode::new();
    /// object.add("Some Name", "v")?;
    /// assert!(object.add("1name", "v").is_err());
    /// # Ok::<(), jsondrip::InvalidKeyError>(())
    /// ```
    pub fn add(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Node>,
    ) -> Result<(), InvalidKeyError> {
        let key = key.into();
        if !admissible_key(&key) {
            return Err(InvalidKeyError { key });
        }
        self.entries.push((key, value.into()));
        Ok(())
    }

    /// Number of pairs, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the object holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrows the pairs in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[(String, Node)] {
        &self.entries
    }

    /// First value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    /// Pretty-prints the object; see [`Node::render`].
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Key → value → occurrence-count view used by equality and hashing.
    fn pair_frequencies(&self) -> HashMap<&str, HashMap<&Node, usize>> {
        let mut frequencies: HashMap<&str, HashMap<&Node, usize>> = HashMap::new();
        for (key, value) in &self.entries {
            *frequencies
                .entry(key.as_str())
                .or_default()
                .entry(value)
                .or_insert(0) += 1;
        }
        frequencies
    }

    fn write_pretty<W: fmt::Write>(&self, w: &mut W, depth: usize) -> fmt::Result {
        w.write_str("{\n")?;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            indent(w, depth + 1)?;
            write!(w, "\"{key}\":")?;
            if !value.is_string() {
                w.write_str("\n")?;
                indent(w, depth + 1)?;
            }
            value.write_pretty(w, depth + 1)?;
            if index + 1 < self.entries.len() {
                w.write_str(",")?;
            }
            w.write_str("\n")?;
        }
        indent(w, depth)?;
        w.write_str("}")
    }
}

impl fmt::Display for ObjectNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_pretty(f, 0)
    }
}

impl PartialEq for ObjectNode {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.pair_frequencies() == other.pair_frequencies()
    }
}

impl Eq for ObjectNode {}

impl Hash for ObjectNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Commutative digest; must agree with the frequency-structure
        // equality above, so insertion order cannot leak in.
        let mut digest: u64 = 0;
        for (key, values) in self.pair_frequencies() {
            let mut inner: u64 = 0;
            for (value, count) in values {
                inner = inner.wrapping_add(single_hash(value) ^ count as u64);
            }
            digest = digest.wrapping_add(single_hash(key) ^ inner);
        }
        state.write_u64(digest);
    }
}

fn single_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn indent<W: fmt::Write>(w: &mut W, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        w.write_str("  ")?;
    }
    Ok(())
}

/// The construction-time admission gate.
fn admissible_key(key: &str) -> bool {
    let Some(first) = key.chars().next() else {
        return false;
    };
    first.is_alphabetic() && (key.chars().all(char::is_alphanumeric) || key.contains(' '))
}
