//! Encoded payload: a report document paired with its wire form
//!
//! Pairs the JSON document with its serialized bytes and a cached byte
//! length, so strategies can check the size budget in O(1) and defer the
//! full re-encode to once per pass.

use serde::Serialize;
use serde_json::Value;

/// A report document together with its current serialization.
///
/// The cached size always matches the serialized bytes after [`encode`]
/// or [`replace`]. A strategy that mutates the document through [`data`]
/// must call [`encode`] before returning; in between it may keep the
/// size accurate with [`decrease_size`] when it knows the exact byte
/// delta of an edit.
///
/// [`encode`]: EncodedPayload::encode
/// [`replace`]: EncodedPayload::replace
/// [`data`]: EncodedPayload::data
/// [`decrease_size`]: EncodedPayload::decrease_size
#[derive(Debug, Clone)]
pub struct EncodedPayload {
    document: Value,
    serialized: Vec<u8>,
    size: usize,
}

impl EncodedPayload {
    /// Create a payload from a document, encoding it immediately.
    pub fn new(document: Value) -> Self {
        let mut payload = Self {
            document,
            serialized: Vec::new(),
            size: 0,
        };
        payload.encode();
        payload
    }

    /// Create a payload from any serializable value.
    ///
    /// Values that cannot be represented as JSON degrade to `null`
    /// instead of failing; the report layer relies on this.
    pub fn from_serialize<T: Serialize>(value: &T) -> Self {
        let document = serde_json::to_value(value).unwrap_or(Value::Null);
        Self::new(document)
    }

    /// Re-serialize the current document, refreshing bytes and size together.
    pub fn encode(&mut self) {
        // A `Value` tree always serializes; the fallback keeps the
        // refresh-together invariant even if that ever changes.
        self.serialized = serde_json::to_vec(&self.document).unwrap_or_else(|_| b"null".to_vec());
        self.size = self.serialized.len();
    }

    /// Replace the document and re-encode.
    pub fn replace(&mut self, document: Value) {
        self.document = document;
        self.encode();
    }

    /// Current byte length of the serialized form. O(1).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Lower the cached size by `n` bytes without re-serializing.
    ///
    /// For strategies that truncate in place and can compute the exact
    /// byte delta, keeping budget checks accurate between edits without
    /// an O(document) re-encode after each one.
    pub fn decrease_size(&mut self, n: usize) {
        self.size = self.size.saturating_sub(n);
    }

    /// Read-only access to the document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Mutable access to the document for strategies to edit directly.
    pub fn data(&mut self) -> &mut Value {
        &mut self.document
    }

    /// The serialized bytes as of the last encode.
    pub fn bytes(&self) -> &[u8] {
        &self.serialized
    }

    /// Consume the payload, handing the serialized bytes to transport.
    pub fn into_bytes(self) -> Vec<u8> {
        self.serialized
    }
}
