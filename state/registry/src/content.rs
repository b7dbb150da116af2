//! Public token content
//!
//! Descriptive metadata keyed by token commitment. Publishing is an
//! unconditioned public write: anyone may publish content for any
//! commitment, including ones that do not exist yet. That openness is
//! deliberate and covered by an integration test.

use obscura_commitment::{ContentData, Digest, Scalar};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Published (content, edition) pair for a token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub data: ContentData,
    pub edition: Scalar,
}

/// Mapping from token commitment to published content
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRegistry {
    contents: HashMap<Digest, ContentRecord>,
}

impl ContentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Write (or overwrite) the content record for a commitment
    pub fn publish(&mut self, commitment: Digest, data: ContentData, edition: Scalar) {
        self.contents.insert(commitment, ContentRecord { data, edition });
    }

    /// Published record for a commitment, if any
    pub fn get(&self, commitment: &Digest) -> Option<&ContentRecord> {
        self.contents.get(commitment)
    }

    /// Number of published records
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Whether nothing has been published
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
