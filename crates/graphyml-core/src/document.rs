// Dweve Graphyml - Declarative property graphs to Cypher
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The root document type.

use crate::record::{NodeRecord, RelationshipRecord};

/// A parsed graph document: node entries and relationship records.
///
/// `nodes` preserves the source mapping's insertion order and
/// `relationships` preserves sequence order; that ordering is a contract
/// depended on by downstream consumers. A document with neither
/// collection is valid and converts to nothing. Nothing here is mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Document {
    /// Node entries as `(identifier, record)` pairs, in document order.
    pub nodes: Vec<(String, NodeRecord)>,
    /// Relationship records in document order.
    pub relationships: Vec<RelationshipRecord>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node entry.
    pub fn push_node(&mut self, id: impl Into<String>, record: NodeRecord) {
        self.nodes.push((id.into(), record));
    }

    /// Append a relationship record.
    pub fn push_relationship(&mut self, record: RelationshipRecord) {
        self.relationships.push(record);
    }

    /// Check whether the document declares no nodes and no relationships.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.relationships.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert!(doc.nodes.is_empty());
        assert!(doc.relationships.is_empty());
    }

    #[test]
    fn test_push_preserves_order() {
        let mut doc = Document::new();
        doc.push_node("b", NodeRecord::new());
        doc.push_node("a", NodeRecord::new());
        doc.push_relationship(RelationshipRecord::new("b", "a", "KNOWS"));

        assert_eq!(doc.nodes[0].0, "b");
        assert_eq!(doc.nodes[1].0, "a");
        assert_eq!(doc.relationships.len(), 1);
        assert!(!doc.is_empty());
    }
}
