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

//! Node and relationship records.

use crate::value::Value;

/// One graph vertex definition: zero or more labels plus properties.
///
/// The heterogeneous `labels` source form (a single string or a sequence
/// of strings) is normalized into an ordered `Vec<String>` at the
/// ingestion boundary, so no downstream code branches on its shape.
/// Properties keep record order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeRecord {
    /// Labels in declared order. May be empty.
    pub labels: Vec<String>,
    /// Properties in record order.
    pub properties: Vec<(String, Value)>,
}

impl NodeRecord {
    /// Create an empty node record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label to the record.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Add a property to the record.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }
}

/// One graph edge definition: endpoints, type, and properties.
///
/// The three required fields are optional in the model so that validation
/// (and the skip-with-diagnostic path) stays in the converter; a record
/// missing any of them produces no statement. Empty strings count as
/// missing.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RelationshipRecord {
    /// Source node identifier.
    pub from: Option<String>,
    /// Target node identifier.
    pub to: Option<String>,
    /// Relationship type name.
    pub rel_type: Option<String>,
    /// Properties in record order.
    pub properties: Vec<(String, Value)>,
}

impl RelationshipRecord {
    /// Create a relationship record with all three required fields set.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        rel_type: impl Into<String>,
    ) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
            rel_type: Some(rel_type.into()),
            properties: Vec::new(),
        }
    }

    /// Add a property to the record.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    /// Source identifier, if present and non-empty.
    pub fn from_id(&self) -> Option<&str> {
        self.from.as_deref().filter(|s| !s.is_empty())
    }

    /// Target identifier, if present and non-empty.
    pub fn to_id(&self) -> Option<&str> {
        self.to.as_deref().filter(|s| !s.is_empty())
    }

    /// Relationship type name, if present and non-empty.
    pub fn type_name(&self) -> Option<&str> {
        self.rel_type.as_deref().filter(|s| !s.is_empty())
    }

    /// Required fields that are absent or empty, in the fixed order
    /// `from`, `to`, `type`.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.from_id().is_none() {
            missing.push("from");
        }
        if self.to_id().is_none() {
            missing.push("to");
        }
        if self.type_name().is_none() {
            missing.push("type");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_record_builders() {
        let record = NodeRecord::new()
            .with_label("Person")
            .with_label("Employee")
            .with_property("name", "John")
            .with_property("age", 30i64);

        assert_eq!(record.labels, vec!["Person", "Employee"]);
        assert_eq!(record.properties.len(), 2);
        assert_eq!(record.properties[0].0, "name");
        assert_eq!(record.properties[1].1, Value::Int(30));
    }

    #[test]
    fn test_empty_node_record() {
        let record = NodeRecord::new();
        assert!(record.labels.is_empty());
        assert!(record.properties.is_empty());
    }

    #[test]
    fn test_relationship_record_complete() {
        let record = RelationshipRecord::new("p1", "c1", "WORKS_FOR").with_property("since", 2020);

        assert_eq!(record.from_id(), Some("p1"));
        assert_eq!(record.to_id(), Some("c1"));
        assert_eq!(record.type_name(), Some("WORKS_FOR"));
        assert!(record.missing_fields().is_empty());
    }

    #[test]
    fn test_missing_fields_order() {
        let record = RelationshipRecord::default();
        assert_eq!(record.missing_fields(), vec!["from", "to", "type"]);

        let record = RelationshipRecord {
            from: Some("p1".to_string()),
            ..Default::default()
        };
        assert_eq!(record.missing_fields(), vec!["to", "type"]);
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let record = RelationshipRecord {
            from: Some("p1".to_string()),
            to: Some(String::new()),
            rel_type: Some("KNOWS".to_string()),
            properties: Vec::new(),
        };
        assert_eq!(record.to_id(), None);
        assert_eq!(record.missing_fields(), vec!["to"]);
    }
}
