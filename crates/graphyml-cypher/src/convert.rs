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

//! Document and entity conversion to Cypher statements.

use graphyml_core::{Document, NodeRecord, RelationshipRecord};
use thiserror::Error;

use crate::format::property_block;
use crate::statement::{Script, Statement};

/// Why a relationship record produced no statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required field(s): {fields}", fields = .missing.join(", "))]
pub struct SkipReason {
    /// The absent or empty required fields, in `from`/`to`/`type` order.
    pub missing: Vec<&'static str>,
}

/// A relationship record omitted from the output, with its position and
/// reason.
///
/// These are aggregated by [`convert_document`] instead of being logged,
/// so callers decide how to surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("relationship #{index} skipped: {reason}")]
pub struct SkippedRelationship {
    /// Zero-based position of the record in the document's relationship
    /// sequence.
    pub index: usize,
    /// Why the record was skipped.
    pub reason: SkipReason,
}

/// The result of converting one document: the statement script plus the
/// relationship records that were skipped.
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    /// All generated statements, in output order.
    pub script: Script,
    /// Skipped relationship records, in document order.
    pub skipped: Vec<SkippedRelationship>,
}

/// Convert one node entry to its creation statement.
///
/// The label suffix concatenates `:label` for every label in declared
/// order; the property block renders every property in record order. The
/// separating space between the label suffix (or identifier) and the
/// property block is always emitted, so a record with no properties
/// produces `CREATE (id )`. This never fails: absent labels and empty
/// property sets degrade to a valid, sparse statement.
///
/// # Examples
///
/// ```
/// use graphyml_core::NodeRecord;
/// use graphyml_cypher::node_statement;
///
/// let record = NodeRecord::new()
///     .with_label("Person")
///     .with_property("name", "John");
/// let stmt = node_statement("p1", &record);
/// assert_eq!(stmt.text, "CREATE (p1:Person {name: 'John'})");
/// ```
pub fn node_statement(id: &str, record: &NodeRecord) -> Statement {
    let label_suffix: String = record
        .labels
        .iter()
        .map(|label| format!(":{}", label))
        .collect();
    let properties = property_block(&record.properties);

    Statement::create_node(format!("CREATE ({}{} {})", id, label_suffix, properties))
}

/// Convert one relationship record to its creation statement, or report
/// why it must be skipped.
///
/// `from`, `to`, and `type` are required; a record where any of them is
/// absent or empty yields a [`SkipReason`] instead of a statement. The
/// space before the property block is always emitted, so a record with
/// no properties produces `[:TYPE ]`.
///
/// # Examples
///
/// ```
/// use graphyml_core::RelationshipRecord;
/// use graphyml_cypher::relationship_statement;
///
/// let record = RelationshipRecord::new("p1", "c1", "KNOWS");
/// let stmt = relationship_statement(&record).unwrap();
/// assert_eq!(stmt.text, "CREATE (p1)-[:KNOWS ]->(c1)");
/// ```
pub fn relationship_statement(record: &RelationshipRecord) -> Result<Statement, SkipReason> {
    let (from, to, rel_type) = match (record.from_id(), record.to_id(), record.type_name()) {
        (Some(from), Some(to), Some(rel_type)) => (from, to, rel_type),
        _ => {
            return Err(SkipReason {
                missing: record.missing_fields(),
            })
        }
    };

    let properties = property_block(&record.properties);
    Ok(Statement::create_relationship(format!(
        "CREATE ({})-[:{} {}]->({})",
        from, rel_type, properties, to
    )))
}

/// Convert a whole document to an ordered statement script.
///
/// Emits every node statement in document order, then every valid
/// relationship statement in document order; that concatenation is a
/// contract depended on by downstream consumers. Invalid relationship
/// records are omitted from the script and collected in
/// [`Conversion::skipped`]; the rest of the document converts
/// uninterrupted. An empty or shapeless document yields an empty script.
///
/// The conversion is a pure, stateless transform: the same document
/// always produces byte-identical output.
pub fn convert_document(doc: &Document) -> Conversion {
    let mut conversion = Conversion::default();

    for (id, record) in &doc.nodes {
        conversion.script.add(node_statement(id, record));
    }

    for (index, record) in doc.relationships.iter().enumerate() {
        match relationship_statement(record) {
            Ok(statement) => conversion.script.add(statement),
            Err(reason) => conversion
                .skipped
                .push(SkippedRelationship { index, reason }),
        }
    }

    conversion
}

/// Convert a document straight to rendered script text, dropping skip
/// diagnostics.
pub fn document_to_cypher(doc: &Document) -> String {
    convert_document(doc).script.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphyml_core::Value;

    #[test]
    fn test_node_with_single_label() {
        let record = NodeRecord::new()
            .with_label("Person")
            .with_property("name", "John")
            .with_property("age", 30);
        assert_eq!(
            node_statement("p1", &record).text,
            "CREATE (p1:Person {name: 'John', age: 30})"
        );
    }

    #[test]
    fn test_node_with_multiple_labels() {
        let record = NodeRecord::new()
            .with_label("Person")
            .with_label("Employee")
            .with_property("name", "John");
        assert_eq!(
            node_statement("p1", &record).text,
            "CREATE (p1:Person:Employee {name: 'John'})"
        );
    }

    #[test]
    fn test_node_without_labels() {
        let record = NodeRecord::new()
            .with_property("name", "John")
            .with_property("age", 30);
        assert_eq!(
            node_statement("p1", &record).text,
            "CREATE (p1 {name: 'John', age: 30})"
        );
    }

    #[test]
    fn test_bare_node_keeps_separating_space() {
        let record = NodeRecord::new();
        assert_eq!(node_statement("p1", &record).text, "CREATE (p1 )");

        let labeled = NodeRecord::new().with_label("Person");
        assert_eq!(node_statement("p1", &labeled).text, "CREATE (p1:Person )");
    }

    #[test]
    fn test_relationship_with_properties() {
        let record = RelationshipRecord::new("p1", "c1", "WORKS_FOR")
            .with_property("since", 2020)
            .with_property("position", "Manager");
        assert_eq!(
            relationship_statement(&record).unwrap().text,
            "CREATE (p1)-[:WORKS_FOR {since: 2020, position: 'Manager'}]->(c1)"
        );
    }

    #[test]
    fn test_relationship_without_properties_keeps_space() {
        let record = RelationshipRecord::new("p1", "c1", "KNOWS");
        assert_eq!(
            relationship_statement(&record).unwrap().text,
            "CREATE (p1)-[:KNOWS ]->(c1)"
        );
    }

    #[test]
    fn test_relationship_missing_field_is_skipped() {
        let record = RelationshipRecord {
            from: Some("p1".to_string()),
            to: None,
            rel_type: Some("KNOWS".to_string()),
            properties: Vec::new(),
        };
        let reason = relationship_statement(&record).unwrap_err();
        assert_eq!(reason.missing, vec!["to"]);
        assert_eq!(reason.to_string(), "missing required field(s): to");
    }

    #[test]
    fn test_relationship_empty_string_is_falsy() {
        let record = RelationshipRecord {
            from: Some(String::new()),
            to: Some("c1".to_string()),
            rel_type: Some("KNOWS".to_string()),
            properties: Vec::new(),
        };
        assert!(relationship_statement(&record).is_err());
    }

    #[test]
    fn test_convert_empty_document() {
        let conversion = convert_document(&Document::new());
        assert!(conversion.script.is_empty());
        assert!(conversion.skipped.is_empty());
    }

    #[test]
    fn test_convert_document_ordering_and_skips() {
        let mut doc = Document::new();
        doc.push_node(
            "person1",
            NodeRecord::new()
                .with_label("Person")
                .with_property("name", "John Doe")
                .with_property("age", 30)
                .with_property("active", true),
        );
        doc.push_node(
            "company1",
            NodeRecord::new()
                .with_label("Company")
                .with_label("Organization")
                .with_property("name", "ACME Inc.")
                .with_property("founded", 1999),
        );
        doc.push_relationship(RelationshipRecord {
            from: Some("person1".to_string()),
            to: None,
            rel_type: Some("KNOWS".to_string()),
            properties: Vec::new(),
        });
        doc.push_relationship(
            RelationshipRecord::new("person1", "company1", "WORKS_FOR")
                .with_property("since", 2015)
                .with_property("position", "Developer"),
        );

        let conversion = convert_document(&doc);
        let texts: Vec<&str> = conversion
            .script
            .statements
            .iter()
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec![
                "CREATE (person1:Person {name: 'John Doe', age: 30, active: true})",
                "CREATE (company1:Company:Organization {name: 'ACME Inc.', founded: 1999})",
                "CREATE (person1)-[:WORKS_FOR {since: 2015, position: 'Developer'}]->(company1)",
            ]
        );

        assert_eq!(conversion.skipped.len(), 1);
        let skip = &conversion.skipped[0];
        assert_eq!(skip.index, 0);
        assert_eq!(
            skip.to_string(),
            "relationship #0 skipped: missing required field(s): to"
        );
    }

    #[test]
    fn test_skipped_record_equivalent_to_absent_record() {
        let mut with_invalid = Document::new();
        with_invalid.push_node("a", NodeRecord::new().with_label("Thing"));
        with_invalid.push_relationship(RelationshipRecord::new("a", "a", "SELF"));
        with_invalid.push_relationship(RelationshipRecord::default());
        with_invalid.push_relationship(
            RelationshipRecord::new("a", "a", "AGAIN").with_property("n", 1),
        );

        let mut without = Document::new();
        without.push_node("a", NodeRecord::new().with_label("Thing"));
        without.push_relationship(RelationshipRecord::new("a", "a", "SELF"));
        without
            .push_relationship(RelationshipRecord::new("a", "a", "AGAIN").with_property("n", 1));

        assert_eq!(
            convert_document(&with_invalid).script,
            convert_document(&without).script
        );
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let mut doc = Document::new();
        doc.push_node(
            "n1",
            NodeRecord::new().with_property(
                "nested",
                Value::Map(vec![
                    ("a".to_string(), Value::Int(1)),
                    ("b".to_string(), Value::List(vec![Value::Int(1), Value::Int(2)])),
                ]),
            ),
        );
        doc.push_relationship(RelationshipRecord::new("n1", "n1", "LOOP"));

        assert_eq!(document_to_cypher(&doc), document_to_cypher(&doc));
    }
}
