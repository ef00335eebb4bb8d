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

//! End-to-end conversion tests from YAML source to rendered Cypher.

use graphyml_cypher::{convert_document, document_to_cypher, StatementType};
use graphyml_yaml::yaml_to_document;

const SAMPLE: &str = r#"
nodes:
  person1:
    labels: Person
    name: John Doe
    age: 30
    active: true
  company1:
    labels: [Company, Organization]
    name: ACME Inc.
    founded: 1999
relationships:
  - from: person1
    to: company1
    type: WORKS_FOR
    since: 2015
    position: Developer
"#;

#[test]
fn converts_sample_document_in_order() {
    let doc = yaml_to_document(SAMPLE).unwrap();
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
    assert!(conversion.skipped.is_empty());
}

#[test]
fn empty_documents_yield_empty_scripts() {
    for source in ["", "{}", "nodes: {}\nrelationships: []\n", "other: 1\n"] {
        let doc = yaml_to_document(source).unwrap();
        assert!(convert_document(&doc).script.is_empty(), "for {:?}", source);
    }
}

#[test]
fn invalid_relationships_are_pruned_not_fatal() {
    let doc = yaml_to_document(
        r#"
nodes:
  a: {labels: Thing}
  b: {labels: Thing}
relationships:
  - from: a
    to: b
    type: LINKS
  - from: a
    type: BROKEN
  - to: b
    type: BROKEN
  - from: a
    to: b
"#,
    )
    .unwrap();

    let conversion = convert_document(&doc);
    assert_eq!(conversion.script.len(), 3); // 2 nodes + 1 valid relationship
    assert_eq!(conversion.skipped.len(), 3);
    assert_eq!(conversion.skipped[0].index, 1);
    assert_eq!(conversion.skipped[0].reason.missing, vec!["to"]);
    assert_eq!(conversion.skipped[1].reason.missing, vec!["from"]);
    assert_eq!(conversion.skipped[2].reason.missing, vec!["type"]);
}

#[test]
fn skipped_records_leave_remaining_output_unchanged() {
    let with_invalid = yaml_to_document(
        r#"
nodes:
  a: {}
relationships:
  - {from: a, to: a, type: FIRST}
  - {from: a, type: BROKEN}
  - {from: a, to: a, type: SECOND}
"#,
    )
    .unwrap();
    let without_invalid = yaml_to_document(
        r#"
nodes:
  a: {}
relationships:
  - {from: a, to: a, type: FIRST}
  - {from: a, to: a, type: SECOND}
"#,
    )
    .unwrap();

    assert_eq!(
        document_to_cypher(&with_invalid),
        document_to_cypher(&without_invalid)
    );
}

#[test]
fn complex_graph_statement_count_and_termination() {
    // 4 nodes and 7 relationship entries, two of them invalid.
    let doc = yaml_to_document(
        r#"
nodes:
  person1: {labels: Person, name: Alice}
  person2: {labels: Person, name: Bob}
  company1: {labels: [Company, Organization], name: ACME Inc.}
  product1: {labels: Product, name: Widget}
relationships:
  - {from: person1, to: person2, type: KNOWS}
  - {from: person1, to: company1, type: WORKS_FOR, since: 2015}
  - {from: person2, to: company1, type: WORKS_FOR, since: 2018}
  - {from: company1, to: product1, type: PRODUCES}
  - {from: person1, to: product1, type: WORKS_ON}
  - {from: person2, type: WORKS_ON}
  - {to: product1, type: PART_OF}
"#,
    )
    .unwrap();

    let conversion = convert_document(&doc);
    assert_eq!(
        conversion
            .script
            .statements_of_type(StatementType::CreateNode)
            .len(),
        4
    );
    assert_eq!(
        conversion
            .script
            .statements_of_type(StatementType::CreateRelationship)
            .len(),
        5
    );
    assert_eq!(conversion.skipped.len(), 2);

    let rendered = conversion.script.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 9);
    assert!(lines.iter().all(|line| line.ends_with(';')));
}

#[test]
fn conversion_is_idempotent() {
    let doc = yaml_to_document(SAMPLE).unwrap();
    let first = document_to_cypher(&doc);
    let second = document_to_cypher(&doc);
    assert_eq!(first, second);

    // Re-parsing the same source is also byte-identical.
    let reparsed = yaml_to_document(SAMPLE).unwrap();
    assert_eq!(first, document_to_cypher(&reparsed));
}

#[test]
fn quotes_inside_strings_are_escaped_in_output() {
    let doc = yaml_to_document(
        r#"
nodes:
  b1:
    labels: Book
    title: "O'Reilly's Guide"
    subtitle: 'say "hello"'
"#,
    )
    .unwrap();

    let rendered = document_to_cypher(&doc);
    assert!(rendered.contains(r"title: 'O\'Reilly\'s Guide'"));
    assert!(rendered.contains(r#"subtitle: 'say "hello"'"#));
}

#[test]
fn nested_property_values_render_recursively() {
    let doc = yaml_to_document(
        r#"
nodes:
  n1:
    meta:
      a: 1
      b: [1, 2]
"#,
    )
    .unwrap();

    assert_eq!(
        document_to_cypher(&doc),
        "CREATE (n1 {meta: {a: 1, b: [1, 2]}});\n"
    );
}
