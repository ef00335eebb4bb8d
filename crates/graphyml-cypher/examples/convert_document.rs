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

//! Example demonstrating document construction and Cypher conversion.

use graphyml_core::{Document, NodeRecord, RelationshipRecord, Value};
use graphyml_cypher::convert_document;

fn main() {
    println!("=== Document Conversion Examples ===\n");

    // Example 1: A small graph built with the fluent constructors
    println!("1. Nodes and a relationship:");
    let mut doc = Document::new();
    doc.push_node(
        "person1",
        NodeRecord::new()
            .with_label("Person")
            .with_property("name", "John Doe")
            .with_property("age", 30),
    );
    doc.push_node(
        "company1",
        NodeRecord::new()
            .with_label("Company")
            .with_label("Organization")
            .with_property("name", "ACME Inc."),
    );
    doc.push_relationship(
        RelationshipRecord::new("person1", "company1", "WORKS_FOR").with_property("since", 2015),
    );

    let conversion = convert_document(&doc);
    print!("{}", conversion.script.render());
    println!();

    // Example 2: Nested property values
    println!("2. Nested property values:");
    let mut doc = Document::new();
    doc.push_node(
        "server1",
        NodeRecord::new().with_label("Server").with_property(
            "config",
            Value::Map(vec![
                ("cores".to_string(), Value::Int(8)),
                (
                    "tags".to_string(),
                    Value::List(vec![
                        Value::String("prod".to_string()),
                        Value::String("eu-west".to_string()),
                    ]),
                ),
            ]),
        ),
    );
    print!("{}", convert_document(&doc).script.render());
    println!();

    // Example 3: Invalid relationships are skipped with a diagnostic
    println!("3. Skip diagnostics:");
    let mut doc = Document::new();
    doc.push_node("a", NodeRecord::new().with_label("Thing"));
    doc.push_relationship(RelationshipRecord::new("a", "a", "SELF"));
    doc.push_relationship(RelationshipRecord {
        from: Some("a".to_string()),
        ..Default::default()
    });

    let conversion = convert_document(&doc);
    print!("{}", conversion.script.render());
    for skip in &conversion.skipped {
        println!("   skipped: {}", skip);
    }
}
