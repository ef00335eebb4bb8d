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

//! Cypher statement generation for graph documents.
//!
//! This crate turns a [`graphyml_core::Document`] into an ordered
//! sequence of Cypher `CREATE` statements, one per node and one per
//! valid relationship:
//!
//! ```cypher
//! CREATE (person1:Person {name: 'John Doe', age: 30});
//! CREATE (company1:Company:Organization {name: 'ACME Inc.'});
//! CREATE (person1)-[:WORKS_FOR {since: 2015}]->(company1);
//! ```
//!
//! # Structure
//!
//! - [`cypher_literal`] / [`property_block`] render property values;
//!   this is the sole home of value-encoding rules.
//! - [`node_statement`] and [`relationship_statement`] convert one
//!   record each; relationship conversion returns a per-record result
//!   (statement or [`SkipReason`]) instead of failing.
//! - [`convert_document`] walks a document and produces a
//!   [`Conversion`]: the [`Script`] plus the list of
//!   [`SkippedRelationship`] diagnostics.
//!
//! # Guarantees
//!
//! - Node statements come first, in document order, followed by valid
//!   relationship statements in document order.
//! - A relationship record missing `from`, `to`, or `type` is skipped
//!   with a diagnostic; everything else converts uninterrupted.
//! - The transform is pure and stateless: no I/O, no retained state,
//!   byte-identical output for identical input. Conversions of separate
//!   documents may run in parallel with no coordination.
//!
//! # Examples
//!
//! ```
//! use graphyml_core::{Document, NodeRecord, RelationshipRecord};
//! use graphyml_cypher::convert_document;
//!
//! let mut doc = Document::new();
//! doc.push_node("p1", NodeRecord::new().with_label("Person"));
//! doc.push_relationship(RelationshipRecord::new("p1", "p1", "KNOWS"));
//!
//! let conversion = convert_document(&doc);
//! assert_eq!(
//!     conversion.script.render(),
//!     "CREATE (p1:Person );\nCREATE (p1)-[:KNOWS ]->(p1);\n"
//! );
//! assert!(conversion.skipped.is_empty());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod convert;
mod format;
mod statement;

pub use convert::{
    convert_document, document_to_cypher, node_statement, relationship_statement, Conversion,
    SkipReason, SkippedRelationship,
};
pub use format::{cypher_literal, property_block};
pub use statement::{Script, Statement, StatementType};
