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

//! YAML ingestion for graph documents.
//!
//! Parses a YAML description of a property graph into a
//! [`graphyml_core::Document`], preserving mapping insertion order and
//! sequence order so that downstream statement generation is
//! deterministic.
//!
//! # Document Shape
//!
//! ```yaml
//! nodes:
//!   person1:
//!     labels: Person          # or a sequence: [Person, Employee]
//!     name: John Doe
//!     age: 30
//! relationships:
//!   - from: person1
//!     to: company1
//!     type: WORKS_FOR
//!     since: 2015
//! ```
//!
//! Both root keys are optional; unrecognized keys are ignored. Malformed
//! node entries degrade to empty records, and relationship entries
//! missing `from`/`to`/`type` are carried through so the converter can
//! skip them with a diagnostic.
//!
//! # Examples
//!
//! ```
//! use graphyml_yaml::yaml_to_document;
//!
//! let doc = yaml_to_document("nodes:\n  a:\n    labels: Thing\n").unwrap();
//! assert_eq!(doc.nodes.len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
mod from_yaml;

pub use error::YamlError;
pub use from_yaml::{
    from_yaml, from_yaml_value, FromYamlConfig, DEFAULT_MAX_DOCUMENT_SIZE,
    DEFAULT_MAX_NESTING_DEPTH,
};

use graphyml_core::Document;

/// Convert a YAML string to a graph document with default configuration.
pub fn yaml_to_document(yaml: &str) -> Result<Document, YamlError> {
    from_yaml(yaml, &FromYamlConfig::default())
}
