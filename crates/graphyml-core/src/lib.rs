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

//! Core data model for declarative property graph documents.
//!
//! A [`Document`] is the root of a parsed graph description: an ordered
//! collection of node entries (identifier plus [`NodeRecord`]) followed by
//! an ordered list of [`RelationshipRecord`]s. Property values are
//! represented by the closed [`Value`] sum type.
//!
//! Two ordering guarantees run through the whole model:
//!
//! - node entries keep the source mapping's insertion order;
//! - property pairs (on records and inside [`Value::Map`]) keep record
//!   order.
//!
//! Converting the same document twice therefore yields byte-identical
//! output downstream.
//!
//! This crate holds no parsing and no rendering: ingestion lives in
//! `graphyml-yaml`, statement generation in `graphyml-cypher`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod document;
mod record;
mod value;

pub use document::Document;
pub use record::{NodeRecord, RelationshipRecord};
pub use value::Value;
