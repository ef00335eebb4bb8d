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

//! Graphyml CLI library.
//!
//! Implements the `graphyml` command: convert a YAML property graph
//! description into a file of Cypher `CREATE` statements, one per line.
//!
//! ```bash
//! # Write graph.cypher next to the input
//! graphyml graph.yaml
//!
//! # Choose the output path and print conversion details
//! graphyml graph.yaml -o import.cypher --verbose
//! ```
//!
//! Relationship records missing `from`/`to`/`type` are skipped with a
//! warning on stderr; all other failures exit non-zero with an
//! `Error: ` message.

pub mod commands;
pub mod error;
