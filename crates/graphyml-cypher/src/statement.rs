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

//! Cypher statement and script types.

use serde::{Deserialize, Serialize};
use std::io::Write;

/// The type of Cypher statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementType {
    /// Node creation.
    CreateNode,
    /// Relationship creation.
    CreateRelationship,
}

/// A single Cypher statement.
///
/// One line of creation-instruction text, without the terminating
/// semicolon; the script rendering adds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// The Cypher statement text.
    pub text: String,
    /// Type of statement.
    pub statement_type: StatementType,
}

impl Statement {
    /// Create a new statement.
    pub fn new(text: impl Into<String>, statement_type: StatementType) -> Self {
        Self {
            text: text.into(),
            statement_type,
        }
    }

    /// Create a node creation statement.
    pub fn create_node(text: impl Into<String>) -> Self {
        Self::new(text, StatementType::CreateNode)
    }

    /// Create a relationship creation statement.
    pub fn create_relationship(text: impl Into<String>) -> Self {
        Self::new(text, StatementType::CreateRelationship)
    }
}

/// An ordered collection of Cypher statements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// The statements in this script, in output order.
    pub statements: Vec<Statement>,
}

impl Script {
    /// Create a new empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statement to the script.
    pub fn add(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Get all statements of a specific type.
    pub fn statements_of_type(&self, statement_type: StatementType) -> Vec<&Statement> {
        self.statements
            .iter()
            .filter(|s| s.statement_type == statement_type)
            .collect()
    }

    /// Render the script as a single string.
    ///
    /// One statement per line, each line terminated with a semicolon
    /// followed by a newline, in script order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for statement in &self.statements {
            out.push_str(&statement.text);
            out.push_str(";\n");
        }
        out
    }

    /// Stream the script to a writer, byte-identical to [`Script::render`].
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for statement in &self.statements {
            writeln!(writer, "{};", statement.text)?;
        }
        Ok(())
    }

    /// Get the number of statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Check if the script is empty.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl IntoIterator for Script {
    type Item = Statement;
    type IntoIter = std::vec::IntoIter<Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
