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

//! Value rendering for Cypher literals.
//!
//! This module is the sole home of value-encoding rules; every other
//! component calls it for any value it must render.

use graphyml_core::Value;

/// Render a property value as a Cypher literal.
///
/// Total over the value domain: this function never fails. The rules,
/// by variant:
///
/// 1. Strings are single-quoted; each embedded `'` becomes `\'`. That is
///    the only escape applied: backslashes and double quotes pass
///    through untouched.
/// 2. Null renders as `null`.
/// 3. Booleans render as `true` / `false`.
/// 4. Numbers use their canonical decimal rendering, with no forced
///    trailing zeros.
/// 5. Lists render as `[a, b, ...]`, recursively.
/// 6. Maps render as `{key: value, ...}` with unquoted keys in document
///    order, recursively.
/// 7. Anything else is single-quoted verbatim, with no escaping.
///
/// # Examples
///
/// ```
/// use graphyml_core::Value;
/// use graphyml_cypher::cypher_literal;
///
/// assert_eq!(cypher_literal(&Value::String("It's".into())), r"'It\'s'");
/// assert_eq!(cypher_literal(&Value::Int(42)), "42");
/// assert_eq!(cypher_literal(&Value::Null), "null");
/// ```
pub fn cypher_literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s.replace('\'', "\\'")),
        Value::Null => "null".to_string(),
        Value::Bool(b) => if *b { "true" } else { "false" }.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::List(items) => {
            let inner: Vec<String> = items.iter().map(cypher_literal).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Map(entries) => {
            let pairs: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("{}: {}", k, cypher_literal(v)))
                .collect();
            format!("{{{}}}", pairs.join(", "))
        }
        Value::Other(text) => format!("'{}'", text),
    }
}

/// Render an ordered property set as a Cypher property block.
///
/// An empty set renders as the empty string; otherwise
/// `{key: value, ...}` in record order.
pub fn property_block(properties: &[(String, Value)]) -> String {
    if properties.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = properties
        .iter()
        .map(|(k, v)| format!("{}: {}", k, cypher_literal(v)))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}
