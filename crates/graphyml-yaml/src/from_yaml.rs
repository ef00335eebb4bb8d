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

//! YAML to graph document conversion.

use crate::error::YamlError;
use graphyml_core::{Document, NodeRecord, RelationshipRecord, Value};
use serde_yaml::{Mapping, Value as YamlValue};

/// Default maximum document size: 500 MB.
///
/// Graph descriptions can be large when generated from exports or
/// infrastructure inventories. This high default allows substantial files
/// while still providing DoS protection.
pub const DEFAULT_MAX_DOCUMENT_SIZE: usize = 500 * 1024 * 1024; // 500 MB

/// Default maximum value nesting depth: 1,000 levels.
///
/// Deep enough for any realistic property tree while keeping the
/// recursive conversion and the downstream recursive formatter
/// comfortably within stack bounds.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 1_000;

/// Configuration for YAML ingestion.
///
/// # Security Considerations
///
/// The limits protect against Denial of Service attacks through
/// maliciously crafted documents:
///
/// - `max_document_size` prevents memory exhaustion from oversized input
/// - `max_nesting_depth` prevents stack overflow from deeply nested values
///
/// Exceeding either limit is a load failure ([`YamlError`]).
///
/// # Examples
///
/// ```
/// use graphyml_yaml::FromYamlConfig;
///
/// // Conservative limits for untrusted input
/// let config = FromYamlConfig::default()
///     .with_max_document_size(10 * 1024 * 1024) // 10 MB
///     .with_max_nesting_depth(100);
/// ```
#[derive(Debug, Clone)]
pub struct FromYamlConfig {
    /// Maximum allowed document size in bytes (default: 500 MB).
    pub max_document_size: usize,
    /// Maximum allowed value nesting depth (default: 1,000 levels).
    pub max_nesting_depth: usize,
}

impl Default for FromYamlConfig {
    fn default() -> Self {
        Self {
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl FromYamlConfig {
    /// Create a configuration with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum allowed document size in bytes.
    pub fn with_max_document_size(mut self, size: usize) -> Self {
        self.max_document_size = size;
        self
    }

    /// Set the maximum allowed value nesting depth.
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}

/// Convert a YAML source string to a graph [`Document`].
///
/// The recognized root keys are `nodes` (a mapping from node identifier
/// to node record) and `relationships` (a sequence of relationship
/// records); everything else is ignored. Mapping insertion order and
/// sequence order are preserved end to end.
///
/// A root that is not a mapping (including empty input) yields an empty
/// document rather than an error; the document shape is absent-safe.
///
/// # Errors
///
/// Returns a [`YamlError`] if the source exceeds `max_document_size`,
/// cannot be parsed as YAML, or nests values deeper than
/// `max_nesting_depth`.
pub fn from_yaml(yaml: &str, config: &FromYamlConfig) -> Result<Document, YamlError> {
    if yaml.len() > config.max_document_size {
        return Err(YamlError::DocumentTooLarge {
            size: yaml.len(),
            max_size: config.max_document_size,
        });
    }

    if yaml.trim().is_empty() {
        return Ok(Document::new());
    }

    let value: YamlValue = serde_yaml::from_str(yaml)?;
    from_yaml_value(&value, config)
}

/// Convert an already-parsed [`serde_yaml::Value`] to a graph [`Document`].
///
/// # Errors
///
/// Returns [`YamlError::MaxDepthExceeded`] if a property value nests
/// deeper than `max_nesting_depth`.
pub fn from_yaml_value(value: &YamlValue, config: &FromYamlConfig) -> Result<Document, YamlError> {
    let root = match value {
        YamlValue::Mapping(m) => m,
        _ => return Ok(Document::new()),
    };

    let mut doc = Document::new();

    if let Some(YamlValue::Mapping(nodes)) = root.get("nodes") {
        for (key, record) in nodes {
            if let Some(id) = scalar_text(key) {
                doc.push_node(id, node_record(record, config)?);
            }
        }
    }

    if let Some(YamlValue::Sequence(relationships)) = root.get("relationships") {
        for record in relationships {
            doc.push_relationship(relationship_record(record, config)?);
        }
    }

    Ok(doc)
}

/// Render a scalar YAML value as text.
///
/// Returns `None` for null and non-scalar values. Strings pass through
/// unchanged; booleans and numbers use their canonical rendering.
fn scalar_text(value: &YamlValue) -> Option<String> {
    match value {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Bool(b) => Some(b.to_string()),
        YamlValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Build a [`NodeRecord`] from a YAML node entry.
///
/// The reserved `labels` key is normalized into the record's label list;
/// every other key becomes a property, in record order. An entry that is
/// not a mapping degrades to an empty record: there is no malformed-node
/// failure mode.
fn node_record(value: &YamlValue, config: &FromYamlConfig) -> Result<NodeRecord, YamlError> {
    let mapping = match value {
        YamlValue::Mapping(m) => m,
        _ => return Ok(NodeRecord::new()),
    };

    let mut record = NodeRecord::new();
    for (key, entry) in mapping {
        let Some(key) = scalar_text(key) else {
            continue;
        };
        if key == "labels" {
            record.labels = normalize_labels(entry);
        } else {
            record.properties.push((key, property_value(entry, 0, config)?));
        }
    }
    Ok(record)
}

/// Normalize the heterogeneous `labels` field into an ordered label list.
///
/// A single string becomes a one-element list; a sequence contributes
/// each scalar element's rendering in order; a bare scalar contributes
/// its rendering. Null and other shapes yield no labels.
fn normalize_labels(value: &YamlValue) -> Vec<String> {
    match value {
        YamlValue::Sequence(items) => items.iter().filter_map(scalar_text).collect(),
        _ => scalar_text(value).into_iter().collect(),
    }
}

/// Build a [`RelationshipRecord`] from a YAML sequence entry.
///
/// The reserved `from`/`to`/`type` keys populate the endpoints and type;
/// every other key becomes a property, in record order. An entry that is
/// not a mapping degrades to a record missing all three required fields,
/// which the converter will skip with a diagnostic.
fn relationship_record(
    value: &YamlValue,
    config: &FromYamlConfig,
) -> Result<RelationshipRecord, YamlError> {
    let mapping = match value {
        YamlValue::Mapping(m) => m,
        _ => return Ok(RelationshipRecord::default()),
    };

    let mut record = RelationshipRecord::default();
    for (key, entry) in mapping {
        let Some(key) = scalar_text(key) else {
            continue;
        };
        match key.as_str() {
            "from" => record.from = scalar_text(entry),
            "to" => record.to = scalar_text(entry),
            "type" => record.rel_type = scalar_text(entry),
            _ => record.properties.push((key, property_value(entry, 0, config)?)),
        }
    }
    Ok(record)
}

/// Convert a YAML value into a property [`Value`].
///
/// Integers that fit `i64` become [`Value::Int`]; any other numeric
/// becomes [`Value::Float`]. Tagged values, the one YAML shape outside
/// the recognized domain, are carried as [`Value::Other`] with their
/// tag and scalar rendering.
fn property_value(
    value: &YamlValue,
    depth: usize,
    config: &FromYamlConfig,
) -> Result<Value, YamlError> {
    if depth > config.max_nesting_depth {
        return Err(YamlError::MaxDepthExceeded {
            max_depth: config.max_nesting_depth,
        });
    }

    let converted = match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(*b),
        YamlValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        YamlValue::String(s) => Value::String(s.clone()),
        YamlValue::Sequence(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                list.push(property_value(item, depth + 1, config)?);
            }
            Value::List(list)
        }
        YamlValue::Mapping(mapping) => Value::Map(map_entries(mapping, depth + 1, config)?),
        YamlValue::Tagged(tagged) => {
            let rendered = match scalar_text(&tagged.value) {
                Some(text) => format!("{} {}", tagged.tag, text),
                None => tagged.tag.to_string(),
            };
            Value::Other(rendered)
        }
    };
    Ok(converted)
}

/// Convert a YAML mapping into ordered `(key, value)` pairs.
fn map_entries(
    mapping: &Mapping,
    depth: usize,
    config: &FromYamlConfig,
) -> Result<Vec<(String, Value)>, YamlError> {
    let mut entries = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        if let Some(key) = scalar_text(key) {
            entries.push((key, property_value(value, depth, config)?));
        }
    }
    Ok(entries)
}
